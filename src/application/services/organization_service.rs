use crate::application::services::pagination::fetch_all_pages;
use crate::error::AppError;
use crate::transport::http_client::PetfinderHttpClient;
use crate::transport::response::ApiResponse;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::info;

/// Read operations over adoption organizations
#[async_trait]
pub trait OrganizationService: Send + Sync {
    /// Returns one page of organizations matching the given parameters
    async fn get_organizations(
        &self,
        limit: u32,
        params: &[(String, String)],
    ) -> Result<ApiResponse, AppError>;

    /// Returns every organization matching the given parameters, stitching
    /// all pages into one payload
    async fn get_organizations_paginated(
        &self,
        limit: u32,
        params: &[(String, String)],
    ) -> Result<ApiResponse, AppError>;

    /// Returns details on a single organization by identifier
    async fn get_organization(&self, organization_id: &str) -> Result<ApiResponse, AppError>;
}

/// Implementation of the organization service
pub struct OrganizationServiceImpl<T: PetfinderHttpClient> {
    client: Arc<T>,
}

impl<T: PetfinderHttpClient> OrganizationServiceImpl<T> {
    /// Creates a new instance of the organization service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }

    fn with_limit(limit: u32, params: &[(String, String)]) -> Vec<(String, String)> {
        let mut query: Vec<(String, String)> = params.to_vec();
        query.push(("limit".to_string(), limit.to_string()));
        query
    }
}

#[async_trait]
impl<T: PetfinderHttpClient + 'static> OrganizationService for OrganizationServiceImpl<T> {
    async fn get_organizations(
        &self,
        limit: u32,
        params: &[(String, String)],
    ) -> Result<ApiResponse, AppError> {
        let query = Self::with_limit(limit, params);
        self.client
            .request(Method::GET, "organizations", Some(&query), None)
            .await
    }

    async fn get_organizations_paginated(
        &self,
        limit: u32,
        params: &[(String, String)],
    ) -> Result<ApiResponse, AppError> {
        info!("Fetching all organization pages");
        let query = Self::with_limit(limit, params);
        fetch_all_pages(self.client.as_ref(), "organizations", "organizations", query).await
    }

    async fn get_organization(&self, organization_id: &str) -> Result<ApiResponse, AppError> {
        let resource = format!("organizations/{organization_id}");
        self.client.request(Method::GET, &resource, None, None).await
    }
}
