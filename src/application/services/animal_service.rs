use crate::application::services::pagination::fetch_all_pages;
use crate::error::AppError;
use crate::transport::http_client::PetfinderHttpClient;
use crate::transport::response::ApiResponse;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::info;

/// Read operations over adoptable animals and their taxonomy
#[async_trait]
pub trait AnimalService: Send + Sync {
    /// Returns the collection of possible animal types
    async fn get_animal_types(&self) -> Result<ApiResponse, AppError>;

    /// Returns details on a single animal type
    async fn get_animal_type(&self) -> Result<ApiResponse, AppError>;

    /// Returns the possible breed values for a given animal type
    async fn get_animal_breeds(&self, animal_type: &str) -> Result<ApiResponse, AppError>;

    /// Returns one page of animals matching arbitrary filter parameters
    async fn get_animals(&self, params: &[(String, String)]) -> Result<ApiResponse, AppError>;

    /// Returns every animal matching the filters, stitching all pages into
    /// one payload
    async fn get_animals_paginated(
        &self,
        params: &[(String, String)],
    ) -> Result<ApiResponse, AppError>;

    /// Returns details on a single animal by numeric identifier
    async fn get_animal(&self, animal_id: u64) -> Result<ApiResponse, AppError>;
}

/// Implementation of the animal service
pub struct AnimalServiceImpl<T: PetfinderHttpClient> {
    client: Arc<T>,
}

impl<T: PetfinderHttpClient> AnimalServiceImpl<T> {
    /// Creates a new instance of the animal service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: PetfinderHttpClient + 'static> AnimalService for AnimalServiceImpl<T> {
    async fn get_animal_types(&self) -> Result<ApiResponse, AppError> {
        self.client.request(Method::GET, "types", None, None).await
    }

    async fn get_animal_type(&self) -> Result<ApiResponse, AppError> {
        self.client.request(Method::GET, "type", None, None).await
    }

    async fn get_animal_breeds(&self, animal_type: &str) -> Result<ApiResponse, AppError> {
        let resource = format!("types/{animal_type}/breeds");
        self.client.request(Method::GET, &resource, None, None).await
    }

    async fn get_animals(&self, params: &[(String, String)]) -> Result<ApiResponse, AppError> {
        self.client
            .request(Method::GET, "animals", Some(params), None)
            .await
    }

    async fn get_animals_paginated(
        &self,
        params: &[(String, String)],
    ) -> Result<ApiResponse, AppError> {
        info!("Fetching all animal pages");
        fetch_all_pages(self.client.as_ref(), "animals", "animals", params.to_vec()).await
    }

    async fn get_animal(&self, animal_id: u64) -> Result<ApiResponse, AppError> {
        let resource = format!("animals/{animal_id}");
        self.client.request(Method::GET, &resource, None, None).await
    }
}
