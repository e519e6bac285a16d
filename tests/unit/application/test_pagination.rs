use async_trait::async_trait;
use petfinder_client::application::services::animal_service::{AnimalService, AnimalServiceImpl};
use petfinder_client::error::AppError;
use petfinder_client::transport::http_client::PetfinderHttpClient;
use petfinder_client::transport::response::{ApiFailure, ApiResponse};
use reqwest::Method;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio_test::block_on;

/// Transport that replays a scripted sequence of responses and records every
/// request it sees.
struct ScriptedClient {
    responses: Mutex<VecDeque<ApiResponse>>,
    requests: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl ScriptedClient {
    fn new(responses: Vec<ApiResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn request_query(&self, index: usize) -> Vec<(String, String)> {
        self.requests.lock().unwrap()[index].1.clone()
    }
}

#[async_trait]
impl PetfinderHttpClient for ScriptedClient {
    async fn request(
        &self,
        _method: Method,
        resource: &str,
        query: Option<&[(String, String)]>,
        _body: Option<Value>,
    ) -> Result<ApiResponse, AppError> {
        self.requests
            .lock()
            .unwrap()
            .push((resource.to_string(), query.map(<[_]>::to_vec).unwrap_or_default()));

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AppError::UnexpectedPayload("script exhausted".to_string()))
    }
}

fn success(body: Value) -> ApiResponse {
    ApiResponse::Success { data: body }
}

fn not_found() -> ApiResponse {
    ApiResponse::Failure(ApiFailure {
        status_code: 404,
        reason: "Not Found".to_string(),
        message: "Requested resource could not be found.".to_string(),
        details: String::new(),
    })
}

#[test]
fn three_pages_accumulate_in_order_with_latest_pagination() {
    let client = Arc::new(ScriptedClient::new(vec![
        success(json!({
            "animals": [{"id": 1}, {"id": 2}],
            "pagination": {"current_page": 1, "total_pages": 3}
        })),
        success(json!({
            "animals": [{"id": 3}, {"id": 4}],
            "pagination": {"current_page": 2, "total_pages": 3}
        })),
        success(json!({
            "animals": [{"id": 5}],
            "pagination": {"current_page": 3, "total_pages": 3}
        })),
    ]));
    let service = AnimalServiceImpl::new(client.clone());

    let response = block_on(service.get_animals_paginated(&[])).unwrap();

    let data = response.data().expect("accumulated result is Success");
    let ids: Vec<u64> = data["animals"]
        .as_array()
        .unwrap()
        .iter()
        .map(|animal| animal["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(
        data["pagination"],
        json!({"current_page": 3, "total_pages": 3})
    );

    // Pages two and three were requested with an explicit page parameter.
    assert_eq!(client.request_count(), 3);
    assert!(client
        .request_query(1)
        .contains(&("page".to_string(), "2".to_string())));
    assert!(client
        .request_query(2)
        .contains(&("page".to_string(), "3".to_string())));
}

#[test]
fn single_page_issues_exactly_one_request() {
    let client = Arc::new(ScriptedClient::new(vec![success(json!({
        "animals": [{"id": 1}],
        "pagination": {"current_page": 1, "total_pages": 1}
    }))]));
    let service = AnimalServiceImpl::new(client.clone());

    let response = block_on(service.get_animals_paginated(&[])).unwrap();

    assert!(response.is_success());
    assert_eq!(client.request_count(), 1);
}

#[test]
fn first_page_failure_is_returned_without_further_requests() {
    let client = Arc::new(ScriptedClient::new(vec![not_found()]));
    let service = AnimalServiceImpl::new(client.clone());

    let response = block_on(service.get_animals_paginated(&[])).unwrap();

    assert!(!response.is_success());
    assert_eq!(response.failure().unwrap().status_code, 404);
    assert_eq!(client.request_count(), 1);
}

#[test]
fn mid_walk_failure_is_a_hard_error() {
    let client = Arc::new(ScriptedClient::new(vec![
        success(json!({
            "animals": [{"id": 1}],
            "pagination": {"current_page": 1, "total_pages": 2}
        })),
        not_found(),
    ]));
    let service = AnimalServiceImpl::new(client.clone());

    let err = block_on(service.get_animals_paginated(&[])).unwrap_err();
    assert!(matches!(err, AppError::UnexpectedPayload(_)));
}

#[test]
fn success_without_pagination_block_is_a_hard_error() {
    let client = Arc::new(ScriptedClient::new(vec![success(json!({
        "animals": []
    }))]));
    let service = AnimalServiceImpl::new(client.clone());

    let err = block_on(service.get_animals_paginated(&[])).unwrap_err();
    assert!(matches!(err, AppError::UnexpectedPayload(_)));
}

#[test]
fn base_params_survive_the_page_walk() {
    let client = Arc::new(ScriptedClient::new(vec![
        success(json!({
            "animals": [{"id": 1}],
            "pagination": {"current_page": 1, "total_pages": 2}
        })),
        success(json!({
            "animals": [{"id": 2}],
            "pagination": {"current_page": 2, "total_pages": 2}
        })),
    ]));
    let service = AnimalServiceImpl::new(client.clone());

    let params = vec![("type".to_string(), "dog".to_string())];
    block_on(service.get_animals_paginated(&params)).unwrap();

    let second = client.request_query(1);
    assert!(second.contains(&("type".to_string(), "dog".to_string())));
    assert!(second.contains(&("page".to_string(), "2".to_string())));
}
