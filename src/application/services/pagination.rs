//! Page stitching for list endpoints
//!
//! List endpoints report their position as 1-indexed `current_page` /
//! `total_pages` integers under a `pagination` key. The helper here issues
//! the first page, then walks forward one page at a time, appending each
//! page's list items onto the accumulated payload and replacing the
//! pagination block with the latest page's block. Pages are fetched strictly
//! sequentially; each request's `page` parameter is derived from the
//! previous position.

use crate::constants::MAX_PAGE_FETCHES;
use crate::error::AppError;
use crate::transport::http_client::PetfinderHttpClient;
use crate::transport::response::ApiResponse;
use reqwest::Method;
use serde_json::Value;
use tracing::warn;

/// Reads the pagination cursor out of a Success payload.
fn read_cursor(data: &Value) -> Result<(u64, u64), AppError> {
    let pagination = data
        .get("pagination")
        .ok_or_else(|| AppError::UnexpectedPayload("missing pagination block".to_string()))?;

    let current = pagination
        .get("current_page")
        .and_then(Value::as_u64)
        .ok_or_else(|| AppError::UnexpectedPayload("missing pagination.current_page".to_string()))?;

    let total = pagination
        .get("total_pages")
        .and_then(Value::as_u64)
        .ok_or_else(|| AppError::UnexpectedPayload("missing pagination.total_pages".to_string()))?;

    Ok((current, total))
}

/// Appends one page's list items onto the accumulated payload.
fn append_items(accumulated: &mut Value, page: &Value, list_key: &str) -> Result<(), AppError> {
    let new_items = page
        .get(list_key)
        .and_then(Value::as_array)
        .cloned()
        .ok_or_else(|| {
            AppError::UnexpectedPayload(format!("page payload is missing the {list_key} list"))
        })?;

    let items = accumulated
        .get_mut(list_key)
        .and_then(Value::as_array_mut)
        .ok_or_else(|| {
            AppError::UnexpectedPayload(format!("accumulated payload lost the {list_key} list"))
        })?;

    items.extend(new_items);
    Ok(())
}

/// Sets or replaces the `page` query parameter.
fn set_page_param(params: &mut Vec<(String, String)>, page: u64) {
    if let Some(entry) = params.iter_mut().find(|(key, _)| key == "page") {
        entry.1 = page.to_string();
    } else {
        params.push(("page".to_string(), page.to_string()));
    }
}

/// Fetches every page of a list resource and stitches the results into one
/// logical Success payload.
///
/// A Failure on the first page is returned immediately with no further
/// requests. A Failure or malformed payload on a later page is a hard error:
/// the accumulated result would be silently incomplete otherwise. The walk
/// stops early at [`MAX_PAGE_FETCHES`] when the upstream never reports the
/// final page.
///
/// # Arguments
/// * `client` - Transport to issue requests through
/// * `resource` - List resource path (e.g. `animals`)
/// * `list_key` - Key of the list inside the payload (e.g. `animals`)
/// * `params` - Base query parameters; `page` is overwritten while walking
pub(crate) async fn fetch_all_pages<T: PetfinderHttpClient + ?Sized>(
    client: &T,
    resource: &str,
    list_key: &str,
    mut params: Vec<(String, String)>,
) -> Result<ApiResponse, AppError> {
    let first = client
        .request(Method::GET, resource, Some(&params), None)
        .await?;

    let mut accumulated = match first {
        ApiResponse::Failure(_) => return Ok(first),
        ApiResponse::Success { data } => data,
    };

    let (mut current_page, total_pages) = read_cursor(&accumulated)?;
    let mut pages_fetched = 1u64;

    while current_page != total_pages {
        if pages_fetched >= MAX_PAGE_FETCHES {
            warn!(
                "stopping pagination of {} after {} pages; upstream never reported the last page",
                resource, pages_fetched
            );
            break;
        }

        current_page += 1;
        set_page_param(&mut params, current_page);

        let next = client
            .request(Method::GET, resource, Some(&params), None)
            .await?;

        let page_data = match next {
            ApiResponse::Success { data } => data,
            ApiResponse::Failure(failure) => {
                return Err(AppError::UnexpectedPayload(format!(
                    "page {} of {} failed with status {}",
                    current_page, resource, failure.status_code
                )));
            }
        };

        append_items(&mut accumulated, &page_data, list_key)?;
        accumulated["pagination"] = page_data["pagination"].clone();

        pages_fetched += 1;
    }

    Ok(ApiResponse::Success { data: accumulated })
}
