//! Free-text adoption match orchestrator
//!
//! Data flows one direction: free text → language model → structured filter
//! parameters → animal search → display summaries. The model is instructed
//! to answer with a bare JSON object; replies that do not parse are surfaced
//! as a distinct error rather than a crash.

use crate::application::models::dog::DogSummary;
use crate::application::services::animal_service::AnimalService;
use crate::application::services::chat::ChatClient;
use crate::error::AppError;
use crate::transport::response::ApiResponse;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

/// System prompt steering the model toward valid search parameters.
const SEARCH_PROMPT: &str = "\
You are an assistant helping users find adoptable dogs using the Petfinder API.
Always include the following parameters in the JSON output:
- status (always set to 'adoptable')

Include the following parameters **only if relevant**:
- breed (if mentioned in the description)
- size (one of 'small', 'medium', 'large', 'extra-large')
- gender (one of 'male', 'female')
- age (one of 'baby', 'young', 'adult', 'senior')
- color (if mentioned in the description)
- coat (one of 'short', 'medium', 'long', 'wire', 'hairless', 'curly')
- location (if mentioned in the description)
- good_with_children (1 or 0)
- good_with_dogs (1 or 0)
- good_with_cats (1 or 0)

Output valid JSON only, with no extra text or commentary.";

/// Models wrap JSON in markdown fences often enough to strip them up front.
static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json)?").expect("valid fence pattern"));

fn user_prompt(description: &str) -> String {
    format!(
        "Translate this description into Petfinder search parameters.\nDescription: \"{description}\""
    )
}

/// Parses the model's reply into query parameters.
///
/// Scalar values are flattened to their query-string form; nested arrays or
/// objects in the reply are dropped with a warning since the listing API has
/// no way to accept them.
pub(crate) fn parse_search_params(reply: &str) -> Result<Vec<(String, String)>, AppError> {
    let cleaned = CODE_FENCE.replace_all(reply, "");
    let value: Value = serde_json::from_str(cleaned.trim())
        .map_err(|e| AppError::MalformedModelOutput(format!("{e}: {}", cleaned.trim())))?;

    let map = value.as_object().ok_or_else(|| {
        AppError::MalformedModelOutput(format!("expected a JSON object, got: {value}"))
    })?;

    let mut params = Vec::with_capacity(map.len());
    for (key, entry) in map {
        match entry {
            Value::String(s) => params.push((key.clone(), s.clone())),
            Value::Number(n) => params.push((key.clone(), n.to_string())),
            Value::Bool(b) => params.push((key.clone(), b.to_string())),
            other => warn!("dropping non-scalar search parameter {key}: {other}"),
        }
    }

    Ok(params)
}

/// Turns a free-text adoption wish into a list of matching dogs.
pub struct DogMatcher<C: ChatClient, A: AnimalService> {
    chat: Arc<C>,
    animals: Arc<A>,
}

impl<C: ChatClient, A: AnimalService> DogMatcher<C, A> {
    /// Creates a new matcher over the given collaborators
    pub fn new(chat: Arc<C>, animals: Arc<A>) -> Self {
        Self { chat, animals }
    }

    /// Translates `description` into search parameters, queries the listing
    /// service for dogs, and shapes the hits for display.
    ///
    /// A Failure from the listing service yields an empty list; the caller
    /// has nothing to show either way. Chat and parse problems are real
    /// errors with distinct variants so they can be reported separately.
    pub async fn find_dogs(&self, description: &str) -> Result<Vec<DogSummary>, AppError> {
        info!("Matching dogs for a {}-char description", description.len());

        let reply = self
            .chat
            .complete(SEARCH_PROMPT, &user_prompt(description))
            .await?;

        let mut query = vec![("type".to_string(), "dog".to_string())];
        query.extend(parse_search_params(&reply)?);

        let response = self.animals.get_animals(&query).await?;

        match response {
            ApiResponse::Success { data } => {
                let animals = data
                    .get("animals")
                    .and_then(Value::as_array)
                    .cloned()
                    .unwrap_or_default();

                info!("✓ {} dogs matched", animals.len());
                Ok(animals.iter().map(DogSummary::from_animal).collect())
            }
            ApiResponse::Failure(failure) => {
                warn!(
                    "Animal search failed with status {}: {}",
                    failure.status_code, failure.message
                );
                Ok(Vec::new())
            }
        }
    }
}
