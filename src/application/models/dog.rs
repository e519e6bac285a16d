//! Display shaping for animal records
//!
//! Animal records are opaque JSON from the client's perspective; this module
//! is the one place that reaches into their fields, and every access falls
//! back to a placeholder rather than failing. Shaping never errors.

use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder shown when an animal has no photos
pub const NO_PHOTO_PLACEHOLDER: &str = "/static/assets/no_photo_avail.jpg";

const UNKNOWN: &str = "Unknown";

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Display-ready summary of one adoptable dog
pub struct DogSummary {
    /// Upstream numeric identifier
    pub id: Option<u64>,
    /// Animal name
    pub name: String,
    /// Listing URL on the adoption service
    pub url: Option<String>,
    /// "Primary / Secondary" breed label
    pub breed: String,
    /// Age bracket (baby, young, adult, senior)
    pub age: String,
    /// Gender label
    pub gender: String,
    /// Size bracket
    pub size: String,
    /// Small photo URL, or a placeholder
    pub photo: String,
    /// Free-text description from the listing
    pub description: String,
    /// Contact email, or "Not provided"
    pub contact_email: String,
    /// Contact phone, or "Not provided"
    pub contact_phone: String,
    /// "City, State" label, or "Location unknown"
    pub location: String,
}

fn text_or(animal: &Value, key: &str, fallback: &str) -> String {
    animal
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string()
}

fn breed_label(animal: &Value) -> String {
    let Some(breeds) = animal.get("breeds").filter(|b| !b.is_null()) else {
        return UNKNOWN.to_string();
    };

    let primary = breeds
        .get("primary")
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN);
    let secondary = breeds
        .get("secondary")
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN);

    format!("{primary} / {secondary}")
}

fn location_label(animal: &Value) -> String {
    let Some(address) = animal
        .get("contact")
        .and_then(|contact| contact.get("address"))
        .filter(|a| !a.is_null())
    else {
        return "Location unknown".to_string();
    };

    let city = address.get("city").and_then(Value::as_str).unwrap_or(UNKNOWN);
    let state = address
        .get("state")
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN);

    format!("{city}, {state}")
}

fn photo_url(animal: &Value) -> String {
    animal
        .get("photos")
        .and_then(Value::as_array)
        .and_then(|photos| photos.first())
        .and_then(|photo| photo.get("small"))
        .and_then(Value::as_str)
        .unwrap_or(NO_PHOTO_PLACEHOLDER)
        .to_string()
}

impl DogSummary {
    /// Shapes one opaque animal record into a display summary.
    pub fn from_animal(animal: &Value) -> Self {
        let contact = animal.get("contact").cloned().unwrap_or(Value::Null);

        Self {
            id: animal.get("id").and_then(Value::as_u64),
            name: text_or(animal, "name", UNKNOWN),
            url: animal
                .get("url")
                .and_then(Value::as_str)
                .map(str::to_string),
            breed: breed_label(animal),
            age: text_or(animal, "age", UNKNOWN),
            gender: text_or(animal, "gender", UNKNOWN),
            size: text_or(animal, "size", UNKNOWN),
            photo: photo_url(animal),
            description: text_or(animal, "description", "No description available."),
            contact_email: text_or(&contact, "email", "Not provided"),
            contact_phone: text_or(&contact, "phone", "Not provided"),
            location: location_label(animal),
        }
    }
}
