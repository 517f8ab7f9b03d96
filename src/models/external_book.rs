use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Payload for `POST /external-books`. Empty ids or titles count as missing.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewExternalBook {
    pub user_id: i32,
    #[validate(length(min = 1, max = 255, message = "Missing required fields"))]
    pub external_id: String,
    #[validate(length(min = 1, max = 255, message = "Missing required fields"))]
    pub title: String,
    #[serde(default)]
    pub description_or_url: Option<String>,
}

/// A search hit from one of the external catalogs, normalized to a single shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExternalBookRecord {
    pub external_id: String,
    pub title: String,
    pub description_or_url: String,
}

/// Query string of `GET /external-books/search`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExternalBookSearchQuery {
    /// Free-text search forwarded to every catalog.
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_description_is_optional() {
        let book: NewExternalBook = serde_json::from_value(json!({
            "user_id": 1,
            "external_id": "zyTCAlFPjgYC",
            "title": "The Google Story"
        }))
        .unwrap();

        assert!(book.description_or_url.is_none());
        assert!(book.validate().is_ok());
    }

    #[test]
    fn test_empty_external_id_is_rejected() {
        let book = NewExternalBook {
            user_id: 1,
            external_id: "".to_string(),
            title: "The Google Story".to_string(),
            description_or_url: None,
        };
        assert!(book.validate().is_err());
    }
}
