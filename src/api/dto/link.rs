//! DTOs for link endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to shorten a URL.
///
/// `url` is optional at the serde level so a missing field surfaces as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(required(message = "url is required"))]
    pub url: Option<String>,
}

/// JSON representation of a link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkResponse {
    pub id: i64,
    pub slug: String,
    pub url: String,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            slug: link.slug,
            url: link.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_link_response_shape() {
        let response = LinkResponse::from(Link::new(
            1,
            "aB3xZ".to_string(),
            "https://example.com".to_string(),
        ));

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "id": 1, "slug": "aB3xZ", "url": "https://example.com" })
        );
    }

    #[test]
    fn test_missing_url_fails_validation() {
        let request: CreateLinkRequest = serde_json::from_str("{}").unwrap();
        assert!(request.validate().is_err());

        let request: CreateLinkRequest = serde_json::from_str(r#"{"url": null}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_present_url_passes_validation() {
        let request: CreateLinkRequest =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        assert!(request.validate().is_ok());
    }
}
