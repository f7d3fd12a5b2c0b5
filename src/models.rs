//! Frontend Models
//!
//! Data structures matching backend response schemas.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Item data structure (matches backend `ItemResponse`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// User list entry (matches backend `UserSummary`, camelCase on the wire)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Full user profile (matches backend `UserResponse`, camelCase on the wire)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetail {
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub wiki_content: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Format a server timestamp as a plain date for display.
///
/// The backend emits RFC 3339 or naive ISO datetimes; unparseable input is
/// shown as-is rather than dropped.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_summary_decodes_camel_case() {
        let json = r#"{"userId":"u1","name":"Alice","bio":null}"#;
        let user: UserSummary = serde_json::from_str(json).unwrap();
        assert_eq!(user.user_id, "u1");
        assert_eq!(user.name, "Alice");
        assert_eq!(user.bio, None);
    }

    #[test]
    fn test_user_detail_optional_fields_default() {
        let json = r#"{"userId":"u2","name":"Bob"}"#;
        let user: UserDetail = serde_json::from_str(json).unwrap();
        assert_eq!(user.wiki_content, None);
        assert_eq!(user.created_at, None);

        let json = r##"{"userId":"u2","name":"Bob","wikiContent":"# Hi","createdAt":"2024-01-02T03:04:05"}"##;
        let user: UserDetail = serde_json::from_str(json).unwrap();
        assert_eq!(user.wiki_content.as_deref(), Some("# Hi"));
        assert_eq!(user.created_at.as_deref(), Some("2024-01-02T03:04:05"));
    }

    #[test]
    fn test_item_decodes_snake_case() {
        let json = r#"{"id":7,"name":"Widget","description":null,"created_at":"2024-05-01T10:00:00","updated_at":"2024-05-01T10:00:00"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.name, "Widget");
        assert_eq!(item.description, None);
    }

    #[test]
    fn test_item_description_key_may_be_omitted() {
        let json = r#"{"id":8,"name":"Gadget","created_at":"2024-05-01T10:00:00","updated_at":"2024-05-01T10:00:00"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.description, None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-05-01T10:00:00"), "2024-05-01");
        assert_eq!(format_date("2024-05-01T10:00:00.123456"), "2024-05-01");
        assert_eq!(format_date("2024-05-01T10:00:00+02:00"), "2024-05-01");
        assert_eq!(format_date("not a date"), "not a date");
    }
}
