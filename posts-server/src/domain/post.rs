use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

/// Body of `POST /posts`. Without an `id` the store assigns one.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub id: Option<i64>,
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

/// Body of `PUT /posts/{id}`. All fields are replaced; the path id wins over `id`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub id: Option<i64>,
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeletedPostResponse {
    pub id: i64,
}

/// Post identifier as it arrives in a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostId(pub i64);

impl FromStr for PostId {
    type Err = DomainError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.parse::<i64>()
            .map(PostId)
            .map_err(|_| DomainError::InvalidIdentifier(raw.to_string()))
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Post {
    pub fn from_create(id: i64, req: CreatePostRequest) -> Self {
        Self {
            id,
            user_id: req.user_id,
            title: req.title,
            body: req.body,
        }
    }

    pub fn from_update(id: i64, req: UpdatePostRequest) -> Self {
        Self {
            id,
            user_id: req.user_id,
            title: req.title,
            body: req.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_fields() {
        let post = Post {
            id: 7,
            user_id: 3,
            title: "t".into(),
            body: "b".into(),
        };

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 7, "userId": 3, "title": "t", "body": "b" })
        );
    }

    #[test]
    fn create_request_id_is_optional() {
        let req: CreatePostRequest = serde_json::from_str(
            r#"{ "userId": 1, "title": "Post test", "body": "Test for the POST." }"#,
        )
        .unwrap();

        assert_eq!(req.id, None);
        assert_eq!(req.user_id, 1);
    }

    #[test]
    fn parses_post_ids() {
        assert_eq!("42".parse::<PostId>().unwrap(), PostId(42));
        assert!(matches!(
            "invalidId".parse::<PostId>(),
            Err(DomainError::InvalidIdentifier(raw)) if raw == "invalidId"
        ));
        assert!("4.2".parse::<PostId>().is_err());
        assert!("".parse::<PostId>().is_err());
    }
}
