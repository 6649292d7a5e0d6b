use crate::domain::{DomainError, Post};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Seed compiled into the binary, used when no `SEED_FILE` is configured.
const DEFAULT_SEED: &str = include_str!("../../data/seed.json");

/// Top-level shape of a seed document. Other collections (e.g. `users`) are ignored.
#[derive(Debug, Deserialize)]
struct SeedData {
    posts: Vec<Post>,
}

pub fn parse_seed(json: &str) -> Result<Vec<Post>, DomainError> {
    let data: SeedData = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(data.posts.len());
    for post in &data.posts {
        if !seen.insert(post.id) {
            return Err(DomainError::SeedError(format!(
                "duplicate post id {} in seed",
                post.id
            )));
        }
    }

    Ok(data.posts)
}

pub fn load_seed(path: Option<&Path>) -> Result<Vec<Post>, DomainError> {
    let posts = match path {
        Some(path) => {
            tracing::info!("Loading seed dataset from {}", path.display());
            let json = std::fs::read_to_string(path).map_err(|e| {
                DomainError::SeedError(format!("cannot read {}: {}", path.display(), e))
            })?;
            parse_seed(&json)?
        }
        None => {
            tracing::info!("Loading embedded seed dataset");
            parse_seed(DEFAULT_SEED)?
        }
    };

    tracing::info!("Seed dataset loaded: {} posts", posts.len());
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_seed_is_valid() {
        let posts = load_seed(None).unwrap();

        assert!(!posts.is_empty());
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[0].user_id, 1);
    }

    #[test]
    fn ignores_other_collections() {
        let posts = parse_seed(
            r#"{
                "users": [{ "id": 1, "name": "Leanne" }],
                "posts": [{ "userId": 1, "id": 3, "title": "t", "body": "b" }]
            }"#,
        )
        .unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, 3);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = parse_seed(
            r#"{ "posts": [
                { "userId": 1, "id": 1, "title": "a", "body": "a" },
                { "userId": 2, "id": 1, "title": "b", "body": "b" }
            ] }"#,
        )
        .unwrap_err();

        assert!(matches!(err, DomainError::SeedError(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(parse_seed("{}").is_err());
        assert!(parse_seed(r#"{ "posts": [{ "id": "one" }] }"#).is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "posts": [{{ "userId": 4, "id": 10, "title": "from file", "body": "x" }}] }}"#
        )
        .unwrap();

        let posts = load_seed(Some(file.path())).unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "from file");
    }

    #[test]
    fn missing_file_is_seed_error() {
        let err = load_seed(Some(Path::new("/nonexistent/seed.json"))).unwrap_err();
        assert!(matches!(err, DomainError::SeedError(_)));
    }
}
