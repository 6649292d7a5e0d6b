use crate::data::post_repository::PostRepository;
use crate::domain::post::{CreatePostRequest, DeletedPostResponse, UpdatePostRequest};
use crate::domain::{DomainError, Post, PostId};
use std::sync::Arc;

/// Application layer over the post store. Raw path segments are parsed here,
/// so malformed identifiers never reach the repository.
pub struct PostService {
    post_repo: Arc<dyn PostRepository + Send + Sync>,
}

impl PostService {
    pub fn new(post_repo: Arc<dyn PostRepository + Send + Sync>) -> Self {
        Self { post_repo }
    }

    pub async fn create_post(&self, req: CreatePostRequest) -> Result<Post, DomainError> {
        let requested_id = req.id;
        let candidate = Post::from_create(requested_id.unwrap_or_default(), req);

        let post = self.post_repo.create(requested_id, candidate).await?;

        tracing::info!(
            "Post created: id={}, user_id={}, explicit_id={}",
            post.id,
            post.user_id,
            requested_id.is_some()
        );

        Ok(post)
    }

    pub async fn get_post(&self, raw_id: &str) -> Result<Post, DomainError> {
        let id = parse_id(raw_id)?;
        self.post_repo.find_by_id(id.0).await
    }

    pub async fn list_posts(&self) -> Vec<Post> {
        self.post_repo.list().await
    }

    pub async fn update_post(
        &self,
        raw_id: &str,
        req: UpdatePostRequest,
    ) -> Result<Post, DomainError> {
        let id = parse_id(raw_id)?;

        if let Some(body_id) = req.id.filter(|body_id| *body_id != id.0) {
            tracing::warn!(
                "Update body id={} differs from path id={}, keeping path id",
                body_id,
                id
            );
        }

        let updated = self
            .post_repo
            .update(id.0, Post::from_update(id.0, req))
            .await?;

        tracing::info!("Post updated: id={}", id);

        Ok(updated)
    }

    pub async fn delete_post(&self, raw_id: &str) -> Result<DeletedPostResponse, DomainError> {
        let id = parse_id(raw_id)?;

        self.post_repo.delete(id.0).await?;

        tracing::info!("Post deleted: id={}", id);

        Ok(DeletedPostResponse { id: id.0 })
    }

    /// Drops every change and re-seeds the store from its template.
    pub async fn reset_posts(&self) -> usize {
        self.post_repo.reset().await;
        let count = self.post_repo.count().await;

        tracing::info!("Post store reset to seed: {} posts", count);

        count
    }
}

fn parse_id(raw_id: &str) -> Result<PostId, DomainError> {
    raw_id.parse::<PostId>().inspect_err(|_| {
        tracing::debug!("Rejecting malformed post id {:?}", raw_id);
    })
}
