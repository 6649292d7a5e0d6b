use crate::domain::{DomainError, Post};
use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::Mutex;

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Inserts `candidate`. `None` as id asks the store to assign the next free one.
    async fn create(&self, id: Option<i64>, candidate: Post) -> Result<Post, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Post, DomainError>;
    async fn list(&self) -> Vec<Post>;
    async fn update(&self, id: i64, replacement: Post) -> Result<Post, DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
    async fn reset(&self);
    async fn count(&self) -> usize;
}

struct PostTable {
    posts: IndexMap<i64, Post>,
    /// Always above every id ever stored. `None` once `i64::MAX` is taken.
    next_id: Option<i64>,
}

impl PostTable {
    fn from_seed(seed: &[Post], floor: Option<i64>) -> Self {
        let posts: IndexMap<i64, Post> = seed.iter().map(|p| (p.id, p.clone())).collect();
        let max_seeded = posts.keys().copied().max().unwrap_or(0);

        let next_id = match (floor, max_seeded.checked_add(1)) {
            (Some(floor), Some(after_seed)) => Some(floor.max(after_seed).max(1)),
            _ => None,
        };

        Self { posts, next_id }
    }

    fn allocate_id(&mut self) -> Result<i64, DomainError> {
        let id = self.next_id.ok_or_else(|| {
            tracing::error!("Post id space exhausted");
            DomainError::InternalError("post id space exhausted".to_string())
        })?;
        self.next_id = id.checked_add(1);
        Ok(id)
    }

    fn reserve_id(&mut self, id: i64) {
        if let Some(next) = self.next_id {
            if id >= next {
                self.next_id = id.checked_add(1);
            }
        }
    }
}

/// In-memory post store. The map and the id counter sit behind one mutex,
/// so every operation is linearizable and the lock is never held across an await.
pub struct InMemoryPostRepository {
    seed: Vec<Post>,
    table: Mutex<PostTable>,
}

impl InMemoryPostRepository {
    pub fn new(seed: Vec<Post>) -> Self {
        let table = PostTable::from_seed(&seed, Some(1));
        Self {
            seed,
            table: Mutex::new(table),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, id: Option<i64>, mut candidate: Post) -> Result<Post, DomainError> {
        let mut table = self.table.lock().await;

        let id = match id {
            Some(id) if table.posts.contains_key(&id) => {
                tracing::warn!("Rejecting post with duplicate id={}", id);
                return Err(DomainError::PostAlreadyExists(id));
            }
            Some(id) => {
                table.reserve_id(id);
                id
            }
            None => table.allocate_id()?,
        };

        candidate.id = id;
        table.posts.insert(id, candidate.clone());

        Ok(candidate)
    }

    async fn find_by_id(&self, id: i64) -> Result<Post, DomainError> {
        let table = self.table.lock().await;

        table
            .posts
            .get(&id)
            .cloned()
            .ok_or(DomainError::PostNotFound(id))
    }

    async fn list(&self) -> Vec<Post> {
        let table = self.table.lock().await;
        table.posts.values().cloned().collect()
    }

    async fn update(&self, id: i64, mut replacement: Post) -> Result<Post, DomainError> {
        let mut table = self.table.lock().await;

        match table.posts.get_mut(&id) {
            Some(stored) => {
                replacement.id = id;
                *stored = replacement;
                Ok(stored.clone())
            }
            None => Err(DomainError::PostNotFound(id)),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut table = self.table.lock().await;

        // shift_remove keeps the remaining posts in insertion order
        match table.posts.shift_remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::PostNotFound(id)),
        }
    }

    async fn reset(&self) {
        let mut table = self.table.lock().await;
        let floor = table.next_id;
        *table = PostTable::from_seed(&self.seed, floor);
    }

    async fn count(&self) -> usize {
        self.table.lock().await.posts.len()
    }
}
