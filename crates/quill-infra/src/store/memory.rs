//! In-memory store - stand-in for the real persistence engine in tests and
//! local development. Note: data is lost on process restart.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{Category, NewCategory, NewPost, Post};
use quill_core::error::RepoError;
use quill_core::ports::{CategoryRepository, PostRepository};

/// In-memory post store keyed by id, with a sequence counter standing in for
/// the database's generated ids.
pub struct InMemoryPostStore {
    rows: RwLock<HashMap<i64, Post>>,
    next_id: AtomicI64,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let rows = self.rows.read().await;
        let mut posts: Vec<Post> = rows.values().cloned().collect();
        posts.sort_by_key(|p| p.id);
        Ok(posts)
    }

    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let post = post.into_post(id);
        let mut rows = self.rows.write().await;
        rows.insert(id, post.clone());
        tracing::debug!(post_id = id, "post stored");
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut rows = self.rows.write().await;
        if !rows.contains_key(&post.id) {
            return Err(RepoError::NotFound);
        }
        rows.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        match rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

/// In-memory category store.
pub struct InMemoryCategoryStore {
    rows: RwLock<HashMap<i64, Category>>,
    next_id: AtomicI64,
}

impl InMemoryCategoryStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored categories. Used by tests to observe cascade
    /// behavior.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryCategoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).cloned())
    }

    async fn insert(&self, category: NewCategory) -> Result<Category, RepoError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let category = category.into_category(id);
        let mut rows = self.rows.write().await;
        rows.insert(id, category.clone());
        tracing::debug!(category_id = id, "category stored");
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn new_post(slug: &str) -> NewPost {
        let created = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        NewPost {
            title: "Hello world".to_string(),
            slug: slug.to_string(),
            content: "Body text".to_string(),
            created_at: created,
            updated_at: created,
            category: None,
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store = InMemoryPostStore::new();
        let first = store.insert(new_post("first-post")).await.unwrap();
        let second = store.insert(new_post("second-post")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn find_returns_the_stored_post() {
        let store = InMemoryPostStore::new();
        let stored = store.insert(new_post("hello-world")).await.unwrap();
        let found = store.find_by_id(stored.id).await.unwrap();
        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let store = InMemoryPostStore::new();
        for slug in ["aaa-post", "bbb-post", "ccc-post"] {
            store.insert(new_post(slug)).await.unwrap();
        }
        let posts = store.list().await.unwrap();
        let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let store = InMemoryPostStore::new();
        let ghost = new_post("ghost-post").into_post(42);
        let err = store.update(ghost).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let store = InMemoryPostStore::new();
        let stored = store.insert(new_post("hello-world")).await.unwrap();
        store.delete(stored.id).await.unwrap();
        assert_eq!(store.find_by_id(stored.id).await.unwrap(), None);
        assert!(matches!(
            store.delete(stored.id).await.unwrap_err(),
            RepoError::NotFound
        ));
    }

    #[tokio::test]
    async fn category_insert_assigns_ids() {
        let store = InMemoryCategoryStore::new();
        let news = store
            .insert(NewCategory {
                name: "news".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(news.id, 1);
        assert_eq!(store.find_by_id(1).await.unwrap(), Some(news));
    }
}
