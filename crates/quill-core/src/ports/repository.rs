use async_trait::async_trait;

use crate::domain::{Category, NewCategory, NewPost, Post};
use crate::error::RepoError;

/// Post storage. Ids are assigned by the store on insert and never reused
/// from caller input.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by its unique id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// Every stored post, ordered by id.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Store a new post, assigning its id.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Replace a stored post. Fails with [`RepoError::NotFound`] when the id
    /// is unknown.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Delete a post by id. Fails with [`RepoError::NotFound`] when the id
    /// is unknown.
    async fn delete(&self, id: i64) -> Result<(), RepoError>;
}

/// Category storage.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, RepoError>;

    /// Store a new category, assigning its id.
    async fn insert(&self, category: NewCategory) -> Result<Category, RepoError>;
}
