//! Post operations: list, get, create, update, delete.
//!
//! Writes are two-phase: the whole draft (including any inline category) is
//! validated first, and only then does the cascade run - the category is
//! persisted, then the post referencing it. A rejected draft therefore never
//! touches storage.

use std::sync::Arc;

use crate::domain::{Category, NewCategory, NewPost, Post};
use crate::draft::{PostDraft, ValidCategory, ValidPost};
use crate::error::{DomainError, RepoError};
use crate::ports::{CategoryRepository, PostRepository};
use crate::projection::{PostDetail, PostSummary};

/// The Post resource's operation surface.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, categories: Arc<dyn CategoryRepository>) -> Self {
        Self { posts, categories }
    }

    /// List-read: the compact projection of every post.
    pub async fn list(&self) -> Result<Vec<PostSummary>, DomainError> {
        let posts = self.posts.list().await.map_err(storage_fault)?;
        Ok(posts.iter().map(PostSummary::from).collect())
    }

    /// Item-read: the full projection of one post.
    pub async fn get(&self, id: i64) -> Result<PostDetail, DomainError> {
        let post = self.require_post(id).await?;
        Ok(PostDetail::from(&post))
    }

    /// Create a post from a draft, cascading the inline category if present.
    pub async fn create(&self, draft: PostDraft) -> Result<PostDetail, DomainError> {
        let valid = draft.into_valid().map_err(DomainError::Validation)?;
        let record = self.cascade(valid).await?;
        let post = self.posts.insert(record).await.map_err(storage_fault)?;
        tracing::debug!(post_id = post.id, slug = %post.slug, "post created");
        Ok(PostDetail::from(&post))
    }

    /// Full-replacement update: every writable field comes from the draft,
    /// the id is preserved.
    pub async fn update(&self, id: i64, draft: PostDraft) -> Result<PostDetail, DomainError> {
        self.require_post(id).await?;
        let valid = draft.into_valid().map_err(DomainError::Validation)?;
        let replacement = self.cascade(valid).await?.into_post(id);
        let post = self
            .posts
            .update(replacement)
            .await
            .map_err(|e| post_repo_error(e, id))?;
        tracing::debug!(post_id = post.id, "post replaced");
        Ok(PostDetail::from(&post))
    }

    /// Delete a post. No payload fields are involved.
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.posts
            .delete(id)
            .await
            .map_err(|e| post_repo_error(e, id))?;
        tracing::debug!(post_id = id, "post deleted");
        Ok(())
    }

    async fn require_post(&self, id: i64) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await
            .map_err(storage_fault)?
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id,
            })
    }

    /// Phase two of a write: persist the validated inline category, then
    /// assemble the record the post store will receive.
    async fn cascade(&self, valid: ValidPost) -> Result<NewPost, DomainError> {
        let ValidPost {
            title,
            slug,
            content,
            created_at,
            updated_at,
            category,
        } = valid;
        let category = self.persist_category(category).await?;
        Ok(NewPost {
            title,
            slug,
            content,
            created_at,
            updated_at,
            category,
        })
    }

    async fn persist_category(
        &self,
        category: Option<ValidCategory>,
    ) -> Result<Option<Category>, DomainError> {
        match category {
            Some(valid) => {
                let stored = self
                    .categories
                    .insert(NewCategory { name: valid.name })
                    .await
                    .map_err(storage_fault)?;
                tracing::debug!(category_id = stored.id, name = %stored.name, "category cascaded");
                Ok(Some(stored))
            }
            None => Ok(None),
        }
    }
}

fn storage_fault(err: RepoError) -> DomainError {
    DomainError::Internal(err.to_string())
}

fn post_repo_error(err: RepoError, id: i64) -> DomainError {
    match err {
        RepoError::NotFound => DomainError::NotFound {
            entity_type: "Post",
            id,
        },
        other => storage_fault(other),
    }
}
