//! Blog post model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use vitrine_core::types::{DbId, Timestamp};

/// A blog post row from the `blog_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub slug: String,
    pub created_at: Timestamp,
}

/// A listing row: full content replaced with a truncated excerpt.
#[derive(Debug, Clone, Serialize)]
pub struct BlogPostExcerpt {
    pub id: DbId,
    pub title: String,
    pub excerpt: String,
    pub slug: String,
    pub created_at: Timestamp,
}

impl BlogPostExcerpt {
    /// Build an excerpt from a full post, truncating the content at a char
    /// boundary and appending an ellipsis when cut.
    pub fn from_post(post: BlogPost, max_chars: usize) -> Self {
        let excerpt = if post.content.chars().count() > max_chars {
            let cut: String = post.content.chars().take(max_chars).collect();
            format!("{}…", cut.trim_end())
        } else {
            post.content
        };
        Self {
            id: post.id,
            title: post.title,
            excerpt,
            slug: post.slug,
            created_at: post.created_at,
        }
    }
}

/// DTO for inserting a new blog post. The slug is generated by the handler
/// before the insert.
#[derive(Debug)]
pub struct CreateBlogPost {
    pub title: String,
    pub content: String,
}
