use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{CommentId, PostId, UserId};

/// A blog post.
///
/// `author` is set exactly once, at creation, to the requesting identity.
/// No operation changes it afterwards: `PostChanges` has no author field,
/// so the invariant holds by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author: UserId,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    /// Comments owned by this post, in creation order.
    pub comment_ids: Vec<CommentId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a post. An absent field means "no change", not
/// "clear to empty".
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl Post {
    pub fn new(author: UserId, title: String, body: String, tags: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id: PostId::new(),
            author,
            title,
            body,
            tags,
            comment_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update, bumping `updated_at`.
    pub fn apply_changes(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(body) = changes.body {
            self.body = body;
        }
        if let Some(tags) = changes.tags {
            self.tags = tags;
        }
        self.updated_at = Utc::now();
    }
}

/// A comment on a post.
///
/// Owned by exactly one post via that post's `comment_ids`; the comment
/// record itself carries no back-reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub commenter: UserId,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(commenter: UserId, body: String) -> Self {
        Self {
            id: CommentId::new(),
            commenter,
            body,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post::new(
            UserId::new(),
            "First post".to_string(),
            "Hello".to_string(),
            vec!["intro".to_string()],
        )
    }

    #[test]
    fn apply_changes_updates_only_present_fields() {
        let mut post = sample_post();
        let original_body = post.body.clone();
        let original_tags = post.tags.clone();

        post.apply_changes(PostChanges {
            title: Some("Renamed".to_string()),
            ..Default::default()
        });

        assert_eq!(post.title, "Renamed");
        assert_eq!(post.body, original_body);
        assert_eq!(post.tags, original_tags);
    }

    #[test]
    fn apply_changes_never_touches_author() {
        let mut post = sample_post();
        let author = post.author;

        post.apply_changes(PostChanges {
            title: Some("t".to_string()),
            body: Some("b".to_string()),
            tags: Some(vec![]),
        });

        assert_eq!(post.author, author);
    }

    #[test]
    fn apply_changes_bumps_updated_at() {
        let mut post = sample_post();
        let before = post.updated_at;
        std::thread::sleep(std::time::Duration::from_millis(2));

        post.apply_changes(PostChanges::default());

        assert!(post.updated_at > before);
    }
}
