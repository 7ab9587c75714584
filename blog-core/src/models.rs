use crate::error::DraftError;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

// ==================== Модели постов ====================

/// One blog entry as returned by the store.
///
/// `id` and `timestamp` are assigned by the store. `timestamp` is
/// nanoseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub author: String,
    pub timestamp: i64,
}

impl Post {
    pub fn created_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.timestamp)
    }

    /// Card subtitle: author and creation time in the local timezone.
    pub fn byline(&self) -> String {
        let local = self.created_at().with_timezone(&Local);
        format!("By {} | {}", self.author, local.format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Validated payload for `createPost`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub author: String,
}

// ==================== Форма ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Body,
    Author,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Title, FormField::Body, FormField::Author];

    pub fn name(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Body => "body",
            FormField::Author => "author",
        }
    }
}

/// Contents of the create-post form as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
    pub author: String,
}

impl PostDraft {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            author: author.into(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Body => &self.body,
            FormField::Author => &self.author,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Title => self.title = value,
            FormField::Body => self.body = value,
            FormField::Author => self.author = value,
        }
    }

    /// Every field is required; whitespace counts as content.
    pub fn validate(&self) -> Result<NewPost, DraftError> {
        let missing: Vec<FormField> = FormField::ALL
            .into_iter()
            .filter(|f| self.field(*f).is_empty())
            .collect();

        if !missing.is_empty() {
            return Err(DraftError { missing });
        }

        Ok(NewPost {
            title: self.title.clone(),
            body: self.body.clone(),
            author: self.author.clone(),
        })
    }
}

// ==================== Общие ошибки ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_json_shape() {
        let json = r#"{"id":7,"title":"A","body":"b","author":"c","timestamp":1724799579000000000}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.created_at().timestamp(), 1_724_799_579);
        assert_eq!(serde_json::to_string(&post).unwrap(), json);
    }

    #[test]
    fn byline_starts_with_author() {
        let post = Post {
            id: 1,
            title: "A".into(),
            body: "b".into(),
            author: "satoshi".into(),
            timestamp: 0,
        };
        assert!(post.byline().starts_with("By satoshi | "));
    }

    #[test]
    fn validate_reports_every_empty_field() {
        let err = PostDraft::new("", "body", "").validate().unwrap_err();
        assert_eq!(err.missing, vec![FormField::Title, FormField::Author]);
    }

    #[test]
    fn validate_accepts_complete_draft() {
        let post = PostDraft::new("C", "x", "y").validate().unwrap();
        assert_eq!(
            post,
            NewPost {
                title: "C".into(),
                body: "x".into(),
                author: "y".into(),
            }
        );
    }

    #[test]
    fn set_field_updates_only_that_field() {
        let mut draft = PostDraft::default();
        draft.set_field(FormField::Body, "hello".into());
        assert_eq!(draft, PostDraft::new("", "hello", ""));
    }
}
