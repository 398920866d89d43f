use serde::{Deserialize, Serialize};

/// A comment shown under the active video
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentRecord {
    /// Assigned by the content provider, never by the backend
    pub id: String,
    pub author: String,
    pub avatar: String,
    pub text: String,
    pub likes: u64,
    /// Free-text relative time label
    pub time: String,
}

/// One comment as emitted by the generative backend
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedComment {
    pub author: String,
    pub text: String,
    /// Negative or fractional values fail deserialization
    pub likes: u64,
    pub time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_comment_deserialization() {
        let json = r#"{"author": "steve", "text": "first", "likes": 12, "time": "1 hour ago"}"#;
        let comment: GeneratedComment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.author, "steve");
        assert_eq!(comment.likes, 12);
    }

    #[test]
    fn test_generated_comment_rejects_negative_likes() {
        let json = r#"{"author": "steve", "text": "first", "likes": -3, "time": "1 hour ago"}"#;
        assert!(serde_json::from_str::<GeneratedComment>(json).is_err());
    }

    #[test]
    fn test_generated_comment_rejects_string_likes() {
        let json = r#"{"author": "steve", "text": "first", "likes": "12", "time": "1 hour ago"}"#;
        assert!(serde_json::from_str::<GeneratedComment>(json).is_err());
    }
}
