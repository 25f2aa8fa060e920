//! Domain models and value objects

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;
use url::Url;

/// Collection that creator posts are stored in
pub const POSTS_COLLECTION: &str = "creatorpost";

/// Input for caption generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaptionRequest {
    /// What the post is about
    pub topic: String,
    /// Tone of voice, e.g. playful, professional
    #[serde(default)]
    pub tone: Option<String>,
    /// Target audience
    #[serde(default)]
    pub audience: Option<String>,
    /// Keywords appended as hashtags, in order
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionResponse {
    pub caption: String,
}

/// Input for hashtag suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashtagRequest {
    /// Caption text to mine for candidate tags
    pub caption: String,
    /// Maximum number of tags to return
    #[serde(default = "default_max_tags")]
    pub max_tags: usize,
}

impl HashtagRequest {
    pub const DEFAULT_MAX_TAGS: usize = 10;
}

fn default_max_tags() -> usize {
    HashtagRequest::DEFAULT_MAX_TAGS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagResponse {
    pub hashtags: Vec<String>,
}

/// Publishing state of a creator post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Scheduled,
    Published,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Scheduled => "scheduled",
            PostStatus::Published => "published",
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PostStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "draft" => Ok(PostStatus::Draft),
            "scheduled" => Ok(PostStatus::Scheduled),
            "published" => Ok(PostStatus::Published),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}

/// A piece of planned or published content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorPost {
    /// Working title for the content
    pub title: String,
    /// Reference image for preview/publishing
    #[serde(default)]
    pub image_url: Option<Url>,
    /// Final caption text
    #[serde(default)]
    pub caption: String,
    /// Selected hashtags
    #[serde(default)]
    pub hashtags: Vec<String>,
    /// Target platforms
    #[serde(default = "default_platforms")]
    pub platforms: Vec<String>,
    /// Inspiration keywords
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Tone used for generation
    #[serde(default)]
    pub tone: Option<String>,
    /// Target audience description
    #[serde(default)]
    pub audience: Option<String>,
    /// Scheduled publish time; times without an offset are taken as UTC
    #[serde(default, with = "scheduled_time")]
    pub scheduled_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub status: PostStatus,
}

fn default_platforms() -> Vec<String> {
    vec!["instagram".to_string()]
}

impl CreatorPost {
    /// Create a draft post with default fields
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image_url: None,
            caption: String::new(),
            hashtags: Vec::new(),
            platforms: default_platforms(),
            keywords: Vec::new(),
            tone: None,
            audience: None,
            scheduled_at: None,
            status: PostStatus::Draft,
        }
    }

    /// Check field-level constraints that serde cannot express
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = &self.image_url {
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ValidationError::UnsupportedImageScheme(
                    url.scheme().to_string(),
                ));
            }
            if url.host_str().is_none() {
                return Err(ValidationError::MissingImageHost);
            }
        }

        Ok(())
    }
}

/// RFC 3339 on output; RFC 3339 or offset-less ISO 8601 on input
mod scheduled_time {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::format_description::well_known::{Iso8601, Rfc3339};
    use time::{OffsetDateTime, PrimitiveDateTime};

    pub fn serialize<S: Serializer>(
        value: &Option<OffsetDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        time::serde::rfc3339::option::serialize(value, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<OffsetDateTime>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        parse(&raw).map(Some).map_err(serde::de::Error::custom)
    }

    pub(super) fn parse(raw: &str) -> Result<OffsetDateTime, time::error::Parse> {
        OffsetDateTime::parse(raw, &Rfc3339).or_else(|err| {
            PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT)
                .map(PrimitiveDateTime::assume_utc)
                .map_err(|_| err)
        })
    }
}

/// A creator post as read back from the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPost {
    pub id: String,
    #[serde(flatten)]
    pub post: CreatorPost,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedPost {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostList {
    pub items: Vec<StoredPost>,
}

/// Rejected input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("image_url must use http or https, got '{0}'")]
    UnsupportedImageScheme(String),
    #[error("image_url must include a host")]
    MissingImageHost,
    #[error("unknown status '{0}': expected draft, scheduled or published")]
    UnknownStatus(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creator_post_defaults() {
        let post: CreatorPost = serde_json::from_str(r#"{"title": "Golden hour"}"#).unwrap();

        assert_eq!(post.caption, "");
        assert!(post.hashtags.is_empty());
        assert_eq!(post.platforms, vec!["instagram".to_string()]);
        assert_eq!(post.status, PostStatus::Draft);
        assert!(post.scheduled_at.is_none());
    }

    #[test]
    fn test_hashtag_request_default_max_tags() {
        let req: HashtagRequest = serde_json::from_str(r#"{"caption": "hello"}"#).unwrap();
        assert_eq!(req.max_tags, 10);
    }

    #[test]
    fn test_hashtag_request_rejects_negative_max_tags() {
        let result = serde_json::from_str::<HashtagRequest>(r#"{"caption": "x", "max_tags": -1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_status_rejects_unknown_value() {
        let result = serde_json::from_str::<CreatorPost>(r#"{"title": "t", "status": "archived"}"#);
        assert!(result.is_err());

        assert_eq!("scheduled".parse::<PostStatus>(), Ok(PostStatus::Scheduled));
        assert!(matches!(
            "archived".parse::<PostStatus>(),
            Err(ValidationError::UnknownStatus(_))
        ));
    }

    #[test]
    fn test_validate_image_url_scheme() {
        let mut post = CreatorPost::new("Studio tour");
        post.image_url = Some(Url::parse("ftp://example.com/a.jpg").unwrap());
        assert_eq!(
            post.validate(),
            Err(ValidationError::UnsupportedImageScheme("ftp".to_string()))
        );

        post.image_url = Some(Url::parse("https://example.com/a.jpg").unwrap());
        assert!(post.validate().is_ok());
    }

    #[test]
    fn test_empty_title_is_accepted() {
        let post: CreatorPost = serde_json::from_str(r#"{"title": ""}"#).unwrap();
        assert!(post.validate().is_ok());
        assert!(CreatorPost::new("   ").validate().is_ok());
    }

    #[test]
    fn test_scheduled_at_parses_rfc3339() {
        let post: CreatorPost = serde_json::from_str(
            r#"{"title": "Launch", "scheduled_at": "2024-05-01T18:30:00Z", "status": "scheduled"}"#,
        )
        .unwrap();

        let scheduled = post.scheduled_at.unwrap();
        assert_eq!(scheduled.unix_timestamp(), 1_714_588_200);
        assert_eq!(post.status, PostStatus::Scheduled);
    }

    #[test]
    fn test_scheduled_at_without_offset_is_utc() {
        let post: CreatorPost =
            serde_json::from_str(r#"{"title": "t", "scheduled_at": "2024-05-01T18:30:00"}"#)
                .unwrap();
        assert_eq!(post.scheduled_at.unwrap().unix_timestamp(), 1_714_588_200);

        let post: CreatorPost =
            serde_json::from_str(r#"{"title": "t", "scheduled_at": "2024-05-01T18:30"}"#).unwrap();
        assert_eq!(post.scheduled_at.unwrap().unix_timestamp(), 1_714_588_200);

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["scheduled_at"], "2024-05-01T18:30:00Z");
    }

    #[test]
    fn test_scheduled_at_keeps_explicit_offset() {
        let post: CreatorPost = serde_json::from_str(
            r#"{"title": "t", "scheduled_at": "2024-05-01T20:30:00+02:00"}"#,
        )
        .unwrap();
        assert_eq!(post.scheduled_at.unwrap().unix_timestamp(), 1_714_588_200);
    }

    #[test]
    fn test_scheduled_at_rejects_garbage() {
        let result = serde_json::from_str::<CreatorPost>(
            r#"{"title": "t", "scheduled_at": "next tuesday"}"#,
        );
        assert!(result.is_err());
        assert!(scheduled_time::parse("2024-13-01T00:00:00").is_err());
    }

    #[test]
    fn test_stored_post_flattens_fields() {
        let stored = StoredPost {
            id: "abc".to_string(),
            post: CreatorPost::new("Flat"),
            created_at: None,
            updated_at: None,
        };

        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value["id"], "abc");
        assert_eq!(value["title"], "Flat");
        assert_eq!(value["status"], "draft");
    }
}
