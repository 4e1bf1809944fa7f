use chrono::{DateTime, Utc};

use crate::error::UiError;

pub const PLACEHOLDER_HREF: &'static str = "#";

#[derive(Hash, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    pub role: String,
    pub avatar_url: String,
}

#[derive(Hash, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ContentKind {
    Paragraph,
    Link,
    #[serde(other)]
    Unknown,
}

#[derive(Hash, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentEntry {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl ContentEntry {
    pub fn paragraph(content: impl Into<String>) -> Self {
        ContentEntry {
            kind: ContentKind::Paragraph,
            content: content.into(),
            href: None,
        }
    }

    pub fn link(content: impl Into<String>, href: Option<String>) -> Self {
        ContentEntry {
            kind: ContentKind::Link,
            content: content.into(),
            href,
        }
    }

    /// Link target, falling back to a placeholder when the entry has none.
    pub fn link_href(&self) -> &str {
        self.href.as_deref().unwrap_or(PLACEHOLDER_HREF)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    #[serde(default)]
    pub id: Option<u64>,
    pub content: Vec<ContentEntry>,
    pub author: Author,
    pub published_at: DateTime<Utc>,
}

pub fn parse_posts(data: &str) -> Result<Vec<PostData>, UiError> {
    serde_json::from_str(data).map_err(UiError::Posts)
}
