use serde::{Deserialize, Serialize};

/// Separator between a message id and its disambiguation comment in the
/// effective storage key (`id##comment`).
pub const COMMENT_SEPARATOR: &str = "##";

/// Where a descriptor was declared, attached when `extractSourceLocation` is on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorLocation {
    /// Unit path relative to the working directory.
    pub file: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

/// A finalized, catalog-ready message descriptor.
///
/// `id` holds the effective storage key: the author's id, suffixed with
/// `##comment` when a disambiguation comment was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDescriptor {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub default_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_location: Option<DescriptorLocation>,
}

/// Compute the effective storage key for an id and optional comment.
///
/// ```
/// use intl_extract::core::storage_key;
///
/// assert_eq!(storage_key("greeting", None), "greeting");
/// assert_eq!(storage_key("greeting", Some("menu")), "greeting##menu");
/// ```
pub fn storage_key(id: &str, comment: Option<&str>) -> String {
    match comment {
        Some(comment) => format!("{}{}{}", id, COMMENT_SEPARATOR, comment),
        None => id.to_string(),
    }
}
