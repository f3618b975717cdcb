use serde::{Deserialize, Serialize};

use crate::error::PostError;

/// A blog post as handed over by the content layer.
///
/// The card only reads these fields. Nothing is validated here: an empty
/// `thumbnail` or a bogus `url` is rendered as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub url: String,
    pub thumbnail: String,
    pub category: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Post {
    /// Image source for the thumbnail: `prefix` followed by `thumbnail`, verbatim.
    pub fn thumbnail_src(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.thumbnail)
    }

    pub fn from_json(body: &str) -> Result<Self, PostError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn list_from_json(body: &str) -> Result<Vec<Self>, PostError> {
        let posts: Vec<Post> = serde_json::from_str(body)?;
        log::trace!("decoded {} post records", posts.len());
        Ok(posts)
    }
}
