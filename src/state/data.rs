//! Shared data structures that flow between the search API and the controller.
//!
//! The API collaborator owns the shape of an image record; the controller only
//! needs to move records around in page order, so everything it does not read
//! is carried through untouched in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Represents a single image hit returned by the search API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Catalog-wide image ID
    pub id: u64,
    /// Original width in pixels
    #[serde(rename = "imageWidth", default)]
    pub width: u32,
    /// Original height in pixels
    #[serde(rename = "imageHeight", default)]
    pub height: u32,
    /// Medium-size URL used by the grid
    #[serde(rename = "webformatURL", default)]
    pub preview_url: String,
    /// Large URL used by the detail view
    #[serde(rename = "largeImageURL", default)]
    pub full_url: String,
    /// Every other field the API sent (tags, user, likes, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Create an item with no extra fields
    pub fn new(
        id: u64,
        width: u32,
        height: u32,
        preview_url: impl Into<String>,
        full_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            width,
            height,
            preview_url: preview_url.into(),
            full_url: full_url.into(),
            extra: Map::new(),
        }
    }
}

/// Payload wrapper around one page of hits
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hits: Option<Vec<Item>>,
}

/// What the search API answers for one request
///
/// `success = false` and a missing `data`/`hits` are both legal answers;
/// the orchestrator decides what they mean.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

impl FetchResponse {
    /// A successful page carrying `hits`
    pub fn ok(hits: Vec<Item>) -> Self {
        Self {
            success: true,
            data: Some(ResponseData { hits: Some(hits) }),
        }
    }

    /// A response with `success = false` and no payload
    pub fn failed() -> Self {
        Self::default()
    }

    /// Parse from the JSON body returned by the API
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Borrow the hits, if the payload has any
    pub fn hits(&self) -> Option<&[Item]> {
        self.data.as_ref()?.hits.as_deref()
    }

    /// Take ownership of the hits, if the payload has any
    pub fn into_hits(self) -> Option<Vec<Item>> {
        self.data?.hits
    }
}
