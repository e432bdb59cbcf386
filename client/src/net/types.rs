//! Response DTOs for the placeholder photo API.
//!
//! DESIGN
//! ======
//! Only `url` feeds the card color. The remaining fields default when absent
//! so a trimmed-down response still decodes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One entry of the `/photos` listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Album the photo belongs to.
    #[serde(default)]
    pub album_id: u64,
    /// Photo identifier.
    #[serde(default)]
    pub id: u64,
    /// Free-form caption.
    #[serde(default)]
    pub title: String,
    /// Full-size image URL; its last path segment is a hex color code.
    pub url: String,
    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail_url: String,
}
