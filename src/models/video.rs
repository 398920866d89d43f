use serde::{Deserialize, Serialize};

/// A video as shown in the listing and detail views
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    /// Unique within one result set
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub video_url: String,
    pub channel_name: String,
    pub channel_avatar: String,
    /// Free-text label, e.g. "1.2M views"
    pub views: String,
    /// Free-text label, e.g. "2 days ago"
    pub uploaded_at: String,
    /// Free-text label; live streams use [`LIVE_DURATION`]
    pub duration: String,
}

/// Duration label used for live streams
pub const LIVE_DURATION: &str = "LIVE";

// ============================================================================
// Generative Backend Types
// ============================================================================

/// One search result as emitted by the generative backend
///
/// Every field is required and must be a string. The backend `id` is never
/// trusted; the content provider replaces it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedVideo {
    /// Overwritten by the provider
    pub id: String,
    pub title: String,
    pub description: String,
    pub channel_name: String,
    pub views: String,
    pub uploaded_at: String,
    pub duration: String,
    /// Single keyword used to seed the placeholder thumbnail
    pub keywords: String,
}
