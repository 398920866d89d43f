/// Content provider
///
/// Supplies the baseline catalog and turns generative backend output into
/// [`VideoRecord`]s and [`CommentRecord`]s. Backend failures of any kind (transport,
/// credential, malformed JSON, schema violations) are logged and collapse to an empty
/// result, so callers only ever see "no results".
use std::sync::Arc;

use chrono::Utc;

use crate::{
    error::AppResult,
    models::{CommentRecord, GeneratedComment, GeneratedVideo, VideoRecord},
    services::{
        catalog,
        generative::{schema::Field, GenerativeBackend, ResponseSchema},
        images::{placeholder_image, CHANNEL_AVATAR_SIZE, COMMENT_AVATAR_SIZE, THUMBNAIL_SIZE},
    },
};

/// Number of videos requested per search
pub const SEARCH_RESULT_COUNT: usize = 8;

/// Number of comments requested per video
pub const COMMENT_COUNT: usize = 5;

/// Media URL given to every generated video
pub const FALLBACK_VIDEO_URL: &str =
    "http://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";

const GENERATED_ID_PREFIX: &str = "gemini";

/// Structured-output schema for search results
pub fn video_schema() -> ResponseSchema {
    ResponseSchema::array_of_objects(&[
        Field::string("id"),
        Field::string("title"),
        Field::string("description"),
        Field::string("channelName"),
        Field::string("views"),
        Field::string("uploadedAt"),
        Field::string("duration"),
        Field::string("keywords")
            .describe("A single keyword to use for fetching a relevant stock image"),
    ])
}

/// Structured-output schema for comments
pub fn comment_schema() -> ResponseSchema {
    ResponseSchema::array_of_objects(&[
        Field::string("author"),
        Field::string("text"),
        Field::integer("likes"),
        Field::string("time"),
    ])
}

fn search_prompt(query: &str) -> String {
    format!(
        "Generate {} realistic video results for a video sharing platform search query: \"{}\".\n\
         Make them diverse and engaging. Return valid JSON.",
        SEARCH_RESULT_COUNT, query
    )
}

fn comments_prompt(title: &str) -> String {
    format!(
        "Generate {} realistic user comments for a youtube video titled: \"{}\".\n\
         Include a mix of funny, supportive, and critical comments.",
        COMMENT_COUNT, title
    )
}

/// Map one validated backend item into a record
///
/// `batch` is shared by every item of one response; `index` keeps ids unique within it.
fn video_from_generated(item: GeneratedVideo, batch: i64, index: usize) -> VideoRecord {
    VideoRecord {
        id: format!("{}-{}-{}", GENERATED_ID_PREFIX, batch, index),
        thumbnail_url: placeholder_image(&format!("{}{}", item.keywords, index), THUMBNAIL_SIZE),
        channel_avatar: placeholder_image(&item.channel_name, CHANNEL_AVATAR_SIZE),
        video_url: FALLBACK_VIDEO_URL.to_string(),
        title: item.title,
        description: item.description,
        channel_name: item.channel_name,
        views: item.views,
        uploaded_at: item.uploaded_at,
        duration: item.duration,
    }
}

fn comment_from_generated(item: GeneratedComment, index: usize) -> CommentRecord {
    CommentRecord {
        id: format!("comment-{}", index),
        avatar: placeholder_image(&item.author, COMMENT_AVATAR_SIZE),
        author: item.author,
        text: item.text,
        likes: item.likes,
        time: item.time,
    }
}

#[derive(Clone)]
pub struct ContentProvider {
    backend: Arc<dyn GenerativeBackend>,
}

impl ContentProvider {
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self { backend }
    }

    /// The fixed sample catalog
    pub fn baseline(&self) -> Vec<VideoRecord> {
        catalog::baseline()
    }

    /// Generate search results for `query`
    ///
    /// Callers handle the empty query themselves by restoring the baseline; this
    /// always issues a backend request. Returns an empty list on any failure.
    pub async fn search(&self, query: &str) -> Vec<VideoRecord> {
        match self.try_search(query).await {
            Ok(videos) => {
                tracing::info!(
                    query = %query,
                    results = videos.len(),
                    provider = self.backend.name(),
                    "Video search completed"
                );
                videos
            }
            Err(e) => {
                tracing::error!(
                    query = %query,
                    error = %e,
                    provider = self.backend.name(),
                    "Video search failed"
                );
                Vec::new()
            }
        }
    }

    /// Generate comments for the video titled `title`
    ///
    /// Returns an empty list on any failure.
    pub async fn comments_for(&self, title: &str) -> Vec<CommentRecord> {
        match self.try_comments_for(title).await {
            Ok(comments) => {
                tracing::info!(
                    title = %title,
                    comments = comments.len(),
                    provider = self.backend.name(),
                    "Comment generation completed"
                );
                comments
            }
            Err(e) => {
                tracing::error!(
                    title = %title,
                    error = %e,
                    provider = self.backend.name(),
                    "Comment generation failed"
                );
                Vec::new()
            }
        }
    }

    async fn try_search(&self, query: &str) -> AppResult<Vec<VideoRecord>> {
        let payload = self
            .backend
            .generate(&search_prompt(query), &video_schema())
            .await?;

        let items: Vec<GeneratedVideo> = serde_json::from_value(payload)?;
        let batch = Utc::now().timestamp_millis();

        Ok(items
            .into_iter()
            .enumerate()
            .map(|(index, item)| video_from_generated(item, batch, index))
            .collect())
    }

    async fn try_comments_for(&self, title: &str) -> AppResult<Vec<CommentRecord>> {
        let payload = self
            .backend
            .generate(&comments_prompt(title), &comment_schema())
            .await?;

        let items: Vec<GeneratedComment> = serde_json::from_value(payload)?;

        Ok(items
            .into_iter()
            .enumerate()
            .map(|(index, item)| comment_from_generated(item, index))
            .collect())
    }
}
