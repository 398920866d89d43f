use serde::Serialize;

use crate::{
    error::{AppError, AppResult},
    models::{CommentRecord, VideoRecord},
};

/// Category chips shown above the listing grid
pub const FILTER_TAGS: [&str; 11] = [
    "All",
    "Gaming",
    "Music",
    "Live",
    "Mixes",
    "React Routers",
    "Computer programming",
    "Podcasts",
    "News",
    "Recently uploaded",
    "New to you",
];

/// Everything the frontend needs to render the current screen
///
/// Only the foreground request flow writes it. Overlapping searches are not
/// sequenced: whichever resolves last replaces the list.
#[derive(Debug, Clone)]
pub struct ViewState {
    videos: Vec<VideoRecord>,
    loading: bool,
    current_search: String,
    sidebar_open: bool,
    active_video: Option<String>,
    comments: Vec<CommentRecord>,
    loading_comments: bool,
}

/// Listing view at `/`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingView {
    pub videos: Vec<VideoRecord>,
    pub loading: bool,
    pub current_search: String,
    pub sidebar_open: bool,
    pub filter_tags: Vec<&'static str>,
}

/// Detail view at `/watch/:id`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailView {
    pub video: VideoRecord,
    pub comments: Vec<CommentRecord>,
    pub loading_comments: bool,
    /// Every other video in the current list
    pub up_next: Vec<VideoRecord>,
    pub sidebar_open: bool,
}

impl ViewState {
    pub fn new(baseline: Vec<VideoRecord>) -> Self {
        Self {
            videos: baseline,
            loading: false,
            current_search: String::new(),
            sidebar_open: true,
            active_video: None,
            comments: Vec::new(),
            loading_comments: false,
        }
    }

    pub fn begin_search(&mut self, query: &str) {
        self.loading = true;
        self.current_search = query.to_string();
    }

    pub fn finish_search(&mut self, results: Vec<VideoRecord>) {
        self.videos = results;
        self.loading = false;
    }

    pub fn restore_baseline(&mut self, baseline: Vec<VideoRecord>) {
        self.videos = baseline;
        self.current_search.clear();
        self.loading = false;
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }

    /// Make `id` the active video
    ///
    /// Fails with `NotFound` when `id` is not in the displayed list.
    pub fn select_video(&mut self, id: &str) -> AppResult<VideoRecord> {
        let video = self
            .videos
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Video {} not found", id)))?;

        if self.active_video.as_deref() != Some(id) {
            self.comments.clear();
        }
        self.active_video = Some(video.id.clone());

        Ok(video)
    }

    pub fn begin_comments(&mut self) {
        self.comments.clear();
        self.loading_comments = true;
    }

    /// Store comments generated for `video_id`
    ///
    /// Returns false, dropping the comments, when another video became active
    /// while they were generated.
    pub fn finish_comments(&mut self, video_id: &str, comments: Vec<CommentRecord>) -> bool {
        if self.active_video.as_deref() != Some(video_id) {
            return false;
        }
        self.comments = comments;
        self.loading_comments = false;
        true
    }

    pub fn listing(&self) -> ListingView {
        ListingView {
            videos: self.videos.clone(),
            loading: self.loading,
            current_search: self.current_search.clone(),
            sidebar_open: self.sidebar_open,
            filter_tags: FILTER_TAGS.to_vec(),
        }
    }

    pub fn detail(&self, video: VideoRecord) -> DetailView {
        let is_active = self.active_video.as_deref() == Some(video.id.as_str());
        let up_next = self
            .videos
            .iter()
            .filter(|v| v.id != video.id)
            .cloned()
            .collect();

        DetailView {
            comments: if is_active { self.comments.clone() } else { Vec::new() },
            loading_comments: is_active && self.loading_comments,
            up_next,
            sidebar_open: self.sidebar_open,
            video,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog;

    fn comment(id: &str) -> CommentRecord {
        CommentRecord {
            id: id.to_string(),
            author: "alex".to_string(),
            avatar: "https://picsum.photos/seed/alex/50/50".to_string(),
            text: "nice".to_string(),
            likes: 1,
            time: "now".to_string(),
        }
    }

    #[test]
    fn test_new_shows_baseline() {
        let state = ViewState::new(catalog::baseline());
        let listing = state.listing();
        assert_eq!(listing.videos, catalog::baseline());
        assert!(!listing.loading);
        assert!(listing.sidebar_open);
        assert_eq!(listing.current_search, "");
        assert_eq!(listing.filter_tags.len(), 11);
    }

    #[test]
    fn test_search_lifecycle() {
        let mut state = ViewState::new(catalog::baseline());

        state.begin_search("lofi");
        assert!(state.loading);
        assert_eq!(state.current_search, "lofi");

        state.finish_search(Vec::new());
        assert!(!state.loading);
        assert!(state.videos.is_empty());
        assert_eq!(state.current_search, "lofi");

        state.restore_baseline(catalog::baseline());
        assert_eq!(state.videos.len(), 8);
        assert_eq!(state.current_search, "");
    }

    #[test]
    fn test_last_finished_search_wins() {
        let mut state = ViewState::new(catalog::baseline());
        let baseline = catalog::baseline();

        state.begin_search("first");
        state.begin_search("second");
        state.finish_search(baseline[..2].to_vec());
        state.finish_search(baseline[..1].to_vec());

        assert_eq!(state.videos.len(), 1);
        assert_eq!(state.current_search, "second");
    }

    #[test]
    fn test_toggle_sidebar() {
        let mut state = ViewState::new(Vec::new());
        assert!(!state.toggle_sidebar());
        assert!(state.toggle_sidebar());
    }

    #[test]
    fn test_select_unknown_video_is_not_found() {
        let mut state = ViewState::new(catalog::baseline());
        let result = state.select_video("missing");
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(state.active_video, None);
    }

    #[test]
    fn test_detail_excludes_active_video_from_up_next() {
        let mut state = ViewState::new(catalog::baseline());
        let video = state.select_video("3").unwrap();

        let detail = state.detail(video);
        assert_eq!(detail.video.id, "3");
        assert_eq!(detail.up_next.len(), 7);
        assert!(detail.up_next.iter().all(|v| v.id != "3"));
    }

    #[test]
    fn test_comments_for_deselected_video_are_dropped() {
        let mut state = ViewState::new(catalog::baseline());
        state.select_video("1").unwrap();
        state.begin_comments();
        let second = state.select_video("2").unwrap();

        assert!(!state.finish_comments("1", vec![comment("comment-0")]));
        assert!(state.finish_comments("2", vec![comment("comment-0")]));

        let detail = state.detail(second);
        assert_eq!(detail.comments.len(), 1);
        assert!(!detail.loading_comments);
    }

    #[test]
    fn test_selecting_new_video_clears_comments() {
        let mut state = ViewState::new(catalog::baseline());
        state.select_video("1").unwrap();
        state.finish_comments("1", vec![comment("comment-0")]);

        let video = state.select_video("2").unwrap();
        assert!(state.detail(video).comments.is_empty());
    }
}
