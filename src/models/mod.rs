pub mod comment;
pub mod video;

pub use comment::{CommentRecord, GeneratedComment};
pub use video::{GeneratedVideo, VideoRecord, LIVE_DURATION};
