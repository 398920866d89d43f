pub mod catalog;
pub mod content;
pub mod generative;
pub mod images;

pub use content::ContentProvider;
