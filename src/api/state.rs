use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    services::{generative::GenerativeBackend, ContentProvider},
    view_state::ViewState,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub content: ContentProvider,
    /// Never held across a backend call
    pub view: Arc<RwLock<ViewState>>,
}

impl AppState {
    /// Creates application state showing the baseline catalog
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        let content = ContentProvider::new(backend);
        let view = ViewState::new(content.baseline());

        Self {
            content,
            view: Arc::new(RwLock::new(view)),
        }
    }
}
