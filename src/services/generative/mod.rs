/// Generative backend abstraction
///
/// The content provider never talks to a model client directly. It hands a prompt
/// and a structured-output schema to a [`GenerativeBackend`] and receives parsed JSON
/// back, which keeps the mapping logic testable against a stub.
use crate::error::AppResult;

pub mod gemini;
pub mod schema;

pub use gemini::GeminiBackend;
pub use schema::ResponseSchema;

/// Trait for generative text backends with structured JSON output
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Generate content for `prompt`, constrained to `schema`
    ///
    /// Returns the parsed JSON payload. Conformance to the schema is not guaranteed
    /// by the backend and must be validated by the caller.
    async fn generate(&self, prompt: &str, schema: &ResponseSchema) -> AppResult<serde_json::Value>;

    /// Backend name for logging and debugging
    fn name(&self) -> &'static str;
}
