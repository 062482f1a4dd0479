// askql-core/src/ports/generator.rs

use crate::error::AskqlError;
use async_trait::async_trait;

/// A text-generation service that turns a fully rendered prompt into SQL.
#[async_trait]
pub trait SqlGenerator: Send + Sync {
    /// One call, no retry. Returns the raw completion text.
    async fn generate(&self, prompt: &str) -> Result<String, AskqlError>;

    fn model_name(&self) -> &str;
}
