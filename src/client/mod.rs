pub mod claude;

pub use claude::ClaudeClient;

use async_trait::async_trait;

use crate::error::Result;

/// A text-completion endpoint: one prompt in, the model's raw reply out.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Single round trip. `None` overrides fall back to the client's configured defaults.
    async fn send(
        &self,
        prompt: &str,
        model: Option<&str>,
        max_tokens: Option<u32>,
    ) -> Result<String>;
}
