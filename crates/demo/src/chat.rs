//! Chat seam.
//!
//! The actual chat completion is an external collaborator; this module only
//! defines the provider trait and the in-band error mapping. Provider
//! failures surface as reply text, never as transport errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

/// System prompt steering the assistant toward the demo records.
const SYSTEM_PROMPT: &str = "You are a helpful retail assistant that can help users with product \
     information, stock availability, and tracking shipments. Use the \
     available functions to retrieve accurate information. When users ask \
     about items, use IDs like 'item-001', 'item-002', or 'item-003'. For \
     tracking, use numbers like 'TRK-2025-001' or 'TRK-2025-002'.";

/// External chat-completion provider: send a prompt pair, get reply text.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn reply(&self, system_prompt: &str, user_message: &str) -> anyhow::Result<String>;
}

/// Default provider used when no external provider is wired in.
pub struct UnconfiguredChat;

#[async_trait]
impl ChatProvider for UnconfiguredChat {
    async fn reply(&self, _system_prompt: &str, _user_message: &str) -> anyhow::Result<String> {
        Err(anyhow::anyhow!("no chat completion provider is configured"))
    }
}

/// Chat service wrapping a provider with the demo system prompt.
#[derive(Clone)]
pub struct ChatService {
    provider: Arc<dyn ChatProvider>,
}

impl ChatService {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    /// Process one user message. Never fails: provider errors are folded
    /// into the reply text.
    pub async fn chat(&self, user_message: &str) -> String {
        info!(user_message, "processing chat message");

        match self.provider.reply(SYSTEM_PROMPT, user_message).await {
            Ok(reply) => {
                info!(reply = %reply, "chat reply");
                reply
            }
            Err(e) => {
                error!(error = %e, "chat provider failed");
                format!(
                    "Error processing your request: {e}. Note: This feature requires a configured chat completion provider."
                )
            }
        }
    }
}
