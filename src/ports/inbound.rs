//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: the UI drives the chat loop through this.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive chat loop until the user quits.
    async fn run(&self) -> Result<(), DomainError>;
}
