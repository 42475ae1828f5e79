//! Inbound port. Delivery adapters (CLI, tool server) drive the application.

use crate::domain::DomainError;

/// Input port: a front end that runs until its work is done.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the front end to completion.
    async fn run(&self) -> Result<(), DomainError>;
}
