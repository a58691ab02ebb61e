/*
 * Responsibility
 * - Contract every business activity implements
 * - One typed request in, one typed result or classified ActivityError out
 */
use async_trait::async_trait;
use serde::Serialize;

use crate::pipeline::error::ActivityError;

#[async_trait]
pub trait Activity: Send + Sync {
    type Request: Send + 'static;
    type Result: Serialize + Send;

    async fn handle_request(&self, request: Self::Request) -> Result<Self::Result, ActivityError>;
}
