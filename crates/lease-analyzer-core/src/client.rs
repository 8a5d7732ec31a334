//! Model client abstraction

use async_trait::async_trait;

use crate::error::AnalyzerError;
use crate::request::AnalysisRequest;

/// Narrow interface over a hosted LLM: one synchronous call per request,
/// no retries, no streaming. Implementations return the model's free-text
/// answer; parsing it is the pipeline's job.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn submit(&self, request: &AnalysisRequest) -> Result<String, AnalyzerError>;
}
