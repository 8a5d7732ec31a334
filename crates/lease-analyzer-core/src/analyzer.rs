//! Upload-to-report pipeline

use std::sync::Arc;

use tracing::debug;

use crate::client::ModelClient;
use crate::error::AnalyzerError;
use crate::report::LeaseReport;
use crate::request::AnalysisRequest;

/// Drives one document through build -> submit -> parse. Holds no
/// per-request state; a single instance is shared across requests.
pub struct LeaseAnalyzer {
    client: Arc<dyn ModelClient>,
}

impl LeaseAnalyzer {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self { client }
    }

    /// Analyze a PDF document and return the extracted report.
    ///
    /// Exactly one model call per invocation, no retries. The model's
    /// answer must deserialize into [`LeaseReport`] or the whole request
    /// fails with [`AnalyzerError::SchemaMismatch`]; there is no partial
    /// result and no raw-text fallback.
    pub async fn analyze(&self, document: &[u8]) -> Result<LeaseReport, AnalyzerError> {
        let request = AnalysisRequest::for_document(document);
        let answer = self.client.submit(&request).await?;
        debug!("Model answered with {} chars", answer.len());
        parse_report(&answer)
    }
}

/// Strict-typed response handling: the answer is the report or an error.
fn parse_report(text: &str) -> Result<LeaseReport, AnalyzerError> {
    serde_json::from_str(text).map_err(|e| AnalyzerError::SchemaMismatch(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use rust_decimal::Decimal;

    /// Stub model returning a canned result and counting calls.
    struct StubModel {
        result: Result<String, String>,
        calls: AtomicUsize,
    }

    impl StubModel {
        fn answering(text: &str) -> Self {
            Self {
                result: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                result: Err(message.to_string()),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ModelClient for StubModel {
        async fn submit(&self, _request: &AnalysisRequest) -> Result<String, AnalyzerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result
                .clone()
                .map_err(AnalyzerError::Provider)
        }
    }

    fn analyzer_with(stub: Arc<StubModel>) -> LeaseAnalyzer {
        LeaseAnalyzer::new(stub)
    }

    #[tokio::test]
    async fn conforming_answer_yields_typed_report() {
        let stub = Arc::new(StubModel::answering(
            r#"{"agreementDate":"2023-01-15","termStartDate":"2023-02-01","termEndDate":"2033-01-31","developmentTermEndDate":null,"landlordName":"Acme Properties","tenantName":"Example Tenant LLC","acres":12.5}"#,
        ));
        let report = analyzer_with(stub.clone())
            .analyze(b"%PDF-1.7 lease")
            .await
            .unwrap();

        assert_eq!(report.landlord_name.as_deref(), Some("Acme Properties"));
        assert_eq!(report.acres, Some(Decimal::new(125, 1)));
        assert_eq!(report.development_term_end_date, None);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn malformed_answer_is_a_schema_mismatch() {
        let stub = Arc::new(StubModel::answering("not json"));
        let err = analyzer_with(stub).analyze(b"%PDF-1.7").await.unwrap_err();

        assert!(matches!(err, AnalyzerError::SchemaMismatch(_)));
    }

    #[tokio::test]
    async fn provider_failure_propagates_without_retry() {
        let stub = Arc::new(StubModel::failing("connection reset"));
        let err = analyzer_with(stub.clone())
            .analyze(b"%PDF-1.7")
            .await
            .unwrap_err();

        assert!(matches!(err, AnalyzerError::Provider(_)));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_document_still_reaches_the_model() {
        let stub = Arc::new(StubModel::answering("{}"));
        let report = analyzer_with(stub.clone()).analyze(&[]).await.unwrap();

        assert_eq!(report, LeaseReport::default());
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }
}
