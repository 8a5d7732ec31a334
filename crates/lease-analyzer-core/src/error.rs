//! Error types for the lease analysis pipeline

use thiserror::Error;

/// Pipeline error taxonomy. Every variant is fatal to the request it
/// occurs in; nothing here is retried.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The uploaded bytes could not be read or encoded.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The outbound model call failed (connect, auth, rate limit, or the
    /// provider rejected/mangled the request).
    #[error("Provider error: {0}")]
    Provider(String),

    /// The model's answer did not deserialize into the report schema.
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),
}
