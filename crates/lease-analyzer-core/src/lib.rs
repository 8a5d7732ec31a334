//! Core pipeline for lease document analysis.
//!
//! Takes raw PDF bytes, wraps them in a single-turn chat request (fixed
//! instruction + base64 document + target schema), submits it to a hosted
//! model through the [`ModelClient`] seam, and strictly parses the answer
//! into a [`LeaseReport`].

pub mod analyzer;
pub mod client;
pub mod error;
pub mod gemini;
pub mod report;
pub mod request;

pub use analyzer::LeaseAnalyzer;
pub use client::ModelClient;
pub use error::AnalyzerError;
pub use gemini::{GeminiClient, GeminiConfig};
pub use report::LeaseReport;
pub use request::AnalysisRequest;
