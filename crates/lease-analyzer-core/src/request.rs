//! Provider-neutral chat request construction

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde_json::Value;

use crate::report::LeaseReport;

/// Instruction sent alongside every document.
pub const ANALYZE_INSTRUCTION: &str = "Analyze the given document";

/// Media type attached to the encoded document part.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// A single-turn analysis request: one instruction, one inline document,
/// and the schema the model's answer must conform to. Built fresh for each
/// upload; there is no conversation state carried between requests.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Natural-language instruction for the model
    pub instruction: String,
    /// The document to analyze
    pub document: DocumentPart,
    /// Target shape of the model's JSON answer
    pub response_schema: Value,
}

/// Base64-encoded document content tagged with its media type.
#[derive(Debug, Clone)]
pub struct DocumentPart {
    pub mime_type: String,
    pub data: String,
}

impl AnalysisRequest {
    /// Build a request for a PDF document. Encoding in-memory bytes cannot
    /// fail; empty input produces an empty base64 payload and the request
    /// is still well-formed (document validity is the model's problem).
    pub fn for_document(bytes: &[u8]) -> Self {
        Self {
            instruction: ANALYZE_INSTRUCTION.to_string(),
            document: DocumentPart {
                mime_type: PDF_MIME_TYPE.to_string(),
                data: BASE64.encode(bytes),
            },
            response_schema: LeaseReport::response_schema(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn encodes_document_as_base64_pdf() {
        let request = AnalysisRequest::for_document(b"%PDF-1.7 fake");

        assert_eq!(request.instruction, "Analyze the given document");
        assert_eq!(request.document.mime_type, "application/pdf");
        assert_eq!(
            BASE64.decode(&request.document.data).unwrap(),
            b"%PDF-1.7 fake"
        );
    }

    #[test]
    fn empty_document_still_builds_a_valid_request() {
        let request = AnalysisRequest::for_document(&[]);
        assert_eq!(request.document.data, "");
        assert!(request.response_schema["properties"].is_object());
    }

    proptest! {
        /// Decoding the document part always returns the original bytes.
        #[test]
        fn document_part_round_trips(bytes in prop::collection::vec(any::<u8>(), 0..2000)) {
            let request = AnalysisRequest::for_document(&bytes);
            let decoded = BASE64.decode(&request.document.data).unwrap();
            prop_assert_eq!(bytes, decoded);
        }
    }
}
