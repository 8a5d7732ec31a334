//! Lease report data model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Key information extracted from a lease agreement.
///
/// Extraction is best-effort: every field is independently optional and an
/// absent value is not an error. The report exists only for the duration of
/// one request/response cycle and is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseReport {
    /// Date the agreement was signed
    pub agreement_date: Option<NaiveDate>,
    /// Date the lease term begins
    pub term_start_date: Option<NaiveDate>,
    /// Date the lease term ends
    pub term_end_date: Option<NaiveDate>,
    /// End date of any development/construction period
    pub development_term_end_date: Option<NaiveDate>,
    /// Landlord/property owner name
    pub landlord_name: Option<String>,
    /// Tenant/lessee name
    pub tenant_name: Option<String>,
    /// Leased property size in acres
    pub acres: Option<Decimal>,
}

impl LeaseReport {
    /// JSON schema for the model's structured-output mode, in the OpenAPI
    /// subset the Gemini API accepts. Every property is nullable so the
    /// model can omit values it cannot find in the document.
    pub fn response_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "agreementDate": { "type": "string", "format": "date", "nullable": true },
                "termStartDate": { "type": "string", "format": "date", "nullable": true },
                "termEndDate": { "type": "string", "format": "date", "nullable": true },
                "developmentTermEndDate": { "type": "string", "format": "date", "nullable": true },
                "landlordName": { "type": "string", "nullable": true },
                "tenantName": { "type": "string", "nullable": true },
                "acres": { "type": "number", "nullable": true }
            }
        })
    }
}
