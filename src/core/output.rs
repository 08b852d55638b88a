//! Public output types for boxcheck command responses.
//!
//! Batch commands report one outcome per input plus a summary; a failed
//! input never short-circuits the rest of the batch.

use serde::Serialize;

/// Standardized batch execution result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkResult<T: Serialize> {
    pub action: String,
    pub results: Vec<ItemOutcome<T>>,
    pub summary: BulkSummary,
}

/// Outcome for a single input in a batch.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOutcome<T: Serialize> {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(flatten)]
    pub result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Summary of batch results.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl<T: Serialize> BulkResult<T> {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            results: Vec::new(),
            summary: BulkSummary::default(),
        }
    }

    pub fn record(&mut self, input: String, result: T) {
        self.summary.total += 1;
        self.summary.succeeded += 1;
        self.results.push(ItemOutcome {
            input,
            result: Some(result),
            error: None,
        });
    }

    pub fn record_error(&mut self, input: String, error: String) {
        self.summary.total += 1;
        self.summary.failed += 1;
        self.results.push(ItemOutcome {
            input,
            result: None,
            error: Some(error),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Dummy {
        value: u8,
    }

    #[test]
    fn record_and_record_error_update_summary() {
        let mut bulk = BulkResult::new("check");
        bulk.record("CSQU3054383".to_string(), Dummy { value: 3 });
        bulk.record_error("SHORT".to_string(), "too short".to_string());

        assert_eq!(bulk.summary.total, 2);
        assert_eq!(bulk.summary.succeeded, 1);
        assert_eq!(bulk.summary.failed, 1);
        assert_eq!(bulk.results.len(), 2);
    }

    #[test]
    fn item_result_fields_are_flattened() {
        let mut bulk = BulkResult::new("check");
        bulk.record("CSQU3054383".to_string(), Dummy { value: 3 });

        let json = serde_json::to_value(&bulk).unwrap();
        assert_eq!(json["results"][0]["input"], "CSQU3054383");
        assert_eq!(json["results"][0]["value"], 3);
        assert_eq!(json["summary"]["succeeded"], 1);
    }
}
