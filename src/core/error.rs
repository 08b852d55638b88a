use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationInvalidArgument,

    ContainerMalformedInput,
    ContainerInvalidOwnerCode,
    ContainerInvalidCategoryCode,
    ContainerInvalidSerial,
    ContainerInvalidCheckDigit,
    ContainerInvalidLetter,

    InternalIoError,
    InternalJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::ContainerMalformedInput => "container.malformed_input",
            ErrorCode::ContainerInvalidOwnerCode => "container.invalid_owner_code",
            ErrorCode::ContainerInvalidCategoryCode => "container.invalid_category_code",
            ErrorCode::ContainerInvalidSerial => "container.invalid_serial",
            ErrorCode::ContainerInvalidCheckDigit => "container.invalid_check_digit",
            ErrorCode::ContainerInvalidLetter => "container.invalid_letter",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MalformedInputDetails {
    pub input: String,
    pub significant_chars: usize,
    pub required_chars: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidSegmentDetails {
    pub segment: String,
    pub found: String,
    pub expected: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidLetterDetails {
    pub letter: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
    pub retryable: Option<bool>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
            retryable: None,
        }
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        id: Option<String>,
    ) -> Self {
        let details = serde_json::to_value(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.into(),
            id,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            details,
        )
    }

    pub fn malformed_input(input: impl Into<String>, significant_chars: usize) -> Self {
        let details = serde_json::to_value(MalformedInputDetails {
            input: input.into(),
            significant_chars,
            required_chars: 10,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::ContainerMalformedInput,
            "Container number too short",
            details,
        )
        .with_hint("Container numbers need at least 10 significant characters, e.g. CSQU305438")
    }

    pub fn invalid_owner_code(found: impl Into<String>) -> Self {
        Self::invalid_segment(
            ErrorCode::ContainerInvalidOwnerCode,
            "Invalid owner code",
            "ownerCode",
            found,
            "3 uppercase letters A-Z",
        )
    }

    pub fn invalid_category_code(found: impl Into<String>) -> Self {
        Self::invalid_segment(
            ErrorCode::ContainerInvalidCategoryCode,
            "Invalid equipment category",
            "category",
            found,
            "a single letter A-Z",
        )
    }

    pub fn invalid_serial(found: impl Into<String>) -> Self {
        Self::invalid_segment(
            ErrorCode::ContainerInvalidSerial,
            "Invalid serial number",
            "serial",
            found,
            "6 digits 0-9",
        )
    }

    pub fn invalid_check_digit(found: impl Into<String>) -> Self {
        Self::invalid_segment(
            ErrorCode::ContainerInvalidCheckDigit,
            "Invalid check digit",
            "checkDigit",
            found,
            "a single digit 0-9",
        )
    }

    fn invalid_segment(
        code: ErrorCode,
        message: &str,
        segment: &str,
        found: impl Into<String>,
        expected: &str,
    ) -> Self {
        let details = serde_json::to_value(InvalidSegmentDetails {
            segment: segment.to_string(),
            found: found.into(),
            expected: expected.to_string(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        Self::new(code, message, details)
    }

    pub fn invalid_letter(letter: char) -> Self {
        let details = serde_json::to_value(InvalidLetterDetails {
            letter: letter.to_string(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::ContainerInvalidLetter,
            "Letter has no ISO 6346 value",
            details,
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::to_value(InternalIoErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let error = error.into();
        let details = serde_json::json!({
            "error": error,
            "context": context,
        });

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_dotted_strings() {
        assert_eq!(
            ErrorCode::ContainerMalformedInput.as_str(),
            "container.malformed_input"
        );
        assert_eq!(
            ErrorCode::ContainerInvalidOwnerCode.as_str(),
            "container.invalid_owner_code"
        );
        assert_eq!(ErrorCode::InternalIoError.as_str(), "internal.io_error");
    }

    #[test]
    fn malformed_input_carries_counts() {
        let err = Error::malformed_input("SHORT", 5);
        assert_eq!(err.code, ErrorCode::ContainerMalformedInput);
        assert_eq!(err.details["significantChars"], 5);
        assert_eq!(err.details["requiredChars"], 10);
        assert!(!err.hints.is_empty());
    }

    #[test]
    fn invalid_segment_details_name_the_segment() {
        let err = Error::invalid_serial("12X456");
        assert_eq!(err.details["segment"], "serial");
        assert_eq!(err.details["found"], "12X456");
    }

    #[test]
    fn with_hint_appends() {
        let err = Error::invalid_owner_code("1BC").with_hint("extra");
        assert_eq!(err.hints.len(), 1);
        assert_eq!(err.hints[0].message, "extra");
    }
}
