//! Input validation for task status lookups
//!
//! Task ids arrive as raw path segments and are checked before anything touches
//! the store.

use thiserror::Error;
use uuid::Uuid;

/// A path parameter that is not UUID text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid task id {input:?}: {reason}")]
pub struct InvalidTaskId {
    /// The rejected text, exactly as received
    pub input: String,
    /// Why the UUID parser refused it
    pub reason: String,
}

/// Validates that `raw` is a syntactically valid UUID
///
/// Accepts every textual form `Uuid::try_parse` does: hyphenated, simple
/// (32 hex digits), braced and `urn:uuid:` prefixed, in any letter case and for
/// any version or variant. The caller keeps using `raw` as the lookup key; the
/// parsed value is returned only for logging and tests.
pub fn validate_task_id(raw: &str) -> Result<Uuid, InvalidTaskId> {
    Uuid::try_parse(raw).map_err(|e| InvalidTaskId {
        input: raw.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accepts_standard_forms() {
        let accepted = [
            "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "3FA85F64-5717-4562-B3FC-2C963F66AFA6",
            "3fa85f6457174562b3fc2c963f66afa6",
            "{3fa85f64-5717-4562-b3fc-2c963f66afa6}",
            "urn:uuid:3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "00000000-0000-0000-0000-000000000000",
            "ffffffff-ffff-ffff-ffff-ffffffffffff",
        ];

        for input in accepted {
            assert!(validate_task_id(input).is_ok(), "should accept {input}");
        }
    }

    #[test]
    fn test_rejects_malformed_text() {
        let rejected = [
            "",
            "not-a-uuid",
            "3fa85f64-5717-4562-b3fc-2c963f66afa",
            "3fa85f64-5717-4562-b3fc-2c963f66afa67",
            "3fa85f64-5717-4562-b3fc_2c963f66afa6",
            "3fa85f64-5717-4562-b3fc-2c963f66afag",
            " 3fa85f64-5717-4562-b3fc-2c963f66afa6",
        ];

        for input in rejected {
            assert!(validate_task_id(input).is_err(), "should reject {input:?}");
        }
    }

    #[test]
    fn test_error_carries_rejected_text() {
        let err = validate_task_id("not-a-uuid").unwrap_err();
        assert_eq!(err.input, "not-a-uuid");
        assert!(!err.reason.is_empty());
        assert!(err.to_string().starts_with("invalid task id \"not-a-uuid\""));
    }

    proptest! {
        #[test]
        fn prop_any_uuid_text_is_accepted(bytes in any::<[u8; 16]>(), upper in any::<bool>()) {
            let uuid = Uuid::from_bytes(bytes);
            let mut text = uuid.hyphenated().to_string();
            if upper {
                text = text.to_uppercase();
            }
            prop_assert_eq!(validate_task_id(&text).unwrap(), uuid);
            prop_assert_eq!(validate_task_id(&uuid.simple().to_string()).unwrap(), uuid);
        }

        #[test]
        fn prop_non_hex_text_is_rejected(input in "[g-zG-Z_ ]{0,40}") {
            prop_assert!(validate_task_id(&input).is_err());
        }
    }
}
