//! Record validation for the signup form.
//!
//! The validator applies the rule chains from [`super::rules`] to every
//! field of a record and gathers the failures into an [`ErrorMap`].

use super::models::{ErrorMap, Field, Record};
use super::rules::rules_for;

/// Checks a draft record against the form's field rules.
///
/// Validation is pure: the same record always produces the same result.
///
/// # Examples
///
/// ```
/// use signup_form::domain::{Field, Record, RecordValidator};
///
/// let accepted = RecordValidator::validate(&Record::new("Alice", "30", "alice@x.com"));
/// assert!(accepted.is_ok());
///
/// let errors = RecordValidator::validate(&Record::new("Al", "17", "al@x.com")).unwrap_err();
/// assert_eq!(errors.get(Field::Age), Some("You need to be at least 18 years old"));
/// assert_eq!(errors.len(), 1);
/// ```
pub struct RecordValidator;

impl RecordValidator {
    /// Validates every field of `draft`.
    ///
    /// All three fields are checked even when an earlier one has already
    /// failed. On success the record is returned exactly as typed, with no
    /// trimming or normalisation.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorMap`] holding one message for each failing field.
    pub fn validate(draft: &Record) -> Result<Record, ErrorMap> {
        let mut errors = ErrorMap::new();
        for field in Field::ALL {
            if let Some(message) = Self::validate_field(field, draft.get(field)) {
                errors.insert(field, message);
            }
        }

        if errors.is_empty() {
            tracing::debug!("draft passed validation");
            Ok(draft.clone())
        } else {
            tracing::debug!(
                fields = ?errors.fields().map(Field::id).collect::<Vec<_>>(),
                "draft failed validation"
            );
            Err(errors)
        }
    }

    /// Runs the rule chain for a single field and returns the message of
    /// the first rule that fails.
    pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
        rules_for(field)
            .iter()
            .find(|rule| !rule.passes(value))
            .map(|rule| rule.message)
    }
}
