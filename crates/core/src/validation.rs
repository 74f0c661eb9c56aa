//! Shared field-rule helpers for request payloads.
//!
//! Payload structs derive [`validator::Validate`]; the custom rules below plug
//! into `#[validate(custom(...))]`, and [`validate_payload`] turns a failed
//! validation into a single [`CoreError::Validation`] message.

use std::borrow::Cow;

use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Characters of which a password must contain at least one.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Separator between individual violation messages.
const MESSAGE_SEPARATOR: &str = ", ";

/// Reject strings that are empty or contain only whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank")
            .with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

/// Require at least one character from [`SPECIAL_CHARACTERS`].
pub fn contains_special_character(value: &str) -> Result<(), ValidationError> {
    if value.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return Ok(());
    }
    Err(ValidationError::new("special_character")
        .with_message(Cow::Borrowed("must contain a special character")))
}

/// Check email shape, leaving blank values to [`not_blank`].
pub fn email_shape(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.validate_email() {
        return Ok(());
    }
    Err(ValidationError::new("email").with_message(Cow::Borrowed("must be a valid email")))
}

/// Position of a rule within a field's message list.
fn rule_rank(code: &str) -> u8 {
    match code {
        "not_blank" => 0,
        "length" => 1,
        _ => 2,
    }
}

/// Run the derived rules on `payload`, mapping failures to a joined message.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), CoreError> {
    payload
        .validate()
        .map_err(|errors| CoreError::Validation(join_messages(&errors)))
}

/// Flatten validation errors into one message.
///
/// Fields are ordered by name. Within a field the blank check comes first,
/// then the length bound, then shape rules (email, special character).
pub fn join_messages(errors: &ValidationErrors) -> String {
    let mut fields: Vec<(String, Vec<String>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let field = field.to_string();
            let mut errs: Vec<&ValidationError> = errs.iter().collect();
            errs.sort_by_key(|e| rule_rank(&e.code));
            let messages = errs
                .into_iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{field} is invalid"),
                })
                .collect();
            (field, messages)
        })
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(_, messages)| messages)
        .collect::<Vec<_>>()
        .join(MESSAGE_SEPARATOR)
}
