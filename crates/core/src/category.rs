//! Category payload rules.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::types::DbId;
use crate::validation::not_blank;

/// Request body for `POST /category` and `PUT /category/{id}`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    #[validate(
        custom(function = "not_blank", message = "Category name cannot be blank"),
        length(max = 50, message = "Category name cannot be longer than 50 characters")
    )]
    pub name: String,

    /// Owning user. Must exist when the category is created or updated.
    #[schema(value_type = i64)]
    pub user_id: DbId,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::CoreError;
    use crate::validation::validate_payload;

    #[test]
    fn deserializes_camel_case() {
        let input: CategoryInput =
            serde_json::from_str(r#"{"name":"Work","userId":1}"#).expect("valid json");
        assert_eq!(input.name, "Work");
        assert_eq!(input.user_id, 1);
    }

    #[test]
    fn blank_name_is_rejected() {
        let input = CategoryInput {
            name: "  ".into(),
            user_id: 1,
        };
        assert_matches!(
            validate_payload(&input),
            Err(CoreError::Validation(msg)) if msg == "Category name cannot be blank"
        );
    }

    #[test]
    fn name_length_limit_is_fifty_characters() {
        let ok = CategoryInput {
            name: "n".repeat(50),
            user_id: 1,
        };
        assert!(validate_payload(&ok).is_ok());

        let too_long = CategoryInput {
            name: "n".repeat(51),
            user_id: 1,
        };
        assert!(validate_payload(&too_long).is_err());
    }
}
