//! User field rules, the registration payload and single-field updates.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::CoreError;
use crate::validation::{contains_special_character, email_shape, not_blank, validate_payload};

/// Request body for `POST /user/register`.
#[derive(Deserialize, Validate, ToSchema)]
pub struct RegisterUser {
    #[validate(
        custom(function = "not_blank", message = "Username must not be blank"),
        length(
            min = 5,
            max = 15,
            message = "Username must be between 5 and 15 characters"
        )
    )]
    pub username: String,

    #[validate(
        custom(function = "not_blank", message = "Email is required"),
        custom(function = "email_shape", message = "Please enter a valid email")
    )]
    pub email: String,

    #[validate(
        custom(function = "not_blank", message = "Password cannot be empty"),
        length(
            min = 5,
            max = 40,
            message = "Password must be between 5 and 40 characters"
        ),
        custom(
            function = "contains_special_character",
            message = "Password must contain at least one special character"
        )
    )]
    pub password: String,
}

// Passwords stay out of debug output.
impl std::fmt::Debug for RegisterUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A single mutable user field together with its new value.
pub enum UserField {
    Username(String),
    Email(String),
    Password(String),
}

impl UserField {
    /// Name of the field as it appears in the URL and in messages.
    pub fn name(&self) -> &'static str {
        match self {
            UserField::Username(_) => "username",
            UserField::Email(_) => "email",
            UserField::Password(_) => "password",
        }
    }

    /// Apply the same rules `RegisterUser` enforces to this one field.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            UserField::Username(value) => validate_payload(&UsernameRule {
                username: value.clone(),
            }),
            UserField::Email(value) => validate_payload(&EmailRule {
                email: value.clone(),
            }),
            UserField::Password(value) => validate_payload(&PasswordRule {
                password: value.clone(),
            }),
        }
    }
}

impl std::fmt::Debug for UserField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserField::Username(v) => f.debug_tuple("Username").field(v).finish(),
            UserField::Email(v) => f.debug_tuple("Email").field(v).finish(),
            UserField::Password(_) => f.debug_tuple("Password").field(&"<redacted>").finish(),
        }
    }
}

#[derive(Validate)]
struct UsernameRule {
    #[validate(
        custom(function = "not_blank", message = "Username must not be blank"),
        length(
            min = 5,
            max = 15,
            message = "Username must be between 5 and 15 characters"
        )
    )]
    username: String,
}

#[derive(Validate)]
struct EmailRule {
    #[validate(
        custom(function = "not_blank", message = "Email is required"),
        custom(function = "email_shape", message = "Please enter a valid email")
    )]
    email: String,
}

#[derive(Validate)]
struct PasswordRule {
    #[validate(
        custom(function = "not_blank", message = "Password cannot be empty"),
        length(
            min = 5,
            max = 40,
            message = "Password must be between 5 and 40 characters"
        ),
        custom(
            function = "contains_special_character",
            message = "Password must contain at least one special character"
        )
    )]
    password: String,
}
