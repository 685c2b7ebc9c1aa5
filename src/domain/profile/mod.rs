//! User profile values: display name and income bracket.

mod income_range;

pub use income_range::{income_multiplier, Currency, IncomeRange, DEFAULT_INCOME_MULTIPLIER};

use crate::domain::foundation::ValidationError;

/// Maximum length for the user's display name.
pub const MAX_USER_NAME_LENGTH: usize = 80;

/// Validates and normalizes a display name.
///
/// # Errors
///
/// - `EmptyField` if the name is empty or whitespace
/// - `TooLong` if the trimmed name exceeds [`MAX_USER_NAME_LENGTH`]
pub fn normalize_user_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("user_name"));
    }
    let len = trimmed.chars().count();
    if len > MAX_USER_NAME_LENGTH {
        return Err(ValidationError::too_long("user_name", MAX_USER_NAME_LENGTH, len));
    }
    Ok(trimmed.to_string())
}
