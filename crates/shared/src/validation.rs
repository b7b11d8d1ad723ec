//! Common validation rules used by request DTOs.

use validator::ValidationError;

/// Maximum length of a licence plate, including separators.
const MAX_LICENSE_PLATE_LEN: usize = 16;

/// Maximum length of a phone number, including separators.
pub const MAX_PHONE_LEN: usize = 32;

/// Rejects strings that are empty or contain only whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Validates a vehicle licence plate.
///
/// Accepts ASCII letters, digits, spaces and dashes, with at least one
/// alphanumeric character.
pub fn validate_license_plate(plate: &str) -> Result<(), ValidationError> {
    let trimmed = plate.trim();
    let valid = !trimmed.is_empty()
        && trimmed.len() <= MAX_LICENSE_PLATE_LEN
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == ' ')
        && trimmed.chars().any(|c| c.is_ascii_alphanumeric());

    if valid {
        Ok(())
    } else {
        let mut err = ValidationError::new("license_plate");
        err.message = Some("License plate must be 1-16 letters, digits, spaces or dashes".into());
        Err(err)
    }
}

/// Validates a phone number: digits with optional `+`, spaces, dashes and parentheses.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')'));

    if !allowed || !(5..=20).contains(&digits) {
        let mut err = ValidationError::new("phone");
        err.message = Some("Phone number must contain 5-20 digits".into());
        return Err(err);
    }

    if phone.len() > MAX_PHONE_LEN {
        let mut err = ValidationError::new("phone");
        err.message = Some("Phone number must be at most 32 characters".into());
        return Err(err);
    }

    Ok(())
}
