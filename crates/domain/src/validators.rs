use crate::DomainError;

pub const MAX_DESCRIPTION_CHARS: usize = 5_000;
/// Location names share the description bound: an unmatched description is
/// geocoded as-is.
pub const MAX_LOCATION_NAME_CHARS: usize = MAX_DESCRIPTION_CHARS;

/// Free-text description fed to the extraction step.
pub fn validate_description(text: &str) -> Result<(), DomainError> {
    validate_text(text, "Description", MAX_DESCRIPTION_CHARS)
}

/// Location name fed to the resolver.
pub fn validate_location_name(name: &str) -> Result<(), DomainError> {
    validate_text(name, "Location name", MAX_LOCATION_NAME_CHARS)
}

fn validate_text(text: &str, what: &str, max_chars: usize) -> Result<(), DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::InvalidInput(format!("{what} cannot be empty")));
    }
    if text.chars().count() > max_chars {
        return Err(DomainError::InvalidInput(format!(
            "{what} cannot exceed {max_chars} characters"
        )));
    }
    Ok(())
}
