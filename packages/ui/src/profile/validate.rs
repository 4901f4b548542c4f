//! Client-side checks that run before any request is sent.

use api::SelectedFile;
use store::config::ProfileLimits;
use thiserror::Error;

use super::state::FormState;

/// A form value the server would reject, caught locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid name.")]
    EmptyName,
    #[error("Please fill in all password fields.")]
    MissingPasswordFields,
    #[error("The new password and its confirmation do not match.")]
    PasswordMismatch,
    #[error("The new password must be at least {min} characters long.")]
    PasswordTooShort { min: usize },
    #[error("Please select an image file.")]
    NotAnImage,
    #[error("The image must be at most {}MB.", mib(.max_bytes))]
    PhotoTooLarge { max_bytes: u64 },
}

fn mib(bytes: &u64) -> u64 {
    bytes / (1024 * 1024)
}

/// The trimmed name to submit.
pub fn validate_name(name: &str) -> Result<&str, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed)
}

pub fn validate_password(form: &FormState, limits: &ProfileLimits) -> Result<(), ValidationError> {
    if form.current_password.is_empty()
        || form.new_password.is_empty()
        || form.confirm_password.is_empty()
    {
        return Err(ValidationError::MissingPasswordFields);
    }
    if form.new_password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if form.new_password.chars().count() < limits.min_password_len {
        return Err(ValidationError::PasswordTooShort {
            min: limits.min_password_len,
        });
    }
    Ok(())
}

pub fn validate_photo(file: &SelectedFile, limits: &ProfileLimits) -> Result<(), ValidationError> {
    validate_photo_meta(&file.mime, file.size(), limits)
}

/// Check a picked file by its type and size alone, before reading its contents.
pub fn validate_photo_meta(mime: &str, size: u64, limits: &ProfileLimits) -> Result<(), ValidationError> {
    if !mime.starts_with("image/") {
        return Err(ValidationError::NotAnImage);
    }
    if size > limits.max_photo_bytes {
        return Err(ValidationError::PhotoTooLarge {
            max_bytes: limits.max_photo_bytes,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: usize = 1024 * 1024;

    fn passwords(current: &str, new: &str, confirm: &str) -> FormState {
        FormState {
            current_password: current.into(),
            new_password: new.into(),
            confirm_password: confirm.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(validate_name("  Alice \n"), Ok("Alice"));
        assert_eq!(validate_name("   "), Err(ValidationError::EmptyName));
        assert_eq!(validate_name(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_password_rules_in_order() {
        let limits = ProfileLimits::default();

        assert_eq!(
            validate_password(&passwords("", "abcdef", "abcdef"), &limits),
            Err(ValidationError::MissingPasswordFields)
        );
        assert_eq!(
            validate_password(&passwords("old", "abcdef", "abcdeg"), &limits),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            validate_password(&passwords("old", "abc12", "abc12"), &limits),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );
        assert_eq!(validate_password(&passwords("old", "abcdef", "abcdef"), &limits), Ok(()));
    }

    #[test]
    fn test_password_length_counts_characters() {
        let limits = ProfileLimits::default();
        // 6 characters, 12 bytes
        assert_eq!(validate_password(&passwords("old", "ççççàà", "ççççàà"), &limits), Ok(()));
    }

    #[test]
    fn test_photo_rules() {
        let limits = ProfileLimits::default();

        let big_png = SelectedFile::new("big.png", "image/png", vec![0; 6 * MB]);
        assert_eq!(
            validate_photo(&big_png, &limits),
            Err(ValidationError::PhotoTooLarge { max_bytes: 5 * MB as u64 })
        );

        let pdf = SelectedFile::new("cv.pdf", "application/pdf", vec![0; 10]);
        assert_eq!(validate_photo(&pdf, &limits), Err(ValidationError::NotAnImage));

        let jpeg = SelectedFile::new("me.jpg", "image/jpeg", vec![0; 2 * MB]);
        assert_eq!(validate_photo(&jpeg, &limits), Ok(()));

        let exact = SelectedFile::new("edge.png", "image/png", vec![0; 5 * MB]);
        assert_eq!(validate_photo(&exact, &limits), Ok(()));
    }

    #[test]
    fn test_photo_meta_checks_before_reading() {
        let limits = ProfileLimits::default();
        let six_mb = 6 * MB as u64;

        assert_eq!(
            validate_photo_meta("image/png", six_mb, &limits),
            Err(ValidationError::PhotoTooLarge { max_bytes: 5 * MB as u64 })
        );
        // Type is reported before size
        assert_eq!(
            validate_photo_meta("application/pdf", six_mb, &limits),
            Err(ValidationError::NotAnImage)
        );
        assert_eq!(validate_photo_meta("image/jpeg", 2 * MB as u64, &limits), Ok(()));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::PhotoTooLarge { max_bytes: 5 * MB as u64 }.to_string(),
            "The image must be at most 5MB."
        );
        assert_eq!(
            ValidationError::PasswordTooShort { min: 6 }.to_string(),
            "The new password must be at least 6 characters long."
        );
    }
}
