/// Minimal email shape check: exactly one '@'. Anything else is left to the backend.
pub fn has_email_shape(email: &str) -> bool {
    email.split('@').count() == 2
}

/// Client-side password length gate used by the password form
pub fn password_meets_minimum(password: &str, min_length: usize) -> bool {
    password.chars().count() >= min_length
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape_requires_exactly_one_at() {
        assert!(has_email_shape("jane@acme.test"));
        // Not RFC validation: these pass the shape check
        assert!(has_email_shape("@"));
        assert!(has_email_shape("jane@"));

        assert!(!has_email_shape(""));
        assert!(!has_email_shape("jane.acme.test"));
        assert!(!has_email_shape("jane@@acme.test"));
        assert!(!has_email_shape("jane@acme@test"));
    }

    #[test]
    fn test_password_minimum_counts_characters() {
        assert!(!password_meets_minimum("", 8));
        assert!(!password_meets_minimum("1234567", 8));
        assert!(password_meets_minimum("12345678", 8));
        assert!(password_meets_minimum("pässwörd", 8));
    }
}
