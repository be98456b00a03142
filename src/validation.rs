use serde::{Deserialize, Serialize};

/// The blood groups the system accepts, in display order.
pub const BLOOD_GROUPS: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

/// Raw donor form fields as typed by the user. Shared between the client
/// forms and the server functions so both sides validate the same thing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DonorInput {
    pub name: String,
    pub blood_group: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Strip everything that is not a decimal digit, preserving order.
/// Applying this twice gives the same result as once.
pub fn sanitize_phone(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn name_is_valid(name: &str) -> bool {
    !name.trim().is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

pub fn blood_group_is_valid(group: &str) -> bool {
    BLOOD_GROUPS.contains(&group)
}

pub fn phone_is_valid(phone: &str) -> bool {
    phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit())
}

/// Single `@`, non-empty local part, domain with a dot and text on both
/// sides of it.
pub fn email_is_valid(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validate a donor form. Returns every violated rule's message, empty when
/// the input is acceptable.
pub fn validate_donor(input: &DonorInput) -> Vec<String> {
    let mut errors = Vec::new();

    if input.name.trim().is_empty() {
        errors.push("Name is required".to_string());
    }
    if !name_is_valid(&input.name) {
        errors.push("Name should contain only letters and spaces".to_string());
    }
    if !blood_group_is_valid(&input.blood_group) {
        errors.push("Invalid blood group".to_string());
    }
    if !phone_is_valid(&input.phone) {
        errors.push("Phone number must be 10 digits".to_string());
    }
    if !email_is_valid(&input.email) {
        errors.push("Invalid email address".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> DonorInput {
        DonorInput {
            name: "Jane Doe".to_string(),
            blood_group: "O+".to_string(),
            phone: "0123456789".to_string(),
            email: "jane@example.com".to_string(),
            address: "12 Elm Street".to_string(),
        }
    }

    #[test]
    fn sanitize_phone_keeps_only_digits_in_order() {
        assert_eq!(sanitize_phone("(012) 345-6789"), "0123456789");
        assert_eq!(sanitize_phone("+91 98x76"), "919876");
        assert_eq!(sanitize_phone("no digits"), "");
    }

    #[test]
    fn sanitize_phone_is_idempotent() {
        let once = sanitize_phone("1a2b3c-4 5");
        assert_eq!(sanitize_phone(&once), once);
    }

    #[test]
    fn valid_input_has_no_errors() {
        assert!(validate_donor(&valid_input()).is_empty());
    }

    #[test]
    fn name_rules() {
        assert!(!name_is_valid(""));
        assert!(!name_is_valid("   "));
        assert!(!name_is_valid("J4ne"));
        assert!(!name_is_valid("Jane-Doe"));
        assert!(name_is_valid("Jane Doe"));

        let mut input = valid_input();
        input.name = String::new();
        let errors = validate_donor(&input);
        assert!(errors.contains(&"Name is required".to_string()));
        assert!(errors.contains(&"Name should contain only letters and spaces".to_string()));
    }

    #[test]
    fn blood_group_must_be_one_of_the_eight() {
        assert!(blood_group_is_valid("AB-"));
        assert!(!blood_group_is_valid("C+"));
        assert!(!blood_group_is_valid(""));

        let mut input = valid_input();
        input.blood_group = "X".to_string();
        assert!(validate_donor(&input).contains(&"Invalid blood group".to_string()));
    }

    #[test]
    fn phone_must_be_exactly_ten_digits() {
        assert!(phone_is_valid("0123456789"));
        assert!(!phone_is_valid("123456789"));
        assert!(!phone_is_valid("12345678901"));
        assert!(!phone_is_valid("12345o6789"));
    }

    #[test]
    fn email_shape() {
        assert!(email_is_valid("a@b.c"));
        assert!(email_is_valid("first.last@mail.example.org"));
        assert!(!email_is_valid("no-at-sign"));
        assert!(!email_is_valid("@example.com"));
        assert!(!email_is_valid("a@b@c.d"));
        assert!(!email_is_valid("a@nodot"));
        assert!(!email_is_valid("a@.com"));
        assert!(!email_is_valid("a@com."));
    }
}
