//! Inline form validation. A failed validation keeps the submit entirely
//! client-side: no network call is made and the field shows its error until
//! the user edits it again.

use std::collections::BTreeMap;

/// `"Student ID is required"` and friends, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `check`'s outcome for a field; `None` clears any prior error.
    pub fn check(&mut self, field: &str, outcome: Option<String>) {
        match outcome {
            Some(message) => {
                self.errors.insert(field.to_string(), message);
            }
            None => {
                self.errors.remove(field);
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Clear one field's error, typically as the user types into it.
    pub fn clear(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// `Some("<label> is required")` when the value is blank.
pub fn required(value: &str, label: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{label} is required"))
    } else {
        None
    }
}

/// Required plus a shape check: something@something.something, no spaces.
pub fn valid_email(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("Email is required".to_string());
    }
    if !email_shaped(value) {
        return Some("Invalid email format".to_string());
    }
    None
}

fn email_shaped(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_required_field_names_its_label() {
        assert_eq!(
            required("", "Student ID").as_deref(),
            Some("Student ID is required")
        );
        assert_eq!(
            required("   ", "Password").as_deref(),
            Some("Password is required")
        );
        assert!(required("CSC/21/014", "Student ID").is_none());
    }

    #[test]
    fn email_shape_check() {
        assert!(valid_email("ada@college.edu").is_none());
        assert_eq!(valid_email("").as_deref(), Some("Email is required"));
        for bad in ["ada", "ada@", "@college.edu", "ada@college", "a da@college.edu"] {
            assert_eq!(valid_email(bad).as_deref(), Some("Invalid email format"), "{bad}");
        }
    }

    #[test]
    fn field_errors_track_per_field() {
        let mut errors = FieldErrors::new();
        errors.check("studentId", required("", "Student ID"));
        errors.check("password", required("hunter2", "Password"));

        assert!(!errors.is_empty());
        assert_eq!(errors.get("studentId"), Some("Student ID is required"));
        assert!(errors.get("password").is_none());

        errors.clear("studentId");
        assert!(errors.is_empty());
    }
}
