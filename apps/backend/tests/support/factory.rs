use backend_test_support::unique_helpers::{unique_email, unique_str};
use contacts_backend::domain::contact::ContactFields;
use serde_json::{json, Value};

/// Valid fields with a unique email.
pub fn contact_fields(prefix: &str) -> ContactFields {
    ContactFields::new(
        unique_str(prefix),
        "Tester",
        "555-0100",
        unique_email(prefix),
    )
}

/// JSON request body for a valid contact.
pub fn contact_body(first_name: &str, email: &str) -> Value {
    json!({
        "first_name": first_name,
        "last_name": "Tester",
        "phone": "555-0100",
        "email": email,
    })
}
