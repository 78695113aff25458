pub mod contact_id;
pub mod validated_json;

pub use contact_id::{ContactId, ContactSlot};
pub use validated_json::ValidatedJson;
