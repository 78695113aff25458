pub mod contacts;

pub use contacts::Entity as Contacts;
pub use contacts::Model as ContactModel;
