//! Domain layer: pure logic with no HTTP or database types.

pub mod archive;
pub mod contact;

pub use archive::{ArchiveJob, ArchiveStatus, Archiver, OwnerId};
pub use contact::{ContactField, ContactFields};
