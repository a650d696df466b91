//! Test utilities: raw session record builders and an in-memory
//! `SessionSource` with the same paging contract as the real services.

pub mod fixtures;
pub mod source;

pub use fixtures::{RawRecordBuilder, uniform_record, wire_fields};
pub use source::InMemorySource;
