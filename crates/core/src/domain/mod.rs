pub mod fields;
pub mod language;
pub mod raw;

pub use fields::{FieldSpec, FEATURE_COUNT, FIELDS};
pub use language::Language;
pub use raw::RawFieldMap;
