//! Domain models for allocation intake data.
//!
//! Provides the types that cross the engine's boundary: raw tabular rows
//! as delivered by the file-parsing collaborator, the entity catalog with
//! its required columns, the shared list-cell decoder, and the tagged
//! allocation-rule union.

mod entity;
mod list_field;
mod row;
mod rule;

pub use entity::EntityKind;
pub use list_field::{parse_list, parse_numeric_list, split_numeric, ListField, ListParseError};
pub use row::{CellValue, Row};
pub use rule::Rule;
