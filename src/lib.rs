//! Validation engine for resource-allocation intake data.
//!
//! Ingests tabular business data — clients, workers, tasks — plus a small
//! catalog of allocation rules, and validates the set against structural,
//! range, referential, and feasibility constraints. The output is a list of
//! human-readable problems and suggestions for the presentation layer:
//! per-cell error messages for grid rendering, and free-text summary and
//! suggestion panels.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Row`, `CellValue`, `EntityKind`,
//!   `ListField`, `Rule`
//! - **`ingest`**: Boundary conversions from the upstream file-parsing and
//!   rule-translation collaborators
//! - **`validation`**: The multi-pass checker and its `ValidationOutcome`
//!
//! The engine is synchronous, single-threaded, and side-effect-free: it
//! borrows one snapshot of entities and rules, returns a freshly built
//! outcome, and never fails on well-formed-but-invalid business data.
//! Callers re-run it whenever rows or rules change; each run fully replaces
//! the previous result.
//!
//! # Example
//!
//! ```
//! use allocheck::models::Row;
//! use allocheck::validation::{validate, ValidationInput};
//!
//! let input = ValidationInput::new().with_clients(vec![Row::new()
//!     .with_field("ClientID", "C1")
//!     .with_field("ClientName", "ACME")
//!     .with_field("PriorityLevel", 3)
//!     .with_field("RequestedTaskIDs", "")
//!     .with_field("GroupTag", "alpha")
//!     .with_field("AttributesJSON", "{}")]);
//!
//! let outcome = validate(&input);
//! assert!(outcome.is_clean());
//! ```

pub mod ingest;
pub mod models;
pub mod validation;
