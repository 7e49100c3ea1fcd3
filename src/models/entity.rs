//! Entity catalog.
//!
//! The engine validates exactly three entity collections — clients, workers,
//! and tasks — each with a fixed required-column set and a primary-key
//! column used to index reported errors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three entity collections.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Clients,
    Workers,
    Tasks,
}

impl EntityKind {
    /// All entity kinds, in validation order.
    pub const ALL: [EntityKind; 3] = [EntityKind::Clients, EntityKind::Workers, EntityKind::Tasks];

    /// Columns every upload of this entity must carry.
    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            EntityKind::Clients => &[
                "ClientID",
                "ClientName",
                "PriorityLevel",
                "RequestedTaskIDs",
                "GroupTag",
                "AttributesJSON",
            ],
            EntityKind::Workers => &[
                "WorkerID",
                "WorkerName",
                "Skills",
                "AvailableSlots",
                "MaxLoadPerPhase",
                "WorkerGroup",
                "QualificationLevel",
            ],
            EntityKind::Tasks => &[
                "TaskID",
                "TaskName",
                "Category",
                "Duration",
                "RequiredSkills",
                "PreferredPhases",
                "MaxConcurrent",
            ],
        }
    }

    /// Primary-key column for this entity.
    pub fn id_column(self) -> &'static str {
        match self {
            EntityKind::Clients => "ClientID",
            EntityKind::Workers => "WorkerID",
            EntityKind::Tasks => "TaskID",
        }
    }

    /// Lowercase collection name, used in messages and serialized error maps.
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Clients => "clients",
            EntityKind::Workers => "workers",
            EntityKind::Tasks => "tasks",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
