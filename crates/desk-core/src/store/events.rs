//! Change notifications published by the store.

use serde::{Deserialize, Serialize};

use crate::models::RequestStatus;

/// A mutation that happened in the store.
///
/// Events carry ids, not records; subscribers re-read the store for the
/// current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StoreEvent {
    Created {
        id: u64,
    },
    StatusChanged {
        id: u64,
        from: RequestStatus,
        to: RequestStatus,
    },
    Updated {
        id: u64,
    },
    Deleted {
        id: u64,
    },
}

impl StoreEvent {
    /// ID of the request the event is about.
    pub fn request_id(&self) -> u64 {
        match self {
            StoreEvent::Created { id }
            | StoreEvent::StatusChanged { id, .. }
            | StoreEvent::Updated { id }
            | StoreEvent::Deleted { id } => *id,
        }
    }
}
