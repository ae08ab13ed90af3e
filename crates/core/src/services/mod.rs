//! Business logic services.

pub mod approval;
pub mod location;
pub mod poll;

pub use approval::{ApprovalService, TERMINAL_STATUSES, Transition, WorkflowQuery};
pub use location::{
    EmployeeLocationDay, Feature, FeatureCollection, Geometry, LocationPing, build_trail,
};
pub use poll::{PollLogEntry, PollOptionTally, PollPost, tally};
