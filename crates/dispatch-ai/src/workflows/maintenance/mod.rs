//! Maintenance request triage, vendor dispatch, and work-order lifecycle.
//!
//! The module is split along the pipeline: `triage` walks the diagnostic
//! decision trees and scores priority, `dispatch` ranks vendors for a ticket,
//! `lifecycle` validates status transitions, and `service` composes the pieces
//! over an injected repository and audit log. All engine types are stateless;
//! every side effect goes through the [`repository`] traits.

pub mod catalog;
pub mod dispatch;
pub mod domain;
pub mod lifecycle;
pub mod repository;
pub mod router;
pub mod service;
pub mod triage;

#[cfg(test)]
mod tests;

pub use catalog::{estimate_cost, Category, CostRange, UnknownCategory};
pub use dispatch::{MatchResult, VendorMatcher};
pub use domain::{
    Actor, Availability, HistoryEntry, Vendor, VendorId, WorkOrder, WorkOrderId, WorkOrderStatus,
};
pub use lifecycle::{LifecycleError, TransitionRequest, WorkOrderStateMachine};
pub use repository::{AuditLog, RepositoryError, WorkOrderRepository};
pub use router::maintenance_router;
pub use service::{
    BoardColumn, BoardView, DirectIntake, DispatchServiceError, EscalationIntake,
    MaintenanceDispatchService,
};
pub use triage::{PriorityAssessment, PriorityScorer, TriageEngine, TriageError, TriageOutcome};
