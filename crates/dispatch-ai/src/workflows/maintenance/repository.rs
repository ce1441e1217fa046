use super::domain::{HistoryEntry, WorkOrder, WorkOrderId};

/// Storage abstraction for work orders so the service facade can be exercised
/// in isolation. `update` is a compare-and-swap on the order's version so
/// concurrent transitions on the same order serialize to one winner.
pub trait WorkOrderRepository: Send + Sync {
    fn insert(&self, order: WorkOrder) -> Result<WorkOrder, RepositoryError>;
    fn fetch(&self, id: &WorkOrderId) -> Result<Option<WorkOrder>, RepositoryError>;
    fn update(&self, order: WorkOrder, expected_version: u64)
        -> Result<WorkOrder, RepositoryError>;
    fn list(&self) -> Result<Vec<WorkOrder>, RepositoryError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("work order already exists")]
    Conflict,
    #[error("work order not found")]
    NotFound,
    #[error("stale work order version: expected {expected}, found {actual}")]
    StaleVersion { expected: u64, actual: u64 },
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Append-only transition history keyed by work order. The log is the system
/// of record for "what happened when"; there are no update or delete
/// operations.
pub trait AuditLog: Send + Sync {
    /// Record a transition. Infallible for well-formed entries.
    fn append(&self, entry: HistoryEntry);
    /// All entries for one work order in chronological order.
    fn history(&self, work_order: &WorkOrderId) -> Vec<HistoryEntry>;
}
