use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::catalog::{estimate_cost, Category, UnknownCategory};
use super::dispatch::{MatchResult, VendorMatcher};
use super::domain::{HistoryEntry, Vendor, WorkOrder, WorkOrderId, WorkOrderStatus};
use super::lifecycle::{LifecycleError, TransitionRequest, WorkOrderStateMachine};
use super::repository::{AuditLog, RepositoryError, WorkOrderRepository};
use super::triage::{PriorityScorer, TriageEngine, TriageError, TriageOutcome};

/// Ticket details collected after a triage escalation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscalationIntake {
    pub category: String,
    pub answers: Vec<String>,
    pub base_priority: u8,
    pub emergency: bool,
    pub title: String,
    pub description: String,
    pub tenant_ref: String,
    pub property_ref: String,
    pub unit_ref: String,
}

/// Free-text submission that skipped the diagnostic flow; scored at the
/// category default priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectIntake {
    pub category: String,
    pub title: String,
    pub description: String,
    pub tenant_ref: String,
    pub property_ref: String,
    pub unit_ref: String,
}

/// Work orders grouped by status in kanban column order. Read-only view for
/// dashboards; mutation still goes through `transition`.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub columns: Vec<BoardColumn>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardColumn {
    pub status: WorkOrderStatus,
    pub title: &'static str,
    pub orders: Vec<WorkOrder>,
}

/// Error raised by the dispatch service facade.
#[derive(Debug, thiserror::Error)]
pub enum DispatchServiceError {
    #[error(transparent)]
    Triage(#[from] TriageError),
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<UnknownCategory> for DispatchServiceError {
    fn from(value: UnknownCategory) -> Self {
        Self::Triage(TriageError::InvalidCategory(value))
    }
}

/// Facade composing the triage engine, priority scorer, vendor matcher, and
/// lifecycle state machine over an injected repository and audit log.
pub struct MaintenanceDispatchService<R, L> {
    repository: Arc<R>,
    audit: Arc<L>,
    sequence: AtomicU64,
    triage: TriageEngine,
    scorer: PriorityScorer,
    matcher: VendorMatcher,
    lifecycle: WorkOrderStateMachine,
}

impl<R, L> MaintenanceDispatchService<R, L>
where
    R: WorkOrderRepository + 'static,
    L: AuditLog + 'static,
{
    pub fn new(repository: Arc<R>, audit: Arc<L>) -> Self {
        // Seed the id sequence past any order already in the store so a
        // restart never re-issues an id. An unreachable store seeds at 1 and
        // fails on the first insert instead.
        let next = repository
            .list()
            .unwrap_or_default()
            .iter()
            .filter_map(|order| order.id.0.strip_prefix("WO-"))
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            repository,
            audit,
            sequence: AtomicU64::new(next),
            triage: TriageEngine,
            scorer: PriorityScorer,
            matcher: VendorMatcher,
            lifecycle: WorkOrderStateMachine,
        }
    }

    fn next_work_order_id(&self) -> WorkOrderId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        WorkOrderId(format!("WO-{id:06}"))
    }

    /// Walk the category's diagnostic tree against the answers so far. A
    /// `Resolved` outcome never creates a work order.
    pub fn triage(
        &self,
        category: &str,
        answers: &[String],
    ) -> Result<TriageOutcome, DispatchServiceError> {
        let category: Category = category.parse()?;
        Ok(self.triage.advance(category, answers)?)
    }

    /// Open a work order for an escalated issue. The priority score is
    /// computed once here and never rewritten.
    pub fn create_escalated_ticket(
        &self,
        intake: EscalationIntake,
        now: DateTime<Local>,
    ) -> Result<WorkOrder, DispatchServiceError> {
        let category: Category = intake.category.parse()?;
        let assessment = self.scorer.assess(
            category,
            &intake.answers,
            intake.base_priority,
            intake.emergency,
            now.naive_local(),
        );

        let order = WorkOrder {
            id: self.next_work_order_id(),
            category,
            title: intake.title,
            description: intake.description,
            priority_score: assessment.score,
            emergency: assessment.emergency,
            status: WorkOrderStatus::New,
            tenant_ref: intake.tenant_ref,
            property_ref: intake.property_ref,
            unit_ref: intake.unit_ref,
            estimated_cost: estimate_cost(category, assessment.score),
            assigned_vendor: None,
            version: 0,
            created_at: now.with_timezone(&chrono::Utc),
            updated_at: now.with_timezone(&chrono::Utc),
            scheduled_for: None,
        };

        let stored = self.repository.insert(order)?;
        info!(
            order = %stored.id,
            category = %stored.category,
            priority = stored.priority_score,
            emergency = stored.emergency,
            "work order opened"
        );
        Ok(stored)
    }

    /// Open a work order from a free-text submission that skipped triage.
    pub fn submit_direct(
        &self,
        intake: DirectIntake,
        now: DateTime<Local>,
    ) -> Result<WorkOrder, DispatchServiceError> {
        self.create_escalated_ticket(
            EscalationIntake {
                category: intake.category,
                answers: Vec::new(),
                base_priority: PriorityScorer::DEFAULT_BASE_PRIORITY,
                emergency: false,
                title: intake.title,
                description: intake.description,
                tenant_ref: intake.tenant_ref,
                property_ref: intake.property_ref,
                unit_ref: intake.unit_ref,
            },
            now,
        )
    }

    /// Rank the supplied vendor directory against one ticket. An empty vector
    /// means no vendor covers the category; callers widen the pool or page a
    /// human dispatcher.
    pub fn match_vendors(
        &self,
        id: &WorkOrderId,
        vendors: &[Vendor],
    ) -> Result<Vec<MatchResult>, DispatchServiceError> {
        let order = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(self.matcher.rank(&order, vendors))
    }

    /// Apply a lifecycle transition. The audit entry is appended only after
    /// the versioned update succeeds, so a losing concurrent writer leaves no
    /// trace.
    pub fn transition(
        &self,
        id: &WorkOrderId,
        request: TransitionRequest,
        now: DateTime<Local>,
    ) -> Result<WorkOrder, DispatchServiceError> {
        let order = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        let (updated, entry) = self
            .lifecycle
            .plan(&order, request, now.with_timezone(&chrono::Utc))?;

        let stored = self.repository.update(updated, order.version)?;
        self.audit.append(entry);

        info!(
            order = %stored.id,
            from = %order.status,
            to = %stored.status,
            "work order transitioned"
        );
        Ok(stored)
    }

    /// Fetch one work order by id.
    pub fn fetch(&self, id: &WorkOrderId) -> Result<WorkOrder, DispatchServiceError> {
        Ok(self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?)
    }

    /// Chronological transition history for one work order.
    pub fn history(&self, id: &WorkOrderId) -> Result<Vec<HistoryEntry>, DispatchServiceError> {
        self.repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(self.audit.history(id))
    }

    /// All work orders grouped into kanban columns, highest priority first
    /// within each column.
    pub fn board(&self) -> Result<BoardView, DispatchServiceError> {
        let mut orders = self.repository.list()?;
        orders.sort_by(|a, b| {
            b.priority_score
                .cmp(&a.priority_score)
                .then_with(|| a.id.cmp(&b.id))
        });

        let columns = WorkOrderStatus::ordered()
            .into_iter()
            .map(|status| BoardColumn {
                status,
                title: status.label(),
                orders: orders
                    .iter()
                    .filter(|order| order.status == status)
                    .cloned()
                    .collect(),
            })
            .collect();

        Ok(BoardView { columns })
    }
}
