use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::{Category, CostRange};

/// Identifier wrapper for tracked work orders.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WorkOrderId(pub String);

impl fmt::Display for WorkOrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for vendor-directory records.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VendorId(pub String);

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle states for a maintenance work order. Modeled as a finite set
/// rather than a strict chain; `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    New,
    Assigned,
    InProgress,
    AwaitingParts,
    Scheduled,
    Completed,
}

impl WorkOrderStatus {
    /// Kanban column order used by board views.
    pub const fn ordered() -> [Self; 6] {
        [
            Self::New,
            Self::Assigned,
            Self::InProgress,
            Self::AwaitingParts,
            Self::Scheduled,
            Self::Completed,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New Requests",
            Self::Assigned => "Assigned",
            Self::InProgress => "In Progress",
            Self::AwaitingParts => "Awaiting Parts",
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Who performed a lifecycle action, for the audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Actor {
    System,
    Tenant(String),
    Manager(String),
    Vendor(VendorId),
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::System => f.write_str("system"),
            Actor::Tenant(name) => write!(f, "tenant:{name}"),
            Actor::Manager(name) => write!(f, "manager:{name}"),
            Actor::Vendor(id) => write!(f, "vendor:{id}"),
        }
    }
}

/// The trackable record of a maintenance issue from escalation to completion.
///
/// `priority_score` is set once when the ticket is escalated and never
/// rewritten; `version` supports optimistic concurrency on transitions. Work
/// orders are never hard-deleted so completed records stay available for
/// audits and analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: WorkOrderId,
    pub category: Category,
    pub title: String,
    pub description: String,
    pub priority_score: u8,
    pub emergency: bool,
    pub status: WorkOrderStatus,
    pub tenant_ref: String,
    pub property_ref: String,
    pub unit_ref: String,
    pub estimated_cost: CostRange,
    pub assigned_vendor: Option<VendorId>,
    pub version: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub scheduled_for: Option<DateTime<Utc>>,
}

/// Vendor-directory snapshot consumed during matching. Owned by an external
/// directory; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub specialties: BTreeSet<Category>,
    pub rating: f32,
    pub avg_response_time_minutes: u32,
    pub availability: Availability,
    pub preferred: bool,
    pub hourly_rate: u32,
    pub emergency_rate: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    BusinessHours,
    TwentyFourSeven,
}

impl Availability {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "available now",
            Self::BusinessHours => "business hours",
            Self::TwentyFourSeven => "24/7",
        }
    }
}

/// Append-only record of a lifecycle transition. Created exclusively by
/// applying state-machine transitions; never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub work_order: WorkOrderId,
    pub timestamp: DateTime<Utc>,
    pub from: WorkOrderStatus,
    pub to: WorkOrderStatus,
    pub actor: Actor,
    pub note: String,
}
