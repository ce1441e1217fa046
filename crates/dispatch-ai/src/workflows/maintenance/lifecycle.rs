use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Actor, HistoryEntry, VendorId, WorkOrder, WorkOrderId, WorkOrderStatus};

/// A requested lifecycle change. `vendor` is honored only for transitions
/// into `Assigned`, where it is mandatory; `scheduled_for` updates the visit
/// window when supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionRequest {
    pub to: WorkOrderStatus,
    #[serde(default)]
    pub vendor: Option<VendorId>,
    #[serde(default)]
    pub scheduled_for: Option<DateTime<Utc>>,
    pub actor: Actor,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    #[error("work order {id} cannot move from {from} to {requested}")]
    InvalidTransition {
        id: WorkOrderId,
        from: WorkOrderStatus,
        requested: WorkOrderStatus,
    },
    #[error("transitioning to assigned requires a vendor id in the same operation")]
    MissingVendor,
    #[error("work order {id} still has a vendor assigned; remove-then-add to reassign")]
    VendorStillAssigned { id: WorkOrderId },
    #[error("a vendor id is only accepted when transitioning to assigned")]
    UnexpectedVendor,
}

/// Pure transition planner. Validation and the resulting order/audit pair are
/// computed without touching storage; the caller applies the plan through the
/// repository so optimistic concurrency stays in one place.
#[derive(Debug, Default, Clone, Copy)]
pub struct WorkOrderStateMachine;

impl WorkOrderStateMachine {
    /// Validate `request` against `order` and produce the updated order plus
    /// the single audit entry the transition emits. Any state may move to any
    /// other state except out of `Completed`, which is terminal. On error the
    /// input order is untouched.
    pub fn plan(
        &self,
        order: &WorkOrder,
        request: TransitionRequest,
        now: DateTime<Utc>,
    ) -> Result<(WorkOrder, HistoryEntry), LifecycleError> {
        let TransitionRequest {
            to,
            vendor,
            scheduled_for,
            actor,
            note,
        } = request;

        if order.status.is_terminal() || to == order.status {
            return Err(LifecycleError::InvalidTransition {
                id: order.id.clone(),
                from: order.status,
                requested: to,
            });
        }

        let assigned_vendor = match to {
            WorkOrderStatus::Assigned => {
                let vendor = vendor.ok_or(LifecycleError::MissingVendor)?;
                if matches!(&order.assigned_vendor, Some(current) if *current != vendor) {
                    return Err(LifecycleError::VendorStillAssigned {
                        id: order.id.clone(),
                    });
                }
                Some(vendor)
            }
            WorkOrderStatus::New => {
                if vendor.is_some() {
                    return Err(LifecycleError::UnexpectedVendor);
                }
                if order.assigned_vendor.is_some() {
                    return Err(LifecycleError::VendorStillAssigned {
                        id: order.id.clone(),
                    });
                }
                None
            }
            _ => {
                if vendor.is_some() {
                    return Err(LifecycleError::UnexpectedVendor);
                }
                order.assigned_vendor.clone()
            }
        };

        let mut updated = order.clone();
        updated.status = to;
        updated.assigned_vendor = assigned_vendor;
        if scheduled_for.is_some() {
            updated.scheduled_for = scheduled_for;
        }
        updated.version = order.version + 1;
        updated.updated_at = now;

        let entry = HistoryEntry {
            work_order: order.id.clone(),
            timestamp: now,
            from: order.status,
            to,
            actor,
            note,
        };

        Ok((updated, entry))
    }
}
