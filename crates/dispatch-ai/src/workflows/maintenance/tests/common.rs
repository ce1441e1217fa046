use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::workflows::maintenance::catalog::Category;
use crate::workflows::maintenance::domain::{
    Availability, HistoryEntry, Vendor, VendorId, WorkOrder, WorkOrderId,
};
use crate::workflows::maintenance::repository::{AuditLog, RepositoryError, WorkOrderRepository};
use crate::workflows::maintenance::service::EscalationIntake;
use crate::workflows::maintenance::MaintenanceDispatchService;

#[derive(Default)]
pub(super) struct MemoryRepository {
    orders: Mutex<HashMap<WorkOrderId, WorkOrder>>,
}

impl WorkOrderRepository for MemoryRepository {
    fn insert(&self, order: WorkOrder) -> Result<WorkOrder, RepositoryError> {
        let mut orders = self.orders.lock().expect("mutex poisoned");
        if orders.contains_key(&order.id) {
            return Err(RepositoryError::Conflict);
        }
        orders.insert(order.id.clone(), order.clone());
        Ok(order)
    }

    fn fetch(&self, id: &WorkOrderId) -> Result<Option<WorkOrder>, RepositoryError> {
        let orders = self.orders.lock().expect("mutex poisoned");
        Ok(orders.get(id).cloned())
    }

    fn update(
        &self,
        order: WorkOrder,
        expected_version: u64,
    ) -> Result<WorkOrder, RepositoryError> {
        let mut orders = self.orders.lock().expect("mutex poisoned");
        let current = orders.get(&order.id).ok_or(RepositoryError::NotFound)?;
        if current.version != expected_version {
            return Err(RepositoryError::StaleVersion {
                expected: expected_version,
                actual: current.version,
            });
        }
        orders.insert(order.id.clone(), order.clone());
        Ok(order)
    }

    fn list(&self) -> Result<Vec<WorkOrder>, RepositoryError> {
        let orders = self.orders.lock().expect("mutex poisoned");
        Ok(orders.values().cloned().collect())
    }
}

#[derive(Default)]
pub(super) struct MemoryAuditLog {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl MemoryAuditLog {
    pub(super) fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.lock().expect("mutex poisoned").clone()
    }
}

impl AuditLog for MemoryAuditLog {
    fn append(&self, entry: HistoryEntry) {
        self.entries.lock().expect("mutex poisoned").push(entry);
    }

    fn history(&self, work_order: &WorkOrderId) -> Vec<HistoryEntry> {
        self.entries
            .lock()
            .expect("mutex poisoned")
            .iter()
            .filter(|entry| entry.work_order == *work_order)
            .cloned()
            .collect()
    }
}

pub(super) struct UnavailableRepository;

impl WorkOrderRepository for UnavailableRepository {
    fn insert(&self, _order: WorkOrder) -> Result<WorkOrder, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn fetch(&self, _id: &WorkOrderId) -> Result<Option<WorkOrder>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn update(
        &self,
        _order: WorkOrder,
        _expected_version: u64,
    ) -> Result<WorkOrder, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn list(&self) -> Result<Vec<WorkOrder>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }
}

pub(super) type MemoryService = MaintenanceDispatchService<MemoryRepository, MemoryAuditLog>;

pub(super) fn build_service() -> (Arc<MemoryService>, Arc<MemoryRepository>, Arc<MemoryAuditLog>) {
    let repository = Arc::new(MemoryRepository::default());
    let audit = Arc::new(MemoryAuditLog::default());
    let service = Arc::new(MaintenanceDispatchService::new(
        repository.clone(),
        audit.clone(),
    ));
    (service, repository, audit)
}

/// A Monday mid-morning, comfortably inside vendor business hours.
pub(super) fn daytime() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 6, 2, 10, 0, 0)
        .single()
        .expect("valid local time")
}

/// Same Monday, well after the 22:00 business-hours cutoff.
pub(super) fn late_night() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 6, 2, 23, 30, 0)
        .single()
        .expect("valid local time")
}

pub(super) fn utc(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, hour, 0, 0)
        .single()
        .expect("valid utc time")
}

pub(super) fn steady_leak_intake() -> EscalationIntake {
    EscalationIntake {
        category: "plumbing".to_string(),
        answers: vec![
            "Leak/Water damage".to_string(),
            "Steady stream".to_string(),
        ],
        base_priority: 85,
        emergency: false,
        title: "Bathroom sink leaking".to_string(),
        description: "Water streaming from the supply line under the sink".to_string(),
        tenant_ref: "tenant-104".to_string(),
        property_ref: "maple-court".to_string(),
        unit_ref: "2B".to_string(),
    }
}

pub(super) fn flooding_intake() -> EscalationIntake {
    EscalationIntake {
        answers: vec!["Leak/Water damage".to_string(), "Flooding".to_string()],
        base_priority: 100,
        emergency: true,
        title: "Unit flooding".to_string(),
        description: "Water across the kitchen floor and spreading".to_string(),
        ..steady_leak_intake()
    }
}

pub(super) fn work_order(category: Category, priority_score: u8) -> WorkOrder {
    use crate::workflows::maintenance::catalog::estimate_cost;
    use crate::workflows::maintenance::domain::WorkOrderStatus;

    WorkOrder {
        id: WorkOrderId("WO-TEST-01".to_string()),
        category,
        title: "Fixture ticket".to_string(),
        description: "Fixture description".to_string(),
        priority_score,
        emergency: priority_score >= 100,
        status: WorkOrderStatus::New,
        tenant_ref: "tenant-104".to_string(),
        property_ref: "maple-court".to_string(),
        unit_ref: "2B".to_string(),
        estimated_cost: estimate_cost(category, priority_score),
        assigned_vendor: None,
        version: 0,
        created_at: utc(14),
        updated_at: utc(14),
        scheduled_for: None,
    }
}

pub(super) fn vendor(id: &str, specialty: Category) -> Vendor {
    Vendor {
        id: VendorId(id.to_string()),
        name: format!("{id} Services"),
        specialties: BTreeSet::from([specialty]),
        rating: 4.0,
        avg_response_time_minutes: 30,
        availability: Availability::BusinessHours,
        preferred: false,
        hourly_rate: 100,
        emergency_rate: 150,
    }
}
