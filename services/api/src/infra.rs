use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use dispatch_ai::workflows::maintenance::{
    AuditLog, Availability, Category, HistoryEntry, RepositoryError, Vendor, VendorId, WorkOrder,
    WorkOrderId, WorkOrderRepository,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryWorkOrderRepository {
    orders: Arc<Mutex<HashMap<WorkOrderId, WorkOrder>>>,
}

impl WorkOrderRepository for InMemoryWorkOrderRepository {
    fn insert(&self, order: WorkOrder) -> Result<WorkOrder, RepositoryError> {
        let mut guard = self.orders.lock().expect("repository mutex poisoned");
        if guard.contains_key(&order.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(order.id.clone(), order.clone());
        Ok(order)
    }

    fn fetch(&self, id: &WorkOrderId) -> Result<Option<WorkOrder>, RepositoryError> {
        let guard = self.orders.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn update(
        &self,
        order: WorkOrder,
        expected_version: u64,
    ) -> Result<WorkOrder, RepositoryError> {
        let mut guard = self.orders.lock().expect("repository mutex poisoned");
        let current = guard.get(&order.id).ok_or(RepositoryError::NotFound)?;
        if current.version != expected_version {
            return Err(RepositoryError::StaleVersion {
                expected: expected_version,
                actual: current.version,
            });
        }
        guard.insert(order.id.clone(), order.clone());
        Ok(order)
    }

    fn list(&self) -> Result<Vec<WorkOrder>, RepositoryError> {
        let guard = self.orders.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAuditLog {
    entries: Arc<Mutex<Vec<HistoryEntry>>>,
}

impl AuditLog for InMemoryAuditLog {
    fn append(&self, entry: HistoryEntry) {
        let mut guard = self.entries.lock().expect("audit mutex poisoned");
        guard.push(entry);
    }

    fn history(&self, work_order: &WorkOrderId) -> Vec<HistoryEntry> {
        let guard = self.entries.lock().expect("audit mutex poisoned");
        guard
            .iter()
            .filter(|entry| entry.work_order == *work_order)
            .cloned()
            .collect()
    }
}

fn directory_vendor(
    id: &str,
    name: &str,
    specialties: &[Category],
    rating: f32,
    avg_response_time_minutes: u32,
    availability: Availability,
    preferred: bool,
    hourly_rate: u32,
    emergency_rate: u32,
) -> Vendor {
    Vendor {
        id: VendorId(id.to_string()),
        name: name.to_string(),
        specialties: BTreeSet::from_iter(specialties.iter().copied()),
        rating,
        avg_response_time_minutes,
        availability,
        preferred,
        hourly_rate,
        emergency_rate,
    }
}

/// Static vendor directory used by the demo and as the default pool for
/// self-hosted deployments without an external directory integration.
pub(crate) fn vendor_directory() -> Vec<Vendor> {
    vec![
        directory_vendor(
            "proelectric",
            "ProElectric Solutions",
            &[Category::Electrical],
            4.8,
            10,
            Availability::Available,
            true,
            85,
            150,
        ),
        directory_vendor(
            "quickfix",
            "QuickFix Plumbing",
            &[Category::Plumbing],
            4.6,
            5,
            Availability::TwentyFourSeven,
            false,
            95,
            180,
        ),
        directory_vendor(
            "alltemp",
            "AllTemp HVAC",
            &[Category::Hvac],
            4.9,
            20,
            Availability::BusinessHours,
            true,
            110,
            200,
        ),
        directory_vendor(
            "abc-plumbing",
            "ABC Plumbing Services",
            &[Category::Plumbing],
            4.8,
            15,
            Availability::Available,
            false,
            90,
            170,
        ),
        directory_vendor(
            "powertech",
            "PowerTech Electrical",
            &[Category::Electrical],
            4.9,
            10,
            Availability::Available,
            false,
            100,
            190,
        ),
        directory_vendor(
            "handypro",
            "HandyPro Services",
            &[
                Category::Appliance,
                Category::Safety,
                Category::General,
            ],
            4.4,
            30,
            Availability::BusinessHours,
            false,
            70,
            120,
        ),
    ]
}
