use std::sync::Arc;

use chrono::Local;
use clap::Args;

use crate::infra::{vendor_directory, InMemoryAuditLog, InMemoryWorkOrderRepository};
use dispatch_ai::error::AppError;
use dispatch_ai::workflows::maintenance::{
    Actor, EscalationIntake, HistoryEntry, MaintenanceDispatchService, MatchResult,
    TransitionRequest, TriageOutcome, Vendor, WorkOrder, WorkOrderStatus,
};

#[derive(Args, Debug)]
pub(crate) struct TriageArgs {
    /// Maintenance category to triage (plumbing, electrical, hvac, appliance, safety, general)
    #[arg(long)]
    pub(crate) category: String,
    /// Answer to the next open question; repeat the flag to walk deeper
    #[arg(long = "answer")]
    pub(crate) answers: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Run the emergency variant (flooding) instead of the routine leak
    #[arg(long)]
    pub(crate) emergency: bool,
}

pub(crate) fn run_triage(args: TriageArgs) -> Result<(), AppError> {
    let TriageArgs { category, answers } = args;

    let service = MaintenanceDispatchService::new(
        Arc::new(InMemoryWorkOrderRepository::default()),
        Arc::new(InMemoryAuditLog::default()),
    );
    let outcome = service.triage(&category, &answers)?;

    println!("Triage: {category}");
    for answer in &answers {
        println!("  answered: {answer}");
    }
    render_outcome(&outcome);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryWorkOrderRepository::default());
    let audit = Arc::new(InMemoryAuditLog::default());
    let service = MaintenanceDispatchService::new(repository, audit);
    let directory = vendor_directory();
    let now = Local::now();

    let severity = if args.emergency {
        "Flooding"
    } else {
        "Steady stream"
    };

    println!("== Tenant triage ==");
    let first = service.triage("plumbing", &["Leak/Water damage".to_string()])?;
    render_outcome(&first);
    let answers = vec!["Leak/Water damage".to_string(), severity.to_string()];
    let outcome = service.triage("plumbing", &answers)?;
    println!("  answered: {severity}");
    render_outcome(&outcome);

    let TriageOutcome::Escalated {
        base_priority,
        emergency,
    } = outcome
    else {
        println!("Issue self-resolved; no work order needed.");
        return Ok(());
    };

    println!();
    println!("== Work order ==");
    let order = service.create_escalated_ticket(
        EscalationIntake {
            category: "plumbing".to_string(),
            answers,
            base_priority,
            emergency,
            title: "Leak under the kitchen sink".to_string(),
            description: "Water coming from the supply line below the sink".to_string(),
            tenant_ref: "tenant-104".to_string(),
            property_ref: "maple-court".to_string(),
            unit_ref: "2B".to_string(),
        },
        now,
    )?;
    render_order(&order);

    println!();
    println!("== Vendor ranking ==");
    let ranking = service.match_vendors(&order.id, &directory)?;
    if ranking.is_empty() {
        println!("No vendor covers this category; widen the pool or page a dispatcher.");
        return Ok(());
    }
    for (position, result) in ranking.iter().enumerate() {
        render_match(position + 1, result, &directory);
    }

    let chosen = ranking[0].vendor_id.clone();
    println!();
    println!("== Lifecycle ==");
    let assigned = service.transition(
        &order.id,
        TransitionRequest {
            to: WorkOrderStatus::Assigned,
            vendor: Some(chosen.clone()),
            scheduled_for: None,
            actor: Actor::System,
            note: format!("Auto-dispatched to top match {chosen}"),
        },
        now,
    )?;
    println!("assigned to {chosen} (v{})", assigned.version);

    let in_progress = service.transition(
        &order.id,
        TransitionRequest {
            to: WorkOrderStatus::InProgress,
            vendor: None,
            scheduled_for: None,
            actor: Actor::Vendor(chosen.clone()),
            note: "Technician on site".to_string(),
        },
        now,
    )?;
    println!("work started (v{})", in_progress.version);

    let completed = service.transition(
        &order.id,
        TransitionRequest {
            to: WorkOrderStatus::Completed,
            vendor: None,
            scheduled_for: None,
            actor: Actor::Vendor(chosen),
            note: "Supply line replaced".to_string(),
        },
        now,
    )?;
    println!("completed (v{})", completed.version);

    println!();
    println!("== History ==");
    for entry in service.history(&order.id)? {
        render_history_entry(&entry);
    }

    Ok(())
}

fn render_outcome(outcome: &TriageOutcome) {
    match outcome {
        TriageOutcome::Resolved { solution } => {
            println!("Resolved without a ticket:");
            println!("  {solution}");
        }
        TriageOutcome::Escalated {
            base_priority,
            emergency,
        } => {
            println!(
                "Escalated (base priority {base_priority}, emergency: {emergency})"
            );
        }
        TriageOutcome::NeedsMoreInput { question, options } => {
            println!("{question}");
            for option in options {
                println!("  - {option}");
            }
        }
    }
}

fn render_order(order: &WorkOrder) {
    println!(
        "{} [{}] priority {} ({}), est. ${}-${}",
        order.id,
        order.category,
        order.priority_score,
        if order.emergency { "EMERGENCY" } else { "routine" },
        order.estimated_cost.min,
        order.estimated_cost.max,
    );
}

fn render_match(position: usize, result: &MatchResult, directory: &[Vendor]) {
    let name = directory
        .iter()
        .find(|vendor| vendor.id == result.vendor_id)
        .map(|vendor| vendor.name.as_str())
        .unwrap_or("unknown vendor");
    println!(
        "{position}. {name} (score {:.1}) - {}",
        result.match_score,
        result.reasons.join(", "),
    );
}

fn render_history_entry(entry: &HistoryEntry) {
    println!(
        "{} | {} -> {} | {} | {}",
        entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
        entry.from,
        entry.to,
        entry.actor,
        entry.note,
    );
}
