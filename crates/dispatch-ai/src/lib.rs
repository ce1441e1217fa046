//! Maintenance dispatch engine for property management.
//!
//! The engine walks per-category triage decision trees, scores escalated
//! tickets, ranks candidate vendors, and guards the work-order lifecycle with
//! an append-only audit trail. Rendering, persistence, and notification
//! delivery are external collaborators; everything here is callable from any
//! UI or service layer.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
