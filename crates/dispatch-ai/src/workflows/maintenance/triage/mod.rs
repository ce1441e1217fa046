mod scoring;
mod tree;

pub use scoring::{PriorityAssessment, PriorityScorer};

use serde::{Deserialize, Serialize};

use super::catalog::{Category, UnknownCategory};
use tree::{NodeOutcome, TriageNode};

/// Result of walking a diagnostic tree against the answers collected so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TriageOutcome {
    /// The issue can be self-resolved; no work order is created.
    Resolved { solution: String },
    /// The issue needs a vendor; the scorer refines `base_priority`.
    Escalated { base_priority: u8, emergency: bool },
    /// The tree has more questions than the tenant has answered.
    NeedsMoreInput {
        question: String,
        options: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TriageError {
    #[error(transparent)]
    InvalidCategory(#[from] UnknownCategory),
    #[error("'{answer}' is not an option for '{question}'")]
    InvalidAnswer { question: String, answer: String },
}

/// Stateless walker over the static diagnostic trees. Identical inputs always
/// produce identical outcomes.
#[derive(Debug, Default, Clone, Copy)]
pub struct TriageEngine;

impl TriageEngine {
    /// Replay `answers` from the category's root question. Terminates early on
    /// the first `Resolve` or `Escalate` outcome; trailing answers past a
    /// terminal node are ignored.
    pub fn advance(
        &self,
        category: Category,
        answers: &[String],
    ) -> Result<TriageOutcome, TriageError> {
        let Some(mut node) = tree::root(category) else {
            // Categories without a tree (general) escalate straight away at a
            // neutral base priority.
            return Ok(TriageOutcome::Escalated {
                base_priority: PriorityScorer::DEFAULT_BASE_PRIORITY,
                emergency: false,
            });
        };

        for answer in answers {
            match lookup(node, answer)? {
                NodeOutcome::Resolve { solution } => {
                    return Ok(TriageOutcome::Resolved {
                        solution: (*solution).to_string(),
                    });
                }
                NodeOutcome::Escalate {
                    base_priority,
                    emergency,
                } => {
                    return Ok(TriageOutcome::Escalated {
                        base_priority: *base_priority,
                        emergency: *emergency,
                    });
                }
                NodeOutcome::Next(next) => node = next,
            }
        }

        Ok(TriageOutcome::NeedsMoreInput {
            question: node.question.to_string(),
            options: node
                .options
                .iter()
                .map(|(option, _)| (*option).to_string())
                .collect(),
        })
    }
}

fn lookup<'a>(node: &'a TriageNode, answer: &str) -> Result<&'a NodeOutcome, TriageError> {
    let trimmed = answer.trim();
    node.options
        .iter()
        .find(|(option, _)| option.eq_ignore_ascii_case(trimmed))
        .map(|(_, outcome)| outcome)
        .ok_or_else(|| TriageError::InvalidAnswer {
            question: node.question.to_string(),
            answer: answer.to_string(),
        })
}
