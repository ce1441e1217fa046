//! Static per-category diagnostic trees.
//!
//! Each node pairs a question with an ordered option table; every option maps
//! to a typed outcome so exhaustiveness is checkable at compile time. The
//! trees are configuration data, not runtime state.

use crate::workflows::maintenance::catalog::Category;

pub(crate) struct TriageNode {
    pub(crate) question: &'static str,
    pub(crate) options: &'static [(&'static str, NodeOutcome)],
}

pub(crate) enum NodeOutcome {
    /// Self-help resolution; no work order is created.
    Resolve { solution: &'static str },
    /// Hand off to the priority scorer and open a ticket.
    Escalate { base_priority: u8, emergency: bool },
    /// Ask a follow-up question.
    Next(&'static TriageNode),
}

static ELECTRICAL_BREAKER: TriageNode = TriageNode {
    question: "Have you checked your circuit breaker panel?",
    options: &[
        (
            "A breaker was tripped",
            NodeOutcome::Resolve {
                solution: "Flip the tripped breaker fully to OFF, then firmly back to ON. \
                    If it trips again right away, leave it off and submit a request so an \
                    electrician can inspect the circuit.",
            },
        ),
        (
            "Breaker looks fine",
            NodeOutcome::Escalate {
                base_priority: 60,
                emergency: false,
            },
        ),
    ],
};

static ELECTRICAL_ROOT: TriageNode = TriageNode {
    question: "Is the issue affecting one outlet, one room, or multiple rooms?",
    options: &[
        (
            "One outlet",
            NodeOutcome::Resolve {
                solution: "Try resetting the GFCI outlet. Look for a small \"Reset\" button \
                    on the outlet itself or nearby outlets (often in bathrooms/kitchens). \
                    Press it firmly.",
            },
        ),
        ("One room", NodeOutcome::Next(&ELECTRICAL_BREAKER)),
        (
            "Multiple rooms",
            NodeOutcome::Escalate {
                base_priority: 80,
                emergency: false,
            },
        ),
        (
            "Entire unit",
            NodeOutcome::Escalate {
                base_priority: 95,
                emergency: true,
            },
        ),
    ],
};

static PLUMBING_LEAK: TriageNode = TriageNode {
    question: "How severe is the leak?",
    options: &[
        (
            "Dripping",
            NodeOutcome::Escalate {
                base_priority: 60,
                emergency: false,
            },
        ),
        (
            "Steady stream",
            NodeOutcome::Escalate {
                base_priority: 85,
                emergency: false,
            },
        ),
        (
            "Flooding",
            NodeOutcome::Escalate {
                base_priority: 100,
                emergency: true,
            },
        ),
    ],
};

static PLUMBING_ROOT: TriageNode = TriageNode {
    question: "What type of plumbing issue are you experiencing?",
    options: &[
        ("Leak/Water damage", NodeOutcome::Next(&PLUMBING_LEAK)),
        (
            "Clogged drain",
            NodeOutcome::Resolve {
                solution: "Try using a plunger first. For sinks, ensure the overflow hole is \
                    covered. For tough clogs, try 1/2 cup baking soda followed by 1/2 cup \
                    vinegar, wait 30 min, then flush with hot water.",
            },
        ),
        (
            "No hot water",
            NodeOutcome::Escalate {
                base_priority: 55,
                emergency: false,
            },
        ),
        (
            "Low water pressure",
            NodeOutcome::Escalate {
                base_priority: 40,
                emergency: false,
            },
        ),
    ],
};

static HVAC_ROOT: TriageNode = TriageNode {
    question: "What's wrong with your heating/cooling?",
    options: &[
        (
            "Not cooling",
            NodeOutcome::Resolve {
                solution: "Check that the thermostat is set to \"Cool\" and below room \
                    temperature. Also check: 1) Air filter (replace if dirty), 2) Circuit \
                    breaker for the AC unit, 3) Ensure all vents are open.",
            },
        ),
        (
            "Not heating",
            NodeOutcome::Escalate {
                base_priority: 70,
                emergency: false,
            },
        ),
        (
            "Strange noise",
            NodeOutcome::Escalate {
                base_priority: 55,
                emergency: false,
            },
        ),
        (
            "Bad smell",
            NodeOutcome::Escalate {
                base_priority: 75,
                emergency: false,
            },
        ),
    ],
};

static APPLIANCE_FRIDGE: TriageNode = TriageNode {
    question: "What's the issue with the refrigerator?",
    options: &[
        (
            "Not cooling",
            NodeOutcome::Escalate {
                base_priority: 65,
                emergency: false,
            },
        ),
        (
            "Making noise",
            NodeOutcome::Escalate {
                base_priority: 35,
                emergency: false,
            },
        ),
        (
            "Leaking water",
            NodeOutcome::Escalate {
                base_priority: 55,
                emergency: false,
            },
        ),
        (
            "Ice maker broken",
            NodeOutcome::Escalate {
                base_priority: 30,
                emergency: false,
            },
        ),
    ],
};

static APPLIANCE_ROOT: TriageNode = TriageNode {
    question: "Which appliance needs repair?",
    options: &[
        ("Refrigerator", NodeOutcome::Next(&APPLIANCE_FRIDGE)),
        (
            "Dishwasher",
            NodeOutcome::Escalate {
                base_priority: 45,
                emergency: false,
            },
        ),
        (
            "Washer/Dryer",
            NodeOutcome::Escalate {
                base_priority: 50,
                emergency: false,
            },
        ),
        (
            "Oven/Stove",
            NodeOutcome::Escalate {
                base_priority: 60,
                emergency: false,
            },
        ),
    ],
};

static SAFETY_ROOT: TriageNode = TriageNode {
    question: "What kind of safety concern is this?",
    options: &[
        (
            "Smoke detector beeping",
            NodeOutcome::Resolve {
                solution: "A chirping smoke detector usually means a low battery. Twist the \
                    detector off its base and replace the battery (typically 9V). If it keeps \
                    chirping with a fresh battery, submit a request.",
            },
        ),
        (
            "Broken lock",
            NodeOutcome::Escalate {
                base_priority: 70,
                emergency: false,
            },
        ),
        (
            "Gas smell",
            NodeOutcome::Escalate {
                base_priority: 100,
                emergency: true,
            },
        ),
    ],
};

/// Root question for a category; `None` means the category has no diagnostic
/// tree and escalates immediately.
pub(crate) fn root(category: Category) -> Option<&'static TriageNode> {
    match category {
        Category::Plumbing => Some(&PLUMBING_ROOT),
        Category::Electrical => Some(&ELECTRICAL_ROOT),
        Category::Hvac => Some(&HVAC_ROOT),
        Category::Appliance => Some(&APPLIANCE_ROOT),
        Category::Safety => Some(&SAFETY_ROOT),
        Category::General => None,
    }
}

/// Answers that force the priority ceiling regardless of any other modifier.
pub(crate) fn critical_terms(category: Category) -> &'static [&'static str] {
    match category {
        Category::Plumbing => &["Flooding"],
        Category::Electrical => &["Entire unit"],
        Category::Safety => &["Gas smell"],
        Category::Hvac | Category::Appliance | Category::General => &[],
    }
}
