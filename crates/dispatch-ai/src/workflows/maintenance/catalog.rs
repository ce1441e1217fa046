use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Maintenance categories the triage engine understands.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Plumbing,
    Electrical,
    Hvac,
    Appliance,
    Safety,
    General,
}

impl Category {
    pub const fn all() -> [Self; 6] {
        [
            Self::Plumbing,
            Self::Electrical,
            Self::Hvac,
            Self::Appliance,
            Self::Safety,
            Self::General,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Plumbing => "plumbing",
            Self::Electrical => "electrical",
            Self::Hvac => "hvac",
            Self::Appliance => "appliance",
            Self::Safety => "safety",
            Self::General => "general",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Plumbing => "Plumbing",
            Self::Electrical => "Electrical",
            Self::Hvac => "Heating & Cooling",
            Self::Appliance => "Appliances",
            Self::Safety => "Safety",
            Self::General => "General Maintenance",
        }
    }

    /// Icon key consumed by presentation layers.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Plumbing => "fa-tint",
            Self::Electrical => "fa-bolt",
            Self::Hvac => "fa-snowflake",
            Self::Appliance => "fa-blender",
            Self::Safety => "fa-shield-alt",
            Self::General => "fa-hammer",
        }
    }

    /// Typical vendor invoice range before priority adjustment.
    pub const fn base_cost(self) -> CostRange {
        match self {
            Self::Plumbing => CostRange { min: 100, max: 500 },
            Self::Electrical => CostRange { min: 75, max: 300 },
            Self::Hvac => CostRange { min: 150, max: 800 },
            Self::Appliance => CostRange { min: 80, max: 400 },
            Self::Safety => CostRange { min: 60, max: 250 },
            Self::General => CostRange { min: 50, max: 200 },
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key = raw.trim().to_ascii_lowercase();
        Self::all()
            .into_iter()
            .find(|category| category.key() == key)
            .ok_or_else(|| UnknownCategory(raw.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown maintenance category '{0}'")]
pub struct UnknownCategory(pub String);

/// Inclusive dollar range for a repair estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRange {
    pub min: u32,
    pub max: u32,
}

/// Estimate repair cost for a ticket. High-priority work widens the ceiling
/// because emergency call-outs bill at premium rates.
pub fn estimate_cost(category: Category, priority_score: u8) -> CostRange {
    let base = category.base_cost();
    if priority_score > 80 {
        CostRange {
            min: base.min,
            max: base.max + base.max / 2,
        }
    } else {
        base
    }
}
