//! Military unit classification and tier roll-ups.
//!
//! Classification is a closed set: exactly three families with three tiers
//! each. A name that is not one of those nine tokens (after whitespace
//! normalization) is an economic resource, even if it looks like a unit.

use crate::catalog::normalize_name;
use crate::matrix::ResourceMatrix;
use crate::types::Realm;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UnitFamily {
    Knight,
    Crossbowman,
    Paladin,
}

impl UnitFamily {
    pub const ALL: [UnitFamily; 3] = [
        UnitFamily::Knight,
        UnitFamily::Crossbowman,
        UnitFamily::Paladin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            UnitFamily::Knight => "Knight",
            UnitFamily::Crossbowman => "Crossbowman",
            UnitFamily::Paladin => "Paladin",
        }
    }
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    T1,
    T2,
    T3,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::T1, Tier::T2, Tier::T3];
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::T1 => f.write_str("Tier 1"),
            Tier::T2 => f.write_str("Tier 2"),
            Tier::T3 => f.write_str("Tier 3"),
        }
    }
}

/// A recognized unit token: family plus tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MilitaryUnit {
    pub family: UnitFamily,
    pub tier: Tier,
}

/// Maps a resource name onto one of the nine unit tokens.
pub fn classify(name: &str) -> Option<MilitaryUnit> {
    let (family, tier) = match normalize_name(name).as_ref() {
        "Knight" => (UnitFamily::Knight, Tier::T1),
        "KnightT2" => (UnitFamily::Knight, Tier::T2),
        "KnightT3" => (UnitFamily::Knight, Tier::T3),
        "Crossbowman" => (UnitFamily::Crossbowman, Tier::T1),
        "CrossbowmanT2" => (UnitFamily::Crossbowman, Tier::T2),
        "CrossbowmanT3" => (UnitFamily::Crossbowman, Tier::T3),
        "Paladin" => (UnitFamily::Paladin, Tier::T1),
        "PaladinT2" => (UnitFamily::Paladin, Tier::T2),
        "PaladinT3" => (UnitFamily::Paladin, Tier::T3),
        _ => return None,
    };
    Some(MilitaryUnit { family, tier })
}

pub fn is_military_unit(name: &str) -> bool {
    classify(name).is_some()
}

/// Per-family tier counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TierCounts {
    #[serde(rename = "T1")]
    pub t1: f64,
    #[serde(rename = "T2")]
    pub t2: f64,
    #[serde(rename = "T3")]
    pub t3: f64,
    pub total: f64,
}

impl TierCounts {
    pub fn tier(&self, tier: Tier) -> f64 {
        match tier {
            Tier::T1 => self.t1,
            Tier::T2 => self.t2,
            Tier::T3 => self.t3,
        }
    }

    fn add(&mut self, tier: Tier, amount: f64) {
        match tier {
            Tier::T1 => self.t1 += amount,
            Tier::T2 => self.t2 += amount,
            Tier::T3 => self.t3 += amount,
        }
        self.total += amount;
    }
}

/// Tier sums across every family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryTotals {
    #[serde(rename = "T1")]
    pub t1: f64,
    #[serde(rename = "T2")]
    pub t2: f64,
    #[serde(rename = "T3")]
    pub t3: f64,
    #[serde(rename = "grandTotal")]
    pub grand_total: f64,
}

impl SummaryTotals {
    pub fn tier(&self, tier: Tier) -> f64 {
        match tier {
            Tier::T1 => self.t1,
            Tier::T2 => self.t2,
            Tier::T3 => self.t3,
        }
    }
}

/// Family × tier roll-up of every military unit in a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MilitarySummary {
    #[serde(rename = "Knight")]
    pub knight: TierCounts,
    #[serde(rename = "Crossbowman")]
    pub crossbowman: TierCounts,
    #[serde(rename = "Paladin")]
    pub paladin: TierCounts,
    pub totals: SummaryTotals,
}

impl MilitarySummary {
    pub fn family(&self, family: UnitFamily) -> &TierCounts {
        match family {
            UnitFamily::Knight => &self.knight,
            UnitFamily::Crossbowman => &self.crossbowman,
            UnitFamily::Paladin => &self.paladin,
        }
    }

    fn family_mut(&mut self, family: UnitFamily) -> &mut TierCounts {
        match family {
            UnitFamily::Knight => &mut self.knight,
            UnitFamily::Crossbowman => &mut self.crossbowman,
            UnitFamily::Paladin => &mut self.paladin,
        }
    }

    fn add(&mut self, unit: MilitaryUnit, amount: f64) {
        self.family_mut(unit.family).add(unit.tier, amount);
        match unit.tier {
            Tier::T1 => self.totals.t1 += amount,
            Tier::T2 => self.totals.t2 += amount,
            Tier::T3 => self.totals.t3 += amount,
        }
        self.totals.grand_total += amount;
    }

    /// True when the snapshot holds no military units at all.
    pub fn is_empty(&self) -> bool {
        self.totals.grand_total == 0.0
    }
}

/// Sums every unit entry of every realm into a [`MilitarySummary`].
///
/// Unrecognized names are skipped; an empty realm list gives all zeros.
pub fn build_military_summary(realms: &[Realm]) -> MilitarySummary {
    let mut summary = MilitarySummary::default();
    for entry in realms.iter().flat_map(|realm| realm.resources.iter()) {
        if let Some(unit) = classify(&entry.name) {
            summary.add(unit, entry.amount);
        }
    }
    summary
}

/// Groups unit names by family for display.
///
/// Uses a loose "name contains family" test, so it is only fit for visual
/// grouping. Totals always go through [`classify`].
pub fn group_by_family<'a>(units: &'a [String]) -> Vec<(UnitFamily, Vec<&'a str>)> {
    UnitFamily::ALL
        .iter()
        .map(|family| {
            let members = units
                .iter()
                .filter(|unit| unit.contains(family.name()))
                .map(String::as_str)
                .collect();
            (*family, members)
        })
        .collect()
}

/// Display card for one unit: its total and the realms that hold any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitCard {
    pub unit: String,
    pub total: f64,
    pub holders: Vec<(String, f64)>,
}

/// Cards for each family, in the order the units are given.
pub fn unit_cards(units: &[String], matrix: &ResourceMatrix) -> Vec<(UnitFamily, Vec<UnitCard>)> {
    group_by_family(units)
        .into_iter()
        .map(|(family, members)| {
            let cards = members
                .into_iter()
                .map(|unit| UnitCard {
                    unit: unit.to_string(),
                    total: matrix.total(unit),
                    holders: matrix
                        .columns()
                        .iter()
                        .map(|column| (column.name.clone(), matrix.amount(unit, column.id)))
                        .filter(|(_, amount)| *amount > 0.0)
                        .collect(),
                })
                .collect();
            (family, cards)
        })
        .collect()
}
