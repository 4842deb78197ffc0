//! Resource catalog: discovers resource names and puts them in canonical order.
//!
//! Known names follow [`RESOURCE_ORDER`] (military tiers, transport, raw
//! resources, then the "other" tail). Everything else goes after them in
//! alphabetical order. Matching against the list ignores whitespace, so
//! `"Knight T2"` ranks as `KnightT2`, but the raw name is what callers keep.

use crate::types::Realm;
use indexmap::IndexSet;
use std::borrow::Cow;
use std::cmp::Ordering;

/// Canonical display order for known resources.
pub const RESOURCE_ORDER: &[&str] = &[
    // Military
    "Knight",
    "KnightT2",
    "KnightT3",
    "Crossbowman",
    "CrossbowmanT2",
    "CrossbowmanT3",
    "Paladin",
    "PaladinT2",
    "PaladinT3",
    // Transport
    "Donkey",
    // Raw resources
    "Wood",
    "Stone",
    "Coal",
    "Copper",
    "Obsidian",
    "Silver",
    "Ironwood",
    "ColdIron",
    "Gold",
    "Hartwood",
    "Diamonds",
    "Sapphire",
    "Ruby",
    "DeepCrystal",
    "Ignium",
    "EtherealSilica",
    "TrueIce",
    "TwilightQuartz",
    "AlchemicalSilver",
    "Adamantine",
    "Mithral",
    "Dragonhide",
    // Others
    "Lords",
    "Labor",
    "AncientFragment",
    "Wheat",
    "Fish",
];

/// Strips all whitespace from a resource name.
pub fn normalize_name(name: &str) -> Cow<'_, str> {
    if name.chars().any(char::is_whitespace) {
        Cow::Owned(name.chars().filter(|c| !c.is_whitespace()).collect())
    } else {
        Cow::Borrowed(name)
    }
}

/// Position of `name` in [`RESOURCE_ORDER`], after normalization.
pub fn priority_index(name: &str) -> Option<usize> {
    let normalized = normalize_name(name);
    RESOURCE_ORDER.iter().position(|known| *known == normalized)
}

/// Case-insensitive alphabetical compare; on case-only ties lowercase wins.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}

/// Canonical ascending order: list position first, then alphabetical.
///
/// Spellings that share a list position (`"Knight T2"`, `"KnightT2"`) are
/// ordered alphabetically so the order is total.
pub fn compare_resources(a: &str, b: &str) -> Ordering {
    match (priority_index(a), priority_index(b)) {
        (Some(ai), Some(bi)) => ai.cmp(&bi).then_with(|| locale_cmp(a, b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => locale_cmp(a, b),
    }
}

/// Distinct raw resource names across all realms, in first-seen order.
pub fn collect_resource_names(realms: &[Realm]) -> Vec<String> {
    let names: IndexSet<&str> = realms
        .iter()
        .flat_map(|realm| realm.resources.iter())
        .map(|entry| entry.name.as_str())
        .collect();
    names.into_iter().map(str::to_string).collect()
}

/// Distinct resource names in canonical order.
pub fn ordered_resource_names(realms: &[Realm]) -> Vec<String> {
    let mut names = collect_resource_names(realms);
    names.sort_by(|a, b| compare_resources(a, b));
    names
}
