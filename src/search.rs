//! Member search
//!
//! Thin read-path over the registry snapshot; matches are returned in
//! insertion order.

use crate::member::Member;
use crate::registry::FamilyRegistry;

/// Finds members whose name contains `query` (case-insensitive) or whose
/// gender equals `query` exactly (case-insensitive).
pub fn search<'a>(registry: &'a FamilyRegistry, query: &str) -> Vec<&'a Member> {
    let needle = query.to_lowercase();
    registry
        .snapshot()
        .into_iter()
        .filter(|m| m.name.to_lowercase().contains(&needle) || m.gender.to_lowercase() == needle)
        .collect()
}
