//! JSON dump and restore
//!
//! The dump is the full registry: the designated root id plus every member
//! in insertion order. Pretty-printed with stable key order (struct field
//! order), so dumps diff cleanly.

use serde::{Deserialize, Serialize};

use crate::member::{Member, MemberId};
use crate::registry::FamilyRegistry;

use super::errors::{ImportError, ImportResult};

/// On-disk shape of a registry dump
#[derive(Debug, Serialize, Deserialize)]
struct RegistryDump {
    root: MemberId,
    members: Vec<Member>,
}

/// Serializes the full registry, pretty-printed.
pub fn to_json(registry: &FamilyRegistry) -> String {
    let dump = RegistryDump {
        root: registry.root_id(),
        members: registry.snapshot().into_iter().cloned().collect(),
    };
    // The dump is a plain struct tree with no non-string map keys;
    // serialization cannot fail.
    serde_json::to_string_pretty(&dump).expect("registry dump serializes")
}

/// Restores a registry from a JSON dump.
///
/// Atomic: a parse failure or any invariant violation (duplicate id,
/// dangling reference, asymmetric spouse link, malformed field) fails the
/// whole import and no registry is produced.
pub fn from_json(text: &str) -> ImportResult<FamilyRegistry> {
    let dump: RegistryDump =
        serde_json::from_str(text).map_err(|e| ImportError::document(e.to_string()))?;
    let registry = FamilyRegistry::from_members(dump.root, dump.members)?;
    Ok(registry)
}
