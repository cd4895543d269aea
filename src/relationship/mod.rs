//! # Relationship Engine
//!
//! Wires parent/child, sibling, and spouse links between registry members
//! and keeps them mutually consistent. All links are stored as ids on both
//! endpoints; the engine is the only code that writes relationship fields.
//!
//! Ordering contract for `link`: every check (draft validation, id
//! uniqueness, relative resolution, spouse availability) happens before the
//! first write, so a failed link leaves the registry untouched.

use std::fmt;
use std::str::FromStr;

use crate::errors::{FamilyError, FamilyResult};
use crate::member::{MemberDraft, MemberId};
use crate::registry::FamilyRegistry;

/// The edge type `link` establishes between two members
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// New member becomes a child of the relative
    Child,
    /// New member and relative become siblings (symmetric)
    Sibling,
    /// New member and relative become spouses (symmetric, at most one each)
    Spouse,
}

impl Relation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Child => "child",
            Relation::Sibling => "sibling",
            Relation::Spouse => "spouse",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Relation {
    type Err = FamilyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "child" => Ok(Relation::Child),
            "sibling" => Ok(Relation::Sibling),
            "spouse" => Ok(Relation::Spouse),
            other => Err(FamilyError::UnsupportedRelation(other.to_string())),
        }
    }
}

/// Creates a new member attached to an existing relative.
///
/// Steps, in order:
/// 1. validate the draft under the registry's insert rules (fail fast,
///    no mutation)
/// 2. resolve the relative (`NotFound` if absent)
/// 3. check the relation precondition (a spouse link requires the relative
///    to be unmarried, otherwise symmetry would strand the previous spouse)
/// 4. insert the new member
/// 5. wire ids on both endpoints
pub fn link(
    registry: &mut FamilyRegistry,
    draft: MemberDraft,
    relation: Relation,
    relative_id: MemberId,
) -> FamilyResult<MemberId> {
    if registry.contains(draft.id) {
        return Err(FamilyError::DuplicateId(draft.id));
    }
    let member = registry.validator().build_member(&draft)?;

    let relative = registry
        .find(relative_id)
        .ok_or(FamilyError::NotFound(relative_id))?;
    if relation == Relation::Spouse && relative.spouse.is_some() {
        return Err(FamilyError::validation(
            "spouse",
            relative_id.to_string(),
            "relative already has a spouse",
        ));
    }

    let new_id = member.id;
    registry.insert_unchecked(member);

    match relation {
        Relation::Child => {
            if let Some(relative) = registry.find_mut(relative_id) {
                relative.children.push(new_id);
            }
            if let Some(member) = registry.find_mut(new_id) {
                member.parents.push(relative_id);
            }
        }
        Relation::Sibling => {
            if let Some(relative) = registry.find_mut(relative_id) {
                relative.siblings.push(new_id);
            }
            if let Some(member) = registry.find_mut(new_id) {
                member.siblings.push(relative_id);
            }
        }
        Relation::Spouse => {
            if let Some(relative) = registry.find_mut(relative_id) {
                relative.spouse = Some(new_id);
            }
            if let Some(member) = registry.find_mut(new_id) {
                member.spouse = Some(relative_id);
            }
        }
    }

    Ok(new_id)
}

/// Strips every reference to `id` from every other member.
///
/// Called by `FamilyRegistry::remove` before the entry itself is deleted.
/// Idempotent: a member list that does not contain `id` is left as-is, and
/// no step can fail.
pub(crate) fn unlink(registry: &mut FamilyRegistry, id: MemberId) {
    for member in registry.members_mut() {
        member.parents.retain(|p| *p != id);
        member.children.retain(|c| *c != id);
        member.siblings.retain(|s| *s != id);
        if member.spouse == Some(id) {
            member.spouse = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_from_str() {
        assert_eq!("child".parse::<Relation>().unwrap(), Relation::Child);
        assert_eq!("sibling".parse::<Relation>().unwrap(), Relation::Sibling);
        assert_eq!("spouse".parse::<Relation>().unwrap(), Relation::Spouse);
    }

    #[test]
    fn test_unknown_relation_carries_offending_string() {
        let err = "marriage".parse::<Relation>().unwrap_err();
        assert_eq!(err, FamilyError::UnsupportedRelation("marriage".into()));
        assert!(err.to_string().contains("marriage"));
    }

    #[test]
    fn test_relation_round_trips_as_str() {
        for relation in [Relation::Child, Relation::Sibling, Relation::Spouse] {
            assert_eq!(relation.as_str().parse::<Relation>().unwrap(), relation);
        }
    }
}
