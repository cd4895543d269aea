//! # Member Registry
//!
//! The canonical, id-keyed store of all members. The registry is the arena:
//! it owns exactly one record per id, and every relationship field anywhere
//! in the data set refers back into it by id.
//!
//! Invariants enforced here and by the relationship engine:
//! - no two members share an id
//! - every relationship reference resolves, or is absent
//! - spouse links are symmetric
//! - removal leaves no dangling reference behind
//! - a failed insert/link/update mutates nothing
//! - the registry is never empty and the root id always resolves

use std::collections::HashMap;

use crate::errors::{FamilyError, FamilyResult};
use crate::member::{LifeEvent, Member, MemberDraft, MemberId, MemberPatch, MemberValidator};
use crate::relationship::{self, Relation};

/// The id-keyed member store.
///
/// Constructed with exactly one member (the root); every other member enters
/// through `insert` (detached) or `link` (attached to a relative).
/// Single-threaded, in-memory; serialization is the only persistence.
#[derive(Debug)]
pub struct FamilyRegistry {
    members: HashMap<MemberId, Member>,
    /// Insertion order, drives `snapshot` and serialization
    order: Vec<MemberId>,
    root: MemberId,
    validator: MemberValidator,
}

impl FamilyRegistry {
    /// Creates a registry containing only the root member.
    ///
    /// The root is validated under the same rules as any inserted member;
    /// it is the one member exempt from the attach-to-a-relative rule.
    pub fn new(root: MemberDraft) -> FamilyResult<Self> {
        let validator = MemberValidator::new();
        let member = validator.build_member(&root)?;
        let root_id = member.id;

        let mut registry = Self {
            members: HashMap::new(),
            order: Vec::new(),
            root: root_id,
            validator,
        };
        registry.insert_unchecked(member);
        Ok(registry)
    }

    /// Rebuilds a registry from fully-formed records, e.g. during import.
    ///
    /// All-or-nothing: the first duplicate id, unresolvable reference,
    /// asymmetric spouse link, or malformed field fails the whole restore.
    pub(crate) fn from_members(root: MemberId, members: Vec<Member>) -> FamilyResult<Self> {
        let validator = MemberValidator::new();
        let mut registry = Self {
            members: HashMap::with_capacity(members.len()),
            order: Vec::with_capacity(members.len()),
            root,
            validator,
        };

        for member in members {
            registry.validator.check_member(&member)?;
            if registry.members.contains_key(&member.id) {
                return Err(FamilyError::DuplicateId(member.id));
            }
            registry.insert_unchecked(member);
        }

        if !registry.members.contains_key(&root) {
            return Err(FamilyError::NotFound(root));
        }
        registry.check_references()?;
        Ok(registry)
    }

    /// Id of the designated root member
    pub fn root_id(&self) -> MemberId {
        self.root
    }

    /// O(1) lookup; absent ids are not an error
    pub fn find(&self, id: MemberId) -> Option<&Member> {
        self.members.get(&id)
    }

    /// True if `id` resolves
    pub fn contains(&self, id: MemberId) -> bool {
        self.members.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Inserts a detached member (no relationships wired).
    ///
    /// Fails with `DuplicateId` on collision and `Validation` on malformed
    /// fields, in both cases without mutating the registry.
    pub fn insert(&mut self, draft: MemberDraft) -> FamilyResult<MemberId> {
        if self.members.contains_key(&draft.id) {
            return Err(FamilyError::DuplicateId(draft.id));
        }
        let member = self.validator.build_member(&draft)?;
        let id = member.id;
        self.insert_unchecked(member);
        Ok(id)
    }

    /// Creates a new member attached to `relative_id` by `relation`.
    ///
    /// The only member-creation path besides root construction and
    /// detached `insert`. See the relationship engine for the wiring rules.
    pub fn link(
        &mut self,
        draft: MemberDraft,
        relation: Relation,
        relative_id: MemberId,
    ) -> FamilyResult<MemberId> {
        relationship::link(self, draft, relation, relative_id)
    }

    /// Removes a member and cascades reference cleanup.
    ///
    /// After return, no other member's `parents`/`children`/`siblings`
    /// contains `id` and no `spouse` equals it. Removing the designated
    /// root promotes the next member in insertion order; the last member
    /// cannot be removed, so the registry is never empty and the root id
    /// always resolves. Returns the removed record.
    pub fn remove(&mut self, id: MemberId) -> FamilyResult<Member> {
        if self.order.len() == 1 && self.contains(id) {
            return Err(FamilyError::validation(
                "id",
                id.to_string(),
                "cannot remove the last member",
            ));
        }
        let removed = self.members.remove(&id).ok_or(FamilyError::NotFound(id))?;
        // Pure iteration over in-memory state: cannot fail mid-cascade.
        relationship::unlink(self, id);
        self.order.retain(|m| *m != id);
        if self.root == id {
            if let Some(next) = self.order.first() {
                self.root = *next;
            }
        }
        Ok(removed)
    }

    /// Applies a partial update to the target member only.
    ///
    /// Only the allow-listed fields (name, gender, birthDate, deathDate,
    /// phone) are applied; a patch never touches identity or relationship
    /// fields, and never cascades to relatives.
    pub fn update(&mut self, id: MemberId, patch: &MemberPatch) -> FamilyResult<()> {
        if !self.members.contains_key(&id) {
            return Err(FamilyError::NotFound(id));
        }
        // Validate the whole patch before applying any field of it.
        let parsed = self.validator.parse_patch(patch)?;

        if let Some(member) = self.members.get_mut(&id) {
            if let Some(name) = parsed.name {
                member.name = name;
            }
            if let Some(gender) = parsed.gender {
                member.gender = gender;
            }
            if let Some(birth_date) = parsed.birth_date {
                member.birth_date = birth_date;
            }
            if let Some(death_date) = parsed.death_date {
                member.death_date = Some(death_date);
            }
            if let Some(phone) = parsed.phone {
                member.phone = Some(phone);
            }
        }
        Ok(())
    }

    /// Appends an event to a member
    pub fn add_event(&mut self, id: MemberId, event: LifeEvent) -> FamilyResult<()> {
        let member = self.members.get_mut(&id).ok_or(FamilyError::NotFound(id))?;
        member.events.push(event);
        Ok(())
    }

    /// All members in insertion order, for serialization and search
    pub fn snapshot(&self) -> Vec<&Member> {
        self.order
            .iter()
            .filter_map(|id| self.members.get(id))
            .collect()
    }

    // ---- crate-internal surface for the relationship engine ----

    pub(crate) fn validator(&self) -> &MemberValidator {
        &self.validator
    }

    pub(crate) fn find_mut(&mut self, id: MemberId) -> Option<&mut Member> {
        self.members.get_mut(&id)
    }

    pub(crate) fn members_mut(&mut self) -> impl Iterator<Item = &mut Member> {
        self.members.values_mut()
    }

    pub(crate) fn insert_unchecked(&mut self, member: Member) {
        self.order.push(member.id);
        self.members.insert(member.id, member);
    }

    /// Verifies referential integrity and spouse symmetry over the whole
    /// store. Used after bulk restore; incremental operations keep the
    /// invariants by construction.
    fn check_references(&self) -> FamilyResult<()> {
        for member in self.members.values() {
            for id in member
                .parents
                .iter()
                .chain(&member.children)
                .chain(&member.siblings)
            {
                if !self.members.contains_key(id) {
                    return Err(FamilyError::NotFound(*id));
                }
            }
            if let Some(spouse_id) = member.spouse {
                let spouse = self
                    .members
                    .get(&spouse_id)
                    .ok_or(FamilyError::NotFound(spouse_id))?;
                if spouse.spouse != Some(member.id) {
                    return Err(FamilyError::validation(
                        "spouse",
                        spouse_id.to_string(),
                        "spouse link is not symmetric",
                    ));
                }
            }
        }
        Ok(())
    }
}
