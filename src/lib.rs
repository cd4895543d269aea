//! silsilah - a strict, deterministic genealogical record registry
//!
//! The registry is the single canonical owner of every person record;
//! relationship fields hold ids only, and the relationship engine keeps
//! parent/child, sibling, and spouse links mutually consistent through
//! every insert, link, update, and removal.

pub mod cli;
pub mod errors;
pub mod member;
pub mod observability;
pub mod registry;
pub mod relationship;
pub mod render;
pub mod search;
pub mod serialize;

pub use errors::{FamilyError, FamilyResult};
pub use member::{LifeEvent, Member, MemberDraft, MemberId, MemberPatch};
pub use registry::FamilyRegistry;
pub use relationship::Relation;
