//! Member model and validation
//!
//! A `Member` is one person record. Relationship fields (`parents`,
//! `children`, `siblings`, `spouse`) hold member ids only; the registry is
//! the single canonical owner of every record and ids are resolved through
//! it on read. No embedded copies.

mod record;
mod validate;

pub use record::{LifeEvent, Member, MemberDraft, MemberId, MemberPatch};
pub use validate::MemberValidator;

pub(crate) use validate::parse_date;
