//! Registry Integrity Invariant Tests
//!
//! Tests for invariants:
//! - Uniqueness: no two members ever share an id
//! - Validation-before-mutation: a failed insert/link/update changes nothing
//! - Field rules: dates are YYYY-MM-DD, phone is 10-15 digits

use silsilah::{FamilyError, FamilyRegistry, MemberDraft, MemberPatch, Relation};

// =============================================================================
// Test Utilities
// =============================================================================

fn root_draft() -> MemberDraft {
    MemberDraft::new(1, "Aminah", "F", "1950-01-01")
}

fn registry() -> FamilyRegistry {
    FamilyRegistry::new(root_draft()).expect("root draft is valid")
}

fn snapshot_ids(registry: &FamilyRegistry) -> Vec<u64> {
    registry.snapshot().iter().map(|m| m.id).collect()
}

// =============================================================================
// INVARIANT: Uniqueness
// =============================================================================

/// A repeated id always fails with DuplicateId and leaves state unchanged,
/// through both creation paths.
#[test]
fn test_duplicate_id_rejected_on_insert_and_link() {
    let mut reg = registry();
    reg.insert(MemberDraft::new(2, "Hasan", "M", "1948-05-20"))
        .unwrap();

    let err = reg
        .insert(MemberDraft::new(2, "Impostor", "M", "1960-01-01"))
        .unwrap_err();
    assert_eq!(err, FamilyError::DuplicateId(2));

    let err = reg
        .link(
            MemberDraft::new(1, "Impostor", "M", "1960-01-01"),
            Relation::Child,
            2,
        )
        .unwrap_err();
    assert_eq!(err, FamilyError::DuplicateId(1));

    assert_eq!(snapshot_ids(&reg), vec![1, 2]);
    assert_eq!(reg.find(2).unwrap().name, "Hasan");
}

/// No sequence of inserts and links produces two members with one id.
#[test]
fn test_ids_unique_across_operation_sequence() {
    let mut reg = registry();
    reg.link(MemberDraft::new(2, "Hasan", "M", "1948-05-20"), Relation::Spouse, 1)
        .unwrap();
    reg.link(MemberDraft::new(3, "Budi", "M", "1975-02-02"), Relation::Child, 1)
        .unwrap();
    reg.insert(MemberDraft::new(4, "Tamu", "M", "1980-08-08"))
        .unwrap();

    let mut ids = snapshot_ids(&reg);
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), reg.len());
}

// =============================================================================
// INVARIANT: Validation before mutation
// =============================================================================

/// Insert with a short phone fails validation (10 digits minimum).
#[test]
fn test_short_phone_rejected() {
    let mut reg = registry();
    let err = reg
        .insert(MemberDraft::new(2, "Hasan", "M", "1948-05-20").with_phone("123"))
        .unwrap_err();
    assert_eq!(err.code(), "SILSILAH_VALIDATION_FAILED");
    assert!(err.to_string().contains("123"));
    assert_eq!(reg.len(), 1);
}

/// Malformed dates are rejected wherever they appear.
#[test]
fn test_malformed_dates_rejected_everywhere() {
    let mut reg = registry();

    let err = reg
        .insert(MemberDraft::new(2, "Hasan", "M", "20-05-1948"))
        .unwrap_err();
    assert_eq!(err.code(), "SILSILAH_VALIDATION_FAILED");

    let err = reg
        .insert(MemberDraft::new(2, "Hasan", "M", "1948-05-20").with_death_date("2020-00-01"))
        .unwrap_err();
    assert_eq!(err.code(), "SILSILAH_VALIDATION_FAILED");

    let patch = MemberPatch {
        birth_date: Some("1950-02-30".into()),
        ..MemberPatch::default()
    };
    assert!(reg.update(1, &patch).is_err());
    assert_eq!(reg.find(1).unwrap().birth_date.to_string(), "1950-01-01");
}

/// A failed link mutates neither endpoint: no half-written relationships.
#[test]
fn test_failed_link_leaves_both_endpoints_unchanged() {
    let mut reg = registry();

    // Unresolvable relative
    let err = reg
        .link(MemberDraft::new(2, "Hasan", "M", "1948-05-20"), Relation::Child, 42)
        .unwrap_err();
    assert_eq!(err, FamilyError::NotFound(42));
    assert_eq!(reg.len(), 1);
    assert!(reg.find(2).is_none());
    assert!(reg.find(1).unwrap().children.is_empty());

    // Invalid draft
    let err = reg
        .link(MemberDraft::new(2, "", "M", "1948-05-20"), Relation::Child, 1)
        .unwrap_err();
    assert_eq!(err.code(), "SILSILAH_VALIDATION_FAILED");
    assert_eq!(reg.len(), 1);
}

// =============================================================================
// Update semantics
// =============================================================================

/// An update touches the target member only; relatives keep their fields.
#[test]
fn test_update_does_not_cascade_to_relatives() {
    let mut reg = registry();
    reg.link(MemberDraft::new(2, "Budi", "M", "1975-02-02"), Relation::Child, 1)
        .unwrap();

    let patch = MemberPatch {
        name: Some("Siti Aminah".into()),
        ..MemberPatch::default()
    };
    reg.update(1, &patch).unwrap();

    assert_eq!(reg.find(1).unwrap().name, "Siti Aminah");
    assert_eq!(reg.find(2).unwrap().name, "Budi");
}
