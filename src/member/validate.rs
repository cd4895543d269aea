//! Member validation
//!
//! Validation semantics:
//! - `name` and `gender` are required, non-empty, and free of field
//!   separators (commas, semicolons, line breaks)
//! - `birth_date` (and `death_date` when present) must parse as `YYYY-MM-DD`
//! - `phone`, when present, must be 10-15 ASCII digits
//!
//! Validation occurs BEFORE any registry mutation. The validator does not
//! mutate records and is deterministic.

use chrono::NaiveDate;
use regex::Regex;

use crate::errors::{FamilyError, FamilyResult};

use super::record::{Member, MemberDraft, MemberPatch};

const DATE_FORMAT: &str = "%Y-%m-%d";
const PHONE_PATTERN: &str = r"^[0-9]{10,15}$";

/// Text fields land in an unquoted CSV row with `;`-joined id lists;
/// a field separator inside one would shift columns on re-import.
fn check_flat_text(field: &'static str, value: &str) -> FamilyResult<()> {
    if value.chars().any(|c| matches!(c, ',' | ';' | '\n' | '\r')) {
        return Err(FamilyError::validation(
            field,
            value,
            "must not contain commas, semicolons, or line breaks",
        ));
    }
    Ok(())
}

/// Parses a `YYYY-MM-DD` calendar date, reporting the offending value.
pub(crate) fn parse_date(field: &'static str, value: &str) -> FamilyResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| FamilyError::validation(field, value, "expected YYYY-MM-DD"))
}

/// A `MemberPatch` with its date fields parsed and all values checked,
/// ready to apply to a stored member.
#[derive(Debug)]
pub(crate) struct ParsedPatch {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
    pub phone: Option<String>,
}

/// Validates member attributes and builds canonical records from drafts.
///
/// Holds the compiled phone pattern so validation never recompiles it.
#[derive(Debug)]
pub struct MemberValidator {
    phone_re: Regex,
}

impl Default for MemberValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberValidator {
    pub fn new() -> Self {
        // Pattern is a checked literal; compilation cannot fail.
        let phone_re = Regex::new(PHONE_PATTERN).expect("phone pattern compiles");
        Self { phone_re }
    }

    /// Validates a draft and builds the canonical record.
    ///
    /// Relationship fields start empty; only the relationship engine wires
    /// them. Fails with `FamilyError::Validation` carrying the offending
    /// field and value.
    pub fn build_member(&self, draft: &MemberDraft) -> FamilyResult<Member> {
        self.check_name(&draft.name)?;
        self.check_gender(&draft.gender)?;
        let birth_date = parse_date("birthDate", &draft.birth_date)?;
        let death_date = draft
            .death_date
            .as_deref()
            .map(|d| parse_date("deathDate", d))
            .transpose()?;
        if let Some(phone) = draft.phone.as_deref() {
            self.check_phone(phone)?;
        }

        Ok(Member {
            id: draft.id,
            name: draft.name.clone(),
            gender: draft.gender.clone(),
            birth_date,
            death_date,
            phone: draft.phone.clone(),
            parents: Vec::new(),
            children: Vec::new(),
            siblings: Vec::new(),
            spouse: None,
            events: Vec::new(),
        })
    }

    /// Re-checks a fully-formed record, used when restoring from an import
    /// where dates are already parsed but strings arrive unchecked.
    pub fn check_member(&self, member: &Member) -> FamilyResult<()> {
        self.check_name(&member.name)?;
        self.check_gender(&member.gender)?;
        if let Some(phone) = member.phone.as_deref() {
            self.check_phone(phone)?;
        }
        Ok(())
    }

    /// Validates and parses a partial update without applying it.
    pub(crate) fn parse_patch(&self, patch: &MemberPatch) -> FamilyResult<ParsedPatch> {
        if let Some(name) = patch.name.as_deref() {
            self.check_name(name)?;
        }
        if let Some(gender) = patch.gender.as_deref() {
            self.check_gender(gender)?;
        }
        let birth_date = patch
            .birth_date
            .as_deref()
            .map(|d| parse_date("birthDate", d))
            .transpose()?;
        let death_date = patch
            .death_date
            .as_deref()
            .map(|d| parse_date("deathDate", d))
            .transpose()?;
        if let Some(phone) = patch.phone.as_deref() {
            self.check_phone(phone)?;
        }

        Ok(ParsedPatch {
            name: patch.name.clone(),
            gender: patch.gender.clone(),
            birth_date,
            death_date,
            phone: patch.phone.clone(),
        })
    }

    fn check_name(&self, name: &str) -> FamilyResult<()> {
        if name.trim().is_empty() {
            return Err(FamilyError::validation("name", name, "must not be empty"));
        }
        check_flat_text("name", name)
    }

    fn check_gender(&self, gender: &str) -> FamilyResult<()> {
        if gender.trim().is_empty() {
            return Err(FamilyError::validation("gender", gender, "must not be empty"));
        }
        check_flat_text("gender", gender)
    }

    fn check_phone(&self, phone: &str) -> FamilyResult<()> {
        if !self.phone_re.is_match(phone) {
            return Err(FamilyError::validation(
                "phone",
                phone,
                "expected 10-15 digits",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> MemberDraft {
        MemberDraft::new(1, "Aminah", "F", "1950-01-01")
    }

    #[test]
    fn test_valid_draft_builds_member() {
        let validator = MemberValidator::new();
        let member = validator.build_member(&draft()).unwrap();
        assert_eq!(member.id, 1);
        assert_eq!(member.birth_date.to_string(), "1950-01-01");
        assert!(member.parents.is_empty());
        assert!(member.spouse.is_none());
    }

    #[test]
    fn test_empty_name_rejected() {
        let validator = MemberValidator::new();
        let mut d = draft();
        d.name = "   ".into();
        let err = validator.build_member(&d).unwrap_err();
        assert!(matches!(err, FamilyError::Validation { field: "name", .. }));
    }

    #[test]
    fn test_malformed_birth_date_rejected() {
        let validator = MemberValidator::new();
        for bad in ["1950-13-01", "1950/01/01", "01-01-1950", "yesterday", ""] {
            let mut d = draft();
            d.birth_date = bad.into();
            let err = validator.build_member(&d).unwrap_err();
            assert!(
                matches!(err, FamilyError::Validation { field: "birthDate", .. }),
                "expected date rejection for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_malformed_death_date_rejected() {
        let validator = MemberValidator::new();
        let d = draft().with_death_date("2020-02-30");
        let err = validator.build_member(&d).unwrap_err();
        assert!(matches!(err, FamilyError::Validation { field: "deathDate", .. }));
    }

    #[test]
    fn test_phone_length_bounds() {
        let validator = MemberValidator::new();

        // Too short
        let err = validator
            .build_member(&draft().with_phone("123"))
            .unwrap_err();
        assert!(matches!(err, FamilyError::Validation { field: "phone", .. }));

        // Too long (16 digits)
        assert!(validator
            .build_member(&draft().with_phone("1234567890123456"))
            .is_err());

        // Non-numeric
        assert!(validator
            .build_member(&draft().with_phone("08123-456-789"))
            .is_err());

        // Bounds are inclusive
        assert!(validator
            .build_member(&draft().with_phone("0812345678"))
            .is_ok());
        assert!(validator
            .build_member(&draft().with_phone("081234567890123"))
            .is_ok());
    }

    #[test]
    fn test_field_separators_rejected_in_text_fields() {
        let validator = MemberValidator::new();

        let mut d = draft();
        d.name = "Aminah, S.Pd.".into();
        let err = validator.build_member(&d).unwrap_err();
        assert!(matches!(err, FamilyError::Validation { field: "name", .. }));

        let mut d = draft();
        d.gender = "F;M".into();
        assert!(validator.build_member(&d).is_err());

        let mut d = draft();
        d.name = "Aminah\nbinti Hasan".into();
        assert!(validator.build_member(&d).is_err());

        let patch = MemberPatch {
            name: Some("Aminah, S.Pd.".into()),
            ..MemberPatch::default()
        };
        assert!(validator.parse_patch(&patch).is_err());
    }

    #[test]
    fn test_patch_with_bad_date_rejected() {
        let validator = MemberValidator::new();
        let patch = MemberPatch {
            birth_date: Some("not-a-date".into()),
            ..MemberPatch::default()
        };
        assert!(validator.parse_patch(&patch).is_err());
    }

    #[test]
    fn test_patch_parses_dates() {
        let validator = MemberValidator::new();
        let patch = MemberPatch {
            death_date: Some("2001-09-11".into()),
            ..MemberPatch::default()
        };
        let parsed = validator.parse_patch(&patch).unwrap();
        assert_eq!(parsed.death_date.unwrap().to_string(), "2001-09-11");
        assert!(parsed.name.is_none());
    }
}
