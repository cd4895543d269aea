//! CSV export and import
//!
//! Fixed, unquoted 10-column format, one row per member in insertion
//! order. Id lists are `;`-joined; absent optionals render empty. Events
//! are not represented: CSV export is documented lossy. Member validation
//! keeps text fields free of separators, so rows never need quoting.
//!
//! Import tolerates missing optional trailing columns, parses ids as
//! integers, and fails the whole import on the first malformed row.
//! The first data row names the root member.

use crate::member::{parse_date, Member, MemberId};
use crate::registry::FamilyRegistry;

use super::errors::{ImportError, ImportResult};

/// Fixed header row; column order is part of the format
pub const CSV_HEADER: &str =
    "ID,Name,Gender,BirthDate,DeathDate,Parents,Children,Siblings,Spouse,Phone";

/// Index of the last required column (BirthDate)
const REQUIRED_COLUMNS: usize = 4;

/// Serializes the registry to CSV, insertion order, header first.
pub fn to_csv(registry: &FamilyRegistry) -> String {
    let mut out = String::with_capacity(64 * (registry.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');

    for member in registry.snapshot() {
        out.push_str(&member.id.to_string());
        out.push(',');
        out.push_str(&member.name);
        out.push(',');
        out.push_str(&member.gender);
        out.push(',');
        out.push_str(&member.birth_date.format("%Y-%m-%d").to_string());
        out.push(',');
        if let Some(d) = member.death_date {
            out.push_str(&d.format("%Y-%m-%d").to_string());
        }
        out.push(',');
        out.push_str(&join_ids(&member.parents));
        out.push(',');
        out.push_str(&join_ids(&member.children));
        out.push(',');
        out.push_str(&join_ids(&member.siblings));
        out.push(',');
        if let Some(spouse) = member.spouse {
            out.push_str(&spouse.to_string());
        }
        out.push(',');
        if let Some(phone) = member.phone.as_deref() {
            out.push_str(phone);
        }
        out.push('\n');
    }
    out
}

/// Restores a registry from CSV text.
///
/// All-or-nothing: a bad header, malformed row, or invariant violation
/// fails the import; events are absent by construction (lossy format).
pub fn from_csv(text: &str) -> ImportResult<FamilyRegistry> {
    let mut lines = text.lines().enumerate();

    let (_, header) = lines
        .next()
        .ok_or_else(|| ImportError::document("empty CSV document"))?;
    if header.trim() != CSV_HEADER {
        return Err(ImportError::row(1, format!("expected header '{CSV_HEADER}'")));
    }

    let mut members = Vec::new();
    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        members.push(parse_row(index + 1, line)?);
    }

    let root = members
        .first()
        .map(|m| m.id)
        .ok_or_else(|| ImportError::document("CSV document has no member rows"))?;
    let registry = FamilyRegistry::from_members(root, members)?;
    Ok(registry)
}

fn join_ids(ids: &[MemberId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(";")
}

fn parse_row(line_no: usize, line: &str) -> ImportResult<Member> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < REQUIRED_COLUMNS {
        return Err(ImportError::row(
            line_no,
            format!(
                "expected at least {REQUIRED_COLUMNS} columns, found {}",
                fields.len()
            ),
        ));
    }

    // Optional trailing columns may be missing entirely
    let column = |i: usize| fields.get(i).copied().unwrap_or("");

    let id = parse_member_id(line_no, fields[0])?;
    let name = fields[1].to_string();
    let gender = fields[2].to_string();
    let birth_date = parse_date("birthDate", fields[3])
        .map_err(|e| ImportError::row(line_no, e.to_string()))?;
    let death_date = match column(4) {
        "" => None,
        value => Some(
            parse_date("deathDate", value)
                .map_err(|e| ImportError::row(line_no, e.to_string()))?,
        ),
    };
    let parents = parse_id_list(line_no, column(5))?;
    let children = parse_id_list(line_no, column(6))?;
    let siblings = parse_id_list(line_no, column(7))?;
    let spouse = match column(8) {
        "" => None,
        value => Some(parse_member_id(line_no, value)?),
    };
    let phone = match column(9) {
        "" => None,
        value => Some(value.to_string()),
    };

    Ok(Member {
        id,
        name,
        gender,
        birth_date,
        death_date,
        phone,
        parents,
        children,
        siblings,
        spouse,
        events: Vec::new(),
    })
}

fn parse_member_id(line_no: usize, value: &str) -> ImportResult<MemberId> {
    value
        .parse::<MemberId>()
        .map_err(|_| ImportError::row(line_no, format!("invalid member id '{value}'")))
}

fn parse_id_list(line_no: usize, value: &str) -> ImportResult<Vec<MemberId>> {
    value
        .split(';')
        .filter(|part| !part.is_empty())
        .map(|part| parse_member_id(line_no, part))
        .collect()
}
