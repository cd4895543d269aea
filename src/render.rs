//! Family tree rendering
//!
//! Read-only collaborator: derives an indented tree view from the flat
//! id-keyed store, starting at the root. The tree is computed from
//! `children`/`spouse` id links at render time; nothing is embedded and
//! nothing is mutated.

use std::collections::HashSet;

use crate::registry::FamilyRegistry;

/// Renders the registry as an indented tree rooted at the root member.
///
/// One line per member (two-space indent per generation), with a
/// `Spouse: <name>` line under anyone married. Traversal is an iterative
/// worklist over child ids; a visited set guards against malformed
/// imports that managed to smuggle in a parent/child loop.
pub fn render_tree(registry: &FamilyRegistry) -> String {
    let mut out = String::new();
    let mut visited = HashSet::new();
    let mut stack = vec![(registry.root_id(), 0usize)];

    while let Some((id, depth)) = stack.pop() {
        if !visited.insert(id) {
            continue;
        }
        let Some(member) = registry.find(id) else {
            continue;
        };

        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        out.push_str(&member.name);
        out.push('\n');

        if let Some(spouse) = member.spouse.and_then(|sid| registry.find(sid)) {
            out.push_str(&indent);
            out.push_str("  Spouse: ");
            out.push_str(&spouse.name);
            out.push('\n');
        }

        // Reverse push keeps children in link order on the stack
        for &child in member.children.iter().rev() {
            stack.push((child, depth + 1));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::MemberDraft;
    use crate::relationship::Relation;

    #[test]
    fn test_render_nested_generations() {
        let mut reg =
            FamilyRegistry::new(MemberDraft::new(1, "Aminah", "F", "1950-01-01")).unwrap();
        reg.link(
            MemberDraft::new(2, "Hasan", "M", "1948-05-20"),
            Relation::Spouse,
            1,
        )
        .unwrap();
        reg.link(
            MemberDraft::new(3, "Budi", "M", "1975-02-02"),
            Relation::Child,
            1,
        )
        .unwrap();
        reg.link(
            MemberDraft::new(4, "Tri", "F", "1977-03-03"),
            Relation::Child,
            1,
        )
        .unwrap();
        reg.link(
            MemberDraft::new(5, "Cucu", "F", "2001-04-04"),
            Relation::Child,
            3,
        )
        .unwrap();

        let text = render_tree(&reg);
        let expected = "\
Aminah
  Spouse: Hasan
  Budi
    Cucu
  Tri
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_root_only() {
        let reg = FamilyRegistry::new(MemberDraft::new(1, "Aminah", "F", "1950-01-01")).unwrap();
        assert_eq!(render_tree(&reg), "Aminah\n");
    }
}
