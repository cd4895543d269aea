//! CLI command implementations
//!
//! Each command is load → one registry operation → save. The registry file
//! is rewritten only after the operation succeeded, so a rejected edit or
//! a failed import never corrupts it.

use std::fs;
use std::path::Path;

use crate::member::{parse_date, LifeEvent, MemberDraft, MemberPatch};
use crate::observability::Logger;
use crate::registry::FamilyRegistry;
use crate::relationship::Relation;
use crate::render::render_tree;
use crate::search::search;
use crate::serialize::{from_csv, from_json, to_csv, to_json};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Dispatches one parsed command
pub fn run_command(cli: Cli) -> CliResult<()> {
    let file = cli.file;
    match cli.command {
        Command::Init {
            id,
            name,
            gender,
            birth_date,
            death_date,
            phone,
        } => {
            if file.exists() {
                return Err(CliError::AlreadyInitialized(file));
            }
            let mut draft = MemberDraft::new(id, name, gender, birth_date);
            draft.death_date = death_date;
            draft.phone = phone;
            let registry = FamilyRegistry::new(draft)?;
            save_registry(&file, &registry)?;
            Logger::info("registry_initialized", &[("root", &id.to_string())]);
            Ok(())
        }

        Command::Add {
            relation,
            relative_id,
            id,
            name,
            gender,
            birth_date,
            death_date,
            phone,
        } => {
            let relation: Relation = relation.parse().map_err(CliError::Registry)?;
            let mut registry = load_registry(&file)?;
            let mut draft = MemberDraft::new(id, name, gender, birth_date);
            draft.death_date = death_date;
            draft.phone = phone;
            registry.link(draft, relation, relative_id)?;
            save_registry(&file, &registry)?;
            Logger::info(
                "member_linked",
                &[
                    ("id", &id.to_string()),
                    ("relation", relation.as_str()),
                    ("relative", &relative_id.to_string()),
                ],
            );
            Ok(())
        }

        Command::Remove { id } => {
            let mut registry = load_registry(&file)?;
            let removed = registry.remove(id)?;
            save_registry(&file, &registry)?;
            Logger::info(
                "member_removed",
                &[("id", &id.to_string()), ("name", &removed.name)],
            );
            Ok(())
        }

        Command::Update {
            id,
            name,
            gender,
            birth_date,
            death_date,
            phone,
        } => {
            let mut registry = load_registry(&file)?;
            let patch = MemberPatch {
                name,
                gender,
                birth_date,
                death_date,
                phone,
            };
            registry.update(id, &patch)?;
            save_registry(&file, &registry)?;
            Logger::info("member_updated", &[("id", &id.to_string())]);
            Ok(())
        }

        Command::AddEvent { id, date, label } => {
            let mut registry = load_registry(&file)?;
            let date = parse_date("date", &date)?;
            registry.add_event(id, LifeEvent { date, label })?;
            save_registry(&file, &registry)?;
            Logger::info("event_added", &[("id", &id.to_string())]);
            Ok(())
        }

        Command::Show => {
            let registry = load_registry(&file)?;
            print!("{}", render_tree(&registry));
            Ok(())
        }

        Command::Search { query } => {
            let registry = load_registry(&file)?;
            for member in search(&registry, &query) {
                println!(
                    "{}\t{}\t{}\t{}",
                    member.id, member.name, member.gender, member.birth_date
                );
            }
            Ok(())
        }

        Command::ExportCsv { out } => {
            let registry = load_registry(&file)?;
            fs::write(&out, to_csv(&registry)).map_err(|e| CliError::io(&out, e))?;
            Logger::info(
                "csv_exported",
                &[("members", &registry.len().to_string())],
            );
            Ok(())
        }

        Command::ImportCsv { input } => {
            let text = fs::read_to_string(&input).map_err(|e| CliError::io(&input, e))?;
            // Restore fully before touching the registry file.
            let registry = match from_csv(&text) {
                Ok(registry) => registry,
                Err(err) => {
                    Logger::error("import_failed", &[("reason", &err.to_string())]);
                    return Err(err.into());
                }
            };
            save_registry(&file, &registry)?;
            Logger::info(
                "csv_imported",
                &[("members", &registry.len().to_string())],
            );
            Ok(())
        }
    }
}

fn load_registry(path: &Path) -> CliResult<FamilyRegistry> {
    if !path.exists() {
        return Err(CliError::NotInitialized(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    Ok(from_json(&text)?)
}

fn save_registry(path: &Path, registry: &FamilyRegistry) -> CliResult<()> {
    fs::write(path, to_json(registry)).map_err(|e| CliError::io(path, e))
}
