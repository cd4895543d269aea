//! CLI argument definitions using clap
//!
//! Commands:
//! - silsilah init --id 1 --name Aminah --gender F --birth-date 1950-01-01
//! - silsilah add --relation child --relative-id 1 --id 3 --name Budi ...
//! - silsilah remove | update | add-event | show | search
//! - silsilah export-csv | import-csv

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// silsilah - a strict, deterministic genealogical record registry
#[derive(Parser, Debug)]
#[command(name = "silsilah")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the registry file (flat JSON dump)
    #[arg(long, global = true, default_value = "./family.json")]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new registry containing only the root member
    Init {
        #[arg(long)]
        id: u64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        gender: String,
        /// Birth date, YYYY-MM-DD
        #[arg(long)]
        birth_date: String,
        /// Death date, YYYY-MM-DD
        #[arg(long)]
        death_date: Option<String>,
        /// Phone number, 10-15 digits
        #[arg(long)]
        phone: Option<String>,
    },

    /// Add a member linked to an existing relative
    Add {
        /// Relation to the relative: child, sibling, or spouse
        #[arg(long)]
        relation: String,
        /// Id of the existing relative
        #[arg(long)]
        relative_id: u64,
        #[arg(long)]
        id: u64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        gender: String,
        #[arg(long)]
        birth_date: String,
        #[arg(long)]
        death_date: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },

    /// Remove a member and sever every reference to it
    Remove {
        #[arg(long)]
        id: u64,
    },

    /// Update allow-listed fields on one member
    Update {
        #[arg(long)]
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        birth_date: Option<String>,
        #[arg(long)]
        death_date: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },

    /// Attach a dated event to a member
    AddEvent {
        #[arg(long)]
        id: u64,
        /// Event date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        #[arg(long)]
        label: String,
    },

    /// Print the family tree rooted at the root member
    Show,

    /// Find members by name substring or exact gender
    Search {
        #[arg(long)]
        query: String,
    },

    /// Write the registry as CSV
    ExportCsv {
        /// Output path
        #[arg(long)]
        out: PathBuf,
    },

    /// Replace the registry from a CSV file (all-or-nothing)
    ImportCsv {
        /// Input path
        #[arg(long, value_name = "PATH")]
        input: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
