//! addressbook - contact book CLI
//!
//! Validates structured addresses and names, and manages persons in a
//! JSON file with similarity-based name search.

use addressbook::{commands, contacts, output};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Contact book CLI with structured addresses and fuzzy name search.
#[derive(Parser, Debug)]
#[command(name = "addressbook")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Address book file (default: $ADDRESSBOOK_PATH or the user data dir)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Output as JSON (most commands support this)
    #[arg(long, global = true)]
    json: bool,

    /// Compact JSON output (no whitespace)
    #[arg(long, global = true)]
    compact: bool,

    /// Comma-separated field allowlist
    #[arg(long, global = true)]
    fields: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    // =========================================================================
    // VALIDATION COMMANDS
    // =========================================================================
    /// Parse an address of the form "BLOCK, STREET, UNIT, POSTAL_CODE"
    CheckAddress {
        /// Raw address (e.g., "123, Clementi Ave 3, #12-34, 231534")
        address: String,

        /// Mark the address as private
        #[arg(long)]
        private: bool,
    },

    /// Validate and normalize a person name
    CheckName {
        /// Raw name
        name: String,
    },

    /// Check whether OTHER is similar to NAME
    Similar {
        name: String,
        other: String,

        /// Also check the reverse direction
        #[arg(long)]
        both: bool,
    },

    // =========================================================================
    // PERSON COMMANDS
    // =========================================================================
    /// List all persons (private fields hidden)
    List,

    /// Add a new person
    Add {
        name: String,
        phone: String,
        email: String,
        /// Address as "BLOCK, STREET, UNIT, POSTAL_CODE"
        address: String,

        /// Tag to attach (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        #[arg(long)]
        private_phone: bool,

        #[arg(long)]
        private_email: bool,

        #[arg(long)]
        private_address: bool,
    },

    /// Delete the person at INDEX (as shown by `list`)
    Delete { index: usize },

    /// Find persons whose name is similar to NAME
    Find { name: String },

    // =========================================================================
    // TAG COMMANDS
    // =========================================================================
    /// Add a tag to the person at INDEX
    AddTag { index: usize, tag: String },

    /// Delete a tag from the person at INDEX
    DeleteTag { index: usize, tag: String },
}

/// Filter from RUST_LOG-style directives, WARN when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries command output
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(&directives))
        .init();

    let cli = Cli::parse();

    let output_controls = output::OutputControls {
        json: cli.json,
        compact: cli.compact,
        fields: cli.fields.clone(),
    };

    let path = cli.file.clone().unwrap_or_else(contacts::default_addressbook_path);
    tracing::debug!(path = %path.display(), "using address book");

    let result = match cli.command {
        Command::CheckAddress { address, private } => {
            commands::check::check_address(&address, private, &output_controls)
        }
        Command::CheckName { name } => commands::check::check_name(&name, &output_controls),
        Command::Similar { name, other, both } => {
            commands::check::similar(&name, &other, both, &output_controls)
        }

        Command::List => commands::contacts::list(&path, &output_controls),
        Command::Add {
            name,
            phone,
            email,
            address,
            tags,
            private_phone,
            private_email,
            private_address,
        } => {
            let privacy = commands::contacts::Privacy {
                phone: private_phone,
                email: private_email,
                address: private_address,
            };
            commands::contacts::add(&path, &name, &phone, &email, &address, &tags, privacy)
        }
        Command::Delete { index } => commands::contacts::delete(&path, index),
        Command::Find { name } => commands::contacts::find(&path, &name, &output_controls),

        Command::AddTag { index, tag } => commands::tags::add_tag(&path, index, &tag),
        Command::DeleteTag { index, tag } => commands::tags::delete_tag(&path, index, &tag),
    };

    match result {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            if cli.json {
                println!("{}", output::format_error(&e));
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_warn() {
        let filter = log_filter("").to_string().to_lowercase();
        assert!(filter.contains("warn"), "filter was {}", filter);
    }

    #[test]
    fn test_log_filter_global_level_is_kept() {
        let filter = log_filter("debug").to_string().to_lowercase();
        assert!(filter.contains("debug"), "filter was {}", filter);
        assert!(!filter.contains("warn"), "filter was {}", filter);
    }
}
