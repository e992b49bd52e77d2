use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Builder as LoggerBuilder;
use log::LevelFilter;
use stanza::{ConfigFile, FieldPath, SerializeOptions};

const EXPECTED_EXTENSION: &str = "conf";

#[derive(Debug, Clone, ValueEnum)]
enum Verbosity {
    Warnings,
    Silent,
    Debug,
}

/// Simple cli tool to inspect and edit sectioned config files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path of the config file
    #[arg(short, long)]
    path: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Verbosity::Warnings)]
    verbosity: Verbosity,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the raw value of a field. Use `section.field`, or just `field` for the unnamed section.
    Get { key: String },
    /// Set a field and save the file
    Set {
        key: String,
        value: String,
        #[command(flatten)]
        save: SaveArgs,
    },
    /// Remove a field and save the file
    Reset {
        key: String,
        #[command(flatten)]
        save: SaveArgs,
    },
    /// List section names
    Sections,
    /// List field names of a section. Leave empty for the unnamed section.
    Fields { section: Option<String> },
    /// Only parse the file and report syntax errors
    Check,
    /// Re-serialize the file
    Fmt {
        /// Write the result back instead of printing it
        #[arg(short, long)]
        write: bool,
        #[command(flatten)]
        save: SaveArgs,
    },
}

#[derive(clap::Args, Debug)]
struct SaveArgs {
    #[arg(long)]
    sort_sections: bool,
    #[arg(long)]
    sort_fields: bool,
    /// Overwrite the file in place instead of writing a temp file and renaming it
    #[arg(long)]
    no_atomic: bool,
}

impl SaveArgs {
    fn apply(&self, config_file: &mut ConfigFile) {
        config_file.options = SerializeOptions::new()
            .with_sort_sections(self.sort_sections)
            .with_sort_fields(self.sort_fields);
        config_file.atomic_write = !self.no_atomic;
    }
}

fn warn_on_unexpected_extension(path: &Path) {
    if path.extension().is_none_or(|extension| extension != EXPECTED_EXTENSION) {
        log::warn!("Specified file does not have a .{EXPECTED_EXTENSION} extension!");
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.verbosity {
        Verbosity::Silent => (),
        Verbosity::Warnings => LoggerBuilder::new().filter(None, LevelFilter::Warn).init(),
        Verbosity::Debug => LoggerBuilder::new().filter(None, LevelFilter::Debug).init(),
    }

    warn_on_unexpected_extension(&args.path);

    // Try to read the file regardless

    let mut config_file =
        ConfigFile::open(&args.path).with_context(|| format!("Failed to load {}", args.path.display()))?;

    match args.command {
        Command::Get { key } => {
            let FieldPath { section, field } = FieldPath::parse(&key);
            if config_file.document().section(section).is_none() {
                return Err(anyhow!("The given file did not contain the section [{section}]"));
            }
            match config_file.get::<String>(&key) {
                Some(value) => print!("{value}"),
                None => return Err(anyhow!("The section [{section}] did not contain the field {field}")),
            }
        }
        Command::Set { key, value, save } => {
            save.apply(&mut config_file);
            config_file.set(&key, value);
            config_file.save()?;
        }
        Command::Reset { key, save } => {
            save.apply(&mut config_file);
            if config_file.reset(&key).is_none() {
                log::warn!("Field {key} was not set");
            }
            config_file.save()?;
        }
        Command::Sections => {
            for name in config_file.section_names() {
                println!("{name}");
            }
        }
        Command::Fields { section } => {
            let section = section.unwrap_or_default();
            for name in config_file.field_names(&section) {
                println!("{name}");
            }
        }
        Command::Check => {
            log::debug!("{} section(s) parsed", config_file.document().len());
        }
        Command::Fmt { write, save } => {
            save.apply(&mut config_file);
            if write {
                config_file.save()?;
            } else {
                print!("{}", config_file.to_text()?);
            }
        }
    }

    Ok(())
}
