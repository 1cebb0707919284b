//! Minimal CLI: load raw models → constrain → JSON
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use ident_constrain::constrained::ConstrainedModel;
use ident_constrain::model::{load_models_from_file, ObjectModel, RawModel};
use ident_constrain::{ConstrainerSet, NamingConvention};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// constrain object/enum model names into valid, collision-free identifiers for code emission
#[derive(Parser, Debug)]
#[command(name = "ident-constrain", version)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// constrain every model in the inputs and print them as JSON
    Constrain(ConstrainOut),
    /// constrain a list of names as the properties of a single object
    Names(NamesOut),
}

#[derive(Args, Debug, Clone)]
struct NamingSettings {
    /// naming convention for object property keys
    #[arg(long, value_enum, default_value_t = NamingConvention::Pascal)]
    naming: NamingConvention,

    /// naming convention for enum keys
    #[arg(long, value_enum, default_value_t = NamingConvention::Pascal)]
    enum_naming: NamingConvention,

    /// naming convention for model (type) names
    #[arg(long, value_enum, default_value_t = NamingConvention::Pascal)]
    model_naming: NamingConvention,
}

#[derive(clap::Parser, Debug)]
struct ConstrainOut {
    #[command(flatten)]
    naming: NamingSettings,

    /// One or more JSON files, each holding a model or an array of models.
    /// May be literal paths or quoted glob patterns.
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// list every renamed model and key on stderr
    #[arg(long)]
    report: bool,
}

#[derive(clap::Parser, Debug)]
struct NamesOut {
    #[command(flatten)]
    naming: NamingSettings,

    /// raw names, constrained in the given order
    #[arg(required = true)]
    names: Vec<String>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl NamingSettings {
    fn constrainers(&self) -> ConstrainerSet {
        ConstrainerSet::default()
            .with_property_naming(self.naming)
            .with_enum_naming(self.enum_naming)
            .with_model_naming(self.model_naming)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Constrain(target) => {
                // 1) load
                let mut models = Vec::<RawModel>::new();
                for source_path in resolve_file_path_patterns(&target.input)? {
                    let loaded = load_models_from_file(&source_path)?;
                    models.extend(loaded);
                }

                // 2) constrain
                let constrainers = target.naming.constrainers();
                let constrained = ident_constrain::lower_all(&models, &constrainers);
                if target.report {
                    print_report(&constrained);
                }

                // 3) write
                let json_src = serde_json::to_string_pretty(&constrained)?;
                write_output(target.out.as_ref(), &json_src)
            }
            Command::Names(target) => {
                let raw = ObjectModel::new("names").with_keys(target.names.iter().cloned());
                let constrainers = target.naming.constrainers();
                let constrained = ident_constrain::lower_object(&raw, &constrainers);
                for property in constrained.properties.values() {
                    println!("{:?} -> {}", property.original_name, property.property_name);
                }
                Ok(())
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn print_report(models: &[ConstrainedModel]) {
    for model in models {
        let renames = model.renames();
        if renames.is_empty() {
            continue;
        }
        eprintln!("{}", model.name().bold());
        for rename in renames {
            eprintln!("  {:?} {} {}", rename.original, "→".dimmed(), rename.constrained.yellow());
        }
    }
}

fn write_output(out: Option<&PathBuf>, src: &str) -> Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, src).with_context(|| format!("failed to write {}", out.display()))
        }
        None => {
            println!("{src}");
            Ok(())
        }
    }
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{' ))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern).with_context(|| format!("invalid glob pattern: {pattern}"))? {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                anyhow::bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
