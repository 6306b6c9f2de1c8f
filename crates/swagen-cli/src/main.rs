mod config;
mod fetch;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use config::{CONFIG_FILE_NAME, SwagenConfig};
use swagen_axios::{AxiosRenderer, module_file_name};
use swagen_core::normalize;
use swagen_core::view::Document;

#[derive(Parser)]
#[command(name = "swagen", about = "Swagger/OpenAPI axios client generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate API modules from schema documents
    Generate {
        /// Schema URL or file; when omitted, all config entries are processed
        #[arg(short, long)]
        input: Option<String>,

        /// Output file for single-schema mode; printed to stdout unless it
        /// ends in `.js`
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Emit the schema-independent base module
    Base {
        /// Output file; printed to stdout unless it ends in `.js`
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Normalize a schema and print the canonical document
    Inspect {
        /// Schema URL or file
        #[arg(short, long)]
        input: String,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Check that a schema normalizes cleanly
    Validate {
        /// Schema URL or file
        #[arg(short, long)]
        input: String,
    },

    /// Initialize a new swagen configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { input, output } => cmd_generate(input, output),

        Commands::Base { output } => cmd_base(output),

        Commands::Inspect { input, format } => cmd_inspect(&input, format),

        Commands::Validate { input } => cmd_validate(&input),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "swagen", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn try_load_config() -> Result<Option<SwagenConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

/// Fetch and normalize one schema document.
fn load_document(source: &str) -> Result<Document> {
    let value = fetch::fetch_document(source)?;
    let document = normalize::normalize(&value)
        .with_context(|| format!("failed to normalize {source}"))?;
    Ok(document)
}

/// Persist generated text when the target ends in `.js`; print it
/// otherwise.
fn emit(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) if path.extension().and_then(|e| e.to_str()) == Some("js") => {
            write_output(path, content)
        }
        Some(path) => {
            log::warn!(
                "{} does not end in .js; printing to stdout instead",
                path.display()
            );
            print!("{content}");
            Ok(())
        }
        None => {
            print!("{content}");
            Ok(())
        }
    }
}

/// Write generated text, creating parent directories and overwriting any
/// existing file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    eprintln!("  wrote {}", path.display());
    Ok(())
}

fn cmd_generate(input: Option<String>, output: Option<PathBuf>) -> Result<()> {
    if let Some(source) = input {
        let document = load_document(&source)?;
        let module = AxiosRenderer::render_document(&document)?;
        return emit(output.as_deref(), &module);
    }

    let Some(cfg) = try_load_config()? else {
        anyhow::bail!("no --input given and no {CONFIG_FILE_NAME} found");
    };

    let output_dir = PathBuf::from(&cfg.output_dir);
    let base = AxiosRenderer::render_base()?;
    write_output(&output_dir.join("base.js"), &base)?;

    // Failures are isolated per entry: a broken schema is logged and
    // skipped, the rest still generate.
    let mut failures = 0usize;
    for entry in cfg.schemas.iter().filter(|e| !e.ignore) {
        let target = output_dir.join(module_file_name(&entry.name));
        let result = load_document(&entry.source)
            .and_then(|document| Ok(AxiosRenderer::render_document(&document)?))
            .and_then(|module| write_output(&target, &module));
        if let Err(err) = result {
            log::error!("skipping {}: {err:#}", entry.name);
            failures += 1;
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} schema(s) failed to generate");
    }
    Ok(())
}

fn cmd_base(output: Option<PathBuf>) -> Result<()> {
    let base = AxiosRenderer::render_base()?;
    emit(output.as_deref(), &base)
}

fn cmd_inspect(input: &str, format: InspectFormat) -> Result<()> {
    let document = load_document(input)?;
    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&document)?;
            print!("{yaml}");
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&document)?;
            println!("{json}");
        }
    }
    Ok(())
}

fn cmd_validate(input: &str) -> Result<()> {
    let document = load_document(input)?;
    eprintln!("Schema normalized cleanly.");
    eprintln!("  Base URL: {}", document.domain_base_url);
    eprintln!("  Operations: {}", document.operations.len());
    eprintln!("  Definitions: {}", document.definitions.len());
    eprintln!("  Enumerations: {}", document.enumerations.len());
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_output_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested/api/pets.js");
        write_output(&target, "export {}\n").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "export {}\n");

        // Overwrites in place.
        write_output(&target, "// regenerated\n").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "// regenerated\n");
    }
}
