use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use apitree_core::config::{self, ApitreeConfig, CONFIG_FILE_NAME};
use apitree_core::output::write_json;
use apitree_core::parse::{self, ApiDocument, SpecFormat};
use apitree_core::{AnalysisOptions, analyze, report, tree};

#[derive(Parser)]
#[command(
    name = "apitree",
    about = "Endpoint trees, tag groups and naming statistics for OpenAPI specs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the endpoint tree and reports, and write the JSON outputs
    Analyze {
        /// Path to the OpenAPI/Swagger file (.yaml/.yml, otherwise JSON)
        input: PathBuf,

        /// Config file to use instead of .apitree.yaml
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory for the JSON outputs
        #[arg(short, long)]
        out_dir: Option<String>,

        /// Longest underscore prefix counted in the statistics
        #[arg(long)]
        max_depth: Option<usize>,

        /// Prefixes printed per tag and depth
        #[arg(long)]
        top: Option<usize>,

        /// Print reports only, write no files
        #[arg(long)]
        no_write: bool,
    },

    /// Print the endpoint tree only
    Tree {
        /// Path to the OpenAPI/Swagger file
        input: PathBuf,
    },

    /// Initialize a new apitree configuration
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            config,
            out_dir,
            max_depth,
            top,
            no_write,
        } => {
            let mut cfg = load_config(config.as_deref())?.unwrap_or_default();
            if let Some(dir) = out_dir {
                cfg.output.dir = dir;
            }
            if let Some(depth) = max_depth {
                cfg.prefix_stats.max_depth = depth;
            }
            if let Some(top) = top {
                cfg.prefix_stats.top = top;
            }
            cmd_analyze(&input, &cfg, !no_write)
        }

        Commands::Tree { input } => cmd_tree(&input),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "apitree", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Load the given config file, or `.apitree.yaml` from the current directory.
/// An explicitly named file must exist.
fn load_config(path: Option<&Path>) -> Result<Option<ApitreeConfig>> {
    match path {
        Some(path) => {
            let cfg = config::load_config(path)?
                .with_context(|| format!("config file {} not found", path.display()))?;
            Ok(Some(cfg))
        }
        None => Ok(config::load_config(Path::new(CONFIG_FILE_NAME))?),
    }
}

fn load_spec(path: &Path) -> Result<ApiDocument> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let format = SpecFormat::from_path(path);
    let doc = parse::from_str(&content, format)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    log::debug!("loaded {} as {:?}", path.display(), format);
    Ok(doc)
}

fn cmd_analyze(input: &Path, cfg: &ApitreeConfig, write: bool) -> Result<()> {
    let doc = load_spec(input)?;
    let options = AnalysisOptions {
        max_depth: cfg.prefix_stats.max_depth,
    };
    let analysis = analyze(&doc, &options);

    if cfg.report.tree {
        println!("\nAPI Endpoint Tree:");
        print!("{}", analysis.tree.render());
    }

    if write {
        let outputs = &cfg.output;
        let tree_path = outputs.tree_path();
        write_json(&tree_path, &analysis.tree.to_export_tree())?;
        eprintln!("Tree JSON saved to {}", tree_path.display());

        let grouped_path = outputs.grouped_tree_path();
        if grouped_path == tree_path {
            log::warn!(
                "grouped tree overwrites {}; set output.grouped_tree to keep both",
                tree_path.display()
            );
        }
        write_json(&grouped_path, &analysis.grouped)?;
        eprintln!("Grouped tree saved to {}", grouped_path.display());

        let stats_path = outputs.prefix_stats_path();
        write_json(&stats_path, &analysis.prefix_stats)?;
        eprintln!("Prefix statistics saved to {}", stats_path.display());
    }

    if cfg.report.prefix_stats {
        println!("\nTop endpoint name prefixes by tag:");
        print!(
            "{}",
            report::format_prefix_report(&analysis.prefix_stats, cfg.prefix_stats.top)
        );
    }

    if cfg.report.duplicates {
        println!();
        print!("{}", report::format_duplicate_report(&analysis.duplicates));
    }

    Ok(())
}

fn cmd_tree(input: &Path) -> Result<()> {
    let doc = load_spec(input)?;
    println!("\nAPI Endpoint Tree:");
    print!("{}", tree::build_path_tree(&doc).render());
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

    fs::write(&config_path, config::default_config_content())
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
