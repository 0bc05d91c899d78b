//! srsparser: fill a section-tree template from a requirements document.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use srsparser::config::Config;
use srsparser::engine::Reconciler;
use srsparser::section::SectionNode;
use srsparser::store::{JsonStore, Store};
use srsparser::{formats, outline, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "srsparser")]
#[command(
    about = "Reconcile a requirements document against a section tree template",
    long_about = None
)]
struct Args {
    /// Document to parse (.docx, .md or .json)
    #[arg(value_name = "DOC_PATH")]
    doc_path: PathBuf,

    /// Directory of the JSON store (overrides the configured one)
    #[arg(long, value_name = "DIR")]
    store: Option<PathBuf>,

    /// Name of the template in the store
    #[arg(long, short = 't', value_name = "TEMPLATE")]
    template: Option<String>,

    /// Read the template from a JSON file instead of the store
    #[arg(long, value_name = "FILE", conflicts_with = "template")]
    template_file: Option<PathBuf>,

    /// Document format, overriding detection by extension
    #[arg(long, value_name = "FORMAT")]
    format: Option<String>,

    /// Configuration file (defaults to srsparser.toml if present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Save the result in the store under the document name
    #[arg(long)]
    save: bool,

    /// Print a tree outline instead of JSON
    #[arg(long)]
    outline: bool,

    /// Print the text of a section (the whole document if no name is given)
    #[arg(long, value_name = "SECTION", num_args = 0..=1, default_missing_value = "")]
    content: Option<String>,
}

fn load_template(args: &Args, cfg: &Config, store: &JsonStore) -> Result<SectionNode> {
    if let Some(path) = &args.template_file {
        let contents = fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&contents)?);
    }
    let name = args.template.as_deref().unwrap_or(&cfg.default_template);
    store.load_template(name)
}

fn document_name(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().to_string())
}

fn run(args: &Args) -> Result<()> {
    let cfg = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load(),
    };
    let store = JsonStore::new(
        args.store
            .clone()
            .unwrap_or_else(|| PathBuf::from(&cfg.store_dir)),
    );
    let settings = cfg.settings()?;
    let scorer = cfg.scorer()?;

    let template = load_template(args, &cfg, &store)?;
    let body = formats::read_document(&args.doc_path, args.format.as_deref())?;

    let mut reconciler = Reconciler::new(&template, &scorer, &settings)?;
    let result = reconciler.run(&body);

    if args.save {
        let name = document_name(&args.doc_path);
        store.save_result(&name, &result)?;
        log::info!("Saved result as '{name}' in {}", store.dir().display());
    }

    if let Some(section) = &args.content {
        let scope = Some(section.as_str()).filter(|s| !s.is_empty());
        println!("{}", reconciler.tree().get_content(scope));
    } else if args.outline {
        print!("{}", outline::render_outline(&result));
    } else {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
