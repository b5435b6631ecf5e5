// crates/include_snippet/src/main.rs

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use std::env;
use std::fs;
use std::path::PathBuf;

use include_snippet::{render_page, DefaultSnippetLoader, IncludeSnippetTag, SiteConfig, SnippetLoader};

fn cli() -> Command {
    Command::new("include_snippet")
        .version("0.1.0")
        .about("Extracts labeled snippets from code files and expands include_snippet tags")
        .subcommand_required(true)
        .arg(
            Arg::new("source")
                .long("source")
                .global(true)
                .num_args(1)
                .help("Site source directory (defaults to the current directory)"),
        )
        .arg(
            Arg::new("code_dir")
                .long("code-dir")
                .global(true)
                .num_args(1)
                .help("Code directory relative to the source (INCLUDE_SNIPPET_CODE_DIR, else downloads/code)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .global(true)
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("extract")
                .about("Print one snippet: <LABEL>... <FILE>")
                .arg(
                    Arg::new("markup")
                        .num_args(2..)
                        .required(true)
                        .help("Snippet label words followed by the file path"),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Print a page with every include_snippet tag expanded")
                .arg(Arg::new("page").required(true).help("Page to render")),
        )
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

/// Composes the site configuration from flags and the environment.
fn site_config(matches: &ArgMatches) -> Result<SiteConfig> {
    let source = match matches.get_one::<String>("source") {
        Some(dir) => PathBuf::from(dir),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let config = match matches.get_one::<String>("code_dir") {
        Some(dir) => SiteConfig::new(source, Some(dir)),
        None => SiteConfig::from_env(source),
    };
    log::debug!("site config: {:?}", config);
    Ok(config)
}

fn run_extract(loader: &dyn SnippetLoader, sub: &ArgMatches) -> Result<()> {
    let markup = sub
        .get_many::<String>("markup")
        .unwrap_or_default()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    let tag = IncludeSnippetTag::parse(&markup)?;
    let snippet = loader
        .load(tag.request())
        .with_context(|| format!("Failed to include snippet '{}'", tag.label()))?;
    print!("{}", snippet);
    Ok(())
}

fn run_render(loader: &dyn SnippetLoader, sub: &ArgMatches) -> Result<()> {
    let page_path = sub
        .get_one::<String>("page")
        .context("Missing page argument")?;
    let page = fs::read_to_string(page_path)
        .with_context(|| format!("Error reading page {}", page_path))?;
    print!("{}", render_page(&page, loader));
    Ok(())
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let config = site_config(&matches)?;
    let loader = DefaultSnippetLoader::new(&config);
    log::debug!("code root: {}", loader.code_root().display());

    match matches.subcommand() {
        Some(("extract", sub)) => run_extract(&loader, sub),
        Some(("render", sub)) => run_render(&loader, sub),
        _ => unreachable!("subcommand is required"),
    }
}
