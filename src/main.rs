//! apidox CLI entrypoint
//! Parses command-line arguments and dispatches to the documentation engine.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

// External imports (alphabetized)
use anyhow::{Context, bail};
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use apidox::config::DocsConfig;
use apidox::docs::{Collection, Endpoint, ParameterLocation};
use apidox::generation::GeneratorRegistry;
use apidox::invoker::{TestInput, TestInvoker};
use apidox::postman;

#[derive(Parser)]
#[command(name = "apidox")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate request snippets for an endpoint's requested generators
    Snippets {
        /// Path to a collection JSON file
        #[arg(long)]
        collection: PathBuf,
        /// Endpoint title or zero-based index (defaults to all endpoints)
        #[arg(long)]
        endpoint: Option<String>,
        /// Restrict output to one generator identifier
        #[arg(long)]
        generator: Option<String>,
        /// Generator config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Export a collection as a Postman Collection v2.1 document
    Export {
        /// Path to a collection JSON file
        #[arg(long)]
        collection: PathBuf,
        /// Output file (defaults to <Title_with_underscores>_collection.json)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Import a Postman Collection v2.1 document
    Import {
        /// Path to a Postman collection JSON file
        #[arg(long)]
        input: PathBuf,
        /// Where to write the imported collection
        #[arg(long)]
        output: PathBuf,
        /// Generator config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Send a live test request for one endpoint
    Invoke {
        /// Path to a collection JSON file
        #[arg(long)]
        collection: PathBuf,
        /// Endpoint title or zero-based index
        #[arg(long)]
        endpoint: String,
        /// Bearer token for endpoints requiring auth
        #[arg(long)]
        token: Option<String>,
        /// Parameter value as location.name=value (repeatable)
        #[arg(long = "set")]
        set: Vec<String>,
        /// Request timeout in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,
    },
    /// List available generator identifiers
    Generators {
        /// Generator config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Snippets {
            collection,
            endpoint,
            generator,
            config,
        } => run_snippets(collection, endpoint.as_deref(), generator.as_deref(), config.as_deref()),
        Commands::Export { collection, output } => run_export(collection, output.as_deref()),
        Commands::Import {
            input,
            output,
            config,
        } => run_import(input, output, config.as_deref()),
        Commands::Invoke {
            collection,
            endpoint,
            token,
            set,
            timeout,
        } => run_invoke(collection, endpoint, token.as_deref(), set, *timeout).await,
        Commands::Generators { config } => run_generators(config.as_deref()),
    }
}

fn load_collection(path: &Path) -> anyhow::Result<Collection> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read collection file {}", path.display()))?;
    Collection::from_json(&json)
        .with_context(|| format!("failed to parse collection file {}", path.display()))
}

fn find_endpoint<'a>(collection: &'a Collection, selector: &str) -> anyhow::Result<&'a Endpoint> {
    if let Some(endpoint) = collection.endpoints.iter().find(|e| e.title == selector) {
        return Ok(endpoint);
    }
    if let Ok(index) = selector.parse::<usize>()
        && let Some(endpoint) = collection.endpoints.get(index)
    {
        return Ok(endpoint);
    }
    bail!("no endpoint matches {selector:?}");
}

fn run_snippets(
    collection_path: &Path,
    endpoint: Option<&str>,
    generator: Option<&str>,
    config_path: Option<&Path>,
) -> anyhow::Result<()> {
    let collection = load_collection(collection_path)?;
    let config = DocsConfig::load_or_default(config_path)?;
    let registry = GeneratorRegistry::from_config(&config);

    let selected: Vec<&Endpoint> = match endpoint {
        Some(selector) => vec![find_endpoint(&collection, selector)?],
        None => collection.endpoints.iter().collect(),
    };

    for endpoint in selected {
        println!("## {} {} {}", endpoint.method, endpoint.endpoint_template, endpoint.title);
        for (identifier, generated) in registry.generate_requested(endpoint) {
            if generator.is_some_and(|g| g != identifier) {
                continue;
            }
            println!("\n### {identifier} ({})\n", generated.style.display_name());
            println!("{}", generated.code);
        }
        if generator.is_none() {
            for snippet in &endpoint.custom_code_snippets {
                println!(
                    "\n### {} ({})\n",
                    snippet.label,
                    snippet.highlight_style.display_name()
                );
                println!("{}", snippet.body);
            }
        }
    }
    Ok(())
}

fn run_export(collection_path: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let collection = load_collection(collection_path)?;
    let json = postman::to_postman_json(&collection).context("failed to export collection")?;

    let output = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(postman::export_file_name(&collection.title)),
    };
    std::fs::write(&output, json)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(path = %output.display(), "exported Postman collection");
    Ok(())
}

fn run_import(input: &Path, output: &Path, config_path: Option<&Path>) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let config = DocsConfig::load_or_default(config_path)?;

    let collection = postman::from_postman_collection(&json, &config)
        .context("failed to import Postman collection")?;
    std::fs::write(output, collection.to_json()?)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(
        title = %collection.title,
        endpoints = collection.endpoints.len(),
        "imported Postman collection"
    );
    Ok(())
}

async fn run_invoke(
    collection_path: &Path,
    endpoint: &str,
    token: Option<&str>,
    set: &[String],
    timeout: u64,
) -> anyhow::Result<()> {
    let collection = load_collection(collection_path)?;
    let endpoint = find_endpoint(&collection, endpoint)?;

    let mut input = TestInput::new();
    input.token = token.map(str::to_string);
    for entry in set {
        let (key, value) = entry
            .split_once('=')
            .with_context(|| format!("--set {entry:?} is not location.name=value"))?;
        let (location, name) = key
            .split_once('.')
            .with_context(|| format!("--set {entry:?} is not location.name=value"))?;
        input.set(ParameterLocation::from_str(location)?, name, value);
    }

    let invoker = TestInvoker::new(Duration::from_secs(timeout))?;
    let report = invoker.invoke(endpoint, &input).await;

    if let Some(error) = &report.error {
        println!("request failed: {error}");
        return Ok(());
    }
    if let Some(display) = &report.display {
        println!("{}", display.label);
    }
    for (name, value) in &report.headers {
        println!("{name}: {value}");
    }
    if !report.body.is_empty() {
        println!("\n{}", report.body);
    }
    Ok(())
}

fn run_generators(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = DocsConfig::load_or_default(config_path)?;
    let registry = GeneratorRegistry::from_config(&config);
    for identifier in registry.identifiers() {
        println!("{identifier}");
    }
    Ok(())
}
