use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use std::path::PathBuf;

use strata::builder::{BuildOptions, build_graph};
use strata::config::Config;
use strata::graph::PackageDependency;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root packages to analyse, as importable names (e.g. `mypackage`)
    #[arg(required = true)]
    packages: Vec<String>,

    /// Additional directories to resolve package names against
    #[arg(short, long)]
    search_path: Vec<PathBuf>,

    /// Include imports of external packages in the graph
    #[arg(long)]
    external: bool,

    /// Exclude imports guarded by `if TYPE_CHECKING:`
    #[arg(long)]
    no_type_checking: bool,

    /// Cache directory (defaults to .strata_cache)
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Disable the import cache
    #[arg(long)]
    no_cache: bool,

    /// Increase verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let log_level = match cli.verbose {
        0 => "warn",  // Default: warnings and errors only
        1 => "info",  // -v: informational messages
        2 => "debug", // -vv: debug messages
        _ => "trace", // -vvv or more: trace messages
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Load configuration, then fold in CLI overrides.
    let mut config = Config::load(cli.config.as_deref())?;
    config.search_paths.splice(0..0, cli.search_path);
    if cli.external {
        config.include_external_packages = true;
    }
    if cli.no_type_checking {
        config.exclude_type_checking_imports = true;
    }
    if cli.no_cache {
        config.cache = false;
    }
    if let Some(cache_dir) = cli.cache_dir {
        config.cache_dir = Some(cache_dir);
    }
    debug!("Configuration: {config:?}");

    info!("Building import graph for {}", cli.packages.join(", "));
    let options = BuildOptions {
        include_external_packages: config.include_external_packages,
        exclude_type_checking_imports: config.exclude_type_checking_imports,
        cache_dir: config.cache_dir.clone(),
        use_cache: config.cache,
    };
    let graph = build_graph(&cli.packages, &config.search_paths, &options)?;

    println!(
        "{}: {} modules, {} imports.",
        cli.packages.join(", "),
        graph.modules().len(),
        graph.count_imports()
    );

    if config.layers.is_empty() {
        return Ok(());
    }

    // Check the configured layered architecture.
    let layers: Vec<_> = config.layers.iter().map(|layer| layer.to_layer()).collect();
    let dependencies = graph.find_illegal_dependencies_for_layers(&layers, &config.containers)?;
    if dependencies.is_empty() {
        println!("Layers OK.");
        return Ok(());
    }

    for dependency in &dependencies {
        print_dependency(dependency);
    }
    std::process::exit(1);
}

fn print_dependency(dependency: &PackageDependency) {
    println!(
        "Illegal dependency: {} -> {}",
        dependency.importer, dependency.imported
    );
    for route in &dependency.routes {
        let heads = route.heads.iter().cloned().collect::<Vec<_>>().join(", ");
        let tails = route.tails.iter().cloned().collect::<Vec<_>>().join(", ");
        if route.middle.is_empty() {
            println!("  {heads} -> {tails}");
        } else {
            println!("  {heads} -> {} -> {tails}", route.middle.join(" -> "));
        }
    }
}
