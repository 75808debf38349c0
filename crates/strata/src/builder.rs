//! Composition of the walker, cache, scanner, and graph into a build.

use std::env;
use std::path::PathBuf;

use log::{debug, info};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::cache::Cache;
use crate::errors::StrataResult;
use crate::filesystem::read_source;
use crate::graph::ImportGraph;
use crate::import_scanning::{DirectImport, ImportScanner, determine_module_filename};
use crate::module_finding::{FoundPackage, ModuleFile, find_package};

/// Calling code can set this environment variable if it wants to tune when to
/// switch to parallel scanning, or set it very high to disable it altogether.
pub const MIN_PARALLEL_MODULES_ENV: &str = "STRATA_MIN_PARALLEL_MODULES";
const DEFAULT_MIN_PARALLEL_MODULES: usize = 50;

#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Record imports of modules outside the analysed packages, as squashed
    /// modules.
    pub include_external_packages: bool,
    /// Drop imports guarded by `if TYPE_CHECKING:`.
    pub exclude_type_checking_imports: bool,
    /// Where to keep the cache; `None` means the default directory.
    pub cache_dir: Option<PathBuf>,
    /// Disable the cache entirely when false.
    pub use_cache: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            include_external_packages: false,
            exclude_type_checking_imports: false,
            cache_dir: None,
            use_cache: true,
        }
    }
}

/// Build an import graph for the supplied root package names.
pub fn build_graph(
    package_names: &[String],
    search_paths: &[PathBuf],
    options: &BuildOptions,
) -> StrataResult<ImportGraph> {
    let found_packages: Vec<FoundPackage> = package_names
        .iter()
        .map(|name| find_package(name, search_paths))
        .collect::<StrataResult<_>>()?;

    let cache = options.use_cache.then(|| {
        Cache::setup(
            options.cache_dir.as_deref(),
            &found_packages,
            options.include_external_packages,
            options.exclude_type_checking_imports,
        )
    });

    // Split the module files into cache hits and modules needing a scan.
    let mut imports_by_module: FxHashMap<String, FxHashSet<DirectImport>> = FxHashMap::default();
    let mut misses: Vec<(&ModuleFile, &FoundPackage)> = vec![];
    for found_package in &found_packages {
        for module_file in &found_package.module_files {
            match cache.as_ref().map(|cache| cache.read_imports(module_file)) {
                Some(Ok(imports)) => {
                    imports_by_module.insert(module_file.name.clone(), imports);
                }
                _ => misses.push((module_file, found_package)),
            }
        }
    }
    debug!(
        "{} modules cached, {} to scan",
        imports_by_module.len(),
        misses.len()
    );

    let scanner = ImportScanner::new(&found_packages, options.include_external_packages);
    let scan_one = |&(module_file, found_package): &(&ModuleFile, &FoundPackage)|
     -> StrataResult<(String, FxHashSet<DirectImport>)> {
        let filename = determine_module_filename(&module_file.name, found_package)?;
        let source = read_source(&filename)?;
        let module_is_package = filename
            .file_name()
            .is_some_and(|name| name == "__init__.py");
        let imports = scanner.scan_for_imports(
            &module_file.name,
            &source,
            module_is_package,
            &filename.display().to_string(),
            options.exclude_type_checking_imports,
        )?;
        Ok((module_file.name.clone(), imports))
    };

    // Scanning is the only parallel region; any scan error aborts the build.
    let scanned: Vec<(String, FxHashSet<DirectImport>)> = if misses.len()
        >= min_parallel_modules()
    {
        misses
            .par_iter()
            .map(scan_one)
            .collect::<StrataResult<_>>()?
    } else {
        misses.iter().map(scan_one).collect::<StrataResult<_>>()?
    };
    imports_by_module.extend(scanned);

    let graph = assemble_graph(&found_packages, &imports_by_module)?;
    info!(
        "Built graph of {} modules and {} imports.",
        graph.modules().len(),
        graph.count_imports()
    );

    if let Some(cache) = cache {
        cache.write(&imports_by_module)?;
    }
    Ok(graph)
}

fn assemble_graph(
    found_packages: &[FoundPackage],
    imports_by_module: &FxHashMap<String, FxHashSet<DirectImport>>,
) -> StrataResult<ImportGraph> {
    let internal_modules: FxHashSet<&str> = found_packages
        .iter()
        .flat_map(|package| package.module_names())
        .collect();

    let mut graph = ImportGraph::new();
    for module in &internal_modules {
        graph.add_module(module)?;
    }
    for imports in imports_by_module.values() {
        for import in imports {
            // Anything not in our packages is external and gets squashed: we
            // don't track structure inside packages we're not analysing.
            if !internal_modules.contains(import.imported.as_str()) {
                graph.add_squashed_module(&import.imported)?;
            }
            graph.add_import(
                &import.importer,
                &import.imported,
                import.line_number,
                import.line_contents.as_deref(),
            )?;
        }
    }
    Ok(graph)
}

fn min_parallel_modules() -> usize {
    env::var(MIN_PARALLEL_MODULES_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_MIN_PARALLEL_MODULES)
}
