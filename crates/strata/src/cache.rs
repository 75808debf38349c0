//! On-disk cache of per-module import lists, keyed on file mtimes.
//!
//! Two kinds of file live in the cache directory:
//!
//! - `{package}.meta.json` per found package, mapping module names to the
//!   mtime their imports were scanned at;
//! - `{hash}.data.json` per *analysis identity* (the sorted root package
//!   names plus the scan flags), mapping module names to their imports.
//!
//! The cache never validates its payload beyond shape: a stale entry is the
//! mtime's problem. Corrupt or partial files are logged and treated as
//! absent.

use std::fs;
use std::path::{Path, PathBuf};

use blake2::Blake2bVar;
use blake2::digest::{Update, VariableOutput};
use log::{info, warn};
use rustc_hash::{FxHashMap, FxHashSet};
use serde_json::Value;

use crate::errors::StrataResult;
use crate::import_scanning::DirectImport;
use crate::module_finding::{FoundPackage, ModuleFile};

pub const DEFAULT_CACHE_DIR: &str = ".strata_cache";

const GITIGNORE_CONTENTS: &str = "# Automatically created\n*";
const CACHEDIR_TAG_CONTENTS: &str = "Signature: 8a477f597d28d172789f06886806bc55\n\
    # This file is a cache directory tag automatically created by Strata.\n\
    # For information about cache directory tags see https://bford.info/cachedir/";

/// Internal-only signal: the caller should fall back to scanning the module.
#[derive(Debug)]
pub(crate) struct CacheMiss;

pub struct Cache {
    cache_dir: PathBuf,
    found_packages: Vec<FoundPackage>,
    include_external_packages: bool,
    exclude_type_checking_imports: bool,
    mtime_map: FxHashMap<String, f64>,
    data_map: FxHashMap<String, FxHashSet<DirectImport>>,
}

impl Cache {
    /// Load whatever usable cache state exists on disk for this analysis.
    pub fn setup(
        cache_dir: Option<&Path>,
        found_packages: &[FoundPackage],
        include_external_packages: bool,
        exclude_type_checking_imports: bool,
    ) -> Self {
        let mut cache = Self {
            cache_dir: cache_dir
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR)),
            found_packages: found_packages.to_vec(),
            include_external_packages,
            exclude_type_checking_imports,
            mtime_map: FxHashMap::default(),
            data_map: FxHashMap::default(),
        };
        cache.mtime_map = cache.read_mtime_maps();
        cache.data_map = cache.read_data_map();
        cache
    }

    /// The imports for a module file, provided it was cached at the same
    /// mtime.
    pub(crate) fn read_imports(
        &self,
        module_file: &ModuleFile,
    ) -> Result<FxHashSet<DirectImport>, CacheMiss> {
        let cached_mtime = self.mtime_map.get(&module_file.name).ok_or(CacheMiss)?;
        if *cached_mtime != module_file.mtime {
            return Err(CacheMiss);
        }
        // While we would expect the module to be in here, there's no point in
        // crashing if, for some reason, it's not.
        self.data_map.get(&module_file.name).cloned().ok_or(CacheMiss)
    }

    /// Persist the imports of every module of every found package, together
    /// with fresh meta files.
    pub fn write(
        &self,
        imports_by_module: &FxHashMap<String, FxHashSet<DirectImport>>,
    ) -> StrataResult<()> {
        fs::create_dir_all(&self.cache_dir)?;
        self.write_marker_files_if_not_already_there()?;

        // Data file for the current analysis identity.
        let mut primitives: serde_json::Map<String, Value> = serde_json::Map::new();
        for found_package in &self.found_packages {
            for module_file in &found_package.module_files {
                let imports = imports_by_module
                    .get(&module_file.name)
                    .map(|imports| {
                        imports
                            .iter()
                            .map(|import| {
                                Value::Array(vec![
                                    Value::from(import.imported.clone()),
                                    import.line_number.map(Value::from).unwrap_or(Value::Null),
                                    import
                                        .line_contents
                                        .clone()
                                        .map(Value::from)
                                        .unwrap_or(Value::Null),
                                ])
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                primitives.insert(module_file.name.clone(), Value::Array(imports));
            }
        }
        let data_filename = self.cache_dir.join(self.data_file_name());
        fs::write(&data_filename, serde_json::to_string(&primitives)?.as_bytes())?;
        info!("Wrote data cache file {}.", data_filename.display());

        // One meta file per found package.
        for found_package in &self.found_packages {
            let mtimes: serde_json::Map<String, Value> = found_package
                .module_files
                .iter()
                .map(|module_file| (module_file.name.clone(), Value::from(module_file.mtime)))
                .collect();
            let meta_filename = self.cache_dir.join(meta_file_name(&found_package.name));
            fs::write(&meta_filename, serde_json::to_string(&mtimes)?.as_bytes())?;
            info!("Wrote meta cache file {}.", meta_filename.display());
        }
        Ok(())
    }

    /// The string that uniquely identifies the analysis parameters.
    pub fn analysis_identity(&self) -> String {
        let mut package_names: Vec<&str> = self
            .found_packages
            .iter()
            .map(|package| package.name.as_str())
            .collect();
        package_names.sort_unstable();
        let mut identity = package_names.join(",");
        if self.include_external_packages {
            identity.push_str(":external");
        }
        if self.exclude_type_checking_imports {
            identity.push_str(":no_type_checking");
        }
        identity
    }

    /// Hash the analysis identity so the filename stays bounded however many
    /// root packages are analysed.
    fn data_file_name(&self) -> String {
        let mut hasher = Blake2bVar::new(20).expect("20 is a valid blake2b output size");
        hasher.update(self.analysis_identity().as_bytes());
        let mut digest = [0u8; 20];
        hasher
            .finalize_variable(&mut digest)
            .expect("output size fixed at construction");
        let hex: String = digest.iter().map(|byte| format!("{byte:02x}")).collect();
        format!("{hex}.data.json")
    }

    fn read_mtime_maps(&self) -> FxHashMap<String, f64> {
        let mut all_mtimes = FxHashMap::default();
        for found_package in &self.found_packages {
            let filename = self.cache_dir.join(meta_file_name(&found_package.name));
            let Some(value) = read_json_file(&filename) else {
                continue;
            };
            let Value::Object(map) = value else {
                warn!("Ignoring non-object cache file {}.", filename.display());
                continue;
            };
            for (module, mtime) in map {
                if let Some(mtime) = mtime.as_f64() {
                    all_mtimes.insert(module, mtime);
                }
            }
        }
        all_mtimes
    }

    fn read_data_map(&self) -> FxHashMap<String, FxHashSet<DirectImport>> {
        let filename = self.cache_dir.join(self.data_file_name());
        let Some(value) = read_json_file(&filename) else {
            return FxHashMap::default();
        };
        let Value::Object(map) = value else {
            warn!("Ignoring non-object cache file {}.", filename.display());
            return FxHashMap::default();
        };

        let mut data_map = FxHashMap::default();
        for (module, imports_value) in map {
            let Value::Array(entries) = imports_value else {
                continue;
            };
            let mut imports = FxHashSet::default();
            for entry in entries {
                match parse_cached_import(&module, &entry) {
                    Some(import) => {
                        imports.insert(import);
                    }
                    None => {
                        warn!(
                            "Ignoring malformed cache entry for {module}: {entry}",
                        );
                    }
                }
            }
            data_map.insert(module, imports);
        }
        data_map
    }

    fn write_marker_files_if_not_already_there(&self) -> StrataResult<()> {
        let marker_files = [
            (".gitignore", GITIGNORE_CONTENTS),
            ("CACHEDIR.TAG", CACHEDIR_TAG_CONTENTS),
        ];
        for (filename, contents) in marker_files {
            let full_filename = self.cache_dir.join(filename);
            if !full_filename.exists() {
                fs::write(full_filename, contents)?;
            }
        }
        Ok(())
    }
}

fn meta_file_name(package_name: &str) -> String {
    format!("{package_name}.meta.json")
}

fn read_json_file(filename: &Path) -> Option<Value> {
    let serialized = match fs::read_to_string(filename) {
        Ok(serialized) => serialized,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!("No cache file: {}.", filename.display());
            return None;
        }
        Err(err) => {
            warn!("Could not read cache file {}: {err}.", filename.display());
            return None;
        }
    };
    match serde_json::from_str(&serialized) {
        Ok(value) => {
            info!("Used cache file {}.", filename.display());
            Some(value)
        }
        Err(_) => {
            warn!("Could not use corrupt cache file {}.", filename.display());
            None
        }
    }
}

/// `[imported, line_number | null, line_contents | null]`, with the line
/// fields either both present or both absent.
fn parse_cached_import(module: &str, entry: &Value) -> Option<DirectImport> {
    let Value::Array(parts) = entry else {
        return None;
    };
    let [imported, line_number, line_contents] = parts.as_slice() else {
        return None;
    };
    let imported = imported.as_str()?;
    let (line_number, line_contents) = match (line_number, line_contents) {
        (Value::Null, Value::Null) => (None, None),
        (number, text) => (
            Some(u32::try_from(number.as_u64()?).ok()?),
            Some(text.as_str()?.to_owned()),
        ),
    };
    Some(DirectImport {
        importer: module.to_owned(),
        imported: imported.to_owned(),
        line_number,
        line_contents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn found_package(name: &str, modules: &[(&str, f64)]) -> FoundPackage {
        FoundPackage {
            name: name.to_owned(),
            directory: PathBuf::from(name),
            module_files: modules
                .iter()
                .map(|&(module, mtime)| ModuleFile {
                    name: module.to_owned(),
                    mtime,
                })
                .collect(),
        }
    }

    fn imports_fixture() -> FxHashMap<String, FxHashSet<DirectImport>> {
        let mut imports_by_module: FxHashMap<String, FxHashSet<DirectImport>> =
            FxHashMap::default();
        imports_by_module.insert(
            "mypackage".to_owned(),
            FxHashSet::default(),
        );
        imports_by_module.insert(
            "mypackage.foo".to_owned(),
            FxHashSet::from_iter([DirectImport::new(
                "mypackage.foo",
                "mypackage.bar",
                3,
                "from mypackage import bar",
            )]),
        );
        imports_by_module.insert(
            "mypackage.bar".to_owned(),
            FxHashSet::from_iter([DirectImport::new("mypackage.bar", "os", 1, "import os")]),
        );
        imports_by_module
    }

    fn packages() -> Vec<FoundPackage> {
        vec![found_package(
            "mypackage",
            &[
                ("mypackage", 1000.0),
                ("mypackage.foo", 1000.5),
                ("mypackage.bar", 1001.0),
            ],
        )]
    }

    #[test]
    fn test_round_trip() {
        let tmp = TempDir::new().unwrap();
        let packages = packages();
        let imports_by_module = imports_fixture();

        let cache = Cache::setup(Some(tmp.path()), &packages, false, false);
        cache.write(&imports_by_module).unwrap();

        let reloaded = Cache::setup(Some(tmp.path()), &packages, false, false);
        for module_file in &packages[0].module_files {
            assert_eq!(
                reloaded.read_imports(module_file).unwrap(),
                imports_by_module[&module_file.name],
                "mismatch for {}",
                module_file.name
            );
        }
    }

    #[test]
    fn test_changed_mtime_is_a_miss() {
        let tmp = TempDir::new().unwrap();
        let packages = packages();
        let cache = Cache::setup(Some(tmp.path()), &packages, false, false);
        cache.write(&imports_fixture()).unwrap();

        let reloaded = Cache::setup(Some(tmp.path()), &packages, false, false);
        let modified = ModuleFile {
            name: "mypackage.foo".to_owned(),
            mtime: 9999.0,
        };
        assert!(reloaded.read_imports(&modified).is_err());
    }

    #[test]
    fn test_unknown_module_is_a_miss() {
        let tmp = TempDir::new().unwrap();
        let cache = Cache::setup(Some(tmp.path()), &packages(), false, false);
        let unknown = ModuleFile {
            name: "mypackage.new".to_owned(),
            mtime: 1000.0,
        };
        assert!(cache.read_imports(&unknown).is_err());
    }

    #[test]
    fn test_different_analysis_identity_uses_different_data_file() {
        let tmp = TempDir::new().unwrap();
        let packages = packages();
        let cache = Cache::setup(Some(tmp.path()), &packages, false, false);
        cache.write(&imports_fixture()).unwrap();

        // Same mtimes, but scanning with external packages included reads a
        // different data file, so everything misses.
        let external = Cache::setup(Some(tmp.path()), &packages, true, false);
        assert!(external.read_imports(&packages[0].module_files[1]).is_err());
    }

    #[test]
    fn test_analysis_identity_flags() {
        let tmp = TempDir::new().unwrap();
        let packages = packages();
        let cache = Cache::setup(Some(tmp.path()), &packages, true, true);
        assert_eq!(cache.analysis_identity(), "mypackage:external:no_type_checking");
    }

    #[test]
    fn test_corrupt_files_are_treated_as_absent() {
        let tmp = TempDir::new().unwrap();
        let packages = packages();
        let cache = Cache::setup(Some(tmp.path()), &packages, false, false);
        cache.write(&imports_fixture()).unwrap();

        // Corrupt both files.
        for entry in fs::read_dir(tmp.path()).unwrap() {
            let path = entry.unwrap().path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                fs::write(&path, "{not json").unwrap();
            }
        }

        let reloaded = Cache::setup(Some(tmp.path()), &packages, false, false);
        assert!(reloaded.read_imports(&packages[0].module_files[0]).is_err());
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let tmp = TempDir::new().unwrap();
        let packages = packages();
        let cache = Cache::setup(Some(tmp.path()), &packages, false, false);
        cache.write(&imports_fixture()).unwrap();

        // Rewrite the data file with one good and one bad entry.
        let data_file = fs::read_dir(tmp.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .find(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.ends_with(".data.json"))
            })
            .unwrap();
        fs::write(
            &data_file,
            r#"{"mypackage.foo": [["mypackage.bar", 3, "from mypackage import bar"], ["bad", "entry"], 42]}"#,
        )
        .unwrap();

        let reloaded = Cache::setup(Some(tmp.path()), &packages, false, false);
        let imports = reloaded
            .read_imports(&packages[0].module_files[1])
            .unwrap();
        assert_eq!(imports.len(), 1);
    }

    #[test]
    fn test_marker_files_are_written_once() {
        let tmp = TempDir::new().unwrap();
        let packages = packages();
        let cache = Cache::setup(Some(tmp.path()), &packages, false, false);
        cache.write(&imports_fixture()).unwrap();

        let gitignore = tmp.path().join(".gitignore");
        assert_eq!(fs::read_to_string(&gitignore).unwrap(), "# Automatically created\n*");
        assert!(tmp.path().join("CACHEDIR.TAG").exists());

        // A pre-existing marker file isn't overwritten.
        fs::write(&gitignore, "customized").unwrap();
        cache.write(&imports_fixture()).unwrap();
        assert_eq!(fs::read_to_string(&gitignore).unwrap(), "customized");
    }
}
