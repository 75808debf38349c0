//! Discovery of the Python modules that make up a package.
//!
//! A root package name is resolved to a directory against a list of search
//! paths, then walked for `.py` files. Directories without an `__init__.py`
//! marker and hidden files/directories are skipped, mirroring what the import
//! system itself would consider part of the package.

use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use log::debug;
use walkdir::WalkDir;

use crate::errors::{StrataError, StrataResult};

const INIT_FILE: &str = "__init__.py";

/// One module file inside a found package.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleFile {
    /// Fully qualified module name, e.g. `mypackage.foo.bar`.
    pub name: String,
    /// Modification time in seconds since the epoch.
    pub mtime: f64,
}

/// The walker's enumeration of one root package.
#[derive(Debug, Clone)]
pub struct FoundPackage {
    /// May be multi-component for a portion of a namespace package,
    /// e.g. `namespace.portion`.
    pub name: String,
    pub directory: PathBuf,
    pub module_files: Vec<ModuleFile>,
}

impl FoundPackage {
    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.module_files.iter().map(|f| f.name.as_str())
    }
}

/// Resolve a package name against the search paths and enumerate its modules.
///
/// The package directory itself must carry an `__init__.py`; a missing marker
/// means a namespace package, which cannot be analyzed as a root. A
/// multi-component name is only accepted as a *portion* - if any ancestor
/// directory is itself a regular package, the caller should be naming that
/// ancestor instead.
pub fn find_package(package_name: &str, search_paths: &[PathBuf]) -> StrataResult<FoundPackage> {
    let relative: PathBuf = package_name.split('.').collect();

    for search_path in search_paths {
        let directory = search_path.join(&relative);
        if !directory.is_dir() {
            continue;
        }
        debug!("Found package {package_name} at {}", directory.display());

        if !directory.join(INIT_FILE).is_file() {
            return Err(StrataError::NamespacePackageEncountered(
                package_name.to_owned(),
            ));
        }
        check_not_a_child_package(package_name, search_path, &directory)?;

        let module_files = walk_package(package_name, &directory);
        return Ok(FoundPackage {
            name: package_name.to_owned(),
            directory,
            module_files,
        });
    }

    Err(StrataError::PackageNotFound {
        package: package_name.to_owned(),
        searched: search_paths.to_vec(),
    })
}

/// A multi-component root is only valid when the intermediate directories are
/// namespace portions (no `__init__.py`).
fn check_not_a_child_package(
    package_name: &str,
    search_path: &Path,
    directory: &Path,
) -> StrataResult<()> {
    let mut ancestor = directory.parent();
    while let Some(dir) = ancestor {
        if dir == search_path {
            break;
        }
        if dir.join(INIT_FILE).is_file() {
            return Err(StrataError::NotATopLevelModule(package_name.to_owned()));
        }
        ancestor = dir.parent();
    }
    Ok(())
}

fn walk_package(package_name: &str, directory: &Path) -> Vec<ModuleFile> {
    let mut module_files = Vec::new();

    let walker = WalkDir::new(directory).into_iter().filter_entry(|entry| {
        let hidden = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'));
        if hidden {
            return false;
        }
        if entry.file_type().is_dir() {
            // The root was validated by the caller; only descend into
            // subdirectories that are themselves packages.
            return entry.depth() == 0 || entry.path().join(INIT_FILE).is_file();
        }
        entry.path().extension().and_then(|ext| ext.to_str()) == Some("py")
    });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("Skipping unreadable entry under {package_name}: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = module_name_from_path(package_name, directory, entry.path()) else {
            continue;
        };
        module_files.push(ModuleFile {
            name,
            mtime: file_mtime(entry.path()),
        });
    }

    module_files
}

/// Convert a module file path to its dotted name, e.g.
/// `mypackage` + `foo/bar.py -> mypackage.foo.bar`.
fn module_name_from_path(package_name: &str, directory: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(directory).ok()?;

    let mut components = vec![package_name.to_owned()];
    for component in relative.iter() {
        let component = component.to_str()?;
        if component == INIT_FILE {
            break;
        }
        components.push(component.strip_suffix(".py").unwrap_or(component).to_owned());
    }
    Some(components.join("."))
}

fn file_mtime(path: &Path) -> f64 {
    std::fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .ok()
        .and_then(|modified| modified.duration_since(UNIX_EPOCH).ok())
        .map(|duration| duration.as_secs_f64())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_finds_modules_in_package() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join("mypackage/__init__.py"));
        touch(&root.join("mypackage/one.py"));
        touch(&root.join("mypackage/sub/__init__.py"));
        touch(&root.join("mypackage/sub/two.py"));

        let package = find_package("mypackage", &[root.to_path_buf()]).unwrap();
        let mut names: Vec<_> = package.module_names().collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "mypackage",
                "mypackage.one",
                "mypackage.sub",
                "mypackage.sub.two"
            ]
        );
    }

    #[test]
    fn test_skips_directories_without_init() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join("mypackage/__init__.py"));
        touch(&root.join("mypackage/not_a_package/stray.py"));

        let package = find_package("mypackage", &[root.to_path_buf()]).unwrap();
        assert_eq!(package.module_files.len(), 1);
    }

    #[test]
    fn test_skips_hidden_directories() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join("mypackage/__init__.py"));
        touch(&root.join("mypackage/.hidden/__init__.py"));
        touch(&root.join("mypackage/.hidden/secret.py"));

        let package = find_package("mypackage", &[root.to_path_buf()]).unwrap();
        assert_eq!(package.module_files.len(), 1);
    }

    #[test]
    fn test_namespace_package_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join("mypackage/one.py"));

        let result = find_package("mypackage", &[root.to_path_buf()]);
        assert!(matches!(
            result,
            Err(StrataError::NamespacePackageEncountered(_))
        ));
    }

    #[test]
    fn test_portion_of_namespace_package_is_accepted() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        // `namespace` has no __init__.py, making `namespace.portion` a portion.
        touch(&root.join("namespace/portion/__init__.py"));
        touch(&root.join("namespace/portion/one.py"));

        let package = find_package("namespace.portion", &[root.to_path_buf()]).unwrap();
        let mut names: Vec<_> = package.module_names().collect();
        names.sort();
        assert_eq!(names, vec!["namespace.portion", "namespace.portion.one"]);
    }

    #[test]
    fn test_child_of_regular_package_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join("mypackage/__init__.py"));
        touch(&root.join("mypackage/child/__init__.py"));

        let result = find_package("mypackage.child", &[root.to_path_buf()]);
        assert!(matches!(result, Err(StrataError::NotATopLevelModule(_))));
    }

    #[test]
    fn test_missing_package_reports_search_paths() {
        let tmp = TempDir::new().unwrap();
        let result = find_package("nowhere", &[tmp.path().to_path_buf()]);
        assert!(matches!(result, Err(StrataError::PackageNotFound { .. })));
    }
}
