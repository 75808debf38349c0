//! Statically analyses Python modules for import statements within their
//! shared set of packages.
//!
//! The scanner only ever looks at one module's source; it relies on the set
//! of known internal modules to decide what an imported name refers to. (You
//! can't know whether `from foo.bar import baz` names a module `baz` or a
//! function inside `bar` without that set.)

use log::warn;
use ruff_python_parser::parse_module;
use ruff_text_size::TextSize;
use rustc_hash::FxHashSet;

use crate::errors::{StrataError, StrataResult};
use crate::module_finding::FoundPackage;
use crate::module_name;
use crate::visitors::{DiscoveredImport, ImportDiscoveryVisitor};

/// An import between one module and another, with source provenance.
#[derive(Debug, Clone, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct DirectImport {
    pub importer: String,
    pub imported: String,
    pub line_number: Option<u32>,
    pub line_contents: Option<String>,
}

impl DirectImport {
    pub fn new(importer: &str, imported: &str, line_number: u32, line_contents: &str) -> Self {
        Self {
            importer: importer.to_owned(),
            imported: imported.to_owned(),
            line_number: Some(line_number),
            line_contents: Some(line_contents.to_owned()),
        }
    }
}

/// Scanner for the modules of a single graph build.
pub struct ImportScanner {
    found_package_names: Vec<String>,
    internal_modules: FxHashSet<String>,
    include_external_packages: bool,
}

impl ImportScanner {
    pub fn new(found_packages: &[FoundPackage], include_external_packages: bool) -> Self {
        let found_package_names = found_packages.iter().map(|p| p.name.clone()).collect();
        let internal_modules = found_packages
            .iter()
            .flat_map(|p| p.module_names().map(str::to_owned))
            .collect();
        Self {
            found_package_names,
            internal_modules,
            include_external_packages,
        }
    }

    /// Statically analyse one module's source and return its direct imports.
    ///
    /// `module_is_package` is true for `__init__.py`-style modules; it shifts
    /// the base of relative imports by one level.
    pub fn scan_for_imports(
        &self,
        module: &str,
        source: &str,
        module_is_package: bool,
        filename: &str,
        exclude_type_checking_imports: bool,
    ) -> StrataResult<FxHashSet<DirectImport>> {
        let lines: Vec<&str> = source.lines().collect();
        let line_index = build_line_index(source);

        let parsed = parse_module(source).map_err(|parse_error| {
            let line = offset_to_line(&line_index, parse_error.location.start());
            StrataError::SourceSyntaxError {
                filename: filename.to_owned(),
                line,
                text: lines
                    .get(line as usize - 1)
                    .map(|text| text.trim().to_owned())
                    .unwrap_or_default(),
            }
        })?;

        let mut visitor = ImportDiscoveryVisitor::new();
        visitor.visit_module(parsed.syntax());

        let mut direct_imports = FxHashSet::default();
        for discovered in visitor.into_imports() {
            if exclude_type_checking_imports && discovered.typechecking_only {
                continue;
            }
            let line_number = offset_to_line(&line_index, discovered.range.start());
            let line_contents = lines
                .get(line_number as usize - 1)
                .map(|text| text.trim())
                .unwrap_or_default();

            for imported in self.resolve(module, module_is_package, &discovered) {
                direct_imports.insert(DirectImport::new(
                    module,
                    &imported,
                    line_number,
                    line_contents,
                ));
            }
        }
        Ok(direct_imports)
    }

    /// Resolve one import statement into zero or more imported module names.
    fn resolve(
        &self,
        module: &str,
        module_is_package: bool,
        discovered: &DiscoveredImport,
    ) -> Vec<String> {
        if discovered.level == 0 && discovered.names.is_empty() {
            // `import x.y`
            let candidate = discovered
                .module_name
                .as_deref()
                .expect("plain imports always name a module");
            return match self.internal_modules.contains(candidate) {
                true => vec![candidate.to_owned()],
                false => self
                    .maybe_distill_external(candidate)
                    .into_iter()
                    .collect(),
            };
        }

        if discovered.level == 0 {
            // `from x.y import a, b`
            let base = discovered
                .module_name
                .as_deref()
                .expect("absolute from-imports always name a module");
            return discovered
                .names
                .iter()
                .filter_map(|name| self.resolve_object_name(base, name))
                .collect();
        }

        // `from .x import a` and friends.
        let Some(base) = resolve_relative_base(
            module,
            module_is_package,
            discovered.level,
            discovered.module_name.as_deref(),
        ) else {
            warn!(
                "Could not resolve relative import (level {}) in {module}. \
                 This may be due to a missing __init__.py file in the parent package.",
                discovered.level
            );
            return vec![];
        };

        discovered
            .names
            .iter()
            .filter_map(|name| {
                let resolved = self.resolve_internal_object_name(&base, name);
                if resolved.is_none() {
                    warn!(
                        "Could not find {} when scanning {module}. This may be due to a \
                         missing __init__.py file in the parent package.",
                        module_name::join(&base, name)
                    );
                }
                resolved
            })
            .collect()
    }

    /// `from base import name` where everything may turn out to be external.
    fn resolve_object_name(&self, base: &str, name: &str) -> Option<String> {
        self.resolve_internal_object_name(base, name).or_else(|| {
            self.maybe_distill_external(&module_name::join(base, name))
                .or_else(|| self.maybe_distill_external(base))
        })
    }

    /// `base.name` if it is an internal module, else `base` if that is one
    /// (`name` is then an attribute of it).
    fn resolve_internal_object_name(&self, base: &str, name: &str) -> Option<String> {
        let candidate = module_name::join(base, name);
        if self.internal_modules.contains(&candidate) {
            Some(candidate)
        } else if self.internal_modules.contains(base) {
            Some(base.to_owned())
        } else {
            None
        }
    }

    fn maybe_distill_external(&self, module: &str) -> Option<String> {
        if self.include_external_packages {
            distill_external_module(module, &self.found_package_names)
        } else {
            None
        }
    }
}

/// Trim the importer by the relative level and append the named module.
///
/// Returns `None` when the level reaches above the importer's root.
fn resolve_relative_base(
    module: &str,
    module_is_package: bool,
    level: u32,
    named: Option<&str>,
) -> Option<String> {
    let components: Vec<&str> = module.split('.').collect();
    // An `__init__.py` already sits at package level, so one fewer trim.
    let trim = if module_is_package {
        level as usize - 1
    } else {
        level as usize
    };
    if trim >= components.len() {
        return None;
    }
    let base = components[..components.len() - trim].join(".");
    Some(match named {
        Some(named) => module_name::join(&base, named),
        None => base,
    })
}

/// Given a module that we already know is external, turn it into a module to
/// add to the graph.
///
/// The 'distillation' process involves removing any unwanted subpackages. For
/// example, `django.models.db` should be turned into simply `django`.
///
/// The process is more complex for potential namespace packages, as it's not
/// possible to determine the portion package simply from the name. Rather than
/// adding the overhead of a filesystem read, we just get the shallowest
/// component that does not clash with an internal module namespace. Take, for
/// example, `foo.blue.alpha.one`. If one of the found packages is
/// `foo.blue.beta`, the module will be distilled to `foo.blue.alpha`.
/// Alternatively, if the found package is `foo.green`, the distilled module
/// will be `foo.blue`.
///
/// Returns `None` if the module is a parent of one of the internal packages
/// (doesn't make sense, probably an import of a namespace package).
pub fn distill_external_module(module: &str, found_package_names: &[String]) -> Option<String> {
    for found_package in found_package_names {
        if module_name::is_descendant_of(found_package, module) {
            return None;
        }
    }

    let module_root = module_name::root(module);

    let mut candidate_portions: Vec<String> = Vec::new();
    let mut sorted_found_packages: Vec<&String> = found_package_names.iter().collect();
    sorted_found_packages.sort();
    sorted_found_packages.reverse();

    for found_package in sorted_found_packages {
        if module_name::is_descendant_of(found_package, module_root) {
            let mut internal_components: Vec<&str> = found_package.split('.').collect();
            let mut external_components: Vec<&str> = module.split('.').collect();
            let mut namespace_components: Vec<&str> = vec![];
            while !internal_components.is_empty()
                && !external_components.is_empty()
                && external_components[0] == internal_components[0]
            {
                namespace_components.push(external_components.remove(0));
                internal_components.remove(0);
            }
            if let Some(next) = external_components.first() {
                namespace_components.push(next);
            }
            candidate_portions.push(namespace_components.join("."));
        }
    }

    if candidate_portions.is_empty() {
        Some(module_root.to_owned())
    } else {
        // If multiple internal modules share a namespace with this module, use
        // the deepest one as we know that that will be a namespace too.
        candidate_portions.sort_by_key(|portion| portion.split('.').count());
        candidate_portions.pop()
    }
}

/// Work out the full filename of the given module within its package.
///
/// Any given module can either be a straight Python file (`foo.py`) or else a
/// package (in which case the file is an `__init__.py` within a directory).
pub fn determine_module_filename(
    module: &str,
    found_package: &FoundPackage,
) -> StrataResult<std::path::PathBuf> {
    let top_level_components = found_package.name.split('.').count();
    let leaf_components: Vec<&str> = module.split('.').skip(top_level_components).collect();

    let mut filename_root = found_package.directory.clone();
    for component in leaf_components {
        filename_root.push(component);
    }
    let candidates = [
        filename_root.with_extension("py"),
        filename_root.join("__init__.py"),
    ];
    for candidate in candidates {
        if candidate.is_file() {
            return Ok(candidate);
        }
    }
    Err(StrataError::FileRead {
        path: module.to_owned(),
        source: std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Could not find module {module}."),
        ),
    })
}

/// Byte offsets of each line start, for offset-to-line conversion.
fn build_line_index(source: &str) -> Vec<u32> {
    let mut starts = vec![0u32];
    for (offset, byte) in source.bytes().enumerate() {
        if byte == b'\n' {
            starts.push(offset as u32 + 1);
        }
    }
    starts
}

/// 1-based line number containing the given byte offset.
fn offset_to_line(line_index: &[u32], offset: TextSize) -> u32 {
    line_index.partition_point(|&start| start <= offset.to_u32()) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(name: &str, modules: &[&str]) -> FoundPackage {
        FoundPackage {
            name: name.to_owned(),
            directory: std::path::PathBuf::from(name),
            module_files: modules
                .iter()
                .map(|&module| crate::module_finding::ModuleFile {
                    name: module.to_owned(),
                    mtime: 0.0,
                })
                .collect(),
        }
    }

    fn scan(
        packages: &[FoundPackage],
        include_external: bool,
        module: &str,
        is_package: bool,
        source: &str,
    ) -> Vec<DirectImport> {
        let scanner = ImportScanner::new(packages, include_external);
        let mut imports: Vec<_> = scanner
            .scan_for_imports(module, source, is_package, "test.py", false)
            .unwrap()
            .into_iter()
            .collect();
        imports.sort();
        imports
    }

    #[test]
    fn test_absolute_import_of_internal_module() {
        let packages = [package("foo", &["foo", "foo.one", "foo.two"])];
        let imports = scan(&packages, false, "foo.one", false, "import foo.two\n");

        assert_eq!(
            imports,
            vec![DirectImport::new("foo.one", "foo.two", 1, "import foo.two")]
        );
    }

    #[test]
    fn test_external_import_dropped_without_flag() {
        let packages = [package("foo", &["foo", "foo.one"])];
        let imports = scan(&packages, false, "foo.one", false, "import externalone\n");
        assert!(imports.is_empty());
    }

    #[test]
    fn test_external_import_distilled_with_flag() {
        let packages = [package("foo", &["foo", "foo.one"])];
        let imports = scan(
            &packages,
            true,
            "foo.one",
            false,
            "import externalone.sub.deep\n",
        );
        assert_eq!(
            imports,
            vec![DirectImport::new(
                "foo.one",
                "externalone",
                1,
                "import externalone.sub.deep"
            )]
        );
    }

    #[test]
    fn test_from_import_of_attribute_resolves_to_module() {
        let packages = [package("foo", &["foo", "foo.one", "foo.two"])];
        let imports = scan(
            &packages,
            false,
            "foo.one",
            false,
            "from foo.two import something\n",
        );
        assert_eq!(
            imports,
            vec![DirectImport::new(
                "foo.one",
                "foo.two",
                1,
                "from foo.two import something"
            )]
        );
    }

    #[test]
    fn test_from_import_of_module_resolves_to_submodule() {
        let packages = [package("foo", &["foo", "foo.one", "foo.two", "foo.two.green"])];
        let imports = scan(
            &packages,
            false,
            "foo.one",
            false,
            "from foo.two import green\n",
        );
        assert_eq!(
            imports,
            vec![DirectImport::new(
                "foo.one",
                "foo.two.green",
                1,
                "from foo.two import green"
            )]
        );
    }

    #[test]
    fn test_relative_import_in_plain_module() {
        let packages = [package("foo", &["foo", "foo.one", "foo.two"])];
        let imports = scan(
            &packages,
            false,
            "foo.one",
            false,
            "from .two import my_function\n",
        );
        assert_eq!(
            imports,
            vec![DirectImport::new(
                "foo.one",
                "foo.two",
                1,
                "from .two import my_function"
            )]
        );
    }

    #[test]
    fn test_relative_import_in_package_module() {
        // foo.one is an __init__.py, so a single dot refers to foo.one itself.
        let packages = [package("foo", &["foo", "foo.one", "foo.one.yellow"])];
        let imports = scan(
            &packages,
            false,
            "foo.one",
            true,
            "from .yellow import my_function\n",
        );
        assert_eq!(
            imports,
            vec![DirectImport::new(
                "foo.one",
                "foo.one.yellow",
                1,
                "from .yellow import my_function"
            )]
        );
    }

    #[test]
    fn test_two_dot_relative_import() {
        let packages = [package("foo", &["foo", "foo.one", "foo.one.blue", "foo.two"])];
        let imports = scan(
            &packages,
            false,
            "foo.one.blue",
            false,
            "from ..two import my_function\n",
        );
        assert_eq!(
            imports,
            vec![DirectImport::new(
                "foo.one.blue",
                "foo.two",
                1,
                "from ..two import my_function"
            )]
        );
    }

    #[test]
    fn test_dotless_relative_import_of_sibling() {
        let packages = [package("foo", &["foo", "foo.one", "foo.two"])];
        let imports = scan(&packages, false, "foo.one", false, "from . import two\n");
        assert_eq!(
            imports,
            vec![DirectImport::new("foo.one", "foo.two", 1, "from . import two")]
        );
    }

    #[test]
    fn test_relative_import_level_too_high_is_dropped() {
        let packages = [package("foo", &["foo", "foo.one"])];
        let imports = scan(
            &packages,
            false,
            "foo.one",
            false,
            "from ...nowhere import thing\n",
        );
        assert!(imports.is_empty());
    }

    #[test]
    fn test_unresolvable_relative_import_is_dropped() {
        let packages = [package("foo", &["foo", "foo.one"])];
        let imports = scan(
            &packages,
            false,
            "foo.one",
            false,
            "from .missing import thing\n",
        );
        assert!(imports.is_empty());
    }

    #[test]
    fn test_relative_import_of_attribute_resolves_to_package() {
        // foo.missing isn't a module, but foo is, so `missing` is treated as
        // an attribute of the package's __init__.
        let packages = [package("foo", &["foo", "foo.one"])];
        let imports = scan(&packages, false, "foo.one", false, "from . import missing\n");
        assert_eq!(
            imports,
            vec![DirectImport::new(
                "foo.one",
                "foo",
                1,
                "from . import missing"
            )]
        );
    }

    #[test]
    fn test_syntax_error_reports_line() {
        let packages = [package("foo", &["foo", "foo.one"])];
        let scanner = ImportScanner::new(&packages, false);
        let result = scanner.scan_for_imports(
            "foo.one",
            "import foo\ndef broken(:\n",
            false,
            "foo/one.py",
            false,
        );
        match result {
            Err(StrataError::SourceSyntaxError { filename, line, .. }) => {
                assert_eq!(filename, "foo/one.py");
                assert_eq!(line, 2);
            }
            other => panic!("expected SourceSyntaxError, got {other:?}"),
        }
    }

    #[test]
    fn test_type_checking_imports_can_be_excluded() {
        let packages = [package("foo", &["foo", "foo.one", "foo.two"])];
        let scanner = ImportScanner::new(&packages, false);
        let source = "from typing import TYPE_CHECKING\nif TYPE_CHECKING:\n    import foo.two\n";
        let with_type_checking = scanner
            .scan_for_imports("foo.one", source, false, "test.py", false)
            .unwrap();
        let without_type_checking = scanner
            .scan_for_imports("foo.one", source, false, "test.py", true)
            .unwrap();

        assert_eq!(with_type_checking.len(), 1);
        assert!(without_type_checking.is_empty());
    }

    #[test]
    fn test_distill_plain_external_module() {
        let found = vec!["mypackage".to_owned()];
        assert_eq!(
            distill_external_module("django.models.db", &found),
            Some("django".to_owned())
        );
    }

    #[test]
    fn test_distill_namespace_sharing_external_module() {
        let found = vec!["foo.blue.beta".to_owned()];
        assert_eq!(
            distill_external_module("foo.blue.alpha.one", &found),
            Some("foo.blue.alpha".to_owned())
        );
        let found = vec!["foo.green".to_owned()];
        assert_eq!(
            distill_external_module("foo.blue.alpha.one", &found),
            Some("foo.blue".to_owned())
        );
    }

    #[test]
    fn test_distill_parent_of_internal_package_is_dropped() {
        let found = vec!["foo.blue".to_owned()];
        assert_eq!(distill_external_module("foo", &found), None);
    }
}
