//! Import discovery visitor that finds all imports in a Python module,
//! including those nested within functions, classes, and other scopes.

use ruff_python_ast::visitor::{Visitor, walk_stmt};
use ruff_python_ast::{Expr, ModModule, Stmt, StmtImport, StmtImportFrom};
use ruff_text_size::TextRange;

/// An import discovered during AST traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredImport {
    /// The module named in the statement (`None` for `from . import x`)
    pub module_name: Option<String>,
    /// Names being imported (for from imports)
    pub names: Vec<String>,
    /// Source range of the import statement
    pub range: TextRange,
    /// Import level for relative imports
    pub level: u32,
    /// Whether the import sits inside an `if TYPE_CHECKING:` block
    pub typechecking_only: bool,
}

/// Visitor that discovers all imports in a Python module
#[derive(Default)]
pub struct ImportDiscoveryVisitor {
    /// All discovered imports
    imports: Vec<DiscoveredImport>,
    /// Nesting depth of `if TYPE_CHECKING:` blocks
    typechecking_depth: usize,
}

impl ImportDiscoveryVisitor {
    /// Create a new import discovery visitor
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all discovered imports
    pub fn into_imports(self) -> Vec<DiscoveredImport> {
        self.imports
    }

    /// Record an import statement
    fn record_import(&mut self, stmt: &StmtImport) {
        for alias in &stmt.names {
            let import = DiscoveredImport {
                module_name: Some(alias.name.to_string()),
                names: vec![],
                range: stmt.range,
                level: 0,
                typechecking_only: self.typechecking_depth > 0,
            };
            self.imports.push(import);
        }
    }

    /// Record a from import statement
    fn record_import_from(&mut self, stmt: &StmtImportFrom) {
        let names: Vec<String> = stmt
            .names
            .iter()
            .map(|alias| alias.name.to_string())
            .collect();

        let import = DiscoveredImport {
            module_name: stmt.module.as_ref().map(|m| m.to_string()),
            names,
            range: stmt.range,
            level: stmt.level,
            typechecking_only: self.typechecking_depth > 0,
        };
        self.imports.push(import);
    }

    /// Visit a module and discover all imports
    pub fn visit_module(&mut self, module: &ModModule) {
        for stmt in &module.body {
            self.visit_stmt(stmt);
        }
    }
}

impl<'a> Visitor<'a> for ImportDiscoveryVisitor {
    fn visit_stmt(&mut self, stmt: &'a Stmt) {
        match stmt {
            Stmt::Import(import_stmt) => {
                self.record_import(import_stmt);
            }
            Stmt::ImportFrom(import_from) => {
                self.record_import_from(import_from);
            }
            Stmt::If(if_stmt) => {
                // Only the body of the `if` is guarded; elif/else branches run
                // when TYPE_CHECKING is false.
                let guarded = is_type_checking_test(&if_stmt.test);
                if guarded {
                    self.typechecking_depth += 1;
                }
                for stmt in &if_stmt.body {
                    self.visit_stmt(stmt);
                }
                if guarded {
                    self.typechecking_depth -= 1;
                }
                for clause in &if_stmt.elif_else_clauses {
                    for stmt in &clause.body {
                        self.visit_stmt(stmt);
                    }
                }
                return;
            }
            _ => {}
        }

        // For other statement types, use default traversal
        walk_stmt(self, stmt);
    }
}

/// Recognizes `TYPE_CHECKING` and `typing.TYPE_CHECKING` conditions
fn is_type_checking_test(test: &Expr) -> bool {
    match test {
        Expr::Name(name) => name.id.as_str() == "TYPE_CHECKING",
        Expr::Attribute(attribute) => {
            attribute.attr.as_str() == "TYPE_CHECKING"
                && matches!(&*attribute.value, Expr::Name(value) if value.id.as_str() == "typing")
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruff_python_parser::parse_module;

    fn discover(source: &str) -> Vec<DiscoveredImport> {
        let parsed = parse_module(source).expect("Failed to parse test module");
        let mut visitor = ImportDiscoveryVisitor::new();
        visitor.visit_module(parsed.syntax());
        visitor.into_imports()
    }

    #[test]
    fn test_module_level_import() {
        let imports = discover("import os\nfrom sys import path\n");

        assert_eq!(imports.len(), 2);
        assert_eq!(imports[0].module_name, Some("os".to_owned()));
        assert_eq!(imports[0].level, 0);
        assert_eq!(imports[1].module_name, Some("sys".to_owned()));
        assert_eq!(imports[1].names, vec!["path".to_owned()]);
    }

    #[test]
    fn test_function_scoped_import() {
        let source = r#"
def my_function():
    import json
    return json.dumps({})
"#;
        let imports = discover(source);

        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].module_name, Some("json".to_owned()));
        assert!(!imports[0].typechecking_only);
    }

    #[test]
    fn test_relative_import_level() {
        let imports = discover("from ..green import my_function\n");

        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].module_name, Some("green".to_owned()));
        assert_eq!(imports[0].level, 2);
    }

    #[test]
    fn test_dotless_relative_import() {
        let imports = discover("from . import blue\n");

        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].module_name, None);
        assert_eq!(imports[0].level, 1);
        assert_eq!(imports[0].names, vec!["blue".to_owned()]);
    }

    #[test]
    fn test_type_checking_block() {
        let source = r#"
from typing import TYPE_CHECKING

if TYPE_CHECKING:
    import expensive
else:
    import cheap
"#;
        let imports = discover(source);

        assert_eq!(imports.len(), 3);
        assert!(!imports[0].typechecking_only);
        assert_eq!(imports[1].module_name, Some("expensive".to_owned()));
        assert!(imports[1].typechecking_only);
        assert_eq!(imports[2].module_name, Some("cheap".to_owned()));
        assert!(!imports[2].typechecking_only);
    }

    #[test]
    fn test_typing_attribute_type_checking_block() {
        let source = r#"
import typing

if typing.TYPE_CHECKING:
    import expensive
"#;
        let imports = discover(source);

        assert_eq!(imports.len(), 2);
        assert!(imports[1].typechecking_only);
    }

    #[test]
    fn test_multiple_names_in_plain_import() {
        let imports = discover("import os, sys\n");

        assert_eq!(imports.len(), 2);
        assert_eq!(imports[0].module_name, Some("os".to_owned()));
        assert_eq!(imports[1].module_name, Some("sys".to_owned()));
    }
}
