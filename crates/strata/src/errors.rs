use thiserror::Error;

pub type StrataResult<T> = Result<T, StrataError>;

/// Errors surfaced by graph construction and queries.
#[derive(Debug, Error)]
pub enum StrataError {
    #[error("\"{0}\" not present in the graph.")]
    ModuleNotPresent(String),

    #[error("Missing __init__.py for package {0}; namespace packages are not supported here.")]
    NamespacePackageEncountered(String),

    #[error("{0} is not a top level module; it is a child of another package.")]
    NotATopLevelModule(String),

    #[error("Syntax error in {filename}, line {line}: {text}")]
    SourceSyntaxError {
        filename: String,
        line: u32,
        text: String,
    },

    #[error("Container {0} does not exist.")]
    NoSuchContainer(String),

    #[error("{0} is not a valid module expression.")]
    InvalidModuleExpression(String),

    #[error("{0} is not a valid import expression.")]
    InvalidImportExpression(String),

    /// Contract violation, e.g. querying children of a squashed module.
    #[error("{0}")]
    InvalidOperation(String),

    #[error("Could not find package {package} in {searched:?}.")]
    PackageNotFound {
        package: String,
        searched: Vec<std::path::PathBuf>,
    },

    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl PartialEq for StrataError {
    fn eq(&self, other: &Self) -> bool {
        use StrataError::*;
        match (self, other) {
            (ModuleNotPresent(a), ModuleNotPresent(b)) => a == b,
            (NamespacePackageEncountered(a), NamespacePackageEncountered(b)) => a == b,
            (NotATopLevelModule(a), NotATopLevelModule(b)) => a == b,
            (
                SourceSyntaxError {
                    filename: f1,
                    line: l1,
                    text: t1,
                },
                SourceSyntaxError {
                    filename: f2,
                    line: l2,
                    text: t2,
                },
            ) => (f1, l1, t1) == (f2, l2, t2),
            (NoSuchContainer(a), NoSuchContainer(b)) => a == b,
            (InvalidModuleExpression(a), InvalidModuleExpression(b)) => a == b,
            (InvalidImportExpression(a), InvalidImportExpression(b)) => a == b,
            (InvalidOperation(a), InvalidOperation(b)) => a == b,
            _ => false,
        }
    }
}
