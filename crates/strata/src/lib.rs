//! Strata builds a queryable graph of the imports within one or more Python
//! packages, by statically analysing their source files.
//!
//! The graph supports direct and indirect import queries, hierarchy and
//! pattern matching, layered-architecture conformance checking, and
//! cycle-breaker nomination. Repeated builds are made fast by an on-disk
//! cache keyed on file modification times.

pub mod builder;
pub mod cache;
pub mod combine;
pub mod config;
pub mod errors;
pub mod filesystem;
pub mod graph;
pub mod import_scanning;
pub mod module_expressions;
pub mod module_finding;
pub mod module_name;
pub mod visitors;

pub use builder::{BuildOptions, build_graph};
pub use config::Config;
pub use errors::{StrataError, StrataResult};
pub use graph::{ImportGraph, Layer, PackageDependency, Route};
