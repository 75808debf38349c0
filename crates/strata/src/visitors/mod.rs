//! AST visitor implementations for Strata
//!
//! This module contains visitors used to analyze Python source during graph
//! building.

pub mod import_discovery;

pub use import_discovery::{DiscoveredImport, ImportDiscoveryVisitor};
