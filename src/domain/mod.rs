//! Core domain models for pyreq2rpm
//!
//! This module contains the value types passed between the mangler and the parser:
//! - Language prefix used to build target package names
//! - Comparison operators recognized in requirement lines
//! - Constraints and mangled dependencies produced by the parser

mod dependency;
mod lang_prefix;
mod operator;

pub use dependency::{Constraint, MangledDependency};
pub use lang_prefix::LangPrefix;
pub use operator::Operator;
