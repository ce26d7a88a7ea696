//! pyreq2rpm - Python requirement to RPM dependency translation library
//!
//! This library turns the dependency lines found in Python package metadata
//! (`requires.txt`) into RPM dependency strings:
//! - Package names are mangled into distribution names (`pyyaml` -> `python3-yaml`)
//! - Comma-separated constraints become one dependency each
//! - `~=` is emitted as `>=`
//!
//! ```
//! use pyreq2rpm::domain::LangPrefix;
//! use pyreq2rpm::parser::gen_requires;
//!
//! let deps = gen_requires(["six<2dev,>=1.6.1"], &LangPrefix::python(3)).unwrap();
//! assert_eq!(deps, vec!["python3-six < 2dev", "python3-six >= 1.6.1"]);
//! ```

pub mod cli;
pub mod domain;
pub mod error;
pub mod input;
pub mod logging;
pub mod mangle;
pub mod output;
pub mod parser;
