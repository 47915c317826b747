//! Primer - a guided tour of dynamic-language basics on Rust containers
//!
//! Primer replays a fixed sequence of variable, operator, formatting, math,
//! list, dict, tuple, set and loop demonstrations. Values follow the
//! dynamic-language rules the tour teaches: floor division rounds toward
//! negative infinity, dicts keep insertion order, `and`/`or` return the
//! deciding operand, and every failing operation raises the matching error.
//!
//! # Example
//!
//! ```
//! use primer::{RunConfig, TourRunner};
//!
//! let mut runner = TourRunner::new(RunConfig {
//!     sections: vec!["sets".to_string()],
//! });
//! let report = runner.run().unwrap();
//! assert!(report.success);
//! assert_eq!(report.sections[0].lines.last().unwrap(), "{1, 2, 5, 6}");
//! ```

pub mod cli;
pub mod demo;
pub mod error;
pub mod format;
pub mod ops;
pub mod output;
pub mod value;

pub use demo::{RunConfig, Scope, Session, TourReport, TourRunner, SECTIONS};
pub use error::{PrimerError, Result};
pub use format::{interpolate, Template};
pub use ops::{Mapping, Sequence, Set, Tuple};
pub use output::{format_report, format_sections, OutputFormat};
pub use value::Value;
