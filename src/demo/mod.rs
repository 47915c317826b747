//! The language-basics tour
//!
//! A fixed sequence of sections, each a short run of container and operator
//! demonstrations against a shared [`Scope`]. Sections print through a
//! [`Session`]; the [`TourRunner`] strings them together.

pub mod runner;
pub mod scope;
pub mod sections;
pub mod session;

pub use runner::{RunConfig, SectionReport, TourReport, TourRunner};
pub use scope::Scope;
pub use sections::{Section, SECTIONS};
pub use session::Session;
