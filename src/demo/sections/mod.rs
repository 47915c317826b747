//! The sections of the tour, in the order they run

pub mod basics;
pub mod collections;
pub mod loops;

use serde::Serialize;

use crate::demo::session::Session;
use crate::error::Result;

/// One named step of the tour.
#[derive(Clone, Copy, Serialize)]
pub struct Section {
    pub name: &'static str,
    pub summary: &'static str,
    /// Sections whose bindings this one reads.
    pub requires: &'static [&'static str],
    #[serde(skip)]
    pub run: fn(&mut Session) -> Result<()>,
}

impl std::fmt::Debug for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Section")
            .field("name", &self.name)
            .field("requires", &self.requires)
            .finish_non_exhaustive()
    }
}

pub const SECTIONS: &[Section] = &[
    Section {
        name: "variables",
        summary: "literal bindings, multiple assignment and swap",
        requires: &[],
        run: basics::variables,
    },
    Section {
        name: "conversion",
        summary: "int(), float(), str() and bool()",
        requires: &[],
        run: basics::conversion,
    },
    Section {
        name: "operators",
        summary: "arithmetic, comparison and short-circuit boolean operators",
        requires: &["variables"],
        run: basics::operators,
    },
    Section {
        name: "formatting",
        summary: "formatted interpolation with precision specifiers",
        requires: &["variables"],
        run: basics::formatting,
    },
    Section {
        name: "math",
        summary: "sqrt, ceil, floor and gcd",
        requires: &[],
        run: basics::math_functions,
    },
    Section {
        name: "lists",
        summary: "indexing, slicing and in-place list methods",
        requires: &[],
        run: collections::lists,
    },
    Section {
        name: "comprehensions",
        summary: "list comprehensions with map and filter",
        requires: &["lists"],
        run: collections::comprehensions,
    },
    Section {
        name: "dicts",
        summary: "lookups, mutation and insertion-ordered iteration",
        requires: &[],
        run: collections::dicts,
    },
    Section {
        name: "tuples",
        summary: "fixed tuples and unpacking",
        requires: &[],
        run: collections::tuples,
    },
    Section {
        name: "sets",
        summary: "set mutation and set algebra",
        requires: &[],
        run: collections::sets,
    },
    Section {
        name: "loops",
        summary: "for over lists and ranges, enumerate, while",
        requires: &["lists"],
        run: loops::loops,
    },
];
