//! Tour runner
//!
//! Runs the selected sections in tour order. Sections a selection depends on
//! run first with their output muted. The first fault stops the run: the
//! report keeps every line printed up to that point and nothing after it.

use serde::Serialize;

use crate::demo::sections::{Section, SECTIONS};
use crate::demo::session::Session;
use crate::error::{PrimerError, Result};

/// Section selection gathered from the command line
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Sections to show; empty means all of them.
    pub sections: Vec<String>,
}

/// Output of one section
#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    pub name: String,
    pub lines: Vec<String>,
    pub completed: bool,
}

/// Result of a tour run
#[derive(Debug, Clone, Serialize)]
pub struct TourReport {
    pub sections: Vec<SectionReport>,
    /// Sections that ran to completion, muted ones included
    pub sections_completed: usize,
    pub success: bool,
    pub error: Option<String>,
}

/// A section scheduled to run, and whether its output is shown.
#[derive(Debug, Clone, Copy)]
pub struct PlannedSection {
    pub section: &'static Section,
    pub visible: bool,
}

pub struct TourRunner {
    config: RunConfig,
    catalog: &'static [Section],
    session: Session,
}

impl TourRunner {
    pub fn new(config: RunConfig) -> Self {
        Self::with_catalog(config, SECTIONS)
    }

    /// Run against a different section list.
    pub fn with_catalog(config: RunConfig, catalog: &'static [Section]) -> Self {
        Self {
            config,
            catalog,
            session: Session::new(),
        }
    }

    fn lookup(&self, name: &str) -> Result<&'static Section> {
        self.catalog
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| PrimerError::UnknownSection(name.to_string()))
    }

    /// Resolve the selection into the ordered list of sections to run.
    pub fn plan(&self) -> Result<Vec<PlannedSection>> {
        if self.config.sections.is_empty() {
            return Ok(self
                .catalog
                .iter()
                .map(|section| PlannedSection {
                    section,
                    visible: true,
                })
                .collect());
        }

        let mut selected = Vec::new();
        for name in &self.config.sections {
            selected.push(self.lookup(name)?.name);
        }

        let mut needed = selected.clone();
        let mut i = 0;
        while i < needed.len() {
            for dep in self.lookup(needed[i])?.requires {
                if !needed.contains(dep) {
                    needed.push(*dep);
                }
            }
            i += 1;
        }

        Ok(self
            .catalog
            .iter()
            .filter(|s| needed.contains(&s.name))
            .map(|section| PlannedSection {
                section,
                visible: selected.contains(&section.name),
            })
            .collect())
    }

    /// Run the plan. Tour faults end up in the report; only selection
    /// errors are returned as `Err`.
    pub fn run(&mut self) -> Result<TourReport> {
        let plan = self.plan()?;
        let mut sections = Vec::new();
        let mut sections_completed = 0;

        for step in plan {
            let name = step.section.name;
            tracing::debug!(section = name, visible = step.visible, "running section");

            let outcome = (step.section.run)(&mut self.session);
            let lines = self.session.take_lines();
            let completed = outcome.is_ok();

            if step.visible || !completed {
                sections.push(SectionReport {
                    name: name.to_string(),
                    lines: if step.visible { lines } else { Vec::new() },
                    completed,
                });
            }

            match outcome {
                Ok(()) => sections_completed += 1,
                Err(e) => {
                    tracing::debug!(section = name, error = %e, "section failed");
                    return Ok(TourReport {
                        sections,
                        sections_completed,
                        success: false,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        tracing::info!(sections = sections_completed, "tour completed");
        Ok(TourReport {
            sections,
            sections_completed,
            success: true,
            error: None,
        })
    }
}
