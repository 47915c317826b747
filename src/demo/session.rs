//! Execution state shared by the tour sections

use std::fmt::Display;

use crate::demo::scope::Scope;
use crate::error::Result;
use crate::format;
use crate::value::Value;

/// Scope plus the lines printed by the section currently running.
#[derive(Debug, Default)]
pub struct Session {
    scope: Scope,
    lines: Vec<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn scope_mut(&mut self) -> &mut Scope {
        &mut self.scope
    }

    /// `print(value)`
    pub fn print(&mut self, line: impl Display) {
        let line = line.to_string();
        tracing::trace!(%line, "print");
        self.lines.push(line);
    }

    /// Print `name = repr(value)` for a bound name.
    pub fn show(&mut self, name: &str) -> Result<()> {
        let line = format!("{} = {}", name, self.scope.get(name)?.repr());
        self.print(line);
        Ok(())
    }

    /// Bind and then show.
    pub fn assign(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        self.scope.bind(name, value);
        self.show(name)
    }

    /// `print(f"...")` against the current scope.
    pub fn print_f(&mut self, template: &str) -> Result<()> {
        let line = format::interpolate(template, &self.scope)?;
        self.print(line);
        Ok(())
    }

    /// Hand over the lines printed since the last call.
    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_prints_repr() {
        let mut session = Session::new();
        session.assign("text", "Hello").unwrap();
        session.print("plain");
        assert_eq!(session.take_lines(), ["text = 'Hello'", "plain"]);
        assert!(session.take_lines().is_empty());
    }

    #[test]
    fn test_print_f_uses_scope() {
        let mut session = Session::new();
        session.scope_mut().bind("pi", 3.14);
        session.print_f("Pi to 2 decimals: {pi:.2f}").unwrap();
        assert_eq!(session.take_lines(), ["Pi to 2 decimals: 3.14"]);
    }
}
