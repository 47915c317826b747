//! Named variables bound during a tour run

use indexmap::IndexMap;

use crate::error::{PrimerError, Result};
use crate::format::Bindings;
use crate::ops::{Mapping, Sequence, Set};
use crate::value::Value;

/// Variables in binding order. Rebinding a name keeps its original slot.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    vars: IndexMap<String, Value>,
}

fn wrong_type(name: &str, expected: &str, found: &Value) -> PrimerError {
    PrimerError::TypeError(format!(
        "'{}' is a '{}', expected '{}'",
        name,
        found.type_name(),
        expected
    ))
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, name: &str, value: impl Into<Value>) {
        self.vars.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Result<&Value> {
        self.vars
            .get(name)
            .ok_or_else(|| PrimerError::NameError(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Value> {
        self.vars
            .get_mut(name)
            .ok_or_else(|| PrimerError::NameError(name.to_string()))
    }

    pub fn list(&self, name: &str) -> Result<&Sequence> {
        match self.get(name)? {
            Value::List(l) => Ok(l),
            other => Err(wrong_type(name, "list", other)),
        }
    }

    pub fn list_mut(&mut self, name: &str) -> Result<&mut Sequence> {
        match self.get_mut(name)? {
            Value::List(l) => Ok(l),
            other => Err(wrong_type(name, "list", other)),
        }
    }

    pub fn dict(&self, name: &str) -> Result<&Mapping> {
        match self.get(name)? {
            Value::Dict(d) => Ok(d),
            other => Err(wrong_type(name, "dict", other)),
        }
    }

    pub fn dict_mut(&mut self, name: &str) -> Result<&mut Mapping> {
        match self.get_mut(name)? {
            Value::Dict(d) => Ok(d),
            other => Err(wrong_type(name, "dict", other)),
        }
    }

    pub fn set(&self, name: &str) -> Result<&Set> {
        match self.get(name)? {
            Value::Set(s) => Ok(s),
            other => Err(wrong_type(name, "set", other)),
        }
    }

    pub fn set_mut(&mut self, name: &str) -> Result<&mut Set> {
        match self.get_mut(name)? {
            Value::Set(s) => Ok(s),
            other => Err(wrong_type(name, "set", other)),
        }
    }
}

impl Bindings for Scope {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }
}
