use std::{collections::HashMap, fmt::Display};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// What a name resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolTableEntry {
    Variable {
        declared_type: String,
    },
    Function {
        return_type: String,
        parameter_types: Vec<String>,
    },
    /// Entrypoints take no parameters and return nothing, so there is nothing to record.
    EntrypointFunction,
}

impl Display for SymbolTableEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymbolTableEntry::Variable { declared_type } => write!(f, "{}", declared_type),
            SymbolTableEntry::Function {
                return_type,
                parameter_types,
            } => write!(f, "{{{}, {}}}", return_type, parameter_types.join(", ")),
            SymbolTableEntry::EntrypointFunction => write!(f, "EPF"),
        }
    }
}

/// A single flat namespace. Every name is defined at most once.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: HashMap<String, SymbolTableEntry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            entries: HashMap::new(),
        }
    }

    pub fn define(
        &mut self,
        name: &str,
        entry: SymbolTableEntry,
        current_position: Position,
    ) -> Result<(), Error> {
        if self.entries.contains_key(name) {
            Err(Error::new(
                ErrorImpl::AlreadyDefined {
                    name: name.to_string(),
                },
                current_position,
            ))
        } else {
            self.entries.insert(name.to_string(), entry);
            Ok(())
        }
    }

    pub fn get(&self, name: &str) -> Option<&SymbolTableEntry> {
        self.entries.get(name)
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
