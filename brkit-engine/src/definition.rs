//! TOML table definitions
//!
//! A [`TableDefinition`] describes a boundary kind in a human-editable form:
//! named classes, a category-to-class mapping, exception ranges and the two
//! transition tables written as `"N"`, `"stop"`, `"*N"`, `"*stop"` cells.
//! [`TableDefinition::into_data`] resolves the names and validates the
//! result into [`BoundaryData`].

use crate::error::{EngineError, Result};
use brkit_core::{
    BoundaryData, ClassRange, ClassTable, GeneralCategory, Transition, TransitionTable,
    CATEGORY_COUNT, END_OF_TEXT, FAST_PATH_LEN,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// Annotated example definition, the character-cluster rules in miniature
pub const TEMPLATE: &str = include_str!("../tables/template.toml");

/// Key in `[classes.categories]` for unlisted categories
const DEFAULT_KEY: &str = "default";

/// Root of a table definition file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition {
    /// Name and description
    pub metadata: Metadata,
    /// Character classification
    pub classes: Classes,
    /// Left-to-right transition table
    pub forward: States,
    /// Right-to-left safe-point table
    pub backward: States,
}

/// Descriptive header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Name given to the built [`BoundaryData`] and used as its cache key
    pub name: String,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Class names and how characters map onto them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classes {
    /// Column names; the last one is the end-of-text class
    pub names: Vec<String>,
    /// Category abbreviation (or `default`) to class name
    #[serde(default)]
    pub categories: BTreeMap<String, String>,
    /// Ranges overriding the category mapping
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exceptions: Vec<Exception>,
    /// Character to class name, applied to the fast path only
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub ascii: BTreeMap<String, String>,
}

/// Range of characters overriding the category mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exception {
    /// First character, literal or `U+XXXX`
    pub start: String,
    /// Last character, inclusive; defaults to `start`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// Class name
    pub class: String,
}

/// Transition rows for states 1, 2, ...
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct States {
    /// One row per state, one cell per class
    pub rows: Vec<Vec<String>>,
}

impl TableDefinition {
    /// Parse a definition from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a definition file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            EngineError::IoError(format!("Failed to read table definition {path:?}: {e}"))
        })?;
        log::debug!("loaded table definition from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Serialize back to TOML (comments are not preserved)
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The parsed [`TEMPLATE`]
    pub fn template() -> Result<Self> {
        Self::from_toml_str(TEMPLATE)
    }

    /// Resolve names and validate into [`BoundaryData`]
    pub fn into_data(self) -> Result<BoundaryData> {
        let columns = self.classes.names.len();
        let index = self.classes.index()?;
        let end_of_text = (columns - 1) as u8;

        let mut base = [self.classes.default_class(&index)?; CATEGORY_COUNT];
        for (key, class) in &self.classes.categories {
            if key == DEFAULT_KEY {
                continue;
            }
            let category: GeneralCategory = key.parse().map_err(EngineError::Definition)?;
            base[category.index()] = lookup_class(&index, class)?;
        }

        let mut exceptions = Vec::with_capacity(self.classes.exceptions.len() + 1);
        for exception in &self.classes.exceptions {
            let start = parse_char(&exception.start)?;
            let end = match &exception.end {
                Some(end) => parse_char(end)?,
                None => start,
            };
            exceptions.push(ClassRange::span(
                start,
                end,
                lookup_class(&index, &exception.class)?,
            ));
        }
        if !exceptions.iter().any(|r| r.contains(END_OF_TEXT)) {
            exceptions.push(ClassRange::single(END_OF_TEXT, end_of_text));
        }
        exceptions.sort_by_key(|r| r.start);

        let classes = if self.classes.ascii.is_empty() {
            ClassTable::derived(base, exceptions)?
        } else {
            let derived = ClassTable::derived(base, exceptions.clone())?;
            let mut fast = [0u8; FAST_PATH_LEN];
            for (cp, slot) in fast.iter_mut().enumerate() {
                *slot = derived.class_of(char::from(cp as u8));
            }
            for (key, class) in &self.classes.ascii {
                let ch = parse_char(key)?;
                let cp = ch as usize;
                if cp >= FAST_PATH_LEN {
                    return Err(EngineError::Definition(format!(
                        "ascii override '{key}' is above U+00FF"
                    )));
                }
                fast[cp] = lookup_class(&index, class)?;
            }
            ClassTable::new(base, exceptions, fast)?
        };

        let forward = parse_states("forward", &self.forward, columns)?;
        let backward = parse_states("backward", &self.backward, columns)?;

        Ok(BoundaryData::new(
            self.metadata.name,
            classes,
            forward,
            backward,
        )?)
    }
}

impl Classes {
    fn index(&self) -> Result<HashMap<&str, u8>> {
        if self.names.is_empty() {
            return Err(EngineError::Definition("no classes defined".to_string()));
        }
        if self.names.len() > 127 {
            return Err(EngineError::Definition(format!(
                "{} classes defined, at most 127 are allowed",
                self.names.len()
            )));
        }

        let mut index = HashMap::with_capacity(self.names.len());
        for (i, name) in self.names.iter().enumerate() {
            if index.insert(name.as_str(), i as u8).is_some() {
                return Err(EngineError::Definition(format!(
                    "class '{name}' is defined twice"
                )));
            }
        }
        Ok(index)
    }

    fn default_class(&self, index: &HashMap<&str, u8>) -> Result<u8> {
        match self.categories.get(DEFAULT_KEY) {
            Some(class) => lookup_class(index, class),
            None => Ok(0),
        }
    }
}

fn lookup_class(index: &HashMap<&str, u8>, name: &str) -> Result<u8> {
    index
        .get(name)
        .copied()
        .ok_or_else(|| EngineError::Definition(format!("unknown class '{name}'")))
}

/// A single literal character or `U+XXXX`
fn parse_char(spec: &str) -> Result<char> {
    let mut chars = spec.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Ok(ch);
    }

    spec.strip_prefix("U+")
        .or_else(|| spec.strip_prefix("u+"))
        .and_then(|hex| u32::from_str_radix(hex, 16).ok())
        .and_then(char::from_u32)
        .ok_or_else(|| {
            EngineError::Definition(format!(
                "'{spec}' is neither a single character nor U+XXXX"
            ))
        })
}

fn parse_cell(cell: &str) -> Option<Transition> {
    let (marked, target) = match cell.strip_prefix('*') {
        Some(rest) => (true, rest),
        None => (false, cell),
    };
    let state = if target == "stop" {
        0
    } else {
        target.parse::<u8>().ok().filter(|s| *s < 128)?
    };
    Some(if marked {
        Transition::marked(state)
    } else {
        Transition::to(state)
    })
}

fn parse_states(table: &str, states: &States, columns: usize) -> Result<TransitionTable> {
    // Row 0 is the end state
    let mut cells = vec![Transition::STOP; columns];
    for (i, row) in states.rows.iter().enumerate() {
        let state = i + 1;
        if row.len() != columns {
            return Err(EngineError::Definition(format!(
                "{table} state {state} has {} cells, expected {columns}",
                row.len()
            )));
        }
        for (column, cell) in row.iter().enumerate() {
            let transition = parse_cell(cell.trim()).ok_or_else(|| {
                EngineError::Definition(format!(
                    "{table} state {state}, column {column}: bad cell '{cell}'"
                ))
            })?;
            cells.push(transition);
        }
    }

    TransitionTable::from_transitions(columns, cells).map_err(|e| {
        EngineError::Definition(format!("{table} table: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use brkit_core::BoundaryScanner;
    use std::sync::Arc;

    fn template() -> TableDefinition {
        TableDefinition::template().unwrap()
    }

    fn expect_definition_error(def: TableDefinition, needle: &str) {
        match def.into_data() {
            Err(EngineError::Definition(msg)) => {
                assert!(msg.contains(needle), "'{msg}' does not mention '{needle}'")
            }
            other => panic!("expected definition error, got {other:?}"),
        }
    }

    #[test]
    fn test_template_builds_and_scans() {
        let data = Arc::new(template().into_data().unwrap());
        assert_eq!(data.name(), "cluster");
        assert_eq!(data.forward().columns(), 5);
        assert_eq!(data.end_of_text_class(), 4);

        let mut scanner = BoundaryScanner::with_text(data, "e\u{0301}\r\nx");
        assert_eq!(scanner.boundaries().collect::<Vec<_>>(), vec![0, 2, 4, 5]);
    }

    #[test]
    fn test_parse_cells() {
        assert_eq!(parse_cell("stop"), Some(Transition::STOP));
        assert_eq!(parse_cell("*stop"), Some(Transition::MARKED_STOP));
        assert_eq!(parse_cell("*12"), Some(Transition::marked(12)));
        assert_eq!(parse_cell("3"), Some(Transition::to(3)));
        assert_eq!(parse_cell("**3"), None);
        assert_eq!(parse_cell("200"), None);
        assert_eq!(parse_cell("go"), None);
    }

    #[test]
    fn test_parse_chars() {
        assert_eq!(parse_char("a").unwrap(), 'a');
        assert_eq!(parse_char("U+0301").unwrap(), '\u{0301}');
        assert_eq!(parse_char("\u{3042}").unwrap(), '\u{3042}');
        assert!(parse_char("U+D800").is_err());
        assert!(parse_char("ab").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let def = template();
        let text = def.to_toml_string().unwrap();
        assert_eq!(TableDefinition::from_toml_str(&text).unwrap(), def);
    }

    #[test]
    fn test_ascii_override() {
        let mut def = template();
        def.classes
            .ascii
            .insert("U+0009".to_string(), "mark".to_string());
        let data = def.into_data().unwrap();
        assert_eq!(data.class_of('\t'), 0);
        assert_eq!(data.class_of('a'), 1);
    }

    #[test]
    fn test_rejects_ragged_row() {
        let mut def = template();
        def.forward.rows[1].pop();
        expect_definition_error(def, "forward state 2 has 4 cells");
    }

    #[test]
    fn test_rejects_unknown_class() {
        let mut def = template();
        def.classes
            .categories
            .insert("Zs".to_string(), "space".to_string());
        expect_definition_error(def, "unknown class 'space'");
    }

    #[test]
    fn test_rejects_unknown_category() {
        let mut def = template();
        def.classes
            .categories
            .insert("Xx".to_string(), "base".to_string());
        expect_definition_error(def, "Xx");
    }

    #[test]
    fn test_rejects_duplicate_class() {
        let mut def = template();
        def.classes.names[0] = "base".to_string();
        expect_definition_error(def, "defined twice");
    }

    #[test]
    fn test_rejects_dangling_state() {
        let mut def = template();
        def.backward.rows[0][0] = "*9".to_string();
        expect_definition_error(def, "backward table");
    }

    #[test]
    fn test_rejects_bad_cell() {
        let mut def = template();
        def.forward.rows[0][2] = "next".to_string();
        expect_definition_error(def, "forward state 1, column 2: bad cell 'next'");
    }

    #[test]
    fn test_overlapping_exceptions_are_table_errors() {
        let mut def = template();
        def.classes.exceptions.push(Exception {
            start: "U+0009".to_string(),
            end: Some("U+000B".to_string()),
            class: "base".to_string(),
        });
        assert!(matches!(def.into_data(), Err(EngineError::Table(_))));
    }
}
