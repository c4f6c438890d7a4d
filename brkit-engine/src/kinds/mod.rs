//! Boundary kinds and their built-in tables
//!
//! Each submodule holds one kind's class mapping and transition tables as
//! `const` data and a `build()` that validates them into a [`BoundaryData`].

mod character;
mod line;
mod sentence;
mod word;

use crate::error::{EngineError, Result};
use brkit_core::{BoundaryData, Transition};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const S: Transition = Transition::STOP;
const MS: Transition = Transition::MARKED_STOP;

const fn m(state: u8) -> Transition {
    Transition::marked(state)
}

const fn go(state: u8) -> Transition {
    Transition::to(state)
}

/// Which segmentation rule a scanner applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryKind {
    /// User-perceived characters: base plus combining marks, CR LF, Hangul
    /// jamo syllables
    Character,
    /// Words, numbers, whitespace runs and punctuation
    Word,
    /// Sentences
    Sentence,
    /// Legal line-wrap positions
    Line,
}

impl BoundaryKind {
    /// All built-in kinds
    pub const ALL: [BoundaryKind; 4] = [
        BoundaryKind::Character,
        BoundaryKind::Word,
        BoundaryKind::Sentence,
        BoundaryKind::Line,
    ];

    /// Canonical lowercase name, also used as the cache key
    pub fn name(&self) -> &'static str {
        match self {
            BoundaryKind::Character => "character",
            BoundaryKind::Word => "word",
            BoundaryKind::Sentence => "sentence",
            BoundaryKind::Line => "line",
        }
    }

    /// Validate this kind's built-in tables into [`BoundaryData`]
    pub fn build_data(&self) -> Result<BoundaryData> {
        let built = match self {
            BoundaryKind::Character => character::build(),
            BoundaryKind::Word => word::build(),
            BoundaryKind::Sentence => sentence::build(),
            BoundaryKind::Line => line::build(),
        };
        built.map_err(|source| EngineError::BuiltinData {
            kind: self.name(),
            source,
        })
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoundaryKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "char" | "character" => Ok(BoundaryKind::Character),
            "word" => Ok(BoundaryKind::Word),
            "sentence" => Ok(BoundaryKind::Sentence),
            "line" => Ok(BoundaryKind::Line),
            _ => Err(EngineError::UnknownKind {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_validates() {
        for kind in BoundaryKind::ALL {
            let data = kind.build_data().unwrap();
            assert_eq!(data.name(), kind.name());
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("char".parse::<BoundaryKind>().unwrap(), BoundaryKind::Character);
        assert_eq!("Sentence".parse::<BoundaryKind>().unwrap(), BoundaryKind::Sentence);
        assert!(matches!(
            "paragraph".parse::<BoundaryKind>(),
            Err(EngineError::UnknownKind { .. })
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for kind in BoundaryKind::ALL {
            assert_eq!(kind.to_string().parse::<BoundaryKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&BoundaryKind::Line).unwrap();
        assert_eq!(json, "\"line\"");
        let kind: BoundaryKind = serde_json::from_str("\"word\"").unwrap();
        assert_eq!(kind, BoundaryKind::Word);
    }
}
