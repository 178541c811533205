//! Error types raised while expanding archetype content.

use std::fmt;

use thiserror::Error;

use crate::archetype::Marker;

/// Errors surfaced by content lookups and table loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// A record referenced a feature code missing from the catalog.
    #[error("unknown feature code: {code:?}")]
    UnknownFeatureCode { code: String },

    /// One or more records reference codes missing from the catalog.
    #[error(
        "archetype table references {} unknown feature code(s): {}",
        .problems.len(),
        ProblemList(.problems)
    )]
    InconsistentTable { problems: Vec<TableProblem> },

    /// Embedded table data failed to parse.
    #[error("failed to parse archetype table: {0}")]
    Parse(String),
}

/// A single unknown-code reference found by table validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableProblem {
    pub archetype: String,
    pub marker: Marker,
    pub code: String,
}

impl fmt::Display for TableProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {:?}", self.archetype, self.marker, self.code)
    }
}

struct ProblemList<'a>(&'a [TableProblem]);

impl fmt::Display for ProblemList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, problem) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{problem}")?;
        }
        Ok(())
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_code_names_the_key() {
        let err = ContentError::UnknownFeatureCode {
            code: "zz9".to_string(),
        };
        assert_eq!(err.to_string(), "unknown feature code: \"zz9\"");
    }

    #[test]
    fn inconsistent_table_lists_every_problem() {
        let err = ContentError::InconsistentTable {
            problems: vec![
                TableProblem {
                    archetype: "Archer".to_string(),
                    marker: Marker::Replaces,
                    code: "xx".to_string(),
                },
                TableProblem {
                    archetype: "Cad".to_string(),
                    marker: Marker::Modifies,
                    code: "yy".to_string(),
                },
            ],
        };

        assert_eq!(
            err.to_string(),
            "archetype table references 2 unknown feature code(s): \
             Archer (replaces): \"xx\"; Cad (modifies): \"yy\""
        );
    }
}
