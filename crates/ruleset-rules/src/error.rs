//! Error types for the rule compiler.

use std::path::PathBuf;

use thiserror::Error;

use crate::rule::FileId;

/// Why a single line failed to parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("unknown rule type: {0}")]
    UnknownType(String),

    #[error("invalid attribute: {0}")]
    InvalidAttribute(String),

    #[error("empty rule")]
    EmptyRule,

    #[error("empty rule value")]
    EmptyValue,

    #[error("empty inclusion target")]
    EmptyInclusion,
}

/// Errors that abort a compilation.
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("{file}:{line}: {kind}")]
    Parse {
        file: FileId,
        line: usize,
        kind: ParseErrorKind,
    },

    #[error("{file}: included list not found: {directive}")]
    UnresolvedInclusion { file: FileId, directive: String },

    #[error("cyclic inclusion: {}", format_chain(.chain))]
    CyclicInclusion { chain: Vec<FileId> },

    #[error("duplicate list name: {id}")]
    DuplicateFile { id: FileId },

    #[error("unknown list: {id}")]
    UnknownFile { id: FileId },

    #[error("list not resolved yet: {id}")]
    NotResolved { id: FileId },

    #[error("io error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

fn format_chain(chain: &[FileId]) -> String {
    chain
        .iter()
        .map(FileId::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_message_lists_chain() {
        let err = CompileError::CyclicInclusion {
            chain: vec![FileId::new("a"), FileId::new("b"), FileId::new("a")],
        };
        assert_eq!(err.to_string(), "cyclic inclusion: A -> B -> A");
    }

    #[test]
    fn parse_message_has_location() {
        let err = CompileError::Parse {
            file: FileId::new("cn"),
            line: 7,
            kind: ParseErrorKind::UnknownType("host".into()),
        };
        assert_eq!(err.to_string(), "CN:7: unknown rule type: host");
    }
}
