//! Errors raised while loading or running a program.

use std::fmt;

/// Failures detected before any instruction executes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// Loops were not balanced; a matching `[` or `]` was not found.
    #[error("Unmatched bracket {kind} at instruction {ip}")]
    UnmatchedBracket { ip: usize, kind: UnmatchedBracketKind },

    /// Strict loading met a character outside `><+-.,[]` that is not whitespace.
    #[error("Unknown instruction '{ch}' at offset {offset}")]
    UnknownInstruction { ch: char, offset: usize },
}

/// Which side of the loop was unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmatchedBracketKind {
    Open,
    Close,
}

impl fmt::Display for UnmatchedBracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnmatchedBracketKind::Open => write!(f, "'['"),
            UnmatchedBracketKind::Close => write!(f, "']'"),
        }
    }
}

/// Failures raised by the engine while a program runs.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// `,` was reached but the input source had no character left.
    #[error("Input exhausted at instruction {ip}")]
    InputExhausted { ip: usize },

    /// `,` read a character whose code point does not fit in a cell.
    #[error("Input character '{ch}' does not fit in a cell at instruction {ip}")]
    InputOutOfRange { ip: usize, ch: char },

    /// The jump table has no target for the bracket at `ip`.
    #[error("Jump table has no entry for the bracket at instruction {ip}")]
    CorruptJumpTable { ip: usize },

    /// An underlying I/O error occurred in the I/O port.
    #[error("I/O error at instruction {ip}: {source}")]
    Io {
        ip: usize,
        #[source]
        source: std::io::Error,
    },

    /// The engine already failed and cannot be resumed.
    #[error("Engine has already failed")]
    Finished,
}

impl RuntimeError {
    /// Instruction position the error was raised at, when there is one.
    pub fn ip(&self) -> Option<usize> {
        match self {
            RuntimeError::InputExhausted { ip }
            | RuntimeError::InputOutOfRange { ip, .. }
            | RuntimeError::CorruptJumpTable { ip }
            | RuntimeError::Io { ip, .. } => Some(*ip),
            RuntimeError::Finished => None,
        }
    }
}

/// Any failure from loading through execution.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
