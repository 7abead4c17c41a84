//! Bracket matching.

use crate::error::{LoadError, UnmatchedBracketKind};
use crate::instruction::Instruction;
use crate::loader::InstructionSequence;

/// Matching bracket positions for O(1) loop jumps.
///
/// `targets[i]` holds the matching index for the `[` or `]` at index `i`;
/// every other position is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JumpTable {
    targets: Vec<Option<usize>>,
}

impl JumpTable {
    /// Position of the bracket matching the one at `pos`.
    pub fn get(&self, pos: usize) -> Option<usize> {
        self.targets.get(pos).copied().flatten()
    }

    /// Length of the sequence this table was built for.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Matched pairs as `(open, close)`, ordered by the open position.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.targets
            .iter()
            .enumerate()
            .filter_map(|(i, t)| t.filter(|&j| j > i).map(|j| (i, j)))
    }
}

/// Pair every `[` with its `]` in a single left-to-right scan.
pub fn resolve(seq: &InstructionSequence) -> Result<JumpTable, LoadError> {
    let mut targets: Vec<Option<usize>> = vec![None; seq.len()];
    let mut stack: Vec<usize> = Vec::new();

    for (i, op) in seq.iter().enumerate() {
        match op {
            Instruction::LoopOpen => stack.push(i),
            Instruction::LoopClose => {
                let Some(open) = stack.pop() else {
                    return Err(LoadError::UnmatchedBracket {
                        ip: i,
                        kind: UnmatchedBracketKind::Close,
                    });
                };
                targets[open] = Some(i);
                targets[i] = Some(open);
            }
            _ => {}
        }
    }

    if let Some(open) = stack.last().copied() {
        return Err(LoadError::UnmatchedBracket {
            ip: open,
            kind: UnmatchedBracketKind::Open,
        });
    }

    Ok(JumpTable { targets })
}
