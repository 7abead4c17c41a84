//! A loaded, validated program ready to run any number of times.

use tracing::debug;

use crate::error::LoadError;
use crate::jump::{self, JumpTable};
use crate::loader::{self, InstructionSequence};

/// Instruction sequence plus its jump table.
///
/// Both halves are fixed once loaded, so one `Program` can be shared by
/// reference (or `Arc`) between independent engine runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    instructions: InstructionSequence,
    jumps: JumpTable,
}

impl Program {
    /// Filter `source` and match its brackets.
    pub fn load(source: &str) -> Result<Self, LoadError> {
        Self::from_instructions(loader::load(source))
    }

    /// Like [`Program::load`], but rejects comment characters.
    pub fn load_strict(source: &str) -> Result<Self, LoadError> {
        Self::from_instructions(loader::load_strict(source)?)
    }

    pub fn from_instructions(instructions: InstructionSequence) -> Result<Self, LoadError> {
        let jumps = jump::resolve(&instructions)?;
        debug!(
            instructions = instructions.len(),
            loops = jumps.pairs().count(),
            "program loaded"
        );
        Ok(Self { instructions, jumps })
    }

    pub fn instructions(&self) -> &InstructionSequence {
        &self.instructions
    }

    pub fn jumps(&self) -> &JumpTable {
        &self.jumps
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnmatchedBracketKind;

    #[test]
    fn load_filters_then_resolves() {
        let program = Program::load("a [ b - c ] d").expect("balanced");
        assert_eq!(program.instructions().to_string(), "[-]");
        assert_eq!(program.jumps().get(0), Some(2));
        assert_eq!(program.len(), 3);
    }

    #[test]
    fn unbalanced_source_never_becomes_a_program() {
        assert_eq!(
            Program::load("[+").unwrap_err(),
            LoadError::UnmatchedBracket { ip: 0, kind: UnmatchedBracketKind::Open }
        );
    }

    #[test]
    fn strict_load_reports_the_first_comment_character() {
        assert!(matches!(
            Program::load_strict("+ x ]"),
            Err(LoadError::UnknownInstruction { ch: 'x', offset: 2 })
        ));
    }

    #[test]
    fn empty_source_is_an_empty_program() {
        let program = Program::load("").expect("nothing to match");
        assert!(program.is_empty());
        assert!(program.jumps().is_empty());
    }
}
