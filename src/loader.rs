//! Turns raw program text into a dense instruction sequence.

use std::fmt;
use std::ops::Deref;

use crate::error::LoadError;
use crate::instruction::Instruction;

/// Instructions in program order, with every comment character stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructionSequence {
    ops: Vec<Instruction>,
}

impl InstructionSequence {
    pub fn new(ops: Vec<Instruction>) -> Self {
        Self { ops }
    }

    pub fn as_slice(&self) -> &[Instruction] {
        &self.ops
    }
}

impl Deref for InstructionSequence {
    type Target = [Instruction];

    fn deref(&self) -> &Self::Target {
        &self.ops
    }
}

impl FromIterator<Instruction> for InstructionSequence {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self { ops: iter.into_iter().collect() }
    }
}

/// Renders the canonical symbol string, e.g. `++[-]`.
impl fmt::Display for InstructionSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.ops {
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

/// Keep only the characters of `source` that are instructions.
///
/// Anything else is treated as a comment and dropped without complaint.
pub fn load(source: &str) -> InstructionSequence {
    source.chars().filter_map(Instruction::from_char).collect()
}

/// Like [`load`], but rejects any character that is neither an instruction
/// nor whitespace.
///
/// The reported offset is a char index into `source`.
pub fn load_strict(source: &str) -> Result<InstructionSequence, LoadError> {
    let mut ops = Vec::new();
    for (offset, ch) in source.chars().enumerate() {
        match Instruction::try_from(ch) {
            Ok(op) => ops.push(op),
            Err(ch) if ch.is_whitespace() => {}
            Err(ch) => return Err(LoadError::UnknownInstruction { ch, offset }),
        }
    }
    Ok(InstructionSequence::new(ops))
}
