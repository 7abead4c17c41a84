//! The interpreter loop.

use std::time::Instant;

use tracing::debug;

use crate::error::RuntimeError;
use crate::instruction::Instruction;
use crate::io::IoPort;
use crate::jump::JumpTable;
use crate::loader::InstructionSequence;
use crate::program::Program;
use crate::settings::{EofPolicy, Settings};
use crate::tape::Tape;

/// Where an engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Halted,
    Failed,
}

/// One run of a program: its own tape, cursor and program counter.
///
/// The instructions and jump table are borrowed, so any number of engines
/// can run the same loaded program side by side.
#[derive(Debug)]
pub struct Engine<'p> {
    instructions: &'p [Instruction],
    jumps: &'p JumpTable,
    settings: Settings,
    tape: Tape,
    cursor: isize,
    pc: usize,
    steps: u64,
    state: State,
}

impl<'p> Engine<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self::from_parts(program.instructions(), program.jumps())
    }

    /// Build an engine from a sequence and a table resolved separately.
    ///
    /// A table that was not built from `instructions` surfaces as
    /// [`RuntimeError::CorruptJumpTable`] when a bracket lacks an entry.
    pub fn from_parts(instructions: &'p InstructionSequence, jumps: &'p JumpTable) -> Self {
        Self {
            instructions: instructions.as_slice(),
            jumps,
            settings: Settings::default(),
            tape: Tape::new(),
            cursor: 0,
            pc: 0,
            steps: 0,
            state: State::Running,
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn cursor(&self) -> isize {
        self.cursor
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Number of instructions executed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Execute until the program counter runs off the end.
    ///
    /// There is no step limit: a program that loops forever never returns.
    pub fn run<P: IoPort>(&mut self, mut io: P) -> Result<(), RuntimeError> {
        match self.state {
            State::Halted => return Ok(()),
            State::Failed => return Err(RuntimeError::Finished),
            State::Running => {}
        }

        let started = Instant::now();
        let result = self.run_loop(&mut io);

        match result {
            Ok(()) => {
                self.state = State::Halted;
                io.flush().map_err(|source| RuntimeError::Io { ip: self.pc, source })?;
                debug!(
                    steps = self.steps,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "program halted"
                );
                Ok(())
            }
            Err(err) => {
                self.state = State::Failed;
                // keep whatever the program printed before failing
                let _ = io.flush();
                debug!(steps = self.steps, error = %err, "program failed");
                Err(err)
            }
        }
    }

    fn run_loop<P: IoPort>(&mut self, io: &mut P) -> Result<(), RuntimeError> {
        let code_len = self.instructions.len();

        while self.pc < code_len {
            let ip = self.pc;

            match self.instructions[ip] {
                Instruction::MoveRight => self.cursor += 1,
                Instruction::MoveLeft => self.cursor -= 1,
                Instruction::Increment => {
                    let cell = self.tape.get_mut(self.cursor);
                    *cell = cell.wrapping_add(1);
                }
                Instruction::Decrement => {
                    let cell = self.tape.get_mut(self.cursor);
                    *cell = cell.wrapping_sub(1);
                }
                Instruction::Output => {
                    io.output(self.tape.get(self.cursor))
                        .map_err(|source| RuntimeError::Io { ip, source })?;
                }
                Instruction::Input => {
                    let ch = io.input().map_err(|source| RuntimeError::Io { ip, source })?;
                    let value = match (ch, self.settings.eof) {
                        // a cell holds the character's code point
                        (Some(ch), _) => {
                            u8::try_from(u32::from(ch)).map_err(|_| RuntimeError::InputOutOfRange { ip, ch })?
                        }
                        (None, EofPolicy::Zero) => 0,
                        (None, EofPolicy::Error) => {
                            return Err(RuntimeError::InputExhausted { ip });
                        }
                    };
                    self.tape.set(self.cursor, value);
                }
                Instruction::LoopOpen => {
                    // Cell is 0: skip past the matching ']'
                    if self.tape.get(self.cursor) == 0 {
                        self.pc = self.jump_target(ip)?;
                    }
                }
                Instruction::LoopClose => {
                    // Cell is non-zero: go back to just after the matching '['
                    if self.tape.get(self.cursor) != 0 {
                        self.pc = self.jump_target(ip)?;
                    }
                }
            }

            self.steps += 1;
            self.pc += 1;
        }

        Ok(())
    }

    fn jump_target(&self, ip: usize) -> Result<usize, RuntimeError> {
        self.jumps.get(ip).ok_or(RuntimeError::CorruptJumpTable { ip })
    }
}

/// Run `instructions` against a fresh tape with default settings.
pub fn execute<P: IoPort>(
    instructions: &InstructionSequence,
    jumps: &JumpTable,
    io: P,
) -> Result<(), RuntimeError> {
    Engine::from_parts(instructions, jumps).run(io)
}
