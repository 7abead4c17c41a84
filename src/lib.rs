//! A small Brainfuck interpreter with an unbounded tape.
//!
//! Features and behaviors:
//! - Every character outside `><+-.,[]` is a comment and is dropped at load time.
//! - Brackets are matched once, up front; an unmatched `[` or `]` fails the
//!   load and nothing runs.
//! - The tape has no edges: the cursor may move to any signed address and
//!   every cell starts at 0.
//! - Cells hold a byte; `+` and `-` wrap around.
//! - `.` writes the character whose code point is the current cell.
//! - `,` reads one character and stores its code point. Characters above
//!   U+00FF do not fit in a cell and fail the run; exhausted input fails the
//!   run unless [`EofPolicy::Zero`] is selected.
//!
//! Quick start:
//!
//! ```
//! use sparse_bf::{BufferPort, Engine, Program};
//!
//! let program = Program::load("++++++++[>++++++++<-]>+.").expect("balanced brackets");
//! let mut out = BufferPort::new();
//! Engine::new(&program).run(&mut out).expect("program should run");
//! assert_eq!(out.output_lossy(), "A");
//! ```

pub mod cli_util;
pub mod engine;
pub mod error;
pub mod instruction;
pub mod io;
pub mod jump;
pub mod loader;
pub mod logging;
pub mod program;
pub mod settings;
pub mod tape;

pub use engine::{execute, Engine, State};
pub use error::{Error, LoadError, RuntimeError, UnmatchedBracketKind};
pub use instruction::Instruction;
pub use io::{BufferPort, IoPort, StdPort};
pub use jump::{resolve, JumpTable};
pub use loader::{load, load_strict, InstructionSequence};
pub use program::Program;
pub use settings::{EofPolicy, Settings};
pub use tape::Tape;

/// Load `source` and run it once against `io` with `settings`.
pub fn run_source<P: IoPort>(source: &str, settings: Settings, io: P) -> Result<(), Error> {
    let program = Program::load(source)?;
    Engine::new(&program).with_settings(settings).run(io)?;
    Ok(())
}
