use std::io::{self, Write};

use crate::error::{LoadError, RuntimeError};

/// Pretty-print a load error with caret positioning into `code`.
/// If `program` is `Some("bf")`, prefix messages with "bf: ...".
pub fn print_load_error(program: Option<&str>, code: &str, err: &LoadError) {
    match err {
        LoadError::UnmatchedBracket { ip, kind } => {
            let msg = prefix_program(program, &format!("Parse error: unmatched bracket {kind}"));
            print_error_at_instruction(&msg, code, *ip);
        }
        LoadError::UnknownInstruction { ch, offset } => {
            let msg = prefix_program(program, &format!("Parse error: unknown instruction '{ch}'"));
            print_error_with_context(&msg, code, *offset);
        }
    }
}

/// Pretty-print a runtime error, pointing at the failing instruction when known.
pub fn print_runtime_error(program: Option<&str>, code: &str, err: &RuntimeError) {
    let msg = match err {
        RuntimeError::InputExhausted { .. } => "Runtime error: input exhausted".to_string(),
        RuntimeError::InputOutOfRange { ch, .. } => {
            format!("Runtime error: input character '{ch}' (U+{:04X}) is above U+00FF", u32::from(*ch))
        }
        RuntimeError::CorruptJumpTable { .. } => "Runtime error: no jump target for bracket".to_string(),
        RuntimeError::Io { source, .. } => format!("I/O error: {source}"),
        RuntimeError::Finished => "Runtime error: engine has already failed".to_string(),
    };
    let msg = prefix_program(program, &msg);

    match err.ip() {
        Some(ip) => print_error_at_instruction(&msg, code, ip),
        None => {
            eprintln!("{msg}");
            let _ = io::stderr().flush();
        }
    }
}

fn prefix_program(program: Option<&str>, msg: &str) -> String {
    match program {
        Some(p) => format!("{p}: {msg}"),
        None => msg.to_string(),
    }
}

fn print_error_at_instruction(msg: &str, code: &str, ip: usize) {
    match instruction_offset(code, ip) {
        Some(offset) => print_error_with_context(&format!("{msg} (instruction {ip})"), code, offset),
        None => {
            eprintln!("{msg} at instruction {ip}");
            let _ = io::stderr().flush();
        }
    }
}

/// Char index in `code` of the `ip`-th instruction character.
///
/// Instruction positions count only `><+-.,[]`, so comments have to be
/// skipped to find where the instruction sits in the source text.
pub fn instruction_offset(code: &str, ip: usize) -> Option<usize> {
    code.chars()
        .enumerate()
        .filter(|(_, ch)| matches!(ch, '>' | '<' | '+' | '-' | '.' | ',' | '[' | ']'))
        .nth(ip)
        .map(|(offset, _)| offset)
}

/// 1-based line and column of the char at `offset`.
pub fn line_col(code: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;
    for ch in code.chars().take(offset) {
        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}

/// Print a concise error with its source line and a caret under the
/// offending char, windowed so long lines stay readable.
pub fn print_error_with_context(prefix: &str, code: &str, offset: usize) {
    let (line, col) = line_col(code, offset);
    eprintln!("{prefix} at line {line}, column {col}");

    // Show a short window around the position for context
    const WINDOW_CHARS: usize = 32;

    let Some(text) = code.lines().nth(line - 1) else {
        let _ = io::stderr().flush();
        return;
    };
    let pos = col - 1;
    let start = pos.saturating_sub(WINDOW_CHARS);
    let slice: String = text.chars().skip(start).take(pos - start + WINDOW_CHARS + 1).collect();

    eprintln!("  {}", slice);

    // Caret under the exact position
    let underline = format!("{}^", " ".repeat(pos - start));
    eprintln!("  {}", underline);
    let _ = io::stderr().flush();
}
