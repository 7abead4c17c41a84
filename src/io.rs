//! The boundary through which a running program reads and writes characters.

use std::collections::VecDeque;
use std::io::{self, Read, Write};

/// Character-level input and output for one engine run.
///
/// Both directions use the same unit: a cell value is a code point, written
/// out as that character and read back from one input character.
pub trait IoPort {
    /// Emit the character whose code point is `value`.
    fn output(&mut self, value: u8) -> io::Result<()>;

    /// Read one character. `Ok(None)` means the input source is exhausted.
    fn input(&mut self) -> io::Result<Option<char>>;

    /// Push any buffered output to its destination.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<P: IoPort + ?Sized> IoPort for &mut P {
    fn output(&mut self, value: u8) -> io::Result<()> {
        (**self).output(value)
    }

    fn input(&mut self) -> io::Result<Option<char>> {
        (**self).input()
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Encode `value` as the UTF-8 bytes of the char with that code point.
///
/// Values below 128 are a single byte; the rest become two bytes.
fn encode(value: u8, buf: &mut [u8; 4]) -> &[u8] {
    char::from(value).encode_utf8(buf).as_bytes()
}

/// Decode one UTF-8 character from `reader`.
///
/// Returns `Ok(None)` on a clean EOF. Malformed or truncated sequences are
/// `InvalidData` errors.
pub fn read_char<R: Read>(reader: &mut R) -> io::Result<Option<char>> {
    let mut buf = [0u8; 4];
    loop {
        match reader.read(&mut buf[..1]) {
            Ok(0) => return Ok(None),
            Ok(_) => break,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    let len = match buf[0] {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => return Err(invalid_utf8()),
    };
    reader.read_exact(&mut buf[1..len]).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => invalid_utf8(),
        _ => e,
    })?;

    let text = std::str::from_utf8(&buf[..len]).map_err(|_| invalid_utf8())?;
    Ok(text.chars().next())
}

fn invalid_utf8() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, "input is not valid UTF-8")
}

/// Process stdin/stdout.
///
/// The stdout handle is locked per write only, so a signal handler running
/// on another thread can still flush it.
#[derive(Debug, Default)]
pub struct StdPort;

impl StdPort {
    pub fn new() -> Self {
        StdPort
    }
}

impl IoPort for StdPort {
    fn output(&mut self, value: u8) -> io::Result<()> {
        let mut buf = [0u8; 4];
        io::stdout().write_all(encode(value, &mut buf))
    }

    fn input(&mut self) -> io::Result<Option<char>> {
        // flush so any prompt is visible before blocking
        io::stdout().flush()?;
        read_char(&mut io::stdin().lock())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// In-memory input queue and captured output.
#[derive(Debug, Clone, Default)]
pub struct BufferPort {
    input: VecDeque<char>,
    output: Vec<u8>,
}

impl BufferPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// A port whose input yields `input` character by character, then runs dry.
    pub fn with_input(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            output: Vec::new(),
        }
    }

    /// Bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.output
    }

    /// Output decoded as UTF-8, replacing invalid sequences.
    pub fn output_lossy(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    pub fn into_output(self) -> Vec<u8> {
        self.output
    }

    /// Input characters not yet consumed.
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl IoPort for BufferPort {
    fn output(&mut self, value: u8) -> io::Result<()> {
        let mut buf = [0u8; 4];
        self.output.extend_from_slice(encode(value, &mut buf));
        Ok(())
    }

    fn input(&mut self) -> io::Result<Option<char>> {
        Ok(self.input.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_port_yields_input_then_runs_dry() {
        let mut port = BufferPort::with_input("hé");
        assert_eq!(port.input().unwrap(), Some('h'));
        assert_eq!(port.remaining_input(), 1);
        assert_eq!(port.input().unwrap(), Some('é'));
        assert_eq!(port.input().unwrap(), None);
        assert_eq!(port.input().unwrap(), None);
    }

    #[test]
    fn ascii_output_is_one_byte() {
        let mut port = BufferPort::new();
        port.output(b'A').unwrap();
        port.output(2).unwrap();
        assert_eq!(port.written(), b"A\x02");
    }

    #[test]
    fn high_values_are_written_as_their_unicode_character() {
        let mut port = BufferPort::new();
        port.output(0xE9).unwrap();
        assert_eq!(port.output_lossy(), "é");
        assert_eq!(port.into_output(), vec![0xC3, 0xA9]);
    }

    #[test]
    fn read_char_decodes_multi_byte_characters() {
        let mut input = io::Cursor::new("aé€".as_bytes());
        assert_eq!(read_char(&mut input).unwrap(), Some('a'));
        assert_eq!(read_char(&mut input).unwrap(), Some('é'));
        assert_eq!(read_char(&mut input).unwrap(), Some('€'));
        assert_eq!(read_char(&mut input).unwrap(), None);
    }

    #[test]
    fn read_char_rejects_malformed_input() {
        let mut stray = io::Cursor::new(vec![0x80]);
        assert_eq!(read_char(&mut stray).unwrap_err().kind(), io::ErrorKind::InvalidData);

        // first byte of 'é' with nothing after it
        let mut truncated = io::Cursor::new(vec![0xC3]);
        assert_eq!(read_char(&mut truncated).unwrap_err().kind(), io::ErrorKind::InvalidData);
    }
}
