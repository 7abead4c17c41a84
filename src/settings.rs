//! Run-time options for the engine.

/// What `,` does once the input source is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EofPolicy {
    /// Fail the run with `RuntimeError::InputExhausted`.
    #[default]
    Error,
    /// Store 0 in the current cell and keep going.
    Zero,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub eof: EofPolicy,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_eof(mut self, eof: EofPolicy) -> Self {
        self.eof = eof;
        self
    }
}
