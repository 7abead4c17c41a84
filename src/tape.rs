//! Unbounded memory tape addressed by signed integers.

/// A tape that reads zero everywhere until a cell is written.
///
/// Cells at `addr >= 0` live in `right[addr]`; cells at `addr < 0` live in
/// `left[-addr - 1]`. Both halves grow on first write, so reading far away
/// from the origin never allocates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tape {
    right: Vec<u8>,
    left: Vec<u8>,
}

enum Slot {
    Right(usize),
    Left(usize),
}

fn slot(addr: isize) -> Slot {
    if addr >= 0 {
        Slot::Right(addr as usize)
    } else {
        // -(addr + 1) cannot overflow, even for isize::MIN
        Slot::Left((-(addr + 1)) as usize)
    }
}

impl Tape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of the cell at `addr`; never-written cells read 0.
    pub fn get(&self, addr: isize) -> u8 {
        match slot(addr) {
            Slot::Right(i) => self.right.get(i).copied().unwrap_or(0),
            Slot::Left(i) => self.left.get(i).copied().unwrap_or(0),
        }
    }

    /// Mutable access to the cell at `addr`, materializing it if needed.
    pub fn get_mut(&mut self, addr: isize) -> &mut u8 {
        let (half, i) = match slot(addr) {
            Slot::Right(i) => (&mut self.right, i),
            Slot::Left(i) => (&mut self.left, i),
        };
        if i >= half.len() {
            half.resize(i + 1, 0);
        }
        &mut half[i]
    }

    pub fn set(&mut self, addr: isize, value: u8) {
        *self.get_mut(addr) = value;
    }

    /// Lowest and highest address materialized so far, if any.
    pub fn touched(&self) -> Option<(isize, isize)> {
        let low = if !self.left.is_empty() {
            -(self.left.len() as isize)
        } else if !self.right.is_empty() {
            0
        } else {
            return None;
        };
        let high = if !self.right.is_empty() {
            self.right.len() as isize - 1
        } else {
            -1
        };
        Some((low, high))
    }
}
