//! Traceback storage for the global aligner
//!
//! One byte per DP cell: the low bits say which state produced the best
//! score of the cell, the flag bits say whether the gap states entering the
//! cell extended an existing gap or opened a new one.

use crate::core::error::{AlignError, Result};

/// Predecessor of the best score in a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracebackDir {
    /// Diagonal (substitution)
    Diag,
    /// Up (residue of sequence 1 against a gap)
    Up,
    /// Left (residue of sequence 2 against a gap)
    Left,
}

const DIR_MASK: u8 = 0x03;
const DIR_DIAG: u8 = 0x00;
const DIR_UP: u8 = 0x01;
const DIR_LEFT: u8 = 0x02;
/// Vertical gap at this cell continues the one above
const EXTEND_UP: u8 = 0x10;
/// Horizontal gap at this cell continues the one to the left
const EXTEND_LEFT: u8 = 0x20;

/// Dense `(rows x cols)` traceback bytes, reused across alignments.
#[derive(Debug, Default)]
pub struct TracebackMatrix {
    data: Vec<u8>,
    cols: usize,
}

impl TracebackMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resize to `rows x cols` and clear every cell to `Diag`.
    pub fn reset(&mut self, rows: usize, cols: usize) -> Result<()> {
        let cells = rows
            .checked_mul(cols)
            .ok_or(AlignError::MemoryLimit { requested: usize::MAX })?;
        self.data.clear();
        self.data
            .try_reserve(cells)
            .map_err(|_| AlignError::MemoryLimit { requested: cells })?;
        self.data.resize(cells, 0);
        self.cols = cols;
        Ok(())
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> u8 {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> TracebackDir {
        match self.at(row, col) & DIR_MASK {
            DIR_UP => TracebackDir::Up,
            DIR_LEFT => TracebackDir::Left,
            _ => TracebackDir::Diag,
        }
    }

    #[inline]
    pub fn set(
        &mut self,
        row: usize,
        col: usize,
        dir: TracebackDir,
        extend_up: bool,
        extend_left: bool,
    ) {
        let mut byte = match dir {
            TracebackDir::Diag => DIR_DIAG,
            TracebackDir::Up => DIR_UP,
            TracebackDir::Left => DIR_LEFT,
        };
        if extend_up {
            byte |= EXTEND_UP;
        }
        if extend_left {
            byte |= EXTEND_LEFT;
        }
        self.data[row * self.cols + col] = byte;
    }

    #[inline]
    pub fn extends_up(&self, row: usize, col: usize) -> bool {
        self.at(row, col) & EXTEND_UP != 0
    }

    #[inline]
    pub fn extends_left(&self, row: usize, col: usize) -> bool {
        self.at(row, col) & EXTEND_LEFT != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traceback_matrix() {
        let mut matrix = TracebackMatrix::new();
        matrix.reset(5, 5).unwrap();
        matrix.set(2, 3, TracebackDir::Left, false, true);
        assert_eq!(matrix.get(2, 3), TracebackDir::Left);
        assert!(matrix.extends_left(2, 3));
        assert!(!matrix.extends_up(2, 3));
        assert_eq!(matrix.get(0, 0), TracebackDir::Diag);

        // a reset clears flags left over from the larger matrix
        matrix.set(1, 1, TracebackDir::Up, true, false);
        matrix.reset(2, 2).unwrap();
        assert_eq!(matrix.get(1, 1), TracebackDir::Diag);
        assert!(!matrix.extends_up(1, 1));
    }
}
