//! Pooled traceback state bytes
//!
//! Reference: ncbi-blast/c++/src/algo/blast/core/blast_gapalign.c
//!            GapStateArrayStruct, s_GapGetState, s_GapPurgeState
//!
//! The x-drop DP records one state byte per computed cell. Rather than
//! allocate a row per DP row per extension, rows are carved out of a chain
//! of large buffers that survive across extensions and are only marked
//! empty by `reset`.

use crate::core::error::{AlignError, Result};

/// One pooled buffer. `next` links the chain by index into the pool arena.
#[derive(Debug, Clone)]
pub struct GapStateArray {
    pub length: usize,
    pub used: usize,
    pub state_array: Vec<u8>,
    pub next: Option<usize>,
}

impl GapStateArray {
    fn free(&self) -> usize {
        self.length - self.used
    }
}

/// Handle to a row carved out of a pool node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateRow {
    node: usize,
    offset: usize,
    len: usize,
}

impl StateRow {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Chain of state buffers owned by one aligner.
#[derive(Debug, Default)]
pub struct GapStateArrayPool {
    nodes: Vec<GapStateArray>,
    head: Option<usize>,
    tail: Option<usize>,
    /// Cap on total pooled bytes; `None` is bounded only by the allocator
    limit: Option<usize>,
}

impl GapStateArrayPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool that refuses to hold more than `bytes` in total.
    pub fn with_limit(bytes: usize) -> Self {
        Self { limit: Some(bytes), ..Self::default() }
    }

    /// Node indices in chain order
    fn chain(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.head, move |&i| self.nodes[i].next)
    }

    /// Zeroed row of `min_size` bytes from the first node with room,
    /// growing the chain only when no node has room.
    pub fn acquire(&mut self, min_size: usize) -> Result<StateRow> {
        let found = self.chain().find(|&i| self.nodes[i].free() >= min_size);
        let node = match found {
            Some(i) => i,
            None => self.grow(min_size)?,
        };

        let entry = &mut self.nodes[node];
        let offset = entry.used;
        entry.state_array[offset..offset + min_size].fill(0);
        entry.used += min_size;
        Ok(StateRow { node, offset, len: min_size })
    }

    fn grow(&mut self, min_size: usize) -> Result<usize> {
        let largest = self.nodes.iter().map(|n| n.length).max().unwrap_or(0);
        let length = min_size.max(2 * largest);

        if let Some(limit) = self.limit {
            if self.total_bytes() + length > limit {
                return Err(AlignError::MemoryLimit { requested: length });
            }
        }

        let mut state_array = Vec::new();
        state_array
            .try_reserve_exact(length)
            .map_err(|_| AlignError::MemoryLimit { requested: length })?;
        state_array.resize(length, 0);
        self.nodes
            .try_reserve(1)
            .map_err(|_| AlignError::MemoryLimit { requested: length })?;

        let index = self.nodes.len();
        self.nodes.push(GapStateArray { length, used: 0, state_array, next: None });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        Ok(index)
    }

    pub fn row(&self, row: &StateRow) -> &[u8] {
        &self.nodes[row.node].state_array[row.offset..row.offset + row.len]
    }

    pub fn row_mut(&mut self, row: &StateRow) -> &mut [u8] {
        &mut self.nodes[row.node].state_array[row.offset..row.offset + row.len]
    }

    /// Mark every node empty, keeping the memory.
    pub fn reset(&mut self) {
        for node in &mut self.nodes {
            node.used = 0;
        }
    }

    /// Release every node.
    pub fn free_all(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Node lengths in chain order
    pub fn node_lengths(&self) -> Vec<usize> {
        self.chain().map(|i| self.nodes[i].length).collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn total_bytes(&self) -> usize {
        self.nodes.iter().map(|n| n.length).sum()
    }

    pub fn used_bytes(&self) -> usize {
        self.nodes.iter().map(|n| n.used).sum()
    }
}
