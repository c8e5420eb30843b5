//! Owned list of hits with keep flags
//!
//! Reference: ncbi-cxx-toolkit algo/cobalt/hitlist.cpp CHitList
//!
//! The list owns every hit. Hits leave either through `remove_hit` (which
//! hands ownership to the caller) or through the purge calls.

use std::cmp::Ordering;

use rustc_hash::FxHashSet;

use super::hit::{Hit, SeqRange};

#[derive(Debug, Clone, Default)]
pub struct HitList {
    entries: Vec<(bool, Hit)>,
}

impl HitList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Take ownership of `hit`, marked to keep.
    pub fn add_to_list(&mut self, hit: Hit) {
        self.entries.push((true, hit));
    }

    /// Move every hit of `other` to the end of this list.
    pub fn append(&mut self, other: &mut HitList) {
        self.entries.append(&mut other.entries);
    }

    pub fn hit(&self, index: usize) -> Option<&Hit> {
        self.entries.get(index).map(|(_, h)| h)
    }

    pub fn hit_mut(&mut self, index: usize) -> Option<&mut Hit> {
        self.entries.get_mut(index).map(|(_, h)| h)
    }

    pub fn keep_hit(&self, index: usize) -> bool {
        self.entries.get(index).is_some_and(|(k, _)| *k)
    }

    pub fn set_keep_hit(&mut self, index: usize, keep: bool) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.0 = keep;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hit> {
        self.entries.iter().map(|(_, h)| h)
    }

    /// Detach the hit at `index`, preserving the order of the rest.
    pub fn remove_hit(&mut self, index: usize) -> Option<Hit> {
        if index < self.entries.len() {
            Some(self.entries.remove(index).1)
        } else {
            None
        }
    }

    /// Drop every hit whose keep flag is cleared, in one stable pass.
    pub fn purge_unwanted_hits(&mut self) {
        self.entries.retain(|(keep, _)| *keep);
    }

    pub fn purge_all_hits(&mut self) {
        self.entries.clear();
    }

    /// Highest score first; equal scores keep their order.
    pub fn sort_by_score(&mut self) {
        self.entries.sort_by(|(_, a), (_, b)| b.score.cmp(&a.score));
    }

    pub fn sort_by_seq_index(&mut self) {
        self.entries
            .sort_by_key(|(_, h)| (h.seq_index1, h.seq_index2));
    }

    pub fn sort_by_start_offset(&mut self) {
        self.entries
            .sort_by_key(|(_, h)| (h.range1.start, h.range2.start));
    }

    /// Orient every hit so that `seq_index1 < seq_index2`, drop duplicates
    /// (same sequences and ranges; the best-scoring copy survives), then
    /// sort by sequence pair and start offsets.
    pub fn make_canonical(&mut self) {
        for (_, hit) in &mut self.entries {
            if hit.seq_index1 > hit.seq_index2 {
                hit.swap_roles();
            }
        }

        self.sort_by_score();
        let mut seen: FxHashSet<(usize, usize, SeqRange, SeqRange)> = FxHashSet::default();
        self.entries
            .retain(|(_, h)| seen.insert((h.seq_index1, h.seq_index2, h.range1, h.range2)));

        self.entries.sort_by(|(_, a), (_, b)| canonical_order(a, b));
    }
}

fn canonical_order(a: &Hit, b: &Hit) -> Ordering {
    (a.seq_index1, a.seq_index2, a.range1.start, a.range2.start, a.range1.end, a.range2.end).cmp(&(
        b.seq_index1,
        b.seq_index2,
        b.range1.start,
        b.range2.start,
        b.range1.end,
        b.range2.end,
    ))
}

impl IntoIterator for HitList {
    type Item = Hit;
    type IntoIter = std::iter::Map<std::vec::IntoIter<(bool, Hit)>, fn((bool, Hit)) -> Hit>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter().map(|(_, h)| h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(i: usize, j: usize, score: i32, s1: usize, s2: usize) -> Hit {
        Hit::new(i, j, score, SeqRange::new(s1, s1 + 10), SeqRange::new(s2, s2 + 10))
    }

    #[test]
    fn test_purge_is_stable() {
        let mut list = HitList::new();
        for s in [10, 20, 30, 40, 50] {
            list.add_to_list(hit(0, 1, s, 0, 0));
        }
        list.set_keep_hit(1, false);
        list.set_keep_hit(3, false);
        list.purge_unwanted_hits();
        let scores: Vec<i32> = list.iter().map(|h| h.score).collect();
        assert_eq!(scores, vec![10, 30, 50]);
        assert!(list.keep_hit(0));
    }

    #[test]
    fn test_remove_hit_transfers_ownership() {
        let mut list = HitList::new();
        list.add_to_list(hit(0, 1, 5, 0, 0));
        list.add_to_list(hit(0, 2, 7, 0, 0));
        let taken = list.remove_hit(0).unwrap();
        assert_eq!(taken.score, 5);
        assert_eq!(list.len(), 1);
        assert!(list.remove_hit(4).is_none());
    }

    #[test]
    fn test_sorts() {
        let mut list = HitList::new();
        list.add_to_list(hit(2, 3, 10, 5, 0));
        list.add_to_list(hit(0, 1, 30, 9, 0));
        list.add_to_list(hit(0, 1, 20, 1, 0));

        list.sort_by_score();
        assert_eq!(list.iter().map(|h| h.score).collect::<Vec<_>>(), vec![30, 20, 10]);
        list.sort_by_start_offset();
        assert_eq!(list.iter().map(|h| h.range1.start).collect::<Vec<_>>(), vec![1, 5, 9]);
        list.sort_by_seq_index();
        assert_eq!(list.hit(2).unwrap().seq_index1, 2);
    }

    #[test]
    fn test_make_canonical() {
        let mut list = HitList::new();
        list.add_to_list(hit(1, 0, 15, 20, 0));
        list.add_to_list(hit(0, 1, 25, 0, 20));
        list.add_to_list(hit(0, 2, 8, 3, 3));
        list.make_canonical();

        assert_eq!(list.len(), 2);
        let first = list.hit(0).unwrap();
        assert_eq!((first.seq_index1, first.seq_index2, first.score), (0, 1, 25));
        assert_eq!(list.hit(1).unwrap().seq_index2, 2);

        let mut empty = HitList::new();
        empty.append(&mut list);
        assert_eq!(empty.len(), 2);
        assert!(list.is_empty());
        empty.purge_all_hits();
        assert!(empty.is_empty());
    }
}
