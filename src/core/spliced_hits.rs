//! Chains of HSPs for spliced and paired alignments
//!
//! Reference: ncbi-blast/c++/src/algo/blast/core/spliced_hits.c
//!
//! A chain owns its HSPs. The `pair` link to a mate chain is an index into
//! the `ChainStore`; removing a chain never removes its mate, it only
//! clears the mate's link back.

use crate::core::gapinfo::GapEditBlock;

/// One local alignment between a query region and a subject region.
/// Offsets are 0-based, ends exclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct Hsp {
    pub score: i32,
    pub bit_score: f64,
    pub evalue: f64,
    pub query_offset: usize,
    pub query_end: usize,
    pub subject_offset: usize,
    pub subject_end: usize,
    pub context: u32,
    pub gap_info: Option<GapEditBlock>,
}

impl Hsp {
    pub fn new(
        score: i32,
        query_offset: usize,
        query_end: usize,
        subject_offset: usize,
        subject_end: usize,
    ) -> Self {
        Self {
            score,
            bit_score: 0.0,
            evalue: f64::INFINITY,
            query_offset,
            query_end,
            subject_offset,
            subject_end,
            context: 0,
            gap_info: None,
        }
    }

    /// HSP covering the aligned region of `block`
    pub fn from_block(score: i32, block: GapEditBlock) -> Self {
        let mut hsp = Self::new(score, block.start1, block.end1(), block.start2, block.end2());
        hsp.gap_info = Some(block);
        hsp
    }
}

/// Index of a chain inside a `ChainStore`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChainId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct HspChain {
    pub context: u32,
    /// Subject ordinal id
    pub oid: u32,
    pub score: i32,
    /// HSPs in query order
    pub hsps: Vec<Hsp>,
    /// Mate chain (non-owning)
    pub pair: Option<ChainId>,
}

impl HspChain {
    pub fn new(context: u32, oid: u32) -> Self {
        Self { context, oid, score: 0, hsps: Vec::new(), pair: None }
    }

    /// Insert keeping query order; the chain score is the sum of HSP scores.
    pub fn add_hsp(&mut self, hsp: Hsp) {
        let key = (hsp.query_offset, hsp.subject_offset);
        let pos = self
            .hsps
            .partition_point(|h| (h.query_offset, h.subject_offset) <= key);
        self.score += hsp.score;
        self.hsps.insert(pos, hsp);
    }

    /// Copy of the chain without its mate link
    pub fn clone_unpaired(&self) -> Self {
        Self { pair: None, ..self.clone() }
    }

    /// Query span `[first offset, last end)`
    pub fn query_span(&self) -> Option<(usize, usize)> {
        let first = self.hsps.first()?;
        let end = self.hsps.iter().map(|h| h.query_end).max()?;
        Some((first.query_offset, end))
    }

    /// Query residues covered by at least one HSP
    pub fn query_coverage(&self) -> usize {
        let mut covered = 0;
        let mut reach = 0;
        for h in &self.hsps {
            let start = h.query_offset.max(reach);
            if h.query_end > start {
                covered += h.query_end - start;
            }
            reach = reach.max(h.query_end);
        }
        covered
    }

    /// Consecutive HSPs advance on both sequences without overlapping.
    pub fn is_colinear(&self) -> bool {
        self.hsps
            .windows(2)
            .all(|w| w[0].query_end <= w[1].query_offset && w[0].subject_end <= w[1].subject_offset)
    }
}

/// Arena of chains. Slots of removed chains stay empty so ids remain stable.
#[derive(Debug, Default)]
pub struct ChainStore {
    chains: Vec<Option<HspChain>>,
}

impl ChainStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, chain: HspChain) -> ChainId {
        self.chains.push(Some(chain));
        ChainId(self.chains.len() - 1)
    }

    pub fn get(&self, id: ChainId) -> Option<&HspChain> {
        self.chains.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: ChainId) -> Option<&mut HspChain> {
        self.chains.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Link two chains as mates. Returns false if either is missing.
    pub fn set_pair(&mut self, a: ChainId, b: ChainId) -> bool {
        if a == b || self.get(a).is_none() || self.get(b).is_none() {
            return false;
        }
        for (from, to) in [(a, b), (b, a)] {
            if let Some(chain) = self.get_mut(from) {
                chain.pair = Some(to);
            }
        }
        true
    }

    /// Mate of `id`, if it is still in the store
    pub fn pair_of(&self, id: ChainId) -> Option<&HspChain> {
        self.get(id)?.pair.and_then(|p| self.get(p))
    }

    /// Remove a chain and its HSPs; the mate survives with its link cleared.
    pub fn remove(&mut self, id: ChainId) -> Option<HspChain> {
        let chain = self.chains.get_mut(id.0)?.take()?;
        if let Some(mate) = chain.pair.and_then(|p| self.get_mut(p)) {
            if mate.pair == Some(id) {
                mate.pair = None;
            }
        }
        Some(chain)
    }

    pub fn len(&self) -> usize {
        self.chains.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChainId, &HspChain)> {
        self.chains
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_ref().map(|c| (ChainId(i), c)))
    }

    /// Chain ids ordered by descending score, ties by id
    pub fn ids_by_score(&self) -> Vec<ChainId> {
        let mut ids: Vec<(ChainId, i32)> = self.iter().map(|(id, c)| (id, c.score)).collect();
        ids.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ids.into_iter().map(|(id, _)| id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_with(spans: &[(usize, usize, i32)]) -> HspChain {
        let mut chain = HspChain::new(0, 1);
        for &(q, len, score) in spans {
            chain.add_hsp(Hsp::new(score, q, q + len, q + 100, q + 100 + len));
        }
        chain
    }

    #[test]
    fn test_add_hsp_keeps_query_order() {
        let chain = chain_with(&[(50, 10, 20), (0, 10, 30), (20, 5, 10)]);
        let offsets: Vec<usize> = chain.hsps.iter().map(|h| h.query_offset).collect();
        assert_eq!(offsets, vec![0, 20, 50]);
        assert_eq!(chain.score, 60);
        assert!(chain.is_colinear());
        assert_eq!(chain.query_span(), Some((0, 60)));
        assert_eq!(chain.query_coverage(), 25);
    }

    #[test]
    fn test_removing_chain_keeps_mate() {
        let mut store = ChainStore::new();
        let a = store.insert(chain_with(&[(0, 10, 30)]));
        let b = store.insert(chain_with(&[(40, 10, 25)]));
        assert!(store.set_pair(a, b));
        assert_eq!(store.pair_of(a).map(|c| c.score), Some(25));

        let removed = store.remove(a).unwrap();
        assert_eq!(removed.hsps.len(), 1);
        assert_eq!(store.len(), 1);
        assert!(store.get(b).is_some());
        assert_eq!(store.get(b).unwrap().pair, None);
        assert!(store.pair_of(b).is_none());
        assert!(store.remove(a).is_none());
    }

    #[test]
    fn test_clone_unpaired_drops_link() {
        let mut store = ChainStore::new();
        let a = store.insert(chain_with(&[(0, 10, 30)]));
        let b = store.insert(chain_with(&[(0, 10, 30)]));
        store.set_pair(a, b);
        let copy = store.get(a).unwrap().clone_unpaired();
        assert_eq!(copy.pair, None);
        assert_eq!(copy.hsps, store.get(a).unwrap().hsps);
    }

    #[test]
    fn test_ids_by_score() {
        let mut store = ChainStore::new();
        let low = store.insert(chain_with(&[(0, 10, 5)]));
        let high = store.insert(chain_with(&[(0, 10, 50)]));
        let tie = store.insert(chain_with(&[(0, 10, 5)]));
        assert_eq!(store.ids_by_score(), vec![high, low, tie]);
        assert!(!store.set_pair(low, low));
    }
}
