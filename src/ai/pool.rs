//! Call-local candidate pool for one selection pass
//!
//! The Java code removed picked modes from the shared choices list
//! while iterating it. Here the pool is an explicit index-scanned
//! working copy, built fresh per decision call and discarded after.
//! Picking removes the candidate unless the charm allows repeated
//! modes, in which case the pool is left intact for that pick.

use crate::core::CharmOption;

/// Ordered working copy of a charm's offered modes
#[derive(Debug)]
pub struct CandidatePool<'a> {
    candidates: Vec<&'a CharmOption>,
    allow_repeat: bool,
}

impl<'a> CandidatePool<'a> {
    pub fn new(options: &'a [CharmOption], allow_repeat: bool) -> Self {
        CandidatePool {
            candidates: options.iter().collect(),
            allow_repeat,
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn get(&self, index: usize) -> &'a CharmOption {
        self.candidates[index]
    }

    /// Pick the candidate at `index`, consuming it unless repeats are
    /// allowed
    pub fn take(&mut self, index: usize) -> &'a CharmOption {
        if self.allow_repeat {
            self.candidates[index]
        } else {
            self.candidates.remove(index)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a CharmOption> + '_ {
        self.candidates.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CharmOption, EntityId};

    fn options(n: u32) -> Vec<CharmOption> {
        (0..n)
            .map(|i| CharmOption::new(EntityId::new(i), format!("Mode {}", i)))
            .collect()
    }

    #[test]
    fn test_take_consumes_without_repeat() {
        let opts = options(3);
        let mut pool = CandidatePool::new(&opts, false);

        let picked = pool.take(1);
        assert_eq!(picked.id, EntityId::new(1));
        assert_eq!(pool.len(), 2);
        // order of the remaining candidates is preserved
        assert_eq!(pool.get(0).id, EntityId::new(0));
        assert_eq!(pool.get(1).id, EntityId::new(2));
    }

    #[test]
    fn test_take_preserves_pool_with_repeat() {
        let opts = options(3);
        let mut pool = CandidatePool::new(&opts, true);

        let picked = pool.take(1);
        assert_eq!(picked.id, EntityId::new(1));
        assert_eq!(pool.len(), 3);
    }
}
