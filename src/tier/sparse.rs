use super::{DenseTier, Tier};

/// Number of edges past which a [`SparseTier`] promotes to a
/// [`DenseTier`].
pub(crate) const DENSE_LIMIT: usize = 16;

/// A tier holding its occupied edges as a vector of `(byte, child)` pairs
/// in strictly ascending byte order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseTier {
    pairs: Vec<(u8, Tier)>,
}

impl SparseTier {
    /// Creates a new [`SparseTier`] holding a single edge.
    pub(crate) fn from_pair(b: u8, child: Tier) -> Self {
        Self {
            pairs: vec![(b, child)],
        }
    }

    /// Returns the number of occupied edges.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub(crate) fn pairs(&self) -> &[(u8, Tier)] {
        &self.pairs
    }

    pub fn get(&self, b: u8) -> Option<&Tier> {
        self.pairs
            .binary_search_by_key(&b, |&(key, _)| key)
            .ok()
            .map(|index| &self.pairs[index].1)
    }

    pub(crate) fn set(mut self, path: &[u8], terminal: Tier) -> Tier {
        match self.pairs.binary_search_by_key(&path[0], |&(key, _)| key) {
            Ok(index) => {
                if path.len() == 1 {
                    self.pairs[index].1 = terminal;
                } else {
                    let child = std::mem::replace(&mut self.pairs[index].1, Tier::Zero);
                    self.pairs[index].1 = child.set(&path[1..], terminal);
                }
                Tier::Sparse(self)
            }
            Err(index) => {
                self.pairs
                    .insert(index, (path[0], Tier::chain(&path[1..], terminal)));
                if self.pairs.len() > DENSE_LIMIT {
                    Tier::Dense(DenseTier::from_pairs(self.pairs))
                } else {
                    Tier::Sparse(self)
                }
            }
        }
    }
}
