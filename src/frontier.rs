//! A trie committing to the complement of a set of byte strings.

use crate::hasher::Hasher;
use crate::tier::Tier;
use crate::tree::Tree;

/// Frontier is a trie that contains the shortest bytewise prefixes of all
/// strings _not_ in a set.
/// See "Zero Knowledge Sets" by Micali, Rabin, Kilian.
///   <https://people.csail.mit.edu/silvio/Selected%20Scientific%20Papers/Zero%20Knowledge/Zero-Knowledge_Sets.pdf>
///
/// Illustration:
/// Consider the simplified alphabet a,b,c,d,
/// a hypothetical set S of strings in that alphabet,
/// and the corresponding frontier representing everything not in S,
/// such that adding a string to S means also excluding it here.
/// When S is empty the frontier stores nothing, and every string trivially
/// carries the empty prefix: the prefix of all strings.
/// Excluding "a" stores the path `a`, so any string starting with `a` now
/// has a stored prefix. Excluding "abc" afterwards replaces that terminal
/// with a subtrie whose only stored path is `abc`.
///
/// Each excluded string is a root-to-[`Tier::Zero`] path; every extension
/// of a stored path counts as excluded too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier {
    top: Option<Tier>,
}

impl Frontier {
    /// Creates an empty frontier: nothing excluded yet.
    pub fn new() -> Self {
        Self { top: None }
    }

    /// Excludes `data` and, implicitly, every extension of it.
    ///
    /// Empty inputs are ignored. Repeating an exclusion leaves the trie
    /// unchanged. Excluding a proper prefix of an earlier exclusion
    /// collapses the subtrie below the shorter path.
    pub fn exclude(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        self.top = Some(match self.top.take() {
            Some(tier) => tier.set(data, Tier::Zero),
            None => Tier::chain(data, Tier::Zero),
        });
    }

    /// Walks the trie along `data` looking for a stored prefix.
    ///
    /// Returns `(prefix, true)` where `prefix` is the stored prefix of
    /// `data`, or `(_, false)` if the walk leaves the trie without passing
    /// a terminal. On an empty frontier every string carries the empty
    /// prefix, so the result is `(&data[..0], true)`.
    pub fn check<'a>(&self, data: &'a [u8]) -> (&'a [u8], bool) {
        let Some(top) = self.top.as_ref() else {
            return (&data[..0], true);
        };
        let mut tier = top;
        for (depth, &b) in data.iter().enumerate() {
            if tier.is_zero() {
                return (&data[..depth], true);
            }
            match tier.get(b) {
                Some(child) => tier = child,
                None => return (&data[..0], false),
            }
        }
        if tier.is_zero() {
            (data, true)
        } else {
            (&data[..0], false)
        }
    }

    /// Performs a depth-first traversal in ascending byte order, calling
    /// `f` with the path of every stored terminal.
    ///
    /// The slice passed to `f` is only valid for the duration of the call;
    /// the walk reuses its buffer.
    pub fn walk<F: FnMut(&[u8])>(&self, mut f: F) {
        if let Some(top) = &self.top {
            let mut path = Vec::new();
            walk_tier(top, &mut path, &mut f);
        }
    }

    /// Produces the merkle root hash of the frontier: the root of a
    /// [`Tree`] fed the stored prefixes in traversal order.
    ///
    /// This can be used to prove in zero knowledge that a string is not in
    /// a given set.
    pub fn merkle_root<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone>(
        &self,
        hasher: H,
    ) -> [u8; HASH_SIZE] {
        let mut tree = Tree::new(hasher);
        self.walk(|prefix| {
            // Cannot fail: the tree is not finalized until after the walk.
            tree.add(prefix).unwrap();
        });
        tree.root()
    }
}

fn walk_tier<F: FnMut(&[u8])>(tier: &Tier, path: &mut Vec<u8>, f: &mut F) {
    if tier.is_zero() {
        f(path);
        return;
    }
    tier.for_each_child(|b, child| {
        path.push(b);
        walk_tier(child, path, f);
        path.pop();
    });
}
