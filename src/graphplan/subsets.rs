//! Power-set enumeration over the actions of one level.
//!
//! A subset is a binary number with one bit per action (bit `i` selects action `i`).
//! Subsets are produced in counting order `0, 1, 2, ...`, so the empty set comes first and
//! the full set last. The counter is split into 64-bit words and never overflows.

/// One element of the power set, as a little-endian multi-word bit mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subset {
    words: Vec<u64>,
}

impl Subset {
    const BITS_PER_WORD: usize = 64;

    pub fn empty(len: usize) -> Self {
        Subset { words: vec![0; (len + Self::BITS_PER_WORD - 1) / Self::BITS_PER_WORD] }
    }

    pub fn from_indices<I: IntoIterator<Item = usize>>(len: usize, indices: I) -> Self {
        let mut subset = Subset::empty(len);
        for i in indices {
            debug_assert!(i < len);
            subset.words[i / Self::BITS_PER_WORD] |= 1 << (i % Self::BITS_PER_WORD);
        }
        subset
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.words.get(index / Self::BITS_PER_WORD)
            .map_or(false, |w| w & (1 << (index % Self::BITS_PER_WORD)) != 0)
    }

    /// Selected indices in increasing order.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &word)| {
            (0..Self::BITS_PER_WORD).filter(move |b| word & (1 << b) != 0).map(move |b| w * Self::BITS_PER_WORD + b)
        })
    }

    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

/// Iterator over all `2^len` subsets of `len` items in counting order.
#[derive(Debug, Clone)]
pub struct Subsets {
    current: Subset,
    len: usize,
    exhausted: bool,
}

impl Subsets {
    pub fn new(len: usize) -> Self {
        Subsets { current: Subset::empty(len), len, exhausted: false }
    }

    fn increment(&mut self) {
        let mut carry = true;
        for word in self.current.words.iter_mut() {
            let (value, overflow) = word.overflowing_add(1);
            *word = value;
            if !overflow {
                carry = false;
                break
            }
        }
        let tail = self.len % Subset::BITS_PER_WORD;
        let spilled = tail != 0 && self.current.words.last().map_or(false, |w| w >> tail != 0);
        self.exhausted = carry || spilled;
    }
}

impl Iterator for Subsets {
    type Item = Subset;

    fn next(&mut self) -> Option<Subset> {
        if self.exhausted {
            return None
        }
        let subset = self.current.clone();
        self.increment();
        Some(subset)
    }
}

#[cfg(test)]
mod tests {
    use super::{Subset, Subsets};

    #[test]
    fn test_counting_order() {
        let all: Vec<Vec<usize>> = Subsets::new(3).map(|s| s.ones().collect()).collect();
        assert_eq!(all, vec![
            vec![], vec![0], vec![1], vec![0, 1],
            vec![2], vec![0, 2], vec![1, 2], vec![0, 1, 2],
        ]);
    }

    #[test]
    fn test_empty_item_list() {
        let all: Vec<Subset> = Subsets::new(0).collect();
        assert_eq!(all, vec![Subset::empty(0)]);
    }

    #[test]
    fn test_word_boundary() {
        let mut full_word = Subsets::new(64);
        full_word.current.words[0] = u64::MAX;
        assert_eq!(full_word.next().map(|s| s.count()), Some(64));
        assert_eq!(full_word.next(), None);

        let mut carried = Subsets::new(65);
        carried.current.words[0] = u64::MAX;
        assert_eq!(carried.next().map(|s| s.count()), Some(64));
        assert_eq!(carried.next(), Some(Subset::from_indices(65, [64])));
        assert_eq!(carried.next().map(|s| s.ones().collect::<Vec<_>>()), Some(vec![0, 64]));

        let high = Subset::from_indices(130, [0, 64, 129]);
        assert!(high.contains(64) && high.contains(129) && !high.contains(63));
        assert_eq!(high.ones().collect::<Vec<_>>(), vec![0, 64, 129]);
        assert_eq!(high.count(), 3);
    }

    #[test]
    fn test_last_subset_is_full() {
        assert_eq!(Subsets::new(5).count(), 32);
        assert_eq!(Subsets::new(5).last(), Some(Subset::from_indices(5, 0..5)));
        assert_eq!(Subsets::new(5).nth(6), Some(Subset::from_indices(5, [1, 2])));
    }
}
