use std::cmp::Ordering;

/// A frontier entry, referring to its node by the index of the
/// node's record. Several entries may refer to one node; all but
/// the cheapest become stale once popped.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate {
    pub f: f64,
    pub g: f64,
    pub index: usize,
}

impl PartialEq for Candidate {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    /// Reversed, so that the max-heap pops the smallest `f` first.
    /// Equal `f` prefers the deeper entry, which sits nearer the goal.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| self.g.total_cmp(&other.g))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn candidate(f: f64, g: f64, index: usize) -> Candidate {
        Candidate { f, g, index }
    }

    #[test]
    fn pops_smallest_f_first() {
        let mut heap = BinaryHeap::from([
            candidate(4.0, 1.0, 0),
            candidate(1.5, 1.0, 1),
            candidate(9.0, 9.0, 2),
            candidate(2.0, 0.0, 3),
        ]);

        let order = std::iter::from_fn(|| heap.pop())
            .map(|entry| entry.index)
            .collect::<Vec<_>>();

        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn ties_prefer_larger_g() {
        let mut heap = BinaryHeap::from([candidate(3.0, 1.0, 0), candidate(3.0, 2.5, 1)]);

        assert_eq!(heap.pop().map(|entry| entry.index), Some(1));
        assert_eq!(heap.pop().map(|entry| entry.index), Some(0));
    }
}
