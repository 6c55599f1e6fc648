//! Cartesian-product enumeration of iterable axis indices.

/// One selection of indices, one per iterable axis.
pub type Combination = Vec<usize>;

/// Lazy iterator over every index combination of a set of axis lengths.
///
/// Combinations come out in lexicographic order: the first axis varies
/// slowest, the last axis fastest. Callers rely on this order both to match
/// combination positions back to axes and for deterministic file naming.
///
/// An empty length list yields a single empty combination (no slicing
/// needed); any zero length yields nothing at all.
///
/// Implemented as an odometer rather than recursion, so axis count never
/// touches the stack.
#[derive(Debug, Clone)]
pub struct Combinations {
    lengths: Vec<usize>,
    next: Option<Vec<usize>>,
}

impl Combinations {
    /// Create an iterator over the index space of `lengths`.
    pub fn new(lengths: &[usize]) -> Self {
        let next = if lengths.iter().any(|&len| len == 0) {
            None
        } else {
            Some(vec![0; lengths.len()])
        };
        Self {
            lengths: lengths.to_vec(),
            next,
        }
    }

    /// Total number of combinations (product of lengths, 1 when empty).
    pub fn total(&self) -> usize {
        self.lengths.iter().product()
    }
}

impl Iterator for Combinations {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        let current = self.next.take()?;

        // Advance the odometer; when every digit rolls over, iteration ends.
        let mut following = current.clone();
        for axis in (0..self.lengths.len()).rev() {
            following[axis] += 1;
            if following[axis] < self.lengths[axis] {
                self.next = Some(following);
                break;
            }
            following[axis] = 0;
        }

        Some(current)
    }
}

/// Collect every combination eagerly.
pub fn enumerate_combinations(lengths: &[usize]) -> Vec<Combination> {
    Combinations::new(lengths).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_axis_slowest_last_axis_fastest() {
        let combos = enumerate_combinations(&[2, 3]);
        assert_eq!(
            combos,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2],
            ]
        );
    }

    #[test]
    fn count_is_product_of_lengths() {
        let combos = enumerate_combinations(&[12, 4]);
        assert_eq!(combos.len(), 48);
        assert_eq!(Combinations::new(&[12, 4]).total(), 48);

        let mut seen = std::collections::HashSet::new();
        for combo in combos {
            assert!(seen.insert(combo), "duplicate combination");
        }
    }

    #[test]
    fn empty_lengths_yield_single_empty_combination() {
        let combos = enumerate_combinations(&[]);
        assert_eq!(combos, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn zero_length_axis_yields_nothing() {
        assert!(enumerate_combinations(&[3, 0, 2]).is_empty());
        assert!(enumerate_combinations(&[0]).is_empty());
    }

    #[test]
    fn single_axis_counts_up() {
        let combos = enumerate_combinations(&[4]);
        assert_eq!(combos, vec![vec![0], vec![1], vec![2], vec![3]]);
    }
}
