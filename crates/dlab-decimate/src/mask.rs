use bitvec::prelude::*;

/// Keep/discard pattern for one source row pair.
///
/// The pattern covers `2 * src_width` bytes: within the first (even) row
/// every even column is kept, the whole second (odd) row is discarded.
/// Streaming a source buffer against it period by period yields the
/// decimated samples in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimationMask {
    src_width: usize,
    bits: BitVec<usize, Lsb0>,
}

impl DecimationMask {
    pub fn new(src_width: usize) -> Self {
        let mut bits = bitvec![usize, Lsb0; 0; 2 * src_width];
        for x in (0..src_width).step_by(2) {
            bits.set(x, true);
        }
        Self { src_width, bits }
    }

    pub fn src_width(&self) -> usize {
        self.src_width
    }

    /// Number of source bytes covered by one repetition of the pattern.
    pub fn period(&self) -> usize {
        self.bits.len()
    }

    /// Whether the byte at `offset` within a period is copied.
    ///
    /// Offsets past the period are never kept.
    pub fn keeps(&self, offset: usize) -> bool {
        self.bits.get(offset).is_some_and(|bit| *bit)
    }

    pub fn kept_per_period(&self) -> usize {
        self.bits.count_ones()
    }

    pub(crate) fn bits(&self) -> &BitSlice<usize, Lsb0> {
        &self.bits
    }
}

#[cfg(test)]
mod tests {
    use super::DecimationMask;

    #[test]
    fn pattern_keeps_even_columns_of_even_row() {
        let mask = DecimationMask::new(4);
        assert_eq!(mask.period(), 8);
        let kept: Vec<bool> = (0..mask.period()).map(|i| mask.keeps(i)).collect();
        assert_eq!(
            kept,
            vec![true, false, true, false, false, false, false, false]
        );
        assert_eq!(mask.kept_per_period(), 2);
    }

    #[test]
    fn offsets_outside_period_are_discarded() {
        let mask = DecimationMask::new(2);
        assert!(mask.keeps(0));
        assert!(!mask.keeps(4));
        assert!(!mask.keeps(usize::MAX));
    }

    #[test]
    fn wide_rows_span_multiple_words() {
        let mask = DecimationMask::new(200);
        assert_eq!(mask.period(), 400);
        assert_eq!(mask.kept_per_period(), 100);
        assert!(mask.keeps(198));
        assert!(!mask.keeps(199));
        assert!(!mask.keeps(200));
    }
}
