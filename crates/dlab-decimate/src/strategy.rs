use core::fmt;
use core::str::FromStr;

use dlab_core::{Error, Geometry};

use crate::decimate::{
    decimate_blocked_copy, decimate_mask_pattern, decimate_nested_loop, decimate_pointer_stride,
    decimate_row_col_indexed,
};

/// Selects one of the interchangeable decimation kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    NestedLoop,
    MaskPattern,
    PointerStride,
    BlockedCopy,
    RowColIndexed,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::NestedLoop,
        Strategy::MaskPattern,
        Strategy::PointerStride,
        Strategy::BlockedCopy,
        Strategy::RowColIndexed,
    ];

    /// Stable identifier used on the command line and in reports.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::NestedLoop => "nested-loop",
            Strategy::MaskPattern => "mask-pattern",
            Strategy::PointerStride => "pointer-stride",
            Strategy::BlockedCopy => "blocked-copy",
            Strategy::RowColIndexed => "row-col-indexed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strategy::NestedLoop => "Two For Loops",
            Strategy::MaskPattern => "Bit Pattern",
            Strategy::PointerStride => "Pointer Arith",
            Strategy::BlockedCopy => "Combination",
            Strategy::RowColIndexed => "Row/Col Index",
        }
    }

    pub fn decimate(self, dst: &mut [u8], src: &[u8], geometry: Geometry) -> Result<(), Error> {
        match self {
            Strategy::NestedLoop => decimate_nested_loop(dst, src, geometry),
            Strategy::MaskPattern => decimate_mask_pattern(dst, src, geometry),
            Strategy::PointerStride => decimate_pointer_stride(dst, src, geometry),
            Strategy::BlockedCopy => decimate_blocked_copy(dst, src, geometry),
            Strategy::RowColIndexed => decimate_row_col_indexed(dst, src, geometry),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown strategy '{}', expected one of: ", self.0)?;
        for (i, s) in Strategy::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(s.name())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| ParseStrategyError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::Strategy;

    #[test]
    fn names_round_trip_through_from_str() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>(), Ok(strategy));
            assert_eq!(strategy.to_string(), strategy.name());
        }
    }

    #[test]
    fn unknown_name_lists_choices() {
        let err = "zigzag".parse::<Strategy>().expect_err("unknown name");
        let msg = err.to_string();
        assert!(msg.starts_with("unknown strategy 'zigzag'"));
        assert!(msg.contains("blocked-copy"));
    }

    #[test]
    fn labels_are_distinct() {
        for (i, a) in Strategy::ALL.iter().enumerate() {
            for b in &Strategy::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
