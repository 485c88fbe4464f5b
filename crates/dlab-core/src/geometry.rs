use crate::Error;

/// Source dimensions of a 2:1 decimation.
///
/// Both sides are positive and even, so the destination is exactly
/// `(src_width / 2) x (src_height / 2)` with no dropped row or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    src_width: usize,
    src_height: usize,
}

impl Geometry {
    /// 16K UHD frame, `15360 x 8640`.
    pub const REFERENCE: Geometry = match Geometry::new(15360, 8640) {
        Ok(g) => g,
        Err(_) => panic!("reference geometry must be valid"),
    };

    pub const fn new(src_width: usize, src_height: usize) -> Result<Self, Error> {
        if src_width == 0 || src_height == 0 {
            return Err(Error::ZeroDimension);
        }
        if src_width % 2 != 0 || src_height % 2 != 0 {
            return Err(Error::OddDimension {
                width: src_width,
                height: src_height,
            });
        }
        if src_width.checked_mul(src_height).is_none() {
            return Err(Error::DimensionOverflow);
        }

        Ok(Self {
            src_width,
            src_height,
        })
    }

    pub const fn src_width(&self) -> usize {
        self.src_width
    }

    pub const fn src_height(&self) -> usize {
        self.src_height
    }

    pub const fn dst_width(&self) -> usize {
        self.src_width / 2
    }

    pub const fn dst_height(&self) -> usize {
        self.src_height / 2
    }

    pub const fn src_len(&self) -> usize {
        self.src_width * self.src_height
    }

    pub const fn dst_len(&self) -> usize {
        self.dst_width() * self.dst_height()
    }

    /// Validates buffer lengths against this geometry.
    ///
    /// The source is checked first, then the destination.
    pub fn check_buffers(&self, dst: &[u8], src: &[u8]) -> Result<(), Error> {
        if src.len() != self.src_len() {
            return Err(Error::SizeMismatch {
                expected: self.src_len(),
                actual: src.len(),
            });
        }
        if dst.len() != self.dst_len() {
            return Err(Error::SizeMismatch {
                expected: self.dst_len(),
                actual: dst.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Geometry;
    use crate::{Error, ErrorKind};

    #[test]
    fn reference_geometry_halves() {
        let g = Geometry::REFERENCE;
        assert_eq!(g.dst_width(), 7680);
        assert_eq!(g.dst_height(), 4320);
        assert_eq!(g.src_len(), 15360 * 8640);
        assert_eq!(g.dst_len(), 7680 * 4320);
    }

    #[test]
    fn rejects_odd_and_zero_sides() {
        assert_eq!(
            Geometry::new(5, 4),
            Err(Error::OddDimension {
                width: 5,
                height: 4
            })
        );
        assert_eq!(
            Geometry::new(4, 3),
            Err(Error::OddDimension {
                width: 4,
                height: 3
            })
        );
        assert_eq!(Geometry::new(0, 4), Err(Error::ZeroDimension));
        assert_eq!(Geometry::new(4, 0), Err(Error::ZeroDimension));
    }

    #[test]
    fn rejects_overflowing_area() {
        let err = Geometry::new(usize::MAX - 1, 4).expect_err("area overflows");
        assert_eq!(err, Error::DimensionOverflow);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn check_buffers_reports_offending_length() {
        let g = Geometry::new(4, 2).expect("valid geometry");
        let src = [0u8; 8];
        let dst = [0u8; 2];
        assert!(g.check_buffers(&dst, &src).is_ok());

        assert_eq!(
            g.check_buffers(&dst, &src[..7]),
            Err(Error::SizeMismatch {
                expected: 8,
                actual: 7
            })
        );
        assert_eq!(
            g.check_buffers(&[0u8; 3], &src),
            Err(Error::SizeMismatch {
                expected: 2,
                actual: 3
            })
        );
    }
}
