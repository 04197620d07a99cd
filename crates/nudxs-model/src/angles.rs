use thiserror::Error;

/// Scattering angles covered by the source tables, in degrees.
///
/// The angle-index pages carry no angle text of their own: the k-th anchor
/// on the page corresponds to the k-th entry here. The coupling to the
/// remote document structure is deliberate and matches the published
/// tables (0° through 180° in 5° steps).
pub const ANGLES_DEG: [u16; 37] = [
    0, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55, 60, 65, 70, 75, 80, 85, 90,
    95, 100, 105, 110, 115, 120, 125, 130, 135, 140, 145, 150, 155, 160, 165,
    170, 175, 180,
];

#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "angle link #{index} has no entry in the fixed 0..=180 degree sequence \
     ({count} entries) — the remote page layout has changed",
    count = ANGLES_DEG.len()
)]
pub struct AngleIndexError {
    pub index: usize,
}

/// Angle in degrees for the anchor at `index` on an angle-index page.
///
/// Fails explicitly when the page yields more anchors than the table has
/// entries, rather than panicking on an out-of-range read.
pub fn angle_for_index(index: usize) -> Result<u16, AngleIndexError> {
    ANGLES_DEG
        .get(index)
        .copied()
        .ok_or(AngleIndexError { index })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_shape() {
        assert_eq!(ANGLES_DEG.len(), 37);
        assert_eq!(ANGLES_DEG[0], 0);
        assert_eq!(ANGLES_DEG[36], 180);
        for (k, a) in ANGLES_DEG.iter().enumerate() {
            assert_eq!(*a as usize, 5 * k);
        }
    }

    #[test]
    fn test_angle_for_index() {
        assert_eq!(angle_for_index(0), Ok(0));
        assert_eq!(angle_for_index(7), Ok(35));
        assert_eq!(angle_for_index(36), Ok(180));
        assert_eq!(angle_for_index(37), Err(AngleIndexError { index: 37 }));
    }
}
