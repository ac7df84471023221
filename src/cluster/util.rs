use crate::store::Coord;

/// Planar Euclidean distance between two coordinate pairs.
///
/// NaN and infinite inputs propagate per IEEE-754.
#[inline]
pub fn euclidean(a: &Coord, b: &Coord) -> f64 {
    squared_euclidean(a, b).sqrt()
}

#[inline]
pub(crate) fn squared_euclidean(a: &Coord, b: &Coord) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_four_five() {
        assert_eq!(euclidean(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
        assert_eq!(euclidean(&[3.0, 4.0], &[0.0, 0.0]), 5.0);
        assert_eq!(euclidean(&[-1.5, 2.0], &[-1.5, 2.0]), 0.0);
    }

    #[test]
    fn non_finite_inputs_propagate() {
        assert!(euclidean(&[f64::NAN, 0.0], &[0.0, 0.0]).is_nan());
        assert!(euclidean(&[f64::INFINITY, 0.0], &[0.0, 0.0]).is_infinite());
    }
}
