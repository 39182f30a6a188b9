//! Best-candidate selection.
use crate::types::LineSegment;

/// Pick the longest candidate by Euclidean length.
///
/// The comparison is strict, so among equal-length candidates the first in
/// input order wins. Returns `None` for an empty candidate set; the caller
/// maps that to the "no plausible candidate" outcome.
pub fn select_longest(candidates: &[LineSegment]) -> Option<LineSegment> {
    let mut best = None;
    let mut max_length = 0.0f32;
    for seg in candidates {
        let length = seg.length();
        if length > max_length {
            max_length = length;
            best = Some(*seg);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x1: i32, y1: i32, x2: i32, y2: i32) -> LineSegment {
        LineSegment { x1, y1, x2, y2 }
    }

    #[test]
    fn empty_input_yields_none() {
        assert_eq!(select_longest(&[]), None);
    }

    #[test]
    fn longest_wins() {
        let short = seg(0, 10, 50, 10);
        let long = seg(0, 20, 150, 20);
        assert_eq!(select_longest(&[short, long]), Some(long));
        assert_eq!(select_longest(&[long, short]), Some(long));
    }

    #[test]
    fn equal_lengths_keep_the_first() {
        let first = seg(0, 10, 100, 10);
        let second = seg(0, 20, 100, 20);
        assert_eq!(select_longest(&[first, second]), Some(first));
        assert_eq!(select_longest(&[second, first]), Some(second));
    }
}
