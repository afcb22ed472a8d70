/// Drops `None` entries from the end of `seq`, stopping at the last present
/// element. Interior `None`s are kept so positions stay meaningful.
#[inline]
pub fn trim_trailing_absent<T>(seq: &mut Vec<Option<T>>) {
    while matches!(seq.last(), Some(None)) {
        seq.pop();
    }
}

/// Borrowing variant of [`trim_trailing_absent`].
#[inline]
pub fn trimmed<T>(seq: &[Option<T>]) -> &[Option<T>] {
    let end = seq
        .iter()
        .rposition(Option::is_some)
        .map_or(0, |idx| idx + 1);
    &seq[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_fully_present_sequences() {
        let mut seq = vec![Some(1), Some(2), Some(3)];
        trim_trailing_absent(&mut seq);
        assert_eq!(seq, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn drops_trailing_absent_values() {
        let mut seq = vec![Some(1), Some(2), Some(3), None, None];
        trim_trailing_absent(&mut seq);
        assert_eq!(seq, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn single_absent_value_becomes_empty() {
        let mut seq: Vec<Option<i32>> = vec![None];
        trim_trailing_absent(&mut seq);
        assert!(seq.is_empty());
    }

    #[test]
    fn interior_absent_values_survive() {
        let mut seq = vec![Some("a"), None, Some("c"), None];
        trim_trailing_absent(&mut seq);
        assert_eq!(seq, vec![Some("a"), None, Some("c")]);
    }

    #[test]
    fn borrowed_view_matches_in_place_trim() {
        let seq = vec![None, Some(2), None];
        assert_eq!(trimmed(&seq), &[None, Some(2)]);
        let empty: Vec<Option<u8>> = Vec::new();
        assert!(trimmed(&empty).is_empty());
    }
}
