//! Tests for the cell visitation record

#[cfg(test)]
mod tests {
    use mazecarve::algorithm::visited::VisitedSet;

    // Tests marking and membership
    // Verified by inverting the membership test
    #[test]
    fn test_mark_and_contains() {
        let mut visited = VisitedSet::new(3);

        assert!(!visited.contains([1, 1]));
        visited.mark([1, 1]);
        assert!(visited.contains([1, 1]));
        assert!(!visited.contains([1, 2]));
    }

    // Tests re-marking does not inflate the count
    // Verified by counting marks instead of cells
    #[test]
    fn test_mark_is_idempotent() {
        let mut visited = VisitedSet::new(2);

        visited.mark([0, 0]);
        visited.mark([0, 0]);
        visited.mark([0, 0]);

        assert_eq!(visited.count(), 1);
    }

    // Tests completion requires every cell
    // Verified by completing one cell early
    #[test]
    fn test_is_complete_requires_every_cell() {
        let mut visited = VisitedSet::new(2);

        visited.mark([0, 0]);
        visited.mark([0, 1]);
        visited.mark([1, 0]);
        assert!(!visited.is_complete());

        visited.mark([1, 1]);
        assert!(visited.is_complete());
    }

    // Tests out-of-range positions are ignored
    // Verified by wrapping positions into range
    #[test]
    fn test_out_of_range_positions_are_ignored() {
        let mut visited = VisitedSet::new(2);

        visited.mark([2, 0]);
        visited.mark([0, 2]);
        visited.mark([9, 9]);

        assert_eq!(visited.count(), 0);
        assert!(!visited.contains([9, 9]));
    }

    // Tests count tracks distinct cells across rows
    // Verified by mapping two positions to one bit
    #[test]
    fn test_count_tracks_distinct_cells() {
        let mut visited = VisitedSet::new(3);

        visited.mark([0, 0]);
        visited.mark([1, 2]);
        visited.mark([2, 1]);

        assert_eq!(visited.count(), 3);
        assert!(!visited.is_complete());
    }

    // Tests the degenerate empty record
    // Verified by making zero-size records incomplete
    #[test]
    fn test_zero_size_record_is_complete() {
        let visited = VisitedSet::new(0);

        assert!(visited.is_complete());
        assert_eq!(visited.count(), 0);
    }
}
