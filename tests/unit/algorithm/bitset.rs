//! Tests for `FootprintBitset` membership queries

#[cfg(test)]
mod tests {
    use deckpack::algorithm::bitset::FootprintBitset;

    // Tests a freshly built bitset reports no filled cells
    // Verified by seeding the backing BitVec with all bits set
    #[test]
    fn test_new_bitset_reports_empty() {
        let bitset = FootprintBitset::new(4, 4);
        assert_eq!(bitset.count(), 0);
        assert!(!bitset.contains(2, 2));
    }

    // Tests insert marks exactly the requested cell
    // Verified by flipping the wrong bit in insert's index calculation
    #[test]
    fn test_insert_marks_only_target_cell() {
        let mut bitset = FootprintBitset::new(4, 4);
        bitset.insert(2, 1);
        assert!(bitset.contains(2, 1));
        assert!(!bitset.contains(1, 2));
        assert_eq!(bitset.count(), 1);
    }

    // Tests an rx past the stored width reports absent rather than wrapping
    // into the next row's bit
    // Verified by removing the bounds check from contains
    #[test]
    fn test_rx_at_width_is_out_of_range_not_next_row() {
        let mut bitset = FootprintBitset::new(3, 3);
        bitset.insert(0, 1);
        assert!(!bitset.contains(3, 0));
        assert!(bitset.contains(0, 1));
    }

    // Tests multiple inserts accumulate independently
    // Verified by making insert overwrite previous bits instead of setting them
    #[test]
    fn test_multiple_inserts_accumulate() {
        let mut bitset = FootprintBitset::new(5, 2);
        bitset.insert(0, 0);
        bitset.insert(4, 1);
        bitset.insert(2, 0);
        assert_eq!(bitset.count(), 3);
        assert!(bitset.contains(0, 0));
        assert!(bitset.contains(4, 1));
        assert!(bitset.contains(2, 0));
        assert!(!bitset.contains(1, 0));
    }
}
