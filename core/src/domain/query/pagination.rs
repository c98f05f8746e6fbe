use crate::domain::query::entities::PageRange;

/// Computes the inclusive slice `[start, end]` of a page.
///
/// Never fails: any input that leaves nothing to paginate yields
/// [`PageRange::EMPTY`]. A page size of zero requests every item and is only
/// valid from offset zero.
pub fn compute_range(page_size: i32, offset: i32, total_count: i64) -> PageRange {
    if offset < 0
        || page_size < 0
        || total_count <= 0
        || total_count > i64::from(i32::MAX)
        || i64::from(offset) >= total_count
        || (page_size == 0 && offset != 0)
    {
        return PageRange::EMPTY;
    }

    let start = i64::from(offset);
    let last = total_count - 1;
    let end = if page_size == 0 {
        last
    } else {
        (start + i64::from(page_size) - 1).min(last)
    };

    PageRange { start, end }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: i64, end: i64) -> PageRange {
        PageRange { start, end }
    }

    #[test]
    fn test_first_page() {
        assert_eq!(compute_range(10, 0, 35), range(0, 9));
    }

    #[test]
    fn test_last_partial_page() {
        assert_eq!(compute_range(10, 30, 35), range(30, 34));
    }

    #[test]
    fn test_exact_last_page() {
        assert_eq!(compute_range(5, 30, 35), range(30, 34));
        assert_eq!(compute_range(1, 34, 35), range(34, 34));
    }

    #[test]
    fn test_zero_page_size_returns_everything() {
        assert_eq!(compute_range(0, 0, 10), range(0, 9));
    }

    #[test]
    fn test_zero_page_size_with_offset_is_empty() {
        assert_eq!(compute_range(0, 2, 10), PageRange::EMPTY);
    }

    #[test]
    fn test_offset_past_end_is_empty() {
        assert_eq!(compute_range(10, 40, 35), PageRange::EMPTY);
        assert_eq!(compute_range(10, 35, 35), PageRange::EMPTY);
    }

    #[test]
    fn test_negative_inputs_are_empty() {
        assert_eq!(compute_range(-10, 0, 35), PageRange::EMPTY);
        assert_eq!(compute_range(10, -1, 35), PageRange::EMPTY);
        assert_eq!(compute_range(10, 0, -5), PageRange::EMPTY);
    }

    #[test]
    fn test_empty_result_set() {
        assert_eq!(compute_range(10, 0, 0), PageRange::EMPTY);
    }

    #[test]
    fn test_total_count_overflow_is_empty() {
        assert_eq!(
            compute_range(10, 0, i64::from(i32::MAX) + 1),
            PageRange::EMPTY
        );
        assert_eq!(
            compute_range(10, 0, i64::from(i32::MAX)),
            range(0, 9)
        );
    }

    #[test]
    fn test_large_page_size_does_not_overflow() {
        assert_eq!(
            compute_range(i32::MAX, i32::MAX - 1, i64::from(i32::MAX)),
            range(i64::from(i32::MAX) - 1, i64::from(i32::MAX) - 1)
        );
    }
}
