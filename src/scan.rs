/// Count the positions where a measurement exceeds its immediate
/// predecessor.  The first measurement has no predecessor and never
/// counts; ties and decreases never count.
pub fn count_increases(depths: &[i64]) -> usize {
    depths.windows(2).filter(|w| w[1] > w[0]).count()
}

#[test]
fn test_count_increases() {
    assert_eq!(0, count_increases(&[]));
    assert_eq!(0, count_increases(&[5]));
    assert_eq!(2, count_increases(&[1, 2, 3]));
    assert_eq!(0, count_increases(&[3, 2, 1]));
    assert_eq!(0, count_increases(&[7, 7, 7]));
    assert_eq!(4, count_increases(&[1, 2, 3, 4, 5]));
}

#[test]
fn test_count_increases_example() {
    let depths = [199, 200, 208, 210, 200, 207, 240, 269, 260, 263];
    assert_eq!(7, count_increases(&depths));
}

/// Count the positions where a 3-measurement rolling sum exceeds the
/// previous rolling sum.  Fewer than four measurements admit no
/// comparison, so the count is zero.
pub fn count_window_sum_increases(depths: &[i64]) -> usize {
    let sums: Vec<i64> = depths.windows(3).map(|w| w.iter().sum()).collect();
    count_increases(&sums)
}

#[test]
fn test_count_window_sum_increases() {
    assert_eq!(0, count_window_sum_increases(&[]));
    assert_eq!(0, count_window_sum_increases(&[5]));
    assert_eq!(0, count_window_sum_increases(&[1, 2, 3]));
    assert_eq!(1, count_window_sum_increases(&[1, 2, 3, 4]));
    assert_eq!(0, count_window_sum_increases(&[4, 3, 2, 1]));
}

#[test]
fn test_count_window_sum_increases_example() {
    let depths = [199, 200, 208, 210, 200, 207, 240, 269, 260, 263];
    assert_eq!(5, count_window_sum_increases(&depths));
}

#[test]
fn test_window_sums_match_direct_difference() {
    // adjacent windows share two terms, so the comparison reduces to
    // depths[j+2] > depths[j-1]
    let cases: &[&[i64]] = &[
        &[],
        &[5],
        &[1, 2, 3, 4],
        &[199, 200, 208, 210, 200, 207, 240, 269, 260, 263],
        &[10, 9, 8, 7, 8, 9, 10, 10, 9, 11, 0, 4],
        &[-3, 0, -3, 0, -3, 0, -3],
    ];
    for depths in cases {
        let direct = depths.windows(4).filter(|w| w[3] > w[0]).count();
        assert_eq!(direct, count_window_sum_increases(depths));
    }
}
