use std::fs::File;
use std::io::BufReader;

use sonar_sweep::input::read_depths;
use sonar_sweep::scan::{count_increases, count_window_sum_increases};

#[test]
fn fixed_report_golden_counts() {
    let file = File::open("data/input.txt").expect("depth report fixture");
    let depths = read_depths(BufReader::new(file)).expect("well-formed fixture");

    assert_eq!(2000, depths.len(), "expect vec len");
    assert_eq!(1557, count_increases(&depths), "expect increases");
    assert_eq!(
        1608,
        count_window_sum_increases(&depths),
        "expect windowed increases"
    );
}
