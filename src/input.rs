use std::io::BufRead;
use std::str::FromStr;

use nom::{
    character::complete::{char, digit1},
    combinator::{map_res, opt, recognize},
    sequence::tuple,
    IResult,
};

fn i64_parser(input: &str) -> IResult<&str, i64> {
    map_res(recognize(tuple((opt(char('-')), digit1))), FromStr::from_str)(input)
}

/// Parse one line of a depth report as a decimal measurement.
pub fn parse_depth(line: &str) -> Result<i64, String> {
    match i64_parser(line) {
        Ok((unparsed, depth)) => {
            if unparsed.is_empty() {
                Ok(depth)
            } else {
                Err(format!("unexpected trailing junk: '{}'", unparsed))
            }
        }
        Err(e) => Err(format!("failed to parse '{}': {}", line, e)),
    }
}

#[test]
fn test_parse_depth() {
    assert_eq!(Ok(17), parse_depth("17"));
    assert_eq!(Ok(-3), parse_depth("-3"));
    assert_eq!(Ok(0), parse_depth("0"));
    assert_eq!(Ok(2048), parse_depth("2048"));
    assert!(parse_depth("").is_err());
    assert!(parse_depth("12 fish").is_err());
    assert!(parse_depth("7.5").is_err());
    assert!(parse_depth("depth").is_err());
}

/// Read a whole report, one measurement per line.  The first I/O or
/// parse failure aborts the load with its 1-based line number.
pub fn read_depths<R: BufRead>(reader: R) -> Result<Vec<i64>, String> {
    reader
        .lines()
        .enumerate()
        .map(|(i, line)| match line {
            Err(e) => Err(format!("failed to read line {}: {}", i + 1, e)),
            Ok(line) => parse_depth(&line).map_err(|e| format!("line {}: {}", i + 1, e)),
        })
        .collect()
}

#[test]
fn test_read_depths() {
    use std::io::Cursor;
    assert_eq!(
        Ok(vec![199, 200, 208]),
        read_depths(Cursor::new("199\n200\n208\n"))
    );
    assert_eq!(Ok(vec![]), read_depths(Cursor::new("")));
}

#[test]
fn test_read_depths_reports_bad_line() {
    use std::io::Cursor;
    let err = read_depths(Cursor::new("199\nx\n208\n")).unwrap_err();
    assert!(err.starts_with("line 2"), "unexpected error: {}", err);
}
