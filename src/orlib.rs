//! Reader for OR-Library capacitated warehouse location instances.
//!
//! Layout (blank lines are ignored everywhere):
//!
//! ```text
//! m n
//! capacity fixed_cost        (m lines, one per facility)
//! demand                     (per customer, n times)
//! c_1 c_2 ... c_m            (allocation costs, may wrap over lines)
//! ```
//!
//! Only the facility table and the summed customer demand are kept.
//! Allocation costs are checked for well-formedness and then dropped.

use std::path::Path;

use crate::error::{CflpError, Result};
use crate::model::{Facility, Instance};

/// Reads and parses an instance file.
pub fn read_path<P: AsRef<Path>>(path: P) -> Result<Instance> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let instance = parse_str(&text)?;
    tracing::debug!(
        path = %path.display(),
        facilities = instance.len(),
        demand = instance.total_demand(),
        "loaded OR-Library instance"
    );
    Ok(instance)
}

/// Parses an instance from its text.
pub fn parse_str(text: &str) -> Result<Instance> {
    let mut lines = Lines::new(text);

    let (line, header) = lines.next_line("header `m n`")?;
    let header: Vec<&str> = header.split_whitespace().collect();
    if header.len() != 2 {
        return Err(parse_error(line, format!("expected `m n`, got {} values", header.len())));
    }
    let m: usize = parse_value(line, header[0], "facility count")?;
    let n: usize = parse_value(line, header[1], "customer count")?;

    let mut facilities = Vec::with_capacity(m);
    for j in 0..m {
        let (line, text) = lines.next_line("facility line")?;
        let parts: Vec<&str> = text.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(parse_error(
                line,
                format!(
                    "facility {}: expected capacity and fixed cost, got {} values",
                    j + 1,
                    parts.len()
                ),
            ));
        }
        let capacity = parse_value(line, parts[0], "capacity")?;
        let fixed_cost = parse_value(line, parts[1], "fixed cost")?;
        facilities.push(Facility::new(capacity, fixed_cost));
    }

    let mut total_demand = 0.0;
    for i in 0..n {
        let (line, text) = lines.next_line("customer demand")?;
        let demand: f64 = parse_value(line, text, "demand")
            .map_err(|_| parse_error(line, format!("customer {}: malformed demand `{text}`", i + 1)))?;
        total_demand += demand;

        let mut costs = 0usize;
        while costs < m {
            let (line, text) = lines.next_line("allocation costs")?;
            for token in text.split_whitespace() {
                let _: f64 = parse_value(line, token, "allocation cost")?;
                costs += 1;
            }
        }
    }

    Instance::new(facilities, total_demand)
}

/// Non-empty trimmed lines with their 1-based line numbers.
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    last: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines().enumerate(),
            last: 0,
        }
    }

    fn next_line(&mut self, expected: &str) -> Result<(usize, &'a str)> {
        for (idx, raw) in self.inner.by_ref() {
            self.last = idx + 1;
            let line = raw.trim();
            if !line.is_empty() {
                return Ok((idx + 1, line));
            }
        }
        Err(parse_error(
            self.last + 1,
            format!("unexpected end of file, expected {expected}"),
        ))
    }
}

fn parse_value<T: std::str::FromStr>(line: usize, token: &str, what: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| parse_error(line, format!("invalid {what}: `{token}`")))
}

fn parse_error(line: usize, message: String) -> CflpError {
    CflpError::Parse { line, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
3 2
10 5.0
20 7.5

15 6
12
 1.0 2.0
 3.0
13
4.0 5.0 6.0 7.0
";

    #[test]
    fn test_parse_small_instance() {
        let inst = parse_str(SMALL).unwrap();
        assert_eq!(inst.len(), 3);
        assert_eq!(inst.facility(1), &Facility::new(20.0, 7.5));
        assert_eq!(inst.total_demand(), 25.0);
        assert_eq!(inst.total_capacity(), 45.0);
    }

    #[test]
    fn test_empty_file() {
        let err = parse_str("\n\n").unwrap_err();
        assert!(matches!(err, CflpError::Parse { .. }), "{err}");
    }

    #[test]
    fn test_bad_header() {
        let err = parse_str("3\n").unwrap_err();
        assert!(matches!(err, CflpError::Parse { line: 1, .. }), "{err}");
    }

    #[test]
    fn test_bad_facility_line_reports_line_number() {
        let err = parse_str("2 1\n10 5\n\n20 x\n").unwrap_err();
        match err {
            CflpError::Parse { line, message } => {
                assert_eq!(line, 4);
                assert!(message.contains("fixed cost"), "{message}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_truncated_costs() {
        let err = parse_str("2 1\n10 5\n20 6\n7\n1.0\n").unwrap_err();
        match err {
            CflpError::Parse { message, .. } => {
                assert!(message.contains("allocation costs"), "{message}")
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_malformed_demand() {
        let err = parse_str("1 1\n10 5\n7 8\n1.0\n").unwrap_err();
        assert!(matches!(err, CflpError::Parse { line: 3, .. }), "{err}");
    }

    #[test]
    fn test_zero_facilities_is_invalid_input() {
        let err = parse_str("0 1\n5\n").unwrap_err();
        assert!(matches!(err, CflpError::InvalidInput(_)), "{err}");
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_path("/no/such/orlib/cap41.txt").unwrap_err();
        assert!(matches!(err, CflpError::Io(_)));
    }

    #[test]
    fn test_read_path_from_file() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("u_cflp_orlib_{}.txt", std::process::id()));
        std::fs::write(&path, SMALL).unwrap();
        let inst = read_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(inst.len(), 3);
    }
}
