use num_bigint::BigUint;
use std::fmt;

/// An inclusive run of consecutive numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberRange {
    pub start: BigUint,
    pub end: BigUint,
}

impl NumberRange {
    fn single(n: BigUint) -> Self {
        Self {
            start: n.clone(),
            end: n,
        }
    }
}

impl fmt::Display for NumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Collapse `numbers` into ascending runs of consecutive values.
///
/// Duplicates are kept: a repeated value cannot extend a run (it is not
/// `end + 1`), so it opens a new run of its own.
pub fn compress(numbers: &[BigUint]) -> Vec<NumberRange> {
    let mut sorted = numbers.to_vec();
    sorted.sort_unstable();

    let mut out: Vec<NumberRange> = Vec::new();
    for n in sorted {
        match out.last_mut() {
            Some(run) if &run.end + 1u32 == n => run.end = n,
            _ => out.push(NumberRange::single(n)),
        }
    }
    out
}

/// Render the runs of `numbers` as space-terminated tokens, e.g. `"1-3 7 9-10 "`.
pub fn format_ranges(numbers: &[BigUint]) -> String {
    compress(numbers)
        .iter()
        .map(|r| format!("{r} "))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nums(values: &[u64]) -> Vec<BigUint> {
        values.iter().copied().map(BigUint::from).collect()
    }

    #[test]
    fn mixed_runs() {
        assert_eq!(format_ranges(&nums(&[1, 2, 3, 7, 9, 10])), "1-3 7 9-10 ");
    }

    #[test]
    fn unsorted_input() {
        assert_eq!(format_ranges(&nums(&[10, 1, 2])), "1-2 10 ");
    }

    #[test]
    fn single_value() {
        assert_eq!(format_ranges(&nums(&[5])), "5 ");
        assert_eq!(
            compress(&nums(&[5])),
            vec![NumberRange {
                start: BigUint::from(5u32),
                end: BigUint::from(5u32)
            }]
        );
    }

    #[test]
    fn duplicates_repeat() {
        assert_eq!(format_ranges(&nums(&[4, 4, 5])), "4 4-5 ");
        assert_eq!(format_ranges(&nums(&[3, 3])), "3 3 ");
    }

    #[test]
    fn zero_starts_a_run() {
        assert_eq!(format_ranges(&nums(&[0, 1])), "0-1 ");
    }

    #[test]
    fn runs_past_u64() {
        let max = BigUint::from(u64::MAX);
        let numbers = vec![&max + 2u32, max.clone(), &max + 1u32, &max + 4u32];
        assert_eq!(
            format_ranges(&numbers),
            "18446744073709551615-18446744073709551617 18446744073709551619 "
        );
    }

    #[test]
    fn empty_is_empty() {
        assert!(compress(&[]).is_empty());
        assert_eq!(format_ranges(&[]), "");
    }
}
