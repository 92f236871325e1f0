use crate::ranges::format_ranges;
use num_bigint::BigUint;
use std::fmt;

/// A set of file names inferred to share one pattern.
///
/// A group is either a *series* (built from files whose digit runs lined up,
/// carrying one number per file) or a *literal* (a single file name that never
/// matched anything, carrying no numbers).
///
/// # Examples
///
/// ```rust
/// use lss::group::Group;
///
/// let mut series = Group::pair("img%d.png", 1u32, 2u32);
/// series.add(10u32);
/// assert_eq!(series.to_string(), "3 img%d.png 1-2 10 ");
///
/// let literal = Group::literal("notes.txt");
/// assert_eq!(literal.to_string(), "1 notes.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pattern: String,
    numbers: Vec<BigUint>,
    count: usize,
}

impl Group {
    /// A singleton group whose pattern is the file name itself.
    pub fn literal(name: impl Into<String>) -> Self {
        Self {
            pattern: name.into(),
            numbers: Vec::new(),
            count: 1,
        }
    }

    /// A series group seeded by the first two files sharing `pattern`.
    pub fn pair(
        pattern: impl Into<String>,
        first: impl Into<BigUint>,
        second: impl Into<BigUint>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            numbers: vec![first.into(), second.into()],
            count: 2,
        }
    }

    pub fn add(&mut self, number: impl Into<BigUint>) {
        self.numbers.push(number.into());
        self.count += 1;
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Numbers in the order they were recorded, duplicates included.
    pub fn numbers(&self) -> &[BigUint] {
        &self.numbers
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_literal(&self) -> bool {
        self.numbers.is_empty()
    }
}

/// The report line for this group, without a newline.
impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_literal() {
            write!(f, "1 {}", self.pattern)
        } else {
            write!(
                f,
                "{} {} {}",
                self.count,
                self.pattern,
                format_ranges(&self.numbers)
            )
        }
    }
}
