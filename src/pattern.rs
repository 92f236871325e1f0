use crate::consts::DIGIT_RUN_RE;
use num_bigint::BigUint;
use std::fmt;

/// One way of generalizing a file name: a single digit run replaced by a
/// width-aware placeholder, together with the number that run held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub pattern: String,
    pub value: BigUint,
}

/// Every candidate pattern for one file name, one per digit run, left to right.
///
/// # Examples
///
/// ```rust
/// use lss::pattern::FileCandidate;
/// use num_bigint::BigUint;
///
/// let file = FileCandidate::from_name("file4.0001.txt");
/// assert_eq!(file.candidates[0].pattern, "file%d.0001.txt");
/// assert_eq!(file.candidates[0].value, BigUint::from(4u32));
/// assert_eq!(file.candidates[1].pattern, "file4.%04d.txt");
/// assert_eq!(file.candidates[1].value, BigUint::from(1u32));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub original_name: String,
    pub candidates: Vec<Candidate>,
}

impl FileCandidate {
    /// Generate all candidate patterns for `name`. Names without digits get
    /// an empty candidate list.
    pub fn from_name(name: &str) -> Self {
        let candidates = DIGIT_RUN_RE
            .find_iter(name)
            .map(|m| {
                let placeholder = placeholder(m.len());
                let pattern = format!("{}{placeholder}{}", &name[..m.start()], &name[m.end()..]);
                Candidate {
                    pattern,
                    value: parse_digits(m.as_str()),
                }
            })
            .collect();

        Self {
            original_name: name.to_string(),
            candidates,
        }
    }

    pub fn has_candidates(&self) -> bool {
        !self.candidates.is_empty()
    }

    /// The value recorded for `pattern`, if this file can be written that way.
    pub fn value_for(&self, pattern: &str) -> Option<&BigUint> {
        self.candidates
            .iter()
            .find(|c| c.pattern == pattern)
            .map(|c| &c.value)
    }

    /// First of `self`'s patterns that `other` also has, with both values.
    ///
    /// Iteration follows `self`'s candidate order, so when several patterns are
    /// shared the one listed first here wins.
    pub fn shared_pattern<'a>(
        &'a self,
        other: &'a FileCandidate,
    ) -> Option<(&'a str, &'a BigUint, &'a BigUint)> {
        self.candidates.iter().find_map(|c| {
            other
                .value_for(&c.pattern)
                .map(|theirs| (c.pattern.as_str(), &c.value, theirs))
        })
    }
}

impl fmt::Display for FileCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.original_name)?;
        for c in &self.candidates {
            writeln!(f, "{} {}", c.pattern, c.value)?;
        }
        Ok(())
    }
}

/// `%d` for a one-digit run, `%0Nd` for an N-digit run.
fn placeholder(width: usize) -> String {
    match width {
        1 => "%d".to_string(),
        w => format!("%0{w}d"),
    }
}

/// Value of a run of ASCII digits, however long.
fn parse_digits(digits: &str) -> BigUint {
    digits
        .bytes()
        .fold(BigUint::default(), |acc, b| acc * 10u32 + u32::from(b - b'0'))
}
