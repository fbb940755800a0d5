//! Completion Filter
//!
//! The three recognized values of the filter control.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Incomplete,
}

/// Filter options as (value, label) for the select control
pub const FILTER_OPTIONS: &[(Filter, &str)] = &[
    (Filter::All, "All"),
    (Filter::Completed, "Completed"),
    (Filter::Incomplete, "Incomplete"),
];

impl Filter {
    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Completed => "completed",
            Filter::Incomplete => "incomplete",
        }
    }

    /// Whether an entry with the given completed flag is shown
    pub fn admits(self, completed: bool) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => completed,
            Filter::Incomplete => !completed,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter {0:?}")]
pub struct ParseFilterError(pub String);

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "completed" => Ok(Filter::Completed),
            "incomplete" => Ok(Filter::Incomplete),
            other => Err(ParseFilterError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognized_values() {
        for (filter, _) in FILTER_OPTIONS {
            assert_eq!(filter.as_str().parse::<Filter>(), Ok(*filter));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("All".parse::<Filter>().is_err());
        assert_eq!(
            "done".parse::<Filter>(),
            Err(ParseFilterError("done".to_string()))
        );
    }

    #[test]
    fn test_admits() {
        assert!(Filter::All.admits(true) && Filter::All.admits(false));
        assert!(Filter::Completed.admits(true));
        assert!(!Filter::Completed.admits(false));
        assert!(Filter::Incomplete.admits(false));
        assert!(!Filter::Incomplete.admits(true));
    }
}
