// ABOUTME: Parser for human-readable issue identifiers like ENG-123
// ABOUTME: Decomposes an identifier into an uppercased team key and sequence number

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::error::FetchError;

static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z][A-Za-z0-9_]*)-(\d+)$").unwrap());

/// A parsed issue identifier: team key plus sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRef {
    /// Team key, ASCII-uppercased (`eng-42` and `ENG-42` are the same issue)
    pub team_key: String,
    pub number: u64,
}

impl FromStr for IssueRef {
    type Err = FetchError;

    fn from_str(identifier: &str) -> Result<Self, Self::Err> {
        let value = identifier.trim();
        let captures = IDENTIFIER_RE
            .captures(value)
            .ok_or_else(|| FetchError::InvalidIdentifier(identifier.to_string()))?;

        let number = captures[2]
            .parse()
            .map_err(|_| FetchError::InvalidIdentifier(identifier.to_string()))?;

        Ok(IssueRef {
            team_key: captures[1].to_ascii_uppercase(),
            number,
        })
    }
}

impl fmt::Display for IssueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.team_key, self.number)
    }
}
