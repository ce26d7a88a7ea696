//! Comparison operators found in requirement lines
//!
//! Handles the operators:
//! - Ordering: `<`, `<=`, `>`, `>=`
//! - Exact: `==`
//! - Compatible release: `~=` (emitted as `>=`)

use serde::{Deserialize, Serialize};
use std::fmt;

/// A version comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "<=")]
    LessOrEqual,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = "==")]
    Equal,
    /// PEP 440 compatible release (`~=`)
    #[serde(rename = "~=")]
    Compatible,
}

impl Operator {
    /// Order in which operators are searched for inside a token.
    ///
    /// Two-character operators precede their one-character prefixes so that
    /// `>=` is never read as `>` followed by a version starting with `=`.
    pub const SEARCH_ORDER: [Operator; 6] = [
        Operator::GreaterOrEqual,
        Operator::LessOrEqual,
        Operator::Greater,
        Operator::Less,
        Operator::Equal,
        Operator::Compatible,
    ];

    /// Returns the textual form of the operator
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Less => "<",
            Operator::LessOrEqual => "<=",
            Operator::Greater => ">",
            Operator::GreaterOrEqual => ">=",
            Operator::Equal => "==",
            Operator::Compatible => "~=",
        }
    }

    /// Returns the operator RPM understands for this one.
    ///
    /// RPM has no compatible-release operator, so `~=` becomes `>=`.
    pub fn normalized(self) -> Self {
        match self {
            Operator::Compatible => Operator::GreaterOrEqual,
            other => other,
        }
    }

    /// Finds the first operator (in [`Operator::SEARCH_ORDER`]) occurring in `token`
    ///
    /// Returns the operator and its byte offset.
    pub fn find_in(token: &str) -> Option<(Operator, usize)> {
        Self::SEARCH_ORDER
            .iter()
            .find_map(|op| token.find(op.symbol()).map(|idx| (*op, idx)))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        assert_eq!(Operator::Less.symbol(), "<");
        assert_eq!(Operator::LessOrEqual.symbol(), "<=");
        assert_eq!(Operator::Greater.symbol(), ">");
        assert_eq!(Operator::GreaterOrEqual.symbol(), ">=");
        assert_eq!(Operator::Equal.symbol(), "==");
        assert_eq!(Operator::Compatible.symbol(), "~=");
    }

    #[test]
    fn test_normalized() {
        assert_eq!(Operator::Compatible.normalized(), Operator::GreaterOrEqual);
        assert_eq!(Operator::Less.normalized(), Operator::Less);
        assert_eq!(Operator::Equal.normalized(), Operator::Equal);
    }

    #[test]
    fn test_find_prefers_two_char_operators() {
        assert_eq!(
            Operator::find_in("six>=1.6.1"),
            Some((Operator::GreaterOrEqual, 3))
        );
        assert_eq!(
            Operator::find_in("six<=1.6.1"),
            Some((Operator::LessOrEqual, 3))
        );
    }

    #[test]
    fn test_find_single_char() {
        assert_eq!(Operator::find_in("httplib2<1dev"), Some((Operator::Less, 8)));
        assert_eq!(Operator::find_in("a>1"), Some((Operator::Greater, 1)));
    }

    #[test]
    fn test_find_equal_and_compatible() {
        assert_eq!(Operator::find_in("a==1"), Some((Operator::Equal, 1)));
        assert_eq!(
            Operator::find_in("someshit~=0.0.4"),
            Some((Operator::Compatible, 8))
        );
    }

    #[test]
    fn test_find_none() {
        assert_eq!(Operator::find_in("requests"), None);
        assert_eq!(Operator::find_in(""), None);
        assert_eq!(Operator::find_in("a!=1"), None);
    }

    #[test]
    fn test_search_order_wins_over_position() {
        // `>` is searched before `<`, even though `<` appears first
        assert_eq!(Operator::find_in("a<1>2"), Some((Operator::Greater, 3)));
    }

    #[test]
    fn test_serde_uses_symbols() {
        let json = serde_json::to_string(&Operator::GreaterOrEqual).unwrap();
        assert_eq!(json, "\">=\"");

        let parsed: Operator = serde_json::from_str("\"~=\"").unwrap();
        assert_eq!(parsed, Operator::Compatible);
    }
}
