// Expression operators and their expansion rules

use serde::{Deserialize, Serialize};

/// The operator leading an expression, e.g. the `?` in `{?x,y}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Operator {
    /// `{var}`
    #[default]
    Simple,
    /// `{+var}`
    Reserved,
    /// `{#var}`
    Fragment,
    /// `{.var}`
    Label,
    /// `{/var}`
    PathSegment,
    /// `{;var}`
    PathParameter,
    /// `{?var}`
    Query,
    /// `{&var}`
    QueryContinuation,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Reserved),
            '#' => Some(Operator::Fragment),
            '.' => Some(Operator::Label),
            '/' => Some(Operator::PathSegment),
            ';' => Some(Operator::PathParameter),
            '?' => Some(Operator::Query),
            '&' => Some(Operator::QueryContinuation),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Operator::Simple => None,
            Operator::Reserved => Some('+'),
            Operator::Fragment => Some('#'),
            Operator::Label => Some('.'),
            Operator::PathSegment => Some('/'),
            Operator::PathParameter => Some(';'),
            Operator::Query => Some('?'),
            Operator::QueryContinuation => Some('&'),
        }
    }

    /// Emitted once before the expansion when any variable is defined
    pub fn prefix(&self) -> &'static str {
        match self {
            Operator::Simple | Operator::Reserved => "",
            Operator::Fragment => "#",
            Operator::Label => ".",
            Operator::PathSegment => "/",
            Operator::PathParameter => ";",
            Operator::Query => "?",
            Operator::QueryContinuation => "&",
        }
    }

    /// Separator between expanded variables (and exploded members)
    pub fn joiner(&self) -> &'static str {
        match self {
            Operator::Simple | Operator::Reserved | Operator::Fragment => ",",
            Operator::Label => ".",
            Operator::PathSegment => "/",
            Operator::PathParameter => ";",
            Operator::Query | Operator::QueryContinuation => "&",
        }
    }

    /// Query-form operators render `name=value` pairs
    pub fn is_query_form(&self) -> bool {
        matches!(
            self,
            Operator::PathParameter | Operator::Query | Operator::QueryContinuation
        )
    }

    /// Reserved characters pass through unencoded
    pub fn allows_reserved(&self) -> bool {
        matches!(self, Operator::Reserved | Operator::Fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_roundtrip() {
        for ch in ['+', '#', '.', '/', ';', '?', '&'] {
            let op = Operator::from_char(ch).unwrap();
            assert_eq!(op.as_char(), Some(ch));
        }
        assert_eq!(Operator::from_char('a'), None);
        assert_eq!(Operator::from_char('='), None);
        assert_eq!(Operator::Simple.as_char(), None);
    }

    #[test]
    fn test_table() {
        let table = [
            (Operator::Simple, "", ",", false),
            (Operator::Reserved, "", ",", false),
            (Operator::Fragment, "#", ",", false),
            (Operator::Label, ".", ".", false),
            (Operator::PathSegment, "/", "/", false),
            (Operator::PathParameter, ";", ";", true),
            (Operator::Query, "?", "&", true),
            (Operator::QueryContinuation, "&", "&", true),
        ];

        for (op, prefix, joiner, query_form) in table {
            assert_eq!(op.prefix(), prefix, "prefix of {:?}", op);
            assert_eq!(op.joiner(), joiner, "joiner of {:?}", op);
            assert_eq!(op.is_query_form(), query_form, "query form of {:?}", op);
        }
    }

    #[test]
    fn test_allows_reserved() {
        assert!(Operator::Reserved.allows_reserved());
        assert!(Operator::Fragment.allows_reserved());
        assert!(!Operator::Simple.allows_reserved());
        assert!(!Operator::Query.allows_reserved());
    }
}
