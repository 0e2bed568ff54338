//! Queries: the attributes a roll must show to count as a hit.

use std::str::FromStr;

use crate::dice::{Attribute, Tally};
use crate::error::{DiceError, DiceResult};

/// An ordered list of attributes, all of which must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    attributes: Vec<Attribute>,
}

impl Query {
    /// Create a query from already-parsed attributes.
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self { attributes }
    }

    /// Parse a hyphen-joined query such as `"success-advantage"`.
    ///
    /// Every name is validated here, before any sampling happens.
    pub fn parse(query: &str) -> DiceResult<Self> {
        query
            .split('-')
            .map(str::parse::<Attribute>)
            .collect::<DiceResult<Vec<Attribute>>>()
            .map(Self::new)
    }

    /// The attributes in the order they were requested.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Whether a rolled tally satisfies every attribute.
    pub fn matches(&self, tally: &Tally) -> bool {
        tally.matches(&self.attributes)
    }
}

impl FromStr for Query {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.attributes.iter().map(|a| a.name()).collect();
        write!(f, "{}", names.join(" and "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single() {
        let q = Query::parse("success").unwrap();
        assert_eq!(q.attributes(), &[Attribute::Success]);
    }

    #[test]
    fn parse_keeps_order() {
        let q = Query::parse("triumph-success-threat").unwrap();
        assert_eq!(
            q.attributes(),
            &[Attribute::Triumph, Attribute::Success, Attribute::Threat]
        );
    }

    #[test]
    fn parse_rejects_unknown_name() {
        assert!(matches!(
            Query::parse("success-explode"),
            Err(DiceError::UnknownAttribute(ref name)) if name == "explode"
        ));
        assert!(matches!(
            Query::parse(""),
            Err(DiceError::UnknownAttribute(_))
        ));
    }

    #[test]
    fn display_joins_with_and() {
        let q: Query = "success-advantage".parse().unwrap();
        assert_eq!(q.to_string(), "success and advantage");
    }

    #[test]
    fn matches_delegates_to_tally() {
        let q = Query::parse("failure").unwrap();
        assert!(q.matches(&Tally::new()));
        let q = Query::parse("success").unwrap();
        assert!(!q.matches(&Tally::new()));
    }
}
