use std::fmt;

/// Shape of a rule token stored in a [`crate::RuleSet`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RuleKind {
    /// Bare folder name, matched against the base name anywhere in the tree.
    Name,
    /// Root-relative path (`/name`), matched only at that location.
    Rooted,
    /// `!`-prefixed exception marker, matched against the queried path.
    Exception,
}

impl RuleKind {
    /// Classifies a raw token.
    ///
    /// # Examples
    /// ```
    /// use filters::RuleKind;
    /// assert_eq!(RuleKind::of("node_modules"), RuleKind::Name);
    /// assert_eq!(RuleKind::of("/build"), RuleKind::Rooted);
    /// assert_eq!(RuleKind::of("!/build"), RuleKind::Exception);
    /// ```
    #[must_use]
    pub fn of(token: &str) -> Self {
        if token.starts_with('!') {
            Self::Exception
        } else if token.starts_with('/') {
            Self::Rooted
        } else {
            Self::Name
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => f.write_str("name"),
            Self::Rooted => f.write_str("rooted"),
            Self::Exception => f.write_str("exception"),
        }
    }
}
