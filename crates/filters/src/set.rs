use std::collections::BTreeSet;
use std::collections::btree_set;
use std::fmt;
use std::sync::LazyLock;

use logging::trace_rules;

use crate::RuleKind;
use crate::defaults::DEFAULT_EXCLUSIONS;

static DEFAULT_RULES: LazyLock<RuleSet> =
    LazyLock::new(|| DEFAULT_EXCLUSIONS.into_iter().collect());

/// Rule tokens in effect for one directory.
///
/// A `RuleSet` is produced per directory by [`resolve`](Self::resolve) and
/// then handed to every child directory as its parent set. Each resolution
/// returns a new owned set, so a child can never observe or alter a sibling's
/// rules.
///
/// Tokens are kept in a sorted set: order carries no meaning, duplicates
/// collapse, and iteration is deterministic for diagnostics.
///
/// # Examples
///
/// ```
/// use filters::RuleSet;
///
/// let root = RuleSet::resolve(None, "");
/// assert_eq!(root, RuleSet::defaults());
///
/// let child = RuleSet::resolve(Some(&root), "!node_modules\nvendor");
/// assert!(!child.contains("node_modules"));
/// assert!(child.contains("vendor"));
/// assert!(root.contains("node_modules"));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RuleSet {
    tokens: BTreeSet<String>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the built-in default exclusions.
    #[must_use]
    pub fn defaults() -> Self {
        DEFAULT_RULES.clone()
    }

    /// Derives the effective rules for a directory.
    ///
    /// Resolution starts from a copy of `parent`, or from
    /// [`defaults`](Self::defaults) when there is no parent (the walk root).
    /// `override_text` is split on `\n` and each line is applied in order:
    ///
    /// - `!token` removes `token` when it is currently a member of the working
    ///   set. Otherwise the whole line, `!` included, is stored as an
    ///   exception marker for [`classify`](Self::classify).
    /// - Any other line, including an empty one, is inserted verbatim.
    ///
    /// Lines are not trimmed, and a trailing newline yields a trailing empty
    /// token. Text that is entirely empty carries no lines at all, so a
    /// missing override file and an empty one resolve identically.
    #[must_use]
    pub fn resolve(parent: Option<&Self>, override_text: &str) -> Self {
        let mut resolved = parent.map_or_else(Self::defaults, Clone::clone);

        for token in override_tokens(override_text) {
            resolved.apply(token);
        }

        resolved
    }

    fn apply(&mut self, token: &str) {
        if let Some(negated) = token.strip_prefix('!') {
            if self.tokens.remove(negated) {
                trace_rules!("override '{}' removed rule '{}'", token, negated);
                return;
            }
            trace_rules!("override '{}' stored as exception", token);
        }
        self.tokens.insert(token.to_owned());
    }

    /// Returns `true` when `token` is a member of the set.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Number of stored tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` when the set holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over the stored tokens in sorted order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.tokens.iter(),
        }
    }

    /// Iterates over the stored tokens paired with their [`RuleKind`].
    pub fn kinds(&self) -> impl Iterator<Item = (&str, RuleKind)> {
        self.iter().map(|token| (token, RuleKind::of(token)))
    }
}

fn override_tokens(text: &str) -> impl Iterator<Item = &str> {
    let lines = (!text.is_empty()).then(|| text.split('\n'));
    lines.into_iter().flatten()
}

/// Iterator over the tokens of a [`RuleSet`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: btree_set::Iter<'a, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for RuleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, token) in self.tokens.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{token:?}")?;
        }
        f.write_str("}")
    }
}
