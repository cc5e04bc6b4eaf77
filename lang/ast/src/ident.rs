use std::fmt;

use pretty::DocAllocator;

use lapis_printer::{Alloc, Builder, Print, PrintCfg, UNDERSCORE};

// Hierarchical names
//
//

/// A hierarchical, dot-separated name for a global declaration.
///
/// E.g. `nat`, `nat.succ`, `list.cases_on`. The eliminators of an inductive
/// family `I` are addressed as `I.cases_on`, `I.rec` and `I.no_confusion`,
/// so the family is recovered from an eliminator name via [Name::prefix].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name {
    segments: Vec<String>,
}

impl Name {
    pub fn from_str(name: &str) -> Self {
        Name { segments: name.split('.').map(ToOwned::to_owned).collect() }
    }

    /// Extend the name by one further segment: `nat.append("rec")` is `nat.rec`.
    pub fn append(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_owned());
        Name { segments }
    }

    /// The name without its last segment.
    ///
    /// Returns `None` for atomic names.
    pub fn prefix(&self) -> Option<Name> {
        if self.segments.len() < 2 {
            return None;
        }
        Name { segments: self.segments[..self.segments.len() - 1].to_vec() }.into()
    }

    /// The last segment of the name.
    pub fn last(&self) -> &str {
        // Names always consist of at least one segment
        self.segments.last().expect("empty name")
    }

    pub fn is_atomic(&self) -> bool {
        self.segments.len() == 1
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl<'a> Print<'a> for Name {
    fn print(&'a self, _cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        alloc.text(self.to_string())
    }
}

// Binder names
//
//

/// The name attached to a binder (Pi, Lambda or Let).
///
/// Binder names are display hints only; they are ignored when comparing
/// terms for structural equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BinderName {
    Named(String),
    Wildcard,
}

impl BinderName {
    pub fn from_str(name: &str) -> Self {
        BinderName::Named(name.to_owned())
    }
}

impl fmt::Display for BinderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinderName::Named(name) => write!(f, "{name}"),
            BinderName::Wildcard => write!(f, "{UNDERSCORE}"),
        }
    }
}

impl<'a> Print<'a> for BinderName {
    fn print(&'a self, _cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        alloc.text(self.to_string())
    }
}
