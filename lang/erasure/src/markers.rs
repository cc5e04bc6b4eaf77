use lapis_ast::{Const, Exp, Name};

/// Reserved name of the placeholder for erased types and proofs.
pub const NEUTRAL_NAME: &str = "_neutral_";
/// Reserved name of the placeholder for statically impossible branches.
pub const UNREACHABLE_NAME: &str = "_unreachable_";

/// The two canonical sentinel terms produced by erasure.
///
/// A `Markers` value is created once, before the first rewrite, and passed
/// by shared reference into every rewrite it must outlive. The reserved
/// names are off-limits for every other declaration; registration in
/// [crate::env::Environment] enforces this.
#[derive(Debug, Clone)]
pub struct Markers {
    neutral: Exp,
    unreachable: Exp,
}

impl Markers {
    pub fn new() -> Self {
        Markers {
            neutral: Exp::Const(Const::new(Name::from_str(NEUTRAL_NAME))),
            unreachable: Exp::Const(Const::new(Name::from_str(UNREACHABLE_NAME))),
        }
    }

    /// The placeholder standing in for a subterm that carried no runtime
    /// information.
    pub fn neutral(&self) -> Exp {
        self.neutral.clone()
    }

    /// The placeholder standing in for a branch that can never execute.
    pub fn unreachable(&self) -> Exp {
        self.unreachable.clone()
    }

    pub fn is_reserved(name: &Name) -> bool {
        name.is_atomic() && (name.last() == NEUTRAL_NAME || name.last() == UNREACHABLE_NAME)
    }

    /// Any constant reference carrying the reserved name is the marker.
    pub fn is_neutral(e: &Exp) -> bool {
        matches!(e, Exp::Const(c) if c.name.is_atomic() && c.name.last() == NEUTRAL_NAME)
    }

    pub fn is_unreachable(e: &Exp) -> bool {
        matches!(e, Exp::Const(c) if c.name.is_atomic() && c.name.last() == UNREACHABLE_NAME)
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::new()
    }
}
