use num_bigint::BigUint;
use pretty::DocAllocator;

use lapis_printer::{Alloc, Builder, Print, PrintCfg};

use super::Exp;
use crate::traits::Shift;

/// A value literal. Literals are runtime-relevant leaves and pass through
/// erasure unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Nat(BigUint),
    Str(String),
}

impl From<Literal> for Exp {
    fn from(val: Literal) -> Self {
        Exp::Literal(val)
    }
}

impl Shift for Literal {
    fn shift_in_range(&mut self, _cutoff: usize, _by: isize) {}
}

impl<'a> Print<'a> for Literal {
    fn print(&'a self, _cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        match self {
            Literal::Nat(n) => alloc.text(n.to_string()),
            Literal::Str(s) => alloc.text(format!("{s:?}")),
        }
    }
}
