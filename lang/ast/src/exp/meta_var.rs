use pretty::DocAllocator;

use lapis_printer::{Alloc, Builder, Print, PrintCfg, QUESTION_MARK};

use super::Exp;
use crate::traits::Shift;

/// A metavariable left unsolved by elaboration.
///
/// Erasure copies metavariables unchanged; deciding what to do with them
/// is the business of the downstream code generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetaVar {
    pub id: u64,
}

impl From<MetaVar> for Exp {
    fn from(val: MetaVar) -> Self {
        Exp::MetaVar(val)
    }
}

impl Shift for MetaVar {
    fn shift_in_range(&mut self, _cutoff: usize, _by: isize) {}
}

impl<'a> Print<'a> for MetaVar {
    fn print(&'a self, _cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        alloc.text(QUESTION_MARK).append(alloc.text(format!("{}", self.id)))
    }
}
