use pretty::DocAllocator;

use lapis_printer::{Alloc, Builder, Print, PrintCfg};

use super::Exp;
use crate::traits::Shift;

/// A bound occurrence of a local variable, represented as a de Bruijn index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variable {
    pub idx: usize,
}

impl From<Variable> for Exp {
    fn from(val: Variable) -> Self {
        Exp::Variable(val)
    }
}

impl Shift for Variable {
    fn shift_in_range(&mut self, cutoff: usize, by: isize) {
        if self.idx >= cutoff {
            self.idx = (self.idx as isize + by) as usize;
        }
    }
}

impl<'a> Print<'a> for Variable {
    fn print(&'a self, _cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        alloc.text(format!("@{}", self.idx))
    }
}
