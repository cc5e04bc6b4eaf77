use pretty::DocAllocator;

use lapis_printer::{Alloc, Builder, COMMA, Print, PrintCfg, SORT};

use super::Exp;
use crate::ident::Name;
use crate::traits::Shift;

// Universe levels
//
//

/// A universe level expression.
///
/// `Sort(Zero)` is the impredicative universe `Prop` of propositions;
/// everything inhabiting a type in `Prop` is a proof and carries no
/// runtime information.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Level {
    Zero,
    Succ(Box<Level>),
    Param(Name),
    Max(Box<Level>, Box<Level>),
}

impl Level {
    pub fn succ(self) -> Level {
        Level::Succ(Box::new(self))
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Level::Zero)
    }
}

impl<'a> Print<'a> for Level {
    fn print(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        match self {
            Level::Zero => alloc.text("0"),
            Level::Succ(level) => level.print(cfg, alloc).append(alloc.text("+1")),
            Level::Param(name) => name.print(cfg, alloc),
            Level::Max(lhs, rhs) => alloc
                .text("max(")
                .append(lhs.print(cfg, alloc))
                .append(alloc.text(COMMA))
                .append(alloc.space())
                .append(rhs.print(cfg, alloc))
                .append(alloc.text(")")),
        }
    }
}

// Sort
//
//

/// A type universe `Sort l`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sort {
    pub level: Level,
}

impl From<Sort> for Exp {
    fn from(val: Sort) -> Self {
        Exp::Sort(val)
    }
}

impl Shift for Sort {
    fn shift_in_range(&mut self, _cutoff: usize, _by: isize) {}
}

impl<'a> Print<'a> for Sort {
    fn print(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        alloc.text(SORT).append(alloc.space()).append(self.level.print(cfg, alloc))
    }
}
