use pretty::DocAllocator;

use lapis_printer::{Alloc, Anno, Builder, COMMA, DOT, Print, PrintCfg};

use super::{Exp, Level};
use crate::ident::Name;
use crate::traits::Shift;

/// A reference to a global constant, possibly instantiated with universe
/// levels.
///
/// Erasure re-emits every surviving constant reference without its level
/// instantiation; downstream code generation never consults universe data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Const {
    pub name: Name,
    pub levels: Vec<Level>,
}

impl Const {
    pub fn new(name: Name) -> Self {
        Const { name, levels: Vec::new() }
    }
}

impl From<Const> for Exp {
    fn from(val: Const) -> Self {
        Exp::Const(val)
    }
}

impl Shift for Const {
    fn shift_in_range(&mut self, _cutoff: usize, _by: isize) {}
}

impl<'a> Print<'a> for Const {
    fn print(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let Const { name, levels } = self;
        let name = name.print(cfg, alloc).annotate(Anno::Ctor);
        if levels.is_empty() || !cfg.print_levels {
            return name;
        }
        let levels = alloc.intersperse(
            levels.iter().map(|l| l.print(cfg, alloc)),
            alloc.text(COMMA).append(alloc.space()),
        );
        name.append(alloc.text(DOT)).append(levels.braces())
    }
}
