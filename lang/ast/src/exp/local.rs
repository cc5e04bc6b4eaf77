use derivative::Derivative;

use lapis_printer::{Alloc, Builder, Print, PrintCfg};

use super::Exp;
use crate::ident::BinderName;
use crate::traits::Shift;

/// A free local constant.
///
/// Locals are created when a pass peels binders off a term: the binder is
/// instantiated with a fresh local that remembers the binder's name and
/// declared type. They never occur in elaborated input terms; they exist
/// only transiently between peeling and re-abstraction.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Local {
    /// Unique id; two locals are the same local iff their ids are equal.
    pub id: u64,
    /// Display name hint, taken from the binder this local replaced.
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub name: BinderName,
    /// The declared type of the binder this local replaced.
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub ty: Box<Exp>,
}

impl From<Local> for Exp {
    fn from(val: Local) -> Self {
        Exp::Local(val)
    }
}

impl Shift for Local {
    fn shift_in_range(&mut self, _cutoff: usize, _by: isize) {
        // Locals are free constants; they do not mention bound variables.
    }
}

impl<'a> Print<'a> for Local {
    fn print(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        self.name.print(cfg, alloc)
    }
}
