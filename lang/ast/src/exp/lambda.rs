use derivative::Derivative;
use pretty::DocAllocator;

use lapis_printer::{Alloc, BACKSLASH, Builder, COLON, DOT, Precedence, Print, PrintCfg};

use super::{Exp, PREC_BINDER, parens_if};
use crate::ident::BinderName;
use crate::traits::Shift;

/// A function abstraction `\(x : A). b`.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Lambda {
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub name: BinderName,
    /// The declared type of the bound variable.
    pub ty: Box<Exp>,
    pub body: Box<Exp>,
}

impl From<Lambda> for Exp {
    fn from(val: Lambda) -> Self {
        Exp::Lambda(val)
    }
}

impl Shift for Lambda {
    fn shift_in_range(&mut self, cutoff: usize, by: isize) {
        self.ty.shift_in_range(cutoff, by);
        self.body.shift_in_range(cutoff + 1, by);
    }
}

impl<'a> Print<'a> for Lambda {
    fn print_prec(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        let Lambda { name, ty, body } = self;
        let binder = name
            .print(cfg, alloc)
            .append(alloc.space())
            .append(alloc.text(COLON))
            .append(alloc.space())
            .append(ty.print(cfg, alloc))
            .parens();
        let doc = alloc
            .text(BACKSLASH)
            .append(binder)
            .append(alloc.text(DOT))
            .append(alloc.space())
            .append(body.print_prec(cfg, alloc, PREC_BINDER));
        parens_if(prec > PREC_BINDER, doc)
    }
}
