use derivative::Derivative;
use pretty::DocAllocator;

use lapis_printer::{Alloc, Builder, COLON, COLONEQ, IN, LET, Precedence, Print, PrintCfg};

use super::{Exp, PREC_BINDER, parens_if};
use crate::ident::BinderName;
use crate::traits::Shift;

/// A local definition `let x : T := v in b`.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct LetExp {
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub name: BinderName,
    /// The declared type of the bound value.
    pub ty: Box<Exp>,
    pub val: Box<Exp>,
    pub body: Box<Exp>,
}

impl From<LetExp> for Exp {
    fn from(val: LetExp) -> Self {
        Exp::LetExp(val)
    }
}

impl Shift for LetExp {
    fn shift_in_range(&mut self, cutoff: usize, by: isize) {
        self.ty.shift_in_range(cutoff, by);
        self.val.shift_in_range(cutoff, by);
        self.body.shift_in_range(cutoff + 1, by);
    }
}

impl<'a> Print<'a> for LetExp {
    fn print_prec(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        let LetExp { name, ty, val, body } = self;
        let doc = alloc
            .text(LET)
            .append(alloc.space())
            .append(name.print(cfg, alloc))
            .append(alloc.space())
            .append(alloc.text(COLON))
            .append(alloc.space())
            .append(ty.print(cfg, alloc))
            .append(alloc.space())
            .append(alloc.text(COLONEQ))
            .append(alloc.space())
            .append(val.print(cfg, alloc))
            .append(alloc.space())
            .append(alloc.text(IN))
            .append(alloc.space())
            .append(body.print_prec(cfg, alloc, PREC_BINDER));
        parens_if(prec > PREC_BINDER, doc)
    }
}
