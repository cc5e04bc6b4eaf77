use derivative::Derivative;
use pretty::DocAllocator;

use lapis_printer::{Alloc, Builder, COLON, DOT, PI, Precedence, Print, PrintCfg};

use super::{Exp, PREC_BINDER, parens_if};
use crate::ident::BinderName;
use crate::traits::Shift;

/// A dependent function type `Pi (x : A). B`.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Pi {
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub name: BinderName,
    pub domain: Box<Exp>,
    pub codomain: Box<Exp>,
}

impl From<Pi> for Exp {
    fn from(val: Pi) -> Self {
        Exp::Pi(val)
    }
}

impl Shift for Pi {
    fn shift_in_range(&mut self, cutoff: usize, by: isize) {
        self.domain.shift_in_range(cutoff, by);
        self.codomain.shift_in_range(cutoff + 1, by);
    }
}

impl<'a> Print<'a> for Pi {
    fn print_prec(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        let Pi { name, domain, codomain } = self;
        let binder = name
            .print(cfg, alloc)
            .append(alloc.space())
            .append(alloc.text(COLON))
            .append(alloc.space())
            .append(domain.print(cfg, alloc))
            .parens();
        let doc = alloc
            .text(PI)
            .append(alloc.space())
            .append(binder)
            .append(alloc.text(DOT))
            .append(alloc.space())
            .append(codomain.print_prec(cfg, alloc, PREC_BINDER));
        parens_if(prec > PREC_BINDER, doc)
    }
}
