use lapis_printer::{Alloc, Builder, Precedence, Print, PrintCfg};
use pretty::DocAllocator;

use super::{Exp, PREC_APP, PREC_ATOM, parens_if};
use crate::traits::Shift;

/// A binary application node. Curried applications form a left-nested
/// spine; [Exp::unfold_apps] and [mk_app] convert between the nested and
/// the flattened view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct App {
    pub fun: Box<Exp>,
    pub arg: Box<Exp>,
}

impl From<App> for Exp {
    fn from(val: App) -> Self {
        Exp::App(val)
    }
}

impl Shift for App {
    fn shift_in_range(&mut self, cutoff: usize, by: isize) {
        self.fun.shift_in_range(cutoff, by);
        self.arg.shift_in_range(cutoff, by);
    }
}

impl<'a> Print<'a> for App {
    fn print_prec(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        let App { fun, arg } = self;
        let doc = fun
            .print_prec(cfg, alloc, PREC_APP)
            .append(alloc.space())
            .append(arg.print_prec(cfg, alloc, PREC_ATOM));
        parens_if(prec > PREC_APP, doc)
    }
}

impl Exp {
    /// Decompose a (possibly curried) application into its head and the
    /// argument list in application order. A non-application is its own
    /// head with no arguments.
    pub fn unfold_apps(&self) -> (&Exp, Vec<&Exp>) {
        let mut head = self;
        let mut args = Vec::new();
        while let Exp::App(App { fun, arg }) = head {
            args.push(arg.as_ref());
            head = fun;
        }
        args.reverse();
        (head, args)
    }

    pub fn is_lambda(&self) -> bool {
        matches!(self, Exp::Lambda(_))
    }
}

/// Owned variant of [Exp::unfold_apps].
pub fn unfold_apps_owned(e: Exp) -> (Exp, Vec<Exp>) {
    let mut head = e;
    let mut args = Vec::new();
    while let Exp::App(App { fun, arg }) = head {
        args.push(*arg);
        head = *fun;
    }
    args.reverse();
    (head, args)
}

/// Apply `fun` to `args`, building a left-nested application spine.
pub fn mk_app<I: IntoIterator<Item = Exp>>(fun: Exp, args: I) -> Exp {
    args.into_iter().fold(fun, |fun, arg| {
        Exp::App(App { fun: Box::new(fun), arg: Box::new(arg) })
    })
}
