use lapis_printer::{Alloc, Builder, Precedence, Print, PrintCfg};

use crate::traits::Shift;

mod app;
mod constant;
mod lambda;
mod let_exp;
mod literal;
mod local;
mod macro_exp;
mod meta_var;
mod pi;
mod sort;
mod variable;

pub use app::*;
pub use constant::*;
pub use lambda::*;
pub use let_exp::*;
pub use literal::*;
pub use local::*;
pub use macro_exp::*;
pub use meta_var::*;
pub use pi::*;
pub use sort::*;
pub use variable::*;

/// Precedence of binders (Pi, Lambda, Let)
pub(crate) const PREC_BINDER: Precedence = 0;
/// Precedence of application spines
pub(crate) const PREC_APP: Precedence = 1;
/// Precedence of atomic expressions
pub(crate) const PREC_ATOM: Precedence = 2;

// Exp
//
//

/// An expression of the fully elaborated core language.
///
/// Terms are value-like and freely shared; every operation constructs
/// new trees and never mutates terms another owner can still observe.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Exp {
    Variable(Variable),
    Local(Local),
    Const(Const),
    Sort(Sort),
    Pi(Pi),
    Lambda(Lambda),
    LetExp(LetExp),
    App(App),
    MacroExp(MacroExp),
    MetaVar(MetaVar),
    Literal(Literal),
}

impl Shift for Exp {
    fn shift_in_range(&mut self, cutoff: usize, by: isize) {
        match self {
            Exp::Variable(e) => e.shift_in_range(cutoff, by),
            Exp::Local(e) => e.shift_in_range(cutoff, by),
            Exp::Const(e) => e.shift_in_range(cutoff, by),
            Exp::Sort(e) => e.shift_in_range(cutoff, by),
            Exp::Pi(e) => e.shift_in_range(cutoff, by),
            Exp::Lambda(e) => e.shift_in_range(cutoff, by),
            Exp::LetExp(e) => e.shift_in_range(cutoff, by),
            Exp::App(e) => e.shift_in_range(cutoff, by),
            Exp::MacroExp(e) => e.shift_in_range(cutoff, by),
            Exp::MetaVar(e) => e.shift_in_range(cutoff, by),
            Exp::Literal(e) => e.shift_in_range(cutoff, by),
        }
    }
}

impl<'a> Print<'a> for Exp {
    fn print_prec(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        match self {
            Exp::Variable(e) => e.print_prec(cfg, alloc, prec),
            Exp::Local(e) => e.print_prec(cfg, alloc, prec),
            Exp::Const(e) => e.print_prec(cfg, alloc, prec),
            Exp::Sort(e) => e.print_prec(cfg, alloc, prec),
            Exp::Pi(e) => e.print_prec(cfg, alloc, prec),
            Exp::Lambda(e) => e.print_prec(cfg, alloc, prec),
            Exp::LetExp(e) => e.print_prec(cfg, alloc, prec),
            Exp::App(e) => e.print_prec(cfg, alloc, prec),
            Exp::MacroExp(e) => e.print_prec(cfg, alloc, prec),
            Exp::MetaVar(e) => e.print_prec(cfg, alloc, prec),
            Exp::Literal(e) => e.print_prec(cfg, alloc, prec),
        }
    }
}

/// Wrap the builder in parentheses if the enclosing precedence demands it.
pub(crate) fn parens_if(cond: bool, builder: Builder<'_>) -> Builder<'_> {
    if cond { builder.parens() } else { builder }
}
