use pretty::DocAllocator;

use lapis_printer::{Alloc, Builder, Print, PrintCfg};

use super::Exp;
use crate::ident::Name;
use crate::traits::Shift;

/// The payload of an opaque extension node.
///
/// Frontends can attach arbitrary payloads in principle; the cases the
/// compiler inspects are enumerated explicitly here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MacroPayload {
    /// The wrapped term was marked as computationally irrelevant by an
    /// earlier compiler step.
    Irrelevant(Box<Exp>),
    /// A reference to a recursive function being compiled, before it has
    /// been installed as a regular constant.
    RecFn(Name),
    /// A named annotation wrapped around a term; semantically transparent.
    Annotation { name: Name, body: Box<Exp> },
}

/// An opaque extension node carrying a [MacroPayload].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MacroExp {
    pub payload: MacroPayload,
}

impl From<MacroExp> for Exp {
    fn from(val: MacroExp) -> Self {
        Exp::MacroExp(val)
    }
}

impl Shift for MacroExp {
    fn shift_in_range(&mut self, cutoff: usize, by: isize) {
        match &mut self.payload {
            MacroPayload::Irrelevant(body) => body.shift_in_range(cutoff, by),
            MacroPayload::RecFn(_) => {}
            MacroPayload::Annotation { body, .. } => body.shift_in_range(cutoff, by),
        }
    }
}

impl<'a> Print<'a> for MacroExp {
    fn print(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        match &self.payload {
            MacroPayload::Irrelevant(body) => {
                alloc.text("[irrelevant ").append(body.print(cfg, alloc)).append(alloc.text("]"))
            }
            MacroPayload::RecFn(name) => {
                alloc.text("[recfn ").append(name.print(cfg, alloc)).append(alloc.text("]"))
            }
            MacroPayload::Annotation { name, body } => alloc
                .text("[")
                .append(name.print(cfg, alloc))
                .append(alloc.space())
                .append(body.print(cfg, alloc))
                .append(alloc.text("]")),
        }
    }
}
