//! The irrelevance-erasure pass.
//!
//! Rewrites a fully elaborated term into a runtime-oriented one: types,
//! propositions and universe data are replaced by the neutral marker,
//! statically impossible branches by the unreachable marker, and
//! applications of the standard eliminators are flattened into the shape
//! the code generator expects. The output is untyped by construction and
//! must not be sent back through the type checker.

use std::sync::atomic::{AtomicBool, Ordering};

use log::trace;

use lapis_ast::*;
use lapis_printer::PrintToString;

use crate::classify::is_irrelevant;
use crate::env::Environment;
use crate::markers::Markers;
use crate::result::{ErasureError, ErasureResult};

mod eliminators;

/// Erase all computationally irrelevant subterms of `e`.
pub fn erase(env: &Environment, markers: &Markers, e: &Exp) -> ErasureResult<Exp> {
    erase_impl(env, markers, e, None)
}

/// Like [erase], but polls `interrupt` at every visited node and aborts
/// with [ErasureError::Interrupted] once it is set.
pub fn erase_with_interrupt(
    env: &Environment,
    markers: &Markers,
    e: &Exp,
    interrupt: &AtomicBool,
) -> ErasureResult<Exp> {
    erase_impl(env, markers, e, Some(interrupt))
}

fn erase_impl(
    env: &Environment,
    markers: &Markers,
    e: &Exp,
    interrupt: Option<&AtomicBool>,
) -> ErasureResult<Exp> {
    let mut ctx = EraseCtx { env, markers, binders: Vec::new(), next_local: 0, interrupt };
    let result = e.erase(&mut ctx)?;
    trace!("erased {} to {}", e.print_to_string(None), result.print_to_string(None));
    Ok(result)
}

/// The state threaded through one erasure run.
pub(crate) struct EraseCtx<'a> {
    pub(crate) env: &'a Environment,
    pub(crate) markers: &'a Markers,
    /// Declared types of the binders currently in scope, innermost last.
    ///
    /// The stack records the types as written in the input; the rewritten
    /// output replaces them by the neutral marker, but classification of
    /// bound variables needs the originals.
    binders: Vec<Exp>,
    /// Source of fresh ids for the locals that stand in for peeled binders.
    next_local: u64,
    interrupt: Option<&'a AtomicBool>,
}

impl EraseCtx<'_> {
    fn check_interrupt(&self) -> ErasureResult {
        match self.interrupt {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(Box::new(ErasureError::Interrupted)),
            _ => Ok(()),
        }
    }

    pub(crate) fn is_irrelevant(&self, e: &Exp) -> bool {
        is_irrelevant(self.env, &self.binders, e)
    }

    /// Run `f` with `ty` in scope as the innermost binder.
    fn bind<T>(&mut self, ty: Exp, f: impl FnOnce(&mut Self) -> T) -> T {
        self.binders.push(ty);
        let result = f(self);
        self.binders.pop();
        result
    }

    /// A fresh local standing for a peeled binder.
    pub(crate) fn fresh_local(&mut self, name: BinderName, ty: Exp) -> Local {
        let id = self.next_local;
        self.next_local += 1;
        Local { id, name, ty: Box::new(ty) }
    }
}

pub(crate) trait Erase {
    fn erase(&self, ctx: &mut EraseCtx<'_>) -> ErasureResult<Exp>;
}

impl Erase for Exp {
    fn erase(&self, ctx: &mut EraseCtx<'_>) -> ErasureResult<Exp> {
        ctx.check_interrupt()?;
        match self {
            Exp::Variable(e) => e.erase(ctx),
            Exp::Local(e) => e.erase(ctx),
            Exp::Const(e) => e.erase(ctx),
            Exp::Sort(e) => e.erase(ctx),
            Exp::Pi(e) => e.erase(ctx),
            Exp::Lambda(e) => e.erase(ctx),
            Exp::LetExp(e) => e.erase(ctx),
            Exp::App(e) => e.erase(ctx),
            Exp::MacroExp(e) => e.erase(ctx),
            Exp::MetaVar(e) => Ok(Exp::MetaVar(e.clone())),
            Exp::Literal(e) => Ok(Exp::Literal(e.clone())),
        }
    }
}

impl Erase for Sort {
    fn erase(&self, ctx: &mut EraseCtx<'_>) -> ErasureResult<Exp> {
        Ok(ctx.markers.neutral())
    }
}

impl Erase for Pi {
    fn erase(&self, ctx: &mut EraseCtx<'_>) -> ErasureResult<Exp> {
        // A Pi in term position is a type former.
        Ok(ctx.markers.neutral())
    }
}

impl Erase for Variable {
    fn erase(&self, ctx: &mut EraseCtx<'_>) -> ErasureResult<Exp> {
        let e = Exp::Variable(self.clone());
        if ctx.is_irrelevant(&e) { Ok(ctx.markers.neutral()) } else { Ok(e) }
    }
}

impl Erase for Local {
    fn erase(&self, ctx: &mut EraseCtx<'_>) -> ErasureResult<Exp> {
        let e = Exp::Local(self.clone());
        if ctx.is_irrelevant(&e) { Ok(ctx.markers.neutral()) } else { Ok(e) }
    }
}

impl Erase for Const {
    fn erase(&self, ctx: &mut EraseCtx<'_>) -> ErasureResult<Exp> {
        if ctx.is_irrelevant(&Exp::Const(self.clone())) {
            return Ok(ctx.markers.neutral());
        }
        // Universe level instantiations never survive erasure.
        Ok(Exp::Const(Const::new(self.name.clone())))
    }
}

impl Erase for Lambda {
    fn erase(&self, ctx: &mut EraseCtx<'_>) -> ErasureResult<Exp> {
        let Lambda { name, ty, body } = self;
        let body = ctx.bind((**ty).clone(), |ctx| body.erase(ctx))?;
        Ok(Exp::Lambda(Lambda {
            name: name.clone(),
            ty: Box::new(ctx.markers.neutral()),
            body: Box::new(body),
        }))
    }
}

impl Erase for LetExp {
    fn erase(&self, ctx: &mut EraseCtx<'_>) -> ErasureResult<Exp> {
        let LetExp { name, ty, val, body } = self;
        let val = val.erase(ctx)?;
        let body = ctx.bind((**ty).clone(), |ctx| body.erase(ctx))?;
        Ok(Exp::LetExp(LetExp {
            name: name.clone(),
            ty: Box::new(ctx.markers.neutral()),
            val: Box::new(val),
            body: Box::new(body),
        }))
    }
}

impl Erase for MacroExp {
    fn erase(&self, ctx: &mut EraseCtx<'_>) -> ErasureResult<Exp> {
        if ctx.is_irrelevant(&Exp::MacroExp(self.clone())) {
            return Ok(ctx.markers.neutral());
        }
        match &self.payload {
            // Handled by the irrelevance test above.
            MacroPayload::Irrelevant(_) => Ok(ctx.markers.neutral()),
            // References to compiled recursive functions become plain
            // constants for the code generator.
            MacroPayload::RecFn(name) => Ok(Exp::Const(Const::new(name.clone()))),
            MacroPayload::Annotation { name, body } => {
                let body = body.erase(ctx)?;
                Ok(Exp::MacroExp(MacroExp {
                    payload: MacroPayload::Annotation {
                        name: name.clone(),
                        body: Box::new(body),
                    },
                }))
            }
        }
    }
}

impl Erase for App {
    fn erase(&self, ctx: &mut EraseCtx<'_>) -> ErasureResult<Exp> {
        eliminators::erase_app(ctx, self)
    }
}
