//! Rewriting of eliminator applications.
//!
//! Every rewrite in this module is positional: the argument layout of an
//! eliminator application is fully determined by the parameter, index and
//! constructor counts of its inductive family, so arguments are addressed
//! by offset rather than by type.

use log::trace;

use lapis_ast::*;

use super::{Erase, EraseCtx};
use crate::env::{EQ_REC, SUBTYPE_ELT_OF, SUBTYPE_REC, SUBTYPE_TAG};
use crate::result::{ErasureError, ErasureResult};

pub(super) fn erase_app(ctx: &mut EraseCtx<'_>, app: &App) -> ErasureResult<Exp> {
    let e = Exp::App(app.clone());
    if ctx.is_irrelevant(&e) {
        return Ok(ctx.markers.neutral());
    }
    let (head, args) = e.unfold_apps();
    if head.is_lambda() {
        // Contract the redex first; erasing under it would duplicate the
        // binder bookkeeping for no benefit.
        return beta_reduce(e.clone()).erase(ctx);
    }
    if let Exp::Const(c) = head {
        let name = c.name.clone();
        let args: Vec<Exp> = args.iter().map(|arg| (*arg).clone()).collect();
        if name == *EQ_REC {
            return erase_eq_rec(ctx, args);
        } else if name == *SUBTYPE_REC {
            return erase_subtype_rec(ctx, args);
        } else if ctx.env.is_cases_on(&name) {
            return erase_cases_on(ctx, name, args);
        } else if ctx.env.is_recursor(&name) {
            return erase_rec(ctx, name, args);
        } else if ctx.env.is_no_confusion(&name) {
            return erase_no_confusion(ctx, name, args);
        } else if name == *SUBTYPE_TAG {
            return erase_subtype_tag(ctx, args);
        } else if name == *SUBTYPE_ELT_OF {
            return erase_subtype_elt_of(ctx, args);
        }
    }
    let head = head.erase(ctx)?;
    let args = args.iter().map(|arg| arg.erase(ctx)).collect::<ErasureResult<Vec<_>>>()?;
    Ok(mk_app(head, args))
}

fn check_arity(name: &Name, args: &[Exp], expected: usize) -> ErasureResult {
    if args.len() < expected {
        return Err(Box::new(ErasureError::EliminatorArity {
            name: name.to_string(),
            expected,
            actual: args.len(),
        }));
    }
    Ok(())
}

/// Erase `extras`, apply them to `e` and contract any redex this creates.
///
/// Eliminator applications can be over-applied when the motive returns a
/// function type; the trailing arguments belong to the rewritten result.
fn apply_extra_args(ctx: &mut EraseCtx<'_>, e: Exp, extras: &[Exp]) -> ErasureResult<Exp> {
    let extras = extras.iter().map(|arg| arg.erase(ctx)).collect::<ErasureResult<Vec<_>>>()?;
    Ok(beta_reduce(mk_app(e, extras)))
}

/// Rewrite the minor premises of a case-analysis application in place and
/// distribute the extra arguments over them.
///
/// Each minor premise must syntactically bind one lambda per constructor
/// field. The extras are pushed inside those binders so that every branch
/// of the resulting case expression is fully applied.
fn erase_minors(
    ctx: &mut EraseCtx<'_>,
    eliminator: &Name,
    num_params: usize,
    ctors: &[Name],
    minors: &mut [Exp],
    extras: &[Exp],
) -> ErasureResult {
    if extras.is_empty() {
        for minor in minors.iter_mut() {
            *minor = minor.erase(ctx)?;
        }
        return Ok(());
    }
    let extras: Vec<Exp> =
        extras.iter().map(|arg| arg.erase(ctx)).collect::<ErasureResult<Vec<_>>>()?;
    for (minor, ctor) in minors.iter_mut().zip(ctors) {
        let arity = ctx.env.constructor_arity(ctor)?;
        let num_fields = arity.checked_sub(num_params).ok_or_else(|| {
            ErasureError::impossible(format!(
                "constructor {ctor} has fewer arguments than its family has parameters"
            ))
        })?;
        let mut locals = Vec::with_capacity(num_fields);
        let mut body = minor.clone();
        for _ in 0..num_fields {
            match body {
                Exp::Lambda(lambda) => {
                    let local = ctx.fresh_local(lambda.name, (*lambda.ty).clone());
                    body = instantiate1(&lambda.body, &Exp::Local(local.clone()));
                    locals.push(local);
                }
                _ => {
                    return Err(Box::new(ErasureError::MinorPremiseNotLambda {
                        eliminator: eliminator.to_string(),
                        ctor: ctor.to_string(),
                    }));
                }
            }
        }
        let body = body.erase(ctx)?;
        let body = beta_reduce(mk_app(body, extras.iter().cloned()));
        *minor = rebind_locals(ctx, &locals, body);
    }
    Ok(())
}

/// Wrap `body` in one lambda per peeled local, erasing the binder types.
///
/// `locals` are listed outermost-first, matching [abstract_locals].
fn rebind_locals(ctx: &mut EraseCtx<'_>, locals: &[Local], body: Exp) -> Exp {
    let mut result = abstract_locals(&body, locals);
    for local in locals.iter().rev() {
        result = Exp::Lambda(Lambda {
            name: local.name.clone(),
            ty: Box::new(ctx.markers.neutral()),
            body: Box::new(result),
        });
    }
    result
}

fn family_of(eliminator: &Name) -> ErasureResult<Name> {
    eliminator.prefix().ok_or_else(|| ErasureError::unknown_inductive(eliminator))
}

/// `I.cases_on ps motive is major minors extras`  ~>  `I.cases_on major' minors'`
fn erase_cases_on(ctx: &mut EraseCtx<'_>, name: Name, args: Vec<Exp>) -> ErasureResult<Exp> {
    trace!("erasing case analysis {name}");
    let family = family_of(&name)?;
    if ctx.env.is_empty_family(&family)? {
        return Ok(ctx.markers.unreachable());
    }
    let num_params = ctx.env.num_params(&family)?;
    let num_indices = ctx.env.num_indices(&family)?;
    let num_minors = ctx.env.num_minor_premises(&family)?;
    // parameters, motive, indices, major premise, minor premises
    let arity = num_params + 1 + num_indices + 1 + num_minors;
    check_arity(&name, &args, arity)?;
    let ctors = ctx.env.constructor_names(&family)?.to_vec();
    let major = args[num_params + 1 + num_indices].erase(ctx)?;
    let mut minors = args[num_params + 1 + num_indices + 1..arity].to_vec();
    erase_minors(ctx, &name, num_params, &ctors, &mut minors, &args[arity..])?;
    Ok(mk_app(mk_app(Exp::Const(Const::new(name)), [major]), minors))
}

/// `I.rec ps motive minors is major extras`  ~>  `I.cases_on major' minors'`
///
/// Only non-recursive recursors reach this pass; for those, the recursor
/// and the case-analysis operator coincide up to argument order.
fn erase_rec(ctx: &mut EraseCtx<'_>, name: Name, args: Vec<Exp>) -> ErasureResult<Exp> {
    trace!("erasing recursor {name}");
    let family = family_of(&name)?;
    if ctx.env.is_empty_family(&family)? {
        return Ok(ctx.markers.unreachable());
    }
    if ctx.env.is_recursive(&family)? {
        return Err(Box::new(ErasureError::RecursiveRecursor { name: name.to_string() }));
    }
    let num_params = ctx.env.num_params(&family)?;
    let num_indices = ctx.env.num_indices(&family)?;
    let num_minors = ctx.env.num_minor_premises(&family)?;
    // parameters, motive, minor premises, indices, major premise
    let arity = num_params + 1 + num_minors + num_indices + 1;
    check_arity(&name, &args, arity)?;
    let ctors = ctx.env.constructor_names(&family)?.to_vec();
    let major = args[num_params + 1 + num_minors + num_indices].erase(ctx)?;
    let mut minors = args[num_params + 1..num_params + 1 + num_minors].to_vec();
    erase_minors(ctx, &name, num_params, &ctors, &mut minors, &args[arity..])?;
    let cases_on = Exp::Const(Const::new(family.append("cases_on")));
    Ok(mk_app(mk_app(cases_on, [major]), minors))
}

/// `I.no_confusion ps is motive lhs rhs eq k extras`  ~>  `k' _neutral_ …`
/// when `lhs` and `rhs` share their head constructor, `_unreachable_` when
/// they differ.
fn erase_no_confusion(ctx: &mut EraseCtx<'_>, name: Name, args: Vec<Exp>) -> ErasureResult<Exp> {
    trace!("erasing no-confusion {name}");
    let family = family_of(&name)?;
    let num_params = ctx.env.num_params(&family)?;
    let num_indices = ctx.env.num_indices(&family)?;
    // parameters, indices, motive, lhs, rhs, equality proof
    let basic_arity = num_params + num_indices + 4;
    check_arity(&name, &args, basic_arity)?;
    let lhs = &args[num_params + num_indices + 1];
    let rhs = &args[num_params + num_indices + 2];
    let (Some(lhs_ctor), Some(rhs_ctor)) =
        (ctx.env.constructor_app_head(lhs), ctx.env.constructor_app_head(rhs))
    else {
        return Err(Box::new(ErasureError::ConstructorsExpected {
            eliminator: name.to_string(),
        }));
    };
    if lhs_ctor != rhs_ctor {
        return Ok(ctx.markers.unreachable());
    }
    // Same head constructor: the application reduces to its continuation.
    check_arity(&name, &args, basic_arity + 1)?;
    let continuation = &args[num_params + num_indices + 4];
    // Peel all leading binders; they receive the injectivity proofs, which
    // are erased wholesale.
    let mut locals = Vec::new();
    let mut body = continuation.clone();
    while let Exp::Lambda(lambda) = body {
        let local = ctx.fresh_local(lambda.name, (*lambda.ty).clone());
        body = instantiate1(&lambda.body, &Exp::Local(local.clone()));
        locals.push(local);
    }
    let body = body.erase(ctx)?;
    let continuation = rebind_locals(ctx, &locals, body);
    let num_fields = ctx.env.constructor_arity(&lhs_ctor)?.checked_sub(num_params).ok_or_else(
        || {
            ErasureError::impossible(format!(
                "constructor {lhs_ctor} has fewer arguments than its family has parameters"
            ))
        },
    )?;
    // One placeholder per constructor field stands in for the proofs.
    let placeholders: Vec<Exp> = (0..num_fields).map(|_| ctx.markers.neutral()).collect();
    let result = beta_reduce(mk_app(continuation, placeholders));
    apply_extra_args(ctx, result, &args[num_params + num_indices + 5..])
}

/// `eq.rec A a motive major b eq extras`  ~>  `major' extras'`
///
/// Equality is a proposition, so transporting along a proof of it is the
/// identity at runtime.
fn erase_eq_rec(ctx: &mut EraseCtx<'_>, args: Vec<Exp>) -> ErasureResult<Exp> {
    check_arity(&EQ_REC, &args, 6)?;
    let major = args[3].erase(ctx)?;
    apply_extra_args(ctx, major, &args[6..])
}

/// `subtype.tag A p val proof extras`  ~>  `val' extras'`
///
/// A subtype value is represented by its underlying value alone.
fn erase_subtype_tag(ctx: &mut EraseCtx<'_>, args: Vec<Exp>) -> ErasureResult<Exp> {
    check_arity(&SUBTYPE_TAG, &args, 4)?;
    let val = args[2].erase(ctx)?;
    apply_extra_args(ctx, val, &args[4..])
}

/// `subtype.rec A p motive minor major extras`  ~>
/// `minor' major' _neutral_ extras'`
fn erase_subtype_rec(ctx: &mut EraseCtx<'_>, args: Vec<Exp>) -> ErasureResult<Exp> {
    check_arity(&SUBTYPE_REC, &args, 5)?;
    let minor = args[3].erase(ctx)?;
    let major = args[4].erase(ctx)?;
    let result = beta_reduce(mk_app(minor, [major, ctx.markers.neutral()]));
    apply_extra_args(ctx, result, &args[5..])
}

/// `subtype.elt_of A p s extras`  ~>  `s' extras'`
fn erase_subtype_elt_of(ctx: &mut EraseCtx<'_>, args: Vec<Exp>) -> ErasureResult<Exp> {
    check_arity(&SUBTYPE_ELT_OF, &args, 3)?;
    let val = args[2].erase(ctx)?;
    apply_extra_args(ctx, val, &args[3..])
}
