//! Reduction helpers.
//!
//! Erasure needs just enough computation to expose the shape of a term:
//! beta-contraction of lambda-headed redexes, expansion of local lets and
//! unwrapping of transparent annotations. Nothing here unfolds global
//! definitions or decides definitional equality.

use crate::exp::*;
use crate::traits::instantiate;
use crate::traits::instantiate1;

/// Contract all lambda-headed redexes at the head of `e`.
pub fn beta_reduce(e: Exp) -> Exp {
    let mut e = e;
    loop {
        if !matches!(&e, Exp::App(_)) {
            return e;
        }
        let (head, mut args) = unfold_apps_owned(e);
        if !head.is_lambda() {
            return mk_app(head, args);
        }
        // Peel one lambda per available argument.
        let mut body = head;
        let mut taken = 0;
        while taken < args.len() {
            match body {
                Exp::Lambda(lambda) => {
                    body = *lambda.body;
                    taken += 1;
                }
                _ => break,
            }
        }
        // The innermost binder corresponds to the last consumed argument.
        let subst: Vec<Exp> = args[..taken].iter().rev().cloned().collect();
        let rest = args.split_off(taken);
        e = mk_app(instantiate(&body, &subst), rest);
    }
}

/// Reduce `e` to head-normal form using beta, let-expansion and
/// annotation unwrapping only.
///
/// This is deliberately weaker than full weak-head normalization: it is
/// exactly strong enough to expose a constructor at the head of a
/// scrutinee that was built from constructors, lets and redexes.
pub fn whnf_lite(e: Exp) -> Exp {
    let mut e = e;
    loop {
        e = match e {
            Exp::LetExp(let_exp) => instantiate1(&let_exp.body, &let_exp.val),
            Exp::MacroExp(macro_exp) => match macro_exp.payload {
                MacroPayload::Annotation { body, .. } => *body,
                payload => return Exp::MacroExp(MacroExp { payload }),
            },
            Exp::App(app) => {
                let (head, args) = unfold_apps_owned(Exp::App(app));
                match head {
                    Exp::Lambda(_) => beta_reduce(mk_app(head, args)),
                    Exp::LetExp(_) => mk_app(whnf_lite(head), args),
                    Exp::MacroExp(MacroExp {
                        payload: MacroPayload::Annotation { .. },
                    }) => mk_app(whnf_lite(head), args),
                    head => return mk_app(head, args),
                }
            }
            e => return e,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::{BinderName, Name};

    fn var(idx: usize) -> Exp {
        Exp::Variable(Variable { idx })
    }

    fn cnst(name: &str) -> Exp {
        Exp::Const(Const::new(Name::from_str(name)))
    }

    fn lam(body: Exp) -> Exp {
        Exp::Lambda(Lambda {
            name: BinderName::Wildcard,
            ty: Box::new(Exp::Sort(Sort { level: Level::Zero })),
            body: Box::new(body),
        })
    }

    #[test]
    fn beta_contracts_nested_redex() {
        // (\x. \y. x y) a b  ~>  a b
        let e = mk_app(lam(lam(mk_app(var(1), [var(0)]))), [cnst("a"), cnst("b")]);
        assert_eq!(beta_reduce(e), mk_app(cnst("a"), [cnst("b")]));
    }

    #[test]
    fn beta_keeps_spare_arguments() {
        // (\x. x) f b  ~>  f b
        let e = mk_app(lam(var(0)), [cnst("f"), cnst("b")]);
        assert_eq!(beta_reduce(e), mk_app(cnst("f"), [cnst("b")]));
    }

    #[test]
    fn beta_leaves_underapplied_lambda() {
        let e = lam(lam(var(1)));
        assert_eq!(beta_reduce(e.clone()), e);
    }

    #[test]
    fn whnf_expands_let() {
        let e = Exp::LetExp(LetExp {
            name: BinderName::from_str("x"),
            ty: Box::new(cnst("t")),
            val: Box::new(cnst("v")),
            body: Box::new(mk_app(var(0), [cnst("b")])),
        });
        assert_eq!(whnf_lite(e), mk_app(cnst("v"), [cnst("b")]));
    }

    #[test]
    fn whnf_unwraps_annotations_in_head_position() {
        let ann = Exp::MacroExp(MacroExp {
            payload: MacroPayload::Annotation {
                name: Name::from_str("inline"),
                body: Box::new(lam(var(0))),
            },
        });
        assert_eq!(whnf_lite(mk_app(ann, [cnst("a")])), cnst("a"));
    }

    #[test]
    fn whnf_keeps_constructor_spine() {
        let e = mk_app(cnst("nat.succ"), [cnst("nat.zero")]);
        assert_eq!(whnf_lite(e.clone()), e);
    }
}
