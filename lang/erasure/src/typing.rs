//! Structural type inference, just strong enough to drive relevance
//! classification.
//!
//! Inference returns `None` whenever a type cannot be read off the term
//! structure. The classifier treats `None` as "relevant", so failure here
//! is conservative: a term is only ever erased when its irrelevance has
//! been positively established.

use lapis_ast::*;

use crate::env::Environment;

/// Infer the type of `e` under the binder types `binders` (innermost last).
pub(crate) fn infer_type(env: &Environment, binders: &[Exp], e: &Exp) -> Option<Exp> {
    match e {
        Exp::Variable(Variable { idx }) => {
            let pos = binders.len().checked_sub(idx + 1)?;
            // The stored type is valid at its binding point; shift it past
            // the binders introduced since.
            Some(shift_and_clone(&binders[pos], (idx + 1) as isize))
        }
        Exp::Local(local) => Some((*local.ty).clone()),
        Exp::Const(c) => env.const_type(&c.name).cloned(),
        Exp::Sort(s) => Some(Exp::Sort(Sort { level: s.level.clone().succ() })),
        Exp::Pi(pi) => {
            let mut binders = binders.to_vec();
            binders.push((*pi.domain).clone());
            match infer_type(env, &binders, &pi.codomain)? {
                // Sorts are closed, no shift needed when leaving the binder.
                sort @ Exp::Sort(_) => Some(sort),
                _ => None,
            }
        }
        Exp::Lambda(lambda) => {
            let mut inner = binders.to_vec();
            inner.push((*lambda.ty).clone());
            let body_ty = infer_type(env, &inner, &lambda.body)?;
            Some(Exp::Pi(Pi {
                name: lambda.name.clone(),
                domain: lambda.ty.clone(),
                codomain: Box::new(body_ty),
            }))
        }
        Exp::LetExp(let_exp) => {
            infer_type(env, binders, &instantiate1(&let_exp.body, &let_exp.val))
        }
        Exp::App(_) => {
            let (head, args) = e.unfold_apps();
            let mut fun_ty = infer_type(env, binders, head)?;
            for arg in args {
                fun_ty = match whnf_lite(fun_ty) {
                    Exp::Pi(pi) => instantiate1(&pi.codomain, arg),
                    _ => return None,
                };
            }
            Some(fun_ty)
        }
        Exp::MacroExp(macro_exp) => match &macro_exp.payload {
            MacroPayload::Irrelevant(body) => infer_type(env, binders, body),
            MacroPayload::RecFn(name) => env.const_type(name).cloned(),
            MacroPayload::Annotation { body, .. } => infer_type(env, binders, body),
        },
        Exp::MetaVar(_) => None,
        Exp::Literal(Literal::Nat(_)) => Some(Exp::Const(Const::new(Name::from_str("nat")))),
        Exp::Literal(Literal::Str(_)) => Some(Exp::Const(Const::new(Name::from_str("string")))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(idx: usize) -> Exp {
        Exp::Variable(Variable { idx })
    }

    fn cnst(name: &str) -> Exp {
        Exp::Const(Const::new(Name::from_str(name)))
    }

    fn sort(level: Level) -> Exp {
        Exp::Sort(Sort { level })
    }

    #[test]
    fn sort_of_sort() {
        let env = Environment::new();
        assert_eq!(
            infer_type(&env, &[], &sort(Level::Zero)),
            Some(sort(Level::Succ(Box::new(Level::Zero))))
        );
    }

    #[test]
    fn variable_type_is_shifted() {
        let env = Environment::new();
        // Under binders [@? : c, @? : @0], the inner binder's type points
        // at the outer binder and must be shifted on lookup.
        let binders = vec![cnst("c"), var(0)];
        assert_eq!(infer_type(&env, &binders, &var(0)), Some(var(1)));
        assert_eq!(infer_type(&env, &binders, &var(1)), Some(cnst("c")));
    }

    #[test]
    fn application_instantiates_the_codomain() {
        let mut env = Environment::new();
        // p : Pi (x : nat). Sort 0
        env.add_constant(
            Name::from_str("p"),
            Exp::Pi(Pi {
                name: BinderName::from_str("x"),
                domain: Box::new(cnst("nat")),
                codomain: Box::new(sort(Level::Zero)),
            }),
        )
        .unwrap();
        env.add_constant(Name::from_str("n"), cnst("nat")).unwrap();
        let e = mk_app(cnst("p"), [cnst("n")]);
        assert_eq!(infer_type(&env, &[], &e), Some(sort(Level::Zero)));
    }

    #[test]
    fn unknown_constant_has_no_type() {
        let env = Environment::new();
        assert_eq!(infer_type(&env, &[], &cnst("mystery")), None);
    }

    #[test]
    fn pi_inhabits_the_sort_of_its_codomain() {
        let env = Environment::new();
        let e = Exp::Pi(Pi {
            name: BinderName::Wildcard,
            domain: Box::new(sort(Level::Zero)),
            codomain: Box::new(sort(Level::Zero)),
        });
        assert_eq!(infer_type(&env, &[], &e), Some(sort(Level::Succ(Box::new(Level::Zero)))));
    }
}
