use crate::exp::*;
use crate::traits::shift_and_clone;

/// Substitute the outermost bound variables of `body` by `args`.
///
/// `args[0]` replaces the innermost binder (de Bruijn index `0`), `args[1]`
/// index `1`, and so on. Variables pointing past the instantiated binders
/// are lowered by `args.len()`.
pub fn instantiate(body: &Exp, args: &[Exp]) -> Exp {
    if args.is_empty() {
        return body.clone();
    }
    subst_bound(body, 0, args)
}

/// Substitute the single outermost bound variable of `body` by `arg`.
pub fn instantiate1(body: &Exp, arg: &Exp) -> Exp {
    instantiate(body, std::slice::from_ref(arg))
}

fn subst_bound(e: &Exp, depth: usize, args: &[Exp]) -> Exp {
    match e {
        Exp::Variable(Variable { idx }) => {
            if *idx < depth {
                e.clone()
            } else if idx - depth < args.len() {
                shift_and_clone(&args[idx - depth], depth as isize)
            } else {
                Exp::Variable(Variable { idx: idx - args.len() })
            }
        }
        Exp::Local(_) | Exp::Const(_) | Exp::Sort(_) | Exp::MetaVar(_) | Exp::Literal(_) => {
            e.clone()
        }
        Exp::Pi(Pi { name, domain, codomain }) => Exp::Pi(Pi {
            name: name.clone(),
            domain: Box::new(subst_bound(domain, depth, args)),
            codomain: Box::new(subst_bound(codomain, depth + 1, args)),
        }),
        Exp::Lambda(Lambda { name, ty, body }) => Exp::Lambda(Lambda {
            name: name.clone(),
            ty: Box::new(subst_bound(ty, depth, args)),
            body: Box::new(subst_bound(body, depth + 1, args)),
        }),
        Exp::LetExp(LetExp { name, ty, val, body }) => Exp::LetExp(LetExp {
            name: name.clone(),
            ty: Box::new(subst_bound(ty, depth, args)),
            val: Box::new(subst_bound(val, depth, args)),
            body: Box::new(subst_bound(body, depth + 1, args)),
        }),
        Exp::App(App { fun, arg }) => Exp::App(App {
            fun: Box::new(subst_bound(fun, depth, args)),
            arg: Box::new(subst_bound(arg, depth, args)),
        }),
        Exp::MacroExp(MacroExp { payload }) => {
            let payload = match payload {
                MacroPayload::Irrelevant(body) => {
                    MacroPayload::Irrelevant(Box::new(subst_bound(body, depth, args)))
                }
                MacroPayload::RecFn(name) => MacroPayload::RecFn(name.clone()),
                MacroPayload::Annotation { name, body } => MacroPayload::Annotation {
                    name: name.clone(),
                    body: Box::new(subst_bound(body, depth, args)),
                },
            };
            Exp::MacroExp(MacroExp { payload })
        }
    }
}

/// Replace the free locals `locals` in `e` by bound variables, in
/// preparation for wrapping `e` in one binder per local.
///
/// `locals` are listed outermost-first: the last local becomes de Bruijn
/// index `0`. Bound variables already free in `e` are shifted past the new
/// binders.
pub fn abstract_locals(e: &Exp, locals: &[Local]) -> Exp {
    if locals.is_empty() {
        return e.clone();
    }
    abstract_at(e, 0, locals)
}

fn abstract_at(e: &Exp, depth: usize, locals: &[Local]) -> Exp {
    match e {
        Exp::Local(local) => match locals.iter().position(|l| l.id == local.id) {
            Some(pos) => Exp::Variable(Variable { idx: depth + locals.len() - 1 - pos }),
            None => e.clone(),
        },
        Exp::Variable(Variable { idx }) => {
            if *idx >= depth {
                Exp::Variable(Variable { idx: idx + locals.len() })
            } else {
                e.clone()
            }
        }
        Exp::Const(_) | Exp::Sort(_) | Exp::MetaVar(_) | Exp::Literal(_) => e.clone(),
        Exp::Pi(Pi { name, domain, codomain }) => Exp::Pi(Pi {
            name: name.clone(),
            domain: Box::new(abstract_at(domain, depth, locals)),
            codomain: Box::new(abstract_at(codomain, depth + 1, locals)),
        }),
        Exp::Lambda(Lambda { name, ty, body }) => Exp::Lambda(Lambda {
            name: name.clone(),
            ty: Box::new(abstract_at(ty, depth, locals)),
            body: Box::new(abstract_at(body, depth + 1, locals)),
        }),
        Exp::LetExp(LetExp { name, ty, val, body }) => Exp::LetExp(LetExp {
            name: name.clone(),
            ty: Box::new(abstract_at(ty, depth, locals)),
            val: Box::new(abstract_at(val, depth, locals)),
            body: Box::new(abstract_at(body, depth + 1, locals)),
        }),
        Exp::App(App { fun, arg }) => Exp::App(App {
            fun: Box::new(abstract_at(fun, depth, locals)),
            arg: Box::new(abstract_at(arg, depth, locals)),
        }),
        Exp::MacroExp(MacroExp { payload }) => {
            let payload = match payload {
                MacroPayload::Irrelevant(body) => {
                    MacroPayload::Irrelevant(Box::new(abstract_at(body, depth, locals)))
                }
                MacroPayload::RecFn(name) => MacroPayload::RecFn(name.clone()),
                MacroPayload::Annotation { name, body } => MacroPayload::Annotation {
                    name: name.clone(),
                    body: Box::new(abstract_at(body, depth, locals)),
                },
            };
            Exp::MacroExp(MacroExp { payload })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::BinderName;

    fn var(idx: usize) -> Exp {
        Exp::Variable(Variable { idx })
    }

    fn local(id: u64) -> Local {
        Local {
            id,
            name: BinderName::Wildcard,
            ty: Box::new(Exp::Sort(Sort { level: Level::Zero })),
        }
    }

    #[test]
    fn instantiate_innermost() {
        let c = Exp::Const(Const::new(crate::Name::from_str("c")));
        assert_eq!(instantiate1(&var(0), &c), c);
    }

    #[test]
    fn instantiate_lowers_free_variables() {
        assert_eq!(instantiate1(&var(3), &var(9)), var(2));
    }

    #[test]
    fn instantiate_shifts_under_binders() {
        // (\(x : _). @1) with @0 for the outer binder: the substituted
        // variable must be shifted past the lambda it moves under.
        let body = Exp::Lambda(Lambda {
            name: BinderName::Wildcard,
            ty: Box::new(Exp::Sort(Sort { level: Level::Zero })),
            body: Box::new(var(1)),
        });
        let result = instantiate1(&body, &var(0));
        let Exp::Lambda(Lambda { body, .. }) = result else { panic!("expected lambda") };
        assert_eq!(*body, var(1));
    }

    #[test]
    fn abstract_single_local() {
        let l = local(7);
        let e = mk_app(Exp::Local(l.clone()), [var(0)]);
        let abstracted = abstract_locals(&e, std::slice::from_ref(&l));
        assert_eq!(abstracted, mk_app(var(0), [var(1)]));
    }

    #[test]
    fn abstract_two_locals_orders_binders() {
        let outer = local(1);
        let inner = local(2);
        let e = mk_app(Exp::Local(outer.clone()), [Exp::Local(inner.clone())]);
        let abstracted = abstract_locals(&e, &[outer, inner]);
        // outermost-first: the later local gets index 0
        assert_eq!(abstracted, mk_app(var(1), [var(0)]));
    }
}
