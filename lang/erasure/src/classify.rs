//! Relevance classification.
//!
//! A subterm is computationally irrelevant if it was marked as such
//! upstream, if it is itself a type former, or if it proves a proposition.
//! The classifier is advisory: when it cannot decide, the term counts as
//! relevant and survives untouched.

use lapis_ast::*;

use crate::env::Environment;
use crate::typing::infer_type;

/// Whether `e` was explicitly marked as irrelevant by an earlier pass.
pub fn is_marked_irrelevant(e: &Exp) -> bool {
    matches!(e, Exp::MacroExp(MacroExp { payload: MacroPayload::Irrelevant(_) }))
}

/// Whether `e` is irrelevant by inference: its type is a sort (so `e` is a
/// type former), or its type's type is `Sort 0` (so `e` proves a
/// proposition).
pub fn is_irrelevant_by_inference(env: &Environment, binders: &[Exp], e: &Exp) -> bool {
    let Some(ty) = infer_type(env, binders, e) else {
        return false;
    };
    let ty = whnf_lite(ty);
    if matches!(ty, Exp::Sort(_)) {
        return true;
    }
    match infer_type(env, binders, &ty) {
        Some(Exp::Sort(sort)) => sort.level.is_zero(),
        _ => false,
    }
}

/// Union of the irrelevance tests; each alone is sufficient.
pub fn is_irrelevant(env: &Environment, binders: &[Exp], e: &Exp) -> bool {
    is_marked_irrelevant(e) || is_irrelevant_by_inference(env, binders, e)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cnst(name: &str) -> Exp {
        Exp::Const(Const::new(Name::from_str(name)))
    }

    fn sort(level: Level) -> Exp {
        Exp::Sort(Sort { level })
    }

    #[test]
    fn type_formers_are_irrelevant() {
        let mut env = Environment::new();
        env.add_constant(Name::from_str("nat"), sort(Level::Succ(Box::new(Level::Zero))))
            .unwrap();
        assert!(is_irrelevant(&env, &[], &cnst("nat")));
    }

    #[test]
    fn proofs_are_irrelevant() {
        let mut env = Environment::new();
        // t : Sort 0,  h : t
        env.add_constant(Name::from_str("t"), sort(Level::Zero)).unwrap();
        env.add_constant(Name::from_str("h"), cnst("t")).unwrap();
        assert!(is_irrelevant(&env, &[], &cnst("h")));
    }

    #[test]
    fn data_is_relevant() {
        let mut env = Environment::new();
        env.add_constant(Name::from_str("nat"), sort(Level::Succ(Box::new(Level::Zero))))
            .unwrap();
        env.add_constant(Name::from_str("n"), cnst("nat")).unwrap();
        assert!(!is_irrelevant(&env, &[], &cnst("n")));
    }

    #[test]
    fn unknown_terms_are_relevant() {
        let env = Environment::new();
        assert!(!is_irrelevant(&env, &[], &cnst("mystery")));
    }

    #[test]
    fn marked_terms_are_irrelevant_without_inference() {
        let env = Environment::new();
        let e = Exp::MacroExp(MacroExp {
            payload: MacroPayload::Irrelevant(Box::new(cnst("anything"))),
        });
        assert!(is_irrelevant(&env, &[], &e));
    }

    #[test]
    fn proof_variables_are_classified_through_the_binder_stack() {
        let mut env = Environment::new();
        env.add_constant(Name::from_str("t"), sort(Level::Zero)).unwrap();
        // Under a binder (h : t), the bound variable is a proof.
        let binders = vec![cnst("t")];
        assert!(is_irrelevant(&env, &binders, &Exp::Variable(Variable { idx: 0 })));
    }
}
