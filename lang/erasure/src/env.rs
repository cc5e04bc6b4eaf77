//! The declaration environment consulted during erasure.
//!
//! Erasure never inspects full inductive signatures; all it needs are the
//! counts that determine the positional layout of eliminator applications,
//! plus the types of global constants for the relevance classifier.

use std::sync::LazyLock;

use lapis_ast::*;

use crate::markers::Markers;
use crate::result::{ErasureError, ErasureResult};
use crate::HashMap;

/// Name of the equality recursor, whose applications erase to the identity.
pub static EQ_REC: LazyLock<Name> = LazyLock::new(|| Name::from_str("eq.rec"));
/// Names of the subtype primitives, which erase to their underlying value.
pub static SUBTYPE_TAG: LazyLock<Name> = LazyLock::new(|| Name::from_str("subtype.tag"));
pub static SUBTYPE_REC: LazyLock<Name> = LazyLock::new(|| Name::from_str("subtype.rec"));
pub static SUBTYPE_ELT_OF: LazyLock<Name> = LazyLock::new(|| Name::from_str("subtype.elt_of"));

/// A constructor as registered by the frontend.
#[derive(Debug, Clone)]
pub struct CtorDecl {
    pub name: Name,
    /// Total number of arguments, family parameters included.
    pub arity: usize,
}

/// An inductive family as registered by the frontend.
#[derive(Debug, Clone)]
pub struct InductiveDecl {
    pub name: Name,
    pub num_params: usize,
    pub num_indices: usize,
    /// Whether any constructor mentions the family recursively. Recursive
    /// recursors cannot be erased; see [ErasureError::RecursiveRecursor].
    pub is_recursive: bool,
    pub ctors: Vec<CtorDecl>,
}

#[derive(Debug)]
struct InductiveInfo {
    num_params: usize,
    num_indices: usize,
    is_recursive: bool,
    ctor_names: Vec<Name>,
}

#[derive(Debug)]
struct CtorInfo {
    family: Name,
    arity: usize,
}

/// The read-only signature table shared by all erasure runs.
#[derive(Debug, Default)]
pub struct Environment {
    inductives: HashMap<Name, InductiveInfo>,
    ctors: HashMap<Name, CtorInfo>,
    consts: HashMap<Name, Exp>,
}

impl Environment {
    pub fn new() -> Self {
        Default::default()
    }

    /// Register an inductive family together with its constructors.
    pub fn add_inductive(&mut self, decl: InductiveDecl) -> ErasureResult {
        let InductiveDecl { name, num_params, num_indices, is_recursive, ctors } = decl;
        if Markers::is_reserved(&name) {
            return Err(ErasureError::reserved_name(&name));
        }
        let mut ctor_names = Vec::with_capacity(ctors.len());
        for CtorDecl { name: ctor, arity } in ctors {
            if Markers::is_reserved(&ctor) {
                return Err(ErasureError::reserved_name(&ctor));
            }
            if arity < num_params {
                return Err(Box::new(ErasureError::IllFormedSignature {
                    name: ctor.to_string(),
                    message: format!(
                        "constructor arity {arity} is smaller than the family's parameter count {num_params}"
                    ),
                }));
            }
            self.ctors.insert(ctor.clone(), CtorInfo { family: name.clone(), arity });
            ctor_names.push(ctor);
        }
        self.inductives
            .insert(name, InductiveInfo { num_params, num_indices, is_recursive, ctor_names });
        Ok(())
    }

    /// Register the type of a global constant for the relevance classifier.
    pub fn add_constant(&mut self, name: Name, ty: Exp) -> ErasureResult {
        if Markers::is_reserved(&name) {
            return Err(ErasureError::reserved_name(&name));
        }
        self.consts.insert(name, ty);
        Ok(())
    }

    fn inductive(&self, family: &Name) -> ErasureResult<&InductiveInfo> {
        self.inductives.get(family).ok_or_else(|| ErasureError::unknown_inductive(family))
    }

    pub fn num_params(&self, family: &Name) -> ErasureResult<usize> {
        Ok(self.inductive(family)?.num_params)
    }

    pub fn num_indices(&self, family: &Name) -> ErasureResult<usize> {
        Ok(self.inductive(family)?.num_indices)
    }

    /// One minor premise per constructor.
    pub fn num_minor_premises(&self, family: &Name) -> ErasureResult<usize> {
        Ok(self.inductive(family)?.ctor_names.len())
    }

    pub fn constructor_names(&self, family: &Name) -> ErasureResult<&[Name]> {
        Ok(&self.inductive(family)?.ctor_names)
    }

    /// A family without constructors has no closed inhabitants; case
    /// analysis on it can never execute.
    pub fn is_empty_family(&self, family: &Name) -> ErasureResult<bool> {
        Ok(self.inductive(family)?.ctor_names.is_empty())
    }

    pub fn is_recursive(&self, family: &Name) -> ErasureResult<bool> {
        Ok(self.inductive(family)?.is_recursive)
    }

    pub fn constructor_arity(&self, ctor: &Name) -> ErasureResult<usize> {
        Ok(self.ctors.get(ctor).ok_or_else(|| ErasureError::unknown_constructor(ctor))?.arity)
    }

    pub fn constructor_family(&self, ctor: &Name) -> ErasureResult<&Name> {
        Ok(&self.ctors.get(ctor).ok_or_else(|| ErasureError::unknown_constructor(ctor))?.family)
    }

    pub fn is_constructor(&self, name: &Name) -> bool {
        self.ctors.contains_key(name)
    }

    pub fn const_type(&self, name: &Name) -> Option<&Exp> {
        self.consts.get(name)
    }

    /// Whether `name` is the case-analysis operator of a registered family.
    pub fn is_cases_on(&self, name: &Name) -> bool {
        name.last() == "cases_on" && self.prefix_is_family(name)
    }

    /// Whether `name` is the recursor of a registered family.
    pub fn is_recursor(&self, name: &Name) -> bool {
        name.last() == "rec" && self.prefix_is_family(name)
    }

    /// Whether `name` is the no-confusion operator of a registered family.
    pub fn is_no_confusion(&self, name: &Name) -> bool {
        name.last() == "no_confusion" && self.prefix_is_family(name)
    }

    fn prefix_is_family(&self, name: &Name) -> bool {
        name.prefix().is_some_and(|family| self.inductives.contains_key(&family))
    }

    /// The constructor at the head of `e`, if `e` head-normalizes to a
    /// constructor application.
    pub fn constructor_app_head(&self, e: &Exp) -> Option<Name> {
        let e = whnf_lite(e.clone());
        let (head, _) = e.unfold_apps();
        match head {
            Exp::Const(c) if self.ctors.contains_key(&c.name) => Some(c.name.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::NEUTRAL_NAME;

    fn list_decl() -> InductiveDecl {
        InductiveDecl {
            name: Name::from_str("list"),
            num_params: 1,
            num_indices: 0,
            is_recursive: true,
            ctors: vec![
                CtorDecl { name: Name::from_str("list.nil"), arity: 1 },
                CtorDecl { name: Name::from_str("list.cons"), arity: 3 },
            ],
        }
    }

    #[test]
    fn eliminator_names_resolve_to_their_family() {
        let mut env = Environment::new();
        env.add_inductive(list_decl()).unwrap();
        assert!(env.is_cases_on(&Name::from_str("list.cases_on")));
        assert!(env.is_recursor(&Name::from_str("list.rec")));
        assert!(env.is_no_confusion(&Name::from_str("list.no_confusion")));
        // not registered
        assert!(!env.is_cases_on(&Name::from_str("vec.cases_on")));
        // atomic names never address an eliminator
        assert!(!env.is_recursor(&Name::from_str("rec")));
    }

    #[test]
    fn positional_counts() {
        let mut env = Environment::new();
        env.add_inductive(list_decl()).unwrap();
        let list = Name::from_str("list");
        assert_eq!(env.num_params(&list).unwrap(), 1);
        assert_eq!(env.num_minor_premises(&list).unwrap(), 2);
        assert_eq!(env.constructor_arity(&Name::from_str("list.cons")).unwrap(), 3);
        assert!(!env.is_empty_family(&list).unwrap());
    }

    #[test]
    fn reserved_names_are_rejected() {
        let mut env = Environment::new();
        let err = env.add_constant(Name::from_str(NEUTRAL_NAME), Exp::Sort(Sort { level: Level::Zero }));
        assert!(matches!(*err.unwrap_err(), ErasureError::ReservedName { .. }));
    }

    #[test]
    fn constructor_arity_below_params_is_ill_formed() {
        let mut env = Environment::new();
        let err = env.add_inductive(InductiveDecl {
            name: Name::from_str("broken"),
            num_params: 2,
            num_indices: 0,
            is_recursive: false,
            ctors: vec![CtorDecl { name: Name::from_str("broken.mk"), arity: 1 }],
        });
        assert!(matches!(*err.unwrap_err(), ErasureError::IllFormedSignature { .. }));
    }

    #[test]
    fn constructor_head_through_redex() {
        let mut env = Environment::new();
        env.add_inductive(list_decl()).unwrap();
        let nil = Exp::Const(Const::new(Name::from_str("list.nil")));
        let id = Exp::Lambda(Lambda {
            name: BinderName::Wildcard,
            ty: Box::new(Exp::Sort(Sort { level: Level::Zero })),
            body: Box::new(Exp::Variable(Variable { idx: 0 })),
        });
        let e = mk_app(id, [mk_app(nil, [Exp::Const(Const::new(Name::from_str("nat")))])]);
        assert_eq!(env.constructor_app_head(&e), Some(Name::from_str("list.nil")));
    }
}
