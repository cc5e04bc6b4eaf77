/// Shifting of de Bruijn indices.
///
/// Used when a term is moved under (or out from under) binders: every
/// variable pointing past the cutoff must be adjusted so that it still
/// refers to the same binder afterwards.
pub trait Shift {
    /// Shift every de Bruijn index `>= cutoff` by `by`.
    fn shift_in_range(&mut self, cutoff: usize, by: isize);

    /// Shift every de Bruijn index by `by`.
    fn shift(&mut self, by: isize) {
        self.shift_in_range(0, by);
    }
}

/// Clone the term and shift the clone.
pub fn shift_and_clone<T: Clone + Shift>(e: &T, by: isize) -> T {
    let mut e = e.clone();
    e.shift(by);
    e
}

impl<T: Shift> Shift for Box<T> {
    fn shift_in_range(&mut self, cutoff: usize, by: isize) {
        (**self).shift_in_range(cutoff, by);
    }
}

impl<T: Shift> Shift for Option<T> {
    fn shift_in_range(&mut self, cutoff: usize, by: isize) {
        if let Some(inner) = self {
            inner.shift_in_range(cutoff, by);
        }
    }
}

impl<T: Shift> Shift for Vec<T> {
    fn shift_in_range(&mut self, cutoff: usize, by: isize) {
        for inner in self.iter_mut() {
            inner.shift_in_range(cutoff, by);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exp::*;
    use crate::ident::BinderName;

    fn var(idx: usize) -> Exp {
        Exp::Variable(Variable { idx })
    }

    #[test]
    fn shift_above_cutoff() {
        let mut e = var(2);
        e.shift_in_range(1, 3);
        assert_eq!(e, var(5));
    }

    #[test]
    fn shift_below_cutoff() {
        let mut e = var(0);
        e.shift_in_range(1, 3);
        assert_eq!(e, var(0));
    }

    #[test]
    fn shift_stops_at_binder() {
        // \(x : _). @0 @1 — the bound @0 must not move, the free @1 must.
        let mut e = Exp::Lambda(Lambda {
            name: BinderName::Wildcard,
            ty: Box::new(Exp::Sort(Sort { level: Level::Zero })),
            body: Box::new(mk_app(var(0), [var(1)])),
        });
        e.shift(1);
        let Exp::Lambda(Lambda { body, .. }) = e else { panic!("expected lambda") };
        assert_eq!(*body, mk_app(var(0), [var(2)]));
    }
}
