mod shift;
mod subst;

pub use shift::*;
pub use subst::*;
