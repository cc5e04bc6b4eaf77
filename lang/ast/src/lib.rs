pub mod exp;
pub mod ident;
pub mod norm;
pub mod traits;

pub use exp::*;
pub use ident::*;
pub use norm::*;
pub use traits::*;
