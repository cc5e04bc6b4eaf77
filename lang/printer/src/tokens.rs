//! Lexemes of the core syntax, used by the `Print` implementations.

pub const BACKSLASH: &str = "\\";
pub const COLON: &str = ":";
pub const COLONEQ: &str = ":=";
pub const COMMA: &str = ",";
pub const DOT: &str = ".";
pub const IN: &str = "in";
pub const LET: &str = "let";
pub const PI: &str = "Pi";
pub const QUESTION_MARK: &str = "?";
pub const SORT: &str = "Sort";
pub const UNDERSCORE: &str = "_";
