pub mod ast;
pub mod check;
pub mod input;
pub mod tokens;
