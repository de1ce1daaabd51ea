mod builtin;
mod environment;
mod error;
mod evaluator;
pub mod object;

pub use builtin::Builtin;
pub use environment::{Env, Environment};
pub use error::RuntimeError;
pub use evaluator::{evaluate, Evaluator};
