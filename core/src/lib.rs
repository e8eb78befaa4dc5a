#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{string::String, string::ToString, vec::Vec};

pub mod errors;
pub mod evaluator;
pub mod scanner;
pub mod stack;

pub use errors::{Delimiter, EvalError};
pub use evaluator::{Evaluator, EvaluatorOptions, evaluate, evaluate_with_options};
