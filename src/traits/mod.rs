//! Extension traits layered over the value types.
//!
//! - [`IntoError`]: flexible error arguments for constructors and checks
//! - [`ResultExt`] / [`OptionExt`]: lifting core `Result`/`Option` values
//! - [`OutcomeIterExt`] / [`TraverseExt`]: aggregation over collections
//! - [`OutcomeTuple`]: accumulation over heterogeneous tuples
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{OutcomeIterExt, ResultExt};
//!
//! let numbers: Vec<_> = ["1", "x", "3"]
//!     .iter()
//!     .map(|s| s.parse::<i32>().into_outcome())
//!     .choose_successes()
//!     .collect();
//!
//! assert_eq!(numbers, vec![1, 3]);
//! ```

pub mod into_error;
pub mod outcome_iter;
pub mod outcome_tuple;
pub mod result_ext;

pub use into_error::IntoError;
pub use outcome_iter::{ChooseFailures, ChooseSuccesses, OutcomeIterExt, TraverseExt};
pub use outcome_tuple::OutcomeTuple;
pub use result_ext::{OptionExt, ResultExt};
