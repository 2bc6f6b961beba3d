//! Fluent validation over a single value.
//!
//! This module provides the two builders behind [`Outcome::ensure_that`]
//! and [`Maybe::filter_that`], plus a library of predefined rules.
//!
//! # Key Components
//!
//! - [`EnsureBuilder`] - fail-fast chain that remembers the first error
//! - [`FilterBuilder`] - the same chain for [`Maybe`], turning failures into `None`
//! - [`rules`] - numeric, string, boolean, date/time, GUID, enum and `Maybe` checks
//!
//! # Examples
//!
//! ```
//! use outcome_rail::validation::EnsureBuilder;
//! use outcome_rail::Error;
//!
//! let quantity = EnsureBuilder::new(3)
//!     .positive()
//!     .less_than_or_equal(10)
//!     .build();
//!
//! assert!(quantity.is_success());
//!
//! let rejected = EnsureBuilder::new(0)
//!     .satisfies(|q| *q > 0, Error::validation("Qty.Zero", "quantity is required"))
//!     .build();
//! assert_eq!(rejected.error().code(), "Qty.Zero");
//! ```
//!
//! [`Outcome::ensure_that`]: crate::Outcome::ensure_that
//! [`Maybe::filter_that`]: crate::Maybe::filter_that
//! [`Maybe`]: crate::Maybe
pub mod builder;
pub mod rules;

pub use self::builder::*;
