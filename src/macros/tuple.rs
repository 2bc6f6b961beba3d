//! Arity-generic combinators for tuple payloads, generated for sizes 2 to 8.
//!
//! Each method unwraps the tuple, splats it into the callback and rewraps
//! the callback's result.
//!
//! ```
//! use outcome_rail::{Maybe, Outcome};
//!
//! let area = Maybe::some((3, 4)).map_tuple(|w, h| w * h);
//! assert_eq!(area, Maybe::some(12));
//!
//! let full = Outcome::success(("Ada", "Lovelace", 1815))
//!     .map_tuple(|first, last, year| format!("{first} {last} ({year})"));
//! assert_eq!(full.value(), "Ada Lovelace (1815)");
//! ```
use crate::traits::OutcomeTuple;
use crate::types::accumulator::Accumulator;
use crate::types::{Maybe, Outcome};

macro_rules! impl_tuple_combinators {
    ($($ty:ident $var:ident),+) => {
        impl<$($ty),+> Maybe<($($ty,)+)> {
            /// Splats the tuple into `f` and wraps its result.
            #[inline]
            pub fn map_tuple<R, F>(self, f: F) -> Maybe<R>
            where
                F: FnOnce($($ty),+) -> R,
            {
                match self {
                    Maybe::Some(($($var,)+)) => Maybe::Some(f($($var),+)),
                    Maybe::None => Maybe::None,
                }
            }

            /// Splats the tuple into `f`, which may itself be absent.
            #[inline]
            pub fn bind_tuple<R, F>(self, f: F) -> Maybe<R>
            where
                F: FnOnce($($ty),+) -> Maybe<R>,
            {
                match self {
                    Maybe::Some(($($var,)+)) => f($($var),+),
                    Maybe::None => Maybe::None,
                }
            }

            /// Runs `f` on the tuple's elements for its side effect.
            #[inline]
            pub fn on_some_tuple<F>(self, f: F) -> Self
            where
                F: FnOnce($(&$ty),+),
            {
                if let Maybe::Some(($($var,)+)) = &self {
                    f($($var),+);
                }
                self
            }

            /// Splats the tuple into `some`, or runs `none` when absent.
            #[inline]
            pub fn on_either_tuple<S, N>(self, some: S, none: N) -> Self
            where
                S: FnOnce($(&$ty),+),
                N: FnOnce(),
            {
                match &self {
                    Maybe::Some(($($var,)+)) => some($($var),+),
                    Maybe::None => none(),
                }
                self
            }
        }

        impl<$($ty),+> Outcome<($($ty,)+)> {
            /// Splats the tuple into `f` and wraps its result.
            #[inline]
            pub fn map_tuple<R, F>(self, f: F) -> Outcome<R>
            where
                F: FnOnce($($ty),+) -> R,
            {
                match self {
                    Outcome::Success(($($var,)+)) => Outcome::Success(f($($var),+)),
                    Outcome::Failure(error) => Outcome::Failure(error),
                }
            }

            /// Splats the tuple into a fallible `f`.
            #[inline]
            pub fn bind_tuple<R, F>(self, f: F) -> Outcome<R>
            where
                F: FnOnce($($ty),+) -> Outcome<R>,
            {
                match self {
                    Outcome::Success(($($var,)+)) => f($($var),+),
                    Outcome::Failure(error) => Outcome::Failure(error),
                }
            }

            /// Runs `f` on the tuple's elements for its side effect.
            #[inline]
            pub fn on_success_tuple<F>(self, f: F) -> Self
            where
                F: FnOnce($(&$ty),+),
            {
                if let Outcome::Success(($($var,)+)) = &self {
                    f($($var),+);
                }
                self
            }
        }

        impl<$($ty),+> OutcomeTuple for ($(Outcome<$ty>,)+) {
            type Values = ($($ty,)+);

            fn collect_all(self) -> Outcome<Self::Values> {
                let ($($var,)+) = self;
                let mut acc = Accumulator::new();
                $(let $var = acc.absorb($var);)+
                match acc.into_error() {
                    Some(error) => Outcome::Failure(error),
                    None => match ($($var,)+) {
                        ($(Some($var),)+) => Outcome::Success(($($var,)+)),
                        _ => unreachable!("an empty accumulator means every outcome succeeded"),
                    },
                }
            }
        }
    };
}

impl_tuple_combinators!(A a, B b);
impl_tuple_combinators!(A a, B b, C c);
impl_tuple_combinators!(A a, B b, C c, D d);
impl_tuple_combinators!(A a, B b, C c, D d, E e);
impl_tuple_combinators!(A a, B b, C c, D d, E e, G g);
impl_tuple_combinators!(A a, B b, C c, D d, E e, G g, H h);
impl_tuple_combinators!(A a, B b, C c, D d, E e, G g, H h, I i);
