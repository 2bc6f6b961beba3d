//! Heap types pulled from `alloc` so the crate stays `no_std` friendly.
pub(crate) use alloc::borrow::Cow;
pub(crate) use alloc::format;
pub(crate) use alloc::string::{String, ToString};
pub(crate) use alloc::vec::Vec;
