/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Unordered hash set.
//!
//! [`Set`] holds distinct values of a hashable type and exposes no
//! iteration order. Storage is allocated lazily, on the first insertion.
//!
//! ```
//! use sets::Set;
//!
//! let mut s = Set::from([1, 2, 2, 3]);
//! assert_eq!(s.len(), 3);
//! assert!(s.remove(&2));
//! assert!(!s.remove(&5));
//! assert_eq!(s.iter_sorted(), vec![&1, &3]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod error;
pub mod set;

pub use equivalent::Equivalent;

pub use crate::error::Error;
pub use crate::set::Set;

/// Create a [`Set`](crate::Set) from a list of values.
///
/// ## Example
///
/// ```
/// use sets::set;
///
/// let s = set! {"a", "b", "a"};
/// assert_eq!(s.contains("a"), true);
/// assert_eq!(s.len(), 2);
/// assert_eq!(s.contains("c"), false);
/// ```
#[macro_export]
macro_rules! set {
    (@single $($x:tt)*) => (());
    (@count $($rest:expr),*) => (<[()]>::len(&[$($crate::set!(@single $rest)),*]));

    ($($key:expr,)+) => { $crate::set!($($key),+) };
    ($($key:expr),*) => {
        {
            let cap = $crate::set!(@count $($key),*);
            #[allow(unused_mut)]
            let mut set = $crate::Set::with_capacity(cap);
            $(
                set.insert($key);
            )*
            set
        }
    };
}
