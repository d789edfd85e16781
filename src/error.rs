/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use std::alloc::Layout;

/// Failure to grow the backing table of a [`Set`](crate::Set).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requested capacity does not fit in `usize`.
    #[error("Capacity overflow reserving {additional} more elements")]
    CapacityOverflow {
        /// Number of elements requested on top of the current length.
        additional: usize,
    },
    /// The allocator could not provide the table memory.
    #[error("Failed to allocate {} bytes for the set table", layout.size())]
    AllocError {
        /// Layout of the refused allocation.
        layout: Layout,
    },
}

impl Error {
    pub(crate) fn from_hashbrown(e: hashbrown::TryReserveError, additional: usize) -> Error {
        match e {
            hashbrown::TryReserveError::CapacityOverflow => Error::CapacityOverflow { additional },
            hashbrown::TryReserveError::AllocError { layout } => Error::AllocError { layout },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::alloc::Layout;

    use crate::Error;

    #[test]
    fn test_display() {
        assert_eq!(
            "Capacity overflow reserving 7 more elements",
            Error::CapacityOverflow { additional: 7 }.to_string()
        );
        let layout = Layout::from_size_align(64, 8).unwrap();
        assert_eq!(
            "Failed to allocate 64 bytes for the set table",
            Error::AllocError { layout }.to_string()
        );
    }

    #[test]
    fn test_from_hashbrown() {
        assert_eq!(
            Error::CapacityOverflow { additional: 3 },
            Error::from_hashbrown(hashbrown::TryReserveError::CapacityOverflow, 3)
        );
    }
}
