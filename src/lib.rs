//! Segmented sparse vector of `f64` values.
//!
//! [`SparseDoubleVector`] behaves like a growable array with positional
//! get/set, but a write far beyond the current length opens a new
//! [`Segment`] instead of allocating the skipped range. Unset cells read as
//! `0.0`, so `size()` (logical length) may exceed `count()` (values stored).
//!
//! ```
//! use sparsex::SparseDoubleVector;
//!
//! let mut vector = SparseDoubleVector::new();
//! vector.add_all_double(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! vector.add_double_at(100, 1.0);
//!
//! assert_eq!(vector.size(), 101);
//! assert_eq!(vector.count(), 7);
//! assert_eq!(vector.segment_count(), 2);
//! ```

mod concurrent;
mod config;
mod error;
mod global;
mod list;
mod storage;
mod vector;

pub use concurrent::SharedSparseVector;
pub use config::{Orientation, VectorConfig, VectorStats};
pub use error::{Result, VectorError};
pub use global::MAX_INDEX;
pub use list::DoubleList;
pub use storage::Segment;
pub use vector::SparseDoubleVector;
