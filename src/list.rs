use crate::error::{Result, VectorError};
use crate::vector::SparseDoubleVector;

/// Double-specialized list contract for adapter layers
///
/// Wrappers exposing a generic ordered-collection interface build on these
/// primitives. Bulk adds of boxed values are refused so callers switch to
/// `add_all_double` instead of paying for a silent conversion.
pub trait DoubleList {
    /// Append a value after the last stored index
    fn add_double(&mut self, value: f64);
    /// Insert a value at `index`, sparse when past the end
    fn add_double_at(&mut self, index: usize, value: f64);
    /// Append a batch of values
    fn add_all_double(&mut self, values: &[f64]);
    /// Read a value, `0.0` when absent
    fn get_double(&self, index: usize) -> f64;
    /// Overwrite a value and return the previous one
    fn set_double(&mut self, index: usize, value: f64) -> f64;
    /// Logical length
    fn size(&self) -> usize;
    /// Concrete values stored
    fn count(&self) -> usize;
    fn is_empty(&self) -> bool;

    /// Generic bulk append, always rejected
    fn add_all_boxed(&mut self, _values: &[Box<f64>]) -> Result<()> {
        Err(VectorError::unsupported("add_all_boxed", "add_all_double"))
    }

    /// Generic positional bulk insert, always rejected
    fn add_all_boxed_at(&mut self, _index: usize, _values: &[Box<f64>]) -> Result<()> {
        Err(VectorError::unsupported("add_all_boxed_at", "add_double_at"))
    }
}

impl DoubleList for SparseDoubleVector {
    fn add_double(&mut self, value: f64) {
        SparseDoubleVector::add_double(self, value)
    }

    fn add_double_at(&mut self, index: usize, value: f64) {
        SparseDoubleVector::add_double_at(self, index, value)
    }

    fn add_all_double(&mut self, values: &[f64]) {
        SparseDoubleVector::add_all_double(self, values)
    }

    fn get_double(&self, index: usize) -> f64 {
        SparseDoubleVector::get_double(self, index)
    }

    fn set_double(&mut self, index: usize, value: f64) -> f64 {
        SparseDoubleVector::set_double(self, index, value)
    }

    fn size(&self) -> usize {
        SparseDoubleVector::size(self)
    }

    fn count(&self) -> usize {
        SparseDoubleVector::count(self)
    }

    fn is_empty(&self) -> bool {
        SparseDoubleVector::is_empty(self)
    }
}
