use parking_lot::RwLock;
use rayon::prelude::*;
use std::sync::Arc;

use crate::config::{VectorConfig, VectorStats};
use crate::error::Result;
use crate::list::DoubleList;
use crate::vector::SparseDoubleVector;

/// Sparse vector shared between threads
///
/// A single lock guards the whole segment list, so opening a segment and
/// growing a buffer are serialized with every other write. Reads share the
/// lock. Clones refer to the same vector.
#[derive(Clone, Default)]
pub struct SharedSparseVector {
    inner: Arc<RwLock<SparseDoubleVector>>,
}

impl SharedSparseVector {
    /// Wrap an existing vector
    pub fn new(vector: SparseDoubleVector) -> Self {
        Self {
            inner: Arc::new(RwLock::new(vector)),
        }
    }

    /// Create an empty shared vector from a configuration
    pub fn with_config(config: VectorConfig) -> Result<Self> {
        SparseDoubleVector::with_config(config).map(Self::new)
    }

    pub fn add_double(&self, value: f64) {
        self.inner.write().add_double(value);
    }

    pub fn add_all_double(&self, values: &[f64]) {
        self.inner.write().add_all_double(values);
    }

    pub fn add_double_at(&self, index: usize, value: f64) {
        self.inner.write().add_double_at(index, value);
    }

    pub fn set_double(&self, index: usize, value: f64) -> f64 {
        self.inner.write().set_double(index, value)
    }

    pub fn get_double(&self, index: usize) -> f64 {
        self.inner.read().get_double(index)
    }

    /// Append several batches under one write lock, in order
    pub fn add_batches(&self, batches: &[Vec<f64>]) {
        if batches.is_empty() {
            return;
        }
        let mut guard = self.inner.write();
        for batch in batches {
            guard.add_all_double(batch);
        }
    }

    /// Parallel batch read under one read lock
    ///
    /// # Returns
    /// One value per index, in the order given
    pub fn get_many(&self, indices: &[usize]) -> Vec<f64> {
        if indices.is_empty() {
            return Vec::new();
        }
        let guard = self.inner.read();
        let vector: &SparseDoubleVector = &guard;
        indices
            .par_iter()
            .map(|&index| vector.get_double(index))
            .collect()
    }

    pub fn size(&self) -> usize {
        self.inner.read().size()
    }

    pub fn count(&self) -> usize {
        self.inner.read().count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn stats(&self) -> VectorStats {
        self.inner.read().stats()
    }

    /// Run `f` with shared access
    pub fn with_read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SparseDoubleVector) -> R,
    {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Run `f` with exclusive access
    pub fn with_write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SparseDoubleVector) -> R,
    {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Take the vector back, or `self` if other clones are still alive
    pub fn try_unwrap(self) -> std::result::Result<SparseDoubleVector, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl From<SparseDoubleVector> for SharedSparseVector {
    fn from(vector: SparseDoubleVector) -> Self {
        Self::new(vector)
    }
}

impl DoubleList for SharedSparseVector {
    fn add_double(&mut self, value: f64) {
        SharedSparseVector::add_double(self, value)
    }

    fn add_double_at(&mut self, index: usize, value: f64) {
        SharedSparseVector::add_double_at(self, index, value)
    }

    fn add_all_double(&mut self, values: &[f64]) {
        SharedSparseVector::add_all_double(self, values)
    }

    fn get_double(&self, index: usize) -> f64 {
        SharedSparseVector::get_double(self, index)
    }

    fn set_double(&mut self, index: usize, value: f64) -> f64 {
        SharedSparseVector::set_double(self, index, value)
    }

    fn size(&self) -> usize {
        SharedSparseVector::size(self)
    }

    fn count(&self) -> usize {
        SharedSparseVector::count(self)
    }

    fn is_empty(&self) -> bool {
        SharedSparseVector::is_empty(self)
    }
}
