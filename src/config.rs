use crate::error::{Result, VectorError};
use crate::global::{DEFAULT_CAPACITY, DEFAULT_FILL_FACTOR};

/// Layout of the vector. Carried as metadata only, storage is identical.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Horizontal vector: `[0, 1, 2]`
    #[default]
    Row,
    /// Vertical vector, one value per row
    Column,
}

impl Orientation {
    /// Map the horizontal flag used by callers onto an orientation
    pub fn from_horizontal(horizontal: bool) -> Self {
        if horizontal { Self::Row } else { Self::Column }
    }

    pub fn is_horizontal(self) -> bool {
        self == Self::Row
    }
}

/// Configuration parameters for a sparse vector
#[derive(Clone, Debug, PartialEq)]
pub struct VectorConfig {
    /// Buffer length of the first segment, also the length of every new segment
    pub capacity: usize,
    /// Growth ratio, a full buffer of length `n` grows to `ceil(n / fill_factor)`
    pub fill_factor: f64,
    /// Row or column vector
    pub orientation: Orientation,
}

impl Default for VectorConfig {
    /// Create default vector configuration
    ///
    /// # Default Values
    /// - capacity: 10
    /// - fill_factor: 0.75
    /// - orientation: Row
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            fill_factor: DEFAULT_FILL_FACTOR,
            orientation: Orientation::Row,
        }
    }
}

impl VectorConfig {
    pub fn new(capacity: usize, fill_factor: f64, orientation: Orientation) -> Self {
        Self {
            capacity,
            fill_factor,
            orientation,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_fill_factor(mut self, fill_factor: f64) -> Self {
        self.fill_factor = fill_factor;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Capacity that holds `len` values without growing under the default fill factor
    pub(crate) fn fitting(len: usize, orientation: Orientation) -> Self {
        let capacity = if len == 0 {
            DEFAULT_CAPACITY
        } else {
            (len as f64 / DEFAULT_FILL_FACTOR).ceil() as usize
        };
        Self::new(capacity, DEFAULT_FILL_FACTOR, orientation)
    }

    /// Check `capacity > 0` and `0 < fill_factor < 1`
    ///
    /// # Errors
    /// `VectorError::InvalidConfiguration` naming the offending parameter.
    /// A NaN fill factor is rejected as well.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(VectorError::invalid("capacity", self.capacity));
        }
        if !(self.fill_factor > 0.0 && self.fill_factor < 1.0) {
            return Err(VectorError::invalid("fill_factor", self.fill_factor));
        }
        Ok(())
    }
}

/// Statistics about a sparse vector
#[derive(Debug, Clone, PartialEq)]
pub struct VectorStats {
    /// Logical length, one past the highest index written
    pub size: usize,
    /// Number of concrete values stored
    pub count: usize,
    /// Number of segments
    pub segment_count: usize,
    /// Buffer length of the last segment
    pub capacity: usize,
    /// Sum of all segment buffer lengths
    pub allocated: usize,
}

impl VectorStats {
    /// Number of logical cells inside gaps between segments
    pub fn gap_cells(&self) -> usize {
        self.size - self.count
    }
}
