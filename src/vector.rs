use smallvec::SmallVec;

use crate::config::{Orientation, VectorConfig, VectorStats};
use crate::error::Result;
use crate::global::{ABSENT, INLINE_SPANS, MAX_INDEX};
use crate::storage::Segment;

/// Growable f64 vector that tolerates sparse writes
///
/// Values live in an ordered list of segments, each owning one buffer.
/// Appends always go to the last segment. A write far past the end of a
/// segment opens a new segment at that index instead of zero-filling the gap,
/// so a jump of any size costs one segment header.
///
/// Cells that were never written read as `0.0`.
///
/// # Example
/// ```
/// use sparsex::SparseDoubleVector;
///
/// let mut vector = SparseDoubleVector::from_slice(&[1.0, 2.0, 3.0]);
/// vector.add_double_at(100, 4.0);
///
/// assert_eq!(vector.size(), 101);
/// assert_eq!(vector.count(), 4);
/// assert_eq!(vector.get_double(50), 0.0);
/// assert_eq!(vector.get_double(100), 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct SparseDoubleVector {
    /// Configuration parameters
    config: VectorConfig,
    /// Segments ordered by strictly ascending start index, never empty
    segments: Vec<Segment>,
}

impl Default for SparseDoubleVector {
    fn default() -> Self {
        Self::from_valid(VectorConfig::default())
    }
}

impl SparseDoubleVector {
    /// Create an empty row vector with capacity 10 and fill factor 0.75
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty vector from a configuration
    ///
    /// # Errors
    /// `InvalidConfiguration` when `capacity == 0` or the fill factor lies outside `(0, 1)`
    pub fn with_config(config: VectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    /// Create an empty vector with an explicit capacity, fill factor and orientation
    ///
    /// # Arguments
    /// * `capacity` - Buffer length of the first segment, must be positive
    /// * `fill_factor` - Growth ratio, must lie strictly between 0 and 1
    /// * `orientation` - Row or column, metadata only
    ///
    /// # Example
    /// ```
    /// use sparsex::{Orientation, SparseDoubleVector};
    ///
    /// let vector = SparseDoubleVector::with_capacity(20, 0.75, Orientation::Column).unwrap();
    /// assert_eq!(vector.get_capacity(), 20);
    /// assert!(!vector.is_horizontal());
    /// assert!(SparseDoubleVector::with_capacity(0, 0.75, Orientation::Row).is_err());
    /// ```
    pub fn with_capacity(capacity: usize, fill_factor: f64, orientation: Orientation) -> Result<Self> {
        Self::with_config(VectorConfig::new(capacity, fill_factor, orientation))
    }

    /// Create a row vector holding `data`
    pub fn from_slice(data: &[f64]) -> Self {
        Self::from_slice_oriented(data, Orientation::Row)
    }

    /// Create a vector holding `data`, sized so the data fits without growing
    pub fn from_slice_oriented(data: &[f64], orientation: Orientation) -> Self {
        let mut vector = Self::from_valid(VectorConfig::fitting(data.len(), orientation));
        vector.add_all_double(data);
        vector
    }

    fn from_valid(config: VectorConfig) -> Self {
        Self {
            segments: vec![Segment::new(0, 0, config.capacity)],
            config,
        }
    }

    pub fn config(&self) -> &VectorConfig {
        &self.config
    }

    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    /// True for a row vector, false for a column vector
    pub fn is_horizontal(&self) -> bool {
        self.config.orientation.is_horizontal()
    }

    /// Buffer length of the last segment, the one appends go to
    ///
    /// Segments opened between existing ones do not change it.
    pub fn get_capacity(&self) -> usize {
        self.current().buffer_len()
    }

    /// True while nothing has been written past the start of the last segment
    pub fn is_empty(&self) -> bool {
        self.current().is_empty()
    }

    /// Logical length: one past the highest index written
    pub fn size(&self) -> usize {
        self.current().end_index()
    }

    /// Number of concrete values stored, less than `size` while gaps exist
    pub fn count(&self) -> usize {
        let current = self.current();
        current.item_index() + current.len()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Filled `(start, end)` range of every segment in index order
    pub fn segment_spans(&self) -> SmallVec<[(usize, usize); INLINE_SPANS]> {
        self.segments
            .iter()
            .map(|s| (s.start_index(), s.end_index()))
            .collect()
    }

    /// Get statistics about the vector
    pub fn stats(&self) -> VectorStats {
        VectorStats {
            size: self.size(),
            count: self.count(),
            segment_count: self.segments.len(),
            capacity: self.get_capacity(),
            allocated: self.segments.iter().map(Segment::buffer_len).sum(),
        }
    }

    /// Append `value` to the end of the last segment
    ///
    /// Refused once `size() == usize::MAX`.
    pub fn add_double(&mut self, value: f64) {
        if self.size() > MAX_INDEX {
            Self::refuse(self.size(), "append");
            return;
        }
        let fill_factor = self.config.fill_factor;
        self.current_mut().append(value, fill_factor);
    }

    /// Append every value in `values` to the last segment, growing at most once
    ///
    /// Refused as a whole when the batch would push `size()` past `usize::MAX`.
    pub fn add_all_double(&mut self, values: &[f64]) {
        if self.size().checked_add(values.len()).is_none() {
            Self::refuse(self.size(), "bulk append");
            return;
        }
        let fill_factor = self.config.fill_factor;
        self.current_mut().append_bulk(values, fill_factor);
    }

    /// Insert `value` at `index`
    ///
    /// Below `size` this is a list insert: the value at `index` and every
    /// later value move one position right. At or past `size` it is a sparse
    /// append, which opens a new segment unless `index == size`.
    ///
    /// The largest usable index is [`MAX_INDEX`]. An insert at `usize::MAX`,
    /// or any insert once `size() == usize::MAX`, would need a logical length
    /// that `usize` cannot hold: it is refused and the vector is unchanged.
    ///
    /// # Arguments
    /// * `index` - Global position to insert at
    /// * `value` - Value to store
    pub fn add_double_at(&mut self, index: usize, value: f64) {
        self.write(index, value, true);
    }

    /// Read the value at `index`, `0.0` for any cell never written
    pub fn get_double(&self, index: usize) -> f64 {
        self.segments[self.locate(index)].get(index)
    }

    /// Overwrite the value at `index` and return the previous one
    ///
    /// # Returns
    /// The replaced value, or `0.0` when `index` held nothing. Writing into a
    /// gap or past the end stores the value without moving any other value.
    /// A write at `usize::MAX`, one past [`MAX_INDEX`], is refused, leaves the
    /// vector unchanged and returns `0.0`.
    pub fn set_double(&mut self, index: usize, value: f64) -> f64 {
        self.write(index, value, false)
    }

    /// Expand into a dense buffer of `size` values, gaps filled with zero
    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![ABSENT; self.size()];
        for segment in &self.segments {
            dense[segment.start_index()..segment.end_index()].copy_from_slice(segment.values());
        }
        dense
    }

    fn current(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    fn current_mut(&mut self) -> &mut Segment {
        let last = self.segments.len() - 1;
        &mut self.segments[last]
    }

    fn refuse(index: usize, operation: &'static str) {
        tracing::warn!(
            index,
            max_index = MAX_INDEX,
            operation,
            "write refused, logical length would overflow usize"
        );
    }

    /// Position of the segment with the highest start index not above `index`
    fn locate(&self, index: usize) -> usize {
        self.segments
            .partition_point(|s| s.start_index() <= index)
            .saturating_sub(1)
    }

    /// Shared path of positional insert and set
    ///
    /// With `shift` the later segments move one index right, otherwise only
    /// their element counts change.
    fn write(&mut self, index: usize, value: f64, shift: bool) -> f64 {
        if index > MAX_INDEX || (shift && self.size() > MAX_INDEX) {
            Self::refuse(index, if shift { "insert" } else { "set" });
            return ABSENT;
        }
        let pos = self.locate(index);
        let fill_factor = self.config.fill_factor;
        let segment = &mut self.segments[pos];
        if !shift && segment.contains(index) {
            return segment.set(index, value, fill_factor).unwrap_or(ABSENT);
        }
        let target = if segment.absorbs(index) {
            segment.insert_at(index, value, fill_factor);
            pos
        } else {
            self.open_segment(pos + 1, index, value);
            pos + 1
        };
        let positions = usize::from(shift);
        for later in &mut self.segments[target + 1..] {
            later.relocate(positions, 1);
        }
        ABSENT
    }

    /// Insert a new segment at `pos` whose first value is `value` at `index`
    fn open_segment(&mut self, pos: usize, index: usize, value: f64) {
        let item_index = self.segments[..pos]
            .last()
            .map_or(0, |prev| prev.item_index() + prev.len());
        let mut segment = Segment::new(index, item_index, self.config.capacity);
        segment.append(value, self.config.fill_factor);
        tracing::debug!(
            start_index = index,
            position = pos,
            buffer_len = segment.buffer_len(),
            segments = self.segments.len() + 1,
            "opening segment"
        );
        self.segments.insert(pos, segment);
    }
}

impl From<&[f64]> for SparseDoubleVector {
    fn from(data: &[f64]) -> Self {
        Self::from_slice(data)
    }
}

impl From<Vec<f64>> for SparseDoubleVector {
    fn from(data: Vec<f64>) -> Self {
        Self::from_slice(&data)
    }
}

impl FromIterator<f64> for SparseDoubleVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let data: Vec<f64> = iter.into_iter().collect();
        Self::from_slice(&data)
    }
}

impl Extend<f64> for SparseDoubleVector {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        let values: Vec<f64> = iter.into_iter().collect();
        self.add_all_double(&values);
    }
}
