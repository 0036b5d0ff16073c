use crate::global::ABSENT;

/// Buffer length after one growth step: `ceil(len / fill_factor)`, at least `len + 1`
pub(crate) fn grown_len(len: usize, fill_factor: f64) -> usize {
    let target = (len as f64 / fill_factor).ceil() as usize;
    target.max(len + 1)
}

/// One contiguous buffer mapped onto a run of global indices
///
/// Offset 0 of the buffer holds global index `start_index`. The filled range is
/// `start_index..end_index`, cells past it are zero until written.
#[derive(Debug, Clone)]
pub struct Segment {
    /// Backing buffer, its length is the segment capacity
    data: Vec<f64>,
    /// Global index of buffer offset 0
    start_index: usize,
    /// Next free global index (append cursor)
    end_index: usize,
    /// Concrete values held by all segments before this one
    item_index: usize,
}

impl Segment {
    /// Create an empty segment starting at `start_index`
    pub(crate) fn new(start_index: usize, item_index: usize, capacity: usize) -> Self {
        Self {
            data: vec![ABSENT; capacity.max(1)],
            start_index,
            end_index: start_index,
            item_index,
        }
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn end_index(&self) -> usize {
        self.end_index
    }

    pub fn item_index(&self) -> usize {
        self.item_index
    }

    /// Number of values in the filled range
    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    pub fn is_empty(&self) -> bool {
        self.end_index == self.start_index
    }

    /// Current buffer length
    pub fn buffer_len(&self) -> usize {
        self.data.len()
    }

    /// Appends this segment can take before its buffer grows
    pub fn remaining_capacity(&self) -> usize {
        self.data.len() - self.len()
    }

    /// Whether `index` lies in the filled range
    pub fn contains(&self, index: usize) -> bool {
        (self.start_index..self.end_index).contains(&index)
    }

    /// Whether a positional write at `index` can be done in place
    ///
    /// True for any filled index and for the append cursor itself.
    pub fn absorbs(&self, index: usize) -> bool {
        (self.start_index..=self.end_index).contains(&index)
    }

    /// Filled values in index order
    pub fn values(&self) -> &[f64] {
        &self.data[..self.len()]
    }

    /// Append `value` at the cursor, growing first if it would fill the buffer
    pub(crate) fn append(&mut self, value: f64, fill_factor: f64) {
        debug_assert!(self.end_index < usize::MAX, "append past usize::MAX");
        self.reserve_one(fill_factor);
        let offset = self.len();
        self.data[offset] = value;
        self.end_index += 1;
    }

    /// Append a batch, growing at most once up front
    pub(crate) fn append_bulk(&mut self, values: &[f64], fill_factor: f64) {
        if values.is_empty() {
            return;
        }
        self.reserve_bulk(values.len(), fill_factor);
        let offset = self.len();
        self.data[offset..offset + values.len()].copy_from_slice(values);
        self.end_index += values.len();
        tracing::trace!(
            start_index = self.start_index,
            appended = values.len(),
            end_index = self.end_index,
            "bulk append"
        );
    }

    /// Read global `index`, `0.0` when it holds no value
    pub fn get(&self, index: usize) -> f64 {
        index
            .checked_sub(self.start_index)
            .and_then(|offset| self.values().get(offset))
            .copied()
            .unwrap_or(ABSENT)
    }

    /// Write `value` at `index` and return what was there
    ///
    /// A filled index is overwritten. The append cursor goes through
    /// `insert_at`, which here is a plain append, and returns `0.0`.
    /// Any other index cannot be held by this segment and yields `None`.
    pub(crate) fn set(&mut self, index: usize, value: f64, fill_factor: f64) -> Option<f64> {
        if self.contains(index) {
            let slot = &mut self.data[index - self.start_index];
            return Some(std::mem::replace(slot, value));
        }
        if index == self.end_index {
            self.insert_at(index, value, fill_factor);
            return Some(ABSENT);
        }
        None
    }

    /// Insert `value` at `index`, shifting the tail of the filled range right
    ///
    /// `index` must satisfy `absorbs`. The buffer grows before the shift
    /// when it has no free cell, so nothing falls off the end.
    pub(crate) fn insert_at(&mut self, index: usize, value: f64, fill_factor: f64) {
        debug_assert!(self.absorbs(index), "index {index} outside segment");
        debug_assert!(self.end_index < usize::MAX, "insert past usize::MAX");
        self.reserve_one(fill_factor);
        let offset = index - self.start_index;
        let len = self.len();
        self.data.copy_within(offset..len, offset + 1);
        self.data[offset] = value;
        self.end_index += 1;
    }

    /// Move the segment `positions` indices right and count `items` more values before it
    pub(crate) fn relocate(&mut self, positions: usize, items: usize) {
        self.start_index += positions;
        self.end_index += positions;
        self.item_index += items;
    }

    /// Grow to `ceil(len / fill_factor)` when one more value would fill the buffer
    fn reserve_one(&mut self, fill_factor: f64) {
        if self.remaining_capacity() > 1 {
            return;
        }
        self.grow_to(grown_len(self.data.len(), fill_factor));
    }

    /// Grow to `ceil((len + batch) / fill_factor)` unless the batch leaves a free cell
    fn reserve_bulk(&mut self, batch: usize, fill_factor: f64) {
        if self.remaining_capacity() > batch {
            return;
        }
        self.grow_to(grown_len(self.data.len() + batch, fill_factor));
    }

    fn grow_to(&mut self, new_len: usize) {
        debug_assert!(new_len > self.data.len());
        tracing::debug!(
            start_index = self.start_index,
            from = self.data.len(),
            to = new_len,
            "growing segment buffer"
        );
        self.data.resize(new_len, ABSENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grown_len_follows_fill_factor() {
        assert_eq!(grown_len(10, 0.75), 14);
        assert_eq!(grown_len(4, 0.5), 8);
        assert_eq!(grown_len(1, 0.99), 2);
        assert_eq!(grown_len(100, 0.999), 101);
    }

    #[test]
    fn append_grows_when_full() {
        let mut segment = Segment::new(0, 0, 4);
        for i in 0..3 {
            segment.append(i as f64, 0.75);
        }
        assert_eq!(segment.buffer_len(), 4);
        segment.append(3.0, 0.75);
        assert_eq!(segment.buffer_len(), 6);
        assert_eq!(segment.values(), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(segment.remaining_capacity(), 2);
    }

    #[test]
    fn bulk_append_grows_once() {
        let mut segment = Segment::new(0, 0, 4);
        segment.append_bulk(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.75);
        assert_eq!(segment.buffer_len(), 12);
        assert_eq!(segment.len(), 5);
        segment.append_bulk(&[], 0.75);
        assert_eq!(segment.len(), 5);
    }

    #[test]
    fn single_value_batch_uses_bulk_growth() {
        let mut segment = Segment::new(0, 0, 4);
        segment.append_bulk(&[1.0, 2.0, 3.0], 0.75);
        assert_eq!(segment.remaining_capacity(), 1);
        segment.append_bulk(&[4.0], 0.75);
        assert_eq!(segment.buffer_len(), 7);

        let mut single = Segment::new(0, 0, 4);
        single.append_bulk(&[1.0, 2.0, 3.0], 0.75);
        single.append(4.0, 0.75);
        assert_eq!(single.buffer_len(), 6);
        assert_eq!(single.values(), segment.values());
    }

    #[test]
    fn get_uses_global_index() {
        let mut segment = Segment::new(100, 3, 10);
        segment.append(7.0, 0.75);
        segment.append(8.0, 0.75);
        assert_eq!(segment.get(100), 7.0);
        assert_eq!(segment.get(101), 8.0);
        assert_eq!(segment.get(102), 0.0);
        assert_eq!(segment.get(99), 0.0);
        assert_eq!(segment.get(10_000), 0.0);
    }

    #[test]
    fn set_overwrites_or_appends() {
        let mut segment = Segment::new(0, 0, 10);
        segment.append_bulk(&[1.0, 2.0], 0.75);
        assert_eq!(segment.set(1, 5.0, 0.75), Some(2.0));
        assert_eq!(segment.set(2, 6.0, 0.75), Some(0.0));
        assert_eq!(segment.set(9, 6.0, 0.75), None);
        assert_eq!(segment.values(), &[1.0, 5.0, 6.0]);
    }

    #[test]
    fn insert_at_shifts_tail() {
        let mut segment = Segment::new(5, 0, 4);
        segment.append_bulk(&[1.0, 2.0, 3.0], 0.75);
        assert_eq!(segment.remaining_capacity(), 1);
        segment.insert_at(6, 9.0, 0.75);
        assert_eq!(segment.values(), &[1.0, 9.0, 2.0, 3.0]);
        assert_eq!(segment.end_index(), 9);
    }

    #[test]
    fn insert_at_full_buffer_keeps_every_value() {
        let mut segment = Segment::new(0, 0, 2);
        segment.append(1.0, 0.5);
        segment.insert_at(0, 0.5, 0.5);
        segment.insert_at(1, 0.75, 0.5);
        assert_eq!(segment.values(), &[0.5, 0.75, 1.0]);
        assert!(segment.remaining_capacity() > 0);
    }

    #[test]
    fn relocate_moves_range() {
        let mut segment = Segment::new(10, 2, 4);
        segment.append(1.0, 0.75);
        segment.relocate(1, 1);
        assert_eq!(segment.start_index(), 11);
        assert_eq!(segment.end_index(), 12);
        assert_eq!(segment.item_index(), 3);
        assert_eq!(segment.get(11), 1.0);
    }
}
