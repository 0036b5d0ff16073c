/// Buffer length of the first segment when no capacity is given
pub(crate) const DEFAULT_CAPACITY: usize = 10;
/// Growth ratio used when no fill factor is given
pub(crate) const DEFAULT_FILL_FACTOR: f64 = 0.75;
/// Value returned for every cell that holds no concrete element
pub(crate) const ABSENT: f64 = 0.0;
/// Segment spans kept inline before `segment_spans` spills to the heap
pub(crate) const INLINE_SPANS: usize = 8;
/// Largest index a write can target, so the logical length still fits in `usize`
pub const MAX_INDEX: usize = usize::MAX - 1;
