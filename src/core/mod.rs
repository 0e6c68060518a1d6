pub mod allocator;
pub mod intervals;
pub mod logic;
pub mod segmenter;
