pub mod policy;

mod tree;

pub use policy::{LazyMapMonoid, RangeMaxRangeAdd, RangeMinRangeAdd, RangeSumRangeAdd};
pub use tree::{LazySegmentTree, TreeDump};
