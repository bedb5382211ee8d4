use std::fmt;
use std::ops::{Bound, RangeBounds};

use crate::policy::LazyMapMonoid;

/// Range-fold / range-act segment tree with deferred propagation.
///
/// The tree always spans `[0, capacity())` where `capacity()` is the next
/// power of two `>= len()` (at least 1). Indices past `len()` are padding and
/// hold `P::agg_unit()`.
pub struct LazySegmentTree<P: LazyMapMonoid> {
    root: Node<P>,
    len: usize,
    height: u32,
}

struct Node<P: LazyMapMonoid> {
    l: usize,
    r: usize,
    value: P::Agg,
    lazy: P::Act,
    children: Option<Box<(Node<P>, Node<P>)>>,
}

impl<P: LazyMapMonoid> Clone for Node<P> {
    fn clone(&self) -> Self {
        Self {
            l: self.l,
            r: self.r,
            value: self.value.clone(),
            lazy: self.lazy.clone(),
            children: self.children.clone(),
        }
    }
}

impl<P: LazyMapMonoid> Node<P> {
    fn new(l: usize, r: usize) -> Self {
        debug_assert!(l < r);
        Self {
            l,
            r,
            value: P::agg_unit(),
            lazy: P::act_unit(),
            children: None,
        }
    }

    #[inline]
    fn width(&self) -> usize {
        self.r - self.l
    }

    #[inline]
    fn effective(&self) -> P::Agg {
        P::act_apply_agg(&self.value, &self.lazy, self.width())
    }

    fn push(&mut self) {
        match self.children.as_deref_mut() {
            Some((left, right)) => {
                left.lazy = P::act_compose(&self.lazy, &left.lazy);
                right.lazy = P::act_compose(&self.lazy, &right.lazy);
                self.value = P::agg_merge(&left.effective(), &right.effective());
            }
            None => {
                self.value = P::act_apply_agg(&self.value, &self.lazy, 1);
            }
        }
        self.lazy = P::act_unit();
    }

    /// Refresh `value` from the children without touching `lazy`.
    fn update(&mut self) {
        match self.children.as_deref() {
            Some((left, right)) => {
                self.value = P::agg_merge(&left.effective(), &right.effective());
            }
            None => {
                self.value = P::act_apply_agg(&self.value, &self.lazy, 1);
            }
        }
    }

    fn build(&mut self, values: &[P::Agg]) {
        if self.width() == 1 {
            if let Some(value) = values.get(self.l) {
                self.value = value.clone();
            }
            return;
        }

        let mid = self.l / 2 + self.r / 2;
        let mut left = Node::new(self.l, mid);
        let mut right = Node::new(mid, self.r);
        left.build(values);
        right.build(values);
        self.value = P::agg_merge(&left.value, &right.value);
        self.children = Some(Box::new((left, right)));
    }

    fn is_disjoint(&self, lo: usize, hi: usize) -> bool {
        self.l >= hi || self.r <= lo
    }

    fn is_covered(&self, lo: usize, hi: usize) -> bool {
        lo <= self.l && self.r <= hi
    }

    fn query(&mut self, lo: usize, hi: usize) -> P::Agg {
        self.push();
        if self.is_disjoint(lo, hi) {
            return P::agg_unit();
        }
        if self.is_covered(lo, hi) {
            return self.effective();
        }

        let Some((left, right)) = self.children.as_deref_mut() else {
            // A leaf is either disjoint or covered.
            unreachable!("partial overlap on leaf [{}, {})", self.l, self.r);
        };
        P::agg_merge(&left.query(lo, hi), &right.query(lo, hi))
    }

    fn range_update(&mut self, lo: usize, hi: usize, act: &P::Act) {
        self.push();
        if self.is_disjoint(lo, hi) {
            return;
        }
        if self.is_covered(lo, hi) {
            // push() just reset lazy to the unit, so assigning is composing.
            self.lazy = act.clone();
            return;
        }

        let Some((left, right)) = self.children.as_deref_mut() else {
            unreachable!("partial overlap on leaf [{}, {})", self.l, self.r);
        };
        left.range_update(lo, hi, act);
        right.range_update(lo, hi, act);
        self.update();
    }

    fn write_dump(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result
    where
        P::Agg: fmt::Display,
        P::Act: fmt::Display,
    {
        if let Some((left, right)) = self.children.as_deref() {
            right.write_dump(f, depth + 1)?;
            Self::write_line(f, depth, &self.value, &self.lazy)?;
            left.write_dump(f, depth + 1)
        } else {
            Self::write_line(f, depth, &self.value, &self.lazy)
        }
    }

    fn write_line(
        f: &mut fmt::Formatter<'_>,
        depth: usize,
        value: &P::Agg,
        lazy: &P::Act,
    ) -> fmt::Result
    where
        P::Agg: fmt::Display,
        P::Act: fmt::Display,
    {
        for _ in 0..depth {
            f.write_str("\t")?;
        }
        writeln!(f, "{value}/{lazy}")
    }
}

impl<P: LazyMapMonoid> LazySegmentTree<P> {
    pub fn new(values: &[P::Agg]) -> Self {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("lazy_segtree_build", len = values.len()).entered();

        let len = values.len();
        let capacity = len.max(1).next_power_of_two();
        let mut root = Node::new(0, capacity);
        root.build(values);

        Self {
            root,
            len,
            height: capacity.trailing_zeros(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of leaves, padding included.
    pub fn capacity(&self) -> usize {
        self.root.r
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn resolve_range<R: RangeBounds<usize>>(&self, range: R) -> (usize, usize) {
        let lo = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let hi = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.len,
        };
        (lo, hi)
    }

    /// Aggregate over `range`. Empty or out-of-tree ranges give `P::agg_unit()`.
    pub fn fold<R: RangeBounds<usize>>(&mut self, range: R) -> P::Agg {
        let (lo, hi) = self.resolve_range(range);
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("lazy_segtree_fold", lo, hi).entered();

        if lo >= hi {
            return P::agg_unit();
        }
        self.root.query(lo, hi)
    }

    /// Apply `act` to every element of `range`.
    ///
    /// The part of `range` past `len()` is accepted and ignored: padding never
    /// carries an action and keeps `P::agg_unit()`.
    pub fn update<R: RangeBounds<usize>>(&mut self, range: R, act: P::Act) {
        let (lo, hi) = self.resolve_range(range);
        let hi = hi.min(self.len);
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("lazy_segtree_update", lo, hi).entered();

        if lo >= hi {
            return;
        }
        self.root.range_update(lo, hi, &act);
    }

    pub fn get(&mut self, index: usize) -> P::Agg {
        self.fold(index..=index)
    }

    /// Diagnostic rendering: reversed in-order, one `value/lazy` line per
    /// node, indented by one tab per level.
    pub fn dump(&self) -> TreeDump<'_, P> {
        TreeDump { tree: self }
    }
}

impl<P: LazyMapMonoid> Clone for LazySegmentTree<P> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
            height: self.height,
        }
    }
}

impl<P: LazyMapMonoid> fmt::Debug for LazySegmentTree<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySegmentTree")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("height", &self.height)
            .finish()
    }
}

pub struct TreeDump<'a, P: LazyMapMonoid> {
    tree: &'a LazySegmentTree<P>,
}

impl<P> fmt::Display for TreeDump<'_, P>
where
    P: LazyMapMonoid,
    P::Agg: fmt::Display,
    P::Act: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tree.root.write_dump(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::{LazySegmentTree, Node};
    use crate::policy::{LazyMapMonoid, RangeMaxRangeAdd};

    type MaxNode = Node<RangeMaxRangeAdd>;

    fn built(values: &[i64]) -> MaxNode {
        let capacity = values.len().max(1).next_power_of_two();
        let mut root = MaxNode::new(0, capacity);
        root.build(values);
        root
    }

    #[test]
    fn build_splits_on_floor_midpoint() {
        let root = built(&[1, 5, 3, 2]);
        let (left, right) = root.children.as_deref().unwrap();
        assert_eq!((left.l, left.r), (0, 2));
        assert_eq!((right.l, right.r), (2, 4));
        assert_eq!(root.value, 5);
        assert_eq!(left.value, 5);
        assert_eq!(right.value, 3);
    }

    #[test]
    fn build_pads_with_neutral() {
        let root = built(&[4, 9, 1]);
        let (_, right) = root.children.as_deref().unwrap();
        let (_, pad) = right.children.as_deref().unwrap();
        assert_eq!((pad.l, pad.r), (3, 4));
        assert_eq!(pad.value, RangeMaxRangeAdd::agg_unit());
        assert!(pad.children.is_none());
        assert_eq!(root.value, 9);
    }

    #[test]
    fn push_is_idempotent() {
        let mut root = built(&[1, 5, 3, 2]);
        root.lazy = 7;
        root.push();
        let first = (root.value, root.lazy);
        assert_eq!(first, (12, 0));

        root.push();
        assert_eq!((root.value, root.lazy), first);

        let (left, right) = root.children.as_deref().unwrap();
        assert_eq!(left.lazy, 7);
        assert_eq!(right.lazy, 7);
        assert_eq!(left.effective(), 12);
        assert_eq!(right.effective(), 10);
    }

    #[test]
    fn push_on_leaf_folds_lazy() {
        let mut leaf = MaxNode::new(0, 1);
        leaf.value = 3;
        leaf.lazy = 4;
        assert_eq!(leaf.effective(), 7);
        leaf.push();
        assert_eq!((leaf.value, leaf.lazy), (7, 0));
    }

    #[test]
    fn effective_value_holds_before_push() {
        let mut root = built(&[1, 5, 3, 2]);
        root.range_update(1, 3, &10);
        let (left, right) = root.children.as_deref().unwrap();
        let (_, one) = left.children.as_deref().unwrap();
        let (two, _) = right.children.as_deref().unwrap();
        assert_eq!((one.value, one.lazy), (5, 10));
        assert_eq!((two.value, two.lazy), (3, 10));
        assert_eq!(root.value, 15);
        assert_eq!(root.lazy, 0);
    }

    #[test]
    fn update_refreshes_without_pushing() {
        let mut root = built(&[1, 5, 3, 2]);
        {
            let (left, _) = root.children.as_deref_mut().unwrap();
            left.lazy = 100;
        }
        root.lazy = 1;
        root.update();
        assert_eq!(root.value, 105);
        assert_eq!(root.lazy, 1);
        let (left, _) = root.children.as_deref().unwrap();
        assert_eq!(left.lazy, 100);
    }

    #[test]
    fn padding_never_takes_an_action() {
        let mut tree = LazySegmentTree::<RangeMaxRangeAdd>::new(&[4, 9, 1]);
        tree.update(0..4, 5);
        tree.update(2..40, 1);

        let (_, right) = tree.root.children.as_deref().unwrap();
        let (_, pad) = right.children.as_deref().unwrap();
        assert_eq!((pad.l, pad.r), (3, 4));
        assert_eq!(pad.value, RangeMaxRangeAdd::agg_unit());
        assert_eq!(pad.lazy, RangeMaxRangeAdd::act_unit());
        assert_eq!(tree.fold(3..4), i64::MIN);
        assert_eq!(tree.fold(..), 14);
        assert_eq!(tree.get(2), 7);
    }

    #[test]
    fn dump_prints_reversed_in_order() {
        let mut tree = LazySegmentTree::<RangeMaxRangeAdd>::new(&[1, 5]);
        assert_eq!(tree.dump().to_string(), "\t5/0\n5/0\n\t1/0\n");

        tree.update(0..2, 3);
        assert_eq!(tree.dump().to_string(), "\t5/0\n5/3\n\t1/0\n");
    }
}
