//! Policies (aggregate monoid + lazy action) for [`LazySegmentTree`].
//!
//! The shipped `i64` policies use two's-complement wrapping arithmetic, so an
//! add that leaves the `i64` range wraps instead of panicking.
//!
//! [`LazySegmentTree`]: crate::LazySegmentTree

/// An aggregate monoid `Agg` together with a lazy action `Act` on it.
///
/// Implementations must satisfy:
/// - `agg_merge(a, agg_unit()) == agg_merge(agg_unit(), a) == a`
/// - `act_apply_agg(a, act_unit(), len) == a`
/// - `act_apply_agg(agg_merge(a, b), f, la + lb)
///    == agg_merge(act_apply_agg(a, f, la), act_apply_agg(b, f, lb))`
pub trait LazyMapMonoid {
    type Agg: Clone;
    type Act: Clone;

    fn agg_unit() -> Self::Agg;
    fn agg_merge(left: &Self::Agg, right: &Self::Agg) -> Self::Agg;

    fn act_unit() -> Self::Act;

    /// Compose `new` after `old`.
    fn act_compose(new: &Self::Act, old: &Self::Act) -> Self::Act;

    /// Apply `act` to an aggregate covering `len` elements.
    fn act_apply_agg(agg: &Self::Agg, act: &Self::Act, len: usize) -> Self::Agg;
}

#[derive(Clone, Copy, Debug)]
pub enum RangeMaxRangeAdd {}

impl LazyMapMonoid for RangeMaxRangeAdd {
    type Agg = i64;
    type Act = i64;

    #[inline(always)]
    fn agg_unit() -> Self::Agg {
        i64::MIN
    }

    #[inline(always)]
    fn agg_merge(left: &Self::Agg, right: &Self::Agg) -> Self::Agg {
        *left.max(right)
    }

    #[inline(always)]
    fn act_unit() -> Self::Act {
        0
    }

    #[inline(always)]
    fn act_compose(new: &Self::Act, old: &Self::Act) -> Self::Act {
        new.wrapping_add(*old)
    }

    #[inline(always)]
    fn act_apply_agg(agg: &Self::Agg, act: &Self::Act, _len: usize) -> Self::Agg {
        agg.wrapping_add(*act)
    }
}

#[derive(Clone, Copy, Debug)]
pub enum RangeMinRangeAdd {}

impl LazyMapMonoid for RangeMinRangeAdd {
    type Agg = i64;
    type Act = i64;

    #[inline(always)]
    fn agg_unit() -> Self::Agg {
        i64::MAX
    }

    #[inline(always)]
    fn agg_merge(left: &Self::Agg, right: &Self::Agg) -> Self::Agg {
        *left.min(right)
    }

    #[inline(always)]
    fn act_unit() -> Self::Act {
        0
    }

    #[inline(always)]
    fn act_compose(new: &Self::Act, old: &Self::Act) -> Self::Act {
        new.wrapping_add(*old)
    }

    #[inline(always)]
    fn act_apply_agg(agg: &Self::Agg, act: &Self::Act, _len: usize) -> Self::Agg {
        agg.wrapping_add(*act)
    }
}

#[derive(Clone, Copy, Debug)]
pub enum RangeSumRangeAdd {}

impl LazyMapMonoid for RangeSumRangeAdd {
    type Agg = i64;
    type Act = i64;

    #[inline(always)]
    fn agg_unit() -> Self::Agg {
        0
    }

    #[inline(always)]
    fn agg_merge(left: &Self::Agg, right: &Self::Agg) -> Self::Agg {
        left.wrapping_add(*right)
    }

    #[inline(always)]
    fn act_unit() -> Self::Act {
        0
    }

    #[inline(always)]
    fn act_compose(new: &Self::Act, old: &Self::Act) -> Self::Act {
        new.wrapping_add(*old)
    }

    #[inline(always)]
    fn act_apply_agg(agg: &Self::Agg, act: &Self::Act, len: usize) -> Self::Agg {
        agg.wrapping_add(act.wrapping_mul(len as i64))
    }
}
