use crate::seq::{Cursor, ExhaustedError, Sequence};

/// An integer type that a [`Range`] can step through.
pub trait RangeStep: Copy + PartialOrd {
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    /// Adds `step`, returning [`None`] on overflow.
    fn step_up(self, step: Self) -> Option<Self>;

    /// Subtracts `step`, returning [`None`] on overflow.
    fn step_down(self, step: Self) -> Option<Self>;
}

macro_rules! impl_range_step {
    ($($ty:ty),*) => {
        $(impl RangeStep for $ty {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$ty>::MAX;

            fn step_up(self, step: Self) -> Option<Self> {
                self.checked_add(step)
            }

            fn step_down(self, step: Self) -> Option<Self> {
                self.checked_sub(step)
            }
        })*
    };
}

impl_range_step!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Every value from zero up to, but excluding, `T::MAX`.
pub const fn range_of<T: RangeStep>() -> Range<T> {
    range_step(T::ZERO, T::MAX, T::ONE)
}

/// Every value between zero and `to`, excluding `to`. Counts down if `to` is negative.
pub const fn range_to<T: RangeStep>(to: T) -> Range<T> {
    range_step(T::ZERO, to, T::ONE)
}

/// Every value between `from` and `to`, including `from` but excluding `to`. Counts down if `to`
/// is less than `from`.
pub const fn range<T: RangeStep>(from: T, to: T) -> Range<T> {
    range_step(from, to, T::ONE)
}

/// Every `step`th value between `from` and `to`, including `from` but excluding `to`.
///
/// `step` is a magnitude, the direction is always from `from` towards `to`. A zero step repeats
/// `from` forever (unless the range is empty). Iteration stops early rather than overflowing.
pub const fn range_step<T: RangeStep>(from: T, to: T, step: T) -> Range<T> {
    Range {
        from,
        to,
        step,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<T> {
    pub from: T,
    pub to: T,
    pub step: T,
}

impl<T: RangeStep> Sequence for Range<T> {
    type Item = T;

    type Cursor = RangeCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        RangeCursor {
            current: Some(self.from),
            to: self.to,
            step: self.step,
            descending: self.to < self.from,
        }
    }
}

pub struct RangeCursor<T> {
    pub(crate) current: Option<T>,
    pub(crate) to: T,
    pub(crate) step: T,
    pub(crate) descending: bool,
}

impl<T: RangeStep> RangeCursor<T> {
    fn in_range(&self, value: T) -> bool {
        if self.descending {
            self.to < value
        } else {
            value < self.to
        }
    }
}

impl<T: RangeStep> Cursor for RangeCursor<T> {
    type Item = T;

    fn has_more(&mut self) -> bool {
        self.current.is_some_and(|current| self.in_range(current))
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        match self.current {
            Some(current) if self.in_range(current) => {
                self.current = if self.descending {
                    current.step_down(self.step)
                } else {
                    current.step_up(self.step)
                };
                Ok(current)
            },
            _ => Err(ExhaustedError),
        }
    }
}
