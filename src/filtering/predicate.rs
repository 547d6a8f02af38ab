/// A test over borrowed values of `T`.
///
/// Predicates take `&mut self` so that they can carry state, such as the memo of [`by`](super::by).
/// Implemented for every `FnMut(&T) -> bool`.
pub trait Predicate<T: ?Sized> {
    fn test(&mut self, value: &T) -> bool;
}

impl<T: ?Sized, F: FnMut(&T) -> bool> Predicate<T> for F {
    fn test(&mut self, value: &T) -> bool {
        self(value)
    }
}

/// Combinators available on every [`Predicate`].
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Holds when both predicates hold. `other` isn't evaluated if `self` fails.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Holds when either predicate holds. `other` isn't evaluated if `self` succeeds.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    fn negate(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

#[derive(Debug, Clone, Copy)]
pub struct And<A, B>(A, B);

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for And<A, B> {
    fn test(&mut self, value: &T) -> bool {
        self.0.test(value) && self.1.test(value)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Or<A, B>(A, B);

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for Or<A, B> {
    fn test(&mut self, value: &T) -> bool {
        self.0.test(value) || self.1.test(value)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Not<P>(P);

/// Inverts a predicate.
pub const fn not<P>(predicate: P) -> Not<P> {
    Not(predicate)
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    fn test(&mut self, value: &T) -> bool {
        !self.0.test(value)
    }
}

#[derive(Debug, Clone)]
pub struct All<P>(Vec<P>);

/// Holds when every one of `predicates` holds, evaluating them in order and stopping at the first
/// failure. Holds trivially when there are none.
pub fn all<P>(predicates: impl IntoIterator<Item = P>) -> All<P> {
    All(predicates.into_iter().collect())
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for All<P> {
    fn test(&mut self, value: &T) -> bool {
        self.0.iter_mut().all(|p| p.test(value))
    }
}

#[derive(Debug, Clone)]
pub struct Any<P>(Vec<P>);

/// Holds when at least one of `predicates` holds, evaluating them in order and stopping at the
/// first success. Never holds when there are none.
pub fn any<P>(predicates: impl IntoIterator<Item = P>) -> Any<P> {
    Any(predicates.into_iter().collect())
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Any<P> {
    fn test(&mut self, value: &T) -> bool {
        self.0.iter_mut().any(|p| p.test(value))
    }
}

/// Holds for every present value.
pub fn present<T>() -> impl Predicate<Option<T>> + Copy {
    |value: &Option<T>| value.is_some()
}

/// Holds for the [`Default`] value of a numeric type, its zero.
pub fn zero<T: Default + PartialEq>() -> impl Predicate<T> + Copy {
    |value: &T| *value == T::default()
}
