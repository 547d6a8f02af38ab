/// Returns its argument unchanged.
pub const fn identity<T>(value: T) -> T {
    value
}

/// Returns `g(f(x))`.
pub fn compose<A, B, C>(mut f: impl FnMut(A) -> B, mut g: impl FnMut(B) -> C) -> impl FnMut(A) -> C {
    move |a| g(f(a))
}

/// Lifts a binary `relation` over keys to a relation over pairs of values, by projecting both
/// sides of each pair through `key`.
///
/// # Examples
/// ```
/// # use functional_core::functions::on;
/// let mut same_length = on(|a: usize, b: usize| a == b, |s: &&str| s.len());
/// assert!(same_length(&("abc", "xyz")));
/// assert!(!same_length(&("abc", "xy")));
/// ```
pub fn on<X, F, R>(
    mut relation: impl FnMut(F, F) -> R,
    mut key: impl FnMut(&X) -> F,
) -> impl FnMut(&(X, X)) -> R {
    move |(a, b): &(X, X)| relation(key(a), key(b))
}
