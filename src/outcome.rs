//! The `Outcome` container for the result of a computation.
//!
//! An [`Outcome<T, E>`] is either `Success(T)` or `Error(E)`. Combinators
//! operate on the success side and pass errors through untouched, so a chain
//! of fallible steps reads top to bottom and stops doing work at the first
//! error.
//!
//! # Success-Biased Convention
//!
//! `map` and `bind` only run on `Success`. `ensure` runs on both variants and
//! is where cleanup or finalization belongs.
//!
//! # Examples
//!
//! ```rust
//! use upshot::Outcome;
//!
//! fn parse(s: &str) -> Outcome<i32, String> {
//!     s.parse()
//!         .map(Outcome::success)
//!         .unwrap_or_else(|_| Outcome::error(format!("not a number: {}", s)))
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled.into_value(), Some(42));
//!
//! let failed = parse("abc").map(|n| n * 2);
//! assert_eq!(failed.into_value(), None);
//! ```

/// The result of a computation: a success value or an error.
///
/// Exactly one variant is active. No combinator mutates an outcome in place;
/// each consumes `self` and produces a new one.
///
/// The error type `E` is unconstrained. Any type, including `&str`,
/// `String`, `()` or a domain enum, can serve as the error.
///
/// # Example
///
/// ```rust
/// use upshot::Outcome;
///
/// let ok: Outcome<i32, &str> = Outcome::success(5);
/// let err: Outcome<i32, &str> = Outcome::error("boom");
///
/// match ok {
///     Outcome::Success(n) => println!("got {}", n),
///     Outcome::Error(e) => println!("failed: {}", e),
/// }
///
/// assert_eq!(err.map(|n| n * 2), Outcome::Error("boom"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The computation produced a value
    Success(T),
    /// The computation failed
    Error(E),
}

impl<T, E> Outcome<T, E> {
    // ========== Constructors ==========

    /// Create a successful outcome.
    ///
    /// # Example
    ///
    /// ```rust
    /// use upshot::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::success(42);
    /// assert!(o.is_success());
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Create a failed outcome.
    ///
    /// # Example
    ///
    /// ```rust
    /// use upshot::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::error("boom");
    /// assert!(o.is_error());
    /// ```
    #[inline]
    pub fn error(error: E) -> Self {
        Outcome::Error(error)
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if this is an `Error`.
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    // ========== Accessors ==========

    /// Borrow the success value, if there is one.
    ///
    /// The error value is never exposed here; match on the variant to get it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use upshot::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::success(10);
    /// let err: Outcome<i32, &str> = Outcome::error("boom");
    ///
    /// assert_eq!(ok.value(), Some(&10));
    /// assert_eq!(err.value(), None);
    /// ```
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(v) => Some(v),
            Outcome::Error(_) => None,
        }
    }

    /// Take the success value, if there is one, consuming self.
    ///
    /// # Example
    ///
    /// ```rust
    /// use upshot::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::success(10);
    /// assert_eq!(ok.into_value(), Some(10));
    /// ```
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Success(v) => Some(v),
            Outcome::Error(_) => None,
        }
    }

    /// Convert to `Outcome<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(v) => Outcome::Success(v),
            Outcome::Error(e) => Outcome::Error(e),
        }
    }

    // ========== Combinators ==========

    /// Transform the success value, passing errors through unchanged.
    ///
    /// `f` is not called on the error path.
    ///
    /// # Example
    ///
    /// ```rust
    /// use upshot::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::success(5);
    /// let err: Outcome<i32, &str> = Outcome::error("boom");
    ///
    /// assert_eq!(ok.map(|x| x * 2), Outcome::Success(10));
    /// assert_eq!(err.map(|x| x * 2), Outcome::Error("boom"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(v) => Outcome::Success(f(v)),
            Outcome::Error(e) => Outcome::Error(e),
        }
    }

    /// Chain a fallible step on the success value.
    ///
    /// The outcome returned by `f` is returned as is, without nesting. On the
    /// error path `f` is not called.
    ///
    /// # Example
    ///
    /// ```rust
    /// use upshot::Outcome;
    ///
    /// fn positive(x: i32) -> Outcome<i32, &'static str> {
    ///     if x > 0 { Outcome::success(x) } else { Outcome::error("negative") }
    /// }
    ///
    /// assert_eq!(Outcome::success(5).bind(positive), Outcome::Success(5));
    /// assert_eq!(Outcome::success(-1).bind(positive), Outcome::Error("negative"));
    /// assert_eq!(Outcome::<i32, _>::error("boom").bind(positive), Outcome::Error("boom"));
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(v) => f(v),
            Outcome::Error(e) => Outcome::Error(e),
        }
    }

    /// Run `f` on this outcome whatever its variant.
    ///
    /// This is plain function application, named so that finalization steps
    /// read naturally at the end of a chain. `f` is called exactly once.
    ///
    /// # Example
    ///
    /// ```rust
    /// use upshot::Outcome;
    ///
    /// let settled = Outcome::<i32, &str>::error("boom")
    ///     .map(|x| x + 1)
    ///     .ensure(|o| match o {
    ///         Outcome::Success(v) => Outcome::<_, ()>::success(v),
    ///         Outcome::Error(_) => Outcome::success(0),
    ///     });
    ///
    /// assert_eq!(settled, Outcome::Success(0));
    /// ```
    #[inline]
    pub fn ensure<U, E2, F>(self, f: F) -> Outcome<U, E2>
    where
        F: FnOnce(Self) -> Outcome<U, E2>,
    {
        f(self)
    }

    // ========== Conversions ==========

    /// Convert to a standard `Result` (`Success` becomes `Ok`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use upshot::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(1).into_result(), Ok(1));
    /// assert_eq!(Outcome::<i32, &str>::error("boom").into_result(), Err("boom"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(v) => Ok(v),
            Outcome::Error(e) => Err(e),
        }
    }

    /// Create from a standard `Result` (`Ok` becomes `Success`).
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Outcome::Success(v),
            Err(e) => Outcome::Error(e),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Flatten a nested outcome.
    ///
    /// # Example
    ///
    /// ```rust
    /// use upshot::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::success(Outcome::error("inner"));
    /// assert_eq!(nested.flatten(), Outcome::Error("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.bind(|inner| inner)
    }
}

// ========== Trait Implementations ==========

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_value().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value().into_iter()
    }
}

/// Collect an iterator of outcomes, stopping at the first error.
///
/// ```rust
/// use upshot::Outcome;
///
/// let all: Outcome<Vec<i32>, &str> =
///     vec![Outcome::success(1), Outcome::success(2)].into_iter().collect();
/// assert_eq!(all, Outcome::Success(vec![1, 2]));
///
/// let first_err: Outcome<Vec<i32>, &str> =
///     vec![Outcome::success(1), Outcome::error("a"), Outcome::error("b")].into_iter().collect();
/// assert_eq!(first_err, Outcome::Error("a"));
/// ```
impl<T, E, C> FromIterator<Outcome<T, E>> for Outcome<C, E>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        Outcome::from_result(iter.into_iter().map(Outcome::into_result).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CallCounter;

    #[test]
    fn test_constructors() {
        assert!(Outcome::<i32, &str>::success(1).is_success());
        assert!(Outcome::<i32, &str>::error("e").is_error());
    }

    #[test]
    fn test_value_accessor() {
        let ok: Outcome<i32, &str> = Outcome::success(5);
        let err: Outcome<i32, &str> = Outcome::error("boom");

        assert_eq!(ok.value(), Some(&5));
        assert_eq!(err.value(), None);
        assert_eq!(ok.into_value(), Some(5));
        assert_eq!(err.into_value(), None);
    }

    #[test]
    fn test_map_success() {
        let counter = CallCounter::new();
        let o: Outcome<i32, &str> = Outcome::success(5);

        assert_eq!(o.map(counter.counted(|x: i32| x * 2)), Outcome::Success(10));
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn test_map_error_skips_function() {
        let counter = CallCounter::new();
        let o: Outcome<i32, &str> = Outcome::error("boom");

        let mapped = o.map(counter.counted(|x: i32| x * 2));

        assert_eq!(mapped.into_value(), None);
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_bind() {
        let check = |x: i32| {
            if x > 0 {
                Outcome::success(x)
            } else {
                Outcome::error("negative")
            }
        };

        assert_eq!(Outcome::success(5).bind(check).into_value(), Some(5));
        assert_eq!(Outcome::success(-3).bind(check), Outcome::Error("negative"));
    }

    #[test]
    fn test_bind_error_skips_function() {
        let counter = CallCounter::new();
        let o: Outcome<i32, &str> = Outcome::error("boom");

        let bound = o.bind(counter.counted(|x: i32| Outcome::<i32, &str>::success(x)));

        assert_eq!(bound, Outcome::Error("boom"));
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_bind_then_map_chain() {
        let result = Outcome::<i32, &str>::success(2)
            .bind(|x| Outcome::success(x + 1))
            .map(|x| x * 10);

        assert_eq!(result.into_value(), Some(30));
    }

    #[test]
    fn test_ensure_runs_on_both_variants() {
        let counter = CallCounter::new();

        let ok: Outcome<i32, &str> = Outcome::success(1);
        let settled = ok.ensure(counter.counted(|o: Outcome<i32, &'static str>| o.map(|x| x + 1)));
        assert_eq!(settled, Outcome::Success(2));
        assert_eq!(counter.count(), 1);

        let err: Outcome<i32, &str> = Outcome::error("boom");
        let settled = err.ensure(counter.counted(|o: Outcome<i32, &'static str>| o));
        assert_eq!(settled, Outcome::Error("boom"));
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn test_ensure_sees_error_after_short_circuit() {
        let seen = Outcome::<i32, &str>::error("boom")
            .map(|x| x * 2)
            .bind(|x| Outcome::success(x + 1))
            .ensure(|o| Outcome::<bool, ()>::success(o.is_error()));

        assert_eq!(seen, Outcome::Success(true));
    }

    #[test]
    fn test_result_conversion() {
        let o: Outcome<i32, &str> = Ok(42).into();
        assert_eq!(o, Outcome::Success(42));

        let o: Outcome<i32, &str> = Err("boom").into();
        assert_eq!(o, Outcome::Error("boom"));

        let r: Result<i32, &str> = Outcome::success(7).into();
        assert_eq!(r, Ok(7));
    }

    #[test]
    fn test_flatten() {
        let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::success(Outcome::success(1));
        assert_eq!(nested.flatten(), Outcome::Success(1));

        let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::error("outer");
        assert_eq!(nested.flatten(), Outcome::Error("outer"));
    }

    #[test]
    fn test_into_iter() {
        let ok: Outcome<i32, &str> = Outcome::success(3);
        assert_eq!(ok.into_iter().collect::<Vec<_>>(), vec![3]);

        let err: Outcome<i32, &str> = Outcome::error("boom");
        assert!((&err).into_iter().next().is_none());
    }

    #[test]
    fn test_collect_stops_at_first_error() {
        let counter = CallCounter::new();
        let inputs = vec![1, -1, 2, -2];

        let collected: Outcome<Vec<i32>, i32> = inputs
            .into_iter()
            .map(counter.counted_mut(|x: i32| {
                if x > 0 {
                    Outcome::success(x)
                } else {
                    Outcome::error(x)
                }
            }))
            .collect();

        assert_eq!(collected, Outcome::Error(-1));
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn test_functor_identity() {
        let o: Outcome<i32, &str> = Outcome::success(42);
        assert_eq!(o.map(|v| v), o);

        let o: Outcome<i32, &str> = Outcome::error("boom");
        assert_eq!(o.map(|v| v), o);
    }

    #[test]
    fn test_functor_composition() {
        let f = |v: i32| v + 1;
        let g = |v: i32| v * 2;

        let o: Outcome<i32, ()> = Outcome::success(10);
        assert_eq!(o.map(f).map(g), o.map(|v| g(f(v))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_externally_tagged() {
        let ok: Outcome<i32, String> = Outcome::success(5);
        let json = serde_json::to_string(&ok).unwrap();
        assert_eq!(json, r#"{"Success":5}"#);

        let err: Outcome<i32, String> = serde_json::from_str(r#"{"Error":"boom"}"#).unwrap();
        assert_eq!(err, Outcome::Error("boom".to_string()));
    }
}
