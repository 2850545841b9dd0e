//! Traverse and sequence utilities for collections of outcomes
//!
//! - **`sequence`**: `Vec<Outcome<T, E>>` → `Outcome<Vec<T>, E>`
//! - **`traverse`**: map a fallible function over a collection and sequence the results
//! - **`sequence_async`**: the same for futures that resolve to outcomes
//!
//! All three short-circuit: the first error (in input order) is the result.
//!
//! # Examples
//!
//! ```
//! use upshot::{Outcome, traverse::traverse};
//!
//! fn parse_number(s: &str) -> Outcome<i32, String> {
//!     s.parse()
//!         .map(Outcome::success)
//!         .unwrap_or_else(|_| Outcome::error(format!("Invalid number: {}", s)))
//! }
//!
//! let result = traverse(vec!["1", "2", "3"], parse_number);
//! assert_eq!(result, Outcome::Success(vec![1, 2, 3]));
//!
//! let result = traverse(vec!["1", "x", "y"], parse_number);
//! assert_eq!(result, Outcome::Error("Invalid number: x".to_string()));
//! ```

use std::future::Future;

use crate::Outcome;

/// Traverse a collection with a fallible function.
///
/// Applies `f` to each element in order. `f` is not called again after the
/// first error.
pub fn traverse<A, T, E, F, I>(iter: I, f: F) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Outcome<T, E>,
{
    iter.into_iter().map(f).collect()
}

/// Sequence a collection of outcomes.
///
/// # Examples
///
/// ```
/// use upshot::{Outcome, traverse::sequence};
///
/// let all = sequence(vec![Outcome::<_, &str>::success(1), Outcome::success(2)]);
/// assert_eq!(all, Outcome::Success(vec![1, 2]));
///
/// let first = sequence(vec![Outcome::success(1), Outcome::error("a"), Outcome::error("b")]);
/// assert_eq!(first, Outcome::Error("a"));
/// ```
pub fn sequence<T, E, I>(iter: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    iter.into_iter().collect()
}

/// Await a collection of futures that resolve to outcomes.
///
/// The futures are polled concurrently within the calling task; nothing is
/// spawned. Every future runs to completion. The result is the first error in
/// input order, or all success values in input order.
///
/// # Examples
///
/// ```
/// use upshot::{Outcome, traverse::sequence_async};
///
/// async fn lookup(id: u32) -> Outcome<u32, String> {
///     if id < 10 {
///         Outcome::success(id * 100)
///     } else {
///         Outcome::error(format!("unknown id {}", id))
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let found = sequence_async(vec![1, 2].into_iter().map(lookup)).await;
/// assert_eq!(found, Outcome::Success(vec![100, 200]));
///
/// let missing = sequence_async(vec![1, 42].into_iter().map(lookup)).await;
/// assert_eq!(missing, Outcome::Error("unknown id 42".to_string()));
/// # });
/// ```
pub async fn sequence_async<T, E, Fut, I>(iter: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Outcome<T, E>>,
{
    let results: Vec<Outcome<T, E>> = futures::future::join_all(iter).await;
    sequence(results)
}
