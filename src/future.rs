//! Asynchronous combinators built on native futures.
//!
//! `map_async`, `bind_async` and `ensure_async` mirror `map`, `bind` and
//! `ensure` for steps that return a [`Future`]. They do not spawn or schedule
//! anything: the returned future does its work when the caller awaits it, on
//! whatever executor the caller uses. Awaiting it delivers the outcome exactly
//! once, and on the error path the supplied function is never called.
//!
//! [`OutcomeFutureExt`] continues a chain from a future that already yields an
//! [`Outcome`].
//!
//! # Example
//!
//! ```rust
//! use upshot::Outcome;
//! use upshot::future::OutcomeFutureExt;
//!
//! async fn fetch(id: u32) -> Outcome<String, &'static str> {
//!     if id == 0 {
//!         Outcome::error("no such id")
//!     } else {
//!         Outcome::success(format!("user-{}", id))
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let name = Outcome::<u32, &str>::success(7)
//!     .bind_async(fetch)
//!     .map_success(|name| name.to_uppercase())
//!     .await;
//! assert_eq!(name, Outcome::Success("USER-7".to_string()));
//! # });
//! ```

use std::future::Future;

use futures::FutureExt;

use crate::Outcome;

impl<T, E> Outcome<T, E> {
    /// Transform the success value with an asynchronous function.
    ///
    /// On `Success(v)` the future returned by `f(v)` is awaited and its output
    /// wrapped in `Success`. On `Error(e)` the result is `Error(e)` and `f` is
    /// not called.
    ///
    /// # Example
    ///
    /// ```rust
    /// use upshot::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let ok: Outcome<i32, &str> = Outcome::success(5);
    /// assert_eq!(ok.map_async(|x| async move { x * 2 }).await, Outcome::Success(10));
    ///
    /// let err: Outcome<i32, &str> = Outcome::error("boom");
    /// assert_eq!(err.map_async(|x| async move { x * 2 }).await, Outcome::Error("boom"));
    /// # });
    /// ```
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Outcome::Success(v) => Outcome::Success(f(v).await),
            Outcome::Error(e) => Outcome::Error(e),
        }
    }

    /// Chain an asynchronous fallible step on the success value.
    ///
    /// On `Success(v)` the outcome produced by `f(v)` is returned as is. On
    /// `Error(e)` the result is `Error(e)` and `f` is not called.
    ///
    /// # Example
    ///
    /// ```rust
    /// use upshot::Outcome;
    ///
    /// async fn half(x: i32) -> Outcome<i32, &'static str> {
    ///     if x % 2 == 0 { Outcome::success(x / 2) } else { Outcome::error("odd") }
    /// }
    ///
    /// # tokio_test::block_on(async {
    /// assert_eq!(Outcome::success(8).bind_async(half).await, Outcome::Success(4));
    /// assert_eq!(Outcome::success(3).bind_async(half).await, Outcome::Error("odd"));
    /// # });
    /// ```
    pub async fn bind_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        match self {
            Outcome::Success(v) => f(v).await,
            Outcome::Error(e) => Outcome::Error(e),
        }
    }

    /// Run an asynchronous finalizer on this outcome whatever its variant.
    ///
    /// # Example
    ///
    /// ```rust
    /// use upshot::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let err: Outcome<i32, &str> = Outcome::error("boom");
    /// let settled = err
    ///     .ensure_async(|o| async move { Outcome::<bool, ()>::success(o.is_error()) })
    ///     .await;
    /// assert_eq!(settled, Outcome::Success(true));
    /// # });
    /// ```
    pub async fn ensure_async<U, E2, F, Fut>(self, f: F) -> Outcome<U, E2>
    where
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = Outcome<U, E2>>,
    {
        f(self).await
    }
}

/// Extension trait for futures that resolve to an [`Outcome`].
///
/// Implemented for every `Future<Output = Outcome<T, E>>`. You don't need to
/// implement it yourself.
pub trait OutcomeFutureExt<T, E>: Future<Output = Outcome<T, E>> + Sized {
    /// Transform the eventual success value with a synchronous function.
    fn map_success<U, F>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> U;

    /// Chain an asynchronous fallible step after this future resolves.
    fn bind_then<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>;

    /// Run an asynchronous finalizer on the eventual outcome.
    fn ensure_then<U, E2, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U, E2>>
    where
        F: FnOnce(Outcome<T, E>) -> Fut,
        Fut: Future<Output = Outcome<U, E2>>;
}

impl<T, E, Fut0> OutcomeFutureExt<T, E> for Fut0
where
    Fut0: Future<Output = Outcome<T, E>>,
{
    fn map_success<U, F>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> U,
    {
        FutureExt::map(self, move |outcome| outcome.map(f))
    }

    fn bind_then<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        FutureExt::then(self, move |outcome| outcome.bind_async(f))
    }

    fn ensure_then<U, E2, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U, E2>>
    where
        F: FnOnce(Outcome<T, E>) -> Fut,
        Fut: Future<Output = Outcome<U, E2>>,
    {
        FutureExt::then(self, f)
    }
}
