//! Continuation-passing combinators for callback-style APIs.
//!
//! When a step reports its result through a callback instead of returning a
//! future, use [`Outcome::map_with`], [`Outcome::bind_with`] and
//! [`Outcome::ensure_with`]. Each returns a [`Deferred`]: nothing happens until
//! [`Deferred::run`] is given the final continuation.
//!
//! The combinators schedule nothing. They call exactly one of two paths per
//! run: the supplied function on `Success`, or the final continuation with the
//! untouched error on `Error`. Whatever threading or event loop the supplied
//! function uses is its own business.
//!
//! Continuations are `Send` so they can be resumed from another thread. That
//! puts a `Send` bound on the payloads of the `*_with` combinators; for
//! single-threaded callback APIs or `!Send` payloads such as `Rc`, use the
//! future forms (`map_async` and friends), which carry no such bound.
//!
//! [`Continuation`] is one-shot. `resume` takes `self`, so a continuation
//! cannot fire twice. A continuation dropped without being resumed is
//! reported through `tracing` when that feature is enabled, and surfaces as
//! [`Canceled`] from [`Deferred::into_future`].
//!
//! # Example
//!
//! ```rust
//! use std::sync::mpsc;
//! use upshot::Outcome;
//!
//! let (tx, rx) = mpsc::channel();
//!
//! Outcome::<i32, &str>::success(5)
//!     .map_with(|x, k| {
//!         std::thread::spawn(move || k.resume(x * 2));
//!     })
//!     .run(move |o| tx.send(o).unwrap());
//!
//! assert_eq!(rx.recv().unwrap(), Outcome::Success(10));
//! ```

use std::fmt;

use futures::channel::oneshot;
pub use futures::channel::oneshot::Canceled;

use crate::Outcome;

/// A one-shot callback that resumes a suspended computation with a value.
pub struct Continuation<'a, A> {
    resume: Option<Box<dyn FnOnce(A) + Send + 'a>>,
}

impl<'a, A> Continuation<'a, A> {
    /// Wrap a callback.
    pub fn new<K>(k: K) -> Self
    where
        K: FnOnce(A) + Send + 'a,
    {
        Continuation {
            resume: Some(Box::new(k)),
        }
    }

    /// Resume the computation with `value`, consuming the continuation.
    pub fn resume(mut self, value: A) {
        if let Some(k) = self.resume.take() {
            k(value);
        }
    }

    /// Adapt the input of this continuation, handing over responsibility for
    /// resuming it to the returned one.
    pub(crate) fn map_input<B, G>(mut self, g: G) -> Continuation<'a, B>
    where
        A: 'a,
        B: 'a,
        G: FnOnce(B) -> A + Send + 'a,
    {
        match self.resume.take() {
            Some(k) => Continuation::new(move |b| k(g(b))),
            None => Continuation { resume: None },
        }
    }
}

impl<A> Drop for Continuation<'_, A> {
    fn drop(&mut self) {
        if self.resume.is_some() {
            #[cfg(feature = "tracing")]
            tracing::warn!("continuation dropped without being resumed");
        }
    }
}

impl<A> fmt::Debug for Continuation<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Continuation")
            .field("resumed", &self.resume.is_none())
            .finish()
    }
}

/// A computation waiting for its final continuation.
///
/// Produced by the `*_with` combinators on [`Outcome`].
pub struct Deferred<'a, A> {
    start: Box<dyn FnOnce(Continuation<'a, A>) + Send + 'a>,
}

impl<'a, A> Deferred<'a, A> {
    /// Build a deferred computation from a function that takes the final
    /// continuation.
    pub fn new<S>(start: S) -> Self
    where
        S: FnOnce(Continuation<'a, A>) + Send + 'a,
    {
        Deferred {
            start: Box::new(start),
        }
    }

    /// Start the computation, delivering its result to `g`.
    pub fn run<G>(self, g: G)
    where
        G: FnOnce(A) + Send + 'a,
    {
        self.run_with(Continuation::new(g));
    }

    /// Start the computation with an existing continuation.
    pub fn run_with(self, k: Continuation<'a, A>) {
        (self.start)(k)
    }

    /// Start the computation and wait for its result as a future.
    ///
    /// Resolves to `Err(Canceled)` if the continuation is dropped without
    /// being resumed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use upshot::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let o = Outcome::<i32, &str>::success(2)
    ///     .bind_with(|x, k| k.resume(Outcome::success(x + 1)))
    ///     .into_future()
    ///     .await;
    /// assert_eq!(o, Ok(Outcome::Success(3)));
    /// # });
    /// ```
    pub async fn into_future(self) -> Result<A, Canceled>
    where
        A: Send + 'a,
    {
        let (tx, rx) = oneshot::channel();
        self.run(move |value| {
            // The receiver is only gone if the caller stopped waiting.
            let _ = tx.send(value);
        });
        rx.await
    }
}

impl<A> fmt::Debug for Deferred<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("start", &"<function>")
            .finish()
    }
}

impl<T, E> Outcome<T, E> {
    /// Continuation-passing `map`.
    ///
    /// On `Success(v)`, calls `f(v, k)`; when `f` resumes `k` with `u`, the
    /// final continuation receives `Success(u)`. On `Error(e)`, the final
    /// continuation receives `Error(e)` and `f` is never called.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::mpsc;
    /// use upshot::Outcome;
    ///
    /// let (tx, rx) = mpsc::channel();
    /// Outcome::<i32, &str>::error("boom")
    ///     .map_with(|x, k| k.resume(x * 2))
    ///     .run(move |o| tx.send(o).unwrap());
    ///
    /// assert_eq!(rx.recv().unwrap(), Outcome::Error("boom"));
    /// ```
    pub fn map_with<'a, U, F>(self, f: F) -> Deferred<'a, Outcome<U, E>>
    where
        T: Send + 'a,
        E: Send + 'a,
        U: 'a,
        F: FnOnce(T, Continuation<'a, U>) + Send + 'a,
    {
        Deferred::new(move |k: Continuation<'a, Outcome<U, E>>| match self {
            Outcome::Success(v) => f(v, k.map_input(Outcome::Success)),
            Outcome::Error(e) => k.resume(Outcome::Error(e)),
        })
    }

    /// Continuation-passing `bind`.
    ///
    /// On `Success(v)`, calls `f(v, k)` with the final continuation itself;
    /// `f` decides the outcome. On `Error(e)`, the final continuation receives
    /// `Error(e)` and `f` is never called.
    pub fn bind_with<'a, U, F>(self, f: F) -> Deferred<'a, Outcome<U, E>>
    where
        T: Send + 'a,
        E: Send + 'a,
        U: 'a,
        F: FnOnce(T, Continuation<'a, Outcome<U, E>>) + Send + 'a,
    {
        Deferred::new(move |k: Continuation<'a, Outcome<U, E>>| match self {
            Outcome::Success(v) => f(v, k),
            Outcome::Error(e) => k.resume(Outcome::Error(e)),
        })
    }

    /// Continuation-passing `ensure`: calls `f(self, k)` whatever the variant.
    pub fn ensure_with<'a, U, E2, F>(self, f: F) -> Deferred<'a, Outcome<U, E2>>
    where
        T: Send + 'a,
        E: Send + 'a,
        U: 'a,
        E2: 'a,
        F: FnOnce(Self, Continuation<'a, Outcome<U, E2>>) + Send + 'a,
    {
        Deferred::new(move |k: Continuation<'a, Outcome<U, E2>>| f(self, k))
    }
}
