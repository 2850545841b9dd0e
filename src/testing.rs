//! Testing utilities for code built on [`Outcome`](crate::Outcome).
//!
//! This module provides a call-counting helper for checking which branch of a
//! combinator ran, assertion macros for outcomes, and property-based testing
//! support behind the `proptest` feature.
//!
//! # Examples
//!
//! ## Counting calls
//!
//! ```rust
//! use upshot::Outcome;
//! use upshot::testing::CallCounter;
//!
//! let counter = CallCounter::new();
//! let o: Outcome<i32, &str> = Outcome::error("boom");
//!
//! let _ = o.map(counter.counted(|x: i32| x * 2));
//! assert_eq!(counter.count(), 0);
//! ```
//!
//! ## Assertion Macros
//!
//! ```rust
//! use upshot::{Outcome, assert_success, assert_error};
//!
//! let ok = Outcome::<_, String>::success(42);
//! assert_success!(ok);
//!
//! let err = Outcome::<i32, _>::error("boom".to_string());
//! assert_error!(err);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared counter of how many times wrapped functions were called.
///
/// Clones share the same count, so a counter can be moved into a callback
/// running on another thread and still be read from the test.
///
/// # Example
///
/// ```rust
/// use upshot::testing::CallCounter;
///
/// let counter = CallCounter::new();
/// let double = counter.counted(|x: i32| x * 2);
///
/// assert_eq!(double(4), 8);
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    calls: Arc<AtomicUsize>,
}

impl CallCounter {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one call.
    pub fn tick(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    /// Number of calls recorded so far.
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Wrap a one-shot function so each call is recorded.
    pub fn counted<A, R, F>(&self, f: F) -> impl FnOnce(A) -> R
    where
        F: FnOnce(A) -> R,
    {
        let counter = self.clone();
        move |a| {
            counter.tick();
            f(a)
        }
    }

    /// Wrap a reusable function so each call is recorded.
    pub fn counted_mut<A, R, F>(&self, mut f: F) -> impl FnMut(A) -> R
    where
        F: FnMut(A) -> R,
    {
        let counter = self.clone();
        move |a| {
            counter.tick();
            f(a)
        }
    }
}

/// Assert that an outcome is a `Success`.
///
/// # Example
///
/// ```rust
/// use upshot::{Outcome, assert_success};
///
/// let o = Outcome::<_, String>::success(42);
/// assert_success!(o);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success(_) => {}
            $crate::Outcome::Error(e) => {
                panic!("Expected Success, got Error: {:?}", e);
            }
        }
    };
}

/// Assert that an outcome is an `Error`.
///
/// # Example
///
/// ```rust
/// use upshot::{Outcome, assert_error};
///
/// let o = Outcome::<i32, _>::error("boom");
/// assert_error!(o);
/// ```
#[macro_export]
macro_rules! assert_error {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Error(_) => {}
            $crate::Outcome::Success(v) => {
                panic!("Expected Error, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that an outcome is an `Error` holding a specific value.
///
/// # Example
///
/// ```rust
/// use upshot::{Outcome, assert_error_eq};
///
/// let o = Outcome::<i32, _>::error("boom");
/// assert_error_eq!(o, "boom");
/// ```
#[macro_export]
macro_rules! assert_error_eq {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Error(e) => {
                assert_eq!(e, $expected);
            }
            $crate::Outcome::Success(v) => {
                panic!("Expected Error {:?}, got Success: {:?}", $expected, v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::Outcome;
#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for Outcome<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(Outcome::success),
            any_with::<E>(e_params).prop_map(Outcome::error),
        ]
        .boxed()
    }
}
