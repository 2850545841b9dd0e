//! # Upshot
//!
//! > *"The upshot is all that's left"*
//!
//! A Rust library providing one container, [`Outcome<T, E>`], for the result
//! of a computation, and the combinators to chain it.
//!
//! ## Philosophy
//!
//! - **Short-circuit** = an `Error` flows past every success-path step untouched
//! - **Settle** = `ensure` sees every outcome, success or error, exactly once
//!
//! Each combinator comes in three shapes:
//!
//! | Sync     | Future          | Continuation  |
//! |----------|-----------------|---------------|
//! | `map`    | `map_async`     | `map_with`    |
//! | `bind`   | `bind_async`    | `bind_with`   |
//! | `ensure` | `ensure_async`  | `ensure_with` |
//!
//! None of them spawns, schedules or blocks. The future forms run when
//! awaited; the continuation forms run when their [`Deferred`] is started.
//!
//! ## Quick Example
//!
//! ```rust
//! use upshot::Outcome;
//!
//! fn positive(x: i32) -> Outcome<i32, &'static str> {
//!     if x > 0 {
//!         Outcome::success(x)
//!     } else {
//!         Outcome::error("negative")
//!     }
//! }
//!
//! let result = Outcome::success(2)
//!     .bind(positive)
//!     .map(|x| x * 10);
//! assert_eq!(result.into_value(), Some(20));
//!
//! let result = Outcome::success(-2)
//!     .bind(positive)
//!     .map(|x| x * 10);
//! assert_eq!(result, Outcome::Error("negative"));
//! ```
//!
//! ## Features
//!
//! - `tracing`: [`Outcome::traced`] and diagnostics for unresumed continuations
//! - `serde`: `Serialize`/`Deserialize` for `Outcome`
//! - `proptest`: `Arbitrary` for `Outcome`
//! - `try_trait`: `?` on `Outcome` (nightly)

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![cfg_attr(feature = "try_trait", feature(try_trait_v2))]

pub mod continuation;
pub mod future;
pub mod outcome;
pub mod testing;
pub mod traverse;

#[cfg(feature = "tracing")]
mod tracing;
#[cfg(feature = "try_trait")]
mod try_impl;

// Re-exports
pub use continuation::{Continuation, Deferred};
pub use future::OutcomeFutureExt;
pub use outcome::Outcome;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::continuation::{Continuation, Deferred};
    pub use crate::future::OutcomeFutureExt;
    pub use crate::outcome::Outcome;
    pub use crate::traverse::{sequence, sequence_async, traverse};
}
