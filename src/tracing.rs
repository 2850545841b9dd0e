//! Tracing support for outcomes.
//!
//! Feature-gated behind `#[cfg(feature = "tracing")]`. The combinators never
//! log on their own; call [`Outcome::traced`] where a chain should leave a
//! record.

use std::fmt::Debug;

use crate::Outcome;

impl<T, E> Outcome<T, E>
where
    T: Debug,
    E: Debug,
{
    /// Record this outcome as a tracing event and return it unchanged.
    ///
    /// `Success` is logged at `DEBUG`, `Error` at `WARN`, both with the
    /// operation name as a field.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use upshot::Outcome;
    ///
    /// let total = load_order(id)
    ///     .traced("load_order")
    ///     .map(|order| order.total());
    /// ```
    pub fn traced(self, operation: &str) -> Self {
        match &self {
            Outcome::Success(value) => {
                tracing::debug!(operation, ?value, "operation succeeded");
            }
            Outcome::Error(error) => {
                tracing::warn!(operation, ?error, "operation failed");
            }
        }
        self
    }
}
