//! `?` operator support for [`Outcome`], behind the `try_trait` feature.
//!
//! Requires a nightly compiler. `?` on an `Error` returns early, converting
//! the error with `From`. It also mixes with `std::result::Result` in both
//! directions.

use std::convert::Infallible;
use std::ops::{ControlFlow, FromResidual, Try};

use crate::Outcome;

impl<T, E> Try for Outcome<T, E> {
    type Output = T;
    type Residual = Outcome<Infallible, E>;

    #[inline]
    fn from_output(output: T) -> Self {
        Outcome::Success(output)
    }

    #[inline]
    fn branch(self) -> ControlFlow<Self::Residual, T> {
        match self {
            Outcome::Success(v) => ControlFlow::Continue(v),
            Outcome::Error(e) => ControlFlow::Break(Outcome::Error(e)),
        }
    }
}

impl<T, E, E2> FromResidual<Outcome<Infallible, E>> for Outcome<T, E2>
where
    E2: From<E>,
{
    #[inline]
    fn from_residual(residual: Outcome<Infallible, E>) -> Self {
        match residual {
            Outcome::Error(e) => Outcome::Error(From::from(e)),
            Outcome::Success(never) => match never {},
        }
    }
}

impl<T, E, E2> FromResidual<Result<Infallible, E>> for Outcome<T, E2>
where
    E2: From<E>,
{
    #[inline]
    fn from_residual(residual: Result<Infallible, E>) -> Self {
        match residual {
            Err(e) => Outcome::Error(From::from(e)),
            Ok(never) => match never {},
        }
    }
}

impl<T, E, E2> FromResidual<Outcome<Infallible, E>> for Result<T, E2>
where
    E2: From<E>,
{
    #[inline]
    fn from_residual(residual: Outcome<Infallible, E>) -> Self {
        match residual {
            Outcome::Error(e) => Err(From::from(e)),
            Outcome::Success(never) => match never {},
        }
    }
}
