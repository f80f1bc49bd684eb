//! Result combinators shared by route handlers and services.
//!
//! `std::result::Result` already provides the sealed two-variant sum type the
//! handler layer builds on, together with `is_ok`/`is_err`, the `unwrap`
//! family, `map`, `map_err`, `and_then`, and `or`. This module adds what std
//! does not have: a canonical alias defaulting the error type to
//! [`AppError`], error-channel normalization for fallible futures, async
//! transforms, and ordered collection helpers.

use crate::domain::error::AppError;

/// Canonical result type for handler and service code.
pub type AppResult<T, E = AppError> = Result<T, E>;

/// Await a fallible future and normalize its error channel into [`AppError`].
///
/// An `AppError` passes through unchanged. Any other error type converts
/// through its `Into<AppError>` impl: issue-list shapes become a 422
/// validation error, unmapped errors become a 500 internal error carrying the
/// source's display form.
pub async fn try_catch<T, E, Fut>(fut: Fut) -> AppResult<T>
where
    E: Into<AppError>,
    Fut: Future<Output = Result<T, E>>,
{
    fut.await.map_err(Into::into)
}

/// Async counterparts of `map` and `and_then`.
///
/// The continuation is awaited only on the success path; errors pass through
/// untouched.
pub trait ResultExt<T, E> {
    /// Apply an async transform to the success value.
    fn map_async<U, Fut>(
        self,
        f: impl FnOnce(T) -> Fut,
    ) -> impl Future<Output = Result<U, E>>
    where
        Fut: Future<Output = U>;

    /// Chain an async fallible continuation, short-circuiting on failure.
    fn and_then_async<U, Fut>(
        self,
        f: impl FnOnce(T) -> Fut,
    ) -> impl Future<Output = Result<U, E>>
    where
        Fut: Future<Output = Result<U, E>>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    async fn map_async<U, Fut>(self, f: impl FnOnce(T) -> Fut) -> Result<U, E>
    where
        Fut: Future<Output = U>,
    {
        match self {
            Ok(value) => Ok(f(value).await),
            Err(error) => Err(error),
        }
    }

    async fn and_then_async<U, Fut>(self, f: impl FnOnce(T) -> Fut) -> Result<U, E>
    where
        Fut: Future<Output = Result<U, E>>,
    {
        match self {
            Ok(value) => f(value).await,
            Err(error) => Err(error),
        }
    }
}

/// Fold an ordered sequence of results into one.
///
/// Returns every success value in order, or the first failure encountered in
/// a left-to-right scan.
pub fn collect<T, E>(results: impl IntoIterator<Item = Result<T, E>>) -> Result<Vec<T>, E> {
    let iter = results.into_iter();
    let mut values = Vec::with_capacity(iter.size_hint().0);
    for result in iter {
        values.push(result?);
    }
    Ok(values)
}

/// Split results into their success and error channels.
///
/// Total: never short-circuits, and each channel preserves the relative order
/// of appearance.
pub fn partition<T, E>(results: impl IntoIterator<Item = Result<T, E>>) -> (Vec<T>, Vec<E>) {
    let mut ok = Vec::new();
    let mut err = Vec::new();
    for result in results {
        match result {
            Ok(value) => ok.push(value),
            Err(error) => err.push(error),
        }
    }
    (ok, err)
}
