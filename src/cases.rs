//! Assertion bodies for the sample catalog.
//!
//! Every body is a plain function returning [`CaseResult`] so its behavior
//! can be checked directly, outside the catalog and without wall-clock
//! delays.

use crate::case::{AssertionFailure, CaseResult};
use rand::Rng;
use std::fmt::Debug;

pub(crate) fn check(condition: bool, message: impl Into<String>) -> CaseResult {
    if condition {
        Ok(())
    } else {
        Err(AssertionFailure::new(message))
    }
}

fn check_eq<T: PartialEq + Debug>(actual: T, expected: T) -> CaseResult {
    if actual == expected {
        Ok(())
    } else {
        Err(AssertionFailure::new(format!(
            "expected {expected:?}, got {actual:?}"
        )))
    }
}

pub fn one_plus_one() -> CaseResult {
    check_eq(1 + 1, 2)
}

pub fn addition() -> CaseResult {
    check_eq(5 + 3, 8)
}

pub fn multiplication() -> CaseResult {
    check_eq(4 * 3, 12)
}

/// Integer division: 10 / 2 truncates to 5.
pub fn division() -> CaseResult {
    check_eq(10 / 2, 5)
}

pub fn always_true() -> CaseResult {
    check(true, "true was not true")
}

pub fn false_is_false() -> CaseResult {
    check(!false, "false was not false")
}

pub fn is_even(value: i64) -> bool {
    value % 2 == 0
}

/// Body of the parameterized `IsEven` case. Valid for any value, not just
/// the registered instantiation set.
pub fn even_check(value: i64) -> CaseResult {
    check(is_even(value), format!("{value} is not even"))
}

/// One uniform draw in [1, 10].
pub fn flaky_draw(rng: &mut impl Rng) -> u8 {
    rng.gen_range(1..=10)
}

/// Fails on a draw of 1, i.e. 10% of the time given a uniform source. The
/// rate is a hard contract: downstream flaky-test tooling keys off it.
pub fn flaky_check(draw: u8) -> CaseResult {
    if draw == 1 {
        return Err(AssertionFailure::new(format!(
            "Simulated flaky test failure (random value: {draw})"
        )));
    }
    Ok(())
}

/// The catalog's flaky body: a fresh thread-local source per invocation, so
/// concurrent runs stay uncorrelated.
pub fn flaky() -> CaseResult {
    flaky_check(flaky_draw(&mut rand::thread_rng()))
}

/// Two default-constructed values of the bound type compare equal.
pub fn default_construction<T>() -> CaseResult
where
    T: Default + PartialEq + Debug,
{
    check_eq(T::default(), T::default())
}

/// Assigning 42 cast through the bound type round-trips.
pub fn assignment<T>() -> CaseResult
where
    T: Default + From<i8> + PartialEq + Debug,
{
    let mut value = T::default();
    check_eq(&value, &T::default())?;
    value = T::from(42);
    check_eq(value, T::from(42))
}
