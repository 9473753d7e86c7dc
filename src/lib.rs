//! A sample test-case catalog with simulated timing and flakiness.
//!
//! The catalog declares four suites (basic fixture tests, math fixture
//! tests, a parameterized suite, a typed suite) plus two ungrouped cases,
//! 21 concrete instances in all. Every case is deterministic except
//! `BasicTests.FlakyTest`, which fails 10% of the time by design, for
//! exercising flaky-test detection tooling.

pub mod case;
pub mod cases;
pub mod catalog;

pub use case::{
    AssertionFailure, CaseInfo, CaseKind, CaseReport, CaseResult, Fixture, Outcome, TestCase,
};
pub use catalog::{
    run_cases, BasicTests, Catalog, CatalogError, CatalogResult, MathTests, EVEN_VALUES,
    TYPED_TYPES,
};
