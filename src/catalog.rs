//! The sample catalog: a fixed, enumerable registry of test cases grouped
//! into suites, exposed to whatever runner drives them.

use crate::case::{CaseReport, Fixture, Outcome, TestCase};
use crate::cases;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("No such test case: {name}")]
    CaseNotFound { name: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Fixture for the timing/flakiness suite. Hooks are no-ops.
#[derive(Debug, Default)]
pub struct BasicTests;

impl Fixture for BasicTests {}

/// Fixture for the arithmetic suite. Hooks are no-ops.
#[derive(Debug, Default)]
pub struct MathTests;

impl Fixture for MathTests {}

/// Instantiation set for the parameterized `IsEven` case.
pub const EVEN_VALUES: [i64; 5] = [2, 4, 6, 8, 10];

/// Type set for the typed cases.
pub const TYPED_TYPES: [&str; 3] = ["i32", "f32", "f64"];

pub struct Catalog {
    cases: Vec<TestCase>,
}

impl Catalog {
    pub fn new() -> Self {
        Self { cases: Vec::new() }
    }

    /// The full sample catalog: 21 instances across five suite labels.
    pub fn sample() -> Self {
        let mut catalog = Self::new();

        catalog.register(TestCase::fixture::<BasicTests>(
            "BasicTests",
            "FastTest",
            Duration::ZERO,
            cases::one_plus_one,
        ));
        catalog.register(TestCase::fixture::<BasicTests>(
            "BasicTests",
            "SlowTest",
            Duration::from_millis(100),
            cases::always_true,
        ));
        catalog.register(TestCase::fixture::<BasicTests>(
            "BasicTests",
            "VerySlowTest",
            Duration::from_millis(500),
            cases::always_true,
        ));
        catalog.register(TestCase::fixture::<BasicTests>(
            "BasicTests",
            "LongRunningTest",
            Duration::from_millis(2000),
            cases::always_true,
        ));
        catalog.register(TestCase::fixture::<BasicTests>(
            "BasicTests",
            "FlakyTest",
            Duration::ZERO,
            cases::flaky,
        ));

        catalog.register(TestCase::fixture::<MathTests>(
            "MathTests",
            "Addition",
            Duration::ZERO,
            cases::addition,
        ));
        catalog.register(TestCase::fixture::<MathTests>(
            "MathTests",
            "Multiplication",
            Duration::from_millis(50),
            cases::multiplication,
        ));
        catalog.register(TestCase::fixture::<MathTests>(
            "MathTests",
            "Division",
            Duration::ZERO,
            cases::division,
        ));

        for value in EVEN_VALUES {
            catalog.register(TestCase::parameterized(
                "EvenNumbers",
                "IsEven",
                value,
                move || cases::even_check(value),
            ));
        }

        catalog.register(TestCase::typed(
            "TypedTest",
            "DefaultConstruction",
            "i32",
            cases::default_construction::<i32>,
        ));
        catalog.register(TestCase::typed(
            "TypedTest",
            "DefaultConstruction",
            "f32",
            cases::default_construction::<f32>,
        ));
        catalog.register(TestCase::typed(
            "TypedTest",
            "DefaultConstruction",
            "f64",
            cases::default_construction::<f64>,
        ));
        catalog.register(TestCase::typed(
            "TypedTest",
            "Assignment",
            "i32",
            cases::assignment::<i32>,
        ));
        catalog.register(TestCase::typed(
            "TypedTest",
            "Assignment",
            "f32",
            cases::assignment::<f32>,
        ));
        catalog.register(TestCase::typed(
            "TypedTest",
            "Assignment",
            "f64",
            cases::assignment::<f64>,
        ));

        catalog.register(TestCase::free(
            "SimpleTests",
            "TrueIsTrue",
            Duration::ZERO,
            cases::always_true,
        ));
        catalog.register(TestCase::free(
            "SimpleTests",
            "FalseIsFalse",
            Duration::from_millis(25),
            cases::false_is_false,
        ));

        catalog
    }

    pub fn register(&mut self, case: TestCase) {
        self.cases.push(case);
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Distinct suite labels in declaration order.
    pub fn suites(&self) -> Vec<&'static str> {
        let mut suites = Vec::new();
        for case in &self.cases {
            if !suites.contains(&case.suite()) {
                suites.push(case.suite());
            }
        }
        suites
    }

    /// All cases registered under a suite label.
    pub fn suite(&self, name: &str) -> Vec<&TestCase> {
        self.cases.iter().filter(|c| c.suite() == name).collect()
    }

    /// Look up one case by its full `Suite.Name` path.
    pub fn find(&self, full_name: &str) -> CatalogResult<&TestCase> {
        self.cases
            .iter()
            .find(|c| c.full_name() == full_name)
            .ok_or_else(|| CatalogError::CaseNotFound {
                name: full_name.to_string(),
            })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Run cases sequentially, logging each outcome, and collect their reports.
/// Scheduling beyond that (sharding, retries) belongs to the caller.
pub fn run_cases<'a>(cases: impl IntoIterator<Item = &'a TestCase>) -> Vec<CaseReport> {
    let mut reports = Vec::new();
    for case in cases {
        let report = case.run();
        match &report.outcome {
            Outcome::Passed => {
                info!("{} passed in {:?}", report.full_name, report.duration);
            }
            Outcome::Failed { message } => {
                error!("{} failed: {}", report.full_name, message);
            }
        }
        reports.push(report);
    }
    reports
}
