use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;

/// The one failure kind a case body can signal: an expected condition that
/// did not hold, carrying a diagnostic message for the runner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AssertionFailure {
    pub message: String,
}

impl AssertionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type CaseResult = Result<(), AssertionFailure>;

/// Shared setup/teardown hooks for a fixture suite. Both default to no-ops,
/// and a fresh fixture is constructed for every run of every member case.
pub trait Fixture: Send + Sync {
    fn set_up(&mut self) {}
    fn tear_down(&mut self) {}
}

/// How a case was instantiated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CaseKind {
    /// Member of a fixture suite.
    Fixture,
    /// One instance of a parameterized case, bound to a single value.
    Parameterized { value: i64 },
    /// One instance of a typed case, bound to a single type.
    Typed { type_name: &'static str },
    /// Declared outside any fixture.
    Free,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Passed,
    Failed { message: String },
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

/// The result of one execution of one case.
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub full_name: String,
    pub outcome: Outcome,
    /// Measured wall-clock time, artificial delay included.
    pub duration: Duration,
    pub finished_at: DateTime<Utc>,
}

/// Serializable description of a case, without its body.
#[derive(Debug, Clone, Serialize)]
pub struct CaseInfo {
    pub suite: &'static str,
    pub name: String,
    pub full_name: String,
    #[serde(flatten)]
    pub kind: CaseKind,
    pub delay_ms: u64,
}

type CaseBody = Box<dyn Fn() -> CaseResult + Send + Sync>;
type FixtureCtor = fn() -> Box<dyn Fixture>;

/// A single runnable test case: suite label, name, instantiation kind,
/// artificial delay, and the assertion body.
pub struct TestCase {
    suite: &'static str,
    name: String,
    kind: CaseKind,
    delay: Duration,
    fixture: Option<FixtureCtor>,
    body: CaseBody,
}

impl TestCase {
    /// A case belonging to a fixture suite of type `F`.
    pub fn fixture<F>(
        suite: &'static str,
        name: impl Into<String>,
        delay: Duration,
        body: impl Fn() -> CaseResult + Send + Sync + 'static,
    ) -> Self
    where
        F: Fixture + Default + 'static,
    {
        Self {
            suite,
            name: name.into(),
            kind: CaseKind::Fixture,
            delay,
            fixture: Some(|| Box::new(F::default())),
            body: Box::new(body),
        }
    }

    /// One instance of a parameterized case, named `{name}/{value}` under the
    /// instantiation label.
    pub fn parameterized(
        instantiation: &'static str,
        name: impl Into<String>,
        value: i64,
        body: impl Fn() -> CaseResult + Send + Sync + 'static,
    ) -> Self {
        Self {
            suite: instantiation,
            name: format!("{}/{}", name.into(), value),
            kind: CaseKind::Parameterized { value },
            delay: Duration::ZERO,
            fixture: None,
            body: Box::new(body),
        }
    }

    /// One instance of a typed case, named `{name}/{type_name}`.
    pub fn typed(
        suite: &'static str,
        name: impl Into<String>,
        type_name: &'static str,
        body: impl Fn() -> CaseResult + Send + Sync + 'static,
    ) -> Self {
        Self {
            suite,
            name: format!("{}/{}", name.into(), type_name),
            kind: CaseKind::Typed { type_name },
            delay: Duration::ZERO,
            fixture: None,
            body: Box::new(body),
        }
    }

    /// A case declared outside any fixture.
    pub fn free(
        suite: &'static str,
        name: impl Into<String>,
        delay: Duration,
        body: impl Fn() -> CaseResult + Send + Sync + 'static,
    ) -> Self {
        Self {
            suite,
            name: name.into(),
            kind: CaseKind::Free,
            delay,
            fixture: None,
            body: Box::new(body),
        }
    }

    pub fn suite(&self) -> &'static str {
        self.suite
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &CaseKind {
        &self.kind
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn full_name(&self) -> String {
        format!("{}.{}", self.suite, self.name)
    }

    pub fn info(&self) -> CaseInfo {
        CaseInfo {
            suite: self.suite,
            name: self.name.clone(),
            full_name: self.full_name(),
            kind: self.kind.clone(),
            delay_ms: self.delay.as_millis() as u64,
        }
    }

    /// Execute the case once: construct the fixture (if any), block for the
    /// declared delay, invoke the body, tear down, and report the outcome.
    pub fn run(&self) -> CaseReport {
        let started = Instant::now();

        let mut fixture = self.fixture.map(|ctor| ctor());
        if let Some(f) = fixture.as_mut() {
            f.set_up();
        }

        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        let outcome = match (self.body)() {
            Ok(()) => Outcome::Passed,
            Err(failure) => Outcome::Failed {
                message: failure.message,
            },
        };

        if let Some(f) = fixture.as_mut() {
            f.tear_down();
        }

        CaseReport {
            full_name: self.full_name(),
            outcome,
            duration: started.elapsed(),
            finished_at: Utc::now(),
        }
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("suite", &self.suite)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}
