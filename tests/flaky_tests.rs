//! The flakiness contract: one uniform draw in [1, 10] per invocation, a
//! failure on 1, and a 10% long-run failure rate.

use flakebench::cases::{flaky, flaky_check, flaky_draw};
use flakebench::{Catalog, Outcome};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn forced_draw_of_one_reports_the_diagnostic() {
    let failure = flaky_check(1).unwrap_err();
    assert!(failure.message.contains("Simulated flaky test failure"));
    assert!(failure.message.contains('1'));
    assert_eq!(
        failure.message,
        "Simulated flaky test failure (random value: 1)"
    );
}

#[test]
fn every_other_draw_passes() {
    for draw in 2..=10 {
        assert!(flaky_check(draw).is_ok(), "draw {draw} should pass");
    }
}

#[test]
fn draws_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1_000 {
        let draw = flaky_draw(&mut rng);
        assert!((1..=10).contains(&draw), "draw {draw} out of range");
    }
}

#[test]
fn failure_rate_is_ten_percent_over_large_sample() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let trials = 100_000;
    let failures = (0..trials)
        .filter(|_| flaky_check(flaky_draw(&mut rng)).is_err())
        .count();

    let rate = failures as f64 / trials as f64;
    assert!(
        (0.08..=0.12).contains(&rate),
        "failure rate {rate} outside [0.08, 0.12]"
    );
}

// Independent thread-local sources: over a large sample the case can neither
// always pass nor always fail.
#[test]
fn never_all_pass_or_all_fail() {
    let trials = 5_000;
    let failures = (0..trials).filter(|_| flaky().is_err()).count();
    assert!(failures > 0, "no failures in {trials} trials");
    assert!(failures < trials, "every trial failed");
}

#[test]
fn catalog_flaky_case_failures_carry_the_diagnostic() {
    let catalog = Catalog::sample();
    let case = catalog.find("BasicTests.FlakyTest").unwrap();

    let mut saw_pass = false;
    let mut saw_failure = false;
    for _ in 0..2_000 {
        match case.run().outcome {
            Outcome::Passed => saw_pass = true,
            Outcome::Failed { message } => {
                assert_eq!(message, "Simulated flaky test failure (random value: 1)");
                saw_failure = true;
            }
        }
        if saw_pass && saw_failure {
            break;
        }
    }
    assert!(saw_pass, "flaky case never passed");
    assert!(saw_failure, "flaky case never failed");
}
