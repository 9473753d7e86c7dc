//! The catalog exercised through the native test runner: one test per
//! declared case, grouped into modules named after the suites.

use flakebench::{Catalog, Outcome};

fn run_case(full_name: &str) -> Outcome {
    let catalog = Catalog::sample();
    let case = catalog
        .find(full_name)
        .unwrap_or_else(|e| panic!("{e}"));
    case.run().outcome
}

fn assert_passes(full_name: &str) {
    match run_case(full_name) {
        Outcome::Passed => {}
        Outcome::Failed { message } => panic!("{full_name} failed: {message}"),
    }
}

mod basic_tests {
    use super::*;

    #[test]
    fn fast_test() {
        assert_passes("BasicTests.FastTest");
    }

    #[test]
    fn slow_test() {
        assert_passes("BasicTests.SlowTest");
    }

    #[test]
    fn very_slow_test() {
        assert_passes("BasicTests.VerySlowTest");
    }

    #[test]
    fn long_running_test() {
        assert_passes("BasicTests.LongRunningTest");
    }

    /// Intentionally non-deterministic: a draw of 1 (10% of runs) fails with
    /// the simulated-flakiness diagnostic. This asserts the contract either
    /// way rather than re-rolling the dice against CI.
    #[test]
    fn flaky_test_honors_its_contract() {
        match run_case("BasicTests.FlakyTest") {
            Outcome::Passed => {}
            Outcome::Failed { message } => {
                assert_eq!(message, "Simulated flaky test failure (random value: 1)");
            }
        }
    }
}

mod math_tests {
    use super::*;

    #[test]
    fn addition() {
        assert_passes("MathTests.Addition");
    }

    #[test]
    fn multiplication() {
        assert_passes("MathTests.Multiplication");
    }

    #[test]
    fn division() {
        assert_passes("MathTests.Division");
    }
}

mod even_numbers {
    use super::*;

    #[test]
    fn is_even_2() {
        assert_passes("EvenNumbers.IsEven/2");
    }

    #[test]
    fn is_even_4() {
        assert_passes("EvenNumbers.IsEven/4");
    }

    #[test]
    fn is_even_6() {
        assert_passes("EvenNumbers.IsEven/6");
    }

    #[test]
    fn is_even_8() {
        assert_passes("EvenNumbers.IsEven/8");
    }

    #[test]
    fn is_even_10() {
        assert_passes("EvenNumbers.IsEven/10");
    }
}

mod typed_test {
    use super::*;

    #[test]
    fn default_construction_i32() {
        assert_passes("TypedTest.DefaultConstruction/i32");
    }

    #[test]
    fn default_construction_f32() {
        assert_passes("TypedTest.DefaultConstruction/f32");
    }

    #[test]
    fn default_construction_f64() {
        assert_passes("TypedTest.DefaultConstruction/f64");
    }

    #[test]
    fn assignment_i32() {
        assert_passes("TypedTest.Assignment/i32");
    }

    #[test]
    fn assignment_f32() {
        assert_passes("TypedTest.Assignment/f32");
    }

    #[test]
    fn assignment_f64() {
        assert_passes("TypedTest.Assignment/f64");
    }
}

mod simple_tests {
    use super::*;

    #[test]
    fn true_is_true() {
        assert_passes("SimpleTests.TrueIsTrue");
    }

    #[test]
    fn false_is_false() {
        assert_passes("SimpleTests.FalseIsFalse");
    }
}
