use approx::assert_relative_eq;
use quickcheck::{QuickCheck, TestResult};

use super::{Error, Event, solve, solve_unobserved};
use crate::{Action, Config, Status};

fn square_minus_two(x: f64) -> f64 {
    x * x - 2.0
}

fn two_x(x: f64) -> f64 {
    2.0 * x
}

#[test]
fn finds_square_root_of_two() {
    let solution = solve_unobserved(&square_minus_two, &two_x, 1.0, &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-9);
    assert!(solution.step < 1e-6);
    assert!(solution.residual.abs() < 1e-9);
    assert!(solution.iters <= 6);
}

#[test]
fn converges_from_the_left_seed() {
    let solution = solve_unobserved(&square_minus_two, &two_x, -3.0, &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, -(2.0_f64.sqrt()), epsilon = 1e-9);
}

#[test]
fn flat_seed_fails_before_iterating() {
    let mut calls = 0;
    let result = solve(
        &|_: f64| 5.0,
        &|_: f64| 0.0,
        1.0,
        &Config::default(),
        |_: &Event| {
            calls += 1;
            None
        },
    );

    let error = result.expect_err("constant has no root");
    assert_eq!(error, Error::DerivativeZero { x: 1.0, iter: 0 });
    assert!(error.is_flat_seed());
    assert_eq!(calls, 0);
}

#[test]
fn zero_derivative_during_iteration() {
    // From x0 = 1 the first step lands exactly on 0, where f'(x) = 2x vanishes.
    let error = solve_unobserved(
        &|x: f64| x * x + 1.0,
        &two_x,
        1.0,
        &Config::default(),
    )
    .expect_err("x^2 + 1 has no real root");

    assert_eq!(error, Error::DerivativeZero { x: 0.0, iter: 1 });
    assert!(!error.is_flat_seed());
}

#[test]
fn no_real_root_exhausts_iterations() {
    // Every step of Newton on x^2 + 1 has length (x^2 + 1) / 2|x| >= 1.
    let config = Config::new(1e-6, 50).expect("valid config");
    let solution = solve_unobserved(&|x: f64| x * x + 1.0, &two_x, 0.5, &config)
        .expect("iterates stay finite");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 50);
    assert!(solution.step >= 1.0);
}

#[test]
fn rejects_non_finite_seed() {
    for x0 in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let result = solve_unobserved(&square_minus_two, &two_x, x0, &Config::default());
        assert!(matches!(result, Err(Error::NonFiniteSeed { .. })));
    }
}

#[test]
fn non_finite_function_value() {
    let error = solve_unobserved(
        &|x: f64| x.ln() - 1.0,
        &|x: f64| 1.0 / x,
        -1.0,
        &Config::default(),
    )
    .expect_err("log of a negative number is NaN");

    assert!(matches!(error, Error::NonFiniteValue { x, .. } if x == -1.0));
}

#[test]
fn observer_sees_every_iteration() {
    let mut events = Vec::new();
    let solution = solve(
        &square_minus_two,
        &two_x,
        1.0,
        &Config::default(),
        |event: &Event| {
            events.push(*event);
            None
        },
    )
    .expect("should converge");

    assert_eq!(events.len(), solution.iters);
    assert_relative_eq!(events[0].x, 1.0);
    assert_relative_eq!(events[0].fx, -1.0);
    assert_relative_eq!(events[0].dfx, 2.0);
    assert_relative_eq!(events[0].next, 1.5);
    assert_relative_eq!(events[0].step, 0.5);
    for pair in events.windows(2) {
        assert_eq!(pair[0].next, pair[1].x);
    }
}

#[test]
fn observer_can_stop_early() {
    let solution = solve(
        &square_minus_two,
        &two_x,
        1.0,
        &Config::default(),
        |event: &Event| (event.iter == 2).then_some(Action::StopEarly),
    )
    .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    // 1 -> 1.5 -> 17/12
    assert_relative_eq!(solution.x, 17.0 / 12.0);
}

#[test]
fn converged_step_is_below_tolerance() {
    fn prop(raw: u16, tolerance_exp: u8) -> TestResult {
        let target = 0.01 + f64::from(raw) * 0.15;
        let tolerance = 10f64.powi(-i32::from(tolerance_exp % 7) - 6);
        let config = Config::new(tolerance, 100).expect("valid config");
        let f = |x: f64| x * x - target;
        let df = |x: f64| 2.0 * x;

        let Ok(solution) = solve_unobserved(&f, &df, target.max(1.0), &config) else {
            return TestResult::failed();
        };
        TestResult::from_bool(
            solution.status == Status::Converged
                && solution.step < tolerance
                && (solution.x - target.sqrt()).abs() <= 1e-6 * target.sqrt().max(1.0),
        )
    }
    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(u16, u8) -> TestResult);
}

#[test]
fn identical_calls_are_bit_identical() {
    fn prop(x0: f64) -> TestResult {
        if !x0.is_finite() {
            return TestResult::discard();
        }
        let f = |x: f64| x * x * x - 2.0 * x + 2.0;
        let df = |x: f64| 3.0 * x * x - 2.0;
        let config = Config::default();
        let a = solve_unobserved(&f, &df, x0, &config);
        let b = solve_unobserved(&f, &df, x0, &config);
        let same = match (a, b) {
            (Ok(a), Ok(b)) => {
                a.status == b.status
                    && a.x.to_bits() == b.x.to_bits()
                    && a.residual.to_bits() == b.residual.to_bits()
                    && a.iters == b.iters
            }
            (Err(a), Err(b)) => format!("{a:?}") == format!("{b:?}"),
            _ => false,
        };
        TestResult::from_bool(same)
    }
    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(f64) -> TestResult);
}
