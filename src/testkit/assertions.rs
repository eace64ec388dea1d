//! Assertion macros for scoring tests.
//!
//! - [`crate::assert_result_ok!`] - Assert Result is Ok and extract value
//! - [`crate::assert_result_err!`] - Assert Result is Err and extract error
//! - [`crate::assert_contains_error!`] - Assert error message contains pattern
//! - [`crate::assert_score_in_range!`] - Assert a score lies within `[floor, 1.0]`
//!
//! # Example
//!
//! ```rust,ignore
//! use commscore::{assert_result_ok, assert_score_in_range};
//!
//! let aggregator = assert_result_ok!(Aggregator::new(collaborators, config));
//! let result = aggregator.analyze("Hello there.");
//! assert_score_in_range!(result.scores.overall);
//! ```

/// Assert that a Result is Ok and extract the value.
#[macro_export]
macro_rules! assert_result_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!(
                "Expected Ok, got Err: {:?}\n  at {}:{}:{}",
                e,
                file!(),
                line!(),
                column!()
            ),
        }
    };
    ($result:expr, $($msg:tt)+) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!(
                "{}: Expected Ok, got Err: {:?}\n  at {}:{}:{}",
                format!($($msg)+),
                e,
                file!(),
                line!(),
                column!()
            ),
        }
    };
}

/// Assert that a Result is Err and extract the error.
#[macro_export]
macro_rules! assert_result_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!(
                "Expected Err, got Ok: {:?}\n  at {}:{}:{}",
                value,
                file!(),
                line!(),
                column!()
            ),
            Err(e) => e,
        }
    };
}

/// Assert that an error message contains a specific pattern.
#[macro_export]
macro_rules! assert_contains_error {
    ($result:expr, $pattern:expr) => {{
        let err = $crate::assert_result_err!($result);
        let err_str = err.to_string();
        assert!(
            err_str.contains($pattern),
            "Error '{}' does not contain '{}'\n  at {}:{}:{}",
            err_str,
            $pattern,
            file!(),
            line!(),
            column!()
        );
        err
    }};
}

/// Assert that a score lies in `[floor, 1.0]` (floor defaults to 0.1).
#[macro_export]
macro_rules! assert_score_in_range {
    ($score:expr) => {
        $crate::assert_score_in_range!($score, 0.1)
    };
    ($score:expr, $floor:expr) => {{
        let score: f64 = $score;
        assert!(
            score >= $floor && score <= 1.0,
            "Score {} outside [{}, 1.0]\n  at {}:{}:{}",
            score,
            $floor,
            file!(),
            line!(),
            column!()
        );
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_assert_result_ok_extracts_value() {
        let result: Result<i32, String> = Ok(42);
        assert_eq!(assert_result_ok!(result), 42);
    }

    #[test]
    fn test_assert_contains_error() {
        let result: Result<i32, String> = Err("no transcriber configured".to_string());
        let err = assert_contains_error!(result, "transcriber");
        assert!(err.starts_with("no"));
    }

    #[test]
    fn test_score_in_range() {
        assert_score_in_range!(0.1);
        assert_score_in_range!(1.0);
        assert_score_in_range!(0.0, 0.0);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_score_out_of_range_panics() {
        assert_score_in_range!(0.05);
    }
}
