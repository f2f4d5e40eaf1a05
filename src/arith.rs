//! Integer and floating-point helpers.
//!
//! Integer operations wrap on overflow instead of panicking, so every function
//! here except [`parse_and_sum`] is total.

use crate::diagnostics::ParseError;
use crate::span::Span;

/// Sum of two integers.
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Difference of two integers.
pub fn subtract(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

/// Product of two integers.
pub fn multiply(a: i64, b: i64) -> i64 {
    a.wrapping_mul(b)
}

/// Quotient of two floats. Returns `0.0` when the divisor is zero, so a zero
/// result does not tell a caller whether the divisor was zero.
pub fn divide(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return 0.0;
    }
    a / b
}

/// Principal square root. Negative input yields NaN.
pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

/// `base` raised to `exponent`, with `f64::powf` semantics.
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// The nth Fibonacci number, computed with the naive double recursion.
///
/// Runs in exponential time. Any `n <= 1`, negative values included, is
/// returned unchanged.
pub fn fibonacci(n: i64) -> i64 {
    if n <= 1 {
        return n;
    }
    fibonacci(n - 1).wrapping_add(fibonacci(n - 2))
}

/// Trial division up to `floor(sqrt(n))`.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2;
    // i <= n / i is i * i <= n without the overflow
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Parse comma-separated integers and return their sum.
///
/// Each segment is trimmed before parsing. Parsing stops at the first segment
/// that is not an integer; an empty segment (including the one produced by an
/// empty input) counts as not an integer.
pub fn parse_and_sum(input: &str) -> Result<i64, ParseError> {
    let mut sum: i64 = 0;
    let mut offset = 0;
    for part in input.split(',') {
        let span = Span::new(offset, offset + part.len());
        offset = span.end + 1;

        match part.trim().parse::<i64>() {
            Ok(num) => sum = sum.wrapping_add(num),
            Err(e) => {
                tracing::debug!(segment = part, start = span.start, error = %e, "rejected segment");
                return Err(ParseError::new(part, span));
            }
        }
    }
    Ok(sum)
}
