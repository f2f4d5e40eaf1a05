//! Small arithmetic, string, and validation helpers, plus the demo driver
//! that prints sample invocations of each.

pub mod span;
pub mod diagnostics;
pub mod arith;
pub mod strings;
pub mod validate;
pub mod config;
pub mod demo;

pub use arith::{add, divide, fibonacci, is_prime, multiply, parse_and_sum, power, sqrt, subtract};
pub use diagnostics::ParseError;
pub use strings::{join_strings, reverse_string};
pub use validate::is_valid_email;
