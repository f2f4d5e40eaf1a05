//! The sample invocations printed by `samplecalc demo`.

use serde::Serialize;

use crate::arith;
use crate::config::DemoConfig;
use crate::diagnostics::ParseError;
use crate::strings;
use crate::validate;

pub const TITLE: &str = "🔢 Sample Calculator";

/// Results of every sample invocation, in the shape `--format json` prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoReport {
    pub add: i64,
    pub subtract: i64,
    pub multiply: i64,
    pub divide: f64,
    pub join: String,
    pub reverse: String,
    pub sqrt: f64,
    pub power: f64,
    pub email_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fibonacci: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prime: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<i64>,
}

impl DemoReport {
    pub fn build(config: &DemoConfig) -> Result<Self, ParseError> {
        let sum = config.sum.as_deref().map(arith::parse_and_sum).transpose()?;

        Ok(Self {
            add: arith::add(config.a, config.b),
            subtract: arith::subtract(config.a, config.b),
            multiply: arith::multiply(config.a, config.b),
            divide: arith::divide(config.a as f64, config.b as f64),
            join: strings::join_strings(&config.words, &config.separator),
            reverse: strings::reverse_string(&config.reverse),
            sqrt: arith::sqrt(config.sqrt),
            power: arith::power(config.base, config.exponent),
            email_valid: validate::is_valid_email(&config.email),
            fibonacci: config.fibonacci.map(arith::fibonacci),
            prime: config.prime.map(arith::is_prime),
            sum,
        })
    }
}

/// Lines of the text demo, without trailing newlines.
pub fn report_lines(config: &DemoConfig) -> Result<Vec<String>, ParseError> {
    let report = DemoReport::build(config)?;
    let (a, b) = (config.a, config.b);

    let mut lines = vec![
        TITLE.to_string(),
        "=".repeat(TITLE.chars().count()),
        format!("Add({a}, {b}) = {}", report.add),
        format!("Subtract({a}, {b}) = {}", report.subtract),
        format!("Multiply({a}, {b}) = {}", report.multiply),
        format!("Divide({a}, {b}) = {:.2}", report.divide),
        format!("JoinStrings([{}]) = {:?}", config.words.join(" "), report.join),
        format!("ReverseString({:?}) = {:?}", config.reverse, report.reverse),
        format!("Sqrt({:.1}) = {:.2}", config.sqrt, report.sqrt),
        format!("Power({}, {}) = {:.0}", config.base, config.exponent, report.power),
        format!("IsValidEmail({:?}) = {}", config.email, report.email_valid),
    ];

    if let (Some(n), Some(fib)) = (config.fibonacci, report.fibonacci) {
        lines.push(format!("Fibonacci({n}) = {fib}"));
    }
    if let (Some(n), Some(prime)) = (config.prime, report.prime) {
        lines.push(format!("IsPrime({n}) = {prime}"));
    }
    if let (Some(input), Some(sum)) = (&config.sum, report.sum) {
        lines.push(format!("ParseAndSum({input:?}) = {sum}"));
    }

    Ok(lines)
}
