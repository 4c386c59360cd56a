//! Periodic compound interest.

/// Final balance of `principal` compounded `frequency` times a year at annual
/// `rate` for `years`: `principal * (1 + rate / frequency)^(frequency * years)`.
///
/// Pure floating-point arithmetic with no input checks. A zero `frequency`
/// raises to the power zero and so returns `principal` unchanged.
///
/// # Examples
///
/// ```
/// use guardian_yield::calculate_compound_yield;
/// let balance = calculate_compound_yield(1000.0, 0.12, 1, 1.0);
/// assert!((balance - 1120.0).abs() < 1e-9);
/// ```
pub fn calculate_compound_yield(principal: f64, rate: f64, frequency: u32, years: f64) -> f64 {
    let n = f64::from(frequency);
    principal * (1.0 + rate / n).powf(n * years)
}
