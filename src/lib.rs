//! Calc - stateless integer arithmetic
//!
//! Elementary arithmetic over pairs of 32-bit operands, with products
//! widened to 64 bits so they are exact for every input pair.

/// Error types for arithmetic operations
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("Calc: ERR_DIV_ZERO: {dividend} / 0 is undefined")]
    DivisionByZero { dividend: i32 },
}

/// Stateless arithmetic over two integer operands.
///
/// Every operation is a pure function of its arguments; the calculator
/// itself carries no state, so one instance can be reused (or shared
/// across threads) freely.
pub struct Calculator;

impl Calculator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Multiply two 32-bit operands into an exact 64-bit product.
    ///
    /// Both operands are widened to `i64` before multiplying, so the
    /// result can never overflow: the product of any two `i32` values
    /// fits in 63 bits plus sign.
    #[must_use]
    pub fn multiply(&self, a: i32, b: i32) -> i64 {
        i64::from(a) * i64::from(b)
    }

    /// Divide one 32-bit operand by another, producing an `f64` quotient.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::DivisionByZero` if the divisor is zero.
    pub fn divide(&self, a: i32, b: i32) -> Result<f64, CalcError> {
        if b == 0 {
            return Err(CalcError::DivisionByZero { dividend: a });
        }
        Ok(f64::from(a) / f64::from(b))
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
