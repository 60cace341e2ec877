use crate::error::{AsciiError, Result};
use std::fmt;

/// Rounding policy used when mapping a value onto a smaller range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Round towards positive infinity
    Ceil,
    /// Round to nearest, halves away from zero
    #[default]
    Round,
    /// Round towards negative infinity
    Floor,
}

impl Rounding {
    /// All policies, in the order they are presented to users
    pub const ALL: [Rounding; 3] = [Rounding::Ceil, Rounding::Round, Rounding::Floor];

    /// Applies the policy to a value
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::Ceil => value.ceil(),
            Rounding::Round => value.round(),
            Rounding::Floor => value.floor(),
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rounding::Ceil => "Ceiling",
            Rounding::Round => "Nearest",
            Rounding::Floor => "Floor",
        };
        f.write_str(name)
    }
}

/// Maps `value` from `[0, max_value]` onto `[0, dest_max_value - 1]`
///
/// The result is a zero-based index valid for a table of `dest_max_value`
/// entries: `rounding((dest_max_value - 1) * value / max_value)`.
///
/// # Arguments
/// * `value` - Value in `[0, max_value]`
/// * `max_value` - Upper bound of the input range, must be > 0
/// * `dest_max_value` - Size of the output range, must be > 0
/// * `rounding` - How fractional positions are resolved
///
/// # Errors
/// [`AsciiError::ZeroInputRange`] or [`AsciiError::ZeroOutputRange`] for an
/// empty range.
pub fn quantize(
    value: u32,
    max_value: u32,
    dest_max_value: usize,
    rounding: Rounding,
) -> Result<usize> {
    if max_value == 0 {
        return Err(AsciiError::ZeroInputRange);
    }
    if dest_max_value == 0 {
        return Err(AsciiError::ZeroOutputRange);
    }

    let scaled = ((dest_max_value - 1) as f64 * f64::from(value)) / f64::from(max_value);
    Ok(rounding.apply(scaled) as usize)
}
