use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A radian confined to the range of [0.0; 2π)
#[derive(Debug, PartialEq, Copy, Clone, Default, Serialize, Deserialize)]
pub struct Radians {
    value: f64,
}

impl Radians {
    /// Creates a new instance of [`Radians`].
    ///
    /// # Errors
    /// Returns an error if the given value is outside the range [0.0; 2π)
    ///
    /// [`Radians`]: ./struct.Radians.html
    pub fn try_new(value: f64) -> Result<Radians, ()> {
        if value >= 0.0 && value < 2.0 * PI {
            Ok(Radians { value })
        } else {
            Err(())
        }
    }

    /// Creates a new instance of [`Radians`] from any finite angle
    /// by wrapping it into the range [0.0; 2π).
    ///
    /// # Errors
    /// Returns an error if the given value is `NaN` or infinite
    ///
    /// [`Radians`]: ./struct.Radians.html
    pub fn wrapped(value: f64) -> Result<Radians, ()> {
        if !value.is_finite() {
            return Err(());
        }

        let wrapped = value.rem_euclid(2.0 * PI);
        // rem_euclid can round up to exactly 2π for tiny negative inputs
        let wrapped = if wrapped >= 2.0 * PI { 0.0 } else { wrapped };
        Radians::try_new(wrapped)
    }

    /// Returns the underlying value
    pub fn value(self) -> f64 {
        self.value
    }
}
