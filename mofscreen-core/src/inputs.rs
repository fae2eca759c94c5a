//! Material property inputs
//!
//! The seven geometric and material descriptors a user enters for one
//! framework candidate. Each field is independently settable by name, and
//! an update never fails: text that does not parse as a finite number is
//! stored as `0.0`, so the screening loop always has a displayable state
//! and never holds a stale value after a bad edit.

use core::str::FromStr;

use crate::errors::ScreenError;

/// The seven input fields, in the order the entry form lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputField {
    /// Gravimetric accessible surface area
    Gsa,
    /// Volumetric accessible surface area
    Vsa,
    /// Void fraction
    Vf,
    /// Pore volume
    Pv,
    /// Framework density
    Density,
    /// Largest cavity diameter
    Lcd,
    /// Pore limiting diameter
    Pld,
}

impl InputField {
    /// All fields in display order
    pub const ALL: [InputField; 7] = [
        InputField::Gsa,
        InputField::Vsa,
        InputField::Vf,
        InputField::Pv,
        InputField::Density,
        InputField::Lcd,
        InputField::Pld,
    ];

    /// Short machine name, also accepted by [`FromStr`]
    pub const fn name(&self) -> &'static str {
        match self {
            InputField::Gsa => "gsa",
            InputField::Vsa => "vsa",
            InputField::Vf => "vf",
            InputField::Pv => "pv",
            InputField::Density => "density",
            InputField::Lcd => "lcd",
            InputField::Pld => "pld",
        }
    }

    /// Human-readable label for entry forms
    pub const fn label(&self) -> &'static str {
        match self {
            InputField::Gsa => "ASA Gravimetric",
            InputField::Vsa => "ASA Volumetric",
            InputField::Vf => "Void Fraction",
            InputField::Pv => "Pore Volume",
            InputField::Density => "Density",
            InputField::Lcd => "Largest Cavity Diameter",
            InputField::Pld => "Pore Limiting Diameter",
        }
    }

    /// Unit of measurement (empty for dimensionless quantities)
    pub const fn unit(&self) -> &'static str {
        match self {
            InputField::Gsa => "m²/g",
            InputField::Vsa => "m²/cm³",
            InputField::Vf => "",
            InputField::Pv => "cm³/g",
            InputField::Density => "g/cm³",
            InputField::Lcd => "Å",
            InputField::Pld => "Å",
        }
    }
}

impl FromStr for InputField {
    type Err = ScreenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gsa" => Ok(InputField::Gsa),
            "vsa" => Ok(InputField::Vsa),
            "vf" => Ok(InputField::Vf),
            "pv" => Ok(InputField::Pv),
            "density" => Ok(InputField::Density),
            "lcd" => Ok(InputField::Lcd),
            "pld" => Ok(InputField::Pld),
            _ => Err(ScreenError::UnknownField),
        }
    }
}

/// Current values of the seven screening inputs.
///
/// Every field is always present and finite. Updates produce a new value
/// with exactly one field replaced; there is no shared mutable state
/// between versions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialInputs {
    /// Gravimetric accessible surface area [m²/g]
    pub gsa: f64,
    /// Volumetric accessible surface area [m²/cm³]
    pub vsa: f64,
    /// Void fraction [-]
    pub vf: f64,
    /// Pore volume [cm³/g]
    pub pv: f64,
    /// Framework density [g/cm³]
    pub density: f64,
    /// Largest cavity diameter [Å]
    pub lcd: f64,
    /// Pore limiting diameter [Å]
    pub pld: f64,
}

impl Default for MaterialInputs {
    fn default() -> Self {
        crate::constants::screening::DEFAULT_INPUTS
    }
}

impl MaterialInputs {
    /// Read one field by name.
    pub const fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::Gsa => self.gsa,
            InputField::Vsa => self.vsa,
            InputField::Vf => self.vf,
            InputField::Pv => self.pv,
            InputField::Density => self.density,
            InputField::Lcd => self.lcd,
            InputField::Pld => self.pld,
        }
    }

    /// Replace one field with an already-numeric value.
    ///
    /// Non-finite values are stored as `0.0` to uphold the finite-field
    /// invariant.
    #[must_use]
    pub fn with_field(self, field: InputField, value: f64) -> Self {
        let value = if value.is_finite() { value } else { 0.0 };
        let mut next = self;
        match field {
            InputField::Gsa => next.gsa = value,
            InputField::Vsa => next.vsa = value,
            InputField::Vf => next.vf = value,
            InputField::Pv => next.pv = value,
            InputField::Density => next.density = value,
            InputField::Lcd => next.lcd = value,
            InputField::Pld => next.pld = value,
        }
        next
    }

    /// Replace one field from user-entered text.
    ///
    /// Text that does not parse as a finite number stores `0.0` - the
    /// update never fails and never leaves the previous value in place.
    #[must_use]
    pub fn with_text(self, field: InputField, raw: &str) -> Self {
        self.with_field(field, parse_or_zero(raw))
    }
}

/// Parse user-entered text, substituting `0.0` for anything that is not a
/// finite number.
pub fn parse_or_zero(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_plain_numbers() {
        assert_eq!(parse_or_zero("3250.5"), 3250.5);
        assert_eq!(parse_or_zero("  -4 "), -4.0);
        assert_eq!(parse_or_zero("1e3"), 1000.0);
    }

    #[test]
    fn parse_failures_become_zero() {
        assert_eq!(parse_or_zero("not-a-number"), 0.0);
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("12,5"), 0.0);
    }

    #[test]
    fn non_finite_parses_become_zero() {
        assert_eq!(parse_or_zero("inf"), 0.0);
        assert_eq!(parse_or_zero("-inf"), 0.0);
        assert_eq!(parse_or_zero("NaN"), 0.0);
    }

    #[test]
    fn with_text_replaces_only_the_named_field() {
        let base = MaterialInputs::default();
        let next = base.with_text(InputField::Gsa, "not-a-number");

        assert_eq!(next.gsa, 0.0);
        assert_eq!(next.vsa, base.vsa);
        assert_eq!(next.vf, base.vf);
        assert_eq!(next.pv, base.pv);
        assert_eq!(next.density, base.density);
        assert_eq!(next.lcd, base.lcd);
        assert_eq!(next.pld, base.pld);
    }

    #[test]
    fn with_field_coerces_non_finite() {
        let next = MaterialInputs::default().with_field(InputField::Lcd, f64::NAN);
        assert_eq!(next.lcd, 0.0);
    }

    #[test]
    fn field_names_round_trip() {
        for field in InputField::ALL {
            assert_eq!(field.name().parse::<InputField>().unwrap(), field);
        }
    }

    #[test]
    fn unknown_field_name_is_rejected() {
        assert!("porosity".parse::<InputField>().is_err());
        assert!("GSA".parse::<InputField>().is_err());
    }

    #[test]
    fn get_matches_struct_fields() {
        let inputs = MaterialInputs::default();
        assert_eq!(inputs.get(InputField::Gsa), inputs.gsa);
        assert_eq!(inputs.get(InputField::Density), inputs.density);
        assert_eq!(inputs.get(InputField::Pld), inputs.pld);
    }
}
