//! Working-uptake regression surfaces
//!
//! Two fixed degree-2 response surfaces over the seven material
//! descriptors predict gravimetric (wt%) and volumetric (g/L) working
//! uptake. Each surface is a 36-term linear combination: an intercept, the
//! seven first-order terms, the seven pure squares, and the 21 pairwise
//! cross products.
//!
//! The coefficients are empirical regression constants, transcribed
//! literally from the published fit - they are never derived at runtime,
//! and changing any digit silently changes every prediction. Summation
//! runs in the fixed order of the published equation; reordering the sum
//! perturbs results at floating-point rounding level, so tests compare
//! with epsilon tolerance rather than bit equality.

use crate::inputs::MaterialInputs;

/// Coefficients of one 36-term quadratic response surface.
///
/// Field names follow the regression variable names: `p` is framework
/// density, the remaining six match the input fields. `*_sq` are the pure
/// square terms; paired names are cross terms.
#[derive(Debug, Clone, Copy)]
pub struct Coefficients {
    intercept: f64,
    // first-order terms
    p: f64,
    gsa: f64,
    vsa: f64,
    vf: f64,
    pv: f64,
    lcd: f64,
    pld: f64,
    // pure square terms
    p_sq: f64,
    gsa_sq: f64,
    vsa_sq: f64,
    vf_sq: f64,
    pv_sq: f64,
    lcd_sq: f64,
    pld_sq: f64,
    // pairwise cross terms
    p_gsa: f64,
    p_vsa: f64,
    p_vf: f64,
    p_pv: f64,
    p_lcd: f64,
    p_pld: f64,
    gsa_vsa: f64,
    gsa_vf: f64,
    gsa_pv: f64,
    gsa_lcd: f64,
    gsa_pld: f64,
    vsa_vf: f64,
    vsa_pv: f64,
    vsa_lcd: f64,
    vsa_pld: f64,
    vf_pv: f64,
    vf_lcd: f64,
    vf_pld: f64,
    pv_lcd: f64,
    pv_pld: f64,
    lcd_pld: f64,
}

impl Coefficients {
    /// Evaluate the surface at `inputs`.
    ///
    /// Pure and total: defined for every finite input, including negative
    /// or physically nonsensical values - no domain validation happens
    /// here. Terms are summed in the published equation's order: intercept,
    /// first-order block, then the second-order blocks grouped by leading
    /// variable.
    pub fn evaluate(&self, inputs: &MaterialInputs) -> f64 {
        let MaterialInputs {
            gsa,
            vsa,
            vf,
            pv,
            density: p,
            lcd,
            pld,
        } = *inputs;

        self.intercept
            + self.p * p
            + self.gsa * gsa
            + self.vsa * vsa
            + self.vf * vf
            + self.pv * pv
            + self.lcd * lcd
            + self.pld * pld
            + self.p_sq * (p * p)
            + self.p_gsa * p * gsa
            + self.p_vsa * p * vsa
            + self.p_vf * p * vf
            + self.p_pv * p * pv
            + self.p_lcd * p * lcd
            + self.p_pld * p * pld
            + self.gsa_sq * (gsa * gsa)
            + self.gsa_vsa * gsa * vsa
            + self.gsa_vf * gsa * vf
            + self.gsa_pv * gsa * pv
            + self.gsa_lcd * gsa * lcd
            + self.gsa_pld * gsa * pld
            + self.vsa_sq * (vsa * vsa)
            + self.vsa_vf * vsa * vf
            + self.vsa_pv * vsa * pv
            + self.vsa_lcd * vsa * lcd
            + self.vsa_pld * vsa * pld
            + self.vf_sq * (vf * vf)
            + self.vf_pv * vf * pv
            + self.vf_lcd * vf * lcd
            + self.vf_pld * vf * pld
            + self.pv_sq * (pv * pv)
            + self.pv_lcd * pv * lcd
            + self.pv_pld * pv * pld
            + self.lcd_sq * (lcd * lcd)
            + self.lcd_pld * lcd * pld
            + self.pld_sq * (pld * pld)
    }
}

/// Gravimetric working-uptake surface [wt%].
pub const WUG_COEFFS: Coefficients = Coefficients {
    intercept: -4.47194,
    p: 1.77349,
    gsa: 0.000511149,
    vsa: 0.00163429,
    vf: 3.92696,
    pv: 5.59522,
    lcd: -0.0764434,
    pld: 0.262302,
    p_sq: -0.163317,
    gsa_sq: -4.1166e-8,
    vsa_sq: 2.21456e-7,
    vf_sq: 4.52648,
    pv_sq: -0.0213098,
    lcd_sq: 0.000521033,
    pld_sq: -0.000244913,
    p_gsa: -0.00133171,
    p_vsa: 7.69048e-5,
    p_vf: -2.66592,
    p_pv: 2.45092,
    p_lcd: 0.089082,
    p_pld: -0.0975448,
    gsa_vsa: -1.15768e-7,
    gsa_vf: 0.00280453,
    gsa_pv: -2.35326e-5,
    gsa_lcd: 8.39123e-6,
    gsa_pld: -3.89128e-6,
    vsa_vf: -0.00231186,
    vsa_pv: -0.00180075,
    vsa_lcd: 4.34998e-6,
    vsa_pld: 1.65433e-5,
    vf_pv: -3.82519,
    vf_lcd: -0.0639716,
    vf_pld: -0.283064,
    pv_lcd: 0.000824477,
    pv_pld: 0.00253194,
    lcd_pld: 0.000700743,
};

/// Volumetric working-uptake surface [g/L].
pub const WUV_COEFFS: Coefficients = Coefficients {
    intercept: -49.6238,
    p: 17.4843,
    gsa: -0.000310481,
    vsa: 0.0214365,
    vf: 32.4082,
    pv: 14.1933,
    lcd: 0.0660557,
    pld: 1.66494,
    p_sq: -1.79789,
    gsa_sq: 1.51676e-7,
    vsa_sq: 7.11672e-7,
    vf_sq: 44.1803,
    pv_sq: -0.0384937,
    lcd_sq: 0.00735029,
    pld_sq: 0.00386859,
    p_gsa: -0.00754047,
    p_vsa: -0.0012505,
    p_vf: -22.99,
    p_pv: 69.0864,
    p_lcd: 0.861169,
    p_pld: -0.523851,
    gsa_vsa: 3.18358e-7,
    gsa_vf: 0.0145422,
    gsa_pv: -5.75705e-5,
    gsa_lcd: 0.000157672,
    gsa_pld: -2.93554e-5,
    vsa_vf: -0.0162344,
    vsa_pv: -0.0208807,
    vsa_lcd: 3.334e-5,
    vsa_pld: 0.000196064,
    vf_pv: -14.2407,
    vf_lcd: -1.95209,
    vf_pld: -2.23509,
    pv_lcd: -0.00185746,
    pv_pld: 0.0410538,
    lcd_pld: 0.00119741,
};

/// Predicted working uptake for one material.
///
/// Derived wholesale from one input vector; never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WorkingUptake {
    /// Gravimetric working uptake [wt%]
    pub gravimetric: f64,
    /// Volumetric working uptake [g/L]
    pub volumetric: f64,
}

/// Evaluate both response surfaces for one input vector.
pub fn evaluate(inputs: &MaterialInputs) -> WorkingUptake {
    WorkingUptake {
        gravimetric: WUG_COEFFS.evaluate(inputs),
        volumetric: WUV_COEFFS.evaluate(inputs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::InputField;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn zero_inputs_yield_the_intercepts() {
        let zeros = MaterialInputs {
            gsa: 0.0,
            vsa: 0.0,
            vf: 0.0,
            pv: 0.0,
            density: 0.0,
            lcd: 0.0,
            pld: 0.0,
        };
        let uptake = evaluate(&zeros);
        assert_close(uptake.gravimetric, -4.47194);
        assert_close(uptake.volumetric, -49.6238);
    }

    #[test]
    fn reference_material_prediction() {
        // Snapshot fixture for the default input vector; catches any
        // coefficient transcription error.
        let uptake = evaluate(&MaterialInputs::default());
        assert_close(uptake.gravimetric, 5.7913582288);
        assert_close(uptake.volumetric, 51.977507408);
    }

    #[test]
    fn unit_inputs_prediction() {
        let ones = MaterialInputs {
            gsa: 1.0,
            vsa: 1.0,
            vf: 1.0,
            pv: 1.0,
            density: 1.0,
            lcd: 1.0,
            pld: 1.0,
        };
        let uptake = evaluate(&ones);
        assert_close(uptake.gravimetric, 6.959671158952);
        assert_close(uptake.volumetric, 86.584426110806);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let inputs = MaterialInputs::default();
        let first = evaluate(&inputs);
        let second = evaluate(&inputs);
        assert_eq!(first, second);
    }

    #[test]
    fn pore_volume_is_not_a_dead_variable() {
        // Curvature means no global monotonicity claim, but changing pv
        // alone must move both outputs for generic inputs.
        let base = evaluate(&MaterialInputs::default());
        let bumped = evaluate(&MaterialInputs::default().with_field(InputField::Pv, 1.5));
        assert_ne!(base.gravimetric, bumped.gravimetric);
        assert_ne!(base.volumetric, bumped.volumetric);
    }

    #[test]
    fn negative_inputs_are_accepted() {
        // Total function: physically nonsensical inputs still evaluate.
        let weird = MaterialInputs {
            gsa: -100.0,
            vsa: -50.0,
            vf: -0.2,
            pv: -1.0,
            density: -0.5,
            lcd: -3.0,
            pld: -2.0,
        };
        let uptake = evaluate(&weird);
        assert!(uptake.gravimetric.is_finite());
        assert!(uptake.volumetric.is_finite());
    }
}
