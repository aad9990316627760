//! Normalized parameters of the temporal ETAS process.
//!
//! User-facing inputs are the background rate, the magnitude bounds, the
//! Gutenberg-Richter rate `beta`, the Omori-Utsu exponent `p` and offset `c`,
//! a reference magnitude and a target branching ratio. From these the
//! constructor derives the productivity constant that makes the expected
//! number of direct offspring per earthquake equal the branching ratio.

use crate::errors::{EtasError, EtasResult};
use crate::{FloatValue, Frequency, Time};
use serde::{Deserialize, Serialize};

/// Immutable parameter set of the ETAS process, computed once per simulation.
///
/// Instead of the productivity `K` of Ogata (1988) this stores the frequency
/// `fk = K / tref^p`, which avoids carrying fractional time units through the
/// power-law expressions: all powers and logarithms then operate on
/// dimensionless ratios of time differences to `tref`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessParameters {
    /// Background occurrence rate.
    pub mu0: Frequency,
    /// Lower magnitude bound.
    pub mmin: FloatValue,
    /// Upper magnitude bound.
    pub mmax: FloatValue,
    /// Gutenberg-Richter rate of the truncated magnitude distribution.
    pub beta: FloatValue,
    /// Omori-Utsu exponent. Strictly greater than one.
    pub p: FloatValue,
    /// Omori-Utsu time offset.
    pub c: Time,
    /// Reference magnitude of the productivity scaling.
    pub mr: FloatValue,
    /// Reference time scale used to keep power expressions dimensionless.
    pub tref: Time,
    /// Derived productivity constant `K / tref^p`.
    pub fk: Frequency,
}

impl ProcessParameters {
    /// Validate the user inputs and derive the productivity constant.
    ///
    /// `offspring_fraction` is the branching ratio: the expected number of
    /// direct offspring triggered by one earthquake, averaged over the
    /// magnitude distribution. It must lie in `[0, 1)` so that the branching
    /// process stays subcritical.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mu0: Frequency,
        mmin: FloatValue,
        mmax: FloatValue,
        beta: FloatValue,
        p: FloatValue,
        c: Time,
        mr: FloatValue,
        offspring_fraction: FloatValue,
    ) -> EtasResult<Self> {
        if mmin >= mmax {
            return Err(EtasError::InvalidParameter(format!(
                "Mmin ({}) must be less than Mmax ({})",
                mmin, mmax
            )));
        }
        if p <= 1.0 {
            return Err(EtasError::InvalidParameter(format!(
                "Omori-Utsu exponent p must be greater than 1, got {}",
                p
            )));
        }
        if offspring_fraction >= 1.0 {
            return Err(EtasError::InvalidParameter(format!(
                "Unstable process: offspring fraction {} is not below 1",
                offspring_fraction
            )));
        }
        if offspring_fraction < 0.0 {
            return Err(EtasError::InvalidParameter(format!(
                "Offspring fraction must be non-negative, got {}",
                offspring_fraction
            )));
        }

        // One unit of simulated time. Arbitrary but fixed.
        let tref: Time = 1.0;

        let fk = offspring_fraction * Self::critical_productivity(mmin, mmax, p, c, tref, beta, mr);

        Ok(Self {
            mu0,
            mmin,
            mmax,
            beta,
            p,
            c,
            mr,
            tref,
            fk,
        })
    }

    /// Productivity constant for which the process would be exactly critical.
    ///
    /// Solves
    /// `(p-1) * c^(p-1) * (1 - exp(-beta*(Mmax-Mmin)))
    ///    / (beta * exp(beta*(Mmin-Mr)) * (Mmax-Mmin)) / tref^p`,
    /// rearranged as `(p-1) * (c/tref)^p / c * ...` so that the power acts on
    /// a dimensionless ratio.
    fn critical_productivity(
        mmin: FloatValue,
        mmax: FloatValue,
        p: FloatValue,
        c: Time,
        tref: Time,
        beta: FloatValue,
        mr: FloatValue,
    ) -> Frequency {
        (p - 1.0) * (p * (c / tref).ln()).exp() / c * (1.0 - (-beta * (mmax - mmin)).exp())
            / (beta * (beta * (mmin - mr)).exp() * (mmax - mmin))
    }

    /// Magnitude-dependent productivity scaling `f(M) = exp(beta * (M - Mr))`.
    pub fn productivity(&self, magnitude: FloatValue) -> FloatValue {
        (self.beta * (magnitude - self.mr)).exp()
    }
}
