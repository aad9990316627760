pub mod catalog;
pub mod parameters;
pub mod python;
pub mod sampling;
pub mod scheduler;

pub mod errors;

/// Floating point type used for magnitudes and other dimensionless quantities.
pub type FloatValue = f64;

/// Simulated occurrence time.
///
/// Times are abstract and unit-bearing: the crate is agnostic to the concrete
/// unit system as long as rates are the reciprocal of times.
pub type Time = FloatValue;

/// Event rate (reciprocal of [`Time`]).
pub type Frequency = FloatValue;
