use std::f32::consts::{PI, SQRT_2};

use crate::error::{check_params, FilterError};

/// High-pass biquad coefficients, already normalized by a0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighPassCoeffs {
  pub b0: f32,
  pub b1: f32,
  pub b2: f32,
  pub a1: f32,
  pub a2: f32,
}

/// Cookbook high-pass design at the fixed Butterworth Q = sqrt(2)/2
/// (maximally flat passband).
pub fn derive_coeffs(sample_rate: f32, cutoff_hz: f32) -> Result<HighPassCoeffs, FilterError> {
  check_params(sample_rate, cutoff_hz)?;
  let omega = 2.0 * PI * cutoff_hz / sample_rate;
  let sin_omega = omega.sin();
  let cos_omega = omega.cos();
  let alpha = sin_omega / (2.0 * SQRT_2);

  let b0 = (1.0 + cos_omega) / 2.0;
  let b1 = -(1.0 + cos_omega);
  let b2 = (1.0 + cos_omega) / 2.0;
  let a0 = 1.0 + alpha;
  let a1 = -2.0 * cos_omega;
  let a2 = 1.0 - alpha;

  Ok(HighPassCoeffs {
    b0: b0 / a0,
    b1: b1 / a0,
    b2: b2 / a0,
    a1: a1 / a0,
    a2: a2 / a0,
  })
}

/// Second-order Butterworth high-pass. Two samples of input and output
/// history, shifted one slot per tick (oldest dropped).
#[derive(Clone, Debug)]
pub struct ButterworthHighPass {
  c: HighPassCoeffs,
  x1: f32,
  x2: f32,
  y1: f32,
  y2: f32,
}

impl ButterworthHighPass {
  pub fn new(sample_rate: f32, cutoff_hz: f32) -> Result<Self, FilterError> {
    let c = derive_coeffs(sample_rate, cutoff_hz)?;
    Ok(Self { c, x1: 0.0, x2: 0.0, y1: 0.0, y2: 0.0 })
  }

  /// Re-derives coefficients; history is untouched (same retune contract
  /// as the one-pole variant).
  pub fn set_params(&mut self, sample_rate: f32, cutoff_hz: f32) -> Result<(), FilterError> {
    self.c = derive_coeffs(sample_rate, cutoff_hz)?;
    Ok(())
  }

  pub fn coeffs(&self) -> HighPassCoeffs { self.c }

  // Direct Form I
  #[inline]
  pub fn tick(&mut self, x: f32) -> f32 {
    let y = self.c.b0 * x + self.c.b1 * self.x1 + self.c.b2 * self.x2
      - self.c.a1 * self.y1
      - self.c.a2 * self.y2;
    self.x2 = self.x1;
    self.x1 = x;
    self.y2 = self.y1;
    self.y1 = y;
    y
  }
}
