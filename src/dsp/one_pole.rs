use std::f32::consts::PI;

use crate::error::{check_params, FilterError};

/// First-order RC high-pass. One feedback coefficient and one sample of
/// input/output history; feed samples strictly in time order.
#[derive(Clone, Debug)]
pub struct OnePoleHighPass {
  alpha: f32,
  x1: f32,
  y1: f32,
}

impl OnePoleHighPass {
  pub fn new(sample_rate: f32, cutoff_hz: f32) -> Result<Self, FilterError> {
    let alpha = derive_alpha(sample_rate, cutoff_hz)?;
    Ok(Self { alpha, x1: 0.0, y1: 0.0 })
  }

  /// Re-derives alpha from new parameters. History stays put, so a live
  /// retune keeps the recurrence running over the old samples.
  pub fn set_params(&mut self, sample_rate: f32, cutoff_hz: f32) -> Result<(), FilterError> {
    self.alpha = derive_alpha(sample_rate, cutoff_hz)?;
    Ok(())
  }

  pub fn alpha(&self) -> f32 { self.alpha }

  #[inline]
  pub fn tick(&mut self, x: f32) -> f32 {
    let y = self.alpha * (self.y1 + x - self.x1);
    self.x1 = x;
    self.y1 = y;
    y
  }
}

/// alpha = RC / (RC + 1/sr) with RC = 1 / (2*pi*fc). Lies in (0, 1) for
/// any cutoff below Nyquist.
pub fn derive_alpha(sample_rate: f32, cutoff_hz: f32) -> Result<f32, FilterError> {
  check_params(sample_rate, cutoff_hz)?;
  let rc = 1.0 / (2.0 * PI * cutoff_hz);
  Ok(rc / (rc + 1.0 / sample_rate))
}
