pub mod biquad;
pub mod one_pole;

pub use biquad::{derive_coeffs, ButterworthHighPass, HighPassCoeffs};
pub use one_pole::{derive_alpha, OnePoleHighPass};

use crate::error::FilterError;

/// A streaming high-pass filter of either order, behind one surface:
/// construct, tick one sample at a time, retune in place.
///
/// Each instance owns its coefficients and history exclusively, so any
/// number of instances may run over the same input independently. A single
/// instance is stateful and non-reentrant; sharing one across threads
/// needs external serialization around each tick.
#[derive(Clone, Debug)]
pub enum HighPass {
  OnePole(OnePoleHighPass),
  Butterworth(ButterworthHighPass),
}

impl HighPass {
  pub fn one_pole(sample_rate: f32, cutoff_hz: f32) -> Result<Self, FilterError> {
    Ok(Self::OnePole(OnePoleHighPass::new(sample_rate, cutoff_hz)?))
  }

  pub fn butterworth(sample_rate: f32, cutoff_hz: f32) -> Result<Self, FilterError> {
    Ok(Self::Butterworth(ButterworthHighPass::new(sample_rate, cutoff_hz)?))
  }

  #[inline]
  pub fn tick(&mut self, x: f32) -> f32 {
    match self {
      Self::OnePole(f) => f.tick(x),
      Self::Butterworth(f) => f.tick(x),
    }
  }

  pub fn set_params(&mut self, sample_rate: f32, cutoff_hz: f32) -> Result<(), FilterError> {
    match self {
      Self::OnePole(f) => f.set_params(sample_rate, cutoff_hz),
      Self::Butterworth(f) => f.set_params(sample_rate, cutoff_hz),
    }
  }

  /// One output per input, in input order.
  pub fn process(&mut self, input: &[f32]) -> Vec<f32> {
    input.iter().map(|&x| self.tick(x)).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn enum_matches_inner_filters() {
    let input: Vec<f32> = (0..48).map(|n| (n as f32 * 0.17).cos()).collect();

    let mut inner = OnePoleHighPass::new(44100.0, 200.0).unwrap();
    let mut wrapped = HighPass::one_pole(44100.0, 200.0).unwrap();
    for &x in &input {
      assert_eq!(wrapped.tick(x), inner.tick(x));
    }

    let mut inner = ButterworthHighPass::new(44100.0, 200.0).unwrap();
    let mut wrapped = HighPass::butterworth(44100.0, 200.0).unwrap();
    for &x in &input {
      assert_eq!(wrapped.tick(x), inner.tick(x));
    }
  }

  #[test]
  fn process_preserves_length() {
    let input = vec![0.25; 777];
    let mut f = HighPass::butterworth(44100.0, 200.0).unwrap();
    assert_eq!(f.process(&input).len(), input.len());
    assert_eq!(f.process(&[]).len(), 0);
  }

  #[test]
  fn independent_instances_run_concurrently() {
    let input: Vec<f32> = (0..4096).map(|n| (n as f32 * 0.01).sin()).collect();
    let mut serial_a = HighPass::one_pole(44100.0, 200.0).unwrap();
    let mut serial_b = HighPass::butterworth(44100.0, 3800.0).unwrap();
    let expect_a = serial_a.process(&input);
    let expect_b = serial_b.process(&input);

    let in_a = input.clone();
    let ha = std::thread::spawn(move || {
      HighPass::one_pole(44100.0, 200.0).unwrap().process(&in_a)
    });
    let hb = std::thread::spawn(move || {
      HighPass::butterworth(44100.0, 3800.0).unwrap().process(&input)
    });
    assert_eq!(ha.join().unwrap(), expect_a);
    assert_eq!(hb.join().unwrap(), expect_b);
  }
}
