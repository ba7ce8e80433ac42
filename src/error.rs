use thiserror::Error;

/// Rejected filter parameters. Derivation fails fast here instead of
/// letting a degenerate cutoff drive the recurrence unstable.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FilterError {
  #[error("sample rate must be positive and finite, got {0} Hz")]
  InvalidSampleRate(f32),
  #[error("cutoff must lie in (0, {nyquist}) Hz, got {cutoff} Hz")]
  InvalidCutoff { cutoff: f32, nyquist: f32 },
}

// Negated comparisons so NaN parameters are rejected too.
pub(crate) fn check_params(sample_rate: f32, cutoff_hz: f32) -> Result<(), FilterError> {
  if !(sample_rate > 0.0) || !sample_rate.is_finite() {
    return Err(FilterError::InvalidSampleRate(sample_rate));
  }
  let nyquist = 0.5 * sample_rate;
  if !(cutoff_hz > 0.0) || !(cutoff_hz < nyquist) {
    return Err(FilterError::InvalidCutoff { cutoff: cutoff_hz, nyquist });
  }
  Ok(())
}
