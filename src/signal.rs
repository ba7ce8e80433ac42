use std::f32::consts::TAU;

/// Fixture signal for exercising the filters without a file: a 60 Hz
/// fundamental under a quieter 440 Hz tone, five 60 Hz cycles long.
pub fn two_tone(sample_rate: f32) -> Vec<f32> {
  let len = (sample_rate / 60.0 * 5.0) as usize;
  (0..len)
    .map(|n| {
      let t = n as f32 / sample_rate;
      0.5 * (TAU * 60.0 * t).sin() + 0.1 * (TAU * 440.0 * t).sin()
    })
    .collect()
}
