use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::warn;

/// CSV dumps are capped so plotting stays manageable.
pub const CSV_ROW_CAP: usize = 3600;

/// Reads a WAV file's first channel as f32 samples plus its sample rate.
pub fn read_wav_mono(path: &Path) -> Result<(Vec<f32>, u32), hound::Error> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;
    if channels > 1 {
        warn!(
            "{}: taking channel 1 of {}",
            path.display(),
            spec.channels
        );
    }
    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .step_by(channels)
            .collect::<Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let scale = 1.0 / (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .step_by(channels)
                .map(|s| s.map(|v| v as f32 * scale))
                .collect::<Result<_, _>>()?
        }
    };
    Ok((samples, spec.sample_rate))
}

/// Writes samples as 16-bit PCM mono, clamped to [-1, 1].
pub fn write_wav_mono(path: &Path, samples: &[f32], sample_rate: u32) -> Result<(), hound::Error> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &s in samples {
        writer.write_sample((s.clamp(-1.0, 1.0) * 32767.0) as i16)?;
    }
    writer.finalize()
}

/// Writes one sample per row, at most [`CSV_ROW_CAP`] rows.
pub fn write_csv(path: &Path, samples: &[f32]) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for s in samples.iter().take(CSV_ROW_CAP) {
        writeln!(w, "{s}")?;
    }
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join("hipass-io-tests");
        fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn wav_roundtrip_keeps_length_and_shape() {
        let path = scratch("roundtrip.wav");
        let samples: Vec<f32> = (0..256).map(|n| (n as f32 * 0.1).sin() * 0.5).collect();
        write_wav_mono(&path, &samples, 44100).unwrap();
        let (back, sr) = read_wav_mono(&path).unwrap();
        assert_eq!(sr, 44100);
        assert_eq!(back.len(), samples.len());
        for (a, b) in back.iter().zip(&samples) {
            // The writer truncates toward zero and the reader rescales by
            // 1/32768, so round-trip error can reach ~(|s|+1)/32768.
            assert!((a - b).abs() < 2.0 / 32768.0, "{a} vs {b}");
        }
    }

    #[test]
    fn csv_rows_are_capped() {
        let path = scratch("capped.csv");
        write_csv(&path, &vec![1.5; CSV_ROW_CAP + 100]).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), CSV_ROW_CAP);
        assert!(text.lines().all(|l| l == "1.5"));
    }

    #[test]
    fn short_csv_keeps_every_row() {
        let path = scratch("short.csv");
        write_csv(&path, &[0.25, -0.5]).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "0.25\n-0.5\n");
    }
}
