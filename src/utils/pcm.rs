// PCM sample helpers

use std::f32::consts::PI;

/// Interpret raw bytes as little-endian 16-bit samples; a trailing odd byte is ignored
pub fn i16_from_le_bytes(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

/// Interleaved sine tone with the signal on every channel
pub fn sine_wave(
    frequency: f32,
    sampling_rate: u32,
    channels: usize,
    frames: usize,
    amplitude: f32,
) -> Vec<f32> {
    let step = 2.0 * PI * frequency / sampling_rate as f32;
    let mut out = Vec::with_capacity(frames * channels);
    for i in 0..frames {
        let sample = amplitude * (step * i as f32).sin();
        out.extend(std::iter::repeat(sample).take(channels));
    }
    out
}
