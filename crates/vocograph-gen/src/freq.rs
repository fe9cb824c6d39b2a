//! Band center frequency planning.

/// Lower edge of the vocoder's frequency range.
pub const MIN_FREQUENCY_HZ: f64 = 20.0;

/// Upper edge of the vocoder's frequency range.
pub const MAX_FREQUENCY_HZ: f64 = 10_000.0;

/// Band center frequencies over the default 20 Hz – 10 kHz range.
pub fn band_frequencies(band_count: usize) -> Vec<u32> {
    band_frequencies_in(band_count, MIN_FREQUENCY_HZ, MAX_FREQUENCY_HZ)
}

/// Distributes `band_count` center frequencies between `min_hz` and `max_hz`.
///
/// Works in log space with equal spacing and a half-spacing margin before the
/// first and after the last band, so no band sits on a range edge. Rounded to
/// integer Hz. Callers validate `band_count >= 1`; zero yields an empty
/// sequence.
pub fn band_frequencies_in(band_count: usize, min_hz: f64, max_hz: f64) -> Vec<u32> {
    let log_min = min_hz.ln();
    let log_max = max_hz.ln();
    let spacing = (log_max - log_min) / band_count as f64;

    (0..band_count)
        .map(|i| {
            let log_freq = log_min + spacing / 2.0 + i as f64 * spacing;
            log_freq.exp().round() as u32
        })
        .collect()
}
