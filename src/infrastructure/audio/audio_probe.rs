use std::io::Cursor;
use std::time::Duration;

use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Best-effort duration estimate from the container headers. Returns `None`
/// when the container cannot be probed or does not declare its length;
/// callers skip the duration check in that case.
pub fn probe_duration(data: &[u8]) -> Option<Duration> {
    let cursor = Cursor::new(data.to_vec());
    let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

    let hint = Hint::new();
    let format_opts = FormatOptions::default();
    let metadata_opts = MetadataOptions::default();

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &format_opts, &metadata_opts)
        .ok()?;

    let track = probed.format.default_track()?;
    let sample_rate = track.codec_params.sample_rate?;
    let n_frames = track.codec_params.n_frames?;

    let duration = Duration::from_secs_f64(n_frames as f64 / sample_rate as f64);
    tracing::debug!(
        duration_secs = duration.as_secs_f32(),
        sample_rate = sample_rate,
        "Audio duration probed"
    );

    Some(duration)
}
