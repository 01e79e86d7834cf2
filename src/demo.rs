//! Synthetic demo profile generation.
//!
//! Builds a deterministic in-memory profile so the viewer can be exercised
//! without a capture file. The same seed always produces the same profile,
//! which the tests rely on.

use crate::profile::{ProfileData, ProfileMetadata, Span, Track};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Span categories used by the generator, matched by the color mapping.
pub const CATEGORIES: &[&str] = &["layout", "script", "paint", "gc", "network", "other"];

const TRACK_NAMES: &[&str] = &["Main Thread", "Compositor", "Render Worker", "GPU"];

const SPAN_NAMES: &[&str] = &[
    "reflow",
    "run_script",
    "rasterize",
    "minor_gc",
    "fetch",
    "decode_image",
    "composite",
    "style_recalc",
];

/// Time origin of generated captures, in milliseconds.
pub const DEMO_START_TIME: f64 = 500.0;

/// Generates a deterministic profile with the given seed and span budget
/// per track.
pub fn generate_demo_profile(seed: u64, spans_per_track: usize) -> ProfileData {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut tracks = Vec::with_capacity(TRACK_NAMES.len());
    for (i, track_name) in TRACK_NAMES.iter().enumerate() {
        let mut spans = Vec::with_capacity(spans_per_track);
        let mut cursor = DEMO_START_TIME + rng.gen_range(0.0..5.0);
        for _ in 0..spans_per_track {
            let duration = rng.gen_range(0.4..12.0);
            let name = SPAN_NAMES[rng.gen_range(0..SPAN_NAMES.len())];
            let category = CATEGORIES[rng.gen_range(0..CATEGORIES.len())];
            spans.push(Span {
                start: cursor,
                end: cursor + duration,
                name: name.to_string(),
                category: category.to_string(),
            });
            cursor += duration + rng.gen_range(0.1..6.0);
        }
        tracks.push(Track {
            id: i as u64 + 1,
            name: track_name.to_string(),
            spans,
        });
    }

    let metadata = ProfileMetadata {
        version: "1.0".to_string(),
        header_data: serde_json::json!({
            "product": "Lens Demo",
            "start_time": DEMO_START_TIME,
            "seed": seed,
        }),
        total_tracks: Some(tracks.len()),
        total_spans: Some(tracks.iter().map(|t| t.spans.len()).sum()),
    };

    ProfileData::new(metadata, tracks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_profile_is_deterministic() {
        let a = generate_demo_profile(42, 50);
        let b = generate_demo_profile(42, 50);
        assert_eq!(a.extent(), b.extent());
        assert_eq!(a.span_count(), b.span_count());
        for (ta, tb) in a.tracks.iter().zip(&b.tracks) {
            assert_eq!(ta.spans, tb.spans);
        }
    }

    #[test]
    fn test_demo_profile_shape() {
        let data = generate_demo_profile(7, 25);
        assert_eq!(data.tracks.len(), TRACK_NAMES.len());
        assert_eq!(data.span_count(), TRACK_NAMES.len() * 25);
        assert_eq!(data.metadata.start_time(), DEMO_START_TIME);
        assert!(data.extent().start >= DEMO_START_TIME);

        // Spans within a track are ordered and well formed
        for track in &data.tracks {
            for pair in track.spans.windows(2) {
                assert!(pair[0].end <= pair[1].start);
            }
            for span in &track.spans {
                assert!(span.start < span.end);
                assert!(CATEGORIES.contains(&span.category.as_str()));
            }
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate_demo_profile(1, 20);
        let b = generate_demo_profile(2, 20);
        assert_ne!(a.tracks[0].spans, b.tracks[0].spans);
    }
}
