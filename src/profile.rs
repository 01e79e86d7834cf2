//! Profile file format model and reader.
//!
//! Lens profiles are line-oriented JSON (`.lprof`, or `.lprof.br` with
//! Brotli compression): one header line with capture metadata, followed by
//! track and span lines in any interleaving, and an optional footer with
//! totals. The reader builds an in-memory [`ProfileData`] with the time
//! extent precomputed.

use crate::range::TimeRange;
use anyhow::{anyhow, Context, Result};
use brotli::Decompressor;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

static EMPTY_METADATA: Lazy<serde_json::Value> = Lazy::new(|| serde_json::json!({}));

/// One line of a profile file, dispatched on its `type` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProfileLine {
    Header {
        version: String,
        metadata: serde_json::Value,
    },
    Track {
        id: u64,
        name: String,
    },
    Span {
        track_id: u64,
        start: f64,
        end: f64,
        name: String,
        category: String,
    },
    Footer {
        total_tracks: Option<usize>,
        total_spans: Option<usize>,
    },
}

/// Capture metadata from the profile header.
#[derive(Debug, Clone, Default)]
pub struct ProfileMetadata {
    /// Format version string from the header
    pub version: String,
    /// Free-form header metadata (product name, capture time, ...)
    pub header_data: serde_json::Value,
    /// Totals from the footer, if one was present
    pub total_tracks: Option<usize>,
    pub total_spans: Option<usize>,
}

impl ProfileMetadata {
    /// Returns the product name recorded in the header, if any.
    pub fn product(&self) -> Option<&str> {
        self.header_data.get("product").and_then(|v| v.as_str())
    }

    /// Returns the capture's shared time origin in milliseconds.
    ///
    /// Committed ranges are stored relative to this value. Defaults to 0
    /// when the header does not record one.
    pub fn start_time(&self) -> f64 {
        self.header_data
            .get("start_time")
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    /// Returns the raw header metadata object.
    pub fn header_data(&self) -> &serde_json::Value {
        if self.header_data.is_null() {
            &EMPTY_METADATA
        } else {
            &self.header_data
        }
    }
}

/// A single timed span on a track.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: f64,
    pub end: f64,
    pub name: String,
    pub category: String,
}

/// A named timeline row holding spans in file order.
#[derive(Debug, Clone)]
pub struct Track {
    pub id: u64,
    pub name: String,
    pub spans: Vec<Span>,
}

/// A fully loaded profile.
#[derive(Debug, Clone)]
pub struct ProfileData {
    pub metadata: ProfileMetadata,
    pub tracks: Vec<Track>,
    extent: TimeRange,
}

impl ProfileData {
    /// Assembles a profile from parts, computing the time extent from the
    /// spans (tracks without spans contribute nothing).
    pub fn new(metadata: ProfileMetadata, tracks: Vec<Track>) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for track in &tracks {
            for span in &track.spans {
                min = min.min(span.start);
                max = max.max(span.end);
            }
        }
        let extent = if min <= max {
            TimeRange::new(min, max)
        } else {
            TimeRange::new(0.0, 0.0)
        };
        Self {
            metadata,
            tracks,
            extent,
        }
    }

    /// Returns the full time extent covered by the profile's spans.
    pub fn extent(&self) -> TimeRange {
        self.extent
    }

    /// Returns the number of spans across all tracks.
    pub fn span_count(&self) -> usize {
        self.tracks.iter().map(|t| t.spans.len()).sum()
    }
}

/// Parses a profile file, transparently decompressing `.br` files.
pub fn parse_profile(path: &Path) -> Result<ProfileData> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open profile: {}", path.display()))?;

    let reader: Box<dyn Read> = if path.extension().is_some_and(|e| e == "br") {
        Box::new(Decompressor::new(file, 4096))
    } else {
        Box::new(file)
    };

    parse_profile_lines(BufReader::new(reader))
        .with_context(|| format!("Failed to parse profile: {}", path.display()))
}

/// Parses profile lines from any buffered reader.
pub fn parse_profile_lines<R: BufRead>(reader: R) -> Result<ProfileData> {
    let mut metadata = ProfileMetadata::default();
    let mut saw_header = false;
    let mut tracks: Vec<Track> = Vec::new();
    let mut track_index: HashMap<u64, usize> = HashMap::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("I/O error at line {}", line_no + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let parsed: ProfileLine = serde_json::from_str(&line)
            .with_context(|| format!("Malformed profile line {}", line_no + 1))?;

        match parsed {
            ProfileLine::Header {
                version,
                metadata: header_data,
            } => {
                metadata.version = version;
                metadata.header_data = header_data;
                saw_header = true;
            }
            ProfileLine::Track { id, name } => {
                if track_index.contains_key(&id) {
                    return Err(anyhow!("Duplicate track id {} at line {}", id, line_no + 1));
                }
                track_index.insert(id, tracks.len());
                tracks.push(Track {
                    id,
                    name,
                    spans: Vec::new(),
                });
            }
            ProfileLine::Span {
                track_id,
                start,
                end,
                name,
                category,
            } => {
                let idx = *track_index.get(&track_id).ok_or_else(|| {
                    anyhow!("Span for unknown track {} at line {}", track_id, line_no + 1)
                })?;
                if end < start {
                    return Err(anyhow!(
                        "Span with end < start ({} < {}) at line {}",
                        end,
                        start,
                        line_no + 1
                    ));
                }
                tracks[idx].spans.push(Span {
                    start,
                    end,
                    name,
                    category,
                });
            }
            ProfileLine::Footer {
                total_tracks,
                total_spans,
            } => {
                metadata.total_tracks = total_tracks;
                metadata.total_spans = total_spans;
            }
        }
    }

    if !saw_header {
        return Err(anyhow!("Profile has no header line"));
    }

    Ok(ProfileData::new(metadata, tracks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = r#"{"type":"header","version":"1.0","metadata":{"product":"demo","start_time":50.0}}
{"type":"track","id":1,"name":"Main Thread"}
{"type":"span","track_id":1,"start":100.0,"end":250.0,"name":"layout","category":"layout"}
{"type":"span","track_id":1,"start":260.0,"end":400.0,"name":"run_script","category":"script"}
{"type":"footer","total_tracks":1,"total_spans":2}
"#;

    #[test]
    fn test_parse_sample_profile() {
        let data = parse_profile_lines(Cursor::new(SAMPLE)).unwrap();
        assert_eq!(data.metadata.version, "1.0");
        assert_eq!(data.metadata.product(), Some("demo"));
        assert_eq!(data.metadata.start_time(), 50.0);
        assert_eq!(data.tracks.len(), 1);
        assert_eq!(data.span_count(), 2);
        assert_eq!(data.extent(), TimeRange::new(100.0, 400.0));
        assert_eq!(data.metadata.total_spans, Some(2));
    }

    #[test]
    fn test_missing_header_rejected() {
        let input = r#"{"type":"track","id":1,"name":"Main"}"#;
        assert!(parse_profile_lines(Cursor::new(input)).is_err());
    }

    #[test]
    fn test_span_for_unknown_track_rejected() {
        let input = concat!(
            r#"{"type":"header","version":"1.0","metadata":{}}"#,
            "\n",
            r#"{"type":"span","track_id":9,"start":0.0,"end":1.0,"name":"x","category":"other"}"#,
        );
        assert!(parse_profile_lines(Cursor::new(input)).is_err());
    }

    #[test]
    fn test_inverted_span_rejected() {
        let input = concat!(
            r#"{"type":"header","version":"1.0","metadata":{}}"#,
            "\n",
            r#"{"type":"track","id":1,"name":"Main"}"#,
            "\n",
            r#"{"type":"span","track_id":1,"start":5.0,"end":1.0,"name":"x","category":"other"}"#,
        );
        assert!(parse_profile_lines(Cursor::new(input)).is_err());
    }

    #[test]
    fn test_empty_profile_extent_is_zero() {
        let input = r#"{"type":"header","version":"1.0","metadata":{}}"#;
        let data = parse_profile_lines(Cursor::new(input)).unwrap();
        assert_eq!(data.extent(), TimeRange::new(0.0, 0.0));
        assert_eq!(data.metadata.start_time(), 0.0);
    }
}
