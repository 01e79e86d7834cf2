//! Streaming writer for Lens profile files.

use crate::profile::ProfileLine;
use anyhow::{Context, Result};
use brotli::enc::BrotliEncoderParams;
use brotli::CompressorWriter;
use std::fs::File;
use std::io::{BufWriter, Write};

/// Writes profile lines to disk, counting what it emits for the footer.
pub struct ProfileWriter {
    writer: Box<dyn Write>,
    track_count: usize,
    span_count: usize,
}

impl ProfileWriter {
    /// Creates a writer for the given path.
    ///
    /// Brotli compression is enabled automatically when the path ends in
    /// `.br` (e.g. `capture.lprof.br`), at quality 6.
    pub fn new(file_path: &str) -> Result<Self> {
        let file = File::create(file_path)
            .with_context(|| format!("Failed to create file: {}", file_path))?;

        let writer: Box<dyn Write> = if file_path.ends_with(".br") {
            let params = BrotliEncoderParams {
                quality: 6,
                lgwin: 22,
                ..Default::default()
            };
            Box::new(CompressorWriter::with_params(
                BufWriter::new(file),
                4096,
                &params,
            ))
        } else {
            Box::new(BufWriter::new(file))
        };

        Ok(ProfileWriter {
            writer,
            track_count: 0,
            span_count: 0,
        })
    }

    pub fn write_header(&mut self, version: &str, metadata: serde_json::Value) -> Result<()> {
        self.write_line(&ProfileLine::Header {
            version: version.to_string(),
            metadata,
        })
    }

    pub fn write_track(&mut self, id: u64, name: &str) -> Result<()> {
        self.write_line(&ProfileLine::Track {
            id,
            name: name.to_string(),
        })?;
        self.track_count += 1;
        Ok(())
    }

    pub fn write_span(
        &mut self,
        track_id: u64,
        start: f64,
        end: f64,
        name: &str,
        category: &str,
    ) -> Result<()> {
        self.write_line(&ProfileLine::Span {
            track_id,
            start,
            end,
            name: name.to_string(),
            category: category.to_string(),
        })?;
        self.span_count += 1;
        Ok(())
    }

    /// Writes the footer with emitted totals and flushes the stream.
    pub fn finish(mut self) -> Result<()> {
        let footer = ProfileLine::Footer {
            total_tracks: Some(self.track_count),
            total_spans: Some(self.span_count),
        };
        self.write_line(&footer)?;
        self.writer.flush().context("Failed to flush profile")?;
        Ok(())
    }

    fn write_line(&mut self, line: &ProfileLine) -> Result<()> {
        let json = serde_json::to_string(line).context("Failed to serialize profile line")?;
        writeln!(self.writer, "{}", json).context("Failed to write profile line")?;
        Ok(())
    }
}
