//! Report rendering for the terminal.
//!
//! The analysis crate only produces values; sinks here decide how they
//! reach the user.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracelens_analysis::{PathReport, SummaryReport};

const RULE_WIDTH: usize = 60;

/// Receives computed reports in pipeline order.
pub trait ReportSink {
    fn loading(&mut self, path: &Path) -> io::Result<()>;
    fn summary(&mut self, report: &SummaryReport) -> io::Result<()>;
    fn path(&mut self, report: &PathReport) -> io::Result<()>;
    fn exported(&mut self, path: &Path, entries: usize) -> io::Result<()>;
    fn finish(&mut self) -> io::Result<()>;
}

/// Human-readable blocks, numbers rounded to `precision` places.
pub struct TextReport<W: Write> {
    out: W,
    precision: usize,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W, precision: usize) -> Self {
        Self { out, precision }
    }

    fn num(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.precision)
    }

    fn banner(&mut self, title: &str) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out, "\n{rule}")?;
        writeln!(self.out, "{title}")?;
        writeln!(self.out, "{rule}")
    }

    fn rule(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n{}", "=".repeat(RULE_WIDTH))
    }
}

impl<W: Write> ReportSink for TextReport<W> {
    fn loading(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "Loading: {}", path.display())
    }

    fn summary(&mut self, report: &SummaryReport) -> io::Result<()> {
        self.banner("ANIMATION SUMMARY")?;

        writeln!(self.out, "\nMetadata:")?;
        writeln!(self.out, "  - Resolution: {}x{}", report.width, report.height)?;
        writeln!(self.out, "  - FPS: {}", report.frame_rate)?;
        writeln!(self.out, "  - Grid cell size: {}", report.split_len)?;
        writeln!(self.out, "  - Object skip rate: {}", report.object_skip_rate)?;
        writeln!(self.out, "  - Declared frames: {}", report.declared_frames)?;
        writeln!(self.out, "  - Hand dimensions: {}", report.hand_dimensions)?;

        writeln!(self.out, "\nDrawing sequence:")?;
        writeln!(self.out, "  - Recorded frames: {}", report.recorded_frames)?;
        match (report.first_tile, report.last_tile) {
            (Some(first), Some(last)) => {
                writeln!(self.out, "  - First tile drawn: grid position {first}")?;
                writeln!(self.out, "  - Last tile drawn: grid position {last}")?;
            }
            _ => {
                writeln!(self.out, "  - First tile drawn: n/a")?;
                writeln!(self.out, "  - Last tile drawn: n/a")?;
            }
        }
        match report.estimated_duration_secs {
            Some(secs) => {
                let secs = self.num(secs);
                writeln!(
                    self.out,
                    "  - Estimated drawing duration: {secs} s (frames / fps)"
                )?;
            }
            None => writeln!(self.out, "  - Estimated drawing duration: n/a")?,
        }

        self.rule()
    }

    fn path(&mut self, report: &PathReport) -> io::Result<()> {
        self.banner("DRAWING PATH ANALYSIS")?;

        let Some(bounds) = report.bounds else {
            writeln!(self.out, "No frames to analyze.")?;
            return self.rule();
        };

        match report.distance {
            Some(distance) => {
                let (total, average, max_step) = (
                    self.num(distance.total),
                    self.num(distance.average),
                    self.num(distance.max_step),
                );
                writeln!(self.out, "\nTotal hand travel: {total} px")?;
                writeln!(self.out, "Average distance between frames: {average} px")?;
                writeln!(self.out, "Longest single step: {max_step} px")?;
            }
            None => {
                writeln!(self.out, "\nTotal hand travel: n/a (needs at least 2 frames)")?;
                writeln!(self.out, "Average distance between frames: n/a")?;
            }
        }

        let x = (
            self.num(bounds.min_x),
            self.num(bounds.max_x),
            self.num(bounds.x_extent),
        );
        let y = (
            self.num(bounds.min_y),
            self.num(bounds.max_y),
            self.num(bounds.y_extent),
        );
        writeln!(self.out, "\nDrawing area:")?;
        writeln!(self.out, "  - X: {} -> {} (extent: {} px)", x.0, x.1, x.2)?;
        writeln!(self.out, "  - Y: {} -> {} (extent: {} px)", y.0, y.1, y.2)?;

        self.rule()
    }

    fn exported(&mut self, path: &Path, entries: usize) -> io::Result<()> {
        writeln!(
            self.out,
            "\nDrawing sequence exported to: {} ({entries} entries)",
            path.display()
        )
    }

    fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out, "\nAnalysis complete.")?;
        self.out.flush()
    }
}

/// Collects every report and prints one JSON document at the end.
pub struct JsonReport<W: Write> {
    out: W,
    document: JsonDocument,
}

#[derive(Debug, Default, Serialize)]
struct JsonDocument {
    input: Option<PathBuf>,
    summary: Option<SummaryReport>,
    path: Option<PathReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    export: Option<ExportNote>,
}

#[derive(Debug, Serialize)]
struct ExportNote {
    path: PathBuf,
    entries: usize,
}

impl<W: Write> JsonReport<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            document: JsonDocument::default(),
        }
    }
}

impl<W: Write> ReportSink for JsonReport<W> {
    fn loading(&mut self, path: &Path) -> io::Result<()> {
        self.document.input = Some(path.to_path_buf());
        Ok(())
    }

    fn summary(&mut self, report: &SummaryReport) -> io::Result<()> {
        self.document.summary = Some(report.clone());
        Ok(())
    }

    fn path(&mut self, report: &PathReport) -> io::Result<()> {
        self.document.path = Some(report.clone());
        Ok(())
    }

    fn exported(&mut self, path: &Path, entries: usize) -> io::Result<()> {
        self.document.export = Some(ExportNote {
            path: path.to_path_buf(),
            entries,
        });
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, &self.document)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracelens_analysis::{analyze_path, summarize};
    use tracelens_trace_model::record::{AnimationRecord, Frame, Metadata};

    fn two_frame_record() -> AnimationRecord {
        AnimationRecord::new(
            Metadata {
                total_frames: 2,
                ..Metadata::new(800, 600, 2.0)
            },
            vec![
                Frame::new(0, 0.0, 0.0, 0, 0),
                Frame::new(1, 3.0, 4.0, 1, 0),
            ],
        )
    }

    fn render_text(record: &AnimationRecord, precision: usize) -> String {
        let mut buf = Vec::new();
        let mut sink = TextReport::new(&mut buf, precision);
        sink.summary(&summarize(record)).unwrap();
        sink.path(&analyze_path(record)).unwrap();
        sink.finish().unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_report_rounds_to_precision() {
        let text = render_text(&two_frame_record(), 2);
        assert!(text.contains("Resolution: 800x600"));
        assert!(text.contains("FPS: 2\n"));
        assert!(text.contains("First tile drawn: grid position [0, 0]"));
        assert!(text.contains("Last tile drawn: grid position [1, 0]"));
        assert!(text.contains("Estimated drawing duration: 1.00 s"));
        assert!(text.contains("Total hand travel: 5.00 px"));
        assert!(text.contains("Average distance between frames: 5.00 px"));
        assert!(text.contains("X: 0.00 -> 3.00 (extent: 3.00 px)"));
        assert!(text.contains("Y: 0.00 -> 4.00 (extent: 4.00 px)"));
        assert!(text.ends_with("Analysis complete.\n"));
    }

    #[test]
    fn test_text_report_honours_custom_precision() {
        let text = render_text(&two_frame_record(), 0);
        assert!(text.contains("Total hand travel: 5 px"));
        assert!(text.contains("Estimated drawing duration: 1 s"));
    }

    #[test]
    fn test_text_report_marks_empty_trace_not_applicable() {
        let record = AnimationRecord::new(Metadata::new(10, 10, 30.0), vec![]);
        let text = render_text(&record, 2);
        assert!(text.contains("Recorded frames: 0"));
        assert!(text.contains("First tile drawn: n/a"));
        assert!(text.contains("Estimated drawing duration: n/a"));
        assert!(text.contains("No frames to analyze."));
        assert!(!text.contains("Total hand travel"));
    }

    #[test]
    fn test_text_report_single_frame_has_area_but_no_travel() {
        let record = AnimationRecord::new(
            Metadata::new(10, 10, 30.0),
            vec![Frame::new(0, 4.0, 6.0, 0, 0)],
        );
        let text = render_text(&record, 2);
        assert!(text.contains("Total hand travel: n/a"));
        assert!(text.contains("X: 4.00 -> 4.00 (extent: 0.00 px)"));
    }

    #[test]
    fn test_json_report_is_single_document() {
        let record = two_frame_record();
        let mut buf = Vec::new();
        {
            let mut sink = JsonReport::new(&mut buf);
            sink.loading(Path::new("trace.json")).unwrap();
            sink.summary(&summarize(&record)).unwrap();
            sink.path(&analyze_path(&record)).unwrap();
            sink.exported(Path::new("seq.json"), 2).unwrap();
            sink.finish().unwrap();
        }

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["input"], "trace.json");
        assert_eq!(value["summary"]["estimated_duration_secs"], 1.0);
        assert_eq!(value["summary"]["last_tile"], serde_json::json!([1, 0]));
        assert_eq!(value["path"]["distance"]["total"], 5.0);
        assert_eq!(value["path"]["bounds"]["y_extent"], 4.0);
        assert_eq!(value["export"]["entries"], 2);
    }

    #[test]
    fn test_json_report_uses_null_for_missing_values() {
        let record = AnimationRecord::new(Metadata::new(10, 10, 30.0), vec![]);
        let mut buf = Vec::new();
        {
            let mut sink = JsonReport::new(&mut buf);
            sink.summary(&summarize(&record)).unwrap();
            sink.path(&analyze_path(&record)).unwrap();
            sink.finish().unwrap();
        }

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert!(value["summary"]["first_tile"].is_null());
        assert!(value["summary"]["estimated_duration_secs"].is_null());
        assert!(value["path"]["distance"].is_null());
        assert!(value["path"]["bounds"].is_null());
        assert!(value.get("export").is_none());
    }
}
