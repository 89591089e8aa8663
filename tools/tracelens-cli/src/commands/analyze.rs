//! Load a trace, report on it, and optionally export its sequence.

use std::path::Path;

use tracelens_analysis::{analyze_path, summarize};
use tracelens_trace_model::load_record;

use crate::commands::export;
use crate::render::ReportSink;

pub fn run(
    input: &Path,
    export_to: Option<&Path>,
    sink: &mut impl ReportSink,
) -> anyhow::Result<()> {
    sink.loading(input)?;

    let record =
        load_record(input).map_err(|e| anyhow::anyhow!("Failed to load animation trace: {e}"))?;
    tracing::info!(
        path = %input.display(),
        frames = record.frames().len(),
        "loaded animation trace"
    );

    let summary = summarize(&record);
    if !summary.frame_count_matches_declared {
        tracing::warn!(
            declared = summary.declared_frames,
            recorded = summary.recorded_frames,
            "declared frame count differs from recorded frames"
        );
    }
    if summary.out_of_order_frames > 0 {
        tracing::warn!(
            regressions = summary.out_of_order_frames,
            "frame numbers go backwards in the recorded sequence"
        );
    }
    sink.summary(&summary)?;

    let path_report = analyze_path(&record);
    sink.path(&path_report)?;

    if let Some(output) = export_to {
        let written = export::write_sequence(&record, output)
            .map_err(|e| anyhow::anyhow!("Failed to export sequence: {e}"))?;
        sink.exported(output, written)?;
    }

    sink.finish()?;
    Ok(())
}
