//! Report formatting and quiet-level gating for the command line front end.
use std::io::{self, Write};

use sidewalk_cover::experiment::histogram::CoverageHistogram;
use sidewalk_cover::experiment::stats::CoverageStats;

/// What to print, and how. Replaces the report-configuration globals of the
/// original script.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Verbosity suppression level; each step hides one layer of output.
    pub quiet: u8,
    /// Divide results by the mesh-to-dot area ratio before reporting.
    pub scaled: bool,
}

impl ReportOptions {
    /// The dimensions header is shown below quiet level 2.
    pub fn show_header(&self) -> bool {
        self.quiet < 2
    }

    /// Raw per-trial values are shown below quiet level 1.
    pub fn show_trials(&self) -> bool {
        self.quiet < 1
    }
}

/// Resolves the raw `--binwidth` value. Values below 1 select one mesh-sized
/// bin; the second element reports whether that substitution happened.
pub fn normalize_binwidth(raw: Option<i64>, mesh_side: usize) -> Option<(usize, bool)> {
    raw.map(|value| {
        if value < 1 {
            (mesh_side * mesh_side, true)
        } else {
            (value as usize, false)
        }
    })
}

/// Header describing the mesh and dot dimensions.
pub fn header(mesh_side: usize, dot_side: usize) -> String {
    format!(
        "Sidewalk coverage\n\tMesh {m} X {m} = {ms}\n\tDot {d} X {d} = {ds}\n\n",
        m = mesh_side,
        ms = mesh_side * mesh_side,
        d = dot_side,
        ds = dot_side * dot_side,
    )
}

/// Summary block for statistics mode, with the scaled section when requested.
pub fn statistics(stats: &CoverageStats, opts: &ReportOptions, scale: f64) -> String {
    let mut out = format!(
        "Average = {:.6} STD = {:.6} Num = {}\n\n",
        stats.mean,
        stats.std_dev,
        stats.trials()
    );
    if opts.scaled {
        let (mean, std_dev) = stats.scaled(scale);
        out.push_str(&format!(
            "Scaled:\n\tAverage = {mean:.6} STD = {std_dev:.6} Scale factor = {scale:.6}\n\n"
        ));
    }
    out
}

/// Histogram lines, one per bin-count value, as raw counts or frequencies.
pub fn histogram_rows(hist: &CoverageHistogram, scaled: bool) -> Vec<String> {
    hist.iter()
        .map(|(index, count)| {
            if scaled {
                format!("\t{index}, {:.6}", hist.frequency(index))
            } else {
                format!("\t{index}, {count}")
            }
        })
        .collect()
}

/// Duplicates the histogram to `writer` as `index,count` or `index,frequency`
/// lines.
pub fn write_histogram_csv(
    writer: &mut dyn Write,
    hist: &CoverageHistogram,
    scaled: bool,
) -> io::Result<()> {
    for (index, count) in hist.iter() {
        if scaled {
            writeln!(writer, "{index},{:.6}", hist.frequency(index))?;
        } else {
            writeln!(writer, "{index},{count}")?;
        }
    }
    Ok(())
}
