//! Plain-text analysis reports.
//!
//! Renders whole-store field statistics (with a frequency table) and
//! per-cluster magnitude/depth summaries to any [`Write`].

use std::io::{self, Write};

use crate::events::{DEPTH, MAGNITUDE};
use crate::stats::{frequency_table, Summary};
use crate::store::PointStore;

/// Print mean, median, standard deviation and frequency table for `values`.
///
/// `unit` is appended to each statistic (e.g. `" miles"`).
pub fn write_field_report<W: Write>(
    out: &mut W,
    label: &str,
    unit: &str,
    values: &[f64],
) -> io::Result<()> {
    let Some(summary) = Summary::of(values) else {
        return writeln!(out, "No {label} data");
    };

    write_summary(out, "", label, unit, &summary)?;

    writeln!(out, "{:>10}  {:>5}", "value", "count")?;
    for (value, count) in frequency_table(values) {
        writeln!(out, "{value:>10.2}  {count:>5}")?;
    }
    Ok(())
}

/// Print magnitude and depth summaries for every cluster, by index.
pub fn write_cluster_report<W: Write>(
    out: &mut W,
    clusters: &[Vec<usize>],
    store: &PointStore,
) -> io::Result<()> {
    for (idx, members) in clusters.iter().enumerate() {
        writeln!(out, "Analysis of cluster {idx} ({} events)", members.len())?;

        let field = |i: usize| -> Vec<f64> {
            members
                .iter()
                .filter_map(|&id| store.get(id))
                .filter_map(|r| r.aux.get(i).copied())
                .collect()
        };

        match (Summary::of(&field(MAGNITUDE)), Summary::of(&field(DEPTH))) {
            (Some(mag), Some(depth)) => {
                writeln!(out, "  Analysis of magnitude data")?;
                write_summary(out, "    ", "magnitude", "", &mag)?;
                writeln!(out, "  Analysis of depth data")?;
                write_summary(out, "    ", "depth", " miles", &depth)?;
            }
            _ => writeln!(out, "  (no events)")?,
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_summary<W: Write>(
    out: &mut W,
    indent: &str,
    label: &str,
    unit: &str,
    summary: &Summary,
) -> io::Result<()> {
    writeln!(out, "{indent}Mean {label} = {:.1}{unit}", summary.mean)?;
    writeln!(out, "{indent}Median {label} = {:.1}{unit}", summary.median)?;
    writeln!(out, "{indent}Standard deviation = {:.2}{unit}", summary.std_dev)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn field_report_lists_stats_and_frequencies() {
        let text = render(|out| write_field_report(out, "depth", " miles", &[3.0, 1.0, 3.0]));
        assert!(text.contains("Mean depth = 2.3 miles"));
        assert!(text.contains("Median depth = 3.0 miles"));
        assert!(text.contains("Standard deviation = 0.94 miles"));
        assert!(text.contains("      1.00      1"));
        assert!(text.contains("      3.00      2"));
    }

    #[test]
    fn field_report_without_values() {
        let text = render(|out| write_field_report(out, "magnitude", "", &[]));
        assert_eq!(text, "No magnitude data\n");
    }

    #[test]
    fn cluster_report_marks_empty_clusters() {
        let mut store = PointStore::new();
        store.push([0.0, 0.0], vec![2.0, 10.0]);
        store.push([1.0, 0.0], vec![4.0, 20.0]);

        let text = render(|out| write_cluster_report(out, &[vec![1, 2], vec![]], &store));
        assert!(text.contains("Analysis of cluster 0 (2 events)"));
        assert!(text.contains("    Mean magnitude = 3.0"));
        assert!(text.contains("    Median depth = 15.0 miles"));
        assert!(text.contains("Analysis of cluster 1 (0 events)\n  (no events)"));
    }
}
