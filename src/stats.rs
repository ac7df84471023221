//! Descriptive statistics over record fields and clusters.

use crate::store::PointStore;

/// Mean and population variance, or `None` for an empty slice.
pub fn mean_variance(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    Some((mean, variance))
}

/// Median (mean of the two middle values for even lengths).
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Distinct values with their occurrence counts, ascending by value.
pub fn frequency_table(values: &[f64]) -> Vec<(f64, usize)> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut table: Vec<(f64, usize)> = Vec::new();
    for v in sorted {
        if let Some((last, count)) = table.last_mut() {
            if last.total_cmp(&v).is_eq() {
                *count += 1;
                continue;
            }
        }
        table.push((v, 1));
    }
    table
}

/// Summary of one numeric field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Number of values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median value.
    pub median: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl Summary {
    /// Summarize `values`, or `None` when empty.
    pub fn of(values: &[f64]) -> Option<Self> {
        let (mean, variance) = mean_variance(values)?;
        let median = median(values)?;
        Some(Self {
            count: values.len(),
            mean,
            median,
            std_dev: variance.sqrt(),
        })
    }
}

/// Values of auxiliary field `field` for every record in the store.
///
/// Records without that field are skipped.
pub fn field_values(store: &PointStore, field: usize) -> Vec<f64> {
    store.iter().filter_map(|r| r.aux.get(field).copied()).collect()
}

/// Summarize auxiliary field `field` for each cluster, by cluster index.
///
/// Empty clusters (and clusters whose records lack the field) yield `None`.
pub fn summarize_clusters(
    clusters: &[Vec<usize>],
    store: &PointStore,
    field: usize,
) -> Vec<Option<Summary>> {
    clusters
        .iter()
        .map(|members| {
            let values: Vec<f64> = members
                .iter()
                .filter_map(|&id| store.get(id))
                .filter_map(|r| r.aux.get(field).copied())
                .collect();
            Summary::of(&values)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_variance() {
        let (mean, var) = mean_variance(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(mean, 5.0);
        assert_eq!(var, 4.0);
        assert!(mean_variance(&[]).is_none());
    }

    #[test]
    fn median_odd_and_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn frequency_counts() {
        let table = frequency_table(&[1.5, 0.5, 1.5, 2.0, 0.5, 1.5]);
        assert_eq!(table, vec![(0.5, 2), (1.5, 3), (2.0, 1)]);
    }

    #[test]
    fn per_cluster_summaries() {
        let mut store = PointStore::new();
        store.push([0.0, 0.0], vec![1.0, 10.0]);
        store.push([0.0, 1.0], vec![3.0, 20.0]);
        store.push([9.0, 9.0], vec![5.0, 30.0]);

        let clusters = vec![vec![1, 2], vec![], vec![3]];
        let mags = summarize_clusters(&clusters, &store, 0);
        assert_eq!(mags.len(), 3);

        let first = mags[0].unwrap();
        assert_eq!(first.count, 2);
        assert_eq!(first.mean, 2.0);
        assert_eq!(first.median, 2.0);
        assert_eq!(first.std_dev, 1.0);
        assert!(mags[1].is_none());
        assert_eq!(mags[2].unwrap().std_dev, 0.0);

        assert_eq!(field_values(&store, 1), vec![10.0, 20.0, 30.0]);
    }
}
