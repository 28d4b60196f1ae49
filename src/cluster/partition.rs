//! Grouping labeled points into the final clusters/outliers pair.

/// Result of a clustering run: clusters of borrowed input values plus the
/// outliers that joined no cluster.
///
/// Every input value appears in exactly one cluster or in the outlier list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<'a, P> {
    clusters: Vec<Vec<&'a P>>,
    outliers: Vec<&'a P>,
}

impl<'a, P> Partition<'a, P> {
    /// Group `points` by their final labels.
    ///
    /// `labels` holds one entry per point; `n_clusters` is the number of
    /// labels handed out, so every `Some(k)` satisfies `k < n_clusters`.
    pub(crate) fn from_labels(
        points: &'a [P],
        labels: &[Option<usize>],
        n_clusters: usize,
    ) -> Self {
        debug_assert_eq!(points.len(), labels.len());

        let mut clusters: Vec<Vec<&'a P>> = vec![Vec::new(); n_clusters];
        let mut outliers = Vec::new();
        for (point, label) in points.iter().zip(labels) {
            match label {
                Some(k) => clusters[*k].push(point),
                None => outliers.push(point),
            }
        }
        Self { clusters, outliers }
    }

    pub(crate) fn empty() -> Self {
        Self {
            clusters: Vec::new(),
            outliers: Vec::new(),
        }
    }

    /// The clusters, ordered by discovery (ascending label).
    ///
    /// Within a cluster, members keep their original input order, so repeated
    /// runs over the same input produce identical output.
    pub fn clusters(&self) -> &[Vec<&'a P>] {
        &self.clusters
    }

    /// Values that joined no cluster, in input order.
    pub fn outliers(&self) -> &[&'a P] {
        &self.outliers
    }

    /// Number of clusters discovered.
    pub fn n_clusters(&self) -> usize {
        self.clusters.len()
    }

    /// Whether the run produced neither clusters nor outliers.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty() && self.outliers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_label_in_input_order() {
        let points = vec![10.0, 20.0, 30.0, 40.0, 50.0];
        let labels = vec![Some(0), Some(1), Some(0), None, Some(1)];

        let partition = Partition::from_labels(&points, &labels, 2);

        assert_eq!(partition.n_clusters(), 2);
        assert_eq!(partition.clusters()[0], vec![&10.0, &30.0]);
        assert_eq!(partition.clusters()[1], vec![&20.0, &50.0]);
        assert_eq!(partition.outliers(), &[&40.0]);
    }

    #[test]
    fn all_outliers() {
        let points = vec![1.0, 2.0];
        let labels = vec![None, None];

        let partition = Partition::from_labels(&points, &labels, 0);

        assert_eq!(partition.n_clusters(), 0);
        assert_eq!(partition.outliers().len(), 2);
        assert!(!partition.is_empty());
    }

    #[test]
    fn empty_partition() {
        let partition = Partition::<f64>::empty();
        assert!(partition.is_empty());
        assert_eq!(partition.n_clusters(), 0);
        assert!(partition.outliers().is_empty());
    }
}
