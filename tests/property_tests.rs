use denscan::{Dbscan, Result, SpatialIndex};
use proptest::prelude::*;

fn euclidean(a: &[f64; 2], b: &[f64; 2]) -> Result<f64> {
    Ok(((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt())
}

fn points_strategy() -> impl Strategy<Value = Vec<[f64; 2]>> {
    prop::collection::vec(prop::array::uniform2(-10.0f64..10.0), 0..40)
}

proptest! {
    #[test]
    fn prop_partition_covers_every_point(
        data in points_strategy(),
        epsilon in 0.1f64..5.0,
        min_points in 1usize..5
    ) {
        let partition = Dbscan::new(epsilon, min_points)
            .cluster(&data, euclidean)
            .unwrap();

        // Every input index lands in exactly one cluster or the outlier
        // list: never both, never duplicated, never dropped.
        let mut seen = vec![0usize; data.len()];
        for cluster in partition.clusters() {
            prop_assert!(!cluster.is_empty());
            for member in cluster {
                let idx = data
                    .iter()
                    .position(|p| std::ptr::eq(p, *member))
                    .expect("member must come from the input");
                seen[idx] += 1;
            }
        }
        for outlier in partition.outliers() {
            let idx = data
                .iter()
                .position(|p| std::ptr::eq(p, *outlier))
                .expect("outlier must come from the input");
            seen[idx] += 1;
        }
        prop_assert!(seen.iter().all(|&count| count == 1));
    }

    #[test]
    fn prop_clustering_is_deterministic(
        data in points_strategy(),
        epsilon in 0.1f64..5.0,
        min_points in 1usize..5
    ) {
        let dbscan = Dbscan::new(epsilon, min_points);

        let first = dbscan.cluster(&data, euclidean).unwrap();
        let second = dbscan.cluster(&data, euclidean).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_strategies_produce_the_same_partition(
        data in points_strategy(),
        epsilon in 0.1f64..5.0,
        min_points in 1usize..5
    ) {
        let dbscan = Dbscan::new(epsilon, min_points);

        let exhaustive = dbscan.cluster(&data, euclidean).unwrap();
        let index = SpatialIndex::build(&data);
        let indexed = dbscan.cluster_indexed(&data, &index).unwrap();

        prop_assert_eq!(exhaustive, indexed);
    }

    #[test]
    fn prop_min_points_one_leaves_no_outliers(
        data in points_strategy(),
        epsilon in 0.1f64..5.0
    ) {
        let partition = Dbscan::new(epsilon, 1).cluster(&data, euclidean).unwrap();

        // Every point is its own core, so each belongs to some cluster.
        prop_assert!(partition.outliers().is_empty());
        let total: usize = partition.clusters().iter().map(Vec::len).sum();
        prop_assert_eq!(total, data.len());
    }
}
