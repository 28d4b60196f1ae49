//! DBSCAN on a simple 2D dataset, via both neighbor-lookup strategies.

use denscan::{Dbscan, Partition, Result, SpatialIndex};

fn print_partition(partition: &Partition<'_, [f64; 2]>) {
    for (k, cluster) in partition.clusters().iter().enumerate() {
        let members: Vec<String> = cluster
            .iter()
            .map(|p| format!("({:5.1}, {:5.1})", p[0], p[1]))
            .collect();
        println!("  cluster {} => {}", k, members.join(" "));
    }
    for outlier in partition.outliers() {
        println!("  outlier   => ({:5.1}, {:5.1})", outlier[0], outlier[1]);
    }
}

fn main() -> Result<()> {
    // Three well-separated clusters in 2D, plus one stray point.
    let data: Vec<[f64; 2]> = vec![
        // Cluster A (near origin)
        [0.0, 0.0],
        [0.1, 0.2],
        [0.2, 0.1],
        [-0.1, 0.1],
        // Cluster B (near (5, 5))
        [5.0, 5.0],
        [5.1, 4.9],
        [4.9, 5.1],
        [5.2, 5.2],
        // Cluster C (near (10, 0))
        [10.0, 0.0],
        [10.1, 0.1],
        [9.9, -0.1],
        [10.2, 0.2],
        // Stray
        [20.0, 20.0],
    ];

    let dbscan = Dbscan::new(1.0, 2);

    // --- Exhaustive: caller-supplied distance function ---
    let euclidean = |a: &[f64; 2], b: &[f64; 2]| -> Result<f64> {
        Ok(((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt())
    };
    let partition = dbscan.cluster(&data, euclidean)?;
    println!("=== DBSCAN, exhaustive (eps=1.0, min_points=2) ===");
    print_partition(&partition);

    // --- Indexed: kd-tree built once over the same points ---
    let index = SpatialIndex::build(&data);
    let indexed = dbscan.cluster_indexed(&data, &index)?;
    println!("\n=== DBSCAN, kd-tree (eps=1.0, min_points=2) ===");
    print_partition(&indexed);

    assert_eq!(partition, indexed);
    println!("\nBoth strategies produced the same partition.");
    Ok(())
}
