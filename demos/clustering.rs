//! Jarvis-Patrick and DBSCAN on a small 3D dataset, printing clusters largest first.
//!
//! Run with `RUST_LOG=debug` to see the clusterers' stage logs.

use huddle::{ClusterReport, Clustering, Dbscan, JarvisPatrick};

fn print_report(name: &str, report: &ClusterReport) {
    println!("=== {name} ===");
    println!("{} clusters", report.num_clusters());
    for (rank, members) in report.ranked().enumerate() {
        println!("  cluster {rank:2} ({} points): {members:?}", members.len());
    }
    println!();
}

fn main() {
    env_logger::init();

    // Three well-separated groups in 3D, plus one stray point.
    let data: Vec<Vec<f32>> = vec![
        // Group A (near origin)
        vec![0.0, 0.0, 0.0],
        vec![0.1, 0.2, 0.0],
        vec![0.2, 0.1, 0.1],
        vec![-0.1, 0.1, 0.0],
        vec![0.0, -0.1, 0.1],
        // Group B (near (5, 5, 5))
        vec![5.0, 5.0, 5.0],
        vec![5.1, 4.9, 5.0],
        vec![4.9, 5.1, 5.1],
        vec![5.2, 5.2, 4.9],
        // Group C (near (10, 0, 0))
        vec![10.0, 0.0, 0.0],
        vec![10.1, 0.1, 0.0],
        vec![9.9, -0.1, 0.1],
        // Stray
        vec![20.0, 20.0, 20.0],
    ];

    let jp = JarvisPatrick::new(3, 1).fit(&data).unwrap();
    print_report("Jarvis-Patrick (m=3, p=1)", &jp);

    let db = Dbscan::new(1.0, 2).fit(&data).unwrap();
    print_report("DBSCAN (eps=1.0, min_pts=2)", &db);
    println!("noise points: {:?}", db.singletons());
}
