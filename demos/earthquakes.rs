//! K-means over a small synthetic Pacific Northwest event set, with
//! per-cluster magnitude and depth summaries.

use quakeclump::events::{read_events, DEPTH, MAGNITUDE};
use quakeclump::stats::summarize_clusters;
use quakeclump::Kmeans;

const EVENTS: &str = "\
# time,mag,...,latitude,longitude,...,depth
t,2.1,x,x,x,x,x,47.60,-122.30,x,12.0
t,1.4,x,x,x,x,x,47.70,-122.40,x,8.5
t,2.8,x,x,x,x,x,47.55,-122.10,x,15.1
t,3.2,x,x,x,x,x,46.20,-122.18,x,2.4
t,2.5,x,x,x,x,x,46.19,-122.20,x,1.9
t,1.9,x,x,x,x,x,46.21,-122.15,x,3.3
t,4.1,x,x,x,x,x,44.50,-127.90,x,10.0
t,3.7,x,x,x,x,x,44.70,-128.10,x,9.1
t,3.9,x,x,x,x,x,44.40,-127.70,x,11.6
";

fn main() {
    let store = read_events(EVENTS.as_bytes()).unwrap();

    let fit = Kmeans::new(3)
        .with_iterations(7)
        .with_seed(42)
        .fit(&store)
        .unwrap();

    let mags = summarize_clusters(&fit.clusters, &store, MAGNITUDE);
    let depths = summarize_clusters(&fit.clusters, &store, DEPTH);

    for (i, members) in fit.clusters.iter().enumerate() {
        let c = fit.centroids[i];
        println!(
            "cluster {} (centroid {:8.3}, {:7.3}): {} events",
            i,
            c[0],
            c[1],
            members.len()
        );
        match (mags[i], depths[i]) {
            (Some(m), Some(d)) => {
                println!(
                    "  magnitude: mean {:.1}, median {:.1}, std dev {:.2}",
                    m.mean, m.median, m.std_dev
                );
                println!(
                    "  depth:     mean {:.1}, median {:.1}, std dev {:.2} miles",
                    d.mean, d.median, d.std_dev
                );
            }
            _ => println!("  (empty)"),
        }
    }
}
