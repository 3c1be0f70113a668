//! Segmentation demo on the bundled mall customer sample.
//!
//! Clusters the 50 customers on income and spending score, prints per-cluster
//! statistics and the silhouette merit, then sweeps k = 2..=8 the way the
//! interactive explorer's "optimal clusters" panel does.
//!
//! Run with : cargo run --example mall_customers

use anyhow::Result;

use cpu_time::ProcessTime;
use std::time::{Duration, SystemTime};

use segcluster::dataset::{self, INCOME_SPENDING};
use segcluster::kmeans::KMeans;
use segcluster::merit::{silhouette_score, sweep_k};

fn main() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    log::info!("in mall_customers demo");
    //
    let points = dataset::mall_customers();
    println!("loaded {} customer records", points.len());
    //
    let cpu_start = ProcessTime::now();
    let sys_now = SystemTime::now();
    //
    //===================================
    let nb_cluster_asked = 3;
    let max_iterations = 20;
    //===================================
    //
    let mut rng = rand::rng();
    let kmeans = KMeans::new(nb_cluster_asked, max_iterations, INCOME_SPENDING);
    let res = kmeans.cluster(&points, &mut rng)?;
    //
    let cpu_time: Duration = cpu_start.elapsed();
    println!(
        "  sys time(us) {:?} cpu time(us) {:?}",
        sys_now.elapsed().unwrap().as_micros(),
        cpu_time.as_micros()
    );
    //
    println!(
        "converged in {} iterations (budget {})",
        res.get_iterations_used(),
        max_iterations
    );
    for (cluster, size) in res.cluster_sizes().iter().enumerate() {
        match res.cluster_mean(cluster, INCOME_SPENDING) {
            Some(mean) => println!(
                "cluster {} : {:2} customers, avg income {:.1} k$, avg spending {:.1}",
                cluster, size, mean[0], mean[1]
            ),
            None => println!("cluster {} : empty", cluster),
        }
    }
    for centroid in res.get_centroids() {
        log::info!("centroid at {:?}", centroid.get_position());
    }
    //
    let score = silhouette_score(res.get_labeled_points(), INCOME_SPENDING);
    println!("silhouette score : {:.3}", score);
    //
    // profile candidate cluster counts, as the explorer's analysis panel does
    println!("\nsilhouette by cluster count (features income/spending)");
    let profile = sweep_k(&points, 2..=8, max_iterations, INCOME_SPENDING, &mut rng)?;
    for merit in &profile {
        println!(
            "k = {} : silhouette {:.3}, {} iterations",
            merit.k, merit.silhouette, merit.iterations_used
        );
    }
    //
    Ok(())
} // end of main
