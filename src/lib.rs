//! Small clustering library behind a customer segmentation explorer.
//!
//! The crate provides:
//! - [`kmeans`] : iterative centroid-based partitioning (Lloyd iterations) over
//!   points compared on two caller-selected numeric features
//! - [`merit`] : a simplified silhouette score measuring cohesion versus
//!   separation of a clustering, and a merit sweep over candidate cluster counts
//! - [`dataset`] : the mall-customer sample dataset and a csv loader
//!
//! Centroid initialization is randomized, so re-running with identical inputs
//! may converge to a different local optimum. The random source is injectable
//! so tests can pin a seed.

use lazy_static::lazy_static;

lazy_static! {
    static ref LOG: u64 = init_log();
}

// install a logger facility
fn init_log() -> u64 {
    let _res = env_logger::try_init();
    1
}

pub mod dataset;
pub mod error;
pub mod kmeans;
pub mod merit;

pub use error::{Error, Result};
