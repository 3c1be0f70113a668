//! Mall customer records : the sample dataset the segmentation explorer ships
//! with, plus a csv loader for external files with the same columns.
//!
//! Each record carries age, annual income (k$) and a spending score (1-100).
//! Points expose them in that order; see the `FEATURE_*` constants. The
//! dataset is only ever an input to the clustering core, never baked into it.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::kmeans::{FeaturePair, Point};

/// rank of the age feature in a customer point
pub const FEATURE_AGE: usize = 0;
/// rank of the annual income feature in a customer point
pub const FEATURE_INCOME: usize = 1;
/// rank of the spending score feature in a customer point
pub const FEATURE_SPENDING: usize = 2;

/// the conventional feature pair for customer segmentation
pub const INCOME_SPENDING: FeaturePair = FeaturePair {
    x: FEATURE_INCOME,
    y: FEATURE_SPENDING,
};

/// One row of a customer file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub id: usize,
    pub age: f64,
    pub income: f64,
    pub spending_score: f64,
}

impl CustomerRecord {
    /// point with features ordered (age, income, spending score)
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.id, vec![self.age, self.income, self.spending_score])
    }
} // end of impl CustomerRecord

/// Read customer records from csv with headers `id,age,income,spendingScore`.
pub fn customers_from_csv<R: Read>(reader: R) -> Result<Vec<CustomerRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: CustomerRecord = result?;
        records.push(record);
    }
    log::info!("number of customer records loaded : {:?}", records.len());
    Ok(records)
} // end of customers_from_csv

/// convert records to clusterable points
pub fn points_from_records(records: &[CustomerRecord]) -> Vec<Point<f64>> {
    records.iter().map(|r| r.to_point()).collect()
}

/// The 50-record sample the explorer demonstrates on.
pub fn mall_customers() -> Vec<Point<f64>> {
    SAMPLE
        .iter()
        .map(|&(id, age, income, spending)| Point::new(id, vec![age, income, spending]))
        .collect()
}

// (id, age, income k$, spending score)
const SAMPLE: [(usize, f64, f64, f64); 50] = [
    (1, 19., 15., 39.),
    (2, 21., 15., 81.),
    (3, 20., 16., 6.),
    (4, 23., 16., 77.),
    (5, 31., 17., 40.),
    (6, 22., 17., 76.),
    (7, 35., 18., 6.),
    (8, 23., 18., 94.),
    (9, 64., 19., 3.),
    (10, 30., 19., 72.),
    (11, 67., 19., 14.),
    (12, 35., 20., 99.),
    (13, 58., 20., 15.),
    (14, 24., 20., 77.),
    (15, 37., 20., 13.),
    (16, 22., 20., 79.),
    (17, 35., 21., 35.),
    (18, 20., 21., 66.),
    (19, 52., 23., 29.),
    (20, 35., 23., 98.),
    (21, 35., 24., 35.),
    (22, 25., 25., 73.),
    (23, 46., 25., 5.),
    (24, 31., 25., 73.),
    (25, 54., 28., 14.),
    (26, 29., 28., 82.),
    (27, 45., 28., 32.),
    (28, 35., 28., 61.),
    (29, 40., 29., 31.),
    (30, 23., 29., 87.),
    (31, 60., 30., 4.),
    (32, 21., 30., 73.),
    (33, 53., 33., 4.),
    (34, 18., 33., 92.),
    (35, 49., 33., 14.),
    (36, 21., 33., 81.),
    (37, 42., 34., 17.),
    (38, 30., 34., 73.),
    (39, 36., 37., 26.),
    (40, 20., 37., 75.),
    (41, 65., 38., 35.),
    (42, 24., 38., 92.),
    (43, 48., 39., 36.),
    (44, 31., 39., 61.),
    (45, 49., 39., 28.),
    (46, 24., 39., 65.),
    (47, 50., 40., 55.),
    (48, 27., 40., 47.),
    (49, 29., 40., 42.),
    (50, 31., 40., 42.),
];

//========================================================================

// end of mod tests
