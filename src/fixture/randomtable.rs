use rand::distributions::Uniform;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::math::lookup::lookuptable1d::{LookupTable1D, TableError};

pub const SEED_FACTOR: u64 = 12345;

pub const X_RANGE_MAX: f64 = 100.0;
pub const Y_RANGE_MAX: f64 = 10.0;

/// 以長度決定種子（同長度永遠得到同一張表）。
///
/// x 與 y 各自獨立抽樣，之後只對 x 排序、y 不跟著重排：
/// 兩組樣本本就獨立，等價於在單調的 x 網格上掛任意隨機 y。
pub fn random_table(length: usize) -> Result<LookupTable1D, TableError> {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED_FACTOR * length as u64);
    let x_range = Uniform::new(0.0, X_RANGE_MAX);
    let y_range = Uniform::new(0.0, Y_RANGE_MAX);

    let mut x: Vec<f64> = (&mut rng).sample_iter(x_range).take(length).collect();
    let y: Vec<f64> = (&mut rng).sample_iter(y_range).take(length).collect();
    x.sort_by(f64::total_cmp);

    LookupTable1D::new(x, y)
}
