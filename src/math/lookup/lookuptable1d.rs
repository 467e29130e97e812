use thiserror::Error;

use crate::math::curve::curve::Curve;
use crate::math::lookup::search::{Binary, BracketSearch};

// ─────────────────────────────────────────────
// LookupTable1D
// ─────────────────────────────────────────────
//
// 夾取式（clamped）分段線性查表：
//   查詢值低於 x[0] 時回傳 y[0]，高於 x[n-1] 時回傳 y[n-1]，
//   區間內回傳 y[i] + (y[i+1]-y[i]) * (q-x[i]) / (x[i+1]-x[i])。
//
// 節點命中須位元精確：搜尋回傳第一個 x >= q 的索引，等值時直接回傳 y，
// 不走插值公式（y_l + (y_h-y_l) 會引入捨入誤差）。
//
// 重複節點（x[i] == x[i+1]）：等值查詢落在重複段的第一個索引，
// 回傳較低樣本的 y（左連續階梯）；括住區間必為正寬度，不會除以零。

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("independent variable is not monotonically non-decreasing")]
    NonMonotonicSorting,
    #[error("independent and dependent variables differ in length ({indep} vs {dep})")]
    LengthMismatch { indep: usize, dep: usize },
    #[error("a lookup table needs at least two samples, got {0}")]
    TooFewSamples(usize),
}

pub struct LookupTable1D<Search = Binary> {
    x: Vec<f64>,
    y: Vec<f64>,
    search: Search,
}

fn check_samples(x: &[f64], y: &[f64]) -> Result<(), TableError> {
    if x.len() != y.len() {
        return Err(TableError::LengthMismatch {
            indep: x.len(),
            dep: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(TableError::TooFewSamples(x.len()));
    }
    // is_sorted 容許相等的相鄰值；NaN 會使比較失敗而被拒絕
    if !x.is_sorted() {
        return Err(TableError::NonMonotonicSorting);
    }
    Ok(())
}

impl LookupTable1D<Binary> {
    /// 以預設的二分搜尋建表。
    ///
    /// ```
    /// use lutgen::math::lookup::lookuptable1d::LookupTable1D;
    ///
    /// let table = LookupTable1D::new(vec![0., 5., 10.], vec![0., 10., 20.]).unwrap();
    /// assert_eq!(table.lookup(2.5), 5.0);
    /// assert_eq!(table.lookup(-1.0), 0.0);
    /// assert_eq!(table.lookup(42.0), 20.0);
    /// ```
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<LookupTable1D<Binary>, TableError> {
        Self::with_search(x, y, Binary)
    }
}

impl<Search> LookupTable1D<Search>
where
    Search: BracketSearch,
{
    pub fn with_search(
        x: Vec<f64>,
        y: Vec<f64>,
        search: Search,
    ) -> Result<LookupTable1D<Search>, TableError> {
        check_samples(&x, &y)?;
        Ok(LookupTable1D { x, y, search })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// 查表。非有限（NaN）查詢不在契約內。
    pub fn lookup(&self, query: f64) -> f64 {
        let n = self.x.len();
        if query <= self.x[0] {
            return self.y[0];
        }
        if query >= self.x[n - 1] {
            return self.y[n - 1];
        }

        let hi = self.search.locate(&self.x, query);
        if self.x[hi] == query {
            return self.y[hi];
        }

        let lo = hi - 1;
        let t = (query - self.x[lo]) / (self.x[hi] - self.x[lo]);
        self.y[lo] + (self.y[hi] - self.y[lo]) * t
    }
}

impl<Search> Curve for LookupTable1D<Search>
where
    Search: BracketSearch,
{
    fn value(&self, x: f64) -> f64 {
        self.lookup(x)
    }
}
