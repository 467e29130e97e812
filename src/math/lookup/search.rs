// ─────────────────────────────────────────────
// BracketSearch
// ─────────────────────────────────────────────
//
// 在已排序的 x 序列中定位括住查詢值的區間。
// 前置條件：x 非遞減且 x[0] < query < x[n-1]。
// 回傳第一個滿足 x[idx] >= query 的索引，必定落在 1..=n-1。

pub trait BracketSearch {
    fn locate(&self, x: &[f64], query: f64) -> usize;
}

/// 順序掃描，小表（約 20 個樣本以下）較快。
#[derive(Default, Clone, Copy)]
pub struct Linear;

/// 二分搜尋，O(log n)，為本 crate 的預設策略。
#[derive(Default, Clone, Copy)]
pub struct Binary;

impl BracketSearch for Linear {
    fn locate(&self, x: &[f64], query: f64) -> usize {
        x.iter()
            .position(|value| *value >= query)
            .unwrap_or(x.len() - 1)
    }
}

impl BracketSearch for Binary {
    fn locate(&self, x: &[f64], query: f64) -> usize {
        x.partition_point(|value| *value < query)
    }
}
