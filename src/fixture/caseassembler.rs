use serde::{Deserialize, Serialize};

use crate::math::curve::curve::Curve;
use crate::math::lookup::lookuptable1d::LookupTable1D;
use crate::math::lookup::search::BracketSearch;

pub const QUERY_COUNT: usize = 100;
pub const QUERY_START: f64 = -10.0;
pub const QUERY_STOP: f64 = 110.0;

/// 序列化形式的單一測試案例：表格樣本與查詢／期望值的平行陣列。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TestCase {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub input: Vec<f64>,
    pub output: Vec<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TestCaseSet {
    pub clamped: Vec<TestCase>,
}

/// `count` 個均勻分佈的點，含首尾；尾端強制精確等於 `stop`。
/// 與查表的樣本數同理，`count` 至少為 2。
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    assert!(count >= 2, "linspace needs at least two points, got {count}");
    let step = (stop - start) / ((count - 1) as f64);
    let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
    values[count - 1] = stop;
    values
}

pub fn assemble<Search>(table: &LookupTable1D<Search>) -> TestCase
where
    Search: BracketSearch,
{
    let input = linspace(QUERY_START, QUERY_STOP, QUERY_COUNT);
    let output = input.iter().map(|query| table.value(*query)).collect();
    TestCase {
        x: table.x().to_vec(),
        y: table.y().to_vec(),
        input,
        output,
    }
}
