
pub trait Curve {
    fn value(&self, x: f64) -> f64;
}
