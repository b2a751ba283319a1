mod config;

use ndarray::{Array, Array1, Array2, Array3};

/// 确定性的伪随机数发生器（64位线性同余），各平台结果一致，
/// 生成值均匀分布在[-scale, scale)内
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_value(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64 * 2.0 - 1.0
    }

    fn array1(&mut self, len: usize, scale: f64) -> Array1<f64> {
        Array1::from_shape_simple_fn(len, || self.next_value() * scale)
    }

    fn array2(&mut self, shape: (usize, usize), scale: f64) -> Array2<f64> {
        Array2::from_shape_simple_fn(shape, || self.next_value() * scale)
    }

    fn array3(&mut self, shape: (usize, usize, usize), scale: f64) -> Array3<f64> {
        Array3::from_shape_simple_fn(shape, || self.next_value() * scale)
    }
}

fn linspace2(start: f64, end: f64, shape: (usize, usize)) -> Array2<f64> {
    Array::linspace(start, end, shape.0 * shape.1)
        .into_shape(shape)
        .unwrap()
}

fn linspace3(start: f64, end: f64, shape: (usize, usize, usize)) -> Array3<f64> {
    Array::linspace(start, end, shape.0 * shape.1 * shape.2)
        .into_shape(shape)
        .unwrap()
}
