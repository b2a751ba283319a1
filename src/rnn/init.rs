/*
 * @Author       : 老董
 * @Date         : 2026-10-17
 * @Description  : 参数初始化策略
 */

use ndarray::{ArrayD, IxDyn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::utils::traits::float::RnnFloat;

/// 参数初始化方式
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Init {
    /// 常数初始化
    Constant(f64),
    /// 全零
    Zeros,
    /// 全一
    Ones,
    /// 正态分布
    Normal { mean: f64, std: f64 },
    /// Kaiming/He 初始化（适用于 `ReLU`）
    Kaiming,
    /// Xavier/Glorot 初始化（适用于 Sigmoid/Tanh）
    Xavier,
}

impl Init {
    /// 生成初始化后的数组（使用线程本地 RNG）
    pub fn generate<F: RnnFloat>(&self, shape: &[usize]) -> ArrayD<F> {
        self.generate_with_rng(shape, &mut rand::thread_rng())
    }

    /// 生成初始化后的数组（使用指定的 RNG，便于复现）
    pub fn generate_with_rng<F: RnnFloat, R: Rng>(&self, shape: &[usize], rng: &mut R) -> ArrayD<F> {
        let dim = IxDyn(shape);
        let (mean, std) = match *self {
            Self::Constant(v) => return ArrayD::from_elem(dim, to_float(v)),
            Self::Zeros => return ArrayD::zeros(dim),
            Self::Ones => return ArrayD::ones(dim),
            Self::Normal { mean, std } => (mean, std),
            Self::Kaiming => {
                let fan_in = shape.first().copied().unwrap_or(1).max(1);
                (0.0, (2.0 / fan_in as f64).sqrt())
            }
            Self::Xavier => {
                let fan_in = shape.first().copied().unwrap_or(1);
                let fan_out = shape.get(1).copied().unwrap_or(1);
                (0.0, (2.0 / (fan_in + fan_out).max(1) as f64).sqrt())
            }
        };
        ArrayD::from_shape_fn(dim, |_| to_float(sample_normal(&mut *rng, mean, std)))
    }
}

fn to_float<F: RnnFloat>(value: f64) -> F {
    F::from(value).unwrap_or_else(F::nan)
}

/// Box-Muller 变换采样一个服从`N(mean, std²)`的数
fn sample_normal<R: Rng>(rng: &mut R, mean: f64, std: f64) -> f64 {
    loop {
        let u1: f64 = rng.r#gen();
        let u2: f64 = rng.r#gen();
        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * std::f64::consts::PI * u2;
        let z = mean + std * r * theta.cos();
        if z.is_finite() {
            return z;
        }
    }
}
