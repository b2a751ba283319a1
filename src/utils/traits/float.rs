use ndarray::{LinalgScalar, ScalarOperand};
use num_traits::Float;
use std::fmt::{Debug, Display};
use std::ops::AddAssign;

/// RNN引擎所需的浮点数约束，`f32`和`f64`均满足。
/// 需要做梯度检验（相对误差≤1e-7）时应使用`f64`。
pub trait RnnFloat:
    Float + LinalgScalar + ScalarOperand + AddAssign + Debug + Display + Send + Sync + 'static
{
}

impl<T> RnnFloat for T where
    T: Float + LinalgScalar + ScalarOperand + AddAssign + Debug + Display + Send + Sync + 'static
{
}
