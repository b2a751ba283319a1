use ndarray::Array2;

use super::RnnParams;

/// 单个时间步前向传播留下的缓存，供与之配对的反向传播使用。
///
/// 只保存该步的输入`x`与上一步隐藏状态`prev_h`，参数包以借用方式持有，
/// 因此缓存的生命周期不会超过参数本身。`tanh`的结果不缓存，反向时由这三者重算。
/// 反向传播按值接收缓存，用过即被消耗；缓存没有修改接口。
/// 需要对同一步重复反向传播时（如检验纯函数性质），须显式`clone`。
#[derive(Debug, Clone)]
pub struct StepCache<'p, F> {
    x: Array2<F>,
    prev_h: Array2<F>,
    params: &'p RnnParams<F>,
}

impl<'p, F> StepCache<'p, F> {
    pub(crate) fn new(x: Array2<F>, prev_h: Array2<F>, params: &'p RnnParams<F>) -> Self {
        Self { x, prev_h, params }
    }

    /// 该步的输入：[batch_size, input_size]
    pub fn x(&self) -> &Array2<F> {
        &self.x
    }

    /// 该步之前的隐藏状态：[batch_size, hidden_size]
    pub fn prev_h(&self) -> &Array2<F> {
        &self.prev_h
    }

    pub fn params(&self) -> &'p RnnParams<F> {
        self.params
    }
}
