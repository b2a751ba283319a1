/*
 * @Author       : 老董
 * @Date         : 2026-10-17
 * @Description  : RNN单个时间步的前向与反向传播
 *
 * 公式: next_h = tanh(x @ Wx + prev_h @ Wh + b)
 *
 * 形状：
 * - x: [N, D]
 * - prev_h / next_h: [N, H]
 * - Wx: [D, H]，Wh: [H, H]，b: [H]
 */

use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix2};

use super::{RnnParams, StepCache};
use crate::errors::RnnError;
use crate::utils::traits::float::RnnFloat;

/// 参数梯度，形状与`RnnParams`一一对应
#[derive(Debug, Clone, PartialEq)]
pub struct ParamGrads<F> {
    pub dwx: Array2<F>,
    pub dwh: Array2<F>,
    pub db: Array1<F>,
}

impl<F: RnnFloat> ParamGrads<F> {
    /// 与参数同形的全零梯度，用作跨时间步累加的初值
    pub fn zeros_like(params: &RnnParams<F>) -> Self {
        Self {
            dwx: Array2::zeros(params.wx().raw_dim()),
            dwh: Array2::zeros(params.wh().raw_dim()),
            db: Array1::zeros(params.b().raw_dim()),
        }
    }

    /// 逐元素累加另一份梯度
    pub fn accumulate(&mut self, other: &Self) {
        self.dwx += &other.dwx;
        self.dwh += &other.dwh;
        self.db += &other.db;
    }

    /// 三个梯度是否均只含有限值
    pub fn is_finite(&self) -> bool {
        self.dwx
            .iter()
            .chain(self.dwh.iter())
            .chain(self.db.iter())
            .all(|v| v.is_finite())
    }
}

/// 单步反向传播的结果
#[derive(Debug, Clone, PartialEq)]
pub struct StepGrads<F> {
    /// 对输入的梯度：[N, D]
    pub dx: Array2<F>,
    /// 对上一步隐藏状态的梯度：[N, H]
    pub dprev_h: Array2<F>,
    pub params: ParamGrads<F>,
}

/// 单步前向传播，返回`next_h`及供反向传播使用的缓存。
///
/// 输入与参数均不会被修改。
pub fn step_forward<'p, F, S1, S2>(
    x: &ArrayBase<S1, Ix2>,
    prev_h: &ArrayBase<S2, Ix2>,
    params: &'p RnnParams<F>,
) -> Result<(Array2<F>, StepCache<'p, F>), RnnError>
where
    F: RnnFloat,
    S1: Data<Elem = F>,
    S2: Data<Elem = F>,
{
    check_step_shapes(x.dim(), prev_h.dim(), params)?;

    let next_h = pre_activation(x, prev_h, params).mapv_into(F::tanh);
    let cache = StepCache::new(x.to_owned(), prev_h.to_owned(), params);
    Ok((next_h, cache))
}

/// 单步反向传播。`dnext_h`为`next_h`的上游梯度，`cache`来自配对的`step_forward`。
///
/// 利用 d(tanh(z))/dz = 1 - tanh²(z)，其中`tanh(z)`由缓存重算。
pub fn step_backward<F, S>(
    dnext_h: &ArrayBase<S, Ix2>,
    cache: StepCache<'_, F>,
) -> Result<StepGrads<F>, RnnError>
where
    F: RnnFloat,
    S: Data<Elem = F>,
{
    let params = cache.params();
    let expected = [cache.prev_h().nrows(), params.hidden_size()];
    if dnext_h.shape() != expected {
        return Err(RnnError::shape_mismatch(
            &expected,
            dnext_h.shape(),
            "上游梯度dnext_h须与该步输出的隐藏状态同形",
        ));
    }

    let next_h = pre_activation(cache.x(), cache.prev_h(), params).mapv_into(F::tanh);
    // dz = dnext_h * (1 - tanh²(z))
    let dz = next_h.mapv_into(|v| F::one() - v * v) * dnext_h;

    Ok(StepGrads {
        dx: dz.dot(&params.wx().t()),
        dprev_h: dz.dot(&params.wh().t()),
        params: ParamGrads {
            dwx: cache.x().t().dot(&dz),
            dwh: cache.prev_h().t().dot(&dz),
            db: dz.sum_axis(Axis(0)),
        },
    })
}

/// z = x @ Wx + prev_h @ Wh + b（b 沿批维度广播）
fn pre_activation<F, S1, S2>(
    x: &ArrayBase<S1, Ix2>,
    prev_h: &ArrayBase<S2, Ix2>,
    params: &RnnParams<F>,
) -> Array2<F>
where
    F: RnnFloat,
    S1: Data<Elem = F>,
    S2: Data<Elem = F>,
{
    x.dot(params.wx()) + prev_h.dot(params.wh()) + params.b()
}

/// 在任何计算之前检查单步前向传播的形状约束
pub(crate) fn check_step_shapes<F: RnnFloat>(
    x_dim: (usize, usize),
    prev_h_dim: (usize, usize),
    params: &RnnParams<F>,
) -> Result<(), RnnError> {
    let (batch_size, input_size) = x_dim;
    if input_size != params.input_size() {
        return Err(RnnError::shape_mismatch(
            &[batch_size, params.input_size()],
            &[batch_size, input_size],
            "输入x的列数须等于Wx的行数",
        ));
    }
    let expected_h = (batch_size, params.hidden_size());
    if prev_h_dim != expected_h {
        return Err(RnnError::shape_mismatch(
            &[expected_h.0, expected_h.1],
            &[prev_h_dim.0, prev_h_dim.1],
            "隐藏状态prev_h须为[N, H]，N须等于x的行数，H须等于Wh的行数",
        ));
    }
    Ok(())
}
