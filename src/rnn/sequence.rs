/*
 * @Author       : 老董
 * @Date         : 2026-10-17
 * @Description  : 整段序列的前向传播与通过时间的反向传播（BPTT）
 *
 * 形状：
 * - x: [N, T, D]
 * - h0: [N, H]
 * - h / dh: [N, T, H]
 */

use log::{debug, trace, warn};
use ndarray::{Array2, Array3, ArrayBase, Axis, Data, Ix2, Ix3};

use super::step::{ParamGrads, check_step_shapes, step_backward, step_forward};
use super::{RnnParams, StepCache};
use crate::errors::RnnError;
use crate::utils::traits::float::RnnFloat;

/// 整段序列反向传播的结果
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceGrads<F> {
    /// 对各时间步输入的梯度：[N, T, D]
    pub dx: Array3<F>,
    /// 对初始隐藏状态的梯度：[N, H]
    pub dh0: Array2<F>,
    /// 跨所有时间步累加后的参数梯度
    pub params: ParamGrads<F>,
}

/// 沿时间轴逐步调用`step_forward`，返回全部隐藏状态及按时间顺序排列的T个缓存。
pub fn sequence_forward<'p, F, S1, S2>(
    x: &ArrayBase<S1, Ix3>,
    h0: &ArrayBase<S2, Ix2>,
    params: &'p RnnParams<F>,
) -> Result<(Array3<F>, Vec<StepCache<'p, F>>), RnnError>
where
    F: RnnFloat,
    S1: Data<Elem = F>,
    S2: Data<Elem = F>,
{
    let (batch_size, seq_len, input_size) = x.dim();
    if seq_len == 0 {
        return Err(RnnError::EmptySequence);
    }
    check_step_shapes((batch_size, input_size), h0.dim(), params)?;
    let hidden_size = params.hidden_size();
    debug!(
        "序列前向传播：N={batch_size}, T={seq_len}, D={input_size}, H={hidden_size}"
    );

    let mut h = Array3::zeros((batch_size, seq_len, hidden_size));
    let mut caches = Vec::with_capacity(seq_len);
    let mut prev_h = h0.to_owned();
    for t in 0..seq_len {
        trace!("前向传播时间步{t}");
        let (next_h, cache) = step_forward(&x.index_axis(Axis(1), t), &prev_h, params)?;
        h.index_axis_mut(Axis(1), t).assign(&next_h);
        caches.push(cache);
        prev_h = next_h;
    }
    Ok((h, caches))
}

/// 通过时间的反向传播。`dh`为每个时间步隐藏状态的外部上游梯度，
/// `caches`须是配对的`sequence_forward`返回的缓存，顺序不变。
///
/// 时间步按逆序处理：第t步的实际上游梯度 = dh[:, t, :] + 第t+1步传回的dprev_h。
/// 参数梯度跨时间步累加；第0步传回的dprev_h即为初始隐藏状态的梯度。
pub fn sequence_backward<'p, F, S>(
    dh: &ArrayBase<S, Ix3>,
    caches: Vec<StepCache<'p, F>>,
) -> Result<SequenceGrads<F>, RnnError>
where
    F: RnnFloat,
    S: Data<Elem = F>,
{
    let (batch_size, seq_len, _) = dh.dim();
    let Some(first) = caches.first() else {
        return Err(RnnError::EmptySequence);
    };
    if caches.len() != seq_len {
        return Err(RnnError::shape_mismatch(
            &[batch_size, caches.len(), dh.dim().2],
            dh.shape(),
            "上游梯度dh的时间步数须等于缓存数量",
        ));
    }
    let params = first.params();
    let (input_size, hidden_size) = (params.input_size(), params.hidden_size());
    let expected = [first.prev_h().nrows(), seq_len, hidden_size];
    if dh.shape() != expected {
        return Err(RnnError::shape_mismatch(
            &expected,
            dh.shape(),
            "上游梯度dh须与前向传播输出的隐藏状态同形",
        ));
    }
    if let Some(t) = caches
        .iter()
        .position(|cache| !std::ptr::eq(cache.params(), params))
    {
        return Err(RnnError::CacheMismatch(format!(
            "时间步{t}的缓存与第0步的缓存不是由同一参数包产生的"
        )));
    }
    if let Some(cache) = caches
        .iter()
        .find(|cache| cache.x().dim() != (expected[0], input_size))
    {
        return Err(RnnError::shape_mismatch(
            &[expected[0], input_size],
            cache.x().shape(),
            "缓存须来自同一次序列前向传播",
        ));
    }
    debug!(
        "序列反向传播：N={}, T={seq_len}, D={input_size}, H={hidden_size}",
        expected[0]
    );

    let mut dx = Array3::zeros((expected[0], seq_len, input_size));
    let mut grads = ParamGrads::zeros_like(params);
    let mut dprev_h = Array2::zeros((expected[0], hidden_size));
    for (t, cache) in caches.into_iter().enumerate().rev() {
        trace!("反向传播时间步{t}");
        let upstream = &dh.index_axis(Axis(1), t) + &dprev_h;
        let step = step_backward(&upstream, cache)?;
        dx.index_axis_mut(Axis(1), t).assign(&step.dx);
        grads.accumulate(&step.params);
        dprev_h = step.dprev_h;
        if dprev_h.iter().any(|v| !v.is_finite()) {
            warn!("时间步{t}传回的隐藏状态梯度出现非有限值（梯度爆炸？）");
        }
    }
    if !grads.is_finite() {
        warn!("跨时间步累加后的参数梯度出现非有限值");
    }

    Ok(SequenceGrads {
        dx,
        dh0: dprev_h,
        params: grads,
    })
}
