/*
 * @Author       : 老董
 * @Date         : 2026-10-17
 * @Description  : Rnn 层：持有配置与参数，对外提供单步/序列的前向与反向传播
 *
 * 公式: h_t = tanh(x_t @ Wx + h_{t-1} @ Wh + b)
 */

use ndarray::{Array2, Array3, ArrayBase, Data, Ix2, Ix3};
use rand::Rng;

use super::{
    RnnConfig, RnnParams, SequenceGrads, StepCache, StepGrads, sequence_backward,
    sequence_forward, step_backward, step_forward,
};
use crate::errors::RnnError;
use crate::utils::traits::float::RnnFloat;

/// Rnn 层
///
/// # 使用示例
/// ```ignore
/// let rnn = Rnn::<f64>::new(RnnConfig::new(10, 4))?;
/// let h0 = rnn.zero_state(3);
/// let (h, caches) = rnn.forward(&x, &h0)?;   // x: [3, T, 10]
/// let grads = rnn.backward(&dh, caches)?;    // dh: [3, T, 4]
/// ```
#[derive(Debug, Clone)]
pub struct Rnn<F> {
    config: RnnConfig,
    params: RnnParams<F>,
}

impl<F: RnnFloat> Rnn<F> {
    /// 按配置创建并随机初始化参数
    pub fn new(config: RnnConfig) -> Result<Self, RnnError> {
        Self::new_with_rng(config, &mut rand::thread_rng())
    }

    pub fn new_with_rng<R: Rng>(config: RnnConfig, rng: &mut R) -> Result<Self, RnnError> {
        let params = RnnParams::from_config_with_rng(&config, rng)?;
        Ok(Self { config, params })
    }

    /// 由现成参数（如加载的预训练参数）创建，配置的维度取自参数本身
    pub fn from_params(params: RnnParams<F>) -> Self {
        let config = RnnConfig::new(params.input_size(), params.hidden_size());
        Self { config, params }
    }

    pub fn config(&self) -> &RnnConfig {
        &self.config
    }

    pub fn params(&self) -> &RnnParams<F> {
        &self.params
    }

    /// 全零的初始隐藏状态：[batch_size, hidden_size]
    pub fn zero_state(&self, batch_size: usize) -> Array2<F> {
        Array2::zeros((batch_size, self.params.hidden_size()))
    }

    /// 单步前向传播
    pub fn step<S1, S2>(
        &self,
        x: &ArrayBase<S1, Ix2>,
        prev_h: &ArrayBase<S2, Ix2>,
    ) -> Result<(Array2<F>, StepCache<'_, F>), RnnError>
    where
        S1: Data<Elem = F>,
        S2: Data<Elem = F>,
    {
        step_forward(x, prev_h, &self.params)
    }

    pub fn step_backward<S: Data<Elem = F>>(
        &self,
        dnext_h: &ArrayBase<S, Ix2>,
        cache: StepCache<'_, F>,
    ) -> Result<StepGrads<F>, RnnError> {
        step_backward(dnext_h, cache)
    }

    /// 整段序列前向传播
    pub fn forward<S1, S2>(
        &self,
        x: &ArrayBase<S1, Ix3>,
        h0: &ArrayBase<S2, Ix2>,
    ) -> Result<(Array3<F>, Vec<StepCache<'_, F>>), RnnError>
    where
        S1: Data<Elem = F>,
        S2: Data<Elem = F>,
    {
        sequence_forward(x, h0, &self.params)
    }

    /// 整段序列反向传播（BPTT）
    pub fn backward<S: Data<Elem = F>>(
        &self,
        dh: &ArrayBase<S, Ix3>,
        caches: Vec<StepCache<'_, F>>,
    ) -> Result<SequenceGrads<F>, RnnError> {
        sequence_backward(dh, caches)
    }
}
