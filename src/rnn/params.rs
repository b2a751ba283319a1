/*
 * @Author       : 老董
 * @Date         : 2026-10-17
 * @Description  : RNN的共享参数包 (Wx, Wh, b)。所有时间步、所有序列共用同一份参数，
 *                 各步计算只借用它，不做任何拷贝
 */

use std::fs::File;

use ndarray::{Array1, Array2, ArrayD, Ix1, Ix2};
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use super::RnnConfig;
use crate::errors::RnnError;
use crate::utils::traits::float::RnnFloat;

/// RNN参数：
/// - `wx`: [input_size, hidden_size]
/// - `wh`: [hidden_size, hidden_size]
/// - `b`: [hidden_size]
///
/// 反序列化同样经过`RnnParams::new`的形状检查，形状不一致的参数包无法被构建出来。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RnnParams<F> {
    wx: Array2<F>,
    wh: Array2<F>,
    b: Array1<F>,
}

/// 未经检查的参数包，字段顺序与`RnnParams`的序列化格式一致
#[derive(Deserialize)]
struct RawRnnParams<F> {
    wx: Array2<F>,
    wh: Array2<F>,
    b: Array1<F>,
}

impl<'de, F> Deserialize<'de> for RnnParams<F>
where
    F: RnnFloat + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawRnnParams::deserialize(deserializer)?;
        Self::new(raw.wx, raw.wh, raw.b).map_err(serde::de::Error::custom)
    }
}

impl<F: RnnFloat> RnnParams<F> {
    /// 由现成的数组构建参数包，会检查三者形状是否相互兼容
    pub fn new(wx: Array2<F>, wh: Array2<F>, b: Array1<F>) -> Result<Self, RnnError> {
        let hidden_size = wx.ncols();
        if wh.dim() != (hidden_size, hidden_size) {
            return Err(RnnError::shape_mismatch(
                &[hidden_size, hidden_size],
                wh.shape(),
                "Wh须为[H, H]的方阵，且H须等于Wx的列数",
            ));
        }
        if b.len() != hidden_size {
            return Err(RnnError::shape_mismatch(
                &[hidden_size],
                b.shape(),
                "偏置b的长度须等于Wx的列数",
            ));
        }
        Ok(Self { wx, wh, b })
    }

    /// 按配置随机初始化参数（使用线程本地 RNG）
    pub fn from_config(config: &RnnConfig) -> Result<Self, RnnError> {
        Self::from_config_with_rng(config, &mut rand::thread_rng())
    }

    /// 按配置随机初始化参数（使用指定的 RNG）
    pub fn from_config_with_rng<R: Rng>(config: &RnnConfig, rng: &mut R) -> Result<Self, RnnError> {
        config.validate()?;
        let (d, h) = (config.input_size, config.hidden_size);
        let wx = config.weight_init.generate_with_rng(&[d, h], rng);
        let wh = config.weight_init.generate_with_rng(&[h, h], rng);
        let b = config.bias_init.generate_with_rng(&[h], rng);
        Self::new(into_matrix(wx)?, into_matrix(wh)?, into_vector(b)?)
    }

    pub fn wx(&self) -> &Array2<F> {
        &self.wx
    }

    pub fn wh(&self) -> &Array2<F> {
        &self.wh
    }

    pub fn b(&self) -> &Array1<F> {
        &self.b
    }

    /// 输入特征维度 D
    pub fn input_size(&self) -> usize {
        self.wx.nrows()
    }

    /// 隐藏状态维度 H
    pub fn hidden_size(&self) -> usize {
        self.wx.ncols()
    }
}

// 保存和加载参数
impl<F: RnnFloat + Serialize + DeserializeOwned> RnnParams<F> {
    /// 将参数写入本地文件
    pub fn save(&self, file: &mut File) -> Result<(), RnnError> {
        bincode::serialize_into(file, self)?;
        Ok(())
    }

    /// 从本地文件加载参数（加载后会重新检查形状，不一致时返回`ShapeMismatch`）
    pub fn load(file: &mut File) -> Result<Self, RnnError> {
        let raw: RawRnnParams<F> = bincode::deserialize_from(file)?;
        Self::new(raw.wx, raw.wh, raw.b)
    }
}

fn into_matrix<F: RnnFloat>(array: ArrayD<F>) -> Result<Array2<F>, RnnError> {
    let shape = array.shape().to_vec();
    array
        .into_dimensionality::<Ix2>()
        .map_err(|_| RnnError::shape_mismatch(&[0, 0], &shape, "初始化结果须为2阶数组"))
}

fn into_vector<F: RnnFloat>(array: ArrayD<F>) -> Result<Array1<F>, RnnError> {
    let shape = array.shape().to_vec();
    array
        .into_dimensionality::<Ix1>()
        .map_err(|_| RnnError::shape_mismatch(&[0], &shape, "初始化结果须为1阶数组"))
}
