/*
 * @Author       : 老董
 * @Date         : 2026-10-17
 * @Description  : Rnn 层配置，可从 JSON 读取或写出为 JSON
 */

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Init;
use crate::errors::RnnError;

/// Rnn 层配置
///
/// JSON 示例：
/// ```json
/// { "input_size": 10, "hidden_size": 4, "weight_init": "Xavier", "bias_init": "Zeros" }
/// ```
/// `weight_init`与`bias_init`可省略，默认分别为`Xavier`（适用于tanh）与`Zeros`。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RnnConfig {
    /// 输入特征维度 D
    pub input_size: usize,
    /// 隐藏状态维度 H
    pub hidden_size: usize,
    /// `Wx`与`Wh`的初始化方式
    #[serde(default = "default_weight_init")]
    pub weight_init: Init,
    /// `b`的初始化方式
    #[serde(default = "default_bias_init")]
    pub bias_init: Init,
}

fn default_weight_init() -> Init {
    Init::Xavier
}

fn default_bias_init() -> Init {
    Init::Zeros
}

impl RnnConfig {
    pub fn new(input_size: usize, hidden_size: usize) -> Self {
        Self {
            input_size,
            hidden_size,
            weight_init: default_weight_init(),
            bias_init: default_bias_init(),
        }
    }

    pub fn with_weight_init(mut self, init: Init) -> Self {
        self.weight_init = init;
        self
    }

    pub fn with_bias_init(mut self, init: Init) -> Self {
        self.bias_init = init;
        self
    }

    /// 检查各维度是否有效（均须大于0）
    pub fn validate(&self) -> Result<(), RnnError> {
        if self.input_size == 0 {
            return Err(RnnError::InvalidConfig("input_size须大于0".to_string()));
        }
        if self.hidden_size == 0 {
            return Err(RnnError::InvalidConfig("hidden_size须大于0".to_string()));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, RnnError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RnnError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String, RnnError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
