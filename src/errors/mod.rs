/*
 * @Author       : 老董
 * @Date         : 2026-10-17
 * @Description  : RNN引擎的错误类型。所有形状检查都在计算之前完成，出错时不做任何部分计算
 */

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RnnError {
    // 数组形状不满足运算要求
    #[error("形状不匹配：{message}。期望形状为{expected:?}，实际形状为{got:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
        message: String,
    },
    #[error("序列长度为0，没有可计算的时间步")]
    EmptySequence,
    // 形状无误，但缓存并非来自同一次前向传播
    #[error("缓存不匹配：{0}")]
    CacheMismatch(String),
    #[error("配置无效：{0}")]
    InvalidConfig(String),

    // 持久化相关
    #[error("读写文件失败：{0}")]
    Io(String),
    #[error("（反）序列化失败：{0}")]
    Serialization(String),
}

impl RnnError {
    pub(crate) fn shape_mismatch(expected: &[usize], got: &[usize], message: &str) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
            message: message.to_string(),
        }
    }
}

impl From<std::io::Error> for RnnError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<bincode::Error> for RnnError {
    fn from(err: bincode::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for RnnError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
