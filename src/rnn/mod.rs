/*
 * @Author       : 老董
 * @Date         : 2026-10-17
 * @Description  : 朴素循环神经网络（vanilla RNN）的单步/序列前向与反向传播
 */

mod cache;
mod config;
mod init;
mod layer;
mod params;
mod sequence;
mod step;

pub use cache::StepCache;
pub use config::RnnConfig;
pub use init::Init;
pub use layer::Rnn;
pub use params::RnnParams;
pub use sequence::{SequenceGrads, sequence_backward, sequence_forward};
pub use step::{ParamGrads, StepGrads, step_backward, step_forward};

#[cfg(test)]
mod tests;
