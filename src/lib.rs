//! # Only Rnn
//!
//! `only_rnn`用纯rust手写朴素循环神经网络（vanilla RNN）单元的前向与反向传播：
//! 单步前向/反向，以及沿时间轴循环单步得到的序列前向/通过时间的反向传播（BPTT）。
//! 所有运算都是纯函数：不修改任何输入，同样的输入总得到同样的输出。
//!

pub mod errors;
pub mod rnn;
pub mod utils;

pub use errors::RnnError;
pub use rnn::{
    Init, ParamGrads, Rnn, RnnConfig, RnnParams, SequenceGrads, StepCache, StepGrads,
    sequence_backward, sequence_forward, step_backward, step_forward,
};
