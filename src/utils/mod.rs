//! # 常用接口模块
//!
//! 本模块提供一些常用的工具：浮点数约束、数值梯度检验以及单元测试用的断言宏

#[cfg(test)]
mod tests;

pub mod gradient_check;

pub mod traits {
    pub mod float;
}
