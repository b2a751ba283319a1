/*
 * @Author       : 老董
 * @Date         : 2026-10-17
 * @Description  : 数值梯度检验工具（有限差分），仅用于验证解析梯度的正确性，不参与正常的前向/反向计算
 */

use ndarray::{Array, ArrayBase, Data, Dimension};

use crate::utils::traits::float::RnnFloat;

/// 用中心差分估计`f`在`x`处关于`x`的梯度，`df`为`f`输出的上游梯度。
///
/// 对`x`的每个元素`x_i`：`grad_i = Σ((f(x + h·e_i) - f(x - h·e_i)) ⊙ df) / 2h`
///
/// 扰动只作用于`x`的内部副本，调用方传入的数组不会被修改。
pub fn eval_numerical_gradient_array<F, D, E, G>(
    mut f: G,
    x: &Array<F, D>,
    df: &Array<F, E>,
    h: F,
) -> Array<F, D>
where
    F: RnnFloat,
    D: Dimension,
    E: Dimension,
    G: FnMut(&Array<F, D>) -> Array<F, E>,
{
    let mut x = x.as_standard_layout().into_owned();
    let originals = x.iter().copied().collect::<Vec<_>>();
    let two_h = h + h;

    let mut grad_values = Vec::with_capacity(originals.len());
    for (i, &old) in originals.iter().enumerate() {
        set_nth(&mut x, i, old + h);
        let pos = f(&x);
        set_nth(&mut x, i, old - h);
        let neg = f(&x);
        set_nth(&mut x, i, old);

        let weighted = pos
            .iter()
            .zip(neg.iter())
            .zip(df.iter())
            .fold(F::zero(), |acc, ((&p, &n), &d)| acc + (p - n) * d);
        grad_values.push(weighted / two_h);
    }

    let mut grad = Array::zeros(x.raw_dim());
    grad.iter_mut()
        .zip(grad_values)
        .for_each(|(g, value)| *g = value);
    grad
}

/// 两个同形数组之间的最大相对误差：`max(|a - b| / max(1e-8, |a| + |b|))`
pub fn rel_error<F, S1, S2, D>(a: &ArrayBase<S1, D>, b: &ArrayBase<S2, D>) -> F
where
    F: RnnFloat,
    S1: Data<Elem = F>,
    S2: Data<Elem = F>,
    D: Dimension,
{
    assert!(
        a.shape() == b.shape(),
        "计算相对误差的两个数组形状须一致：{:?}与{:?}",
        a.shape(),
        b.shape()
    );
    let floor = F::from(1e-8).unwrap_or_else(F::epsilon);
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x - y).abs() / (x.abs() + y.abs()).max(floor))
        .fold(F::zero(), F::max)
}

fn set_nth<F: Copy, D: Dimension>(array: &mut Array<F, D>, index: usize, value: F) {
    if let Some(element) = array.iter_mut().nth(index) {
        *element = value;
    }
}
