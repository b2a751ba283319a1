use approx::assert_abs_diff_eq;
use ndarray::{Array1, Array2, array};

use crate::utils::gradient_check::{eval_numerical_gradient_array, rel_error};

#[test]
fn test_numerical_gradient_of_square() {
    // f(x) = x²（逐元素），上游梯度全为1时 df/dx = 2x
    let x = array![[1.0, -2.0, 0.5], [3.0, 0.0, -0.25]];
    let df = Array2::<f64>::ones((2, 3));
    let grad = eval_numerical_gradient_array(|x: &Array2<f64>| x.mapv(|v| v * v), &x, &df, 1e-5);
    let expected = x.mapv(|v| 2.0 * v);
    for (g, e) in grad.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*g, *e, epsilon = 1e-8);
    }
}

#[test]
fn test_numerical_gradient_weighted_by_upstream() {
    // f(x) = A @ x，则 Σ(f ⊙ df) 对 x 的梯度为 Aᵀ @ df
    let a = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
    let x = array![0.3, -0.7];
    let df = array![1.0, -1.0, 0.5];
    let grad = eval_numerical_gradient_array(|x: &Array1<f64>| a.dot(x), &x, &df, 1e-5);
    let expected = a.t().dot(&df);
    assert!(rel_error(&grad, &expected) < 1e-9);
}

#[test]
fn test_numerical_gradient_leaves_input_untouched() {
    let x = array![[0.1, 0.2], [0.3, 0.4]];
    let snapshot = x.clone();
    let df = Array2::<f64>::ones((2, 2));
    let _ = eval_numerical_gradient_array(|x: &Array2<f64>| x.mapv(f64::sin), &x, &df, 1e-5);
    assert_eq!(x, snapshot);
}

#[test]
fn test_rel_error() {
    let a = array![1.0, 2.0, 0.0];
    assert_eq!(rel_error(&a, &a), 0.0);

    // |1 - 3| / (1 + 3) = 0.5 为最大项
    let b = array![3.0, 2.0, 0.0];
    assert_abs_diff_eq!(rel_error(&a, &b), 0.5, epsilon = 1e-12);

    // 两者都接近0时分母取1e-8
    let c = array![1e-12, 0.0, 0.0];
    let d = array![0.0, 0.0, 0.0];
    assert_abs_diff_eq!(rel_error(&c, &d), 1e-4, epsilon = 1e-12);
}

#[test]
#[should_panic(expected = "形状须一致")]
fn test_rel_error_panic_on_shape_mismatch() {
    let a = array![1.0, 2.0];
    let b = array![1.0, 2.0, 3.0];
    rel_error(&a, &b);
}
