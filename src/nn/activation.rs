/*
 * @Description  : 激活函数：Linear / Sigmoid / Tanh / Softmax
 *                 每种激活只实现一次 apply 与 derivative，节点类型只决定是否执行反向步骤
 */

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use std::fmt;

#[enum_dispatch]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationKind {
    Linear,
    Sigmoid,
    Tanh,
    Softmax,
}

#[enum_dispatch(ActivationKind)]
pub trait TraitActivation {
    /// 激活函数名称（用于显示与描述）
    fn name(&self) -> &'static str;
    /// 由激活前的值计算激活后的值
    fn apply(&self, pre_activation: f64) -> f64;
    /// 以激活后的值表示的导数
    fn derivative(&self, post_activation: f64) -> f64;
}

/// 恒等激活
///
/// forward: f(x) = x
/// backward: f'(x) = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Linear;

impl TraitActivation for Linear {
    fn name(&self) -> &'static str {
        "Linear"
    }

    fn apply(&self, pre_activation: f64) -> f64 {
        pre_activation
    }

    fn derivative(&self, _post_activation: f64) -> f64 {
        1.0
    }
}

/// Sigmoid 激活
///
/// forward: sigmoid(x) = 1 / (1 + e^(-x))
/// backward: d(sigmoid)/dx = sigmoid(x) * (1 - sigmoid(x))
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sigmoid;

impl TraitActivation for Sigmoid {
    fn name(&self) -> &'static str {
        "Sigmoid"
    }

    fn apply(&self, pre_activation: f64) -> f64 {
        1.0 / (1.0 + (-pre_activation).exp())
    }

    fn derivative(&self, post_activation: f64) -> f64 {
        post_activation * (1.0 - post_activation)
    }
}

/// Tanh 激活
///
/// forward: tanh(x) = (e^x - e^(-x)) / (e^x + e^(-x))
/// backward: d(tanh)/dx = 1 - tanh²(x)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tanh;

impl TraitActivation for Tanh {
    fn name(&self) -> &'static str {
        "Tanh"
    }

    fn apply(&self, pre_activation: f64) -> f64 {
        pre_activation.tanh()
    }

    fn derivative(&self, post_activation: f64) -> f64 {
        1.0 - post_activation * post_activation
    }
}

/// Softmax 激活
///
/// 单个节点无法得知同层其他节点的值，所以 `apply` 只给出未归一化的分子 e^x，
/// 归一化由调用方计算整个输出层的 Σe^x 后通过 `Node::apply_softmax` 完成。
/// `derivative` 返回雅可比矩阵的对角项 y * (1 - y)，节点的反向步骤不会使用它（见 `Node::backward_step`）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Softmax;

impl TraitActivation for Softmax {
    fn name(&self) -> &'static str {
        "Softmax"
    }

    fn apply(&self, pre_activation: f64) -> f64 {
        pre_activation.exp()
    }

    fn derivative(&self, post_activation: f64) -> f64 {
        post_activation * (1.0 - post_activation)
    }
}

impl ActivationKind {
    pub const fn is_softmax(&self) -> bool {
        matches!(self, Self::Softmax(_))
    }
}

impl Default for ActivationKind {
    fn default() -> Self {
        Self::Linear(Linear)
    }
}

impl fmt::Display for ActivationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
