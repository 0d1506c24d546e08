use super::nodes::{Node, NodeId};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 两个节点之间的有向加权边
///
/// 端点在创建后不再改变；边由 `Network` 持有，两端节点只保存它的 `EdgeId`。
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    input_node: NodeId,
    output_node: NodeId,
    weight: f64,
    weight_delta: f64,
}

impl Edge {
    /// 新边的权重与权重梯度均为 0。
    /// 在两端节点上的注册由 `Network::connect` 完成
    pub(in crate::nn) const fn new(input_node: NodeId, output_node: NodeId) -> Self {
        Self {
            input_node,
            output_node,
            weight: 0.0,
            weight_delta: 0.0,
        }
    }

    pub const fn input_node(&self) -> NodeId {
        self.input_node
    }

    pub const fn output_node(&self) -> NodeId {
        self.output_node
    }

    pub const fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    pub const fn weight_delta(&self) -> f64 {
        self.weight_delta
    }

    pub(in crate::nn) fn clear_weight_delta(&mut self) {
        self.weight_delta = 0.0;
    }

    /// 将输出节点的梯度反向传到本边及其输入节点
    ///
    /// - 权重梯度 = 上游梯度 × 输入节点激活后的值（覆盖写入）
    /// - 输入节点的 delta 累加 上游梯度 × 权重，待其所有出边都贡献完毕后再由该节点自身的反向步骤收尾
    ///
    /// `input` 必须是本边的输入节点
    pub fn propagate_backward(&mut self, upstream_delta: f64, input: &mut Node) {
        debug_assert_eq!(input.id(), self.input_node);
        self.weight_delta = upstream_delta * input.post_activation();
        input.accumulate_delta(upstream_delta * self.weight);
    }
}
