use super::{NodeId, NodeKind, NodeLabel};
use crate::distribution::standard_normal;
use crate::nn::activation::{ActivationKind, Linear, Sigmoid, Softmax, Tanh, TraitActivation};
use crate::nn::edge::{Edge, EdgeId};
use crate::nn::error::{EdgeDirection, NetworkError};
use rand::Rng;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    layer: usize,
    // 层内序号，主要用于诊断信息
    number: usize,
    kind: NodeKind,
    activation: ActivationKind,

    pre_activation: f64,
    post_activation: f64,
    // 损失对 post_activation 的梯度（反向步骤后变为对 pre_activation 的梯度）
    delta: f64,
    bias: f64,
    bias_delta: f64,

    // 按插入顺序保存，同时也决定了扁平化参数的顺序
    incoming: Vec<EdgeId>,
    outgoing: Vec<EdgeId>,
}

impl Node {
    pub fn new(
        id: NodeId,
        layer: usize,
        number: usize,
        kind: NodeKind,
        activation: ActivationKind,
    ) -> Self {
        let node = Self {
            id,
            layer,
            number,
            kind,
            activation,
            pre_activation: 0.0,
            post_activation: 0.0,
            delta: 0.0,
            bias: 0.0,
            bias_delta: 0.0,
            incoming: Vec::new(),
            outgoing: Vec::new(),
        };
        tracing::trace!("创建{}", node);
        node
    }

    // ========== 基础访问器 ==========

    pub const fn id(&self) -> NodeId {
        self.id
    }

    pub const fn layer(&self) -> usize {
        self.layer
    }

    pub const fn number(&self) -> usize {
        self.number
    }

    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    pub const fn activation(&self) -> ActivationKind {
        self.activation
    }

    pub const fn label(&self) -> NodeLabel {
        NodeLabel {
            id: self.id,
            layer: self.layer,
            number: self.number,
            kind: self.kind,
        }
    }

    pub const fn pre_activation(&self) -> f64 {
        self.pre_activation
    }

    /// 输入节点由调用方在 `reset` 之后写入数据
    pub fn set_pre_activation(&mut self, value: f64) {
        self.pre_activation = value;
    }

    pub(in crate::nn) fn accumulate_pre_activation(&mut self, value: f64) {
        self.pre_activation += value;
    }

    pub const fn post_activation(&self) -> f64 {
        self.post_activation
    }

    pub const fn delta(&self) -> f64 {
        self.delta
    }

    /// 输出节点的损失梯度由外部注入
    pub fn set_delta(&mut self, delta: f64) {
        self.delta = delta;
    }

    pub(in crate::nn) fn accumulate_delta(&mut self, delta: f64) {
        self.delta += delta;
    }

    pub const fn bias(&self) -> f64 {
        self.bias
    }

    pub fn set_bias(&mut self, bias: f64) {
        self.bias = bias;
    }

    pub const fn bias_delta(&self) -> f64 {
        self.bias_delta
    }

    pub fn incoming_edges(&self) -> &[EdgeId] {
        &self.incoming
    }

    pub fn outgoing_edges(&self) -> &[EdgeId] {
        &self.outgoing
    }

    pub fn fan_in(&self) -> usize {
        self.incoming.len()
    }

    // ========== 重置 ==========

    /// 清零本次计算相关的值，以及所有出边的权重梯度。
    /// 每次前向传播前都必须调用，否则 pre_activation 与 delta 会在多次计算间累加
    pub fn reset(&mut self, edges: &mut [Edge]) {
        tracing::trace!("重置{}", self);
        self.pre_activation = 0.0;
        self.post_activation = 0.0;
        self.delta = 0.0;
        self.bias_delta = 0.0;

        for edge_id in &self.outgoing {
            edges[edge_id.0].clear_weight_delta();
        }
    }

    // ========== 边的注册 ==========

    /// 添加一条指向 `neighbor` 的出边。
    /// 若已存在指向同一节点的出边则返回 `NetworkError::DuplicateEdge`
    pub fn add_outgoing_edge(
        &mut self,
        edge_id: EdgeId,
        neighbor: NodeLabel,
        edges: &[Edge],
    ) -> Result<(), NetworkError> {
        if self
            .outgoing
            .iter()
            .any(|e| edges[e.0].output_node() == neighbor.id)
        {
            return Err(NetworkError::DuplicateEdge {
                node: self.label(),
                neighbor,
                direction: EdgeDirection::Outgoing,
            });
        }

        tracing::trace!("{}添加了指向{}的出边", self, neighbor);
        self.outgoing.push(edge_id);
        Ok(())
    }

    /// 添加一条来自 `neighbor` 的入边。
    /// 若已存在来自同一节点的入边则返回 `NetworkError::DuplicateEdge`
    pub fn add_incoming_edge(
        &mut self,
        edge_id: EdgeId,
        neighbor: NodeLabel,
        edges: &[Edge],
    ) -> Result<(), NetworkError> {
        if self
            .incoming
            .iter()
            .any(|e| edges[e.0].input_node() == neighbor.id)
        {
            return Err(NetworkError::DuplicateEdge {
                node: self.label(),
                neighbor,
                direction: EdgeDirection::Incoming,
            });
        }

        tracing::trace!("{}添加了来自{}的入边", self, neighbor);
        self.incoming.push(edge_id);
        Ok(())
    }

    // ========== 参数扁平化 ==========

    /// 本节点在参数向量中占用的槽位数：隐藏节点 1 个偏置 + 每条出边 1 个权重
    pub fn weight_count(&self) -> usize {
        usize::from(self.kind == NodeKind::Hidden) + self.outgoing.len()
    }

    /// 从 `position` 开始写入偏置（仅隐藏节点）与各出边权重，返回写入的个数。
    /// `weights` 长度不足时会 panic
    pub fn get_weights(&self, edges: &[Edge], position: usize, weights: &mut [f64]) -> usize {
        let mut count = 0;
        if self.kind == NodeKind::Hidden {
            weights[position] = self.bias;
            count = 1;
        }
        for edge_id in &self.outgoing {
            weights[position + count] = edges[edge_id.0].weight();
            count += 1;
        }
        count
    }

    /// 与 `get_weights` 布局相同，写入的是偏置梯度与各出边的权重梯度
    pub fn get_deltas(&self, edges: &[Edge], position: usize, deltas: &mut [f64]) -> usize {
        let mut count = 0;
        if self.kind == NodeKind::Hidden {
            deltas[position] = self.bias_delta;
            count = 1;
        }
        for edge_id in &self.outgoing {
            deltas[position + count] = edges[edge_id.0].weight_delta();
            count += 1;
        }
        count
    }

    /// `get_weights` 的逆操作，返回读取的个数
    pub fn set_weights(&mut self, edges: &mut [Edge], position: usize, weights: &[f64]) -> usize {
        let mut count = 0;
        if self.kind == NodeKind::Hidden {
            self.bias = weights[position];
            count = 1;
        }
        for edge_id in &self.outgoing {
            edges[edge_id.0].set_weight(weights[position + count]);
            count += 1;
        }
        count
    }

    // ========== 激活函数 ==========

    pub fn apply_linear(&mut self) {
        self.post_activation = Linear.apply(self.pre_activation);
    }

    pub fn apply_sigmoid(&mut self) {
        self.post_activation = Sigmoid.apply(self.pre_activation);
    }

    pub fn apply_tanh(&mut self) {
        self.post_activation = Tanh.apply(self.pre_activation);
    }

    /// `softmax_sum` 为整个输出层的 Σe^(pre_activation)，由调用方计算且须为正数
    pub fn apply_softmax(&mut self, softmax_sum: f64) {
        self.post_activation = Softmax.apply(self.pre_activation) / softmax_sum;
    }

    // ========== 前向/反向的局部步骤 ==========

    /// 前向传播中只涉及本节点的部分：加上偏置，再按激活类型计算 post_activation。
    /// Softmax 需要同层其他节点的值，不在这里处理，post_activation 保持不变
    pub(in crate::nn) fn forward_step(&mut self) {
        self.pre_activation += self.bias;
        if !self.activation.is_softmax() {
            self.post_activation = self.activation.apply(self.pre_activation);
        }
    }

    /// 反向传播中只涉及本节点的部分，返回是否还需要继续沿入边传播。
    ///
    /// 输入节点直接返回 false。其余节点将 delta 乘以激活函数在 post_activation 处的导数，
    /// 并令 bias_delta = delta。Softmax 节点的 delta 原样保留：调用方注入的应当已是对
    /// pre_activation 的梯度（如 softmax + 交叉熵）
    pub(in crate::nn) fn backward_step(&mut self) -> bool {
        if self.kind == NodeKind::Input {
            return false;
        }
        if !self.activation.is_softmax() {
            self.delta *= self.activation.derivative(self.post_activation);
        }
        self.bias_delta = self.delta;
        true
    }

    // ========== 初始化 ==========

    /// 设置偏置，并将每条入边的权重初始化为 N(0, 1) / sqrt(fan_in)
    pub fn initialize_weights_and_bias<R: Rng + ?Sized>(
        &mut self,
        bias: f64,
        edges: &mut [Edge],
        rng: &mut R,
    ) {
        self.bias = bias;
        let scale = (self.incoming.len() as f64).sqrt();
        for edge_id in &self.incoming {
            edges[edge_id.0].set_weight(standard_normal(rng) / scale);
        }
    }

    /// 详细信息（调试用）
    pub fn to_detailed_string(&self) -> String {
        format!(
            "{}[activation={}, 入边数={}, 出边数={}, pre={}, post={}, delta={}]",
            self,
            self.activation,
            self.incoming.len(),
            self.outgoing.len(),
            self.pre_activation,
            self.post_activation,
            self.delta
        )
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
