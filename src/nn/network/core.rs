use super::Network;
use crate::nn::activation::ActivationKind;
use crate::nn::edge::{Edge, EdgeId};
use crate::nn::error::NetworkError;
use crate::nn::nodes::{Node, NodeId, NodeKind};
use rand::SeedableRng;
use rand::rngs::StdRng;

impl Network {
    // ========== 创建 ==========

    pub fn new() -> Self {
        Self::with_name("default_network")
    }

    /// 创建一个带固定种子的网络（确保权重初始化可重复）
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_name_and_seed("default_network", seed)
    }

    pub fn with_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            nodes: Vec::new(),
            edges: Vec::new(),
            rng: None,
        }
    }

    pub fn with_name_and_seed(name: &str, seed: u64) -> Self {
        Self {
            name: name.to_string(),
            nodes: Vec::new(),
            edges: Vec::new(),
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }

    /// 设置/重置网络的随机种子
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = Some(StdRng::seed_from_u64(seed));
    }

    pub const fn has_seed(&self) -> bool {
        self.rng.is_some()
    }

    // ========== 基础访问器 ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, NetworkError> {
        self.nodes.get(id.0).ok_or(NetworkError::NodeNotFound(id))
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, NetworkError> {
        self.nodes.get_mut(id.0).ok_or(NetworkError::NodeNotFound(id))
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edge(&self, id: EdgeId) -> Result<&Edge, NetworkError> {
        self.edges.get(id.0).ok_or(NetworkError::EdgeNotFound(id))
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 返回从 `input` 指向 `output` 的边（若存在）
    pub fn find_edge(&self, input: NodeId, output: NodeId) -> Result<Option<EdgeId>, NetworkError> {
        Ok(self
            .node(input)?
            .outgoing_edges()
            .iter()
            .copied()
            .find(|e| self.edges[e.0].output_node() == output))
    }

    pub fn set_edge_weight(&mut self, id: EdgeId, weight: f64) -> Result<(), NetworkError> {
        self.edges
            .get_mut(id.0)
            .ok_or(NetworkError::EdgeNotFound(id))?
            .set_weight(weight);
        Ok(())
    }

    pub fn set_bias(&mut self, id: NodeId, bias: f64) -> Result<(), NetworkError> {
        self.node_mut(id)?.set_bias(bias);
        Ok(())
    }

    /// 所有节点按（层号，创建顺序）排序后的 ID，前向传播与参数扁平化都使用这一顺序
    pub fn layer_order(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.nodes.iter().map(Node::id).collect();
        // 稳定排序，同层节点保持创建顺序
        ids.sort_by_key(|id| self.nodes[id.0].layer());
        ids
    }

    /// 层序下的所有输入节点
    pub fn input_ids(&self) -> Vec<NodeId> {
        self.ids_of_kind(NodeKind::Input)
    }

    /// 层序下的所有输出节点
    pub fn output_ids(&self) -> Vec<NodeId> {
        self.ids_of_kind(NodeKind::Output)
    }

    fn ids_of_kind(&self, kind: NodeKind) -> Vec<NodeId> {
        self.layer_order()
            .into_iter()
            .filter(|id| self.nodes[id.0].kind() == kind)
            .collect()
    }

    // ========== 构建 ==========

    /// 在 `layer` 层新建一个节点，层内序号为该层已有节点数
    pub fn add_node(&mut self, layer: usize, kind: NodeKind, activation: ActivationKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        let number = self.nodes.iter().filter(|n| n.layer() == layer).count();
        self.nodes.push(Node::new(id, layer, number, kind, activation));
        id
    }

    /// 新建一条从 `input` 指向 `output` 的边，并在两端节点上注册，新边的权重为 0
    ///
    /// 除重复边外，以下情况也会被拒绝（构建时一次性保证层序即拓扑序）：
    /// - 自环
    /// - 输入节点的层号不小于输出节点的层号
    /// - 从 Output 节点引出，或指向 Input 节点
    pub fn connect(&mut self, input: NodeId, output: NodeId) -> Result<EdgeId, NetworkError> {
        let input_label = self.node(input)?.label();
        let output_label = self.node(output)?.label();

        if input == output {
            return Err(NetworkError::InvalidConnection(format!(
                "{input_label}不能连接到自身"
            )));
        }
        if input_label.layer >= output_label.layer {
            return Err(NetworkError::InvalidConnection(format!(
                "边只能从低层指向高层，但{input_label}的层号不小于{output_label}"
            )));
        }
        if input_label.kind == NodeKind::Output {
            return Err(NetworkError::InvalidConnection(format!(
                "输出{input_label}不能有出边"
            )));
        }
        if output_label.kind == NodeKind::Input {
            return Err(NetworkError::InvalidConnection(format!(
                "输入{output_label}不能有入边"
            )));
        }

        let edge_id = EdgeId(self.edges.len());
        // 出边与入边列表互为镜像，出边检查通过后入边检查不会失败
        self.nodes[input.0].add_outgoing_edge(edge_id, output_label, &self.edges)?;
        self.nodes[output.0].add_incoming_edge(edge_id, input_label, &self.edges)?;
        self.edges.push(Edge::new(input, output));

        tracing::debug!("创建了从{input_label}到{output_label}的边{edge_id}");
        Ok(edge_id)
    }

    // ========== 初始化 ==========

    /// 初始化单个节点的偏置与其入边权重（N(0, 1) / sqrt(fan_in)）
    pub fn initialize_node(&mut self, id: NodeId, bias: f64) -> Result<(), NetworkError> {
        let node = self.nodes.get_mut(id.0).ok_or(NetworkError::NodeNotFound(id))?;
        match self.rng.as_mut() {
            Some(rng) => node.initialize_weights_and_bias(bias, &mut self.edges, rng),
            None => node.initialize_weights_and_bias(bias, &mut self.edges, &mut rand::thread_rng()),
        }
        Ok(())
    }

    /// 按层序初始化所有非输入节点：偏置设为 `bias`，入边权重随机初始化。
    /// 整个过程共用网络的同一个随机数生成器，设了种子时结果可复现
    pub fn initialize_weights_and_bias(&mut self, bias: f64) {
        let ids = self.layer_order();
        let mut thread_rng;
        let rng: &mut dyn rand::RngCore = match self.rng.as_mut() {
            Some(rng) => rng,
            None => {
                thread_rng = rand::thread_rng();
                &mut thread_rng
            }
        };

        for id in ids {
            let node = &mut self.nodes[id.0];
            if node.kind() != NodeKind::Input {
                node.initialize_weights_and_bias(bias, &mut self.edges, rng);
            }
        }

        tracing::debug!(
            "网络{}已初始化：{}个节点，{}条边，偏置={bias}",
            self.name,
            self.nodes.len(),
            self.edges.len()
        );
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}
