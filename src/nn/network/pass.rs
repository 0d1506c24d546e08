use super::Network;
use crate::nn::error::NetworkError;
use crate::nn::nodes::{NodeId, NodeKind};

impl Network {
    // ========== 重置 ==========

    /// 重置单个节点（及其出边的权重梯度）
    pub fn reset_node(&mut self, id: NodeId) -> Result<(), NetworkError> {
        let node = self.nodes.get_mut(id.0).ok_or(NetworkError::NodeNotFound(id))?;
        node.reset(&mut self.edges);
        Ok(())
    }

    /// 重置所有节点，每次前向传播前调用
    pub fn reset(&mut self) {
        for node in &mut self.nodes {
            node.reset(&mut self.edges);
        }
    }

    // ========== 单节点原语 ==========

    /// 单个节点的前向步骤：加偏置并计算激活值，非输出节点再把 `weight * post_activation`
    /// 累加到每条出边所指节点的 pre_activation 上。
    ///
    /// 前置条件：所有指向本节点的低层节点都已完成前向步骤
    pub fn propagate_forward(&mut self, id: NodeId) -> Result<(), NetworkError> {
        let node = self.node_mut(id)?;
        node.forward_step();
        if node.kind() == NodeKind::Output {
            return Ok(());
        }

        let post_activation = node.post_activation();
        for k in 0..self.nodes[id.0].outgoing_edges().len() {
            let edge = &self.edges[self.nodes[id.0].outgoing_edges()[k].0];
            self.nodes[edge.output_node().0].accumulate_pre_activation(edge.weight() * post_activation);
        }
        Ok(())
    }

    /// 单个节点的反向步骤：乘以激活函数导数、记录偏置梯度，再经每条入边把梯度传给输入节点。
    /// 输入节点什么也不做。
    ///
    /// 前置条件：本节点的 delta 已累加完毕，即它所有出边指向的高层节点都已完成反向步骤
    /// （输出节点则是已由外部注入损失梯度）
    pub fn propagate_backward(&mut self, id: NodeId) -> Result<(), NetworkError> {
        let node = self.node_mut(id)?;
        if !node.backward_step() {
            return Ok(());
        }

        let delta = node.delta();
        for k in 0..self.nodes[id.0].incoming_edges().len() {
            let edge_id = self.nodes[id.0].incoming_edges()[k];
            let edge = &mut self.edges[edge_id.0];
            let input = &mut self.nodes[edge.input_node().0];
            edge.propagate_backward(delta, input);
        }
        Ok(())
    }

    // ========== 整网驱动 ==========

    /// 按顺序为输入节点写入数据（须在 `reset` 之后调用）
    pub fn set_input_values(&mut self, values: &[f64]) -> Result<(), NetworkError> {
        let input_ids = self.input_ids();
        if values.len() != input_ids.len() {
            return Err(NetworkError::DimensionMismatch {
                expected: input_ids.len(),
                got: values.len(),
                message: "输入数据的个数与输入节点数不一致".to_string(),
            });
        }
        for (id, value) in input_ids.into_iter().zip(values) {
            self.nodes[id.0].set_pre_activation(*value);
        }
        Ok(())
    }

    /// 按层号升序对所有节点执行前向步骤。
    ///
    /// 节点自身的前向步骤不处理 Softmax，这里在最后统一归一化：
    /// 对所有 Softmax 输出节点求 Σe^(pre_activation)，再逐个调用 `apply_softmax`
    pub fn forward(&mut self) -> Result<(), NetworkError> {
        for id in self.layer_order() {
            self.propagate_forward(id)?;
        }

        let softmax_ids: Vec<NodeId> = self
            .output_ids()
            .into_iter()
            .filter(|id| self.nodes[id.0].activation().is_softmax())
            .collect();
        if !softmax_ids.is_empty() {
            let softmax_sum: f64 = softmax_ids
                .iter()
                .map(|id| self.nodes[id.0].pre_activation().exp())
                .sum();
            for id in &softmax_ids {
                self.nodes[id.0].apply_softmax(softmax_sum);
            }
        }

        tracing::debug!("网络{}完成前向传播", self.name);
        Ok(())
    }

    /// 按顺序返回输出节点的激活值
    pub fn output_values(&self) -> Vec<f64> {
        self.output_ids()
            .into_iter()
            .map(|id| self.nodes[id.0].post_activation())
            .collect()
    }

    /// 按顺序把外部损失函数对各输出的梯度写入输出节点的 delta
    pub fn set_output_deltas(&mut self, deltas: &[f64]) -> Result<(), NetworkError> {
        let output_ids = self.output_ids();
        if deltas.len() != output_ids.len() {
            return Err(NetworkError::DimensionMismatch {
                expected: output_ids.len(),
                got: deltas.len(),
                message: "输出梯度的个数与输出节点数不一致".to_string(),
            });
        }
        for (id, delta) in output_ids.into_iter().zip(deltas) {
            self.nodes[id.0].set_delta(*delta);
        }
        Ok(())
    }

    /// 按层号降序对所有节点执行反向步骤
    pub fn backward(&mut self) -> Result<(), NetworkError> {
        for id in self.layer_order().into_iter().rev() {
            self.propagate_backward(id)?;
        }
        tracing::debug!("网络{}完成反向传播", self.name);
        Ok(())
    }

    /// 推理：reset → 写入输入 → 前向，返回各输出节点的激活值
    pub fn predict(&mut self, inputs: &[f64]) -> Result<Vec<f64>, NetworkError> {
        self.reset();
        self.set_input_values(inputs)?;
        self.forward()?;
        Ok(self.output_values())
    }
}
