use super::Network;
use crate::nn::descriptor::{NetworkDescriptor, NodeDescriptor};

impl Network {
    /// 导出网络的描述符（用于序列化、调试）
    ///
    /// # 示例
    /// ```ignore
    /// let descriptor = network.describe();
    /// println!("{}", descriptor.to_json().unwrap());
    /// ```
    pub fn describe(&self) -> NetworkDescriptor {
        let mut descriptor = NetworkDescriptor::new(&self.name);

        for id in self.layer_order() {
            let node = &self.nodes[id.0];
            let inputs = node
                .incoming_edges()
                .iter()
                .map(|e| self.edges[e.0].input_node().0)
                .collect();

            descriptor.add_node(NodeDescriptor {
                id: id.0,
                layer: node.layer(),
                number: node.number(),
                kind: node.kind(),
                activation: node.activation(),
                inputs,
                param_count: node.weight_count(),
            });
        }

        descriptor
    }
}
