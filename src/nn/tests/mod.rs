mod network_backward;

use crate::nn::{ActivationKind, Linear, Network, NodeId, NodeKind, Sigmoid};

/// 规格示例网络：2 个输入 → 1 个 Sigmoid 隐藏节点（偏置 0.1）→ 1 个 Linear 输出节点
///
/// 隐藏节点入边权重为 0.5 与 -0.3，输出节点入边权重为 1.0
pub(super) struct WorkedExample {
    pub network: Network,
    pub inputs: [NodeId; 2],
    pub hidden: NodeId,
    pub output: NodeId,
}

pub(super) fn worked_example() -> WorkedExample {
    let mut network = Network::with_name("worked_example");
    let i0 = network.add_node(0, NodeKind::Input, ActivationKind::from(Linear));
    let i1 = network.add_node(0, NodeKind::Input, ActivationKind::from(Linear));
    let hidden = network.add_node(1, NodeKind::Hidden, ActivationKind::from(Sigmoid));
    let output = network.add_node(2, NodeKind::Output, ActivationKind::from(Linear));

    let e0 = network.connect(i0, hidden).unwrap();
    let e1 = network.connect(i1, hidden).unwrap();
    let e2 = network.connect(hidden, output).unwrap();
    network.set_edge_weight(e0, 0.5).unwrap();
    network.set_edge_weight(e1, -0.3).unwrap();
    network.set_edge_weight(e2, 1.0).unwrap();
    network.set_bias(hidden, 0.1).unwrap();

    WorkedExample {
        network,
        inputs: [i0, i1],
        hidden,
        output,
    }
}

/// 全连接的分层网络：`sizes[0]` 个输入、中间若干隐藏层、`sizes.last()` 个输出
pub(super) fn dense_network(
    sizes: &[usize],
    hidden_activation: ActivationKind,
    output_activation: ActivationKind,
    seed: u64,
) -> Network {
    let mut network = Network::new_with_seed(seed);
    let mut layers: Vec<Vec<NodeId>> = Vec::new();
    for (layer, &size) in sizes.iter().enumerate() {
        let (kind, activation) = if layer == 0 {
            (NodeKind::Input, ActivationKind::from(Linear))
        } else if layer == sizes.len() - 1 {
            (NodeKind::Output, output_activation)
        } else {
            (NodeKind::Hidden, hidden_activation)
        };
        layers.push(
            (0..size)
                .map(|_| network.add_node(layer, kind, activation))
                .collect(),
        );
    }
    for pair in layers.windows(2) {
        for &from in &pair[0] {
            for &to in &pair[1] {
                network.connect(from, to).unwrap();
            }
        }
    }
    network
}
