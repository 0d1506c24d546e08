/*
 * @Description  : 网络节点：保存激活前/后的值、梯度与偏置，以及入边/出边的索引
 *
 * 节点不拥有边，只记录边在 `Network` 边数组中的 `EdgeId`。
 * 需要读写邻居节点的前向/反向传播由 `Network::propagate_forward/propagate_backward` 驱动，
 * 本模块只提供节点自身的局部步骤。
 */

mod node;

pub use node::Node;

use super::display::format_node_display;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 节点类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// 接收外部数据，无偏置，不参与反向传播
    Input,
    /// 有可训练偏置，前向与反向均参与
    Hidden,
    /// 不再向后层传播信号
    Output,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Input => "Input",
            Self::Hidden => "Hidden",
            Self::Output => "Output",
        };
        write!(f, "{name}")
    }
}

/// 节点的不可变身份，用于诊断信息（例如重复边错误）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeLabel {
    pub id: NodeId,
    pub layer: usize,
    pub number: usize,
    pub kind: NodeKind,
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            format_node_display(self.id, self.layer, self.number, self.kind)
        )
    }
}
