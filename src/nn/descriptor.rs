/*
 * @Description  : 网络描述符（Network Descriptor）
 *                 用于序列化与调试输出的统一中间表示
 */

use super::activation::ActivationKind;
use super::nodes::NodeKind;
use serde::{Deserialize, Serialize};

/// 网络的可序列化描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDescriptor {
    /// 格式版本（用于向后兼容）
    pub version: String,
    /// 网络名称
    pub name: String,
    /// 所有节点描述（按层序排列）
    pub nodes: Vec<NodeDescriptor>,
}

/// 节点描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    /// 节点 ID
    pub id: usize,
    pub layer: usize,
    pub number: usize,
    pub kind: NodeKind,
    pub activation: ActivationKind,
    /// 入边的输入节点 ID 列表（定义拓扑）
    pub inputs: Vec<usize>,
    /// 本节点在扁平化参数向量中占用的槽位数
    pub param_count: usize,
}

impl NetworkDescriptor {
    /// 创建新的网络描述符
    pub fn new(name: &str) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            name: name.to_string(),
            nodes: Vec::new(),
        }
    }

    /// 添加节点描述
    pub fn add_node(&mut self, node: NodeDescriptor) {
        self.nodes.push(node);
    }

    /// 获取总参数量（与 `Network::parameter_count` 一致）
    pub fn total_params(&self) -> usize {
        self.nodes.iter().map(|n| n.param_count).sum()
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
