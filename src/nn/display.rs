use super::NodeId;
use super::nodes::NodeKind;

/// 格式化神经网络节点的显示
///
/// # Arguments
/// * `id` - 节点ID
/// * `layer` - 节点所在层
/// * `number` - 节点在层内的序号
/// * `kind` - 节点类型
///
/// # Returns
/// 返回格式化后的字符串，格式为：`节点[id={}, layer={}, number={}, kind={}]`
pub(in crate::nn) fn format_node_display(
    id: NodeId,
    layer: usize,
    number: usize,
    kind: NodeKind,
) -> String {
    format!("节点[id={id}, layer={layer}, number={number}, kind={kind}]")
}
