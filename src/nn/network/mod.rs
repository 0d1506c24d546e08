/*
 * @Description  : Network 前馈网络的容器实现
 *
 * 各 impl 块分散在子模块中：
 * - core.rs: 创建、节点/边的构建与访问、权重初始化
 * - pass.rs: reset + 前向/反向传播（单节点步骤与整网驱动）
 * - params.rs: 扁平化参数向量的读写
 * - describe.rs: describe
 */

mod core;
mod describe;
mod params;
mod pass;

use super::edge::Edge;
use super::nodes::Node;
use rand::rngs::StdRng;

/// 前馈网络：节点与边的唯一所有者
///
/// 节点与边分别存放在两个数组（arena）中，彼此只通过 `NodeId` / `EdgeId` 索引引用。
///
/// # 遍历顺序约定
/// 一次训练步骤须按如下顺序调用：
/// `reset` → 写入输入 → 前向（层号升序）→ 外部注入输出层 delta → 反向（层号降序）。
/// 单节点原语 `propagate_forward` / `propagate_backward` 不检查顺序，违反顺序会静默地得到错误梯度；
/// `forward` / `backward` 按 `layer_order` 遍历，`connect` 保证每条边都从低层指向高层，因此层序即拓扑序。
#[derive(Debug, Clone)]
pub struct Network {
    name: String,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    /// 网络级别的随机数生成器（用于权重初始化）
    /// None 表示使用默认的 thread_rng（非确定性）
    rng: Option<StdRng>,
}
