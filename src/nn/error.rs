/*
 * @Description  : 网络构建与计算的错误类型
 */

use super::edge::EdgeId;
use super::nodes::{NodeId, NodeLabel};
use std::fmt;
use thiserror::Error;

/// 重复边所在的方向（相对于报错节点）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDirection {
    Incoming,
    Outgoing,
}

impl fmt::Display for EdgeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Incoming => "入边",
            Self::Outgoing => "出边",
        };
        write!(f, "{name}")
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// 同一对（输入节点，输出节点）之间注册了第二条边，图构建应当中止
    #[error("无法为{node}添加{direction}：它与{neighbor}之间已存在一条边")]
    DuplicateEdge {
        node: NodeLabel,
        neighbor: NodeLabel,
        direction: EdgeDirection,
    },
    #[error("节点{0}不存在")]
    NodeNotFound(NodeId),
    #[error("边{0}不存在")]
    EdgeNotFound(EdgeId),
    #[error("非法连接：{0}")]
    InvalidConnection(String),
    #[error("{message}：预期长度为{expected}，实际为{got}")]
    DimensionMismatch {
        expected: usize,
        got: usize,
        message: String,
    },
}
