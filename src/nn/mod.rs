/*
 * @Description  : 负责前馈神经网络（节点 + 边）的构建、前向推理与反向传播
 */

mod activation;
mod descriptor;
mod display;
mod edge;
mod error;
mod network;
mod nodes;

pub use activation::{ActivationKind, Linear, Sigmoid, Softmax, Tanh, TraitActivation};
pub use descriptor::{NetworkDescriptor, NodeDescriptor};
pub use edge::{Edge, EdgeId};
pub use error::{EdgeDirection, NetworkError};
pub use network::Network;
pub use nodes::{Node, NodeId, NodeKind, NodeLabel};

#[cfg(test)]
mod tests;
