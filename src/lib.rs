//! # ffn_graph
//!
//! 以节点与带权边组成的有向图表示的最小前馈神经网络：
//! 支持前向推理、误差反向传播，以及将全部可训练参数扁平化为单个向量并还原。
//!
//! 数据集、训练循环/优化器、网络拓扑的设计与损失函数都由调用方提供，
//! 本 crate 只提供逐节点/逐边的计算原语和按层序驱动它们的 [`nn::Network`]。
//!

pub mod distribution;
pub mod nn;
pub mod utils;
