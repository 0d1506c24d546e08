/*
 * @Description  : 扁平化参数向量
 *
 * 布局：按 `layer_order` 依次拼接每个节点的 get_weights 结果，
 * 即隐藏节点的偏置（若有）后接其各出边的权重。梯度向量与之布局相同。
 */

use super::Network;
use crate::nn::error::NetworkError;
use ndarray::Array1;

impl Network {
    /// 可训练参数的总数
    pub fn parameter_count(&self) -> usize {
        self.nodes.iter().map(|n| n.weight_count()).sum()
    }

    /// 所有可训练参数（偏置与权重）组成的向量
    pub fn get_weights(&self) -> Array1<f64> {
        let mut weights = vec![0.0; self.parameter_count()];
        let mut position = 0;
        for id in self.layer_order() {
            position += self.nodes[id.0].get_weights(&self.edges, position, &mut weights);
        }
        Array1::from(weights)
    }

    /// 与 `get_weights` 布局相同的梯度向量
    pub fn get_deltas(&self) -> Array1<f64> {
        let mut deltas = vec![0.0; self.parameter_count()];
        let mut position = 0;
        for id in self.layer_order() {
            position += self.nodes[id.0].get_deltas(&self.edges, position, &mut deltas);
        }
        Array1::from(deltas)
    }

    /// 从参数向量恢复所有偏置与权重，`weights` 须与 `get_weights` 的布局一致
    pub fn set_weights(&mut self, weights: &[f64]) -> Result<(), NetworkError> {
        let expected = self.parameter_count();
        if weights.len() != expected {
            return Err(NetworkError::DimensionMismatch {
                expected,
                got: weights.len(),
                message: "参数向量长度与网络的参数个数不一致".to_string(),
            });
        }

        let mut position = 0;
        for id in self.layer_order() {
            position += self.nodes[id.0].set_weights(&mut self.edges, position, weights);
        }
        Ok(())
    }
}
