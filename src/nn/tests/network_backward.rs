use super::{dense_network, worked_example};
use crate::nn::{ActivationKind, Linear, Network, NodeKind, Sigmoid, Softmax, Tanh};
use approx::assert_abs_diff_eq;

/// 0.5 · Σ(y - t)²，对输出的梯度为 y - t
fn squared_error(network: &mut Network, inputs: &[f64], targets: &[f64]) -> f64 {
    let outputs = network.predict(inputs).unwrap();
    outputs
        .iter()
        .zip(targets)
        .map(|(y, t)| 0.5 * (y - t).powi(2))
        .sum()
}

/// -Σ t·ln(y)，配合 softmax 时对 pre_activation 的梯度为 y - t
fn cross_entropy(network: &mut Network, inputs: &[f64], targets: &[f64]) -> f64 {
    let outputs = network.predict(inputs).unwrap();
    -outputs
        .iter()
        .zip(targets)
        .map(|(y, t)| t * y.ln())
        .sum::<f64>()
}

fn analytic_gradient(network: &mut Network, inputs: &[f64], targets: &[f64]) -> Vec<f64> {
    let outputs = network.predict(inputs).unwrap();
    let deltas: Vec<f64> = outputs.iter().zip(targets).map(|(y, t)| y - t).collect();
    network.set_output_deltas(&deltas).unwrap();
    network.backward().unwrap();
    network.get_deltas().to_vec()
}

/// 逐个扰动参数，用中心差分估计梯度
fn numeric_gradient(
    network: &mut Network,
    loss: fn(&mut Network, &[f64], &[f64]) -> f64,
    inputs: &[f64],
    targets: &[f64],
) -> Vec<f64> {
    let eps = 1e-5;
    let weights = network.get_weights().to_vec();
    let mut gradient = Vec::with_capacity(weights.len());
    for k in 0..weights.len() {
        let mut perturbed = weights.clone();
        perturbed[k] = weights[k] + eps;
        network.set_weights(&perturbed).unwrap();
        let plus = loss(network, inputs, targets);
        perturbed[k] = weights[k] - eps;
        network.set_weights(&perturbed).unwrap();
        let minus = loss(network, inputs, targets);
        gradient.push((plus - minus) / (2.0 * eps));
    }
    network.set_weights(&weights).unwrap();
    gradient
}

#[test]
fn test_worked_example_backward() {
    let mut example = worked_example();
    let network = &mut example.network;
    network.set_bias(example.hidden, 0.0).unwrap();

    network.predict(&[1.0, 2.0]).unwrap();
    network.set_output_deltas(&[1.0]).unwrap();
    network.backward().unwrap();

    let hidden = network.node(example.hidden).unwrap();
    let y = hidden.post_activation();
    // 输出为 Linear：delta 原样保留；隐藏节点：1.0 × 权重 1.0 × sigmoid'(y)
    assert_abs_diff_eq!(network.node(example.output).unwrap().delta(), 1.0, epsilon = 1e-15);
    assert_abs_diff_eq!(hidden.delta(), y * (1.0 - y), epsilon = 1e-15);
    assert_abs_diff_eq!(hidden.bias_delta(), y * (1.0 - y), epsilon = 1e-15);

    let hidden_to_output = network.find_edge(example.hidden, example.output).unwrap().unwrap();
    assert_abs_diff_eq!(network.edge(hidden_to_output).unwrap().weight_delta(), y, epsilon = 1e-15);

    for (input, x) in example.inputs.iter().zip([1.0, 2.0]) {
        let edge = network.find_edge(*input, example.hidden).unwrap().unwrap();
        assert_abs_diff_eq!(
            network.edge(edge).unwrap().weight_delta(),
            y * (1.0 - y) * x,
            epsilon = 1e-15
        );
    }

    // 输入节点不做反向步骤：delta 只是出边贡献之和，bias_delta 保持为 0
    let input = network.node(example.inputs[0]).unwrap();
    assert_abs_diff_eq!(input.delta(), y * (1.0 - y) * 0.5, epsilon = 1e-15);
    assert_eq!(input.bias_delta(), 0.0);
}

#[test]
fn test_single_node_backward_primitives() {
    let mut example = worked_example();
    let network = &mut example.network;
    network.predict(&[1.0, 2.0]).unwrap();
    network.set_output_deltas(&[2.0]).unwrap();

    network.propagate_backward(example.output).unwrap();
    // 输出节点完成后，隐藏节点的 delta 已累加了 2.0 × 1.0
    assert_abs_diff_eq!(network.node(example.hidden).unwrap().delta(), 2.0, epsilon = 1e-15);

    network.propagate_backward(example.hidden).unwrap();
    // 隐藏节点 post = 0.5，sigmoid' = 0.25
    assert_abs_diff_eq!(network.node(example.hidden).unwrap().delta(), 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(network.node(example.inputs[1]).unwrap().delta(), -0.15, epsilon = 1e-12);

    // 输入节点的反向步骤什么也不做
    network.propagate_backward(example.inputs[1]).unwrap();
    assert_abs_diff_eq!(network.node(example.inputs[1]).unwrap().delta(), -0.15, epsilon = 1e-12);
}

#[test]
fn test_gradient_check_squared_error() {
    for (hidden, output) in [
        (ActivationKind::from(Sigmoid), ActivationKind::from(Linear)),
        (ActivationKind::from(Tanh), ActivationKind::from(Sigmoid)),
        (ActivationKind::from(Linear), ActivationKind::from(Tanh)),
    ] {
        let mut network = dense_network(&[3, 4, 3, 2], hidden, output, 2024);
        network.initialize_weights_and_bias(0.1);
        let inputs = [0.5, -1.0, 0.25];
        let targets = [0.3, -0.2];

        let analytic = analytic_gradient(&mut network, &inputs, &targets);
        let numeric = numeric_gradient(&mut network, squared_error, &inputs, &targets);

        assert_eq!(analytic.len(), network.parameter_count());
        for (a, n) in analytic.iter().zip(&numeric) {
            assert_abs_diff_eq!(*a, *n, epsilon = 1e-6);
        }
    }
}

#[test]
fn test_gradient_check_with_skip_connection() {
    let mut network = Network::new_with_seed(8);
    let i0 = network.add_node(0, NodeKind::Input, ActivationKind::from(Linear));
    let i1 = network.add_node(0, NodeKind::Input, ActivationKind::from(Linear));
    let h = network.add_node(1, NodeKind::Hidden, ActivationKind::from(Tanh));
    let g = network.add_node(2, NodeKind::Hidden, ActivationKind::from(Sigmoid));
    let o = network.add_node(3, NodeKind::Output, ActivationKind::from(Linear));
    for (from, to) in [(i0, h), (i1, h), (h, g), (i1, g), (g, o), (h, o), (i0, o)] {
        network.connect(from, to).unwrap();
    }
    network.initialize_weights_and_bias(-0.2);

    let inputs = [0.9, -0.4];
    let targets = [1.5];
    let analytic = analytic_gradient(&mut network, &inputs, &targets);
    let numeric = numeric_gradient(&mut network, squared_error, &inputs, &targets);
    for (a, n) in analytic.iter().zip(&numeric) {
        assert_abs_diff_eq!(*a, *n, epsilon = 1e-6);
    }
}

#[test]
fn test_gradient_check_softmax_cross_entropy() {
    let mut network = dense_network(
        &[2, 4, 3],
        ActivationKind::from(Tanh),
        ActivationKind::from(Softmax),
        99,
    );
    network.initialize_weights_and_bias(0.05);
    let inputs = [0.7, -0.3];
    let targets = [0.0, 1.0, 0.0];

    // softmax 输出节点不乘导数，注入 y - t 即得到对 pre_activation 的梯度
    let analytic = analytic_gradient(&mut network, &inputs, &targets);
    let numeric = numeric_gradient(&mut network, cross_entropy, &inputs, &targets);
    for (a, n) in analytic.iter().zip(&numeric) {
        assert_abs_diff_eq!(*a, *n, epsilon = 1e-6);
    }
}

#[test]
fn test_reset_clears_gradients() {
    let mut network = dense_network(
        &[2, 2, 1],
        ActivationKind::from(Sigmoid),
        ActivationKind::from(Linear),
        1,
    );
    network.initialize_weights_and_bias(0.1);
    analytic_gradient(&mut network, &[1.0, 1.0], &[0.0]);
    assert!(network.get_deltas().iter().any(|d| *d != 0.0));

    network.reset();
    assert!(network.get_deltas().iter().all(|d| *d == 0.0));
    assert!(network.nodes().iter().all(|n| n.delta() == 0.0));
}
