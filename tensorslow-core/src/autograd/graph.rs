use crate::error::TensorSlowError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use std::collections::HashSet;
use std::sync::RwLock;

/// Identity of a graph node: the address of its shared `RwLock<TensorData>`.
///
/// Stable as long as some `Tensor` handle keeps the node alive, which holds for
/// every node reachable from a root during a traversal.
pub type NodeId = *const RwLock<TensorData>;

/// Orders every node reachable from `root` so that each node comes after all
/// of its predecessors (post-order depth-first search).
///
/// Each node appears exactly once, even when it is reachable along several
/// paths. The traversal uses an explicit stack, so long chains do not grow the
/// call stack.
pub fn topological_sort(root: &Tensor) -> Vec<Tensor> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Tensor> = Vec::new();
    // (node, predecessors already scheduled)
    let mut stack: Vec<(Tensor, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let predecessors = node.predecessors();
        stack.push((node, true));
        for predecessor in predecessors {
            if !visited.contains(&predecessor.node_id()) {
                stack.push((predecessor, false));
            }
        }
    }
    sorted_list
}

/// Computes gradients of `root` with respect to every ancestor.
///
/// Seeds `root.grad` with ones, then applies each node's backward rule once,
/// consumers before producers. The result is the mutation of `grad` across the
/// graph.
///
/// # Errors
/// A `ShapeMismatch` raised by a rule aborts the pass. Gradients are then
/// partially accumulated and the whole graph should be discarded.
pub fn backward(root: &Tensor) -> Result<(), TensorSlowError> {
    backward_with(root, |_| {})
}

/// Same as [`backward`], calling `visitor` on each node right before its
/// backward rule is applied.
pub fn backward_with<F>(root: &Tensor, mut visitor: F) -> Result<(), TensorSlowError>
where
    F: FnMut(&Tensor),
{
    let sorted_nodes = topological_sort(root);
    log::debug!(
        "backward: root shape {:?}, {} node(s) in graph",
        root.shape(),
        sorted_nodes.len()
    );

    seed_root(root)?;

    for node in sorted_nodes.iter().rev() {
        visitor(node);
        let op = node.read_data().backward_op.clone();
        log::trace!("backward: applying '{}' rule", op.label());
        if let Err(err) = op.apply(node) {
            if matches!(err, TensorSlowError::ShapeMismatch { .. }) {
                log::error!("backward aborted, gradients are left partially accumulated: {}", err);
            }
            return Err(err);
        }
    }
    Ok(())
}

/// Sets `root.grad` to ones (d root / d root).
///
/// A root that does not require gradients only ever holds the previous seed,
/// which `zero_grad` leaves alone, so it is not checked for staleness.
fn seed_root(root: &Tensor) -> Result<(), TensorSlowError> {
    let mut guard = root.write_data();
    if guard.requires_grad && guard.grad.iter().any(|&g| g != 0.0) {
        if cfg!(feature = "strict-grad") {
            return Err(TensorSlowError::StaleGradient {
                shape: guard.shape.clone(),
            });
        }
        if cfg!(debug_assertions) {
            log::warn!(
                "backward root of shape {:?} already holds a gradient; gradients accumulate across passes unless zero_grad() is called",
                guard.shape
            );
        }
    }
    guard.grad.iter_mut().for_each(|g| *g = 1.0);
    Ok(())
}

/// Resets `grad` to zero on every node reachable from `root` that requires
/// gradients. Nodes that do not require gradients are left untouched.
///
/// Must run between successive backward passes over overlapping graphs,
/// otherwise gradients silently accumulate.
pub fn zero_grad(root: &Tensor) {
    let sorted_nodes = topological_sort(root);
    let mut reset = 0usize;
    for node in sorted_nodes.iter().rev() {
        let mut guard = node.write_data();
        if guard.requires_grad {
            guard.grad.iter_mut().for_each(|g| *g = 0.0);
            reset += 1;
        }
    }
    log::debug!(
        "zero_grad: reset {} of {} node(s)",
        reset,
        sorted_nodes.len()
    );
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
