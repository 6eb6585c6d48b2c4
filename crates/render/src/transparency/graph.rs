//! "Must draw before" graph over object indices.

/// A back edge was found: the constraints cannot all be satisfied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("draw order cycle through object {node}")]
pub struct CycleDetected {
    pub node: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Directed graph with nodes `0..node_count`. An edge `a -> b` means `a` is
/// drawn before `b`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    successors: Vec<Vec<usize>>,
}

impl DependencyGraph {
    pub fn new(node_count: usize) -> Self {
        Self {
            successors: vec![Vec::new(); node_count],
        }
    }

    /// Drop all edges and resize to `node_count` nodes.
    pub fn reset(&mut self, node_count: usize) {
        self.successors.iter_mut().for_each(Vec::clear);
        self.successors.resize_with(node_count, Vec::new);
    }

    pub fn node_count(&self) -> usize {
        self.successors.len()
    }

    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }

    /// Add `from -> to`. Returns `false` for duplicates and for indices
    /// outside the graph.
    pub fn add_edge(&mut self, from: usize, to: usize) -> bool {
        let count = self.successors.len();
        let Some(successors) = self.successors.get_mut(from).filter(|_| to < count) else {
            return false;
        };
        if successors.contains(&to) {
            return false;
        }
        successors.push(to);
        true
    }

    pub fn successors(&self, node: usize) -> &[usize] {
        self.successors
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every node, ordered so each edge points forward.
    ///
    /// Depth-first post-order, reversed. Roots and successors are visited in
    /// reverse insertion order so unconstrained nodes keep their original
    /// relative order in the output. The walk uses an explicit stack.
    pub fn topological_order(&self) -> Result<Vec<usize>, CycleDetected> {
        let count = self.successors.len();
        let mut marks = vec![Mark::Unvisited; count];
        let mut post_order = Vec::with_capacity(count);
        // (node, successors already explored)
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for root in (0..count).rev() {
            if marks[root] != Mark::Unvisited {
                continue;
            }
            marks[root] = Mark::InProgress;
            stack.push((root, 0));

            while let Some(frame) = stack.last_mut() {
                let (node, explored) = *frame;
                let successors = &self.successors[node];

                if explored == successors.len() {
                    marks[node] = Mark::Done;
                    post_order.push(node);
                    stack.pop();
                    continue;
                }

                frame.1 += 1;
                let next = successors[successors.len() - 1 - explored];
                match marks[next] {
                    Mark::InProgress => return Err(CycleDetected { node: next }),
                    Mark::Unvisited => {
                        marks[next] = Mark::InProgress;
                        stack.push((next, 0));
                    }
                    Mark::Done => {}
                }
            }
        }

        post_order.reverse();
        Ok(post_order)
    }
}
