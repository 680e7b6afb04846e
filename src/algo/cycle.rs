use itertools::Itertools;

use super::*;

/// Directed cycle detection with witness extraction.
///
/// [`Traversal::is_acyclic`] answers the yes/no question more cheaply via
/// topological search; this trait additionally produces the nodes of a cycle.
pub trait CycleDetection: DirectedAdjacencyList + Sized {
    /// Searches for a directed cycle and returns its nodes in edge order,
    /// i.e. the graph contains an edge from each returned node to its
    /// successor and from the last node back to the first.
    /// Returns `None` if the graph is acyclic.
    fn find_cycle(&self) -> Option<Vec<Node>>;

    /// Returns *true* if the graph contains a directed cycle.
    fn has_cycle(&self) -> bool {
        self.find_cycle().is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Color {
    #[default]
    White,
    Grey,
    Black,
}

struct CycleFrame {
    node: Node,
    neighbors: std::vec::IntoIter<Node>,
}

impl<G> CycleDetection for G
where
    G: DirectedAdjacencyList + Sized,
{
    fn find_cycle(&self) -> Option<Vec<Node>> {
        // Iterative DFS where grey nodes are exactly the ones on the current
        // path. A back edge into a grey node closes a cycle.
        let mut colors = vec![Color::White; self.len()];
        let mut path: Vec<Node> = Vec::with_capacity(32);
        let mut call_stack: Vec<CycleFrame> = Vec::with_capacity(32);

        for root in self.vertices() {
            if colors[root as usize] != Color::White {
                continue;
            }

            colors[root as usize] = Color::Grey;
            path.push(root);
            call_stack.push(CycleFrame {
                node: root,
                neighbors: self.out_neighbors_of(root).collect_vec().into_iter(),
            });

            'recurse: while let Some(frame) = call_stack.last_mut() {
                let v = frame.node;

                for w in frame.neighbors.by_ref() {
                    match colors[w as usize] {
                        Color::White => {
                            colors[w as usize] = Color::Grey;
                            path.push(w);
                            call_stack.push(CycleFrame {
                                node: w,
                                neighbors: self.out_neighbors_of(w).collect_vec().into_iter(),
                            });
                            continue 'recurse;
                        }
                        Color::Grey => {
                            // the cycle consists of the path suffix starting at w
                            let pos = path.iter().position(|&u| u == w).unwrap();
                            return Some(path[pos..].to_vec());
                        }
                        Color::Black => {}
                    }
                }

                colors[v as usize] = Color::Black;
                path.pop();
                call_stack.pop();
            }
        }

        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn assert_is_cycle(graph: &AdjArray, cycle: &[Node]) {
        assert!(!cycle.is_empty());
        for (&u, &v) in cycle.iter().tuple_windows() {
            assert!(graph.has_edge(u, v));
        }
        assert!(graph.has_edge(*cycle.last().unwrap(), cycle[0]));
    }

    #[test]
    fn acyclic() {
        let graph = AdjArray::from_edges(5, [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)]);
        assert_eq!(graph.find_cycle(), None);
        assert!(!graph.has_cycle());
        assert!(graph.is_acyclic());
    }

    #[test]
    fn tail_into_cycle() {
        let graph = AdjArray::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 1)]);

        let cycle = graph.find_cycle().unwrap();
        assert_is_cycle(&graph, &cycle);
        assert_eq!(cycle.iter().copied().sorted().collect_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn self_loop() {
        let graph = AdjArray::from_edges(3, [(0, 1), (1, 1), (1, 2)]);
        assert_eq!(graph.find_cycle(), Some(vec![1]));
    }

    #[test]
    fn cycle_in_second_component() {
        let mut graph = AdjArray::new(6);
        graph.add_edges([(0, 1), (1, 2)]);
        assert!(!graph.has_cycle());

        graph.add_edges([(3, 4), (4, 5), (5, 3)]);
        let cycle = graph.find_cycle().unwrap();
        assert_is_cycle(&graph, &cycle);
        assert_eq!(cycle.iter().copied().sorted().collect_vec(), vec![3, 4, 5]);
    }

    #[test]
    fn cross_edges_are_no_cycles() {
        // diamond with an extra cross edge, still acyclic
        let graph = AdjArray::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3), (1, 2)]);
        assert!(!graph.has_cycle());
    }
}
