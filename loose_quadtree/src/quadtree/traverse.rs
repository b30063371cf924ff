use super::*;
use common::shapes::{Point, Quadrant};
use std::collections::VecDeque;

impl Quadtree {
    /// Breadth-first walk over every node, leaves and branches alike, starting at the
    /// root. `observer` receives each node's bottom-left corner and size. A branch's
    /// four children are queued in quadrant order right after it is visited.
    pub fn traverse<F>(&self, mut observer: F)
    where
        F: FnMut(Point, Point),
    {
        let mut queue = VecDeque::new();
        queue.push_back(NodeTask {
            node: ROOT,
            area: self.bounds,
        });

        while let Some(task) = queue.pop_front() {
            observer(task.area.bottom_left, task.area.size());
            if let QuadNode::Branch { first_child } = self.nodes[task.node] {
                for quadrant in Quadrant::ALL {
                    queue.push_back(NodeTask {
                        node: first_child + quadrant.offset(),
                        area: task.area.quadrant(quadrant),
                    });
                }
            }
        }
    }

    // Retrieve all node areas, in traversal order
    pub fn all_node_bounds(&self, bounds: &mut Vec<Rect>) {
        self.traverse(|bottom_left, size| {
            bounds.push(Rect::from_origin_size(bottom_left, size));
        });
    }
}
