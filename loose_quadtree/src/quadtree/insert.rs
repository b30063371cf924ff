use super::*;
use common::shapes::Quadrant;
use tracing::trace;

impl Quadtree {
    /// Inserts `rect` under `id`. Returns false, leaving the tree untouched, when the
    /// rectangle is ill-formed or lies entirely outside the tree's bounds.
    pub fn insert(&mut self, rect: Rect, id: Id) -> bool {
        self.try_insert(rect, id).is_ok()
    }

    /// Like [`Quadtree::insert`], but reports why a rectangle was rejected and hands
    /// back a handle for later [`Quadtree::remove`].
    pub fn try_insert(&mut self, rect: Rect, id: Id) -> QuadtreeResult<ElementHandle> {
        if let Err(err) = self.validate_rect(&rect) {
            trace!(id, %err, "rejected insertion");
            return Err(err);
        }

        let handle = self.store_element(Element { id, rect });
        let element = handle.index;
        let mut stack = InsertStack::new();
        stack.push(InsertTask {
            element,
            node: ROOT,
            depth: 0,
            area: self.bounds,
        });

        while let Ok(task) = stack.pop() {
            let first_child = match self.nodes[task.node] {
                QuadNode::Leaf { count, head } => {
                    if count < self.max_elements_per_node || task.depth >= self.max_depth {
                        self.attach(task.node, count, head, task.element);
                        continue;
                    }
                    self.subdivide(&task, head, &mut stack)?
                }
                QuadNode::Branch { first_child } => first_child,
            };
            self.push_children(&task, first_child, &mut stack);
        }

        Ok(handle)
    }

    fn attach(&mut self, node: u32, count: u32, head: Option<u32>, element: u32) {
        let attachment = self.attachments.insert(Attachment {
            element,
            next: head,
        });
        self.nodes[node] = QuadNode::Leaf {
            count: count + 1,
            head: Some(attachment),
        };
    }

    /// Turns a full leaf into a branch with four empty children and queues its old
    /// attachments for redistribution. Returns the index of the first child.
    fn subdivide(
        &mut self,
        task: &InsertTask,
        head: Option<u32>,
        stack: &mut InsertStack,
    ) -> QuadtreeResult<u32> {
        let mut cursor = head;
        let mut moved = 0usize;
        while let Some(index) = cursor {
            let attachment = self.attachments.remove(index)?;
            stack.push(InsertTask {
                element: attachment.element,
                ..*task
            });
            cursor = attachment.next;
            moved += 1;
        }

        let first_child = self.nodes.append_block([QuadNode::EMPTY_LEAF; 4]);
        self.nodes[task.node] = QuadNode::Branch { first_child };
        debug!(
            node = task.node,
            depth = task.depth,
            first_child,
            moved,
            "subdivided leaf"
        );
        Ok(first_child)
    }

    fn push_children(&self, task: &InsertTask, first_child: u32, stack: &mut InsertStack) {
        let rect = self.elements[task.element].rect;
        let mut targets = [Quadrant::TopLeft; 4];
        let len = child_targets(&task.area, &rect, &mut targets);
        for &quadrant in &targets[..len] {
            stack.push(InsertTask {
                element: task.element,
                node: first_child + quadrant.offset(),
                depth: task.depth + 1,
                area: task.area.quadrant(quadrant),
            });
        }
    }
}
