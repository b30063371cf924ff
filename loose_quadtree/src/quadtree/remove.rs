use super::*;
use common::shapes::Quadrant;

impl Quadtree {
    /// Removes the element behind `handle`, detaching it from every leaf it occupies.
    ///
    /// Emptied leaves are kept as they are; branches are never merged back. A handle
    /// that was already removed, or invalidated by [`Quadtree::clear`], is rejected
    /// with [`QuadtreeError::StaleHandle`] and the tree is left unchanged, even when
    /// its slot now holds a newer element.
    pub fn remove(&mut self, handle: ElementHandle) -> QuadtreeResult<()> {
        let (id, rect) = self.get(handle)?;

        let mut stack = NodeStack::new();
        stack.push(NodeTask {
            node: ROOT,
            area: self.bounds,
        });
        let mut targets = [Quadrant::TopLeft; 4];
        let mut detached = 0usize;

        while let Ok(task) = stack.pop() {
            match self.nodes[task.node] {
                QuadNode::Leaf { count, head } => {
                    if self.detach(task.node, count, head, handle.index)? {
                        detached += 1;
                    }
                }
                QuadNode::Branch { first_child } => {
                    let len = child_targets(&task.area, &rect, &mut targets);
                    for &quadrant in &targets[..len] {
                        stack.push(NodeTask {
                            node: first_child + quadrant.offset(),
                            area: task.area.quadrant(quadrant),
                        });
                    }
                }
            }
        }

        self.elements.remove(handle.index)?;
        debug!(id, handle = handle.index, detached, "removed element");
        Ok(())
    }

    /// Moves the element behind `handle` to `rect`, keeping its identifier.
    ///
    /// The new rectangle is validated first; if it is rejected the element stays
    /// where it was. The returned handle replaces `handle`.
    pub fn relocate(&mut self, handle: ElementHandle, rect: Rect) -> QuadtreeResult<ElementHandle> {
        self.validate_rect(&rect)?;
        let (id, _) = self.get(handle)?;
        self.remove(handle)?;
        self.try_insert(rect, id)
    }

    /// Unlinks the attachment for `element` from one leaf. Returns whether the leaf
    /// held one; an element is attached to a given leaf at most once.
    fn detach(
        &mut self,
        node: u32,
        count: u32,
        head: Option<u32>,
        element: u32,
    ) -> QuadtreeResult<bool> {
        let mut prev: Option<u32> = None;
        let mut cursor = head;
        while let Some(index) = cursor {
            let attachment = self.attachments[index];
            if attachment.element == element {
                let new_head = match prev {
                    Some(prev) => {
                        self.attachments[prev].next = attachment.next;
                        head
                    }
                    None => attachment.next,
                };
                self.attachments.remove(index)?;
                self.nodes[node] = QuadNode::Leaf {
                    count: count - 1,
                    head: new_head,
                };
                return Ok(true);
            }
            prev = cursor;
            cursor = attachment.next;
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with(max_elements_per_node: u32, max_depth: u32) -> Quadtree {
        Quadtree::new_with_config(
            Rect::from_coords(0.0, 0.0, 1.0, 1.0),
            Config {
                max_elements_per_node,
                max_depth,
                initial_capacity: 0,
            },
        )
    }

    #[test]
    fn remove_frees_every_attachment() {
        let mut tree = tree_with(0, 2);
        let handle = tree
            .try_insert(Rect::from_coords(0.4, 0.4, 0.6, 0.6), 1)
            .unwrap();
        let (nodes, attachments, _) = tree.storage_counts();
        assert_eq!(attachments, 4);

        tree.remove(handle).unwrap();
        assert_eq!(tree.storage_counts(), (nodes, 0, 0));
        for (_, node) in tree.nodes.iter() {
            if let QuadNode::Leaf { count, head } = node {
                assert_eq!(*count, 0);
                assert!(head.is_none());
            }
        }
    }

    #[test]
    fn remove_unlinks_from_middle_of_list() {
        let mut tree = tree_with(8, 8);
        let a = tree.try_insert(Rect::from_coords(0.1, 0.1, 0.2, 0.2), 1).unwrap();
        let b = tree.try_insert(Rect::from_coords(0.3, 0.3, 0.4, 0.4), 2).unwrap();
        let c = tree.try_insert(Rect::from_coords(0.5, 0.5, 0.6, 0.6), 3).unwrap();

        tree.remove(b).unwrap();
        assert_eq!(tree.nodes[ROOT], QuadNode::Leaf { count: 2, head: Some(2) });

        let mut ids = Vec::new();
        tree.query(tree.bounds(), |id, _| ids.push(id));
        ids.sort();
        assert_eq!(ids, vec![1, 3]);

        tree.remove(c).unwrap();
        tree.remove(a).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.nodes[ROOT], QuadNode::EMPTY_LEAF);
    }

    #[test]
    fn stale_handle_is_rejected() {
        let mut tree = tree_with(8, 8);
        let handle = tree.try_insert(Rect::from_coords(0.1, 0.1, 0.2, 0.2), 1).unwrap();
        tree.remove(handle).unwrap();
        assert_eq!(
            tree.remove(handle),
            Err(QuadtreeError::StaleHandle { handle: handle.index() })
        );
        assert_eq!(
            tree.remove(ElementHandle::new(42, 1)),
            Err(QuadtreeError::StaleHandle { handle: 42 })
        );
    }

    #[test]
    fn reused_slot_rejects_old_handle() {
        let mut tree = tree_with(8, 8);
        let old = tree.try_insert(Rect::from_coords(0.1, 0.1, 0.2, 0.2), 1).unwrap();
        tree.remove(old).unwrap();
        let new = tree.try_insert(Rect::from_coords(0.3, 0.3, 0.4, 0.4), 2).unwrap();
        assert_eq!(old.index(), new.index());
        assert_eq!(new.generation(), old.generation() + 1);

        assert_eq!(
            tree.remove(old),
            Err(QuadtreeError::StaleHandle { handle: old.index() })
        );
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get(new), Ok((2, Rect::from_coords(0.3, 0.3, 0.4, 0.4))));
    }

    #[test]
    fn clear_invalidates_handles() {
        let mut tree = tree_with(8, 8);
        let old = tree.try_insert(Rect::from_coords(0.1, 0.1, 0.2, 0.2), 1).unwrap();
        tree.clear();
        assert!(tree.get(old).is_err());

        let new = tree.try_insert(Rect::from_coords(0.5, 0.5, 0.6, 0.6), 2).unwrap();
        assert_eq!(old.index(), new.index());
        assert_eq!(
            tree.remove(old),
            Err(QuadtreeError::StaleHandle { handle: old.index() })
        );
        assert!(tree
            .relocate(old, Rect::from_coords(0.7, 0.7, 0.8, 0.8))
            .is_err());
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get(new).unwrap().0, 2);
    }
}
