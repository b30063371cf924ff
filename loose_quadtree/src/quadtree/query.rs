use super::*;
use common::shapes::Quadrant;
use fxhash::FxHashSet;

impl Quadtree {
    /// Calls `f` with the identifier and rectangle of every element overlapping `area`.
    ///
    /// An element attached to several visited leaves is reported once per leaf; use
    /// [`Quadtree::query_distinct`] when each identifier is wanted once. Ill-formed or
    /// out-of-bounds query rectangles report nothing.
    pub fn query<F>(&self, area: Rect, mut f: F)
    where
        F: FnMut(Id, Rect),
    {
        self.query_while(area, |id, rect| {
            f(id, rect);
            true
        });
    }

    /// Like [`Quadtree::query`], but stops as soon as `f` returns false. Returns
    /// whether the query ran to completion.
    pub fn query_while<F>(&self, area: Rect, mut f: F) -> bool
    where
        F: FnMut(Id, Rect) -> bool,
    {
        if self.validate_rect(&area).is_err() {
            return true;
        }

        let mut stack = NodeStack::new();
        stack.push(NodeTask {
            node: ROOT,
            area: self.bounds,
        });
        let mut targets = [Quadrant::TopLeft; 4];

        while let Ok(task) = stack.pop() {
            match self.nodes[task.node] {
                QuadNode::Leaf { head, .. } => {
                    for (_, element) in Attachments::new(&self.attachments, head) {
                        let element = &self.elements[element];
                        if area.overlaps(&element.rect) && !f(element.id, element.rect) {
                            return false;
                        }
                    }
                }
                QuadNode::Branch { first_child } => {
                    let len = child_targets(&task.area, &area, &mut targets);
                    for &quadrant in &targets[..len] {
                        stack.push(NodeTask {
                            node: first_child + quadrant.offset(),
                            area: task.area.quadrant(quadrant),
                        });
                    }
                }
            }
        }
        true
    }

    /// Appends each identifier overlapping `area` to `out` at most once.
    pub fn query_distinct(&self, area: Rect, out: &mut Vec<Id>) {
        let mut seen = FxHashSet::default();
        self.query(area, |id, _| {
            if seen.insert(id) {
                out.push(id);
            }
        });
    }

    /// Visits every stored element exactly once, in storage order.
    pub fn for_each_element<F>(&self, mut f: F)
    where
        F: FnMut(ElementHandle, Id, Rect),
    {
        for (index, element) in self.elements.iter() {
            f(self.handle_for(index), element.id, element.rect);
        }
    }
}
