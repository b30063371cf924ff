#[derive(Debug, Clone)]
pub struct Config {
    /// Attachments a leaf holds before it subdivides. Zero subdivides every leaf down
    /// to `max_depth`.
    pub max_elements_per_node: u32,
    pub max_depth: u32,
    /// Forwarded to [`Quadtree::reserve`](super::Quadtree::reserve) on construction.
    pub initial_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_elements_per_node: 8,
            max_depth: 8,
            initial_capacity: 0,
        }
    }
}
