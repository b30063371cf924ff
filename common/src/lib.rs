pub mod shapes;

pub use shapes::{Point, Quadrant, Rect};
