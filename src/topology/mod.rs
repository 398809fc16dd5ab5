pub mod edge;
pub mod loops;

pub use edge::Edge;
pub use loops::Loop;
