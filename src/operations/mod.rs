pub mod resolve;

pub use resolve::{resolve, ResolveOptions, ResolvePolyCurve};
