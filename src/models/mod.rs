pub mod entity;
pub mod report;
pub mod sentiment;
pub mod soap;

pub use entity::*;
pub use report::*;
pub use sentiment::*;
pub use soap::*;
