#[macro_use]
extern crate log;

pub use math;

pub mod bounding_box;
pub mod bounds;
pub mod curves;
pub mod grid;
pub mod parsing;
pub mod prelude;
pub mod profile;
pub mod report;
pub mod sequence;
