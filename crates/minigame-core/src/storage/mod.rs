mod json_file;
mod store;

pub use json_file::*;
pub use store::*;
