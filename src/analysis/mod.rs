pub mod mst;
pub mod path;
