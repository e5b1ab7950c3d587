pub mod carver;
pub mod visited;
