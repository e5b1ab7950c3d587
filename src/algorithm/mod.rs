/// Depth-first carving walk and its run counters
pub mod carver;
/// Seeded random selection
pub mod selection;
/// Cell visitation record
pub mod visited;
