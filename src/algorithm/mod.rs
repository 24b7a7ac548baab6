/// Tour driver and retry orchestration
pub mod executor;
/// Knight move offset tables and reachability queries
pub mod moves;
/// Warnsdorff candidate selection and tie-breaking
pub mod selection;
