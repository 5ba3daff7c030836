pub mod analysis_results;
pub mod verify_results;
