pub mod analysis;
pub mod category;
pub mod check;
pub mod results;
pub mod schema;
pub mod wire;
