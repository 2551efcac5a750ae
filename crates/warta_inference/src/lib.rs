pub mod analyst;
pub mod models;

pub use analyst::Analyst;
pub use models::GroqModel;
