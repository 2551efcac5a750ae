pub use warta_core::CompletionModel;

pub mod groq;

pub use groq::GroqModel;
