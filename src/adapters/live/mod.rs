//! Live adapters for real external interactions.

pub mod filesystem;
pub mod issues;
pub mod llm;

pub use filesystem::LiveFileSystem;
pub use issues::JiraSearchClient;
pub use llm::OllamaClient;
