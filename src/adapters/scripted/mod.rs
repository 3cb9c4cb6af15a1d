//! Scripted adapters serving canned responses for deterministic tests.
//!
//! Each adapter holds a queue of responses handed out in order and records
//! the inputs it was called with, so pipeline tests can run without a live
//! tracker, inference endpoint, or disk.

pub mod filesystem;
pub mod issues;
pub mod llm;

pub use filesystem::InMemoryFileSystem;
pub use issues::ScriptedIssueSearch;
pub use llm::ScriptedLlmClient;
