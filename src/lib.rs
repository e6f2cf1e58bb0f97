pub mod actions;
pub mod analytics;
pub mod api;
pub mod charts;
pub mod config;
pub mod document;
pub mod errors;
pub mod events;
pub mod forms;
pub mod models;
pub mod page;
pub mod prompt;
pub mod search;
pub mod snapshot;
pub mod ui;

pub use api::ChatApi;
pub use config::ClientConfig;
pub use document::{Document, PageDocument};
pub use errors::ClientError;
pub use page::Page;
pub use prompt::{Prompt, ScriptedPrompt, TerminalPrompt};
