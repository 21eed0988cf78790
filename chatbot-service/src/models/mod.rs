pub mod chat;
pub mod model;

pub use chat::{ChatRequest, ChatResponse};
pub use model::{ModelDescriptor, GENERATE_CONTENT};
