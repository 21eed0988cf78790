pub mod chat;
pub mod model_report;
pub mod providers;

pub use chat::{Answer, ChatService};
