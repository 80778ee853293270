pub mod history;
pub mod models;

pub use history::ChannelHistory;
pub use models::*;
