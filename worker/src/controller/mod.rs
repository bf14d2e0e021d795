pub mod health;
pub mod sent_messages;
