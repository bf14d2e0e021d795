pub mod environment;
pub mod error;
pub mod http_gateway;
pub mod messaging_error_code;
pub mod push_contact_api_token_getter;
pub mod push_contact_client;
pub mod sent_message;
pub mod sent_messages_handler;
pub mod sent_messages_outcome;
pub mod settings;
pub mod shutdown;
