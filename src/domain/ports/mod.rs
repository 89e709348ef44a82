mod chat_client_port;

pub use chat_client_port::{ChatClientPort, ClientEvent};
