pub mod bank_http;
pub mod in_memory;
