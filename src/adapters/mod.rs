// Adapters layer: concrete implementations for the outside world (registry over HTTP, terminal output).

pub mod http;
pub mod terminal;
