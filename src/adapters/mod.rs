// Adapters layer: concrete implementations for external systems (http server).

pub mod http;
