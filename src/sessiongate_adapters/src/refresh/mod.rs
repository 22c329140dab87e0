pub mod http_session_sink;

pub use http_session_sink::HttpSessionSink;
