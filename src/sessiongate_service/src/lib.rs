pub mod pages;
pub mod service;
pub mod tracing;

pub use pages::default_pages;
pub use service::SessionService;
