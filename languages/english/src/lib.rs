pub mod client;
pub mod parser;
pub mod source;

pub use client::LabanClient;
pub use source::LabanSource;
