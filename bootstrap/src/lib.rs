//! webapp-bootstrap - 统一启动骨架

mod runtime;

pub use runtime::*;
