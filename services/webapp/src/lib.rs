//! webapp - 本地 Web 应用管理器
//!
//! 目前只是后续本地 UI 后端的占位骨架

mod manager;

pub use manager::*;
