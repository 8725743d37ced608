//! 井字棋终端前端
//!
//! 包含:
//! - 对局控制（轮流走子、换先）
//! - 设置持久化
//! - 终端渲染

pub mod render;
pub mod session;
pub mod settings;

pub use session::{GameSession, Player};
pub use settings::{LogLevel, Settings};
