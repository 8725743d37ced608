//! 井字棋核心库
//!
//! 包含:
//! - 棋子、棋盘等核心数据结构
//! - 终局判定（胜负、和棋）
//! - 难度定义
//! - 棋盘文本表示法

mod board;
mod constants;
mod difficulty;
mod error;
mod mark;
mod notation;
mod rules;

pub use board::Board;
pub use constants::*;
pub use difficulty::Difficulty;
pub use error::{GameError, Result};
pub use mark::Mark;
pub use notation::{Notation, EMPTY_NOTATION};
pub use rules::{evaluate, TerminalResult};
