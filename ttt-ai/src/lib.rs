//! 井字棋 AI 引擎
//!
//! 包含:
//! - Minimax + Alpha-Beta 搜索
//! - 按难度选择走法（随机 / 最优）

mod search;
mod selector;

pub use search::{SearchResult, Searcher, WIN_SCORE};
pub use selector::{AiConfig, MoveSelector};
