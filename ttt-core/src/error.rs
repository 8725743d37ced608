//! 错误类型定义

use thiserror::Error;

/// 井字棋错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 棋盘状态非法（长度不对、未知棋子、无空位可走等）
    #[error("Invalid state: {reason}")]
    InvalidState { reason: String },

    /// 配置非法（未知难度等）
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// 格子索引越界
    #[error("Invalid cell index: {index} (expected 0-8)")]
    InvalidIndex { index: usize },

    /// 格子已被占用
    #[error("Cell {index} is already occupied")]
    CellOccupied { index: usize },

    /// 不是你的回合
    #[error("Not your turn")]
    NotYourTurn,

    /// 游戏已结束
    #[error("Game is already over")]
    GameOver,
}

impl GameError {
    /// 构造 `InvalidState`
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        GameError::InvalidState {
            reason: reason.into(),
        }
    }

    /// 构造 `InvalidConfiguration`
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        GameError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// 操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
