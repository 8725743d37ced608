//! AI 难度

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    /// 简单：在所有空格中等概率随机
    #[default]
    Easy,
    /// 困难：完整 Minimax 搜索，不会输
    Hard,
}

impl Difficulty {
    /// 显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
        }
    }

    /// 切换到另一档难度
    pub fn toggle(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            other => Err(GameError::invalid_configuration(format!(
                "unknown difficulty: {:?}",
                other
            ))),
        }
    }
}
