//! 棋盘文本表示法
//!
//! 格式：9 个字符按行优先排列，`X`/`O` 表示棋子，`.` 表示空格，
//! 行之间可以用 `/` 或空白分隔。
//!
//! 示例：
//! `XX./OO./...`

use crate::board::Board;
use crate::constants::{BOARD_CELLS, BOARD_WIDTH};
use crate::error::{GameError, Result};
use crate::mark::Mark;

/// 空棋盘
pub const EMPTY_NOTATION: &str = ".../.../...";

/// 文本表示法处理
pub struct Notation;

impl Notation {
    /// 解析文本为棋盘
    pub fn parse(text: &str) -> Result<Board> {
        let mut cells = Vec::with_capacity(BOARD_CELLS);

        for c in text.chars() {
            if c == '/' || c.is_whitespace() {
                continue;
            }
            if c == '.' {
                cells.push(None);
            } else if let Some(mark) = Mark::from_char(c) {
                cells.push(Some(mark));
            } else {
                return Err(GameError::invalid_state(format!(
                    "invalid cell character: {:?}",
                    c
                )));
            }
        }

        Board::from_cells(&cells)
    }

    /// 将棋盘转换为文本
    pub fn to_string(board: &Board) -> String {
        let rows: Vec<String> = board
            .cells()
            .chunks(BOARD_WIDTH)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(|m| m.to_char()).unwrap_or('.'))
                    .collect()
            })
            .collect();
        rows.join("/")
    }
}
