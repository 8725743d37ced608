//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_CELLS, BOARD_WIDTH};
use crate::error::{GameError, Result};
use crate::mark::Mark;
use crate::rules::{evaluate, TerminalResult};

/// 棋盘
///
/// 3x3 棋盘，索引按行优先排列：
///
/// ```text
/// 0 | 1 | 2
/// 3 | 4 | 5
/// 6 | 7 | 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; BOARD_CELLS],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// 从格子序列创建棋盘，长度必须为 9
    pub fn from_cells(cells: &[Option<Mark>]) -> Result<Self> {
        let cells: [Option<Mark>; BOARD_CELLS] = cells.try_into().map_err(|_| {
            GameError::invalid_state(format!(
                "expected {} cells, got {}",
                BOARD_CELLS,
                cells.len()
            ))
        })?;
        Ok(Self { cells })
    }

    /// 获取指定格子的棋子（越界返回 None）
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// 所有格子
    pub fn cells(&self) -> &[Option<Mark>; BOARD_CELLS] {
        &self.cells
    }

    /// 所有空格的索引（升序）
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    /// 统计某方棋子数
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|cell| **cell == Some(mark)).count()
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// 当前应走的一方（X 先手，双方数量相等时轮到 X）
    pub fn side_to_move(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// 返回落子后的新棋盘，自身不变
    ///
    /// 不做规则检查，调用方保证 `index` 为空格。
    pub fn with(&self, index: usize, mark: Mark) -> Board {
        debug_assert!(self.cells[index].is_none(), "cell {} is occupied", index);
        let mut next = *self;
        next.cells[index] = Some(mark);
        next
    }

    /// 落子（带规则检查）
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<()> {
        if index >= BOARD_CELLS {
            return Err(GameError::InvalidIndex { index });
        }
        if self.evaluate().is_terminal() {
            return Err(GameError::GameOver);
        }
        if self.cells[index].is_some() {
            return Err(GameError::CellOccupied { index });
        }
        self.cells[index] = Some(mark);
        Ok(())
    }

    /// 终局判定
    pub fn evaluate(&self) -> TerminalResult {
        evaluate(self)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(BOARD_WIDTH).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "---+---+---")?;
            }
            let line: Vec<String> = cells
                .iter()
                .map(|cell| format!(" {} ", cell.map(|m| m.to_char()).unwrap_or(' ')))
                .collect();
            write!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.empty_cells(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
        assert_eq!(board.side_to_move(), Mark::X);
    }

    #[test]
    fn test_from_cells_wrong_length() {
        let err = Board::from_cells(&[None; 8]).unwrap_err();
        assert!(matches!(err, GameError::InvalidState { .. }));

        let err = Board::from_cells(&[None; 10]).unwrap_err();
        assert!(matches!(err, GameError::InvalidState { .. }));

        assert!(Board::from_cells(&[None; 9]).is_ok());
    }

    #[test]
    fn test_with_does_not_mutate() {
        let board = Board::empty();
        let next = board.with(4, Mark::X);

        assert_eq!(board, Board::empty());
        assert_eq!(next.get(4), Some(Mark::X));
        assert_eq!(next.empty_cells().len(), 8);
    }

    #[test]
    fn test_place() {
        let mut board = Board::empty();
        board.place(0, Mark::X).unwrap();
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.side_to_move(), Mark::O);

        assert_eq!(
            board.place(0, Mark::O),
            Err(GameError::CellOccupied { index: 0 })
        );
        assert_eq!(
            board.place(9, Mark::O),
            Err(GameError::InvalidIndex { index: 9 })
        );
    }

    #[test]
    fn test_place_after_win() {
        let mut board = Board::empty();
        for (index, mark) in [(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O), (2, Mark::X)] {
            board.place(index, mark).unwrap();
        }
        assert_eq!(board.place(5, Mark::O), Err(GameError::GameOver));
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::empty().with(8, Mark::O);
        assert_eq!(board.get(8), Some(Mark::O));
        assert_eq!(board.get(9), None);
    }

    #[test]
    fn test_display() {
        let board = Board::empty().with(0, Mark::X).with(4, Mark::O);
        let text = board.to_string();
        assert_eq!(
            text,
            " X |   |   \n---+---+---\n   | O |   \n---+---+---\n   |   |   "
        );
    }
}
