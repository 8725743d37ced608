//! 终局判定

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::{WIN_LENGTH, WIN_LINES};
use crate::mark::Mark;

/// 终局判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalResult {
    /// 游戏继续
    Ongoing,
    /// 某方连成一线
    Win {
        mark: Mark,
        line: [usize; WIN_LENGTH],
    },
    /// 棋盘已满且无人获胜
    Draw,
}

impl TerminalResult {
    /// 是否已分出结果
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TerminalResult::Ongoing)
    }

    /// 获胜方
    pub fn winner(&self) -> Option<Mark> {
        match self {
            TerminalResult::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// 获胜连线
    pub fn line(&self) -> Option<[usize; WIN_LENGTH]> {
        match self {
            TerminalResult::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// 判定棋局状态
///
/// 按 `WIN_LINES` 的顺序检查，返回第一条连成的线；多条线同时成立时也只取第一条。
pub fn evaluate(board: &Board) -> TerminalResult {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Some(mark) = board.get(a) {
            if board.get(b) == Some(mark) && board.get(c) == Some(mark) {
                return TerminalResult::Win { mark, line };
            }
        }
    }

    if board.is_full() {
        TerminalResult::Draw
    } else {
        TerminalResult::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::Notation;

    fn board(s: &str) -> Board {
        Notation::parse(s).unwrap()
    }

    #[test]
    fn test_empty_board_ongoing() {
        assert_eq!(evaluate(&Board::empty()), TerminalResult::Ongoing);
    }

    #[test]
    fn test_every_line_wins() {
        for line in WIN_LINES {
            for mark in [Mark::X, Mark::O] {
                let mut b = Board::empty();
                for index in line {
                    b = b.with(index, mark);
                }
                assert_eq!(
                    evaluate(&b),
                    TerminalResult::Win { mark, line },
                    "line {:?} for {}",
                    line,
                    mark
                );
            }
        }
    }

    #[test]
    fn test_win_with_other_marks() {
        // 左列 O 连成一线
        let b = board("OX./OX./O.X");
        assert_eq!(
            evaluate(&b),
            TerminalResult::Win {
                mark: Mark::O,
                line: [0, 3, 6]
            }
        );
    }

    #[test]
    fn test_win_on_full_board() {
        // 最后一步既填满棋盘又连成一线，应判胜而非和棋
        let b = board("XOX/OXO/OXX");
        assert_eq!(
            evaluate(&b),
            TerminalResult::Win {
                mark: Mark::X,
                line: [0, 4, 8]
            }
        );
    }

    #[test]
    fn test_first_line_in_catalogue_order() {
        // 非法局面：第一行和第一列同时连成，取目录中靠前的行
        let b = board("XXX/X../X..");
        assert_eq!(evaluate(&b).line(), Some([0, 1, 2]));

        // X 占第二行，O 占第三行：行 [3,4,5] 在 [6,7,8] 之前
        let b = board(".../XXX/OOO");
        assert_eq!(
            evaluate(&b),
            TerminalResult::Win {
                mark: Mark::X,
                line: [3, 4, 5]
            }
        );

        // 列和对角线同时成立，取列
        let b = board("O.O/OO./O.O");
        assert_eq!(evaluate(&b).line(), Some([0, 3, 6]));
    }

    #[test]
    fn test_draw() {
        let b = board("XOX/XOO/OXX");
        assert_eq!(evaluate(&b), TerminalResult::Draw);
        assert!(evaluate(&b).is_terminal());
        assert_eq!(evaluate(&b).winner(), None);
    }

    #[test]
    fn test_ongoing_without_line() {
        let b = board("XO./.X./..O");
        assert_eq!(evaluate(&b), TerminalResult::Ongoing);

        let b = board("XOX/XOO/OX.");
        assert_eq!(evaluate(&b), TerminalResult::Ongoing);
        assert!(!evaluate(&b).is_terminal());
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let b = board("XX./OO./...");
        let before = b;
        let _ = evaluate(&b);
        assert_eq!(b, before);
    }
}
