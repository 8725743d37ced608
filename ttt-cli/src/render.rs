//! 终端渲染

use ttt_core::{Board, Mark, TerminalResult, BOARD_WIDTH};

/// 渲染棋盘：空格显示 1-9 编号，获胜连线上的棋子加方括号
pub fn render_board(board: &Board, outcome: &TerminalResult) -> String {
    let line = outcome.line();
    let mut rows = Vec::with_capacity(BOARD_WIDTH);

    for row in 0..BOARD_WIDTH {
        let cells: Vec<String> = (0..BOARD_WIDTH)
            .map(|col| {
                let index = row * BOARD_WIDTH + col;
                match board.get(index) {
                    Some(mark) if line.is_some_and(|l| l.contains(&index)) => {
                        format!("[{}]", mark)
                    }
                    Some(mark) => format!(" {} ", mark),
                    None => format!(" {} ", index + 1),
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }

    rows.join("\n---+---+---\n")
}

/// 对局结果文字
pub fn describe_outcome(outcome: &TerminalResult, human: Mark) -> &'static str {
    match outcome {
        TerminalResult::Win { mark, .. } if *mark == human => "你赢了！",
        TerminalResult::Win { .. } => "你输了。",
        TerminalResult::Draw => "和棋。",
        TerminalResult::Ongoing => "对局进行中",
    }
}
