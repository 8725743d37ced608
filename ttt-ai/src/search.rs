//! 搜索引擎
//!
//! 实现 Minimax + Alpha-Beta 剪枝，完整搜索到终局

use ttt_core::{evaluate, Board, Mark, TerminalResult};

/// 获胜基础分，实际得分为 `WIN_SCORE - depth`，越快获胜分越高
pub const WIN_SCORE: i32 = 10;

/// 根节点搜索结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// 最佳落子位置
    pub index: usize,
    /// 该走法的得分
    pub score: i32,
}

/// 搜索器
///
/// 以 `me` 为极大方打分。每次搜索只依赖传入的棋盘，不保留任何局面。
pub struct Searcher {
    me: Mark,
    nodes_searched: u64,
}

impl Searcher {
    /// 创建以 `me` 为极大方的搜索器
    pub fn new(me: Mark) -> Self {
        Self {
            me,
            nodes_searched: 0,
        }
    }

    /// 极大方
    pub fn me(&self) -> Mark {
        self.me
    }

    /// 根节点搜索：逐个尝试空格，返回得分最优的走法
    ///
    /// `maximizing` 为 true 时由 `me` 落子并取最大分，否则由对方落子并取最小分。
    /// 分数相同时取索引最小的走法。棋盘已分胜负或没有空格时返回 None。
    pub fn best_move(&mut self, board: &Board, maximizing: bool) -> Option<SearchResult> {
        self.nodes_searched = 0;

        if evaluate(board).is_terminal() {
            return None;
        }

        let mark = self.mark_for(maximizing);
        let mut alpha = i32::MIN;
        let mut beta = i32::MAX;
        let mut best: Option<SearchResult> = None;

        for index in board.empty_cells() {
            let child = board.with(index, mark);
            let score = self.score(&child, 1, alpha, beta, !maximizing);

            let better = match best {
                None => true,
                Some(current) if maximizing => score > current.score,
                Some(current) => score < current.score,
            };
            if better {
                best = Some(SearchResult { index, score });
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
        }

        best
    }

    /// 递归打分
    ///
    /// 终局：`me` 获胜得 `WIN_SCORE - depth`，对方获胜得 `-(WIN_SCORE - depth)`，和棋 0。
    /// `beta <= alpha` 时停止检查剩余兄弟节点。
    pub fn score(
        &mut self,
        board: &Board,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes_searched += 1;

        match evaluate(board) {
            TerminalResult::Win { mark, .. } if mark == self.me => return WIN_SCORE - depth,
            TerminalResult::Win { .. } => return -(WIN_SCORE - depth),
            TerminalResult::Draw => return 0,
            TerminalResult::Ongoing => {}
        }

        let mark = self.mark_for(maximizing);
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for index in board.empty_cells() {
            let child = board.with(index, mark);
            let score = self.score(&child, depth + 1, alpha, beta, !maximizing);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if beta <= alpha {
                break; // 剪枝
            }
        }

        best
    }

    /// 获取上次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    fn mark_for(&self, maximizing: bool) -> Mark {
        if maximizing {
            self.me
        } else {
            self.me.opponent()
        }
    }
}
