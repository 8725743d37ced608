//! 走法选择
//!
//! 简单难度在空格中均匀随机，困难难度走 Minimax 最优解

use std::time::Instant;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use ttt_core::{Board, Difficulty, GameError, Mark, Result};

use crate::search::Searcher;

/// AI 配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    /// 随机种子（None 时每次启动随机）
    pub seed: Option<u64>,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            seed: None,
        }
    }
}

/// 走法选择器
///
/// 为执 `mark` 的一方选择落子位置。随机源由外部注入，固定种子时结果可复现。
pub struct MoveSelector<R = ChaCha8Rng> {
    mark: Mark,
    rng: R,
    nodes_searched: u64,
}

impl MoveSelector<ChaCha8Rng> {
    /// 使用随机种子创建
    pub fn new(mark: Mark) -> Self {
        Self::with_seed(mark, rand::random())
    }

    /// 使用固定种子创建
    pub fn with_seed(mark: Mark, seed: u64) -> Self {
        Self::with_rng(mark, ChaCha8Rng::seed_from_u64(seed))
    }

    /// 从配置创建
    pub fn from_config(mark: Mark, config: &AiConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(mark, seed),
            None => Self::new(mark),
        }
    }
}

impl<R: Rng> MoveSelector<R> {
    /// 使用指定随机源创建
    pub fn with_rng(mark: Mark, rng: R) -> Self {
        Self {
            mark,
            rng,
            nodes_searched: 0,
        }
    }

    /// AI 执的棋子
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// 换边（新一局 AI 执另一方时使用）
    pub fn set_mark(&mut self, mark: Mark) {
        self.mark = mark;
    }

    /// 选择落子位置
    ///
    /// 棋盘没有空格或已分出胜负时返回 `InvalidState`。不修改传入的棋盘。
    pub fn select_move(&mut self, board: &Board, difficulty: Difficulty) -> Result<usize> {
        let moves = board.empty_cells();
        if moves.is_empty() {
            return Err(GameError::invalid_state("no empty cell to move to"));
        }
        if board.evaluate().is_terminal() {
            return Err(GameError::invalid_state("game is already decided"));
        }

        let started = Instant::now();
        let index = match difficulty {
            Difficulty::Easy => {
                self.nodes_searched = 0;
                *moves
                    .choose(&mut self.rng)
                    .ok_or_else(|| GameError::invalid_state("no empty cell to move to"))?
            }
            Difficulty::Hard => {
                let mut searcher = Searcher::new(self.mark);
                let result = searcher
                    .best_move(board, true)
                    .ok_or_else(|| GameError::invalid_state("search found no move"))?;
                self.nodes_searched = searcher.nodes_searched();
                tracing::debug!(
                    "搜索完成: 得分 {}, 节点数 {}",
                    result.score,
                    self.nodes_searched
                );
                result.index
            }
        };

        tracing::debug!(
            "AI({}) 难度 {} 选择 {}, 耗时 {:?}",
            self.mark,
            difficulty,
            index,
            started.elapsed()
        );

        Ok(index)
    }

    /// 获取上次搜索的节点数（简单难度为 0）
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}
