//! 对局控制
//!
//! 负责轮流走子，本身不包含规则：胜负每次都从棋盘重新判定

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use ttt_ai::{AiConfig, MoveSelector};
use ttt_core::{Board, Difficulty, GameError, Mark, Result, TerminalResult};

/// 玩家
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Human,
    Ai,
}

/// 人机对局
pub struct GameSession<R = ChaCha8Rng> {
    board: Board,
    human_mark: Mark,
    difficulty: Difficulty,
    selector: MoveSelector<R>,
    games_played: u32,
}

impl GameSession<ChaCha8Rng> {
    /// 创建对局，先手执 X
    pub fn new(config: &AiConfig, human_first: bool) -> Self {
        let human_mark = if human_first { Mark::X } else { Mark::O };
        let selector = MoveSelector::from_config(human_mark.opponent(), config);
        Self::with_selector(selector, config.difficulty)
    }
}

impl<R: Rng> GameSession<R> {
    /// 使用指定的走法选择器创建对局，人类执另一方
    pub fn with_selector(selector: MoveSelector<R>, difficulty: Difficulty) -> Self {
        let human_mark = selector.mark().opponent();
        tracing::info!("新对局: 玩家执 {}, 难度 {}", human_mark, difficulty);
        Self {
            board: Board::empty(),
            human_mark,
            difficulty,
            selector,
            games_played: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn ai_mark(&self) -> Mark {
        self.selector.mark()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// 切换难度，下一次 AI 走子时生效
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        tracing::info!("难度切换: {} -> {}", self.difficulty, difficulty);
        self.difficulty = difficulty;
    }

    /// 已结束的局数
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// 当前走子方
    pub fn current_player(&self) -> Player {
        if self.board.side_to_move() == self.human_mark {
            Player::Human
        } else {
            Player::Ai
        }
    }

    /// 当前局面结果
    pub fn outcome(&self) -> TerminalResult {
        self.board.evaluate()
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// 玩家落子
    pub fn play_human(&mut self, index: usize) -> Result<TerminalResult> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.current_player() != Player::Human {
            return Err(GameError::NotYourTurn);
        }

        self.board.place(index, self.human_mark)?;
        tracing::info!("玩家({}) 落子 {}", self.human_mark, index);
        Ok(self.after_move())
    }

    /// AI 落子，返回落子位置
    pub fn play_ai(&mut self) -> Result<usize> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.current_player() != Player::Ai {
            return Err(GameError::NotYourTurn);
        }

        let index = self.selector.select_move(&self.board, self.difficulty)?;
        let mark = self.ai_mark();
        self.board.place(index, mark)?;
        tracing::info!("AI({}) 落子 {}", mark, index);
        self.after_move();
        Ok(index)
    }

    /// 重新开始，并交换先后手
    pub fn restart(&mut self) {
        let human_mark = self.human_mark.opponent();
        self.human_mark = human_mark;
        self.selector.set_mark(human_mark.opponent());
        self.board = Board::empty();
        tracing::info!("重新开始: 玩家执 {}", human_mark);
    }

    fn after_move(&mut self) -> TerminalResult {
        let outcome = self.outcome();
        match outcome {
            TerminalResult::Win { mark, line } => {
                self.games_played += 1;
                tracing::info!("游戏结束: {} 获胜, 连线 {:?}", mark, line);
            }
            TerminalResult::Draw => {
                self.games_played += 1;
                tracing::info!("游戏结束: 和棋");
            }
            TerminalResult::Ongoing => {}
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(human_first: bool, difficulty: Difficulty) -> GameSession {
        let human_mark = if human_first { Mark::X } else { Mark::O };
        GameSession::with_selector(MoveSelector::with_seed(human_mark.opponent(), 17), difficulty)
    }

    #[test]
    fn test_new_session() {
        let config = AiConfig::from_difficulty(Difficulty::Hard);
        let game = GameSession::new(&config, true);
        assert_eq!(game.human_mark(), Mark::X);
        assert_eq!(game.ai_mark(), Mark::O);
        assert_eq!(game.current_player(), Player::Human);
        assert_eq!(game.difficulty(), Difficulty::Hard);
        assert_eq!(game.outcome(), TerminalResult::Ongoing);

        let game = GameSession::new(&config, false);
        assert_eq!(game.human_mark(), Mark::O);
        assert_eq!(game.current_player(), Player::Ai);
    }

    #[test]
    fn test_turn_order() {
        let mut game = session(true, Difficulty::Easy);
        assert_eq!(game.play_ai(), Err(GameError::NotYourTurn));

        game.play_human(4).unwrap();
        assert_eq!(game.current_player(), Player::Ai);
        assert_eq!(game.play_human(0), Err(GameError::NotYourTurn));

        let index = game.play_ai().unwrap();
        assert_ne!(index, 4);
        assert_eq!(game.board().get(index), Some(Mark::O));
        assert_eq!(game.current_player(), Player::Human);
    }

    #[test]
    fn test_occupied_cell_keeps_turn() {
        let mut game = session(true, Difficulty::Hard);
        game.play_human(0).unwrap();
        let index = game.play_ai().unwrap();

        assert_eq!(
            game.play_human(index),
            Err(GameError::CellOccupied { index })
        );
        assert_eq!(game.play_human(12), Err(GameError::InvalidIndex { index: 12 }));
        assert_eq!(game.current_player(), Player::Human);
    }

    #[test]
    fn test_hard_ai_wins_against_careless_human() {
        let mut game = session(true, Difficulty::Hard);
        // 玩家一直走最小的空格
        while !game.is_over() {
            match game.current_player() {
                Player::Human => {
                    let index = game.board().empty_cells()[0];
                    game.play_human(index).unwrap();
                }
                Player::Ai => {
                    game.play_ai().unwrap();
                }
            }
        }
        assert_ne!(game.outcome().winner(), Some(Mark::X));
        assert_eq!(game.games_played(), 1);
        assert_eq!(game.play_human(0), Err(GameError::GameOver));
        assert_eq!(game.play_ai(), Err(GameError::GameOver));
    }

    #[test]
    fn test_restart_swaps_sides() {
        let mut game = session(true, Difficulty::Easy);
        game.play_human(0).unwrap();
        game.restart();

        assert_eq!(game.board(), &Board::empty());
        assert_eq!(game.human_mark(), Mark::O);
        assert_eq!(game.ai_mark(), Mark::X);
        assert_eq!(game.current_player(), Player::Ai);

        let index = game.play_ai().unwrap();
        assert_eq!(game.board().get(index), Some(Mark::X));

        game.restart();
        assert_eq!(game.human_mark(), Mark::X);
        assert_eq!(game.current_player(), Player::Human);
    }

    #[test]
    fn test_set_difficulty() {
        let mut game = session(false, Difficulty::Easy);
        game.set_difficulty(Difficulty::Hard);
        assert_eq!(game.difficulty(), Difficulty::Hard);
        // 困难难度先手总是走角或中心
        let index = game.play_ai().unwrap();
        assert!([0, 2, 4, 6, 8].contains(&index));
    }
}
