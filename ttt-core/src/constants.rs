//! 常量定义

/// 棋盘边长
pub const BOARD_WIDTH: usize = 3;

/// 棋盘格子数
pub const BOARD_CELLS: usize = BOARD_WIDTH * BOARD_WIDTH;

/// 连成一线所需的棋子数
pub const WIN_LENGTH: usize = 3;

/// 所有获胜连线：3 行、3 列、2 条对角线（顺序固定，判定时按此顺序取第一条）
pub const WIN_LINES: [[usize; WIN_LENGTH]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 默认 AI 思考延迟（毫秒）
pub const DEFAULT_THINK_DELAY_MS: u64 = 300;
