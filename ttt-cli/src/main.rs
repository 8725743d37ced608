use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ttt_cli::render::{describe_outcome, render_board};
use ttt_cli::{GameSession, LogLevel, Player, Settings};
use ttt_core::{Difficulty, GameError};

#[derive(Parser)]
#[command(name = "tictactoe", about = "人机井字棋")]
struct Args {
    /// AI 难度（easy / hard）
    #[arg(long)]
    difficulty: Option<Difficulty>,
    /// 第一局由 AI 先手
    #[arg(long)]
    ai_first: bool,
    /// AI 落子前的停顿（毫秒）
    #[arg(long)]
    delay_ms: Option<u64>,
    /// 简单难度的随机种子
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,
    /// 将本次生效的设置写回配置文件
    #[arg(long)]
    save_settings: bool,
}

impl Args {
    fn apply(&self, settings: &mut Settings) {
        if let Some(difficulty) = self.difficulty {
            settings.difficulty = difficulty;
        }
        if self.ai_first {
            settings.human_first = false;
        }
        if let Some(delay_ms) = self.delay_ms {
            settings.think_delay_ms = delay_ms;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if let Some(log_level) = self.log_level {
            settings.log_level = log_level;
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 日志初始化前先读设置，错误推迟到日志可用后再报告
    let loaded = Settings::settings_path().map(|path| Settings::read_from(&path));
    let mut settings = match &loaded {
        Some(Ok(Some(settings))) => settings.clone(),
        _ => Settings::default(),
    };
    args.apply(&mut settings);

    // 初始化日志
    let level = settings.log_level.as_directive();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("tictactoe={}", level).parse()?)
                .add_directive(format!("ttt_cli={}", level).parse()?)
                .add_directive(format!("ttt_ai={}", level).parse()?),
        )
        .init();

    match loaded {
        Some(Err(e)) => warn!("{:#}，使用默认设置", e),
        None => warn!("无法获取配置目录，使用默认设置"),
        Some(Ok(_)) => {}
    }

    if args.save_settings {
        let path = settings.save()?;
        println!("设置已保存到 {}", path.display());
    }

    info!("井字棋启动: {:?}", settings);
    run(&settings)
}

/// 主循环
fn run(settings: &Settings) -> Result<()> {
    let mut game = GameSession::new(&settings.ai_config(), settings.human_first);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_header(&game);

        while !game.is_over() {
            match game.current_player() {
                Player::Human => {
                    println!("{}\n", render_board(game.board(), &game.outcome()));
                    prompt(&format!("你执 {}，输入 1-9 落子（q 退出）: ", game.human_mark()))?;

                    let Some(line) = lines.next() else {
                        return Ok(());
                    };
                    let input = line.context("读取输入失败")?;
                    let input = input.trim();
                    if input.eq_ignore_ascii_case("q") {
                        return Ok(());
                    }

                    match parse_cell(input).and_then(|index| game.play_human(index)) {
                        Ok(_) => {}
                        Err(e) => println!("无效落子: {}", e),
                    }
                }
                Player::Ai => {
                    thread::sleep(Duration::from_millis(settings.think_delay_ms));
                    let index = game.play_ai()?;
                    println!("AI({}) 落子 {}", game.ai_mark(), index + 1);
                }
            }
        }

        let outcome = game.outcome();
        println!("{}\n", render_board(game.board(), &outcome));
        println!("{}", describe_outcome(&outcome, game.human_mark()));

        loop {
            prompt(&format!(
                "r 再来一局 / d 切换难度（当前 {}）/ q 退出: ",
                game.difficulty()
            ))?;
            let Some(line) = lines.next() else {
                return Ok(());
            };
            match line.context("读取输入失败")?.trim() {
                "r" | "R" => break,
                "d" | "D" => game.set_difficulty(game.difficulty().toggle()),
                "q" | "Q" => return Ok(()),
                _ => {}
            }
        }

        game.restart();
    }
}

fn print_header<R: rand::Rng>(game: &GameSession<R>) {
    let first = match game.current_player() {
        Player::Human => "你先手",
        Player::Ai => "AI 先手",
    };
    println!(
        "\n=== 第 {} 局 · 难度 {} · {} ===",
        game.games_played() + 1,
        game.difficulty(),
        first
    );
}

/// 解析 1-9 的格子编号
fn parse_cell(input: &str) -> ttt_core::Result<usize> {
    match input.parse::<usize>() {
        Ok(n @ 1..=9) => Ok(n - 1),
        _ => Err(GameError::invalid_state(format!(
            "expected a cell number 1-9, got {:?}",
            input
        ))),
    }
}

fn prompt(text: &str) -> Result<()> {
    print!("{}", text);
    io::stdout().flush().context("刷新输出失败")
}
