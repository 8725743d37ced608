//! 设置模块
//!
//! 提供设置数据结构和 JSON 持久化

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use ttt_ai::AiConfig;
use ttt_core::{Difficulty, DEFAULT_THINK_DELAY_MS};

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// 用于 `EnvFilter` 的级别字符串
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// 游戏设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// AI 难度
    pub difficulty: Difficulty,
    /// 第一局是否由玩家先手
    pub human_first: bool,
    /// AI 落子前的停顿（毫秒），只影响显示节奏
    pub think_delay_ms: u64,
    /// 简单难度的随机种子
    pub seed: Option<u64>,
    pub log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            human_first: true,
            think_delay_ms: DEFAULT_THINK_DELAY_MS,
            seed: None,
            log_level: LogLevel::default(),
        }
    }
}

impl Settings {
    /// 获取设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("tictactoe");
            path.push("settings.json");
            path
        })
    }

    /// 读取设置文件，文件不存在时返回 None
    pub fn read_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取设置文件: {:?}", path))?;
        let settings = serde_json::from_str(&content)
            .with_context(|| format!("设置文件格式无效: {:?}", path))?;
        Ok(Some(settings))
    }

    /// 从文件加载设置，失败时使用默认设置
    pub fn load_from(path: &Path) -> Self {
        match Self::read_from(path) {
            Ok(Some(settings)) => {
                tracing::info!("已加载设置: {:?}", path);
                settings
            }
            Ok(None) => {
                tracing::info!("设置文件不存在，使用默认设置");
                Self::default()
            }
            Err(e) => {
                tracing::warn!("{:#}，使用默认设置", e);
                Self::default()
            }
        }
    }

    /// 保存设置到文件
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("无法创建配置目录: {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self).context("序列化设置失败")?;
        std::fs::write(path, content)
            .with_context(|| format!("写入设置文件失败: {:?}", path))?;

        tracing::info!("设置已保存: {:?}", path);
        Ok(())
    }

    /// 保存到默认位置
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::settings_path().context("无法获取配置目录")?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// AI 配置
    pub fn ai_config(&self) -> AiConfig {
        AiConfig {
            difficulty: self.difficulty,
            seed: self.seed,
        }
    }
}
