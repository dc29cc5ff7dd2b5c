use anyhow::Context;
use bevy::prelude::*;
use serde::Deserialize;
use std::path::Path;

use crate::spawning::reservation::CommitPolicy;

/// 默认配置文件位置（相对工作目录）
pub const CONFIG_PATH: &str = "config/game.toml";

/// 全局配置（启动时从 TOML 读取，缺项走默认值）
#[derive(Resource, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// 玩家背包格数
    pub backpack_capacity: usize,
    /// 扣除物品失败时是否回滚
    pub commit_policy: CommitPolicy,
    /// 属性随机种子；None 表示使用系统熵
    pub rng_seed: Option<u64>,
    pub items_path: String,
    pub creatures_path: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            backpack_capacity: 30,
            commit_policy: CommitPolicy::default(),
            rng_seed: None,
            items_path: "data/items.ron".into(),
            creatures_path: "data/creatures.ron".into(),
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("invalid game config")
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("while loading {}", path.display()))
    }

    /// 文件不存在时静默使用默认值，解析失败时警告后使用默认值
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("未找到 {}，使用默认配置", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("配置读取失败，使用默认配置: {err:#}");
                Self::default()
            }
        }
    }
}
