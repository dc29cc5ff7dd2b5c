use bevy::prelude::*;

/// 启动 → 读取 RON 数据 → 进入游戏
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    #[default]
    Startup,
    /// 等待物品表与生物表加载完成
    Loading,
    InGame,
}
