use bevy::prelude::*;

use super::resources::GameConfig;

/// 给终端看的一行输出
#[derive(Event)]
pub struct LogEvent(pub String);

pub fn announce_startup(mut writer: EventWriter<LogEvent>, config: Res<GameConfig>) {
    writer.write(LogEvent(format!(
        "殖民地启动：背包 {} 格，扣除策略 {:?}",
        config.backpack_capacity, config.commit_policy
    )));
}
