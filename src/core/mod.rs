use bevy::prelude::*;

pub mod states;
pub mod events;
pub mod resources;

/// 核心插件：注册全局资源 / 事件 / 状态
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        use states::AppState;

        let config = resources::GameConfig::load_or_default(resources::CONFIG_PATH);

        app
            .init_state::<AppState>()
            .add_event::<events::LogEvent>()
            .insert_resource(config)
            .add_systems(Startup, events::announce_startup);
    }
}
