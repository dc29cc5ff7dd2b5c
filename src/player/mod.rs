use bevy::prelude::*;

use crate::core::{resources::GameConfig, states::AppState};
use crate::inventory::components::Inventory;
use crate::tasks::components::Holding;

/// 玩家标记组件
#[derive(Component)]
pub struct Player;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::InGame), spawn_player);
    }
}

/// 初始化玩家实体：带背包，同时作为自己领地的拥有者
pub fn spawn_player(mut commands: Commands, config: Res<GameConfig>) {
    commands.spawn((
        Player,
        Name::new("Player"),
        Holding,
        Inventory::with_capacity(config.backpack_capacity),
    ));
}

/// 事件里的 `Entity::PLACEHOLDER` 代表当前玩家
pub fn resolve_player(entity: Entity, players: &Query<Entity, With<Player>>) -> Option<Entity> {
    if entity == Entity::PLACEHOLDER {
        players.single().ok()
    } else {
        Some(entity)
    }
}
