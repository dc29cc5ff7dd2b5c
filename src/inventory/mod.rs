pub mod components;
pub mod events;
mod systems;

use bevy::prelude::*;
use crate::core::states::AppState;
use events::*;
use systems::*;

/// 背包本身挂在玩家实体上（见 player 插件），这里只注册事件与系统
pub struct InventoryPlugin;
impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_event::<GiveItemEvent>()
            .add_event::<ListInventoryEvent>()
            .add_systems(
                Update,
                (
                    give_item,
                    print_inventory,
                ).chain().run_if(in_state(AppState::InGame)),
            );
    }
}
