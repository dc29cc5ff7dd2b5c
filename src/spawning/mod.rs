pub mod attributes;
pub mod components;
pub mod events;
pub mod reservation;
mod systems;
#[cfg(test)]
mod tests;

use crate::core::{resources::GameConfig, states::AppState};
use bevy::prelude::*;
use components::SpawnRng;
use events::*;
use systems::*;

/// 召唤：玩家用背包里的方块换生物
pub struct SpawningPlugin;

impl Plugin for SpawningPlugin {
    fn build(&self, app: &mut App) {
        let seed = app.world().get_resource::<GameConfig>().and_then(|c| c.rng_seed);

        app.insert_resource(SpawnRng::from_seed(seed))
            .add_event::<SpawnCreatureRequest>()
            .add_event::<CreatureSpawned>()
            .add_event::<SpawnRejected>()
            .add_event::<ListCreaturesEvent>()
            .add_systems(
                Update,
                (handle_spawn_requests, print_creatures).run_if(in_state(AppState::InGame)),
            );
    }
}
