pub mod behavior;
pub mod board;
pub mod components;
pub mod events;
mod systems;

use crate::core::states::AppState;
use bevy::prelude::*;
use board::TaskBoard;
use events::*;
use systems::*;

pub struct TaskPlugin;

impl Plugin for TaskPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TaskBoard>()
            .add_event::<PostTaskEvent>()
            .add_event::<CompleteTaskEvent>()
            .add_event::<TaskAssigned>()
            .add_event::<ListTasksEvent>()
            .add_systems(
                Update,
                (post_tasks, complete_tasks, look_for_tasks, list_tasks)
                    .chain()
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
