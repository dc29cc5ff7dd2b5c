use bevy::prelude::*;

use super::components::TaskId;

/// 为某个领地发布任务；`holding` 为 PLACEHOLDER 时表示玩家领地
#[derive(Event)]
pub struct PostTaskEvent {
    pub holding: Entity,
    pub label: String,
}

#[derive(Event)]
pub struct CompleteTaskEvent {
    pub task: TaskId,
}

/// 某个生物领到了任务
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct TaskAssigned {
    pub actor: Entity,
    pub task: TaskId,
}

#[derive(Event)]
pub struct ListTasksEvent;
