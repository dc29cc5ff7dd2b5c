//! 任务板：每个领地发布的任务都登记在这里，空闲的生物从中领取。
//!
//! 任务存放在 `BTreeMap` 里按编号遍历，同样的发布顺序总会得到同样的分配结果。

use bevy::prelude::*;
use std::collections::BTreeMap;

use super::behavior::TaskAssigner;
use super::components::TaskId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// 还没人领
    Available,
    Assigned(Entity),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub label: String,
    /// 发布任务的领地；只有该领地的成员能领取
    pub holding: Entity,
    pub state: TaskState,
}

#[derive(Resource, Debug, Default)]
pub struct TaskBoard {
    tasks: BTreeMap<TaskId, Task>,
    next_id: u64,
}

impl TaskBoard {
    pub fn post(&mut self, holding: Entity, label: impl Into<String>) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.tasks.insert(
            id,
            Task {
                id,
                label: label.into(),
                holding,
                state: TaskState::Available,
            },
        );
        id
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// 把该领地编号最小的空闲任务交给 `actor`
    pub fn assign_next(&mut self, holding: Entity, actor: Entity) -> Option<TaskId> {
        let task = self
            .tasks
            .values_mut()
            .find(|t| t.holding == holding && t.state == TaskState::Available)?;
        task.state = TaskState::Assigned(actor);
        Some(task.id)
    }

    /// 完成即从任务板移除，返回被移除的任务。任务不存在（或已完成）时返回 Err。
    pub fn complete(&mut self, id: TaskId) -> Result<Task, TaskBoardError> {
        self.tasks.remove(&id).ok_or(TaskBoardError::UnknownTask(id))
    }

    pub fn tasks_for(&self, holding: Entity) -> impl Iterator<Item = &Task> {
        self.tasks.values().filter(move |t| t.holding == holding)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TaskBoardError {
    #[error("no task {0}")]
    UnknownTask(TaskId),
}

impl TaskAssigner for TaskBoard {
    fn assign_task(&mut self, holding: Entity, actor: Entity) -> Option<TaskId> {
        self.assign_next(holding, actor)
    }
}
