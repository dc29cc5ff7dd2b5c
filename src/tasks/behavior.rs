//! 行为树叶子节点 `look_for_task`：向任务分配系统要一个任务。

use bevy::prelude::*;

use super::components::{HoldingMember, TaskAgent, TaskId};

/// 节点执行结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaviorState {
    Success,
    Failure,
}

/// 任务分配系统对行为节点暴露的接口
pub trait TaskAssigner {
    fn assign_task(&mut self, holding: Entity, actor: Entity) -> Option<TaskId>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookForTask {
    actor: Entity,
    holding: Option<Entity>,
}

impl LookForTask {
    pub const NAME: &'static str = "look_for_task";

    /// 领地在构造时解析一次
    pub fn construct(actor: Entity, member: Option<&HoldingMember>) -> Self {
        Self {
            actor,
            holding: member.map(|m| m.holding),
        }
    }

    pub fn modify(&self, assigner: &mut impl TaskAssigner, agent: &mut TaskAgent) -> BehaviorState {
        let Some(holding) = self.holding else {
            return BehaviorState::Failure;
        };
        match assigner.assign_task(holding, self.actor) {
            Some(task) => {
                agent.current = Some(task);
                BehaviorState::Success
            }
            None => BehaviorState::Failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::board::TaskBoard;

    #[test]
    fn succeeds_when_holding_has_work() {
        let mut world = World::new();
        let holding = world.spawn_empty().id();
        let actor = world.spawn_empty().id();
        let mut board = TaskBoard::default();
        let id = board.post(holding, "chop");
        let mut agent = TaskAgent::default();

        let node = LookForTask::construct(actor, Some(&HoldingMember { holding }));

        assert_eq!(node.modify(&mut board, &mut agent), BehaviorState::Success);
        assert_eq!(agent.current, Some(id));
        assert_eq!(node.modify(&mut board, &mut agent), BehaviorState::Failure);
    }

    #[test]
    fn fails_without_holding() {
        let mut world = World::new();
        let holding = world.spawn_empty().id();
        let actor = world.spawn_empty().id();
        let mut board = TaskBoard::default();
        board.post(holding, "chop");
        let mut agent = TaskAgent::default();

        let node = LookForTask::construct(actor, None);

        assert_eq!(node.modify(&mut board, &mut agent), BehaviorState::Failure);
        assert_eq!(agent.current, None);
    }
}
