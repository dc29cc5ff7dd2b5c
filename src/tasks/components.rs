use bevy::prelude::*;
use std::fmt;

/// 任务编号，按发布顺序递增
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 领地拥有者（目前只有玩家）
#[derive(Component, Debug, Default)]
pub struct Holding;

/// 生物属于哪个领地
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldingMember {
    pub holding: Entity,
}

/// 能接任务的生物；`current` 为空表示空闲
#[derive(Component, Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskAgent {
    pub current: Option<TaskId>,
}
