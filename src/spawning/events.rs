use bevy::prelude::*;

use super::reservation::ConsumeError;

/// 请求召唤生物；`requester` 为 PLACEHOLDER 时表示玩家
#[derive(Event, Debug, Clone)]
pub struct SpawnCreatureRequest {
    pub requester: Entity,
    pub creature_id: String,
    pub position: Vec3,
}

#[derive(Event, Debug, Clone, PartialEq)]
pub struct CreatureSpawned {
    pub entity: Entity,
    pub requester: Entity,
    pub creature_id: String,
}

/// 召唤没有发生；原因只用于日志与调试输出
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SpawnRejected {
    pub requester: Entity,
    pub creature_id: String,
    pub reason: ConsumeError,
}

#[derive(Event)]
pub struct ListCreaturesEvent;
