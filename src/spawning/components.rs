use bevy::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

/// 召唤出来的生物，记录来自哪条定义
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    pub definition_id: String,
}

/// 召唤者
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedBy(pub Entity);

/// 召唤时随机生成的属性
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreatureAttributes {
    pub intelligence: u32,
    pub strength: u32,
}

/// 属性随机源
#[derive(Resource)]
pub struct SpawnRng(pub StdRng);

impl SpawnRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_os_rng()),
        }
    }
}
