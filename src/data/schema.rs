use bevy::asset::Asset;
use bevy::reflect::TypePath;
use serde::Deserialize;

use crate::spawning::reservation::RequirementManifest;

fn default_max_stack() -> u32 {
    64
}

fn default_max_attribute() -> u32 {
    100
}

/// items.ron 中的一条
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemEntry {
    pub id:   String,
    pub name: String,
    /// 放置后得到的方块族；None 表示不是方块物品
    #[serde(default)] pub block: Option<String>,
    #[serde(default = "default_max_stack")] pub max_stack: u32,
}

#[derive(Asset, TypePath, Deserialize, Debug)]
pub struct ItemList {
    pub items: Vec<ItemEntry>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum CreatureRole {
    /// 建造者会额外获得智力
    Builder,
    #[default]
    Worker,
    Guard,
}

/// creatures.ron 中的一条：可召唤生物的静态定义
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatureDefinition {
    pub id:   String,
    pub name: String,
    #[serde(default)] pub role: CreatureRole,
    /// None = 不可召唤；Some(空清单) = 免费召唤
    #[serde(default)] pub items_to_consume: Option<RequirementManifest>,
    #[serde(default = "default_max_attribute")] pub max_intelligence: u32,
    #[serde(default = "default_max_attribute")] pub max_strength: u32,
}

#[derive(Asset, TypePath, Deserialize, Debug)]
pub struct CreatureList {
    pub creatures: Vec<CreatureDefinition>,
}
