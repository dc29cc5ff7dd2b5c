pub mod schema;
pub mod loader;

use bevy::prelude::*;
use schema::{CreatureDefinition, CreatureList, ItemEntry, ItemList};
use crate::core::{resources::GameConfig, states::AppState};

// --------------------------- 资源 ---------------------------
#[derive(Resource, Default)]
pub struct DataAssets {
    items: Option<Handle<ItemList>>,
    creatures: Option<Handle<CreatureList>>,
}

/// 加载完成后的物品表
#[derive(Resource, Default, Debug, Clone)]
pub struct ItemCatalog {
    pub items: Vec<ItemEntry>,
}

impl ItemCatalog {
    /// 按 id 查找（不区分大小写）
    pub fn get(&self, id: &str) -> Option<&ItemEntry> {
        self.items.iter().find(|e| e.id.eq_ignore_ascii_case(id))
    }
}

/// 加载完成后的生物定义表
#[derive(Resource, Default, Debug, Clone)]
pub struct CreatureCatalog {
    pub creatures: Vec<CreatureDefinition>,
}

impl CreatureCatalog {
    pub fn get(&self, id: &str) -> Option<&CreatureDefinition> {
        self.creatures.iter().find(|c| c.id.eq_ignore_ascii_case(id))
    }
}

// --------------------------- 插件 ---------------------------
pub struct DataPlugin;
impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_asset::<ItemList>()
            .init_asset::<CreatureList>()
            .register_asset_loader(loader::RonLoader::<ItemList>::new(&["items.ron"]))
            .register_asset_loader(loader::RonLoader::<CreatureList>::new(&["creatures.ron"]))
            .init_resource::<DataAssets>()
            .init_resource::<ItemCatalog>()
            .init_resource::<CreatureCatalog>()
            .add_systems(OnEnter(AppState::Loading), start_loading)
            .add_systems(
                Update,
                check_loaded.run_if(in_state(AppState::Loading)),
            );
    }
}

// --------------------------- 系统 ---------------------------
fn start_loading(
    mut data_assets: ResMut<DataAssets>,
    asset_server: Res<AssetServer>,
    config: Res<GameConfig>,
) {
    data_assets.items = Some(asset_server.load(config.items_path.clone()));
    data_assets.creatures = Some(asset_server.load(config.creatures_path.clone()));
}

fn check_loaded(
    mut next: ResMut<NextState<AppState>>,
    data_assets: Res<DataAssets>,
    item_lists: Res<Assets<ItemList>>,
    creature_lists: Res<Assets<CreatureList>>,
    mut items: ResMut<ItemCatalog>,
    mut creatures: ResMut<CreatureCatalog>,
) {
    let item_list = data_assets.items.as_ref().and_then(|h| item_lists.get(h));
    let creature_list = data_assets.creatures.as_ref().and_then(|h| creature_lists.get(h));

    if let (Some(item_list), Some(creature_list)) = (item_list, creature_list) {
        items.items = item_list.items.clone();
        creatures.creatures = creature_list.creatures.clone();
        info!(
            "✔ 数据加载完成：物品 {}，生物 {}",
            items.items.len(),
            creatures.creatures.len()
        );
        next.set(AppState::InGame);
    }
}
