use super::{attributes::roll_attributes, components::*, events::*, reservation::*};
use crate::core::{events::LogEvent, resources::GameConfig};
use crate::data::{schema::CreatureDefinition, CreatureCatalog};
use crate::inventory::components::Inventory;
use crate::player::{resolve_player, Player};
use crate::tasks::components::{HoldingMember, TaskAgent};
use bevy::prelude::*;

/// 在请求位置召唤生物，前提是召唤者付得起定义里的物品
#[allow(clippy::too_many_arguments)]
pub fn handle_spawn_requests(
    mut commands: Commands,
    mut ev_request: EventReader<SpawnCreatureRequest>,
    mut ev_spawned: EventWriter<CreatureSpawned>,
    mut ev_rejected: EventWriter<SpawnRejected>,
    mut log_event: EventWriter<LogEvent>,
    catalog: Res<CreatureCatalog>,
    config: Res<GameConfig>,
    mut rng: ResMut<SpawnRng>,
    players: Query<Entity, With<Player>>,
    mut holders: Query<(Option<&Name>, Option<&mut Inventory>)>,
) {
    for ev in ev_request.read() {
        // 召唤者必须是存在的实体，否则生物没有所属领地
        let Some(requester) = resolve_player(ev.requester, &players) else {
            warn!("没有玩家，忽略召唤 {}", ev.creature_id);
            log_event.write(LogEvent(format!("无法召唤 {}: 没有召唤者", ev.creature_id)));
            continue;
        };
        let Ok((name, inventory)) = holders.get_mut(requester) else {
            warn!("召唤者 {requester} 不存在，忽略召唤 {}", ev.creature_id);
            log_event.write(LogEvent(format!("无法召唤 {}: 没有召唤者", ev.creature_id)));
            continue;
        };
        let requester_name = name.map_or_else(|| format!("{requester}"), |n| n.to_string());

        let result = catalog
            .get(&ev.creature_id)
            .ok_or_else(|| ConsumeError::UnknownCreature(ev.creature_id.clone()))
            .and_then(|def| pay_for(def, inventory, config.commit_policy).map(|()| def));

        match result {
            Ok(def) => {
                let entity = spawn_creature(&mut commands, def, requester, ev.position, &mut rng);
                info!(
                    "Player {requester_name} spawned a new creature of type {}",
                    def.name
                );
                log_event.write(LogEvent(format!("召唤成功：{} ({entity})", def.name)));
                ev_spawned.write(CreatureSpawned {
                    entity,
                    requester,
                    creature_id: def.id.clone(),
                });
            }
            Err(reason) => {
                info!("{requester_name} 无法召唤 {}: {reason}", ev.creature_id);
                log_event.write(LogEvent(format!("无法召唤 {}: {reason}", ev.creature_id)));
                ev_rejected.write(SpawnRejected {
                    requester,
                    creature_id: ev.creature_id.clone(),
                    reason,
                });
            }
        }
    }
}

/// 扣除召唤所需物品
fn pay_for(
    def: &CreatureDefinition,
    mut inventory: Option<Mut<Inventory>>,
    policy: CommitPolicy,
) -> Result<(), ConsumeError> {
    let manifest = def
        .items_to_consume
        .as_ref()
        .ok_or_else(|| ConsumeError::NotSpawnable(def.name.clone()))?;

    let plan = attempt_consume(manifest, inventory.as_deref_mut(), policy)?;
    for entry in plan.entries() {
        debug!(
            "{} 消耗 slot {} 的 {} ×{}",
            def.id, entry.slot, entry.kind, entry.quantity
        );
    }
    Ok(())
}

fn spawn_creature(
    commands: &mut Commands,
    def: &CreatureDefinition,
    requester: Entity,
    position: Vec3,
    rng: &mut SpawnRng,
) -> Entity {
    commands
        .spawn((
            Name::new(def.name.clone()),
            Creature {
                definition_id: def.id.clone(),
            },
            SpawnedBy(requester),
            HoldingMember { holding: requester },
            TaskAgent::default(),
            roll_attributes(def, &mut rng.0),
            Transform::from_translation(position),
        ))
        .id()
}

/// 打印可召唤生物及其消耗
pub fn print_creatures(
    mut ev_list: EventReader<ListCreaturesEvent>,
    mut log_event: EventWriter<LogEvent>,
    catalog: Res<CreatureCatalog>,
) {
    if ev_list.is_empty() {
        return;
    }
    ev_list.clear();

    for def in &catalog.creatures {
        let cost = match &def.items_to_consume {
            None => "不可召唤".to_string(),
            Some(manifest) if manifest.is_empty() => "免费".to_string(),
            Some(manifest) => manifest
                .iter()
                .map(|r| format!("{} ×{}", r.kind, r.quantity))
                .collect::<Vec<_>>()
                .join(", "),
        };
        log_event.write(LogEvent(format!("{} | {} | {:?} | {cost}", def.id, def.name, def.role)));
    }
}
