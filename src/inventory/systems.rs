use super::{components::*, events::*};
use crate::core::events::LogEvent;
use crate::data::ItemCatalog;
use crate::player::Player;
use bevy::prelude::*;

/// 处理"give"——往玩家背包里塞 ItemStack
pub fn give_item(
    mut ev_give: EventReader<GiveItemEvent>,
    mut log_event: EventWriter<LogEvent>,
    catalog: Res<ItemCatalog>,
    mut player_query: Query<&mut Inventory, With<Player>>,
) {
    for ev in ev_give.read() {
        let Some(proto) = catalog.get(&ev.id) else {
            warn!("不存在物品 ID {}", ev.id);
            log_event.write(LogEvent(format!("不存在物品 ID {}", ev.id)));
            continue;
        };
        let Ok(mut inventory) = player_query.single_mut() else {
            warn!("没有玩家背包，无法获得 {}", proto.name);
            continue;
        };

        let overflow = inventory.give(proto, ev.count);
        let given = ev.count - overflow;
        if overflow > 0 {
            warn!("背包已满，{} 有 {} 个放不下", proto.name, overflow);
        }
        info!("获得 {} ×{}", proto.name, given);
        log_event.write(LogEvent(format!("获得 {} ×{}", proto.name, given)));
    }
}

/// 打印玩家背包内容
pub fn print_inventory(
    mut ev_list: EventReader<ListInventoryEvent>,
    mut log_event: EventWriter<LogEvent>,
    player_query: Query<&Inventory, With<Player>>,
) {
    if ev_list.is_empty() {
        return;
    }
    ev_list.clear();

    let Ok(inventory) = player_query.single() else {
        log_event.write(LogEvent("  (no inventory)".into()));
        return;
    };

    let mut lines = Vec::new();
    for (idx, stack) in inventory.slots.iter().enumerate() {
        if let Some(stack) = stack {
            let kind = stack.block_kind().unwrap_or("-");
            lines.push(format!(
                "[{idx}] {} ×{} (id={}, block={kind})",
                stack.proto.name, stack.count, stack.proto.id
            ));
        }
    }

    if lines.is_empty() {
        lines.push("  (empty)".into());
    }
    log_event.write(LogEvent(lines.join("\n")));
}
