use super::{behavior::*, board::*, components::*, events::*};
use crate::core::events::LogEvent;
use crate::player::{resolve_player, Player};
use bevy::prelude::*;

pub fn post_tasks(
    mut ev_post: EventReader<PostTaskEvent>,
    mut log_event: EventWriter<LogEvent>,
    mut board: ResMut<TaskBoard>,
    players: Query<Entity, With<Player>>,
) {
    for ev in ev_post.read() {
        let Some(holding) = resolve_player(ev.holding, &players) else {
            warn!("找不到领地，任务 {} 未发布", ev.label);
            continue;
        };
        let id = board.post(holding, ev.label.clone());
        info!("发布任务 {id}: {}", ev.label);
        log_event.write(LogEvent(format!("已发布任务 {id}: {}", ev.label)));
    }
}

pub fn complete_tasks(
    mut ev_complete: EventReader<CompleteTaskEvent>,
    mut log_event: EventWriter<LogEvent>,
    mut board: ResMut<TaskBoard>,
    mut agents: Query<&mut TaskAgent>,
) {
    for ev in ev_complete.read() {
        match board.complete(ev.task) {
            Ok(task) => {
                if let TaskState::Assigned(actor) = task.state {
                    if let Ok(mut agent) = agents.get_mut(actor) {
                        if agent.current == Some(ev.task) {
                            agent.current = None;
                        }
                    }
                }
                log_event.write(LogEvent(format!("任务 {} 已完成: {}", ev.task, task.label)));
            }
            Err(err) => {
                log_event.write(LogEvent(format!("无法完成任务: {err}")));
            }
        }
    }
}

/// 对每个空闲生物执行一次 `look_for_task` 节点
pub fn look_for_tasks(
    mut board: ResMut<TaskBoard>,
    mut ev_assigned: EventWriter<TaskAssigned>,
    mut agents: Query<(Entity, Option<&HoldingMember>, &mut TaskAgent, Option<&Name>)>,
) {
    for (actor, member, mut agent, name) in agents.iter_mut() {
        if agent.current.is_some() {
            continue;
        }
        let node = LookForTask::construct(actor, member);
        if node.modify(&mut *board, &mut *agent) == BehaviorState::Success {
            if let Some(task) = agent.current {
                let who = name.map_or_else(|| format!("{actor}"), |n| n.to_string());
                info!("{who} 领取了任务 {task}");
                ev_assigned.write(TaskAssigned { actor, task });
            }
        }
    }
}

pub fn list_tasks(
    mut ev_list: EventReader<ListTasksEvent>,
    mut log_event: EventWriter<LogEvent>,
    board: Res<TaskBoard>,
    players: Query<Entity, With<Player>>,
) {
    if ev_list.is_empty() {
        return;
    }
    ev_list.clear();

    let Ok(holding) = players.single() else {
        return;
    };
    let lines: Vec<String> = board
        .tasks_for(holding)
        .map(|t| format!("{} {} [{:?}]", t.id, t.label, t.state))
        .collect();
    if lines.is_empty() {
        log_event.write(LogEvent("  (no tasks)".into()));
    } else {
        log_event.write(LogEvent(lines.join("\n")));
    }
}
