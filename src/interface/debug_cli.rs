//! 文字 CLI：读取 stdin → 解析命令 → 执行并打印

use bevy::app::AppExit;
use bevy::prelude::*;
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use uuid::Uuid;

use crate::core::{events::LogEvent, states::AppState};
use crate::data::{CreatureCatalog, ItemCatalog};
use crate::inventory::events::{GiveItemEvent, ListInventoryEvent};
use crate::spawning::events::{ListCreaturesEvent, SpawnCreatureRequest};
use crate::tasks::components::TaskId;
use crate::tasks::events::{CompleteTaskEvent, ListTasksEvent, PostTaskEvent};

static CLI_BUFFER: Lazy<Arc<Mutex<VecDeque<String>>>> =
    Lazy::new(|| Arc::new(Mutex::new(VecDeque::new())));

/// 插件入口
pub struct DebugCliPlugin;
impl Plugin for DebugCliPlugin {
    fn build(&self, app: &mut App) {
        {
            let buffer = CLI_BUFFER.clone();
            std::thread::spawn(move || {
                use std::io::{self, BufRead};
                let stdin = io::stdin();
                for line in stdin.lock().lines().map_while(Result::ok) {
                    let line = line.trim();
                    if !line.is_empty() {
                        let mut buf = buffer.lock().unwrap_or_else(PoisonError::into_inner);
                        buf.push_back(line.to_string());
                    }
                }
            });
        }
        app
            // 事件：原始输入行
            .add_event::<CliLine>()
            // 每帧从 buffer 取出所有命令行写入事件
            .add_systems(Update, read_stdin)
            // 仅在 InGame 处理命令
            .add_systems(
                Update,
                execute_cli_commands.run_if(in_state(AppState::InGame)),
            );
    }
}

/* ---------------------------- 事件与枚举 ---------------------------- */

/// 终端敲的一整行
#[derive(Event)]
struct CliLine(String);

/// 我们支持的命令
#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Status,
    Exit,
    Items(Option<String>), // None=全部；Some(token)=按 id/uuid/name 查询
    Give { id: String, count: u32 },
    Inventory,
    Creatures,
    Spawn { id: String, position: Vec3 },
    Task(String),
    Done(u64),
    Tasks,
    Unsupported(String),
}

/* ---------------------------- 读取 stdin ---------------------------- */

fn read_stdin(mut writer: EventWriter<CliLine>) {
    let mut buffer = CLI_BUFFER.lock().unwrap_or_else(PoisonError::into_inner);
    while let Some(line) = buffer.pop_front() {
        writer.write(CliLine(line));
    }
}

/* ---------------------------- 命令执行 ---------------------------- */

#[allow(clippy::too_many_arguments)]
fn execute_cli_commands(
    mut line_reader: EventReader<CliLine>,
    mut app_exit: EventWriter<AppExit>,
    mut log: EventWriter<LogEvent>,
    state: Res<State<AppState>>,
    items: Res<ItemCatalog>,
    creatures: Res<CreatureCatalog>,
    mut ev_give: EventWriter<GiveItemEvent>,
    mut ev_list: EventWriter<ListInventoryEvent>,
    mut ev_creatures: EventWriter<ListCreaturesEvent>,
    mut ev_spawn: EventWriter<SpawnCreatureRequest>,
    mut ev_task: (
        EventWriter<PostTaskEvent>,
        EventWriter<CompleteTaskEvent>,
        EventWriter<ListTasksEvent>,
    ),
) {
    for CliLine(input) in line_reader.read() {
        match parse_command(input) {
            Command::Help => {
                log.write(LogEvent(
                    "命令列表:
  help                     查看帮助
  status                   查看当前状态
  exit / quit              退出程序
  items                    列出所有物品
  items <token>            用 id / uuid / 名称 查询单个物品
  give <id> <count>        给予物品
  inventory                查看物品栏
  creatures                列出可召唤生物及消耗
  spawn <id> [x y z]       消耗物品召唤生物
  task <描述>              为自己的领地发布任务
  done <任务编号>          完成任务
  tasks                    查看领地任务
  ".into()));
            }

            Command::Status => {
                log.write(LogEvent(format!(
                    "State: {:?}, Items Loaded: {}, Creatures Loaded: {}",
                    state.get(),
                    items.items.len(),
                    creatures.creatures.len()
                )));
            }

            Command::Exit => {
                log.write(LogEvent("Bye~".into()));
                app_exit.write(AppExit::Success);
            }

            Command::Items(token) => match token {
                None => {
                    // 全部列出
                    for entry in &items.items {
                        let uuid = uuid_from_id(&entry.id);
                        log.write(LogEvent(format!(
                            "{} | {} | {}",
                            uuid, entry.id, entry.name
                        )));
                    }
                }
                Some(t) => {
                    // 按三种字段匹配
                    let t_low = t.to_lowercase();
                    if let Some(e) = items.items.iter().find(|e| {
                        e.id.eq_ignore_ascii_case(&t_low)
                            || e.name.eq_ignore_ascii_case(&t_low)
                            || uuid_from_id(&e.id).to_string() == t_low
                    }) {
                        let uuid = uuid_from_id(&e.id);
                        log.write(LogEvent(format!(
                            "==================================================
UUID  : {uuid}
ID    : {}
Name  : {}
Block : {}
Stack : {}
==================================================",
                            e.id,
                            e.name,
                            e.block.as_deref().unwrap_or("-"),
                            e.max_stack
                        )));
                    } else {
                        log.write(LogEvent("未找到匹配物品".into()));
                    }
                }
            },

            Command::Give { id, count } => {
                ev_give.write(GiveItemEvent { id, count });
            }

            Command::Inventory => {
                ev_list.write(ListInventoryEvent);
            }

            Command::Creatures => {
                ev_creatures.write(ListCreaturesEvent);
            }

            Command::Spawn { id, position } => {
                ev_spawn.write(SpawnCreatureRequest {
                    requester: Entity::PLACEHOLDER,
                    creature_id: id,
                    position,
                });
            }

            Command::Task(label) => {
                ev_task.0.write(PostTaskEvent {
                    holding: Entity::PLACEHOLDER,
                    label,
                });
            }

            Command::Done(id) => {
                ev_task.1.write(CompleteTaskEvent { task: TaskId(id) });
            }

            Command::Tasks => {
                ev_task.2.write(ListTasksEvent);
            }

            Command::Unsupported(cmd) => {
                log.write(LogEvent(format!("不支持的命令: {cmd}")));
            }
        }
    }
}

/* ---------------------------- 工具函数 ---------------------------- */

fn parse_command(input: &str) -> Command {
    let mut parts = input.split_whitespace();
    let cmd = parts.next().unwrap_or("").to_lowercase();
    match cmd.as_str() {
        "help" | "h" | "?" => Command::Help,
        "status" | "s" => Command::Status,
        "exit" | "quit" | "q" => Command::Exit,
        "items" | "item" | "i" => {
            let token = parts.next().map(|s| s.to_string());
            Command::Items(token)
        }
        "give" => {
            let id = parts.next().unwrap_or("").to_string();
            let cnt = parts.next().unwrap_or("1").parse().unwrap_or(1);
            Command::Give { id, count: cnt }
        }
        "inventory" | "inv" => Command::Inventory,
        "creatures" | "c" => Command::Creatures,
        "spawn" => {
            let id = parts.next().unwrap_or("").to_string();
            let coords: Vec<f32> = parts.filter_map(|p| p.parse().ok()).collect();
            let position = match coords[..] {
                [x, y, z, ..] => Vec3::new(x, y, z),
                _ => Vec3::ZERO,
            };
            Command::Spawn { id, position }
        }
        "task" => {
            let label = parts.collect::<Vec<_>>().join(" ");
            if label.is_empty() {
                Command::Unsupported("task (缺少描述)".into())
            } else {
                Command::Task(label)
            }
        }
        "done" => match parts.next().map(|s| s.trim_start_matches('#').parse()) {
            Some(Ok(id)) => Command::Done(id),
            _ => Command::Unsupported("done (需要任务编号)".into()),
        },
        "tasks" => Command::Tasks,
        other => Command::Unsupported(other.into()),
    }
}

fn uuid_from_id(id: &str) -> Uuid {
    // 用固定 namespace + id 字节生成版本 5 UUID，保证可重复得到同一值
    Uuid::new_v5(&Uuid::NAMESPACE_OID, id.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_spawn_with_and_without_position() {
        assert_eq!(
            parse_command("spawn builder 1 2.5 -3"),
            Command::Spawn {
                id: "builder".into(),
                position: Vec3::new(1.0, 2.5, -3.0)
            }
        );
        assert_eq!(
            parse_command("SPAWN guard"),
            Command::Spawn {
                id: "guard".into(),
                position: Vec3::ZERO
            }
        );
    }

    #[test]
    fn parses_give_with_default_count() {
        assert_eq!(
            parse_command("give stone"),
            Command::Give {
                id: "stone".into(),
                count: 1
            }
        );
        assert_eq!(
            parse_command("give wood 12"),
            Command::Give {
                id: "wood".into(),
                count: 12
            }
        );
    }

    #[test]
    fn parses_task_commands() {
        assert_eq!(parse_command("task dig the cellar"), Command::Task("dig the cellar".into()));
        assert!(matches!(parse_command("task"), Command::Unsupported(_)));
        assert_eq!(parse_command("done #3"), Command::Done(3));
        assert_eq!(parse_command("done 4"), Command::Done(4));
        assert!(matches!(parse_command("done x"), Command::Unsupported(_)));
        assert_eq!(parse_command("tasks"), Command::Tasks);
    }

    fn cli_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<CliLine>()
            .add_event::<AppExit>()
            .add_event::<LogEvent>()
            .add_event::<GiveItemEvent>()
            .add_event::<ListInventoryEvent>()
            .add_event::<ListCreaturesEvent>()
            .add_event::<SpawnCreatureRequest>()
            .add_event::<PostTaskEvent>()
            .add_event::<CompleteTaskEvent>()
            .add_event::<ListTasksEvent>()
            .insert_resource(State::new(AppState::InGame))
            .init_resource::<ItemCatalog>()
            .init_resource::<CreatureCatalog>()
            .add_systems(Update, execute_cli_commands);
        app
    }

    #[test]
    fn exit_command_quits_successfully() {
        let mut app = cli_app();
        app.world_mut().send_event(CliLine("quit".into()));
        app.update();

        let exits: Vec<AppExit> = app
            .world_mut()
            .resource_mut::<Events<AppExit>>()
            .drain()
            .collect();
        assert_eq!(exits, vec![AppExit::Success]);
    }

    #[test]
    fn uuid_is_stable_per_id() {
        assert_eq!(uuid_from_id("stone"), uuid_from_id("stone"));
        assert_ne!(uuid_from_id("stone"), uuid_from_id("wood"));
    }
}
