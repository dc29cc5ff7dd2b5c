//! 物品预留：判断背包能否满足生物的消耗清单，能满足就扣除。
//!
//! 分两步走：先 [`scan`] 只读扫描背包得到 [`ReservationPlan`]，全部需求都有着落后
//! 再 [`commit`] 按计划逐格扣除。扫描阶段失败时背包不会被改动。

use serde::Deserialize;
use thiserror::Error;

/// 清单中的一项：某种方块需要多少个
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Requirement {
    pub kind: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestError {
    #[error("item kind `{0}` is listed more than once")]
    DuplicateKind(String),
    #[error("item kind `{0}` has a required quantity of zero")]
    ZeroQuantity(String),
}

/// 有序、键唯一、数量为正的消耗清单。构造后不可变。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Requirement>")]
pub struct RequirementManifest {
    entries: Vec<Requirement>,
}

impl RequirementManifest {
    pub fn new<K: Into<String>>(
        entries: impl IntoIterator<Item = (K, u32)>,
    ) -> Result<Self, ManifestError> {
        let entries: Vec<Requirement> = entries
            .into_iter()
            .map(|(kind, quantity)| Requirement {
                kind: kind.into(),
                quantity,
            })
            .collect();
        Self::try_from(entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Requirement> {
        self.entries.iter()
    }

    pub fn quantity_of(&self, kind: &str) -> Option<u32> {
        self.position(kind).map(|pos| self.entries[pos].quantity)
    }

    fn position(&self, kind: &str) -> Option<usize> {
        self.entries.iter().position(|r| r.kind == kind)
    }
}

impl TryFrom<Vec<Requirement>> for RequirementManifest {
    type Error = ManifestError;

    fn try_from(entries: Vec<Requirement>) -> Result<Self, Self::Error> {
        for (i, req) in entries.iter().enumerate() {
            if req.quantity == 0 {
                return Err(ManifestError::ZeroQuantity(req.kind.clone()));
            }
            if entries[..i].iter().any(|prev| prev.kind == req.kind) {
                return Err(ManifestError::DuplicateKind(req.kind.clone()));
            }
        }
        Ok(Self { entries })
    }
}

/// 背包某一格在预留算法眼中的样子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotView<'a> {
    Empty,
    /// 有东西，但不是方块物品，不参与匹配
    NonBlock,
    Block { kind: &'a str, count: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemovalError {
    #[error("slot {0} does not exist")]
    NoSuchSlot(usize),
    #[error("slot {0} is empty")]
    EmptySlot(usize),
    #[error("slot {slot} holds {found}, not {expected}")]
    KindMismatch {
        slot: usize,
        expected: String,
        found: String,
    },
    #[error("slot {slot} holds {available}, {requested} requested")]
    NotEnough {
        slot: usize,
        requested: u32,
        available: u32,
    },
}

/// 预留算法对背包的全部要求
pub trait InventoryProvider {
    /// 回滚所需的快照
    type Checkpoint;

    fn slot_count(&self) -> usize;

    /// 越界索引按空格处理
    fn slot_at(&self, index: usize) -> SlotView<'_>;

    fn remove_from_slot(
        &mut self,
        index: usize,
        kind: &str,
        quantity: u32,
    ) -> Result<(), RemovalError>;

    fn checkpoint(&self, slots: &[usize]) -> Self::Checkpoint;

    fn rollback(&mut self, checkpoint: Self::Checkpoint);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub slot: usize,
    pub kind: String,
    pub quantity: u32,
}

/// 扫描结果：每条需求对应哪一格、扣多少。只活在一次消耗尝试里。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationPlan {
    entries: Vec<PlanEntry>,
}

impl ReservationPlan {
    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn slots(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.slot).collect()
    }
}

/// 提交阶段中途失败时怎么处理已经扣掉的物品
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitPolicy {
    /// 任何一次扣除失败都恢复到提交前
    #[default]
    AllOrNothing,
    /// 已扣除的不退还
    Partial,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsumeError {
    #[error("no creature definition named `{0}`")]
    UnknownCreature(String),
    #[error("`{0}` is not spawnable")]
    NotSpawnable(String),
    #[error("no inventory to source material from")]
    NoInventory,
    #[error("not enough {kind}: {required} required, {available} found")]
    InsufficientItems {
        kind: String,
        required: u32,
        available: u32,
    },
    #[error("could not take {quantity} {kind} from slot {slot}")]
    RemovalFailed {
        slot: usize,
        kind: String,
        quantity: u32,
        #[source]
        source: RemovalError,
    },
}

/// 只读扫描。按格子顺序找第一个种类匹配且数量足够的格子；
/// 匹配到但数量不够的格子会让整个扫描立即失败。
pub fn scan<I: InventoryProvider + ?Sized>(
    manifest: &RequirementManifest,
    inventory: &I,
) -> Result<ReservationPlan, ConsumeError> {
    let mut plan = ReservationPlan::default();
    let mut fulfilled = vec![false; manifest.len()];

    for index in 0..inventory.slot_count() {
        if plan.len() == manifest.len() {
            break;
        }
        let SlotView::Block { kind, count } = inventory.slot_at(index) else {
            continue;
        };
        let Some(pos) = manifest.position(kind) else {
            continue;
        };
        if fulfilled[pos] {
            continue;
        }

        let required = manifest.entries[pos].quantity;
        if count < required {
            return Err(ConsumeError::InsufficientItems {
                kind: kind.to_owned(),
                required,
                available: count,
            });
        }

        fulfilled[pos] = true;
        plan.entries.push(PlanEntry {
            slot: index,
            kind: kind.to_owned(),
            quantity: required,
        });
    }

    let missing = manifest
        .iter()
        .zip(&fulfilled)
        .find(|(_, done)| !**done)
        .map(|(req, _)| req);
    if let Some(req) = missing {
        return Err(ConsumeError::InsufficientItems {
            kind: req.kind.clone(),
            required: req.quantity,
            available: 0,
        });
    }

    Ok(plan)
}

/// 按计划顺序逐格扣除
pub fn commit<I: InventoryProvider + ?Sized>(
    plan: &ReservationPlan,
    inventory: &mut I,
    policy: CommitPolicy,
) -> Result<(), ConsumeError> {
    let checkpoint = match policy {
        CommitPolicy::AllOrNothing => Some(inventory.checkpoint(&plan.slots())),
        CommitPolicy::Partial => None,
    };

    for entry in &plan.entries {
        if let Err(source) = inventory.remove_from_slot(entry.slot, &entry.kind, entry.quantity) {
            if let Some(checkpoint) = checkpoint {
                inventory.rollback(checkpoint);
            }
            return Err(ConsumeError::RemovalFailed {
                slot: entry.slot,
                kind: entry.kind.clone(),
                quantity: entry.quantity,
                source,
            });
        }
    }

    Ok(())
}

/// 扫描 + 提交。空清单直接成功，不碰背包；没有背包则失败。
pub fn attempt_consume<I: InventoryProvider + ?Sized>(
    manifest: &RequirementManifest,
    inventory: Option<&mut I>,
    policy: CommitPolicy,
) -> Result<ReservationPlan, ConsumeError> {
    if manifest.is_empty() {
        return Ok(ReservationPlan::default());
    }
    let inventory = inventory.ok_or(ConsumeError::NoInventory)?;

    let plan = scan(manifest, &*inventory)?;
    commit(&plan, inventory, policy)?;
    Ok(plan)
}
