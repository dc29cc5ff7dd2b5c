use bevy::prelude::*;
use crate::data::schema::ItemEntry;
use crate::spawning::reservation::{InventoryProvider, RemovalError, SlotView};

/// 运行时物品实例
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStack {
    pub proto: ItemEntry,  // 直接复制静态表条目即可
    pub count: u32,
}

impl ItemStack {
    /// 方块物品放置后的方块族，预留算法以此作为物品种类
    pub fn block_kind(&self) -> Option<&str> {
        self.proto.block.as_deref()
    }
}

/// 背包（挂在持有者实体上），固定格数，None 为空格
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Inventory {
    pub slots: Vec<Option<ItemStack>>,
}

impl Inventory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// 先叠到同 id 的堆上，再找空位；返回放不下的数量
    pub fn give(&mut self, proto: &ItemEntry, mut count: u32) -> u32 {
        let max_stack = proto.max_stack.max(1);

        for stack in self.slots.iter_mut().flatten() {
            if count == 0 {
                break;
            }
            if stack.proto.id == proto.id && stack.count < max_stack {
                let moved = count.min(max_stack - stack.count);
                stack.count += moved;
                count -= moved;
            }
        }

        for slot in self.slots.iter_mut().filter(|s| s.is_none()) {
            if count == 0 {
                break;
            }
            let moved = count.min(max_stack);
            *slot = Some(ItemStack {
                proto: proto.clone(),
                count: moved,
            });
            count -= moved;
        }

        count
    }

    /// 某种方块在整个背包中的总数
    pub fn count_block(&self, kind: &str) -> u32 {
        self.slots
            .iter()
            .flatten()
            .filter(|s| s.block_kind() == Some(kind))
            .map(|s| s.count)
            .sum()
    }
}

impl InventoryProvider for Inventory {
    type Checkpoint = Vec<(usize, Option<ItemStack>)>;

    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn slot_at(&self, index: usize) -> SlotView<'_> {
        match self.slots.get(index) {
            Some(Some(stack)) => match stack.block_kind() {
                Some(kind) => SlotView::Block {
                    kind,
                    count: stack.count,
                },
                None => SlotView::NonBlock,
            },
            _ => SlotView::Empty,
        }
    }

    fn remove_from_slot(
        &mut self,
        index: usize,
        kind: &str,
        quantity: u32,
    ) -> Result<(), RemovalError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(RemovalError::NoSuchSlot(index))?;
        let stack = slot.as_mut().ok_or(RemovalError::EmptySlot(index))?;

        if stack.block_kind() != Some(kind) {
            return Err(RemovalError::KindMismatch {
                slot: index,
                expected: kind.to_owned(),
                found: stack.block_kind().unwrap_or("-").to_owned(),
            });
        }
        if stack.count < quantity {
            return Err(RemovalError::NotEnough {
                slot: index,
                requested: quantity,
                available: stack.count,
            });
        }

        stack.count -= quantity;
        if stack.count == 0 {
            // 清空槽位
            *slot = None;
        }
        Ok(())
    }

    fn checkpoint(&self, slots: &[usize]) -> Self::Checkpoint {
        slots
            .iter()
            .filter_map(|&i| self.slots.get(i).map(|s| (i, s.clone())))
            .collect()
    }

    fn rollback(&mut self, checkpoint: Self::Checkpoint) {
        for (index, saved) in checkpoint {
            if let Some(slot) = self.slots.get_mut(index) {
                *slot = saved;
            }
        }
    }
}
