// src/components/dragging_info.rs

use serde::{Deserialize, Serialize};

use crate::components::stack::StackType;
use crate::ecs::entity::Entity;

/// ドラッグ中のカード群の情報だよ！🖱️➡️🃏
///
/// 持ち上げた瞬間 (`begin_drag`) に作られて、置いた時 (`commit_drag`) か
/// キャンセルした時 (`cancel_drag`) に必ず消える。
/// カード自体はドラッグ中も元の山に入ったまま。ここにあるのは「どれを動かそうとしてるか」のメモだけ。
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DraggingInfo {
    /// 持ち上げ元の山。
    pub original_stack_type: StackType,
    /// 持ち上げたカード (下から上の順)。先頭が掴んだカード。
    pub dragged_group: Vec<Entity>,
}

impl DraggingInfo {
    pub fn new(original_stack_type: StackType, dragged_group: Vec<Entity>) -> Self {
        Self { original_stack_type, dragged_group }
    }

    /// 掴んだカード (グループの一番下)。
    pub fn representative(&self) -> Option<Entity> {
        self.dragged_group.first().copied()
    }

    pub fn len(&self) -> usize {
        self.dragged_group.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dragged_group.is_empty()
    }
}
