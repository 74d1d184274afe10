// src/shared/content/ordering.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One `(id, sort_order)` pair of a reorder batch. Pairs are applied as
/// independent row updates; the batch is not atomic. Reads that honor manual
/// ordering sort by `sort_order ASC, id ASC`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderItem {
    pub id: Uuid,
    pub sort_order: i32,
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub items: Vec<ReorderItem>,
}
