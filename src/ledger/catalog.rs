//! The fixed category catalog that seeds every fresh ledger.
//!
//! Ids and display names are shared with the paired front end; per-category
//! totals stay comparable only while both sides use this exact list.

use crate::ledger::category::Category;

/// One `(id, display name)` pair of the default catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
}

/// Canonical catalog, in display order.
pub const DEFAULT_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "cash",
        name: "现金与转账",
    },
    CatalogEntry {
        id: "housing",
        name: "房产相关",
    },
    CatalogEntry {
        id: "car",
        name: "车辆相关",
    },
    CatalogEntry {
        id: "jewelry",
        name: "金银珠宝",
    },
    CatalogEntry {
        id: "wedding",
        name: "酒席与婚礼",
    },
    CatalogEntry {
        id: "gifts",
        name: "礼品与人情",
    },
    CatalogEntry {
        id: "setup",
        name: "生活配置",
    },
    CatalogEntry {
        id: "custom",
        name: "其他自定义",
    },
];

/// Builds the catalog's categories with empty item lists.
pub fn seed_categories() -> Vec<Category> {
    DEFAULT_CATALOG
        .iter()
        .map(|entry| Category::new(entry.id, entry.name))
        .collect()
}
