//! Ordered severity tiers and their commentary pools.
//!
//! First matching tier wins. The ranges overlap on purpose and the band
//! between the medium and heavy thresholds falls through to [`FALLBACK`];
//! keep the list ordered instead of partitioning the ranges, or the overlap
//! band changes meaning.

use super::{GapMetrics, Severity};

/// One tier: match predicate, fixed title, and its message pool.
///
/// Pools belong to tiers, not severities; the two medium tiers carry
/// distinct titles and pools.
pub(super) struct Rule {
    pub severity: Severity,
    pub title: &'static str,
    pub matches: fn(&GapMetrics) -> bool,
    pub messages: &'static [&'static str],
}

/// Ordered tiers, most balanced first.
pub(super) const RULES: &[Rule] = &[
    Rule {
        severity: Severity::Ok,
        title: "很均衡 🤝",
        matches: |gap| gap.ratio < 0.05,
        messages: &[
            "你们这波属于“势均力敌”，谈判桌都得起立鼓掌。",
            "差距不大：主打一个‘合伙人模式’，继续甜甜蜜蜜。",
            "这配置很健康：别卷了，去吃顿好的。",
        ],
    },
    Rule {
        severity: Severity::Mild,
        title: "有点落差，但可聊 🧾",
        matches: |gap| gap.ratio < 0.15 && gap.abs_diff < 50_000.0,
        messages: &[
            "现在是“可以坐下来谈”的级别：重点看你们对 {higher} 的压力能不能接受。",
            "小幅差距：建议把‘哪些算投入、哪些是回流’讲清楚。",
            "差距不算离谱：把口径统一一下，别被亲戚带节奏。",
        ],
    },
    Rule {
        severity: Severity::Medium,
        title: "差额明显：建议先别上头 🧊",
        matches: |gap| gap.ratio < 0.35 && gap.abs_diff < 100_000.0,
        messages: &[
            "差距已经到“别急着下单”的程度：{lower} 可能会觉得自己在当‘项目甲方’。",
            "友情提示：这不是爱情综艺，不用硬凑 KPI。",
            "现在属于“信息不对称警报”：先对齐预期，再谈情绪价值。",
            "建议开启‘冷静期’：先算账，后谈爱。",
        ],
    },
    Rule {
        severity: Severity::Heavy,
        title: "差额过大：建议暂停、冷静、复盘 🛑",
        matches: |gap| gap.ratio >= 0.60 || gap.abs_diff >= 200_000.0,
        messages: &[
            "这差距有点像“你谈恋爱，对方在融资”：{lower} 压力会很大。",
            "你们现在更像在做并购尽调：建议先把条款谈清楚再谈感情。",
            "警告：可能出现‘一边掏空钱包，一边掏空耐心’。",
            "如果两边都觉得委屈：不一定是不爱，可能是不合适（至少不适合现在的方案）。",
        ],
    },
];

/// Catch-all tier for gaps between the medium and heavy thresholds.
pub(super) const FALLBACK: Rule = Rule {
    severity: Severity::Medium,
    title: "差距偏大：建议对齐预期 🧠",
    matches: |_| true,
    messages: &[
        "差额偏大：建议把‘必须项/可选项/面子项’拆开重算一次。",
        "建议先统一家庭口径：别让你们两个人替四个家庭背锅。",
    ],
};
