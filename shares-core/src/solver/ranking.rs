use shares::Combination;
use std::cmp::Ordering;

/// Orders combinations from best to worst.
///
/// Higher profit first, then lower cost, then ids so the order is total.
pub fn rank(mut combinations: Vec<Combination>) -> Vec<Combination> {
    combinations.sort_by(compare);
    combinations
}

/// The `k` best combinations.
pub fn top(combinations: Vec<Combination>, k: usize) -> Vec<Combination> {
    let mut ranked = rank(combinations);
    ranked.truncate(k);
    ranked
}

fn compare(a: &Combination, b: &Combination) -> Ordering {
    b.total_profit()
        .cmp(&a.total_profit())
        .then_with(|| a.total_cost().cmp(&b.total_cost()))
        .then_with(|| a.member_ids().cmp(&b.member_ids()))
}
