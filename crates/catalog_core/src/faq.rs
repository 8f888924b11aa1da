use shared::protocol::{FaqEntry, FaqGroup};

/// Group FAQ entries by category. Groups follow first appearance; entries keep feed order.
pub fn group_faqs(entries: Vec<FaqEntry>) -> Vec<FaqGroup> {
    let mut groups: Vec<FaqGroup> = Vec::new();
    for entry in entries {
        match groups.iter_mut().find(|g| g.category == entry.category) {
            Some(group) => group.entries.push(entry),
            None => groups.push(FaqGroup {
                category: entry.category.clone(),
                entries: vec![entry],
            }),
        }
    }
    groups
}
