//! Split-point scoring. The weights are fixed, empirically tuned constants.

use super::candidates::{KeepRule, SplitCandidate};

pub const COMPLETE_SECTION_BONUS: i32 = 100;
pub const LIST_BLOCK_BONUS: i32 = 50;
pub const ORPHAN_TITLE_PENALTY: i32 = -1000;
pub const KEEP_TOGETHER_PENALTY: i32 = -500;
pub const LONELY_TITLE_PENALTY: i32 = -200;
pub const CONTINUATION_PENALTY: i32 = KEEP_TOGETHER_PENALTY / 2;

/// Members of `candidates[index]`'s keep-together group that follow it.
pub fn remaining_group_members(candidates: &[SplitCandidate], index: usize) -> usize {
    let current = &candidates[index];
    candidates[index + 1..]
        .iter()
        .take_while(|c| {
            c.keep_rule == KeepRule::KeepTogether && c.group_prefix() == current.group_prefix()
        })
        .count()
}

/// Score for ending a page right after `candidates[index]`.
pub fn score_split(
    candidates: &[SplitCandidate],
    index: usize,
    keep_together_threshold: usize,
) -> i32 {
    let current = &candidates[index];
    let next = candidates.get(index + 1);
    let mut score = 0;

    if current.is_section {
        score += COMPLETE_SECTION_BONUS;
    }
    if current.is_task_list() {
        score += LIST_BLOCK_BONUS;
    }
    if current.keep_rule == KeepRule::KeepWithNext && next.is_some() {
        score += ORPHAN_TITLE_PENALTY;
    }
    if current.keep_rule == KeepRule::KeepTogether {
        let remaining = remaining_group_members(candidates, index);
        if remaining > 0 && remaining < keep_together_threshold {
            score += KEEP_TOGETHER_PENALTY;
        }
    }
    if current.is_section_title {
        score += LONELY_TITLE_PENALTY;
    }
    if next.is_some_and(|n| n.group_prefix() == current.group_prefix()) {
        score += CONTINUATION_PENALTY;
    }
    score
}

/// Highest-scoring split index in `first..=last`. Ties go to the later index
/// so pages are filled as far as possible.
pub fn best_split(
    candidates: &[SplitCandidate],
    first: usize,
    last: usize,
    keep_together_threshold: usize,
) -> usize {
    let mut best = first;
    let mut best_score = i32::MIN;
    for index in first..=last {
        let score = score_split(candidates, index, keep_together_threshold);
        log::trace!("split score [{}] {} = {}", index, candidates[index].node.identifier(), score);
        if score >= best_score {
            best_score = score;
            best = index;
        }
    }
    best
}
