use super::CHAINS_PER_EGG_MOVE;
use crate::page::{Page, Section};
use schema::{BreedingChain, Table};

/// One page per egg move, each holding at most [`CHAINS_PER_EGG_MOVE`] chains.
///
/// Chains past the limit are dropped rather than continued on another page.
pub(super) fn egg_move_pages(moves: &Table<Vec<BreedingChain>>) -> Vec<Page> {
    moves
        .iter()
        .map(|(move_name, chains)| {
            let rendered = chains
                .iter()
                .take(CHAINS_PER_EGG_MOVE)
                .map(|chain| chain.join(" -> "))
                .collect();
            Page::new(format!("{} (Limit {})", move_name, CHAINS_PER_EGG_MOVE))
                .with_section(Section::lines("Breeding Chains", rendered))
        })
        .collect()
}
