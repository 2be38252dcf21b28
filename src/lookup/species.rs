use super::{LEARNABLE_MOVES_PER_PAGE, LOCATIONS_PER_PAGE};
use crate::page::{paginate, Page, Section};
use crate::text::{optional_number, title_case, title_case_list};
use schema::{Acquisition, EvolutionNode, LearnableMove, LocationEncounter, SpeciesRecord};

/// Nodes deeper than this are not rendered. Real evolution trees are at most three deep.
pub const MAX_EVOLUTION_DEPTH: usize = 16;

const ARROW: &str = " -> ";

/// Renders an evolution tree as an arrow-joined string.
///
/// A node with no evolutions is just its name. A node with evolutions is its name
/// followed by the rendering of each child in dataset order, so a branching tree
/// flattens into one sequence after the root: `Eevee -> Vaporeon -> Jolteon -> Flareon`.
pub fn evolution_chain(root: &EvolutionNode) -> String {
    render_evolution(root, 0)
}

fn render_evolution(node: &EvolutionNode, depth: usize) -> String {
    let name = title_case(&node.species.name);
    if node.evolves_to.is_empty() || depth >= MAX_EVOLUTION_DEPTH {
        return name;
    }

    let mut parts = Vec::with_capacity(node.evolves_to.len() + 1);
    parts.push(name);
    for child in &node.evolves_to {
        parts.push(render_evolution(child, depth + 1));
    }
    parts.join(ARROW)
}

pub(super) fn species_page(record: &SpeciesRecord) -> Page {
    let display_name = title_case(&record.name);

    let abilities = record
        .abilities
        .iter()
        .map(|slot| {
            let name = title_case(&slot.ability_name);
            if slot.is_hidden {
                format!("{} (Hidden)", name)
            } else {
                name
            }
        })
        .collect();

    let stats = record
        .stats
        .iter()
        .map(|stat| format!("**{}**: {}", title_case(&stat.stat_name), stat.base_stat))
        .collect();

    let mut page = Page::new(display_name.clone())
        .with_thumbnail(record.sprite_url())
        .with_section(Section::text(
            "Types",
            title_case_list(record.types.iter().map(String::as_str)),
        ))
        .with_section(Section::list("Abilities", abilities))
        .with_section(Section::lines("Base Stats", stats))
        .with_section(Section::text("Capture Rate", optional_number(record.capture_rate)))
        .with_section(Section::text(
            "Egg Groups",
            title_case_list(record.egg_groups.iter().map(String::as_str)),
        ));

    if let Some(root) = record.evolution_root() {
        let chain = evolution_chain(root);
        // A chain that is just this species says nothing.
        if !chain.is_empty() && chain != display_name {
            page = page.with_section(Section::text("Evolution Chain", chain));
        }
    }

    page
}

fn format_encounter(encounter: &LocationEncounter) -> String {
    format!(
        "{} (Lvl {}-{}, {}%)",
        encounter.location, encounter.min_level, encounter.max_level, encounter.rarity
    )
}

pub(super) fn location_pages(record: &SpeciesRecord) -> Vec<Page> {
    let display_name = title_case(&record.name);
    paginate(&record.location_area_encounters, LOCATIONS_PER_PAGE)
        .map(|(part, chunk)| {
            Page::new(format!("Locations for {} (Part {})", display_name, part)).with_section(
                Section::lines("Locations", chunk.iter().map(format_encounter).collect()),
            )
        })
        .collect()
}

fn format_learnable_move(learnable: &LearnableMove) -> String {
    let name = title_case(&learnable.name);
    match learnable.acquisition() {
        Acquisition::Level(level) => format!("{} (Lvl {})", name, level),
        Acquisition::Method(method) => format!("{} ({})", name, title_case(method)),
    }
}

pub(super) fn learnable_move_pages(record: &SpeciesRecord) -> Vec<Page> {
    let title = format!("Learnable Moves for {}", title_case(&record.name));
    paginate(&record.moves, LEARNABLE_MOVES_PER_PAGE)
        .map(|(_, chunk)| {
            Page::new(title.clone()).with_section(Section::lines(
                "Moves",
                chunk.iter().map(format_learnable_move).collect(),
            ))
        })
        .collect()
}
