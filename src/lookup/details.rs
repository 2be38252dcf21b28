use super::SPECIES_PER_PAGE;
use crate::page::{paginate, Page, Section};
use crate::text::{optional_number, optional_title, title_case};
use schema::{AbilityRecord, MoveRecord, NamedRef};

/// Follow-up pages listing the species attached to an ability or move.
fn species_pages(title: &str, species: &[NamedRef]) -> Vec<Page> {
    paginate(species, SPECIES_PER_PAGE)
        .map(|(_, chunk)| {
            let names = chunk.iter().map(|entry| title_case(&entry.name)).collect();
            Page::new(title).with_section(Section::list("Pokémon", names))
        })
        .collect()
}

/// The effect page followed by species pages of at most [`SPECIES_PER_PAGE`] names.
pub(super) fn ability_pages(record: &AbilityRecord) -> Vec<Page> {
    let display_name = title_case(&record.name);
    let main = Page::new(format!("Ability: {}", display_name))
        .with_section(Section::text("Effect", record.effect.clone()));

    let mut pages = vec![main];
    pages.extend(species_pages(
        &format!("Pokémon with '{}' ability", display_name),
        &record.pokemon_with_ability,
    ));
    pages
}

pub(super) fn move_pages(record: &MoveRecord) -> Vec<Page> {
    let display_name = title_case(&record.name);
    let main = Page::new(format!("Move: {}", display_name))
        .with_section(Section::text("Type", optional_title(record.move_type.as_deref())).inline())
        .with_section(Section::text("Damage Class", optional_title(record.damage_class.as_deref())).inline())
        .with_section(Section::text("Power", optional_number(record.power)).inline())
        .with_section(Section::text("PP", optional_number(record.pp)).inline())
        .with_section(Section::text("Accuracy", optional_number(record.accuracy)).inline())
        .with_section(Section::text("Effect", record.effect.clone()));

    let mut pages = vec![main];
    pages.extend(species_pages(
        &format!("Pokémon that can learn '{}'", display_name),
        &record.learned_by_pokemon,
    ));
    pages
}
