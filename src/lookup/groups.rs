use crate::page::{Page, Section};
use crate::text::{species_display_name, title_case};
use schema::{Category, EggGroupRecord, EggGroupTable, NamedRef, TypeRecord};

fn names(refs: &[NamedRef]) -> Vec<String> {
    refs.iter().map(|entry| entry.name.clone()).collect()
}

fn display_names(refs: &[NamedRef]) -> Vec<String> {
    refs.iter()
        .map(|entry| species_display_name(&entry.name))
        .collect()
}

pub(super) fn listing_page(category: Category, keys: Vec<String>) -> Page {
    let section_name = category
        .listing_title()
        .strip_prefix("All ")
        .unwrap_or("Entries");
    Page::new(category.listing_title()).with_section(Section::list(section_name, keys))
}

pub(super) fn type_page(key: &str, record: &TypeRecord) -> Page {
    Page::new(format!("Pokémon Type: {}", title_case(key)))
        .with_section(Section::list("Pokémon of this Type", names(&record.pokemon)))
        .with_section(Section::list("Moves of this Type", names(&record.moves)))
}

pub(super) fn tier_page(key: &str, members: &[NamedRef]) -> Page {
    Page::new(format!("PvP Tier: {}", key))
        .with_section(Section::list("Pokémon in this Tier", display_names(members)))
}

/// Egg groups are matched on their `name` field rather than the document key.
pub(super) fn find_egg_group<'a>(table: &'a EggGroupTable, name: &str) -> Option<&'a EggGroupRecord> {
    table
        .values()
        .find(|group| group.name.eq_ignore_ascii_case(name))
}

pub(super) fn egg_group_names(table: &EggGroupTable) -> Vec<String> {
    table.values().map(|group| title_case(&group.name)).collect()
}

pub(super) fn egg_group_page(record: &EggGroupRecord) -> Page {
    Page::new(format!("Egg Group: {}", title_case(&record.name)))
        .with_section(Section::list("Pokémon Species", display_names(&record.pokemon_species)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::fixture_engine;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_type_page_lists_members_and_moves() {
        let engine = fixture_engine();
        let pages = engine.lookup(Category::Type, "fire").unwrap();
        let page = &pages[0];
        assert_eq!(page.title, "Pokémon Type: Fire");
        assert_eq!(
            page.section("Pokémon of this Type").unwrap().items,
            vec!["charmander", "vulpix"]
        );
        assert_eq!(
            page.section("Moves of this Type").unwrap().value(),
            "ember, flamethrower"
        );
    }

    #[test]
    fn test_tier_members_are_display_names() {
        let engine = fixture_engine();
        let pages = engine.lookup(Category::Tier, "ou").unwrap();
        assert_eq!(
            pages[0].section("Pokémon in this Tier").unwrap().items,
            vec!["Mr Mime", "Snorlax"]
        );
    }

    #[test]
    fn test_egg_group_page() {
        let engine = fixture_engine();
        let pages = engine.lookup(Category::EggGroup, "Water1").unwrap();
        assert_eq!(pages[0].title, "Egg Group: Water1");
        assert_eq!(
            pages[0].section("Pokémon Species").unwrap().items,
            vec!["Squirtle", "Tapu Fini"]
        );
    }

    #[test]
    fn test_listing_page_shape() {
        let page = listing_page(Category::Tier, vec!["OU".into(), "UU".into()]);
        assert_eq!(page.title, "All Tiers");
        assert_eq!(page.sections[0].name, "Tiers");
        assert_eq!(page.sections[0].value(), "OU, UU");
    }
}
