//! Display-name helpers shared by every formatter.

/// Capitalizes the first letter of every word, lowercasing the rest.
///
/// A "word" starts after any character that is not a letter, so `"mr-mime"` becomes
/// `"Mr-Mime"` and `"farfetch'd"` becomes `"Farfetch'D"`, the same result the dataset
/// tooling produces.
pub fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut previous_is_letter = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                output.extend(ch.to_lowercase());
            } else {
                output.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            output.push(ch);
            previous_is_letter = false;
        }
    }
    output
}

/// Title-cases a dataset species slug and turns hyphens into spaces ("mr-mime" -> "Mr Mime").
pub fn species_display_name(slug: &str) -> String {
    title_case(slug).replace('-', " ")
}

/// Title-cases each entry and joins them with `", "`.
pub fn title_case_list<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    items
        .into_iter()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Placeholder shown for a field the dataset leaves out.
pub const MISSING: &str = "None";

pub fn optional_number(value: Option<u16>) -> String {
    value.map_or_else(|| MISSING.to_string(), |number| number.to_string())
}

pub fn optional_title(value: Option<&str>) -> String {
    value.map_or_else(|| MISSING.to_string(), title_case)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("pikachu", "Pikachu")]
    #[case("mr-mime", "Mr-Mime")]
    #[case("HO-OH", "Ho-Oh")]
    #[case("farfetch'd", "Farfetch'D")]
    #[case("porygon2", "Porygon2")]
    #[case("thunder punch", "Thunder Punch")]
    #[case("", "")]
    fn test_title_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(title_case(input), expected);
    }

    #[test]
    fn test_species_display_name_replaces_hyphens() {
        assert_eq!(species_display_name("mr-mime"), "Mr Mime");
        assert_eq!(species_display_name("tapu-koko"), "Tapu Koko");
    }

    #[test]
    fn test_title_case_list() {
        assert_eq!(title_case_list(["grass", "poison"]), "Grass, Poison");
    }

    #[test]
    fn test_missing_fields_render_none() {
        assert_eq!(optional_number(None), "None");
        assert_eq!(optional_number(Some(45)), "45");
        assert_eq!(optional_title(None), "None");
        assert_eq!(optional_title(Some("special")), "Special");
    }
}
