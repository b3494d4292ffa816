use vastu_flow::bot::ui_builder::{case_view_text, format_tariff_list};
use vastu_flow::catalog::{find_case, find_tariff, CASES, TARIFFS};

/// The catalog is fixed: three tariffs, two case studies.
#[test]
fn test_catalog_contents() {
    assert_eq!(TARIFFS.len(), 3);
    assert_eq!(CASES.len(), 2);

    let keys: Vec<&str> = TARIFFS.iter().map(|t| t.key).collect();
    assert_eq!(keys, vec!["express", "apartment", "land"]);

    let case_keys: Vec<&str> = CASES.iter().map(|c| c.key).collect();
    assert_eq!(case_keys, vec!["workspace", "newyear"]);
}

/// A key that is not in the catalog must resolve to None, never fault.
#[test]
fn test_missing_keys_are_defensive() {
    assert!(find_case("missing").is_none());
    assert!(find_case("workspace_extra").is_none());
    assert!(find_tariff("gold").is_none());
}

/// Catalog renders are pure: repeated calls yield byte-identical output.
#[test]
fn test_renders_are_byte_identical() {
    assert_eq!(format_tariff_list(None), format_tariff_list(None));

    let case = find_case("workspace").unwrap();
    assert_eq!(case_view_text(case), case_view_text(case));
}

#[test]
fn test_tariff_render_lists_every_entry() {
    let rendered = format_tariff_list(None);
    for tariff in &TARIFFS {
        assert!(rendered.contains(tariff.name));
        assert!(rendered.contains(tariff.price));
        assert!(rendered.contains(tariff.description));
    }
}

#[test]
fn test_case_view_includes_title_and_body() {
    let case = find_case("newyear").unwrap();
    let rendered = case_view_text(case);
    assert!(rendered.starts_with(case.title));
    assert!(rendered.contains(case.body));
}
