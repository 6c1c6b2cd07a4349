use tilecss::registry::{self, Capabilities, Category, DESCRIPTORS};
use tilecss::{PatternSettings, SettingField};

#[test]
fn test_catalog_size_and_categories() {
    assert_eq!(registry::all().len(), 30);

    let counts: Vec<_> = Category::ALL
        .into_iter()
        .map(|category| (category.label(), registry::list_by_category(category).len()))
        .collect();
    assert_eq!(
        counts,
        [("Basic", 6), ("Lines & Waves", 7), ("Geometric", 9), ("3D", 4), ("Textures", 4)]
    );
}

#[test]
fn test_list_by_category_preserves_declaration_order() {
    let ids: Vec<_> = registry::list_by_category(Category::Dimensional)
        .into_iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(ids, ["isometric", "cubes", "steps", "pyramids"]);
}

#[test]
fn test_unknown_ids_are_absent() {
    for id in ["", "Dots", "dots ", "hexagons", "graph_paper"] {
        assert!(registry::find(id).is_none(), "{id:?}");
    }
}

#[test]
fn test_every_descriptor_has_sane_defaults() {
    for descriptor in DESCRIPTORS {
        assert!(!descriptor.name.is_empty());
        assert!(!descriptor.description.is_empty());

        let settings = PatternSettings::defaults_for(descriptor);
        assert_eq!(settings.pattern_type, descriptor.id);
        assert!(tilecss::clamp::is_consistent(&settings), "{}", descriptor.id);
    }
}

#[test]
fn test_sunburst_is_the_only_sizeless_pattern() {
    let sizeless: Vec<_> = DESCRIPTORS
        .iter()
        .filter(|d| !d.capabilities.contains(Capabilities::SIZE))
        .map(|d| d.id)
        .collect();
    assert_eq!(sizeless, ["sunburst"]);
    assert!(!registry::find("sunburst").unwrap().supports(SettingField::PatternSize));
}

#[test]
fn test_switching_pattern_keeps_colors() {
    let previous = PatternSettings {
        pattern_type: "dots".into(),
        pattern_color: "#111111".into(),
        background_color: "#eeeeee".into(),
        secondary_color: "#ff00ff".into(),
        dot_size: 30,
        ..PatternSettings::default()
    };
    let stripes = registry::find("stripes").unwrap();
    let next = PatternSettings::for_pattern(stripes, &previous);

    assert_eq!(next.pattern_type, "stripes");
    assert_eq!(next.pattern_color, "#111111");
    assert_eq!(next.background_color, "#eeeeee");
    assert_eq!(next.secondary_color, "#ff00ff");
    assert_eq!(next.pattern_size, 24);
    assert_eq!(next.line_width, 8);
    // Tuning fields come from the defaults, not from the previous pattern.
    assert_eq!(next.dot_size, PatternSettings::default().dot_size);
}
