// Host-side tests for presets, attribute overrides and validation.

use field_core::{Anchor, FieldConfig, FieldError, PointerResponse};

#[test]
fn presets_resolve_by_name() {
    assert_eq!(FieldConfig::preset("hero"), Ok(FieldConfig::HERO));
    assert_eq!(FieldConfig::preset("background"), Ok(FieldConfig::BACKGROUND));
    assert_eq!(FieldConfig::preset("scatter"), Ok(FieldConfig::SCATTER));
    assert_eq!(
        FieldConfig::preset("starfield"),
        Err(FieldError::UnknownPreset("starfield".to_string()))
    );
    assert_eq!(FieldConfig::default(), FieldConfig::HERO);
}

#[test]
fn presets_are_valid_and_distinct() {
    assert!(FieldConfig::HERO.validate().is_ok());
    assert!(FieldConfig::BACKGROUND.validate().is_ok());
    assert!(FieldConfig::SCATTER.validate().is_ok());
    assert_eq!(FieldConfig::HERO.anchor, Anchor::Element);
    assert_eq!(FieldConfig::BACKGROUND.anchor, Anchor::Document);
    assert!(FieldConfig::BACKGROUND.attraction_radius > FieldConfig::HERO.attraction_radius);
    assert!(FieldConfig::BACKGROUND.area_per_particle > FieldConfig::HERO.area_per_particle);
}

#[test]
fn overrides_apply_on_top_of_preset() {
    let config = FieldConfig::HERO
        .with_overrides([
            ("max-particles", "40"),
            ("link-distance", " 90.5 "),
            ("force-scale", "0"),
            ("anchor", "document"),
        ])
        .expect("valid overrides");
    assert_eq!(config.max_particles, 40);
    assert_eq!(config.link_distance, 90.5);
    assert_eq!(config.force_scale, 0.0);
    assert_eq!(config.anchor, Anchor::Document);
    // Untouched keys keep the preset's values
    assert_eq!(config.attraction_radius, FieldConfig::HERO.attraction_radius);
}

#[test]
fn override_errors_name_the_problem() {
    assert_eq!(
        FieldConfig::HERO.with_overrides([("sparkle", "1")]),
        Err(FieldError::UnknownSetting("sparkle".to_string()))
    );
    assert_eq!(
        FieldConfig::HERO.with_overrides([("max-particles", "lots")]),
        Err(FieldError::InvalidValue {
            key: "max-particles".to_string(),
            value: "lots".to_string(),
        })
    );
    assert!(matches!(
        FieldConfig::HERO.with_overrides([("anchor", "viewport")]),
        Err(FieldError::InvalidValue { .. })
    ));
}

#[test]
fn validation_rejects_unusable_values() {
    let zero_area = FieldConfig::HERO.with_overrides([("area-per-particle", "0")]);
    assert!(matches!(
        zero_area,
        Err(FieldError::OutOfRange {
            key: "area-per-particle",
            ..
        })
    ));

    let negative_force = FieldConfig::HERO.with_overrides([("force-scale", "-0.1")]);
    assert!(matches!(
        negative_force,
        Err(FieldError::OutOfRange {
            key: "force-scale",
            ..
        })
    ));

    // A surface big enough for a million particles still stops at the ceiling
    let flood = FieldConfig::HERO.with_overrides([
        ("max-particles", "1000000"),
        ("area-per-particle", "0.001"),
    ]);
    assert!(matches!(
        flood,
        Err(FieldError::OutOfRange {
            key: "max-particles",
            ..
        })
    ));
    let at_ceiling = FieldConfig::HERO
        .with_overrides([("max-particles", "400"), ("area-per-particle", "0.001")])
        .expect("ceiling itself is allowed");
    assert_eq!(at_ceiling.particle_count(1920.0, 1080.0), 400);

    let bad_reach = FieldConfig {
        link_distance: f32::NAN,
        ..FieldConfig::HERO
    };
    assert!(bad_reach.validate().is_err());
}

#[test]
fn errors_render_readable_messages() {
    let err = FieldConfig::preset("nope").unwrap_err();
    assert_eq!(err.to_string(), "unknown field preset `nope`");
    let err = FieldConfig::HERO
        .with_overrides([("link-glow", "-1")])
        .unwrap_err();
    assert_eq!(err.to_string(), "`link-glow` must be a non-negative number");
    let err = FieldConfig::HERO
        .with_overrides([("max-particles", "401")])
        .unwrap_err();
    assert_eq!(err.to_string(), "`max-particles` must be at most 400");
}

#[test]
fn pointer_response_sets_force_sign() {
    assert_eq!(FieldConfig::HERO.pointer_response, PointerResponse::Attract);
    assert_eq!(FieldConfig::SCATTER.pointer_response, PointerResponse::Repel);
    assert_eq!(FieldConfig::HERO.pointer_force(), FieldConfig::HERO.force_scale);
    assert_eq!(
        FieldConfig::SCATTER.pointer_force(),
        -FieldConfig::SCATTER.force_scale
    );

    let flipped = FieldConfig::BACKGROUND
        .with_overrides([("pointer-response", "repel")])
        .expect("valid override");
    assert!(flipped.pointer_force() < 0.0);
    assert!(matches!(
        FieldConfig::HERO.with_overrides([("pointer-response", "orbit")]),
        Err(FieldError::InvalidValue { .. })
    ));
}
