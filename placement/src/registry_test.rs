use super::*;

#[test]
fn builtin_covers_shipped_widgets() {
    let registry = ComponentRegistry::builtin();
    for kind in ["weather", "clock", "news", "web", "solar", "slideshow", "custom"] {
        assert!(registry.contains(kind), "missing {kind}");
    }
}

#[test]
fn builtin_footprints_fit_reference_grid() {
    let registry = ComponentRegistry::builtin();
    let grid = crate::grid::GridSpec::default();
    for kind in registry.component_types() {
        let spec = registry.get(kind).unwrap();
        assert!(grid.fits(spec.footprint), "{kind} does not fit");
    }
}

#[test]
fn default_is_builtin() {
    assert_eq!(ComponentRegistry::default(), ComponentRegistry::builtin());
}

#[test]
fn defaults_for_known_type() {
    let registry = ComponentRegistry::builtin();
    let spec = registry.defaults_for("clock");
    assert_eq!(spec.footprint, Footprint::new(4, 2));
    assert_eq!(spec.props["format24h"], json!(true));
}

#[test]
fn defaults_for_unknown_type_falls_back() {
    let registry = ComponentRegistry::empty();
    let spec = registry.defaults_for("hologram");
    assert_eq!(spec.footprint, Footprint::new(FALLBACK_FOOTPRINT_W, FALLBACK_FOOTPRINT_H));
    assert_eq!(spec.props, json!({}));
}

#[test]
fn register_replaces_existing_entry() {
    let mut registry = ComponentRegistry::builtin();
    registry.register("clock", ComponentSpec::new(2, 1, json!({})));
    assert_eq!(registry.get("clock").unwrap().footprint, Footprint::new(2, 1));
}

#[test]
fn from_json_parses_object_keyed_by_type() {
    let registry = ComponentRegistry::from_json(
        r#"{
            "ticker": {"footprint": {"w": 32, "h": 1}, "props": {"symbols": ["ACME"]}},
            "logo": {"footprint": {"w": 2, "h": 2}}
        }"#,
    )
    .unwrap();
    assert_eq!(registry.component_types(), vec!["logo", "ticker"]);
    assert_eq!(registry.get("logo").unwrap().props, json!({}));
    assert_eq!(registry.get("ticker").unwrap().footprint, Footprint::new(32, 1));
}

#[test]
fn from_json_rejects_missing_footprint() {
    assert!(ComponentRegistry::from_json(r#"{"logo": {"props": {}}}"#).is_err());
}
