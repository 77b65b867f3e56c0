use vis_resolver::core::{Interpolation, XyGeom, resolve_geom};

#[test]
fn only_step_survives_resolution() {
    assert_eq!(resolve_geom(XyGeom::Step), XyGeom::Step);
    assert_eq!(resolve_geom(XyGeom::Line), XyGeom::Line);
    assert_eq!(resolve_geom(XyGeom::Bar), XyGeom::Line);
    assert_eq!(resolve_geom(XyGeom::Stacked), XyGeom::Line);
}

#[test]
fn interpolation_follows_resolved_geometry() {
    assert_eq!(Interpolation::from_geom(XyGeom::Step), Interpolation::Step);
    assert_eq!(Interpolation::from_geom(XyGeom::Line), Interpolation::MonotoneX);
    assert_eq!(Interpolation::from_geom(XyGeom::Bar), Interpolation::MonotoneX);
}

#[test]
fn stored_geometry_names_deserialize() {
    let geoms: Vec<XyGeom> =
        serde_json::from_str(r#"["line", "step", "bar", "stacked"]"#).expect("geoms");
    assert_eq!(
        geoms,
        vec![XyGeom::Line, XyGeom::Step, XyGeom::Bar, XyGeom::Stacked]
    );
}
