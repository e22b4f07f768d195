use girder_base::Tolerance;
use girder_geometry::{CrossSection, Dimensions};
use girder_topology::{Point3, Result, SolidBuilder, place_between, section_solid, solid_points};

#[test]
fn i_beam_solid_has_fourteen_faces() -> Result<()> {
    let section = CrossSection::from_dimensions(&Dimensions::i_beam(0.2, 0.4, 3.0, 0.02, 0.01))?;
    let solid = section_solid(&section, 3.0)?;
    assert_eq!(solid.face_iter().count(), 14);
    Ok(())
}

#[test]
fn extrusion_ignores_outline_winding() -> Result<()> {
    let section = CrossSection::from_dimensions(&Dimensions::i_beam(0.2, 0.4, 1.0, 0.02, 0.01))?;
    let profile = section.profile().expect("i-beam has an outline");
    assert!(profile.is_clockwise());
    let solid = SolidBuilder::extrude_profile(&profile, 1.0)?;
    assert_eq!(solid.face_iter().count(), 14);
    Ok(())
}

#[test]
fn placed_beam_starts_at_start_point() -> Result<()> {
    let section = CrossSection::from_dimensions(&Dimensions::i_beam(0.2, 0.4, 3.0, 0.02, 0.01))?;
    let solid = section_solid(&section, 3.0)?;
    let start = Point3::new(1.0, 0.0, 0.0);
    let end = Point3::new(4.0, 0.0, 0.0);
    let placed = place_between(&solid, start, end, &Tolerance::default())?;

    let xs: Vec<f64> = solid_points(&placed).iter().map(|p| p.x).collect();
    let min_x = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let max_x = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert!((min_x - 1.0).abs() < 1.0e-9);
    assert!((max_x - 4.0).abs() < 1.0e-9);
    Ok(())
}

#[test]
fn coincident_points_are_rejected() -> Result<()> {
    let solid = SolidBuilder::box_solid(1.0, 1.0, 1.0)?;
    let point = Point3::new(2.0, 2.0, 2.0);
    assert!(place_between(&solid, point, point, &Tolerance::default()).is_err());
    Ok(())
}
