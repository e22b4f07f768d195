use anyhow::Result;
use girder_base::Units;
use girder_elements::{Load, MaterialKind, build_beam_element};
use girder_geometry::{Dimensions, Point3, Vector3};
use girder_scene::{ObjRenderer, SceneManager, SummaryRenderer};

fn main() -> Result<()> {
    let mut scene = SceneManager::new(1280, 720).with_units(Units::metric_m());

    let dims = Dimensions::i_beam(0.2, 0.4, 3.0, 0.02, 0.01);
    let beam = build_beam_element(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(3.0, 0.0, 0.0),
        &dims,
        MaterialKind::Steel,
        Some("cantilever"),
    )?;
    scene.add_element(beam);

    scene.add_load(Load::point(
        Point3::new(3.0, 0.6, 0.0),
        -Vector3::unit_y(),
        0.5,
    )?)?;
    scene.add_load(Load::moment(
        Point3::new(0.0, 0.0, 0.0),
        Vector3::unit_z(),
        0.4,
    )?)?;

    scene.frame_all();
    scene.render(&mut ObjRenderer::new("out/cantilever.obj"))?;
    scene.render(&mut SummaryRenderer::new("out/cantilever.json"))?;
    Ok(())
}
