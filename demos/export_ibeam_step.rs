use anyhow::Result;
use girder_geometry::{CrossSection, Dimensions};
use girder_io::export_step;
use girder_topology::section_solid;

fn main() -> Result<()> {
    let dims = Dimensions::i_beam(200.0, 400.0, 3000.0, 20.0, 10.0);
    let section = CrossSection::from_dimensions(&dims)?;
    let solid = section_solid(&section, dims.length)?;
    export_step(&solid, "IBeam 200x400", "out/ibeam.step")?;
    Ok(())
}
