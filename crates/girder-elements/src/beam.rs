use girder_base::{Guid, Tolerance};
use girder_geometry::{CrossSection, Dimensions};
use girder_topology::{Point3, Solid, place_between, section_solid};
use tracing::debug;

use crate::{
    ElementCategory, Error, MaterialKind, ParameterSet, ParameterValue, Result, StructuralElement,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamData {
    pub start: Point3,
    pub end: Point3,
    pub section: CrossSection,
    pub length: f64,
}

impl BeamData {
    pub fn dimensions(&self) -> Dimensions {
        self.section.to_dimensions(self.length)
    }
}

pub fn build_beam_element(
    start: Point3,
    end: Point3,
    dims: &Dimensions,
    material: MaterialKind,
    name: Option<&str>,
) -> Result<StructuralElement> {
    let section = CrossSection::from_dimensions(dims)?;
    let data = BeamData {
        start,
        end,
        section,
        length: dims.length,
    };
    let solid = build_beam_solid(&data)?;

    let mut parameters = ParameterSet::new();
    write_beam_parameters(&mut parameters, &data);

    let element_name = match name {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => match section {
            CrossSection::IBeam(_) => "IBeam".to_string(),
            CrossSection::Rectangular(_) => "Beam".to_string(),
        },
    };
    debug!(name = %element_name, ?section, length = dims.length, "built beam");

    Ok(StructuralElement::new(
        Guid::new(),
        element_name,
        ElementCategory::Beam,
        material,
        parameters,
        solid,
    ))
}

pub fn apply_beam_edit(
    element: &mut StructuralElement,
    start: Point3,
    end: Point3,
) -> Result<BeamData> {
    let mut data = beam_data(element)?;
    data.start = start;
    data.end = end;
    element.geometry = build_beam_solid(&data)?;
    write_beam_parameters(&mut element.parameters, &data);
    Ok(data)
}

pub fn beam_data(element: &StructuralElement) -> Result<BeamData> {
    if element.category != ElementCategory::Beam {
        return Err(Error::WrongCategory {
            expected: ElementCategory::Beam,
            found: element.category,
        });
    }
    let dims = Dimensions {
        width: read_number(element, "Width")?,
        height: read_number(element, "Height")?,
        length: read_number(element, "Length")?,
        flange_thickness: element.number("FlangeThickness"),
        web_thickness: element.number("WebThickness"),
    };
    let section = CrossSection::from_dimensions(&dims)?;
    let start = Point3::new(
        read_number(element, "StartX")?,
        read_number(element, "StartY")?,
        read_number(element, "StartZ")?,
    );
    let end = Point3::new(
        read_number(element, "EndX")?,
        read_number(element, "EndY")?,
        read_number(element, "EndZ")?,
    );
    Ok(BeamData {
        start,
        end,
        section,
        length: dims.length,
    })
}

fn build_beam_solid(data: &BeamData) -> Result<Solid> {
    let solid = section_solid(&data.section, data.length)?;
    Ok(place_between(&solid, data.start, data.end, &Tolerance::default())?)
}

fn write_beam_parameters(parameters: &mut ParameterSet, data: &BeamData) {
    let dims = data.dimensions();
    parameters.remove("FlangeThickness");
    parameters.remove("WebThickness");

    parameters.insert("Width".to_string(), ParameterValue::Number(dims.width));
    parameters.insert("Height".to_string(), ParameterValue::Number(dims.height));
    parameters.insert("Length".to_string(), ParameterValue::Number(dims.length));
    if let (Some(flange), Some(web)) = (dims.flange_thickness, dims.web_thickness) {
        parameters.insert("FlangeThickness".to_string(), ParameterValue::Number(flange));
        parameters.insert("WebThickness".to_string(), ParameterValue::Number(web));
    }
    parameters.insert("StartX".to_string(), ParameterValue::Number(data.start.x));
    parameters.insert("StartY".to_string(), ParameterValue::Number(data.start.y));
    parameters.insert("StartZ".to_string(), ParameterValue::Number(data.start.z));
    parameters.insert("EndX".to_string(), ParameterValue::Number(data.end.x));
    parameters.insert("EndY".to_string(), ParameterValue::Number(data.end.y));
    parameters.insert("EndZ".to_string(), ParameterValue::Number(data.end.z));
    parameters.insert(
        "Area".to_string(),
        ParameterValue::Number(data.section.area()),
    );
}

fn read_number(element: &StructuralElement, key: &str) -> Result<f64> {
    element
        .number(key)
        .ok_or_else(|| Error::InvalidParameter(format!("missing or invalid beam parameter: {key}")))
}
