use anyhow::{Context, Result, bail};
use girder_topology::Solid;
use std::path::Path;
use truck_stepio::out;

use crate::ensure_parent_dir;

pub fn export_step(solid: &Solid, model_name: &str, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let model_name = model_name.trim();
    if model_name.is_empty() {
        bail!("STEP model name must not be empty");
    }

    let header = out::StepHeaderDescriptor {
        file_name: model_name.to_string(),
        organization_system: format!("girder {}", env!("CARGO_PKG_VERSION")),
        ..Default::default()
    };
    let compressed = solid.compress();
    let text = out::CompleteStepDisplay::new(out::StepModel::from(&compressed), header).to_string();

    ensure_parent_dir(path)?;
    std::fs::write(path, text).with_context(|| format!("write STEP file {}", path.display()))
}
