use anyhow::{Context, Result};
use nudxs_model::{energy_file_path, EnergyDataset};
use std::fs;
use std::path::Path;

/// Persist one energy's dataset under `dir`.
///
/// The body goes to a temporary sibling first and is renamed into place
/// only on success, so an interrupted run never leaves a file that a
/// re-run would mistake for complete.
pub fn write_dataset(dir: &Path, dataset: &EnergyDataset) -> Result<()> {
    let path = energy_file_path(dir, &dataset.energy_label);
    let tmp = path.with_extension("txt.tmp");

    fs::write(&tmp, dataset.render())
        .with_context(|| format!("Failed to write {}", tmp.display()))?;
    fs::rename(&tmp, &path)
        .with_context(|| format!("Failed to move {} into place", tmp.display()))?;

    tracing::info!(
        path = %path.display(),
        angles = dataset.blocks.len(),
        rows = dataset.row_count(),
        "Wrote energy dataset"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nudxs_model::{AngleBlock, DataRow};

    #[test]
    fn test_write_renders_exact_bytes_and_removes_tmp() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = EnergyDataset {
            energy_label: "1.5".into(),
            blocks: vec![AngleBlock {
                angle_deg: 0,
                rows: vec![DataRow("0.1 0.2 3.0e-42".into())],
            }],
        };

        write_dataset(dir.path(), &dataset).unwrap();

        let body = fs::read_to_string(dir.path().join("v1_5.txt")).unwrap();
        assert_eq!(body, "1.5\n0\n0.1 0.2 3.0e-42\n");
        assert!(!dir.path().join("v1_5.txt.tmp").exists());
    }
}
