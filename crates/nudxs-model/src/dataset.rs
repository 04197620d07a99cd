use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// A link from the root index to one neutrino energy's angle-index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyLink {
    /// Relative href as it appears on the root index page.
    pub href: String,
    /// Anchor text: the canonical energy value (e.g. "1.5"), which also
    /// determines the output file name.
    pub label: String,
}

/// A link from an angle-index page to one angle's data page.
///
/// The angle value is assigned by the anchor's position on the page, not
/// read from the page text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AngleLink {
    pub href: String,
    pub angle_deg: u16,
}

/// One measurement row, carried as opaque text.
///
/// The line reads `<E_e> <p_e> <diffxsection>`; no numeric parsing or
/// validation happens here — downstream consumers parse the files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRow(pub String);

/// All rows for one (energy, angle) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AngleBlock {
    pub angle_deg: u16,
    pub rows: Vec<DataRow>,
}

/// The complete dataset for one neutrino energy, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyDataset {
    pub energy_label: String,
    pub blocks: Vec<AngleBlock>,
}

impl EnergyDataset {
    /// Render the exact file body: the energy label line, then for each
    /// angle its value line followed by its data lines. Every line,
    /// including the last, is newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::new();
        writeln!(out, "{}", self.energy_label).expect("write to String");
        for block in &self.blocks {
            writeln!(out, "{}", block.angle_deg).expect("write to String");
            for row in &block.rows {
                writeln!(out, "{}", row.0).expect("write to String");
            }
        }
        out
    }

    /// Total number of data rows across all angle blocks.
    pub fn row_count(&self) -> usize {
        self.blocks.iter().map(|b| b.rows.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_layout() {
        let ds = EnergyDataset {
            energy_label: "1.5".into(),
            blocks: vec![
                AngleBlock {
                    angle_deg: 0,
                    rows: vec![
                        DataRow("0.1 0.2 1.0e-42".into()),
                        DataRow("0.3 0.4 2.0e-42".into()),
                    ],
                },
                AngleBlock {
                    angle_deg: 5,
                    rows: vec![DataRow("0.5 0.6 3.0e-42".into())],
                },
            ],
        };
        assert_eq!(
            ds.render(),
            "1.5\n0\n0.1 0.2 1.0e-42\n0.3 0.4 2.0e-42\n5\n0.5 0.6 3.0e-42\n"
        );
        assert_eq!(ds.row_count(), 3);
    }

    #[test]
    fn test_render_empty_block() {
        // An angle whose data page had only a header still gets its
        // angle line, with no data lines under it.
        let ds = EnergyDataset {
            energy_label: "20".into(),
            blocks: vec![AngleBlock { angle_deg: 0, rows: vec![] }],
        };
        assert_eq!(ds.render(), "20\n0\n");
    }
}
