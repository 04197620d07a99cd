use crate::fetch::PageSource;
use crate::output;
use anyhow::Result;
use nudxs_model::{
    angle_for_index, energy_file_path, AngleBlock, AngleLink, DataRow, EnergyDataset, EnergyLink,
};
use scraper::{ElementRef, Html, Selector};
use std::path::Path;

/// Root index of the Gudkov tables for `v_e + d -> e^- + p + p`.
pub const BASE_URL: &str =
    "http://boson.physics.sc.edu/~gudkov/NU-D-NSGK/Netal/electron/e-2nd-table/index.html";

/// What one run did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Energy links found on the root index.
    pub energies: usize,
    /// Output files written this run.
    pub written: usize,
    /// Energies skipped because their file already existed.
    pub skipped: usize,
}

/// Walk the three-level page hierarchy and persist one file per energy.
///
/// Energies whose output file already exists are skipped without any
/// fetching below the root index. Processing is strictly sequential; the
/// first exhausted retry or angle-table overrun aborts the run, leaving
/// already-written files in place.
pub async fn acquire<S: PageSource>(
    source: &S,
    base_url: &str,
    output_dir: &Path,
) -> Result<Summary> {
    anyhow::ensure!(
        output_dir.is_dir(),
        "Output directory {} does not exist (it is not created automatically)",
        output_dir.display()
    );

    tracing::info!(url = %base_url, "Fetching root index");
    let html = source.fetch(base_url).await?;
    let energies = energy_links(&Html::parse_document(&html));
    tracing::info!(energies = energies.len(), "Enumerated energy links");

    let mut summary = Summary {
        energies: energies.len(),
        ..Summary::default()
    };

    for link in &energies {
        let path = energy_file_path(output_dir, &link.label);
        if path.exists() {
            tracing::debug!(energy = %link.label, path = %path.display(), "File exists, skipping");
            summary.skipped += 1;
            continue;
        }

        tracing::info!(energy = %link.label, "Reading energy");
        let dataset = fetch_energy(source, base_url, link).await?;
        output::write_dataset(output_dir, &dataset)?;
        summary.written += 1;
    }

    Ok(summary)
}

/// Fetch one energy's angle index and every angle's data page, assembling
/// the complete dataset in memory.
async fn fetch_energy<S: PageSource>(
    source: &S,
    base_url: &str,
    link: &EnergyLink,
) -> Result<EnergyDataset> {
    let angle_index_url = resolve_energy_url(base_url, &link.href);
    let html = source.fetch(&angle_index_url).await?;
    let angles = angle_links(&Html::parse_document(&html))?;
    tracing::debug!(energy = %link.label, angles = angles.len(), "Enumerated angle links");

    let mut blocks = Vec::with_capacity(angles.len());
    for angle in &angles {
        let data_url = resolve_data_url(&angle_index_url, &angle.href);
        let html = source.fetch(&data_url).await?;
        let rows = data_rows(&Html::parse_document(&html));
        blocks.push(AngleBlock {
            angle_deg: angle.angle_deg,
            rows,
        });
    }

    Ok(EnergyDataset {
        energy_label: link.label.clone(),
        blocks,
    })
}

/// All anchors of the root index, in document order. The anchor text is
/// the energy label; anchors without an href are skipped.
pub fn energy_links(doc: &Html) -> Vec<EnergyLink> {
    let anchor_sel = Selector::parse("a").expect("valid selector");
    let mut links = Vec::new();
    for anchor in doc.select(&anchor_sel) {
        let Some(href) = anchor.value().attr("href") else {
            tracing::debug!("Skipping anchor without href");
            continue;
        };
        links.push(EnergyLink {
            href: href.to_string(),
            label: element_text(&anchor),
        });
    }
    links
}

/// All anchors of an angle-index page, each paired with the angle at its
/// position in the fixed degree sequence. The page text is never consulted
/// for the angle value. A page with more anchors than the sequence has
/// entries is an error.
pub fn angle_links(doc: &Html) -> Result<Vec<AngleLink>> {
    let anchor_sel = Selector::parse("a").expect("valid selector");
    let mut links = Vec::new();
    for (index, anchor) in doc.select(&anchor_sel).enumerate() {
        let Some(href) = anchor.value().attr("href") else {
            tracing::debug!("Skipping anchor without href");
            continue;
        };
        links.push(AngleLink {
            href: href.to_string(),
            angle_deg: angle_for_index(index)?,
        });
    }
    Ok(links)
}

/// Data lines of one data page: every `tr` after the header row, cell
/// texts trimmed and joined with single spaces. Pages with zero or one
/// rows yield no data lines.
pub fn data_rows(doc: &Html) -> Vec<DataRow> {
    let row_sel = Selector::parse("tr").expect("valid selector");
    let cell_sel = Selector::parse("td, th").expect("valid selector");

    doc.select(&row_sel)
        .skip(1) // column header
        .map(|row| {
            let line = row
                .select(&cell_sel)
                .map(|cell| element_text(&cell))
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            DataRow(line)
        })
        .collect()
}

/// Angle-index URL for an energy: the root URL with its trailing
/// `index.html` replaced by the anchor href.
pub fn resolve_energy_url(base_url: &str, href: &str) -> String {
    match base_url.strip_suffix("index.html") {
        Some(prefix) => format!("{prefix}{href}"),
        None => format!("{}/{href}", base_url.trim_end_matches('/')),
    }
}

/// Data-page URL for an angle: one level below the energy's URL, matching
/// how the source hierarchy is laid out.
pub fn resolve_data_url(angle_index_url: &str, href: &str) -> String {
    format!("{angle_index_url}/{href}")
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
