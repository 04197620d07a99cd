use std::path::{Path, PathBuf};

/// Default directory the per-energy files are written into.
///
/// The directory is expected to exist already; the scraper never creates it.
pub const DEFAULT_OUTPUT_DIR: &str = "./infiles";

/// File name for one energy's dataset, derived from the energy label.
///
/// The first `.` in the label becomes `_`; a label with no `.` gets `_0`
/// appended. Downstream tools look files up by this exact scheme, so:
/// "1.5" → "v1_5.txt", "20" → "v20_0.txt", "1.2.3" → "v1_2.3.txt".
pub fn energy_file_name(label: &str) -> String {
    let stem = match label.find('.') {
        Some(i) => format!("{}_{}", &label[..i], &label[i + 1..]),
        None => format!("{label}_0"),
    };
    format!("v{stem}.txt")
}

/// Full output path for one energy's dataset under `dir`.
pub fn energy_file_path(dir: &Path, label: &str) -> PathBuf {
    dir.join(energy_file_name(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_dot_replaced() {
        assert_eq!(energy_file_name("1.5"), "v1_5.txt");
        assert_eq!(energy_file_name("0.0"), "v0_0.txt");
    }

    #[test]
    fn test_no_dot_appends_zero() {
        assert_eq!(energy_file_name("20"), "v20_0.txt");
    }

    #[test]
    fn test_only_first_dot_replaced() {
        assert_eq!(energy_file_name("1.2.3"), "v1_2.3.txt");
    }

    #[test]
    fn test_full_path() {
        let p = energy_file_path(Path::new("./infiles"), "1.5");
        assert_eq!(p, PathBuf::from("./infiles/v1_5.txt"));
    }
}
