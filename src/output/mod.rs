//! Plain-text diagnostic outputs.
//!
//! Layout mirrors the label structure: `<root>/output/<variable>/` for
//! single-axis variables, with one extra sub-directory level when a second
//! iterable axis exists (e.g. one directory per soil layer). Areal means are
//! appended one value per line; zonal vectors are appended one
//! space-separated row per time combination, so the files accumulate a
//! month-by-month record over the enumeration.

use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Writer for the per-variable text diagnostics.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    root: PathBuf,
}

impl OutputWriter {
    /// Create a writer rooted at `root` (files land under `<root>/output/`).
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Remove every `.txt` file under the output root.
    ///
    /// The diagnostic files are append-mode, so a fresh run must start from
    /// a clean slate or values from the previous run accumulate.
    pub fn clear_text_outputs(&self) -> Result<()> {
        remove_txt_files(&self.root)
    }

    /// Append one areal-mean value for a variable/sub-combination.
    pub fn append_areal_mean(
        &self,
        variable: &str,
        sub_folder: Option<&str>,
        value: f64,
    ) -> Result<()> {
        let path = self.text_path(variable, sub_folder, "arealmean")?;
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", value)?;
        Ok(())
    }

    /// Append one zonal-mean row (one value per latitude).
    pub fn append_zonal_mean(
        &self,
        variable: &str,
        sub_folder: Option<&str>,
        values: &[f64],
    ) -> Result<()> {
        self.append_row(variable, sub_folder, "zonalmean", values)
    }

    /// Append one zonal-integral row (one value per latitude).
    pub fn append_zonal_integral(
        &self,
        variable: &str,
        sub_folder: Option<&str>,
        values: &[f64],
    ) -> Result<()> {
        self.append_row(variable, sub_folder, "zonalintg", values)
    }

    /// Directory a variable/sub-combination writes into, created on demand.
    pub fn variable_dir(&self, variable: &str, sub_folder: Option<&str>) -> Result<PathBuf> {
        let mut dir = self.root.join("output").join(variable);
        if let Some(sub) = sub_folder {
            dir = dir.join(sub);
        }
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    fn append_row(
        &self,
        variable: &str,
        sub_folder: Option<&str>,
        kind: &str,
        values: &[f64],
    ) -> Result<()> {
        let path = self.text_path(variable, sub_folder, kind)?;
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        let row = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(file, "{}", row)?;
        Ok(())
    }

    fn text_path(
        &self,
        variable: &str,
        sub_folder: Option<&str>,
        kind: &str,
    ) -> Result<PathBuf> {
        let dir = self.variable_dir(variable, sub_folder)?;
        let stem = match sub_folder {
            Some(sub) => format!("{}_{}", variable, sub),
            None => variable.to_string(),
        };
        Ok(dir.join(format!("{}_{}_tseries.txt", stem, kind)))
    }
}

fn remove_txt_files(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            remove_txt_files(&path)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some("txt") {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn areal_means_accumulate_one_per_line() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = OutputWriter::new(tmp.path());

        writer.append_areal_mean("t_soil", Some("(1)0p1-0p35m"), 1.5).unwrap();
        writer.append_areal_mean("t_soil", Some("(1)0p1-0p35m"), f64::NAN).unwrap();
        writer.append_areal_mean("t_soil", Some("(1)0p1-0p35m"), -2.25).unwrap();

        let path = tmp
            .path()
            .join("output/t_soil/(1)0p1-0p35m/t_soil_(1)0p1-0p35m_arealmean_tseries.txt");
        let contents = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "1.5");
        assert_eq!(lines[1], "NaN");
        assert_eq!(lines[2], "-2.25");
    }

    #[test]
    fn zonal_rows_are_space_separated() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = OutputWriter::new(tmp.path());

        writer
            .append_zonal_mean("fch4_wetl", None, &[1.0, 2.0, 3.0])
            .unwrap();
        writer
            .append_zonal_mean("fch4_wetl", None, &[4.0, 5.0, 6.0])
            .unwrap();

        let path = tmp
            .path()
            .join("output/fch4_wetl/fch4_wetl_zonalmean_tseries.txt");
        let contents = fs::read_to_string(path).unwrap();
        assert_eq!(contents, "1 2 3\n4 5 6\n");
    }

    #[test]
    fn clear_removes_only_text_files() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = OutputWriter::new(tmp.path());
        writer.append_areal_mean("lai", None, 0.5).unwrap();

        let keep = tmp.path().join("output/lai/map.png");
        fs::write(&keep, b"png").unwrap();

        writer.clear_text_outputs().unwrap();

        assert!(keep.exists());
        assert!(!tmp
            .path()
            .join("output/lai/lai_arealmean_tseries.txt")
            .exists());
    }
}
