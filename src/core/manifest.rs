use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{JobKind, Variant};

/// One source file and what to do with it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpec {
    /// File name under the source directory
    pub source: String,
    /// Output file name; for reference sheets, the base name of the extracted icon
    pub output: String,
    #[serde(default)]
    pub kind: JobKind,
    #[serde(default)]
    pub recolor: bool,
    #[serde(default = "default_true")]
    pub remove_background: bool,
}

fn default_true() -> bool {
    true
}

impl JobSpec {
    pub fn single(source: &str, output: &str, recolor: bool) -> Self {
        Self {
            source: source.to_string(),
            output: output.to_string(),
            kind: JobKind::Single,
            recolor,
            remove_background: true,
        }
    }

    pub fn reference_sheet(source: &str, base_name: &str, recolor: bool) -> Self {
        Self {
            source: source.to_string(),
            output: base_name.to_string(),
            kind: JobKind::ReferenceSheet,
            recolor,
            remove_background: true,
        }
    }

    /// File name written to the output directory
    pub fn output_file_name(&self) -> String {
        match self.kind {
            JobKind::Single => self.output.clone(),
            JobKind::ReferenceSheet => format!("{}-icon.png", self.output),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.source.trim().is_empty() {
            return Err(Error::InvalidManifest("job with empty source".to_string()));
        }
        if self.output.trim().is_empty() {
            return Err(Error::InvalidManifest(format!(
                "job {:?} has an empty output name",
                self.source
            )));
        }
        if self.output.contains(['/', '\\']) || matches!(self.output.trim(), "." | "..") {
            return Err(Error::InvalidManifest(format!(
                "output name {:?} must be a plain file name",
                self.output
            )));
        }
        Ok(())
    }
}

/// Ordered list of jobs for one pipeline variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub variant: Variant,
    pub jobs: Vec<JobSpec>,
}

impl Manifest {
    /// The Orizon logo set as shipped with each pipeline variant
    pub fn builtin(variant: Variant) -> Self {
        let jobs = match variant {
            Variant::Legacy => vec![
                // Singles: blue on dark/light, orange ones go purple
                JobSpec::single(
                    "ChatGPT Image Nov 28, 2025, 11_04_27 PM.png",
                    "gargantua-blue-dark.png",
                    false,
                ),
                JobSpec::single(
                    "ChatGPT Image Nov 28, 2025, 11_04_30 PM.png",
                    "gargantua-purple-dark.png",
                    true,
                ),
                JobSpec::single(
                    "ChatGPT Image Nov 28, 2025, 11_04_38 PM.png",
                    "orizon-full-blue-dark.png",
                    false,
                ),
                JobSpec::single(
                    "ChatGPT Image Nov 28, 2025, 11_08_48 PM.png",
                    "gargantua-blue-light.png",
                    false,
                ),
                JobSpec::single(
                    "ChatGPT Image Nov 28, 2025, 11_11_07 PM.png",
                    "gargantua-purple-dark-alt.png",
                    true,
                ),
                JobSpec::single(
                    "ChatGPT Image Nov 28, 2025, 11_12_54 PM.png",
                    "orizon-full-purple-dark.png",
                    true,
                ),
                JobSpec::single(
                    "ChatGPT Image Nov 28, 2025, 11_28_56 PM.png",
                    "orizon-full-blue-light.png",
                    false,
                ),
                // Multi-size reference sheets
                JobSpec::reference_sheet(
                    "ChatGPT Image Nov 28, 2025, 11_20_49 PM.png",
                    "gargantua-blue",
                    false,
                ),
                JobSpec::reference_sheet(
                    "ChatGPT Image Nov 28, 2025, 11_21_57 PM.png",
                    "gargantua-purple",
                    true,
                ),
                JobSpec::reference_sheet(
                    "ChatGPT Image Nov 28, 2025, 11_27_14 PM.png",
                    "gargantua-purple-alt",
                    true,
                ),
            ],
            Variant::Fixed => vec![
                JobSpec::single(
                    "ChatGPT Image Nov 28, 2025, 11_04_27 PM.png",
                    "gargantua-blue-dark.png",
                    false,
                ),
                JobSpec::single(
                    "ChatGPT Image Nov 28, 2025, 11_08_48 PM.png",
                    "gargantua-blue-light.png",
                    false,
                ),
                JobSpec::single(
                    "ChatGPT Image Nov 28, 2025, 11_04_38 PM.png",
                    "orizon-full-blue-dark.png",
                    false,
                ),
                JobSpec::single(
                    "ChatGPT Image Nov 28, 2025, 11_28_56 PM.png",
                    "orizon-full-blue-light.png",
                    false,
                ),
                JobSpec::single(
                    "ChatGPT Image Nov 28, 2025, 11_04_30 PM.png",
                    "gargantua-purple-dark.png",
                    true,
                ),
                JobSpec::single(
                    "ChatGPT Image Nov 28, 2025, 11_11_07 PM.png",
                    "gargantua-purple-light.png",
                    true,
                ),
                JobSpec::single(
                    "ChatGPT Image Nov 28, 2025, 11_12_54 PM.png",
                    "orizon-full-purple-dark.png",
                    true,
                ),
            ],
        };
        Self { variant, jobs }
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let manifest: Manifest = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn validate(&self) -> Result<()> {
        for job in &self.jobs {
            job.validate()?;
        }
        Ok(())
    }
}
