use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use tempfile::TempDir;

mod check;
mod init;
mod languages;
mod play;
mod resolve;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with a typical pair of catalogs.
    pub fn with_default_locales() -> Result<Self> {
        let test = Self::new()?;
        test.write_file(
            "locales/en.json",
            r#"{
  "hero": {
    "title": "We build software",
    "description": "From idea to launch",
    "stats": [
      {"value": "120+", "label": "Projects"},
      {"value": "40", "label": "Clients"}
    ],
    "cta": "Talk to us"
  },
  "footer": {
    "rights": "© {{year}} Corp"
  }
}"#,
        )?;
        test.write_file(
            "locales/bg.json",
            r#"{
  "hero": {
    "title": "Изграждаме софтуер",
    "description": "От идея до пускане",
    "stats": [
      {"value": "120+", "label": "Проекта"},
      {"value": "40", "label": "Клиента"}
    ],
    "cta": "Свържете се"
  },
  "footer": {
    "rights": "© {{year}} Корп"
  }
}"#,
        )?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_marquee"));
        cmd.current_dir(&self.project_dir);
        // A clean environment keeps the host's LANG and preferences from
        // leaking into language detection.
        cmd.env_clear();
        cmd.env("NO_COLOR", "1");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Result<RunOutput> {
        let output = self.command().args(args).output()?;
        Ok(RunOutput::from(output))
    }
}

pub struct RunOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for RunOutput {
    fn from(output: Output) -> Self {
        Self {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
