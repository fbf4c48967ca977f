use std::path::{Path, PathBuf};

use clap::Parser;
use tempfile::TempDir;

use peoria_cli::config::{CliConfig, SessionConfig};
use peoria_cli::{Cli, run};

/// A scratch directory for one test, removed when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = tempfile::Builder::new()
            .prefix("peoria-test-")
            .tempdir()
            .unwrap();
        Self { dir }
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// CLI config whose session file lives inside this directory.
    pub fn config(&self) -> CliConfig {
        CliConfig {
            session: SessionConfig {
                results_path: self.file("session.json"),
            },
            ..CliConfig::default()
        }
    }
}

/// Parse `args` as a `peoria` command line and run it, returning stdout.
pub fn run_cli(config: &CliConfig, args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("peoria").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    run(cli, config, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}
