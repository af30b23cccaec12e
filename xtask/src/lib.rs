use anyhow::{bail, Result};
use std::env;
use std::process::Command;

/// Demos shipped under `demos/` and registered as cargo examples.
pub const DEMOS: &[&str] = &["basic_usage", "goertzel", "verbose_logging"];

/// Options derived from the host machine used to configure cargo commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub features: Vec<String>,
}

impl BuildConfig {
    /// Join features into a single string suitable for passing to cargo.
    pub fn features_arg(&self) -> Option<String> {
        if self.features.is_empty() {
            None
        } else {
            Some(self.features.join(" "))
        }
    }

    fn push_features(&self, cmd: &mut Command) {
        if let Some(f) = self.features_arg() {
            cmd.arg("--features").arg(f);
        }
    }
}

/// Detect build configuration from the current machine.
pub fn detect_config() -> BuildConfig {
    let nproc = detect_nproc();
    let extra = env::var("COOLEY_FEATURES").unwrap_or_default();
    compute_config(nproc, &extra)
}

fn detect_nproc() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Compute a [`BuildConfig`] from supplied inputs. This is separated for testing.
pub fn compute_config(nproc: usize, extra: &str) -> BuildConfig {
    let mut features: Vec<String> = Vec::new();

    if nproc > 1 {
        features.push("parallel".into());
    }

    for feat in extra.split_whitespace() {
        if !features.iter().any(|f| f == feat) {
            features.push(feat.to_string());
        }
    }

    BuildConfig { features }
}

pub fn build_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["build", "--workspace"]);
    cfg.push_features(&mut cmd);
    cmd
}

pub fn test_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.arg("test");
    cfg.push_features(&mut cmd);
    cmd
}

pub fn clippy_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["clippy", "--all-targets", "--all-features"]);
    cmd
}

pub fn fmt_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["fmt", "--all"]);
    cmd
}

pub fn bench_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "--bench", "bench_fft"]);
    cfg.push_features(&mut cmd);
    cmd
}

/// `cargo run --example <name>`, enabling `verbose-logging` for the logging demo.
pub fn demo_command(cfg: &BuildConfig, name: &str, args: &[String]) -> Result<Command> {
    if !DEMOS.contains(&name) {
        bail!("unknown demo `{name}`, expected one of {}", DEMOS.join(", "));
    }
    let mut cfg = cfg.clone();
    if name == "verbose_logging" && !cfg.features.iter().any(|f| f == "verbose-logging") {
        cfg.features.push("verbose-logging".into());
    }
    let mut cmd = Command::new("cargo");
    cmd.args(["run", "--release", "--example", name]);
    cfg.push_features(&mut cmd);
    if !args.is_empty() {
        cmd.arg("--").args(args);
    }
    Ok(cmd)
}
