use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Deserialize)]
struct Package {
    name: String,
    manifest_path: PathBuf,
    dependencies: Vec<Dependency>,
}

#[derive(Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
}

/// Workspace crates each layer may depend on: domain <- shared <- client.
fn allowed_internal_deps() -> BTreeMap<&'static str, BTreeSet<&'static str>> {
    BTreeMap::from([
        ("nightreign-domain", BTreeSet::new()),
        ("nightreign-shared", BTreeSet::from(["nightreign-domain"])),
        (
            "nightreign-client",
            BTreeSet::from(["nightreign-domain", "nightreign-shared"]),
        ),
    ])
}

/// External crates that must stay out of the pure layers.
const IO_CRATES: &[&str] = &["tokio", "reqwest", "axum", "dotenvy", "tracing-subscriber"];

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let allowed = allowed_internal_deps();
    let mut violations = Vec::new();

    for package in &metadata.packages {
        let Some(permitted) = allowed.get(package.name.as_str()) else {
            continue;
        };

        for dep in &package.dependencies {
            let is_dev = dep.kind.as_deref() == Some("dev");
            if dep.name.starts_with("nightreign-") && !permitted.contains(dep.name.as_str()) {
                violations.push(format!("{} must not depend on {}", package.name, dep.name));
            }
            if package.name != "nightreign-client" && !is_dev && IO_CRATES.contains(&dep.name.as_str()) {
                violations.push(format!("{} must not depend on {}", package.name, dep.name));
            }
        }

        let src = package
            .manifest_path
            .parent()
            .map(|dir| dir.join("src"))
            .context("manifest path has no parent")?;
        violations.extend(scan_imports(&package.name, permitted, &src)?);
    }

    if violations.is_empty() {
        println!("arch-check: OK");
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} layering violation(s)", violations.len())
}

/// Flag `use nightreign_*` paths to crates outside `permitted`.
fn scan_imports(
    package: &str,
    permitted: &BTreeSet<&str>,
    dir: &Path,
) -> anyhow::Result<Vec<String>> {
    let pattern = regex_lite::Regex::new(r"\bnightreign_(domain|shared|client)\b")
        .context("compiling import pattern")?;
    let own = package.replace('-', "_");
    let mut violations = Vec::new();

    for file in rust_files(dir)? {
        let source = std::fs::read_to_string(&file)
            .with_context(|| format!("reading {}", file.display()))?;
        for (line_no, line) in source.lines().enumerate() {
            for found in pattern.find_iter(line) {
                let krate = found.as_str();
                if krate == own || permitted.contains(krate.replace('_', "-").as_str()) {
                    continue;
                }
                violations.push(format!(
                    "{}:{} references {}",
                    file.display(),
                    line_no + 1,
                    krate
                ));
            }
        }
    }

    Ok(violations)
}

fn rust_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let entries =
            std::fs::read_dir(&dir).with_context(|| format!("listing {}", dir.display()))?;
        for entry in entries {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                files.push(path);
            }
        }
    }
    Ok(files)
}
