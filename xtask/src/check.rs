use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;
use std::time::Instant;

/// Cross target with no `std`: the core and renderer must build here.
const EMBEDDED_TARGET: &str = "thumbv7em-none-eabihf";

struct Step {
    label: &'static str,
    args: &'static [&'static str],
}

const REQUIRED: &[Step] = &[
    Step {
        label: "paging (no_std)",
        args: &["check", "-p", "paging", "--target", EMBEDDED_TARGET],
    },
    Step {
        label: "paging-indicator (no_std)",
        args: &["check", "-p", "paging-indicator", "--target", EMBEDDED_TARGET],
    },
    Step {
        label: "paging (defmt, no_std)",
        args: &[
            "check",
            "-p",
            "paging",
            "--target",
            EMBEDDED_TARGET,
            "--features",
            "defmt",
        ],
    },
    Step {
        label: "paging (serde + tracing, no_std)",
        args: &[
            "check",
            "-p",
            "paging",
            "--target",
            EMBEDDED_TARGET,
            "--features",
            "serde,tracing",
        ],
    },
    Step {
        label: "workspace (host, all features)",
        args: &["check", "--workspace", "--all-targets", "--features", "paging/serde"],
    },
];

pub fn run() -> Result<()> {
    println!();
    println!("{}", "🔍 Checking page indicator crates...".cyan().bold());
    println!();

    let total_start = Instant::now();

    for step in REQUIRED {
        println!("{}", format!("  Checking {}...", step.label).cyan());
        let start = Instant::now();

        let output = Command::new("cargo")
            .args(step.args)
            .output()
            .with_context(|| format!("Failed to check {}", step.label))?;

        if !output.status.success() {
            eprintln!("{}", format!("  ✗ {} failed", step.label).red().bold());
            eprintln!();
            eprintln!("{}", String::from_utf8_lossy(&output.stderr));
            anyhow::bail!("{} check failed", step.label);
        }

        println!(
            "{}",
            format!(
                "  ✓ {} passed in {:.2}s",
                step.label,
                start.elapsed().as_secs_f64()
            )
            .green()
        );
        println!();
    }

    println!("{}", "  Running clippy lints...".cyan());
    let clippy_start = Instant::now();

    let clippy_output = Command::new("cargo")
        .args(["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"])
        .output()
        .context("Failed to run clippy")?;

    if !clippy_output.status.success() {
        eprintln!("{}", "  ⚠ Clippy warnings found".yellow().bold());
        eprintln!();
        eprintln!("{}", String::from_utf8_lossy(&clippy_output.stderr));
        // Don't fail on clippy warnings, just show them
    } else {
        println!(
            "{}",
            format!(
                "  ✓ Clippy passed in {:.2}s",
                clippy_start.elapsed().as_secs_f64()
            )
            .green()
        );
    }
    println!();

    println!("{}", "  Checking code formatting...".cyan());

    let fmt_output = Command::new("cargo")
        .args(["fmt", "--all", "--check"])
        .output()
        .context("Failed to run cargo fmt")?;

    if !fmt_output.status.success() {
        eprintln!("{}", "  ⚠ Formatting issues found".yellow().bold());
        eprintln!("     Run 'cargo fmt --all' to fix");
    } else {
        println!("{}", "  ✓ Formatting check passed".green());
    }
    println!();

    println!(
        "{}",
        format!(
            "✓ All checks completed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}
