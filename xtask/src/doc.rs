use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;
use std::time::Instant;

/// Library crates with public docs. `paging-testing` and `xtask` are tooling.
const DOCUMENTED: &[&str] = &["paging", "paging-indicator"];

pub fn run(open: bool) -> Result<()> {
    println!();
    println!("{}", "📚 Building documentation...".cyan().bold());
    println!();

    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.arg("doc").arg("--no-deps");
    for krate in DOCUMENTED {
        cmd.args(["-p", krate]);
    }
    // Document the optional serde and tracing surfaces too.
    cmd.args(["--features", "paging/serde,paging/tracing"])
        .env("RUSTDOCFLAGS", "-D rustdoc::broken_intra_doc_links");

    if open {
        cmd.arg("--open");
    }

    let output = cmd.output().context("Failed to build documentation")?;

    if !output.status.success() {
        eprintln!("{}", "✗ Documentation build failed".red().bold());
        eprintln!();
        eprintln!("{}", String::from_utf8_lossy(&output.stderr));
        anyhow::bail!("Documentation build failed");
    }

    println!(
        "{}",
        format!(
            "✓ Documented {} in {:.2}s",
            DOCUMENTED.join(", "),
            start.elapsed().as_secs_f64()
        )
        .green()
    );

    if !open {
        println!();
        println!(
            "   {}",
            "Open target/doc/paging/index.html in your browser".dimmed()
        );
        println!("   {}", "Or run 'cargo run -p xtask -- doc --open'".dimmed());
    }

    println!();

    Ok(())
}
