//! Headless indicator walk-through.
//!
//! Builds a real `PagingControl`, steps it to the last page and back, and
//! prints every rendered frame as ASCII. With `--screenshots` each frame
//! (including animation tweens) is also written as a PNG.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use embedded_graphics::prelude::*;
use paging::prelude::*;
use paging_indicator::prelude::*;
use paging_testing::TestCanvas;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Number of pages
    #[arg(long, default_value_t = 10)]
    pages: usize,
    /// Full-size dots in the window (3 or 5)
    #[arg(long, default_value_t = 3)]
    capacity: u8,
    /// Page to start on
    #[arg(long, default_value_t = 0)]
    start: usize,
    /// Intermediate animation frames per transition
    #[arg(long, default_value_t = 0)]
    tweens: u32,
    /// Use the dark style
    #[arg(long)]
    dark: bool,
    /// Write every frame as a PNG into this directory
    #[arg(long)]
    screenshots: Option<PathBuf>,
    /// Pause between frames, in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,
}

pub fn run(args: &DemoArgs) -> Result<()> {
    init_logging();

    let capacity = WindowCapacity::try_from(args.capacity)?;
    let config = PagingConfig::default().with_capacity(capacity);
    let observer = |page: usize| tracing::info!(page, "observer notified");
    let mut control = PagingControl::with_observer(args.pages, args.start, config, observer)
        .context("Failed to build paging control")?;

    let style = if args.dark {
        IndicatorStyle::dark()
    } else {
        IndicatorStyle::light()
    };
    let indicator = PageIndicator::new(config).style(style);
    let mut animator = IndicatorAnimator::new(config.animation, control.snapshot());
    let mut frames = FrameSink::new(&indicator, &control.snapshot(), args);

    println!();
    println!(
        "{}",
        format!(
            "▶ {} pages, {}-dot window, {:?} mode",
            args.pages,
            capacity.slots(),
            control.window().mode()
        )
        .cyan()
        .bold()
    );
    println!();
    frames.emit(&indicator, &animator, "start")?;

    let last = args.pages.saturating_sub(1);
    let forward = (control.current_page()..last).map(|_| PageInput::Next);
    let backward = (0..last).map(|_| PageInput::Previous);

    for input in forward.chain(backward) {
        let Some(transition) = control.handle_input(input)? else {
            continue;
        };
        let label = format!(
            "{:?} to page {} ({} slid)",
            transition.direction,
            control.current_page(),
            transition.slides
        );

        animator.retarget(control.snapshot());
        if args.tweens > 0 {
            let dt = animator
                .animation()
                .duration_ms
                .checked_div(args.tweens.saturating_add(1))
                .unwrap_or(0);
            for tween in 1..=args.tweens {
                animator.advance(dt);
                frames.emit(&indicator, &animator, &format!("{label}, tween {tween}"))?;
            }
        }
        animator.finish();
        frames.emit(&indicator, &animator, &label)?;
    }

    println!(
        "{}",
        format!("✓ Rendered {} frames", frames.count).green().bold()
    );
    if let Some(dir) = &args.screenshots {
        println!("   {}", format!("Screenshots in {}", dir.display()).dimmed());
    }
    println!();
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second init (e.g. in tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}

struct FrameSink<'a> {
    canvas: TestCanvas,
    screenshots: Option<&'a Path>,
    delay: Duration,
    count: u32,
}

impl<'a> FrameSink<'a> {
    fn new(indicator: &PageIndicator, snapshot: &RenderSnapshot, args: &'a DemoArgs) -> Self {
        let size = indicator.size(snapshot);
        Self {
            canvas: TestCanvas::new(size.width, size.height),
            screenshots: args.screenshots.as_deref(),
            delay: Duration::from_millis(args.delay_ms),
            count: 0,
        }
    }

    fn emit<F: StripFrame>(
        &mut self,
        indicator: &PageIndicator,
        frame: &F,
        label: &str,
    ) -> Result<()> {
        self.canvas.reset();
        indicator.render(&mut self.canvas, Point::zero(), frame)?;

        println!("{}", format!("[{:03}] {label}", self.count).dimmed());
        print!("{}", self.canvas.to_ascii());
        println!();

        if let Some(dir) = self.screenshots {
            let path = dir.join(format!("frame_{:03}.png", self.count));
            self.canvas
                .screenshot(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::debug!(path = %path.display(), "screenshot written");
        }

        self.count = self.count.saturating_add(1);
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pages: usize, screenshots: Option<PathBuf>) -> DemoArgs {
        DemoArgs {
            pages,
            capacity: 3,
            start: 0,
            tweens: 2,
            dark: false,
            screenshots,
            delay_ms: 0,
        }
    }

    #[test]
    fn test_demo_writes_every_frame() {
        let dir = tempfile::tempdir().unwrap();
        run(&args(5, Some(dir.path().to_path_buf()))).unwrap();
        // start + 4 forward + 4 back, each with two tweens before the final frame
        let written = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(written, 1 + 8 * 3);
    }

    #[test]
    fn test_demo_rejects_bad_capacity() {
        let mut bad = args(5, None);
        bad.capacity = 4;
        assert!(run(&bad).is_err());
    }

    #[test]
    fn test_demo_single_page() {
        run(&args(1, None)).unwrap();
    }
}
