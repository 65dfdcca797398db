use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use crossterm::event::{self, Event, MouseButton, MouseEventKind};

use pagerange::{
    PaginationConfig, PagerSettings, compute,
    app::App,
    commands::KeyMapper,
    tui::Session,
    ui::{self, UiLayout},
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// How long to wait for a terminal event before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// pagerange - compute and explore pagination ranges
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the items for a configuration
    Items {
        #[command(flatten)]
        pager: PagerArgs,
        /// Print JSON instead of glyphs
        #[arg(long)]
        json: bool,
    },
    /// Explore a configuration interactively
    Demo {
        #[command(flatten)]
        pager: PagerArgs,
    },
    /// Display version information
    Version,
}

#[derive(Args, Debug)]
struct PagerArgs {
    /// Total number of pages
    #[arg(short, long, allow_negative_numbers = true)]
    count: i64,
    /// Current page
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    page: i64,
    /// Pages always shown at each end [default: from settings, else 1]
    #[arg(short, long, allow_negative_numbers = true)]
    boundary: Option<i64>,
    /// Pages always shown around the current page [default: from settings, else 1]
    #[arg(short, long, allow_negative_numbers = true)]
    siblings: Option<i64>,
    /// Hide the "first page" control; `--hide-first=false` shows it
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    hide_first: Option<bool>,
    /// Hide the "previous page" control; `--hide-prev=false` shows it
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    hide_prev: Option<bool>,
    /// Hide the "next page" control; `--hide-next=false` shows it
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    hide_next: Option<bool>,
    /// Hide the "last page" control; `--hide-last=false` shows it
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    hide_last: Option<bool>,
    /// Reject out-of-range values instead of clamping them
    #[arg(long)]
    strict: bool,
    /// Settings file with default visibility options
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,
}

impl PagerArgs {
    /// Merges settings and flags into a configuration. Flags win.
    fn resolve(&self) -> Result<PaginationConfig> {
        let settings =
            PagerSettings::load(self.settings.as_deref()).map_err(|e| e.into_report())?;
        let base = settings.config(self.count, self.page);

        let config = base
            .boundary_count(self.boundary.unwrap_or(base.boundary_count))
            .sibling_count(self.siblings.unwrap_or(base.sibling_count))
            .hide_first(self.hide_first.unwrap_or(base.hide_first))
            .hide_prev(self.hide_prev.unwrap_or(base.hide_prev))
            .hide_next(self.hide_next.unwrap_or(base.hide_next))
            .hide_last(self.hide_last.unwrap_or(base.hide_last));

        if self.strict {
            config.validate().map_err(|e| e.into_report())?;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    // tracing events are forwarded to the `log` facade; RUST_LOG controls output.
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Items { pager, json } => print_items(&pager.resolve()?, json),
        Commands::Demo { pager } => run_demo(pager.resolve()?),
        Commands::Version => {
            println!("pagerange v{VERSION}");
            println!("Pagination range computation with a terminal pager");
            Ok(())
        }
    }
}

fn print_items(config: &PaginationConfig, json: bool) -> Result<()> {
    let items = compute(config);
    if json {
        let output =
            serde_json::to_string_pretty(&items).wrap_err("Failed to serialize page items")?;
        println!("{output}");
    } else {
        let line: Vec<String> = items.iter().map(ToString::to_string).collect();
        println!("{}", line.join(" "));
    }
    Ok(())
}

fn run_demo(config: PaginationConfig) -> Result<()> {
    tracing::info!(?config, "Starting pager demo");

    let mut session = Session::start().map_err(|e| e.into_report())?;
    let mut app = App::new(
        config,
        Box::new(|page| tracing::info!("Page changed to {page}")),
    );

    while !app.exit {
        session.terminal.draw(|frame| ui::render(&mut app, frame))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => app.update(KeyMapper::map_key(key)),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = session.terminal.size()?;
                let area = ratatui::layout::Rect::new(0, 0, size.width, size.height);
                let layout = UiLayout::new(area, app.items());
                app.click(mouse.column, mouse.row, layout.pager);
            }
            // Resizes are picked up by the next draw.
            _ => {}
        }
    }

    Ok(())
}
