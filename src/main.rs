use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use pagefeed::config::Config;
use pagefeed::feedback::{PagingInputs, PagingSystem};
use pagefeed::logging::init_tracing;
use pagefeed::paging::PagingState;
use pagefeed::source::corpus::{load_corpus, sample_corpus};
use pagefeed::source::{ArticleSource, InMemorySource, TimedSource};
use pagefeed::view::{ListView, NearBottom};

/// Infinite-scroll article list driven from stdin.
#[derive(Debug, Parser)]
#[command(name = "pagefeed", version)]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON article corpus
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Articles per page
    #[arg(long)]
    page_size: Option<usize>,

    /// Simulated fetch latency in milliseconds
    #[arg(long)]
    latency_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    ScrollRow,
    ScrollPage,
    ScrollTop,
    LoadMore,
    Refresh,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "" | "j" | "down" => Some(Self::ScrollRow),
            "d" | "page" => Some(Self::ScrollPage),
            "g" | "top" => Some(Self::ScrollTop),
            "m" | "more" => Some(Self::LoadMore),
            "r" | "refresh" => Some(Self::Refresh),
            "q" | "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Viewport over the published list.
struct Screen {
    view: ListView,
    offset: usize,
    viewport_rows: usize,
    near_bottom: NearBottom,
}

impl Screen {
    fn new(viewport_rows: usize, near_bottom_rows: usize) -> Self {
        Self {
            view: ListView::from_state(&PagingState::default()),
            offset: 0,
            viewport_rows,
            near_bottom: NearBottom::new(near_bottom_rows as f64),
        }
    }

    fn on_state(&mut self, state: &PagingState) -> bool {
        self.view = ListView::from_state(state);
        if self.view.rows.is_empty() {
            self.offset = 0;
        }
        self.observe_scroll()
    }

    fn scroll_by(&mut self, rows: usize) -> bool {
        let max_offset = self.view.content_height().saturating_sub(self.viewport_rows);
        self.offset = (self.offset + rows).min(max_offset);
        self.observe_scroll()
    }

    fn scroll_to_top(&mut self) -> bool {
        self.offset = 0;
        self.observe_scroll()
    }

    /// True when the viewport just entered the near-bottom zone.
    fn observe_scroll(&mut self) -> bool {
        self.near_bottom.observe(
            self.view.content_height() as f64,
            self.viewport_rows as f64,
            self.offset as f64,
        )
    }

    fn render(&self) -> String {
        let mut out = String::new();
        let status = if self.view.is_loading {
            "loading"
        } else if self.view.show_loader {
            "idle"
        } else {
            "end of list"
        };
        out.push_str(&format!(
            "-- {} articles, {} --\n",
            self.view.rows.len(),
            status
        ));
        let window = self.view.window(self.offset, self.viewport_rows);
        for (index, row) in window.iter().enumerate() {
            out.push_str(&format!("{:>4}  {}\n", self.offset + index + 1, row.title));
        }
        let reaches_end = self.offset + window.len() >= self.view.rows.len();
        if self.view.show_loader && reaches_end && window.len() < self.viewport_rows {
            out.push_str("      ...\n");
        }
        out
    }
}

fn build_source(config: &Config) -> anyhow::Result<Arc<dyn ArticleSource>> {
    let articles = match &config.source.corpus_path {
        Some(path) => load_corpus(path)
            .with_context(|| format!("Cannot load corpus from {}", path.display()))?,
        None => sample_corpus(config.source.sample_size),
    };
    tracing::info!(count = articles.len(), "Article corpus ready");

    let source =
        InMemorySource::new(articles).with_latency(Duration::from_millis(config.source.latency_ms));
    Ok(match config.source.fetch_timeout_ms {
        Some(ms) => Arc::new(TimedSource::new(source, Duration::from_millis(ms))),
        None => Arc::new(source),
    })
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(path) = &cli.corpus {
        config.source.corpus_path = Some(path.clone());
    }
    if let Some(page_size) = cli.page_size {
        config.paging.page_size = page_size;
    }
    if let Some(latency_ms) = cli.latency_ms {
        config.source.latency_ms = latency_ms;
    }
    config.validate()?;
    Ok(config)
}

fn write_screen(out: &mut impl Write, screen: &Screen) -> std::io::Result<()> {
    out.write_all(screen.render().as_bytes())?;
    out.flush()
}

fn print_screen(screen: &Screen) -> std::io::Result<()> {
    write_screen(&mut std::io::stdout().lock(), screen)
}

fn signal_load_more(inputs: &PagingInputs) {
    if !inputs.load_more() {
        tracing::warn!("Paging session ended, load-more signal dropped");
    }
}

fn signal_refresh(inputs: &PagingInputs) {
    if !inputs.refresh() {
        tracing::warn!("Paging session ended, refresh signal dropped");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(&cli).context("Invalid configuration")?;
    let source = build_source(&config)?;

    let (session, inputs) = PagingSystem::new(source, config.paging.page_size).spawn();
    let mut updates = session.updates();
    let mut screen = Screen::new(config.view.viewport_rows, config.view.near_bottom_rows);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            state = updates.recv() => {
                let Some(state) = state else {
                    break;
                };
                if screen.on_state(&state) {
                    signal_load_more(&inputs);
                }
                print_screen(&screen).context("Failed to write to stdout")?;
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    break;
                };
                let near_bottom = match Command::parse(&line) {
                    Some(Command::ScrollRow) => screen.scroll_by(1),
                    Some(Command::ScrollPage) => screen.scroll_by(config.view.viewport_rows),
                    Some(Command::ScrollTop) => screen.scroll_to_top(),
                    Some(Command::LoadMore) => true,
                    Some(Command::Refresh) => {
                        signal_refresh(&inputs);
                        false
                    }
                    Some(Command::Quit) => break,
                    None => {
                        eprintln!("commands: j/down, d/page, g/top, m/more, r/refresh, q/quit");
                        continue;
                    }
                };
                if near_bottom {
                    signal_load_more(&inputs);
                }
                print_screen(&screen).context("Failed to write to stdout")?;
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    session.shutdown();
    Ok(())
}
