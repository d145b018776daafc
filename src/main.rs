use clap::Parser;
use crossterm::{
    event::{self, DisableFocusChange, EnableFocusChange, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use kana_drill::config::{self, Overrides};
use kana_drill::models::Script;
use kana_drill::timer::TickClock;
use kana_drill::{App, data, logger};
use ratatui::{Terminal, backend::CrosstermBackend};
use simplelog::LevelFilter;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

const TICK_RATE: Duration = Duration::from_secs(1);

#[derive(Parser)]
#[command(name = "kana-drill", version, about = "Hiragana/katakana drill, timed test and N5 vocabulary cards")]
struct Args {
    /// Config file (default: <config dir>/kana-drill/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Word list JSON replacing the bundled one
    #[arg(long)]
    words: Option<PathBuf>,
    /// Vocabulary JSON replacing the bundled one
    #[arg(long)]
    vocab: Option<PathBuf>,
    /// Drill auto-advance seconds (5, 10 or 15)
    #[arg(long)]
    seconds: Option<u32>,
    /// Timed test duration in seconds
    #[arg(long)]
    test_seconds: Option<u32>,
    /// Number of questions in a timed test
    #[arg(long)]
    pool_size: Option<usize>,
    /// Script shown when a screen opens
    #[arg(long, value_enum)]
    script: Option<Script>,
    #[arg(long)]
    log_file: Option<PathBuf>,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let file_config = config::load_config(args.config.as_deref())?;
    let resolved = config::resolve(
        file_config,
        Overrides {
            drill_seconds: args.seconds,
            test_seconds: args.test_seconds,
            pool_size: args.pool_size,
            script: args.script,
            words: args.words,
            vocab: args.vocab,
            log_file: args.log_file,
        },
    );

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logger::init(&resolved.log_file, level);
    log::info!("kana-drill starting: {:?}", resolved);

    let words = match &resolved.words_path {
        Some(path) => data::load_words(path)?,
        None => data::bundled_words().to_vec(),
    };
    let vocab = match &resolved.vocab_path {
        Some(path) => data::load_vocab(path)?,
        None => data::bundled_vocab().to_vec(),
    };
    log::info!("Loaded {} words, {} vocabulary entries", words.len(), vocab.len());

    let app = App::new(resolved, words, vocab, Instant::now());
    run(app)?;
    Ok(())
}

fn run(mut app: App) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableFocusChange, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("kana-drill exiting");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    let mut clock = TickClock::new(TICK_RATE, Instant::now());

    loop {
        terminal.draw(|f| app.draw(f, Instant::now()))?;

        if event::poll(clock.timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::FocusLost => app.focus_lost(Instant::now()),
                Event::FocusGained => app.focus_gained(Instant::now()),
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }

        let now = Instant::now();
        clock.observe(app.countdown_generation(), now);
        if clock.due(now) {
            app.tick();
            clock.observe(app.countdown_generation(), now);
        }
    }
}
