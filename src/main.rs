use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;
use std::io::stdout;
use std::time::Duration;

use noticeboard::config::{self, ConfigResult, DefaultsPatch};
use noticeboard::notice::paint_notices;
use noticeboard::{NoticeContext, NoticeWidget};

/// Interval between spinner ticks while waiting for input
const TICK_RATE: Duration = Duration::from_millis(16);

/// Show process-in-progress notices with a shared loading indicator
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Show process-in-progress notices with a shared loading indicator"
)]
struct Args {
    /// Notice text to show (repeatable)
    #[arg(short, long = "notice", value_name = "TEXT")]
    notices: Vec<String>,

    /// Add a loader-only notice
    #[arg(long)]
    loader: bool,

    /// Center the list on screen
    #[arg(long)]
    center: bool,

    /// Tag of the shared list element
    #[arg(long, value_name = "TAG")]
    list_tag: Option<String>,

    /// Print the document markup and exit instead of opening the terminal
    #[arg(long)]
    markup: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/noticeboard-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/noticeboard-debug.log")?;

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== NOTICEBOARD DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let config_result = config::load_config();
    let args = Args::parse();

    let mut ctx = NoticeContext::from_config(&config_result.config);
    if let Some(tag) = &args.list_tag {
        ctx.set_options(&DefaultsPatch::list_tag(tag));
    }

    let mut options = config_result.config.widget.clone();
    if args.center {
        options.center_list = Some(true);
    }
    let mut widget = NoticeWidget::new(&mut ctx, &options)?;

    if args.markup {
        populate(&mut ctx, &mut widget, &args, &config_result)?;
        let body = ctx.document().body();
        println!("{}", ctx.document().to_markup(body)?);
        return Ok(());
    }

    let mut terminal = init_terminal()?;
    let size = terminal.size()?;
    ctx.set_screen(Rect::new(0, 0, size.width, size.height));
    populate(&mut ctx, &mut widget, &args, &config_result)?;

    let result = run(&mut terminal, &mut ctx, &mut widget);
    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== NOTICEBOARD DEBUG SESSION ENDED ===");

    Ok(())
}

/// Register the config warning and the notices requested on the command line
fn populate(
    ctx: &mut NoticeContext,
    widget: &mut NoticeWidget,
    args: &Args,
    config_result: &ConfigResult,
) -> Result<()> {
    if let Some(warning) = &config_result.warning {
        widget.add(ctx, Some(warning.as_str()), false)?;
    }
    for text in &args.notices {
        widget.add(ctx, Some(text.as_str()), false)?;
    }
    if args.loader {
        widget.add(ctx, None, true)?;
    }
    Ok(())
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

/// Paint until quit; `d`/Backspace drops the oldest notice
fn run(
    terminal: &mut DefaultTerminal,
    ctx: &mut NoticeContext,
    widget: &mut NoticeWidget,
) -> Result<()> {
    let mut tick: u64 = 0;

    loop {
        let mut painted = Ok(());
        terminal.draw(|frame| painted = paint_notices(frame, ctx, tick))?;
        painted?;

        if event::poll(TICK_RATE)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('d') | KeyCode::Backspace => {
                        if let Some(oldest) = widget.notices().first().cloned() {
                            widget.remove(ctx, &oldest)?;
                        }
                    }
                    _ => {}
                },
                Event::Resize(width, height) => {
                    ctx.set_screen(Rect::new(0, 0, width, height));
                    widget.display(ctx)?;
                }
                _ => {}
            }
        }

        tick = tick.wrapping_add(1);
    }

    Ok(())
}
