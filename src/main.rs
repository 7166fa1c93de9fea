mod config;
mod error;
mod logging;
mod models;
mod ui;

use std::io;
use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::ui::{App, handle_event, render};

/// 单屏待办清单
#[derive(Parser, Debug)]
#[command(name = "todo-screen")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    TODO_SCREEN_DEBUG=1     Enable debug logging (alternative to --debug)\n    RUST_LOG                Override the log filter")]
struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long)]
    debug: bool,

    /// Config file (default: <config dir>/todo-screen/config.toml)
    #[arg(short = 'c', long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("todo-screen: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let log_path = logging::init(cli.debug, &config.log_level)?;
    info!(log = %log_path.display(), "todo-screen starting");

    // 创建应用状态
    let mut app = App::new(config.screen_options());

    // 设置终端；从开启 raw mode 起，每条退出路径都要恢复终端
    install_panic_hook();
    let result = match setup_terminal() {
        Ok(mut terminal) => run_app(&mut terminal, &mut app),
        Err(e) => Err(e),
    };
    let result = finish(result, restore_terminal());

    // 列表不落盘，退出时只打印本次统计
    let summary = app.todos.summary();
    info!(
        total = summary.total,
        completed = summary.completed,
        "todo-screen exiting"
    );
    println!(
        "Total: {}  Completed: {}",
        summary.total, summary.completed
    );

    result
}

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// 恢复终端：所有步骤都会执行，返回第一个错误
fn restore_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    first_error([
        disable_raw_mode(),
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture),
        execute!(stdout, cursor::Show),
    ])
}

fn first_error<const N: usize>(results: [io::Result<()>; N]) -> io::Result<()> {
    results.into_iter().collect()
}

/// 主循环的错误优先于恢复终端时的错误
fn finish(result: Result<()>, restored: io::Result<()>) -> Result<()> {
    result?;
    Ok(restored?)
}

/// panic 时先恢复终端，再交给默认 hook 打印信息
fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}

fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        let event = event::read()?;
        if handle_event(app, &event) {
            debug!("quit requested");
            break;
        }
    }
    Ok(())
}
