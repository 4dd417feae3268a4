use blackjack_rs::agents::StrategyAgent;
use blackjack_rs::game::{ActionError, Command, Game, TableConfig, TableEvent, TurnView};
use blackjack_rs::session::{CommandSource, EventSink, Session, SessionSummary};
use blackjack_rs::tui::logger::LogBuffer;
use blackjack_rs::tui::{app::AppState, controller};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::LevelFilter;
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout, Write};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(author, version, about = "Single-player blackjack in the terminal", long_about = None)]
struct Args {
    /// Chips at the start of the session
    #[arg(long, default_value_t = 100)]
    bankroll: u64,

    /// Fixed wager taken at the start of every round
    #[arg(long, default_value_t = 10)]
    bet: u64,

    /// Seed for a repeatable shuffle
    #[arg(long)]
    seed: Option<u64>,

    /// Line-by-line output instead of the full-screen table
    #[arg(long, default_value_t = false)]
    plain: bool,

    /// Let the basic-strategy agent play this many rounds headless
    #[arg(long, value_name = "ROUNDS")]
    simulate: Option<usize>,

    /// Lowest log level captured
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    /// Print captured log records to stderr on exit
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Args {
    fn table_config(&self) -> TableConfig {
        let config = TableConfig::default().with_bankroll(self.bankroll).with_bet(self.bet);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

/// Owns the full-screen terminal; leaving the alternate screen happens on drop.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = crossterm::execute!(
            self.terminal.backend_mut(),
            crossterm::terminal::LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Raw mode for single-key reads without taking over the screen.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

// Raw mode does not translate "\n", so every line ends in "\r\n".
fn say(line: impl std::fmt::Display) {
    let mut out = io::stdout();
    let _ = write!(out, "{line}\r\n");
    let _ = out.flush();
}

/// Reads one keystroke per decision.
struct KeyPrompt;

impl KeyPrompt {
    fn read_key(&self) -> io::Result<(KeyCode, KeyModifiers)> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok((key.code, key.modifiers));
                }
            }
        }
    }
}

impl CommandSource for KeyPrompt {
    fn next_command(&mut self, view: &TurnView<'_>) -> Command {
        let mut options = vec!["[H]it", "[S]tand"];
        if view.can_double {
            options.push("[D]ouble");
        }
        if view.can_split {
            options.push("s[P]lit");
        }
        options.extend(["[T] hint", "[Q]uit"]);
        say(format_args!(
            "Hand {}/{}: {} ({}) vs {} | {}",
            view.index + 1,
            view.hand_count,
            view.hand,
            view.hand.value(),
            view.upcard.short(),
            options.join(" ")
        ));
        match self.read_key() {
            Ok((KeyCode::Char('c'), m)) if m.contains(KeyModifiers::CONTROL) => Command::Cancel,
            Ok((code, _)) => match code {
                KeyCode::Char('h') | KeyCode::Char('H') => Command::Hit,
                KeyCode::Char('s') | KeyCode::Char('S') => Command::Stand,
                KeyCode::Char('d') | KeyCode::Char('D') => Command::Double,
                KeyCode::Char('p') | KeyCode::Char('P') => Command::Split,
                KeyCode::Char('t') | KeyCode::Char('T') => Command::ShowHint,
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Cancel,
                _ => Command::Invalid,
            },
            Err(e) => {
                log::warn!("reading input failed: {e}");
                Command::Cancel
            }
        }
    }
}

/// Prints every table event on its own line.
struct LinePrinter;

impl EventSink for LinePrinter {
    fn event(&mut self, event: &TableEvent) {
        if matches!(event, TableEvent::RoundStarted { .. }) {
            say("");
        }
        say(event);
    }

    fn rejected(&mut self, error: &ActionError) {
        say(format_args!("  ! {error}"));
    }
}

/// Headless runs only report how each round ended.
struct SettlementPrinter;

impl EventSink for SettlementPrinter {
    fn event(&mut self, event: &TableEvent) {
        if matches!(event, TableEvent::Settled { .. } | TableEvent::SessionEnded { .. }) {
            println!("{event}");
        }
    }
}

fn print_summary(summary: &SessionSummary) {
    println!("Session over ({}) after {} rounds.", summary.end.label(), summary.rounds);
}

fn run_tui(config: TableConfig, logs: LogBuffer) -> io::Result<u64> {
    let mut app = AppState::new(config).with_logs(logs);
    let mut guard = TerminalGuard::acquire()?;
    controller::run(&mut guard.terminal, &mut app, Duration::from_millis(250))?;
    drop(guard);
    Ok(app.game.balance())
}

fn run_plain(config: TableConfig) -> Result<SessionSummary, Box<dyn std::error::Error>> {
    let mut session = Session::new(Game::new(config));
    let _raw = RawModeGuard::acquire()?;
    say("blackjack-rs: H hit, S stand, D double, P split, T hint, Q quit");
    Ok(session.run(&mut KeyPrompt, &mut LinePrinter)?)
}

fn run_simulation(
    config: TableConfig,
    rounds: usize,
) -> Result<SessionSummary, Box<dyn std::error::Error>> {
    let mut session = Session::new(Game::new(config)).with_round_limit(rounds);
    let mut agent = StrategyAgent::new();
    let summary = session.run(&mut agent, &mut SettlementPrinter)?;
    log::info!("strategy agent made {} decisions", agent.decisions());
    Ok(summary)
}

fn dump_logs(logs: &LogBuffer) {
    for line in logs.drain() {
        eprintln!("{line}");
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = args.table_config();
    if let Err(e) = config.validate() {
        eprintln!("invalid table settings: {e}");
        return ExitCode::FAILURE;
    }

    let logs = LogBuffer::default();
    if let Err(e) = logs.install(args.log_level) {
        eprintln!("logger unavailable: {e}");
    }

    let result: Result<u64, Box<dyn std::error::Error>> = if let Some(rounds) = args.simulate {
        run_simulation(config, rounds).map(|summary| {
            print_summary(&summary);
            summary.final_balance
        })
    } else if args.plain || !io::stdout().is_terminal() {
        run_plain(config).map(|summary| {
            print_summary(&summary);
            summary.final_balance
        })
    } else {
        run_tui(config, logs.clone()).map_err(Into::into)
    };

    if args.verbose {
        dump_logs(&logs);
    }
    match result {
        Ok(balance) => {
            println!("Final balance: {balance}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("blackjack-rs: {e}");
            ExitCode::FAILURE
        }
    }
}
