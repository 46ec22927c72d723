//! Terminal 2048 runner (default binary).
//!
//! Owns the menu/game screens, the session-best score and the win/lose
//! overlays; all rule decisions stay inside `core::GameEngine`, observed
//! through its listener interface.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use tui_2048::core::{GameEngine, GameListener};
use tui_2048::input::{handle_key_event, should_quit, Command};
use tui_2048::term::{GameView, Hud, TerminalRenderer, Viewport};
use tui_2048::types::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

#[derive(Debug, Clone, Copy)]
struct CliArgs {
    size: usize,
    seed: Option<u32>,
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut size = DEFAULT_BOARD_SIZE;
    let mut seed: Option<u32> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--size" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --size"))?;
                size = v
                    .parse::<usize>()
                    .map_err(|_| anyhow!("invalid --size value: {}", v))?;
                if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
                    return Err(anyhow!(
                        "--size must be between {} and {}",
                        MIN_BOARD_SIZE,
                        MAX_BOARD_SIZE
                    ));
                }
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(CliArgs { size, seed })
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

/// Engine notifications captured for the game loop to drain between frames.
#[derive(Debug, Default)]
struct EventLog {
    score: Option<u32>,
    won: bool,
    over: bool,
    achievements: Vec<u32>,
}

struct SessionListener {
    log: Rc<RefCell<EventLog>>,
}

impl GameListener for SessionListener {
    fn on_score_changed(&mut self, score: u32) {
        self.log.borrow_mut().score = Some(score);
    }
    fn on_game_won(&mut self) {
        self.log.borrow_mut().won = true;
    }
    fn on_game_over(&mut self) {
        self.log.borrow_mut().over = true;
    }
    fn on_first_time_achievement(&mut self, value: u32) {
        self.log.borrow_mut().achievements.push(value);
    }
}

fn new_engine(size: usize, seed: u32, log: &Rc<RefCell<EventLog>>) -> GameEngine {
    let mut engine = GameEngine::new(size, seed);
    engine.set_listener(Box::new(SessionListener { log: log.clone() }));
    engine
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    Game,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, cli);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, cli: CliArgs) -> Result<()> {
    let log = Rc::new(RefCell::new(EventLog::default()));
    let mut seed = cli.seed.unwrap_or_else(time_seed);
    let mut engine = new_engine(cli.size, seed, &log);
    let mut preview = engine.generate_preview_grid();
    let view = GameView::default();

    let mut screen = Screen::Menu;
    let mut best: u32 = 0;
    let mut won_acknowledged = false;
    let mut show_won = false;
    let mut show_over = false;
    let mut notice: Option<String> = None;

    loop {
        // Drain engine notifications since the last frame.
        {
            let mut log = log.borrow_mut();
            if let Some(score) = log.score.take() {
                best = best.max(score);
            }
            if log.won {
                log.won = false;
                if !won_acknowledged {
                    show_won = true;
                }
            }
            if log.over {
                log.over = false;
                show_over = true;
            }
            if let Some(value) = log.achievements.drain(..).last() {
                notice = Some(format!("FIRST {}!", value));
            }
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let fb = match screen {
            Screen::Menu => view.render_menu(&preview, viewport),
            Screen::Game => view.render(
                &engine,
                &Hud {
                    best,
                    notice: notice.as_deref(),
                    show_won,
                    show_over,
                },
                viewport,
            ),
        };
        term.draw(&fb)?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }

        match screen {
            Screen::Menu => match key.code {
                KeyCode::Char(c @ '3'..='8') => {
                    let size = (c as u8 - b'0') as usize;
                    if size != engine.size() {
                        seed = seed.wrapping_add(1);
                        engine = new_engine(size, seed, &log);
                    }
                    preview = engine.generate_preview_grid();
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    engine.init_game();
                    won_acknowledged = false;
                    show_won = false;
                    show_over = false;
                    notice = None;
                    screen = Screen::Game;
                }
                _ => {}
            },
            Screen::Game => {
                if show_won {
                    match key.code {
                        KeyCode::Enter => {
                            won_acknowledged = true;
                            show_won = false;
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') => {
                            engine.init_game();
                            won_acknowledged = false;
                            show_won = false;
                            show_over = false;
                            notice = None;
                        }
                        KeyCode::Char('m') | KeyCode::Char('M') => {
                            show_won = false;
                            preview = engine.generate_preview_grid();
                            screen = Screen::Menu;
                        }
                        _ => {}
                    }
                    continue;
                }

                match handle_key_event(key) {
                    Some(Command::Move(direction)) => {
                        if !show_over {
                            engine.apply_move(direction);
                        }
                    }
                    Some(Command::Undo) => {
                        if engine.undo() {
                            show_over = false;
                        } else {
                            notice = Some("NOTHING TO UNDO".to_string());
                        }
                    }
                    Some(Command::NewGame) => {
                        engine.init_game();
                        won_acknowledged = false;
                        show_won = false;
                        show_over = false;
                        notice = None;
                    }
                    Some(Command::Menu) => {
                        preview = engine.generate_preview_grid();
                        screen = Screen::Menu;
                    }
                    None => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args_defaults() {
        let cli = parse_args(&[]).unwrap();
        assert_eq!(cli.size, DEFAULT_BOARD_SIZE);
        assert!(cli.seed.is_none());
    }

    #[test]
    fn test_parse_args_size_and_seed() {
        let args = vec![
            "--size".to_string(),
            "6".to_string(),
            "--seed".to_string(),
            "42".to_string(),
        ];
        let cli = parse_args(&args).unwrap();
        assert_eq!(cli.size, 6);
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn test_parse_args_rejects_out_of_range_size() {
        assert!(parse_args(&["--size".to_string(), "2".to_string()]).is_err());
        assert!(parse_args(&["--size".to_string(), "9".to_string()]).is_err());
        assert!(parse_args(&["--size".to_string(), "x".to_string()]).is_err());
    }

    #[test]
    fn test_parse_args_rejects_unknown_flags() {
        assert!(parse_args(&["--bogus".to_string()]).is_err());
    }
}
