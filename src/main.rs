use std::io::Write;

use bakso_dashboard::clock::ClockTicker;
use bakso_dashboard::config::Config;
use bakso_dashboard::clock::ClockReading;
use bakso_dashboard::dashboard::render::clock_repaint;
use bakso_dashboard::dashboard::{DashboardSession, Outcome};
use bakso_dashboard::errors::AppError;
use bakso_dashboard::open_store;
use dotenvy::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};

fn draw(screen: &str) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    // Move cursor to top-left and clear screen
    write!(out, "\x1B[H\x1B[0J{}\n\n> ", screen)?;
    out.flush()
}

fn redraw_clock(clock: &ClockReading) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    write!(out, "{}", clock_repaint(clock))?;
    out.flush()
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env()?;
    let store = open_store(&config)?;
    log::info!(
        "Dashboard ready with {} orders in slot '{}'",
        store.total_orders(),
        store.key()
    );

    let mut session = DashboardSession::new(store, config.export_dir.clone());
    let ticker = ClockTicker::start(config.clock_tick);

    draw(&session.screen(&ticker.current(), &session.overview()))?;

    let mut clock_rx = ticker.subscribe();
    let mut clock_live = true;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match session.handle_line(&line) {
                    Outcome::Show(body) => draw(&session.screen(&ticker.current(), &body))?,
                    Outcome::Quit => break,
                }
            }
            changed = clock_rx.changed(), if clock_live => {
                if changed.is_err() {
                    log::warn!("Clock ticker ended; header clock no longer updates");
                    clock_live = false;
                    continue;
                }
                let reading = clock_rx.borrow_and_update().clone();
                redraw_clock(&reading)?;
            }
        }
    }

    ticker.stop().await;
    log::info!("Dashboard closed");
    Ok(())
}
