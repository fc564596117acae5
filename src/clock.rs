//! Wall clock shown in the dashboard header.
//!
//! Readings follow the `id-ID` locale: `14.30.05` for the time and
//! `Sabtu, 13 Desember 2025` for the date.

use std::time::Duration;

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Weekday};
use log::debug;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

pub const TICK: Duration = Duration::from_secs(1);

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClockReading {
    pub time: String,
    pub date: String,
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jumat",
        Weekday::Sat => "Sabtu",
        Weekday::Sun => "Minggu",
    }
}

impl ClockReading {
    pub fn at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let time = format!("{:02}.{:02}.{:02}", now.hour(), now.minute(), now.second());
        let date = format!(
            "{}, {} {} {}",
            weekday_name(now.weekday()),
            now.day(),
            MONTHS[now.month0() as usize],
            now.year()
        );
        Self { time, date }
    }

    pub fn now() -> Self {
        Self::at(&Local::now())
    }
}

/// Background task refreshing a [`ClockReading`] every tick.
///
/// The first reading is published as soon as the ticker starts. Dropping the
/// ticker aborts the task; [`ClockTicker::stop`] also waits for it to finish.
pub struct ClockTicker {
    readings: watch::Receiver<ClockReading>,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl ClockTicker {
    /// Must be called inside a tokio runtime.
    pub fn start(period: Duration) -> Self {
        let (tx, rx) = watch::channel(ClockReading::now());
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let handle = tokio::spawn(async move {
            let mut ticks = interval(period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = ticks.tick() => {
                        if tx.send(ClockReading::now()).is_err() {
                            break;
                        }
                    }
                    _ = &mut shutdown_rx => break,
                }
            }
            debug!("Clock ticker stopped");
        });

        Self {
            readings: rx,
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    pub fn current(&self) -> ClockReading {
        self.readings.borrow().clone()
    }

    /// A receiver that observes every refresh.
    pub fn subscribe(&self) -> watch::Receiver<ClockReading> {
        self.readings.clone()
    }

    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
