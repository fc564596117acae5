use std::path::PathBuf;
use std::str::FromStr;

use crate::application::order_query::StatusFilter;
use crate::domain::order::OrderStatus;
use crate::errors::AppError;

/// One line typed at the dashboard prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Filter(StatusFilter),
    /// An empty query clears the search.
    Search(String),
    Page(usize),
    Next,
    Prev,
    SetStatus { id: u32, status: OrderStatus },
    View(u32),
    Print { id: u32, path: Option<PathBuf> },
    Menu,
    Revenue,
    Help,
    Quit,
}

fn parse_id(raw: Option<&str>) -> Result<u32, AppError> {
    let raw = raw.ok_or_else(|| AppError::InvalidCommand("missing order id".into()))?;
    raw.trim_start_matches('#')
        .parse::<u32>()
        .map_err(|_| AppError::InvalidCommand(format!("'{}' is not an order id", raw)))
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let mut args = rest.split_whitespace();

        let command = match word.to_ascii_lowercase().as_str() {
            "" | "list" | "ls" => Command::List,
            "filter" => {
                let raw = args
                    .next()
                    .ok_or_else(|| AppError::InvalidCommand("filter needs all, new or done".into()))?;
                Command::Filter(raw.parse()?)
            }
            "search" | "cari" => Command::Search(rest.to_string()),
            "page" => {
                let raw = args
                    .next()
                    .ok_or_else(|| AppError::InvalidCommand("missing page number".into()))?;
                let page = raw
                    .parse::<usize>()
                    .map_err(|_| AppError::InvalidCommand(format!("'{}' is not a page number", raw)))?;
                Command::Page(page)
            }
            "next" | "n" => Command::Next,
            "prev" | "p" => Command::Prev,
            "status" => {
                let id = parse_id(args.next())?;
                let raw = args
                    .next()
                    .ok_or_else(|| AppError::InvalidCommand("status needs new or done".into()))?;
                Command::SetStatus {
                    id,
                    status: raw.parse()?,
                }
            }
            "done" | "selesai" => Command::SetStatus {
                id: parse_id(args.next())?,
                status: OrderStatus::Done,
            },
            "view" | "lihat" => Command::View(parse_id(args.next())?),
            "print" | "cetak" => Command::Print {
                id: parse_id(args.next())?,
                path: args.next().map(PathBuf::from),
            },
            "menu" | "orders" => Command::Menu,
            "revenue" | "pendapatan" => Command::Revenue,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => {
                return Err(AppError::InvalidCommand(format!("unknown command '{}'", other)))
            }
        };

        if let Some(extra) = args.next() {
            if !matches!(command, Command::Search(_)) {
                return Err(AppError::InvalidCommand(format!(
                    "unexpected argument '{}'",
                    extra
                )));
            }
        }
        Ok(command)
    }
}

pub const HELP: &str = "\
Perintah:
  list                    tampilkan tabel pesanan
  filter all|new|done     saring berdasarkan status
  search <teks>           cari nama pelanggan atau menu (kosong = hapus)
  page <n> | next | prev  pindah halaman
  status <id> new|done    ubah status pesanan
  done <id>               tandai pesanan selesai
  view <id>               detail pesanan
  print <id> [file]       simpan struk pesanan
  menu                    ringkasan menu hari ini
  revenue                 statistik pendapatan
  quit                    keluar";
