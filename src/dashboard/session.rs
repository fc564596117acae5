use std::fs;
use std::path::PathBuf;

use log::{error, info};

use super::command::{Command, HELP};
use super::render::{
    Header, MenuSummaryView, OrderDetail, OrderTable, Receipt, RevenueView, StatCards,
};
use crate::application::order_query::{paginate, OrderPage, OrderQuery, StatusFilter};
use crate::application::order_store::OrderStore;
use crate::application::revenue::RevenueReport;
use crate::clock::ClockReading;
use crate::domain::errors::DomainError;
use crate::domain::order::Order;
use crate::domain::ports::SlotStorage;
use crate::errors::AppError;

/// What the dashboard shows after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Show(String),
    Quit,
}

/// Table state of one dashboard: the store it was handed plus the current
/// filter, search text and page.
pub struct DashboardSession<S> {
    store: OrderStore<S>,
    query: OrderQuery,
    page: usize,
    export_dir: PathBuf,
}

impl<S: SlotStorage> DashboardSession<S> {
    pub fn new(store: OrderStore<S>, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            query: OrderQuery::default(),
            page: 1,
            export_dir: export_dir.into(),
        }
    }

    pub fn store(&self) -> &OrderStore<S> {
        &self.store
    }

    pub fn query(&self) -> &OrderQuery {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// The table page currently on screen.
    pub fn visible_page(&self) -> OrderPage<'_> {
        paginate(self.store.orders(), &self.query, self.page)
    }

    /// Pulls the page number back in range after the visible set changed.
    fn clamp_page(&mut self) {
        let page = self.visible_page().page;
        self.page = page;
    }

    fn order(&self, id: u32) -> Result<&Order, AppError> {
        self.store
            .order(id)
            .ok_or_else(|| DomainError::NotFound(id).into())
    }

    /// Stat cards followed by the order table.
    pub fn overview(&self) -> String {
        let page = self.visible_page();
        format!(
            "{}\n\n{}",
            StatCards {
                total_orders: self.store.total_orders(),
                total_revenue: self.store.total_revenue(),
            },
            OrderTable {
                page: &page,
                query: &self.query,
            }
        )
    }

    pub fn screen(&self, clock: &ClockReading, body: &str) -> String {
        format!("{}\n\n{}", Header { clock }, body)
    }

    pub fn handle(&mut self, command: Command) -> Result<Outcome, AppError> {
        let body = match command {
            Command::List => self.overview(),
            Command::Filter(filter) => {
                self.set_query(filter, self.query.search.clone());
                self.overview()
            }
            Command::Search(text) => {
                self.set_query(self.query.filter, text);
                self.overview()
            }
            Command::Page(page) => {
                self.page = page;
                self.clamp_page();
                self.overview()
            }
            Command::Next => {
                self.page += 1;
                self.clamp_page();
                self.overview()
            }
            Command::Prev => {
                self.page = self.page.saturating_sub(1);
                self.clamp_page();
                self.overview()
            }
            Command::SetStatus { id, status } => {
                self.store.update_status(id, status)?;
                self.clamp_page();
                format!("{}\n\nPesanan #{} -> {}", self.overview(), id, status)
            }
            Command::View(id) => OrderDetail { order: self.order(id)? }.to_string(),
            Command::Print { id, path } => {
                let written = self.export_receipt(id, path)?;
                format!(
                    "{}\n\nStruk disimpan ke {}",
                    OrderDetail { order: self.order(id)? },
                    written.display()
                )
            }
            Command::Menu => {
                let summary = self.store.menu_summary();
                MenuSummaryView {
                    items: &summary,
                    items_sold: self.store.total_items_sold(),
                    total_revenue: self.store.total_revenue(),
                }
                .to_string()
            }
            Command::Revenue => {
                let report = RevenueReport::for_today(self.store.total_revenue());
                RevenueView { report: &report }.to_string()
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Show(body))
    }

    /// Parses and runs one input line. Errors become a message under the
    /// table instead of ending the session.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        match line.parse::<Command>().and_then(|cmd| self.handle(cmd)) {
            Ok(outcome) => outcome,
            Err(e) => {
                if let AppError::Internal(_) = e {
                    error!("Command '{}' failed: {}", line.trim(), e);
                }
                Outcome::Show(format!("{}\n\n{}", self.overview(), e.user_message()))
            }
        }
    }

    fn set_query(&mut self, filter: StatusFilter, search: String) {
        self.query = OrderQuery::new(filter, search.trim());
        self.clamp_page();
    }

    /// Writes the receipt of order `id`, by default to
    /// `<export_dir>/struk-<id>.txt`, and returns the path written.
    pub fn export_receipt(&self, id: u32, path: Option<PathBuf>) -> Result<PathBuf, AppError> {
        let order = self.order(id)?;
        let path = match path {
            Some(path) => path,
            None => {
                fs::create_dir_all(&self.export_dir)?;
                self.export_dir.join(format!("struk-{}.txt", id))
            }
        };
        fs::write(&path, Receipt { order }.to_string())?;
        info!("Receipt for order {} written to {}", id, path.display());
        Ok(path)
    }
}
