//! Plain-text views of the dashboard.

use std::fmt;

use crate::application::order_query::{OrderPage, OrderQuery};
use crate::application::revenue::RevenueReport;
use crate::clock::ClockReading;
use crate::domain::order::{MenuSummaryItem, Order};

pub const STALL_NAME: &str = "Pondok Bakso Mas Tris";

/// `Rp 41.000`: whole Rupiah, `.` between thousands.
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("Rp {}", grouped)
}

// Icons are double-width, so they always go after the padded columns.
fn icons(order: &Order) -> String {
    order.items.iter().map(|item| item.icon.as_str()).collect()
}

pub struct Header<'a> {
    pub clock: &'a ClockReading,
}

impl fmt::Display for Header<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🍜 {} | Dashboard Pesanan", STALL_NAME)?;
        write!(f, "{}", ClockLine { clock: self.clock })
    }
}

/// Second line of the header.
pub struct ClockLine<'a> {
    pub clock: &'a ClockReading,
}

impl fmt::Display for ClockLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "🕒 {}  {}", self.clock.date, self.clock.time)
    }
}

/// Terminal sequence that rewrites the header clock in place and puts the
/// cursor back where the prompt left it.
pub fn clock_repaint(clock: &ClockReading) -> String {
    format!("\x1B7\x1B[2;1H\x1B[2K{}\x1B8", ClockLine { clock })
}

pub struct StatCards {
    pub total_orders: usize,
    pub total_revenue: u64,
}

impl fmt::Display for StatCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "📦 Total Pesanan Hari Ini: {:<6} (menu: ringkasan)",
            self.total_orders
        )?;
        write!(
            f,
            "💰 Pendapatan Hari Ini:    {} (revenue: statistik)",
            format_rupiah(self.total_revenue)
        )
    }
}

pub struct OrderTable<'a> {
    pub page: &'a OrderPage<'a>,
    pub query: &'a OrderQuery,
}

impl fmt::Display for OrderTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Riwayat Pesanan Masuk  [Filter: {}]", self.query.filter)?;
        if !self.query.search.is_empty() {
            write!(f, " [Cari: {}]", self.query.search)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:<4}{:<5}{:<40}{:<20}{:<18}{}",
            "No", "ID", "Pesanan", "Waktu & Tgl", "Nama Pelanggan", "Status"
        )?;

        if self.page.items.is_empty() {
            return write!(f, "Tidak ada pesanan ditemukan");
        }

        for (offset, order) in self.page.items.iter().enumerate() {
            writeln!(
                f,
                "{:<4}{:<5}{:<40}{:<20}{:<18}{:<9}{}",
                self.page.first_row() + offset,
                format!("#{}", order.id),
                order.item_summary(),
                format!("{} {}", order.time_label, order.date_label),
                order.customer_name,
                order.status.label(),
                icons(order)
            )?;
        }

        if self.page.total_pages > 1 {
            write!(
                f,
                "Menampilkan {} - {} dari {} pesanan | Halaman {}/{}",
                self.page.first_row(),
                self.page.last_row(),
                self.page.total,
                self.page.page,
                self.page.total_pages
            )
        } else {
            write!(f, "{} pesanan", self.page.total)
        }
    }
}

/// The detail view of one order; also the body of its receipt.
pub struct OrderDetail<'a> {
    pub order: &'a Order,
}

impl fmt::Display for OrderDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = self.order;
        writeln!(f, "Detail Pesanan #{}", order.id)?;
        writeln!(f, "{} - {}", order.date_label, order.time_label)?;
        writeln!(f, "Nama Pelanggan: {}", order.customer_name)?;
        writeln!(f, "Status: {}", order.status)?;
        writeln!(f)?;
        writeln!(f, "Daftar Menu")?;
        for item in &order.items {
            writeln!(
                f,
                "  {:<18} {} x {:<12} {:>12}  {}",
                item.name,
                item.quantity,
                format_rupiah(item.unit_price),
                format_rupiah(item.line_total()),
                item.icon
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Subtotal {:>40}", format_rupiah(order.subtotal()))?;
        write!(f, "Total    {:>40}", format_rupiah(order.subtotal()))
    }
}

pub struct Receipt<'a> {
    pub order: &'a Order,
}

impl fmt::Display for Receipt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", STALL_NAME)?;
        writeln!(f, "STRUK PESANAN")?;
        writeln!(f, "{}", "=".repeat(49))?;
        writeln!(f, "{}", OrderDetail { order: self.order })?;
        writeln!(f, "{}", "=".repeat(49))?;
        writeln!(f, "Terima kasih!")
    }
}

pub struct MenuSummaryView<'a> {
    pub items: &'a [MenuSummaryItem],
    pub items_sold: u64,
    pub total_revenue: u64,
}

impl fmt::Display for MenuSummaryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ringkasan Menu Hari Ini")?;
        writeln!(f, "Total {} item terjual", self.items_sold)?;
        writeln!(f, "Total pendapatan: {}", format_rupiah(self.total_revenue))?;
        writeln!(f)?;
        for (i, item) in self.items.iter().enumerate() {
            let average = item
                .average_price()
                .map(format_rupiah)
                .unwrap_or_else(|| "-".to_string());
            let line = format!(
                "{:>2}. {:<16} {:>3} porsi terjual {:>14}  @ {:<12} {}",
                i + 1,
                item.name,
                item.total_quantity,
                format_rupiah(item.total_revenue),
                average,
                item.icon
            );
            if i + 1 == self.items.len() {
                write!(f, "{}", line)?;
            } else {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

pub struct RevenueView<'a> {
    pub report: &'a RevenueReport,
}

impl fmt::Display for RevenueView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        let or_dash = |v: Option<u64>| v.map(format_rupiah).unwrap_or_else(|| "-".to_string());

        writeln!(f, "Statistik Pendapatan")?;
        writeln!(f, "Pendapatan hari ini: {}", format_rupiah(report.today))?;
        writeln!(f, "Total bulan ini:     {}", format_rupiah(report.total()))?;
        writeln!(f, "Rata-rata per hari:  {}", or_dash(report.average()))?;
        writeln!(f, "Tertinggi:           {}", or_dash(report.highest()))?;
        writeln!(f, "Terendah:            {}", or_dash(report.lowest()))?;
        writeln!(f)?;
        write!(f, "Rincian Harian")?;
        for day in report.newest_first() {
            write!(f, "\n  {:<8} {:>14}", day.label, format_rupiah(day.revenue))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::order_query::{paginate, StatusFilter};
    use crate::domain::order::OrderStatus;
    use crate::domain::seed::seed_orders;

    #[test]
    fn rupiah_groups_thousands_with_dots() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(500), "Rp 500");
        assert_eq!(format_rupiah(5000), "Rp 5.000");
        assert_eq!(format_rupiah(41000), "Rp 41.000");
        assert_eq!(format_rupiah(319_000), "Rp 319.000");
        assert_eq!(format_rupiah(12_559_000), "Rp 12.559.000");
    }

    #[test]
    fn table_shows_rows_and_pager() {
        let orders = seed_orders();
        let query = OrderQuery::default();
        let page = paginate(&orders, &query, 2);
        let text = OrderTable {
            page: &page,
            query: &query,
        }
        .to_string();

        assert!(text.contains("Fajar Nugroho"));
        assert!(!text.contains("Budi Santoso"));
        assert!(text.contains("Menampilkan 6 - 8 dari 8 pesanan | Halaman 2/2"));
    }

    #[test]
    fn table_columns_line_up_whatever_the_icons() {
        let orders = seed_orders();
        let query = OrderQuery::default();
        let page = paginate(&orders, &query, 1);
        let text = OrderTable {
            page: &page,
            query: &query,
        }
        .to_string();

        let mut lines = text.lines().skip(1);
        let header = lines.next().unwrap();
        let column = header.find("Status").unwrap();
        for row in lines.take(page.items.len()) {
            let status = &row[column..];
            assert!(
                status.starts_with("Baru") || status.starts_with("Selesai"),
                "misaligned row: {}",
                row
            );
        }
    }

    #[test]
    fn detail_rows_start_with_padded_names() {
        let orders = seed_orders();
        let text = OrderDetail { order: &orders[0] }.to_string();
        let rows: Vec<&str> = text.lines().filter(|l| l.contains(" x Rp")).collect();
        assert_eq!(rows.len(), 2);
        let column = rows[0].find(" x Rp").unwrap();
        assert!(rows.iter().all(|row| row.find(" x Rp") == Some(column)));
    }

    #[test]
    fn clock_repaint_rewrites_second_row_only() {
        let clock = ClockReading {
            time: "14.30.05".into(),
            date: "Sabtu, 13 Desember 2025".into(),
        };
        let seq = clock_repaint(&clock);
        assert!(seq.starts_with("\x1B7\x1B[2;1H\x1B[2K"));
        assert!(seq.contains("Sabtu, 13 Desember 2025  14.30.05"));
        assert!(seq.ends_with("\x1B8"));
        assert!(!seq.contains(STALL_NAME));
    }

    #[test]
    fn empty_table_says_nothing_found() {
        let orders = seed_orders();
        let query = OrderQuery::new(StatusFilter::Only(OrderStatus::Done), "Budi");
        let page = paginate(&orders, &query, 1);
        let text = OrderTable {
            page: &page,
            query: &query,
        }
        .to_string();
        assert!(text.contains("Tidak ada pesanan ditemukan"));
        assert!(text.contains("[Cari: Budi]"));
    }

    #[test]
    fn detail_lists_lines_and_total() {
        let orders = seed_orders();
        let text = OrderDetail { order: &orders[0] }.to_string();
        assert!(text.contains("Detail Pesanan #1"));
        assert!(text.contains("13 Des 2025 - 14:30"));
        assert!(text.contains("2 x Rp 18.000"));
        assert!(text.contains("Rp 36.000"));
        assert!(text.ends_with("Rp 41.000"));
    }

    #[test]
    fn menu_summary_shows_average_or_dash() {
        let items = vec![
            MenuSummaryItem {
                name: "Bakso Biasa".into(),
                icon: "🍜".into(),
                total_quantity: 5,
                total_revenue: 75_000,
            },
            MenuSummaryItem {
                name: "Kerupuk".into(),
                icon: "🍘".into(),
                total_quantity: 0,
                total_revenue: 0,
            },
        ];
        let text = MenuSummaryView {
            items: &items,
            items_sold: 5,
            total_revenue: 75_000,
        }
        .to_string();
        assert!(text.contains("Total 5 item terjual"));
        assert!(text.contains("@ Rp 15.000"));
        assert!(text.lines().last().unwrap().contains("@ -  "));
    }

    #[test]
    fn revenue_lists_today_first() {
        let report = RevenueReport::for_today(319_000);
        let text = RevenueView { report: &report }.to_string();
        let breakdown = text.split("Rincian Harian").nth(1).unwrap();
        assert!(breakdown.trim_start().starts_with("13 Des"));
        let highest = text.lines().find(|l| l.starts_with("Tertinggi")).unwrap();
        assert!(highest.ends_with("Rp 1.300.000"));
    }
}
