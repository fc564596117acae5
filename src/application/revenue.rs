use crate::domain::seed::{DAILY_REVENUE_HISTORY, TODAY_LABEL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRevenue {
    pub label: String,
    pub revenue: u64,
}

/// Month-to-date revenue, with today's figure taken live from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevenueReport {
    /// Oldest day first; today is the last entry.
    pub days: Vec<DailyRevenue>,
    pub today: u64,
}

impl RevenueReport {
    pub fn new(history: &[(&str, u64)], today_label: &str, today: u64) -> Self {
        let mut days: Vec<DailyRevenue> = history
            .iter()
            .map(|(label, revenue)| DailyRevenue {
                label: label.to_string(),
                revenue: *revenue,
            })
            .collect();
        days.push(DailyRevenue {
            label: today_label.to_string(),
            revenue: today,
        });
        Self { days, today }
    }

    /// Report over the stall's fixed history for the month.
    pub fn for_today(today: u64) -> Self {
        Self::new(&DAILY_REVENUE_HISTORY, TODAY_LABEL, today)
    }

    pub fn total(&self) -> u64 {
        self.days.iter().map(|d| d.revenue).sum()
    }

    /// Mean daily revenue rounded half up, `None` without any day.
    pub fn average(&self) -> Option<u64> {
        let n = self.days.len() as u64;
        (self.total() + n / 2).checked_div(n)
    }

    pub fn highest(&self) -> Option<u64> {
        self.days.iter().map(|d| d.revenue).max()
    }

    pub fn lowest(&self) -> Option<u64> {
        self.days.iter().map(|d| d.revenue).min()
    }

    /// Days newest first, as listed in the breakdown.
    pub fn newest_first(&self) -> impl Iterator<Item = &DailyRevenue> {
        self.days.iter().rev()
    }
}
