use std::fmt;
use std::str::FromStr;

use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderStatus};

/// Rows per table page.
pub const PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn matches(self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("All"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") || s.eq_ignore_ascii_case("semua") {
            return Ok(StatusFilter::All);
        }
        s.parse::<OrderStatus>().map(StatusFilter::Only)
    }
}

/// Status filter plus free-text search, as set on the order table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQuery {
    pub filter: StatusFilter,
    pub search: String,
}

impl OrderQuery {
    pub fn new(filter: StatusFilter, search: &str) -> Self {
        Self {
            filter,
            search: search.to_string(),
        }
    }

    /// Case-insensitive match on the customer name or the item summary.
    pub fn matches(&self, order: &Order) -> bool {
        if !self.filter.matches(order.status) {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        order.customer_name.to_lowercase().contains(&needle)
            || order.item_summary().to_lowercase().contains(&needle)
    }

    /// Matching orders, in store order.
    pub fn apply<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        orders.iter().filter(|o| self.matches(o)).collect()
    }
}

/// `ceil(count / size)`; zero when there is nothing to show.
pub fn total_pages(count: usize, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    count.div_ceil(size)
}

/// Keeps a requested page inside `1..=total_pages` (page 1 when empty).
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.min(total_pages).max(1)
}

/// One page of the order table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderPage<'a> {
    pub items: Vec<&'a Order>,
    /// Page actually shown after clamping, 1-based.
    pub page: usize,
    pub total_pages: usize,
    /// Number of orders matching the query, across all pages.
    pub total: usize,
}

impl OrderPage<'_> {
    /// Row number of the first item, 1-based (0 on an empty page).
    pub fn first_row(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * PAGE_SIZE + 1
        }
    }

    /// Row number of the last item, 1-based.
    pub fn last_row(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_row() + self.items.len() - 1
        }
    }
}

/// Filters `orders` with `query` and cuts out page `page`, clamped.
pub fn paginate<'a>(orders: &'a [Order], query: &OrderQuery, page: usize) -> OrderPage<'a> {
    let matching = query.apply(orders);
    let total = matching.len();
    let total_pages = total_pages(total, PAGE_SIZE);
    let page = clamp_page(page, total_pages);

    let items = matching
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();

    OrderPage {
        items,
        page,
        total_pages,
        total,
    }
}
