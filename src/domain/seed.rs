//! Sample data used when nothing has been persisted yet.

use super::order::{MenuItem, Order, OrderStatus};

/// The single business day the dashboard covers.
pub const SEED_DATE: &str = "13 Des 2025";

/// Revenue of the days before [`SEED_DATE`] in the same month, in Rupiah.
pub const DAILY_REVENUE_HISTORY: [(&str, u64); 12] = [
    ("1 Des", 850_000),
    ("2 Des", 920_000),
    ("3 Des", 1_100_000),
    ("4 Des", 780_000),
    ("5 Des", 950_000),
    ("6 Des", 1_050_000),
    ("7 Des", 1_200_000),
    ("8 Des", 890_000),
    ("9 Des", 1_150_000),
    ("10 Des", 1_080_000),
    ("11 Des", 970_000),
    ("12 Des", 1_300_000),
];

pub const TODAY_LABEL: &str = "13 Des";

fn order(
    id: u32,
    items: Vec<MenuItem>,
    time: &str,
    customer: &str,
    status: OrderStatus,
) -> Order {
    Order {
        id,
        items,
        time_label: time.to_string(),
        date_label: SEED_DATE.to_string(),
        customer_name: customer.to_string(),
        status,
    }
}

pub fn seed_orders() -> Vec<Order> {
    use OrderStatus::{Done, New};

    vec![
        order(
            1,
            vec![
                MenuItem::new("Bakso Urat", 2, 18000, "🍜"),
                MenuItem::new("Es Teh", 1, 5000, "🧊"),
            ],
            "14:30",
            "Budi Santoso",
            New,
        ),
        order(
            2,
            vec![
                MenuItem::new("Bakso Spesial", 1, 25000, "🍜"),
                MenuItem::new("Jeruk Panas", 1, 8000, "🍊"),
            ],
            "14:25",
            "Siti Aminah",
            New,
        ),
        order(
            3,
            vec![
                MenuItem::new("Bakso Biasa", 3, 15000, "🍜"),
                MenuItem::new("Es Jeruk", 2, 7000, "🍹"),
            ],
            "14:15",
            "Ahmad Rizki",
            Done,
        ),
        order(
            4,
            vec![
                MenuItem::new("Bakso Mercon", 1, 20000, "🍜"),
                MenuItem::new("Teh Hangat", 1, 5000, "☕"),
            ],
            "14:10",
            "Dewi Lestari",
            New,
        ),
        order(
            5,
            vec![
                MenuItem::new("Bakso Biasa", 2, 15000, "🍜"),
                MenuItem::new("Mie Bakso", 1, 17000, "🍝"),
            ],
            "14:05",
            "Eko Prasetyo",
            Done,
        ),
        order(
            6,
            vec![
                MenuItem::new("Bakso Jumbo", 1, 30000, "🍜"),
                MenuItem::new("Es Teh", 2, 5000, "🧊"),
            ],
            "13:55",
            "Rina Wijaya",
            Done,
        ),
        order(
            7,
            vec![
                MenuItem::new("Bakso Urat", 2, 18000, "🍜"),
                MenuItem::new("Jeruk Dingin", 1, 8000, "🍊"),
            ],
            "13:50",
            "Fajar Nugroho",
            New,
        ),
        order(
            8,
            vec![
                MenuItem::new("Bakso Spesial", 1, 25000, "🍜"),
                MenuItem::new("Teh Manis", 1, 5000, "☕"),
            ],
            "13:45",
            "Linda Sari",
            Done,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::validate_orders;

    #[test]
    fn seed_is_valid_and_sequential() {
        let orders = seed_orders();
        validate_orders(&orders).expect("seed must be valid");
        let ids: Vec<u32> = orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn seed_mixes_statuses() {
        let orders = seed_orders();
        let new = orders.iter().filter(|o| o.status == OrderStatus::New).count();
        assert_eq!(new, 4);
        assert_eq!(orders.len() - new, 4);
    }
}
