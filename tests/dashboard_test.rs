//! Drives the dashboard through the public API against a file-backed slot,
//! the way the binary wires it.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use bakso_dashboard::config::{Config, StorageBackend};
use bakso_dashboard::dashboard::{DashboardSession, Outcome};
use bakso_dashboard::domain::order::OrderStatus;
use bakso_dashboard::open_store;
use uuid::Uuid;

struct TempDir(PathBuf);

impl TempDir {
    fn new() -> Self {
        Self(std::env::temp_dir().join(format!("bakso-e2e-{}", Uuid::new_v4())))
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn config(dir: &TempDir) -> Config {
    Config {
        storage_key: "bakso-orders".to_string(),
        backend: StorageBackend::File {
            dir: dir.0.join("data"),
        },
        export_dir: dir.0.join("struk"),
        clock_tick: Duration::from_secs(1),
    }
}

fn show(outcome: Outcome) -> String {
    match outcome {
        Outcome::Show(text) => text,
        Outcome::Quit => panic!("unexpected quit"),
    }
}

#[test]
fn first_start_seeds_the_slot_file() {
    let dir = TempDir::new();
    let cfg = config(&dir);

    let store = open_store(&cfg).expect("open failed");

    assert_eq!(store.total_orders(), 8);
    assert_eq!(store.total_revenue(), 319_000);
    assert_eq!(store.order(1).unwrap().subtotal(), 41_000);

    let raw = fs::read_to_string(dir.0.join("data/bakso-orders.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 8);
    assert_eq!(value[0]["status"], "Baru");
    assert_eq!(value[2]["status"], "Selesai");
}

#[test]
fn status_changes_survive_a_restart() {
    let dir = TempDir::new();
    let cfg = config(&dir);

    {
        let store = open_store(&cfg).expect("open failed");
        let mut session = DashboardSession::new(store, cfg.export_dir.clone());
        show(session.handle_line("done 1"));
        show(session.handle_line("status 3 new"));
    }

    let store = open_store(&cfg).expect("reopen failed");
    assert_eq!(store.order(1).unwrap().status, OrderStatus::Done);
    assert_eq!(store.order(3).unwrap().status, OrderStatus::New);
    assert_eq!(store.total_orders(), 8);
}

#[test]
fn corrupt_slot_file_falls_back_to_seed() {
    let dir = TempDir::new();
    let cfg = config(&dir);
    fs::create_dir_all(dir.0.join("data")).unwrap();
    fs::write(dir.0.join("data/bakso-orders.json"), "{ not json").unwrap();

    let store = open_store(&cfg).expect("corrupt data must not fail");
    assert_eq!(store.total_orders(), 8);
    assert_eq!(store.order(1).unwrap().status, OrderStatus::New);
}

#[test]
fn non_utf8_slot_file_falls_back_to_seed() {
    let dir = TempDir::new();
    let cfg = config(&dir);
    fs::create_dir_all(dir.0.join("data")).unwrap();
    fs::write(dir.0.join("data/bakso-orders.json"), [0xff, 0xfe, b'[', b']']).unwrap();

    let store = open_store(&cfg).expect("undecodable bytes must not fail");
    assert_eq!(store.total_orders(), 8);

    let raw = fs::read_to_string(dir.0.join("data/bakso-orders.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 8);
}

#[test]
fn receipt_lands_in_export_dir() {
    let dir = TempDir::new();
    let cfg = config(&dir);
    let store = open_store(&cfg).expect("open failed");
    let mut session = DashboardSession::new(store, cfg.export_dir.clone());

    let text = show(session.handle_line("print 8"));
    assert!(text.contains("Detail Pesanan #8"));

    let receipt = fs::read_to_string(dir.0.join("struk/struk-8.txt")).unwrap();
    assert!(receipt.contains("Linda Sari"));
    assert!(receipt.contains("Rp 30.000"));
}

#[test]
fn filtered_paging_walkthrough() {
    let dir = TempDir::new();
    let cfg = config(&dir);
    let store = open_store(&cfg).expect("open failed");
    let mut session = DashboardSession::new(store, cfg.export_dir.clone());

    let first = show(session.handle_line("list"));
    assert!(first.contains("Menampilkan 1 - 5 dari 8 pesanan | Halaman 1/2"));

    show(session.handle_line("page 9"));
    assert_eq!(session.page(), 2);

    show(session.handle_line("filter done"));
    assert_eq!(session.page(), 1);
    let ids: Vec<u32> = session.visible_page().items.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![3, 5, 6, 8]);

    assert_eq!(session.handle_line("quit"), Outcome::Quit);
}
