//! Tests for TreeService

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use arbor::application::services::TreeService;
use arbor::application::ApplicationError;
use arbor::config::{DisplayConfig, Settings};
use arbor::domain::{ItemKind, PriceTable, MAX_INDENT};
use arbor::util::testing;

fn trees_dir() -> PathBuf {
    PathBuf::from("tests/resources/trees")
}

fn default_service() -> TreeService {
    TreeService::new(Arc::new(Settings::default()))
}

#[test]
fn given_file_system_definition_when_rendering_then_matches_display_contract() {
    testing::init_test_setup();
    let service = default_service();

    let tree = service.load(&trees_dir().join("filesystem.toml")).unwrap();
    let lines = service.render(&tree, 0);

    assert_eq!(lines, tree.display(0));
    assert_eq!(lines[0], " Root");
    assert_eq!(lines[4], "---- Image.jpg");
}

#[test]
fn given_custom_display_settings_when_rendering_then_uses_them() {
    let settings = Settings {
        display: DisplayConfig {
            indent_step: 3,
            marker: ".".into(),
        },
        ..Settings::default()
    };
    let service = TreeService::new(Arc::new(settings));

    let tree = service.load(&trees_dir().join("filesystem.toml")).unwrap();
    let lines = service.render(&tree, 0);

    assert_eq!(lines[1], "... Documents");
    assert_eq!(lines[2], "...... Text.txt");
}

#[test]
fn given_airport_definition_when_pricing_then_total_is_110() {
    let service = default_service();

    let tree = service.load(&trees_dir().join("airport.toml")).unwrap();

    assert_eq!(service.price(&tree), 110);
}

#[test]
fn given_custom_price_table_when_pricing_then_uses_it() {
    let settings = Settings {
        pricing: PriceTable {
            plane: 250,
            bus: 20,
            plain: 0,
            container: 1,
        },
        ..Settings::default()
    };
    let service = TreeService::new(Arc::new(settings));

    let tree = service.load(&trees_dir().join("fleet.toml")).unwrap();

    assert_eq!(service.price(&tree), 2 * 250 + 20 + 1);
}

#[test]
fn given_fleet_when_computing_stats_then_counts_match() {
    let service = default_service();
    let tree = service.load(&trees_dir().join("fleet.toml")).unwrap();

    let stats = service.stats(&tree);

    assert_eq!(stats.nodes, 4);
    assert_eq!(stats.depth, 2);
    assert_eq!(stats.containers, 1);
    assert_eq!(stats.leaves, 3);
    assert_eq!(stats.by_kind.get(&ItemKind::Plane), Some(&2));
    assert_eq!(stats.by_kind.get(&ItemKind::Bus), Some(&1));
    assert_eq!(stats.by_kind.get(&ItemKind::Plain), None);
}

#[test]
fn given_missing_file_when_loading_then_file_not_found() {
    let service = default_service();

    let result = service.load(Path::new("/nonexistent/tree.toml"));

    assert!(matches!(result, Err(ApplicationError::FileNotFound(_))));
}

#[test]
fn given_invalid_definition_when_loading_then_domain_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    std::fs::write(&path, "[root]\nname = \"x\"\nkind = \"plane\"\nchildren = []\n").unwrap();

    let result = default_service().load(&path);

    assert!(matches!(result, Err(ApplicationError::Domain(_))));
}

#[test]
fn given_price_near_u64_max_when_pricing_then_total_saturates() {
    let settings = Settings {
        pricing: PriceTable {
            plane: u64::MAX / 2 + 1,
            ..PriceTable::default()
        },
        ..Settings::default()
    };
    let service = TreeService::new(Arc::new(settings));
    let tree = service.load(&trees_dir().join("fleet.toml")).unwrap();

    assert_eq!(service.price(&tree), u64::MAX);
}

#[test]
fn given_huge_indent_step_when_rendering_then_indent_is_capped() {
    let settings = Settings {
        display: DisplayConfig {
            indent_step: usize::MAX,
            marker: "-".into(),
        },
        ..Settings::default()
    };
    let service = TreeService::new(Arc::new(settings));
    let tree = service.load(&trees_dir().join("filesystem.toml")).unwrap();

    let lines = service.render(&tree, 1);

    assert_eq!(lines[0], "- Root");
    assert_eq!(lines[1], format!("{} Documents", "-".repeat(MAX_INDENT)));
}
