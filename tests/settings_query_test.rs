//! Settings flowing into lineage queries and rendering

use std::fs;

use tempfile::TempDir;

use vampires::config::{local_config_path, Settings};
use vampires::domain::{LineageBuilder, VampireArena};
use vampires::tree_traits::LineageTree;

fn coven() -> VampireArena {
    LineageBuilder::new()
        .vampire("Ansel", 1700)
        .vampire("Sarah", 1985)
        .vampire("Mina", 1960)
        .sired("Ansel", "Sarah")
        .sired("Ansel", "Mina")
        .build()
        .unwrap()
}

#[test]
fn given_default_settings_when_listing_millennials_then_matches_fixed_threshold() {
    let arena = coven();
    let ansel = arena.originals().next().unwrap();

    assert_eq!(
        arena
            .millennial_vampires_with(ansel, &Settings::default())
            .unwrap(),
        arena.millennial_vampires(ansel).unwrap()
    );
}

#[test]
fn given_configured_year_when_listing_millennials_then_uses_settings_year() {
    let arena = coven();
    let ansel = arena.originals().next().unwrap();
    let settings = Settings {
        millennial_year: 1950,
        ..Settings::default()
    };

    let recent = arena.millennial_vampires_with(ansel, &settings).unwrap();

    assert_eq!(recent.len(), 2);
    assert_eq!(arena.millennial_vampires(ansel).unwrap().len(), 1);
}

#[test]
fn given_local_config_file_when_listing_millennials_then_loaded_year_applies() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "millennial_year = 1990\n").unwrap();
    let settings = Settings::load_layered(None, Some(dir.path()), Some(Default::default())).unwrap();
    let arena = coven();
    let ansel = arena.originals().next().unwrap();

    assert!(arena
        .millennial_vampires_with(ansel, &settings)
        .unwrap()
        .is_empty());
}

#[test]
fn given_settings_without_years_when_rendering_then_labels_are_names() {
    let arena = coven();
    let ansel = arena.originals().next().unwrap();
    let settings = Settings {
        show_years: false,
        ..Settings::default()
    };

    let tree = arena.render(ansel, &settings).unwrap();

    assert_eq!(tree.root, "Ansel");
    assert_eq!(tree.leaves.len(), 2);
    assert_eq!(tree.leaves[0].root, "Sarah");
    assert_eq!(tree.leaves[1].root, "Mina");
}

#[test]
fn given_default_settings_when_rendering_then_labels_include_years() {
    let arena = coven();
    let ansel = arena.originals().next().unwrap();

    let tree = arena.render(ansel, &Settings::default()).unwrap();

    assert_eq!(tree.root, "Ansel (1700)");
    assert_eq!(tree.leaves[0].root, "Sarah (1985)");
}
