//! Tests for the basic bar layout.

use super::*;
use crate::layout::legend::LegendPlacement;
use crate::layout::palette::NamedPalette;

fn group_palette(groups: &[&str]) -> Palette {
    Palette::from_keys(groups, NamedPalette::Deep)
}

#[test]
fn one_bar_per_group_in_supplied_order() {
    let records = vec![
        StackRecord::new("Germany", "", Some(746.0)),
        StackRecord::new("Malta", "", Some(2.1)),
        StackRecord::new("France", "", Some(404.0)),
    ];
    let order = vec![
        "Germany".to_string(),
        "France".to_string(),
        "Malta".to_string(),
    ];
    let palette = group_palette(&["Germany", "France", "Malta"]);

    let layout = BasicBarSpec {
        records: &records,
        group_order: &order,
        hue_order: None,
        palette: &palette,
        legend: None,
    }
    .layout()
    .unwrap();

    assert_eq!(layout.bars.len(), 3);
    assert_eq!(layout.groups[0].group, "Germany");
    assert!((layout.groups[0].x - (-0.5)).abs() < 1e-12);
    assert!((layout.groups[2].x - 1.5).abs() < 1e-12);
    // Values plot directly from zero.
    let germany = &layout.bars[0];
    assert!((germany.base - 0.0).abs() < 1e-12);
    assert!((germany.height - 746.0).abs() < 1e-12);
}

#[test]
fn negative_value_extends_below_zero() {
    let records = vec![StackRecord::new("Sweden", "", Some(-40.0))];
    let order = vec!["Sweden".to_string()];
    let palette = group_palette(&["Sweden"]);

    let layout = BasicBarSpec {
        records: &records,
        group_order: &order,
        hue_order: None,
        palette: &palette,
        legend: None,
    }
    .layout()
    .unwrap();

    let bar = &layout.bars[0];
    assert!((bar.base - (-40.0)).abs() < 1e-12);
    assert!((bar.height - 40.0).abs() < 1e-12);
    assert!(layout.y_limits.0 < -40.0);
}

#[test]
fn missing_value_leaves_empty_slot() {
    let records = vec![
        StackRecord::new("A", "", Some(10.0)),
        StackRecord::new("B", "", None),
    ];
    let order = vec!["A".to_string(), "B".to_string()];
    let palette = group_palette(&["A", "B"]);

    let layout = BasicBarSpec {
        records: &records,
        group_order: &order,
        hue_order: None,
        palette: &palette,
        legend: None,
    }
    .layout()
    .unwrap();

    assert_eq!(layout.bars.len(), 1);
    assert_eq!(layout.groups.len(), 2);
}

#[test]
fn hue_splits_group_slot() {
    let records = vec![
        StackRecord::new("A", "x", Some(4.0)),
        StackRecord::new("A", "y", Some(6.0)),
    ];
    let order = vec!["A".to_string()];
    let hues = vec!["x".to_string(), "y".to_string()];
    let palette = Palette::from_keys(&hues, NamedPalette::Tab10);

    let layout = BasicBarSpec {
        records: &records,
        group_order: &order,
        hue_order: Some(&hues),
        palette: &palette,
        legend: Some(LegendStyle {
            title: None,
            placement: LegendPlacement::UpperRight,
            columns: 1,
        }),
    }
    .layout()
    .unwrap();

    assert_eq!(layout.bars.len(), 2);
    let x_bar = &layout.bars[0];
    let y_bar = &layout.bars[1];
    assert!((x_bar.width - 0.4).abs() < 1e-12);
    assert!(x_bar.x < y_bar.x);
    // Sub-bars tile the 0.8-wide slot centered on the group position.
    assert!((x_bar.x - (-0.9)).abs() < 1e-12);
    assert!((y_bar.x + y_bar.width - (-0.1)).abs() < 1e-12);
    assert!(layout.legend.is_some());
}

#[test]
fn margins_pad_data_interval() {
    let records = vec![StackRecord::new("A", "", Some(100.0))];
    let order = vec!["A".to_string()];
    let palette = group_palette(&["A"]);

    let layout = BasicBarSpec {
        records: &records,
        group_order: &order,
        hue_order: None,
        palette: &palette,
        legend: None,
    }
    .layout()
    .unwrap();

    assert!((layout.y_limits.0 - (-5.0)).abs() < 1e-9);
    assert!((layout.y_limits.1 - 105.0).abs() < 1e-9);
}

#[test]
fn duplicate_group_is_rejected() {
    let records = vec![
        StackRecord::new("A", "", Some(1.0)),
        StackRecord::new("A", "", Some(2.0)),
    ];
    let order = vec!["A".to_string()];
    let palette = group_palette(&["A"]);

    let err = BasicBarSpec {
        records: &records,
        group_order: &order,
        hue_order: None,
        palette: &palette,
        legend: None,
    }
    .layout()
    .unwrap_err();

    assert!(matches!(err, EmissionsError::DuplicateStack { .. }));
}
