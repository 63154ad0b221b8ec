use super::*;
use crate::state::pricing::SAMPLE_SERIES;

// =============================================================
// percentile / visual cap
// =============================================================

#[test]
fn percentile_95_uses_floor_index() {
    let values: Vec<f64> = (1..=20).map(f64::from).collect();
    // floor(20 * 0.95) = 19 -> the largest value.
    assert_eq!(percentile_95(&values), Some(20.0));

    let values: Vec<f64> = (1..=100).map(f64::from).collect();
    assert_eq!(percentile_95(&values), Some(96.0));
}

#[test]
fn percentile_95_ignores_order_and_non_finite() {
    assert_eq!(percentile_95(&[3.0, f64::NAN, 1.0, 2.0]), Some(3.0));
    assert_eq!(percentile_95(&[]), None);
    assert_eq!(percentile_95(&[f64::INFINITY]), None);
}

#[test]
fn visual_cap_applies_headroom() {
    let series = [PricePoint::new("a", 100.0, 100.0, 100.0)];
    let cap = visual_cap(&series).unwrap();
    assert!((cap - 115.0).abs() < 1e-9);
}

// =============================================================
// clamp_series
// =============================================================

#[test]
fn clamp_series_never_exceeds_cap() {
    let cap = visual_cap(&SAMPLE_SERIES).unwrap();
    let clamped = clamp_series(&SAMPLE_SERIES);
    assert_eq!(clamped.len(), SAMPLE_SERIES.len());
    for point in &clamped {
        for commodity in Commodity::ALL {
            assert!(point.value(commodity) <= cap);
        }
    }
}

#[test]
fn clamp_series_keeps_values_below_cap() {
    let cap = visual_cap(&SAMPLE_SERIES).unwrap();
    let clamped = clamp_series(&SAMPLE_SERIES);
    for (raw, shown) in SAMPLE_SERIES.iter().zip(&clamped) {
        assert_eq!(raw.time, shown.time);
        for commodity in Commodity::ALL {
            if raw.value(commodity) <= cap {
                assert_eq!(raw.value(commodity), shown.value(commodity));
            }
        }
    }
}

#[test]
fn clamp_series_flattens_the_aluminum_spike() {
    let clamped = clamp_series(&SAMPLE_SERIES);
    // 22,400 is the lone outlier in the sample feed.
    assert!(clamped[0].aluminum < 22_400.0);
    assert_eq!(clamped[0].copper, 7_600.0);
}

#[test]
fn clamp_series_is_idempotent_on_empty_input() {
    assert!(clamp_series(&[]).is_empty());
}

#[test]
fn value_extent_spans_all_tracks() {
    let series = [
        PricePoint::new("a", 5.0, -2.0, 9.0),
        PricePoint::new("b", 4.0, 1.0, 12.0),
    ];
    assert_eq!(value_extent(&series), Some((-2.0, 12.0)));
    assert_eq!(value_extent(&[]), None);
}

// =============================================================
// nice_ticks
// =============================================================

#[test]
fn nice_ticks_rounds_step_to_nice_values() {
    assert_eq!(nice_ticks(0.0, 100.0, 5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0, 120.0]);
    assert_eq!(nice_ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0, 1.2]);
}

#[test]
fn nice_ticks_starts_below_min() {
    let ticks = nice_ticks(1_450.0, 9_800.0, 5);
    assert_eq!(ticks.first(), Some(&0.0));
    assert!(*ticks.last().unwrap() >= 9_800.0);
}

#[test]
fn nice_ticks_always_returns_two_sorted_values() {
    let cases = [
        (0.0, 0.0, 5),
        (5.0, 5.0, 1),
        (10.0, 0.0, 4),
        (-3.0, 7.0, 0),
        (f64::NAN, 1.0, 5),
        (-1e9, 1e9, 3),
        (0.001, 0.002, 10),
        (0.0, 1.0, 1_000),
    ];
    for (min, max, count) in cases {
        let ticks = nice_ticks(min, max, count);
        assert!(ticks.len() >= 2, "too few ticks for {min}..{max}/{count}");
        assert!(ticks.len() <= MAX_TICKS + 1, "too many ticks for {min}..{max}/{count}");
        for pair in ticks.windows(2) {
            assert!(!(pair[0] > pair[1]), "unsorted ticks for {min}..{max}/{count}");
        }
    }
}

#[test]
fn nice_ticks_falls_back_to_bounds() {
    assert_eq!(nice_ticks(5.0, 5.0, 4), vec![5.0, 5.0]);
    assert_eq!(nice_ticks(9.0, 1.0, 0), vec![1.0, 9.0]);
}

#[test]
fn nice_ticks_caps_dense_requests() {
    let ticks = nice_ticks(0.0, 1.0, 1_000);
    assert_eq!(ticks.len(), MAX_TICKS + 1);
}

// =============================================================
// formatting
// =============================================================

#[test]
fn format_price_thresholds() {
    assert_eq!(format_price(999.0), "$999");
    assert_eq!(format_price(1_500.0), "$1.5k");
    assert_eq!(format_price(2_000_000.0), "$2.00M");
    assert_eq!(format_price(8_580.0), "$8.6k");
}

#[test]
fn format_price_handles_zero_and_negative() {
    assert_eq!(format_price(0.0), "$0");
    assert_eq!(format_price(-0.0), "$0");
    assert_eq!(format_price(-1_500.0), "$-1.5k");
    assert_eq!(format_price(-2_500_000.0), "$-2.50M");
    assert_eq!(format_price(12.5), "$12.5");
}

#[test]
fn format_axis_tick_rounds_thousands() {
    assert_eq!(format_axis_tick(8_000.0), "8k");
    assert_eq!(format_axis_tick(2_500.0), "3k");
    assert_eq!(format_axis_tick(500.0), "500");
    assert_eq!(format_axis_tick(0.0), "0");
}

#[test]
fn x_axis_interval_depends_on_screen_size() {
    assert_eq!(x_axis_interval(23, false), 3);
    assert_eq!(x_axis_interval(23, true), 5);
    assert_eq!(x_axis_interval(5, false), 0);
    assert_eq!(x_axis_interval(0, true), 0);
}

#[test]
fn x_label_indices_spread_by_screen_size() {
    assert_eq!(x_label_indices(23, false), vec![0, 4, 8, 12, 16, 20]);
    assert_eq!(x_label_indices(23, true), vec![0, 6, 12, 18]);
    assert!(x_label_indices(0, false).is_empty());
    assert_eq!(x_label_indices(3, false), vec![0, 1, 2]);
}

// =============================================================
// tooltip
// =============================================================

#[test]
fn dedupe_keeps_one_row_per_data_key() {
    let point = PricePoint::new("t", 1.0, 2.0, 3.0);
    let copper = SeriesLayer { commodity: Commodity::Copper, kind: LayerKind::Area };
    let copper_line = SeriesLayer { commodity: Commodity::Copper, kind: LayerKind::Line };
    let rows = dedupe_tooltip_entries(tooltip_payload(&point, &[copper, copper_line]));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Copper");
}

#[test]
fn dedupe_keeps_first_occurrence_and_order() {
    let entries = vec![
        TooltipEntry { data_key: "copper", name: "Copper", color: "a", value: 1.0 },
        TooltipEntry { data_key: "steel", name: "Steel", color: "b", value: 2.0 },
        TooltipEntry { data_key: "copper", name: "Copper", color: "c", value: 3.0 },
    ];
    let rows = dedupe_tooltip_entries(entries);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].color, "a");
    assert_eq!(rows[1].data_key, "steel");
}

#[test]
fn full_chart_payload_dedupes_to_three_rows() {
    let rows = dedupe_tooltip_entries(tooltip_payload(&SAMPLE_SERIES[0], &CHART_LAYERS));
    let names: Vec<_> = rows.iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["Copper", "Steel", "Aluminum"]);
    assert_eq!(rows[2].value, 22_400.0);
}
