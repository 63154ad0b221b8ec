use super::*;

fn frame() -> ChartFrame {
    // 100 x 100 plot area.
    ChartFrame {
        width: 120.0,
        height: 120.0,
        pad_left: 10.0,
        pad_right: 10.0,
        pad_top: 10.0,
        pad_bottom: 10.0,
    }
}

#[test]
fn plot_dimensions_exclude_padding() {
    let f = frame();
    assert_eq!(f.plot_width(), 100.0);
    assert_eq!(f.plot_height(), 100.0);
    assert_eq!(f.baseline(), 110.0);
    assert_eq!(ChartFrame::new(10.0, 10.0).plot_width(), 0.0);
}

#[test]
fn x_at_spreads_points_edge_to_edge() {
    let f = frame();
    assert_eq!(f.x_at(0, 5), 10.0);
    assert_eq!(f.x_at(4, 5), 110.0);
    assert_eq!(f.x_at(2, 5), 60.0);
    assert_eq!(f.x_at(0, 1), 60.0);
}

#[test]
fn y_at_inverts_and_clamps() {
    let f = frame();
    assert_eq!(f.y_at(0.0, 0.0, 100.0), 110.0);
    assert_eq!(f.y_at(100.0, 0.0, 100.0), 10.0);
    assert_eq!(f.y_at(50.0, 0.0, 100.0), 60.0);
    assert_eq!(f.y_at(500.0, 0.0, 100.0), 10.0);
    assert_eq!(f.y_at(5.0, 5.0, 5.0), 60.0);
}

#[test]
fn nearest_index_snaps_to_closest_point() {
    let f = frame();
    assert_eq!(f.nearest_index(10.0, 5), Some(0));
    assert_eq!(f.nearest_index(34.0, 5), Some(1));
    assert_eq!(f.nearest_index(200.0, 5), Some(4));
    assert_eq!(f.nearest_index(-50.0, 5), Some(0));
    assert_eq!(f.nearest_index(50.0, 0), None);
}

#[test]
fn line_path_formats_move_then_lines() {
    assert_eq!(line_path(&[(0.0, 1.0), (2.5, 3.26)]), "M0.0 1.0 L2.5 3.3");
    assert_eq!(line_path(&[]), "");
}

#[test]
fn area_path_closes_to_baseline() {
    assert_eq!(
        area_path(&[(0.0, 5.0), (10.0, 2.0)], 20.0),
        "M0.0 5.0 L10.0 2.0 L10.0 20.0 L0.0 20.0 Z"
    );
    assert_eq!(area_path(&[], 20.0), "");
}
