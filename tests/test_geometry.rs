use arcade_shooter::config::{FIELD_HEIGHT, FIELD_WIDTH};
use arcade_shooter::geometry::*;
use glam::Vec2;

fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect::from_center(Vec2::new(x, y), Vec2::new(w, h))
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

// ── in_bounds ─────────────────────────────────────────────────────────────────

#[test]
fn in_bounds_inside_field() {
    assert_eq!(in_bounds(&rect(100.0, 100.0, 20.0, 20.0)), (true, true));
}

#[test]
fn in_bounds_reports_each_axis() {
    // Pokes out on the left only
    assert_eq!(in_bounds(&rect(5.0, 100.0, 20.0, 20.0)), (false, true));
    // Pokes out at the bottom only
    assert_eq!(in_bounds(&rect(100.0, FIELD_HEIGHT - 5.0, 20.0, 20.0)), (true, false));
    // Both
    assert_eq!(in_bounds(&rect(FIELD_WIDTH, 0.0, 20.0, 20.0)), (false, false));
}

#[test]
fn in_bounds_edges_are_inclusive() {
    let touching = rect(10.0, 10.0, 20.0, 20.0); // left = top = 0
    assert_eq!(in_bounds(&touching), (true, true));
    assert!(fully_in_bounds(&Rect::field()));
}

// ── direction_vector ─────────────────────────────────────────────────────────

#[test]
fn direction_vector_is_unit_length() {
    let from = rect(0.0, 0.0, 10.0, 10.0);
    let to = rect(3.0, 4.0, 50.0, 50.0);
    let v = direction_vector(&from, &to).expect("distinct centres");
    assert!(approx(v.x, 0.6));
    assert!(approx(v.y, 0.8));
    assert!(approx(v.length(), 1.0));
}

#[test]
fn direction_vector_guards_coincident_centres() {
    let a = rect(100.0, 100.0, 10.0, 10.0);
    let b = rect(100.0, 100.0, 30.0, 30.0);
    assert_eq!(direction_vector(&a, &b), None);
}

// ── Rect ─────────────────────────────────────────────────────────────────────

#[test]
fn rects_sharing_an_edge_do_not_intersect() {
    let a = rect(10.0, 10.0, 20.0, 20.0);
    let b = rect(30.0, 10.0, 20.0, 20.0);
    assert!(!a.intersects(&b));
    let c = rect(29.0, 10.0, 20.0, 20.0);
    assert!(a.intersects(&c));
    assert!(c.intersects(&a));
}

#[test]
fn rotated_bounds_swaps_axes_at_right_angles() {
    let size = Vec2::new(20.0, 140.0);
    let r = rotated_bounds(size, 90.0);
    assert!(approx(r.x, 140.0));
    assert!(approx(r.y, 20.0));
    let same = rotated_bounds(size, 0.0);
    assert!(approx(same.x, 20.0));
    assert!(approx(same.y, 140.0));
}

// ── Direction ─────────────────────────────────────────────────────────────────

#[test]
fn every_direction_round_trips_through_its_delta() {
    for d in Direction::ALL {
        let (dx, dy) = d.delta();
        assert_eq!(Direction::from_delta(dx, dy), Some(d));
    }
    assert_eq!(Direction::from_delta(0, 0), None);
}

#[test]
fn direction_index_matches_table_order() {
    for (i, d) in Direction::ALL.iter().enumerate() {
        assert_eq!(d.index(), i);
    }
}

#[test]
fn direction_angles_are_counter_clockwise_from_east() {
    assert!(approx(Direction::Right.angle_degrees(), 0.0));
    assert!(approx(Direction::Up.angle_degrees(), 90.0));
    assert!(approx(Direction::UpLeft.angle_degrees(), 135.0));
    assert!(approx(Direction::Left.angle_degrees(), 180.0));
    assert!(approx(Direction::DownRight.angle_degrees(), -45.0));
}

#[test]
fn heading_points_up_on_screen_for_ninety_degrees() {
    let v = heading(90.0);
    assert!(approx(v.x, 0.0));
    assert!(approx(v.y, -1.0));
}
