use capturequeue_core::{remove, reorder, CaptureJob};

fn job(voltage: f64) -> CaptureJob {
    CaptureJob {
        voltage,
        current: 0.5,
    }
}

fn abc() -> Vec<CaptureJob> {
    vec![job(1.0), job(2.0), job(3.0)]
}

#[test]
fn reorder_moves_the_head_to_the_tail() {
    assert_eq!(reorder(abc(), 0, 2), vec![job(2.0), job(3.0), job(1.0)]);
}

#[test]
fn reorder_moves_the_tail_to_the_head() {
    assert_eq!(reorder(abc(), 2, 0), vec![job(3.0), job(1.0), job(2.0)]);
}

#[test]
fn reorder_to_the_same_position_is_identity() {
    assert_eq!(reorder(abc(), 1, 1), abc());
}

#[test]
fn reorder_out_of_range_is_a_no_op() {
    assert_eq!(reorder(abc(), 3, 0), abc());
    assert_eq!(reorder(abc(), 0, 3), abc());
    assert_eq!(reorder(Vec::new(), 0, 0), Vec::<CaptureJob>::new());
}

#[test]
fn remove_drops_exactly_one_entry() {
    assert_eq!(remove(abc(), 1), vec![job(1.0), job(3.0)]);
}

#[test]
fn remove_out_of_range_is_a_no_op() {
    assert_eq!(remove(abc(), 3), abc());
    assert_eq!(remove(Vec::new(), 0), Vec::<CaptureJob>::new());
}
