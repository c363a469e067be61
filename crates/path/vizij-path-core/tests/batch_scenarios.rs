use vizij_path_core::{
    batch_interpolate, batch_interpolate_scalar, BezierPath, CurveVertex, MeasuredPathElement,
    PathElement, Vec2,
};

fn el(point: (f64, f64), in_t: (f64, f64), out_t: (f64, f64)) -> PathElement {
    PathElement::new(CurveVertex::new(
        Vec2::new(point.0, point.1),
        Vec2::new(in_t.0, in_t.1),
        Vec2::new(out_t.0, out_t.1),
    ))
}

fn flat(value: f64) -> PathElement {
    el((value, value), (value, value), (value, value))
}

#[test]
fn midpoint_of_single_vertex() {
    let from = [el((0.0, 0.0), (0.0, 0.0), (0.0, 0.0))];
    let to = [el((10.0, 10.0), (0.0, 0.0), (0.0, 0.0))];
    let mut result = BezierPath::new();
    batch_interpolate(&from, &to, &mut result, 0.5);

    assert_eq!(result.element_count(), 1);
    let v = result.elements()[0].vertex;
    assert_eq!(v.point, Vec2::new(5.0, 5.0));
    assert_eq!(v.in_tangent, Vec2::ZERO);
    assert_eq!(v.out_tangent, Vec2::ZERO);
}

#[test]
fn shorter_input_wins() {
    let from = [flat(0.0), flat(1.0), flat(2.0)];
    let to = [flat(4.0)];
    let mut result = BezierPath::new();
    batch_interpolate(&from, &to, &mut result, 0.5);
    assert_eq!(result.element_count(), 1);
    assert_eq!(result.elements()[0], flat(2.0));

    // And the other way round.
    batch_interpolate(&to, &from, &mut result, 0.5);
    assert_eq!(result.element_count(), 1);
    assert_eq!(result.elements()[0], flat(2.0));
}

#[test]
fn amount_outside_unit_range_extrapolates() {
    let from = [flat(0.0)];
    let to = [flat(1.0)];
    let mut result = BezierPath::new();

    batch_interpolate(&from, &to, &mut result, 2.0);
    assert_eq!(result.elements()[0], flat(2.0));

    batch_interpolate(&from, &to, &mut result, -0.5);
    assert_eq!(result.elements()[0], flat(-0.5));
}

#[test]
fn endpoints_reproduce_keyframes() {
    let from = [
        el((1.0, 2.0), (0.5, 2.0), (1.5, 2.0)),
        el((-3.0, 7.25), (-4.0, 7.0), (-2.0, 7.5)),
    ];
    let to = [
        el((9.0, -2.0), (8.0, -3.0), (10.0, -1.0)),
        el((0.125, 0.0), (0.0, 0.0), (0.25, 0.0)),
    ];
    let mut result = BezierPath::new();

    batch_interpolate(&from, &to, &mut result, 0.0);
    assert_eq!(result.elements(), &from);

    batch_interpolate(&from, &to, &mut result, 1.0);
    assert_eq!(result.elements(), &to);
}

#[test]
fn empty_inputs_produce_empty_result() {
    let some = [flat(1.0), flat(2.0)];
    let mut result: BezierPath = [CurveVertex::corner(Vec2::new(3.0, 3.0))]
        .into_iter()
        .collect();

    batch_interpolate(&[], &some, &mut result, 0.5);
    assert_eq!(result.element_count(), 0);

    batch_interpolate(&some, &[], &mut result, 0.5);
    assert_eq!(result.element_count(), 0);

    batch_interpolate_scalar(&[], &[], &mut result, 0.5);
    assert_eq!(result.element_count(), 0);
}

#[test]
fn result_path_is_reused_across_frames() {
    let from = [flat(0.0), flat(0.0), flat(0.0)];
    let to = [flat(8.0), flat(8.0), flat(8.0)];
    let mut result = BezierPath::with_capacity(3);

    for (i, amount) in [0.0, 0.25, 0.5, 0.75, 1.0].into_iter().enumerate() {
        batch_interpolate(&from, &to, &mut result, amount);
        assert_eq!(result.element_count(), 3, "frame {i}");
        for element in result.elements() {
            assert_eq!(*element, flat(8.0 * amount));
        }
    }
}

#[test]
fn inputs_are_left_untouched() {
    let from = vec![flat(1.0), flat(2.0)];
    let to = vec![flat(3.0), flat(4.0)];
    let (from_before, to_before) = (from.clone(), to.clone());
    let mut result = BezierPath::new();
    batch_interpolate(&from, &to, &mut result, 0.3);
    assert_eq!(from, from_before);
    assert_eq!(to, to_before);
}

#[test]
fn measured_elements_take_per_vertex_path() {
    let from: Vec<MeasuredPathElement> = [flat(0.0), flat(2.0)]
        .iter()
        .map(|e| MeasuredPathElement::new(e.vertex))
        .collect();
    let to: Vec<MeasuredPathElement> = [flat(4.0), flat(6.0)]
        .iter()
        .map(|e| MeasuredPathElement::new(e.vertex))
        .collect();
    let mut result = BezierPath::new();
    batch_interpolate(&from, &to, &mut result, 0.5);

    assert_eq!(result.element_count(), 2);
    assert_eq!(result.elements()[0].vertex, flat(2.0).vertex);
    assert_eq!(result.elements()[1].vertex, flat(4.0).vertex);
    // No remeasure happens during interpolation.
    assert_eq!(result.elements()[0].length, 0.0);
    assert_eq!(result.length(), 0.0);
}

#[test]
fn path_interpolate_keeps_closure() {
    let mut a: BezierPath = [
        CurveVertex::corner(Vec2::new(0.0, 0.0)),
        CurveVertex::corner(Vec2::new(2.0, 0.0)),
    ]
    .into_iter()
    .collect();
    a.close();
    let b: BezierPath = [
        CurveVertex::corner(Vec2::new(0.0, 2.0)),
        CurveVertex::corner(Vec2::new(2.0, 2.0)),
    ]
    .into_iter()
    .collect();

    let mid = a.interpolate(&b, 0.5);
    assert!(mid.is_closed());
    assert_eq!(mid.elements()[1].vertex.point, Vec2::new(2.0, 1.0));
}
