use std::collections::LinkedList;

use ip_format::{is_sequence_container, is_tuple, shape_of, Shape, TupleRender};

#[test]
fn shapes_are_classified() {
    assert_eq!(shape_of::<String>(), Shape::Text);
    assert_eq!(shape_of::<u32>(), Shape::Integer);
    assert_eq!(shape_of::<i8>(), Shape::Integer);
    assert_eq!(shape_of::<Vec<u8>>(), Shape::Sequence);
    assert_eq!(shape_of::<LinkedList<i64>>(), Shape::Sequence);
    assert_eq!(shape_of::<()>(), Shape::Tuple);
    assert_eq!(shape_of::<(i32, u8)>(), Shape::Tuple);
}

#[test]
fn sequence_predicate() {
    assert!(is_sequence_container::<Vec<usize>>());
    assert!(is_sequence_container::<Vec<i128>>());
    assert!(is_sequence_container::<LinkedList<u16>>());
    assert!(!is_sequence_container::<u32>());
    assert!(!is_sequence_container::<String>());
    assert!(!is_sequence_container::<(i32, i32)>());
}

#[test]
fn tuple_predicate() {
    assert!(is_tuple::<()>());
    assert!(is_tuple::<(u8,)>());
    assert!(is_tuple::<(i32, i64, u8)>());
    assert!(!is_tuple::<Vec<i32>>());
    assert!(!is_tuple::<String>());
    assert!(!is_tuple::<i64>());
}

#[test]
fn tuples_render_directly() {
    assert_eq!((1u8, 2u16, 3i32).render('.'), "1.2.3");
    assert_eq!(().render(','), "");
    assert_eq!((-5i32,).render('.'), "-5");
    assert_eq!((0, 0, 0, 0).render(':'), "0:0:0:0");
}
