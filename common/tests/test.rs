use common::shapes::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_and_getters() {
    let rect = Rectangle::new(2.0, 3.0, 4.0, 6.0);
    assert_eq!(rect.width(), 4.0);
    assert_eq!(rect.height(), 6.0);
    assert_eq!(rect.left(), 2.0);
    assert_eq!(rect.right(), 6.0);
    assert_eq!(rect.top(), 3.0);
    assert_eq!(rect.bottom(), 9.0);
    assert_eq!(rect.center(), (4.0, 6.0));
}

#[test]
fn test_contains_point() {
    let rect = Rectangle::new(2.0, 3.0, 4.0, 6.0);
    assert!(rect.contains_point(2.0, 3.0));
    assert!(rect.contains_point(4.0, 6.0));
    // Far edges are exclusive.
    assert!(!rect.contains_point(6.0, 3.0));
    assert!(!rect.contains_point(2.0, 9.0));
}

#[test]
fn test_intersects() {
    let rect = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    assert!(rect.intersects(&Rectangle::new(5.0, 5.0, 10.0, 10.0)));
    assert!(rect.intersects(&Rectangle::new(2.0, 2.0, 1.0, 1.0)));
    assert!(!rect.intersects(&Rectangle::new(10.0, 0.0, 5.0, 5.0)));
    assert!(!rect.intersects(&Rectangle::new(20.0, 20.0, 5.0, 5.0)));
}

#[test]
fn test_contains() {
    let rect = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    assert!(rect.contains(&Rectangle::new(0.0, 0.0, 10.0, 10.0)));
    assert!(rect.contains(&Rectangle::new(2.0, 2.0, 3.0, 3.0)));
    assert!(!rect.contains(&Rectangle::new(8.0, 8.0, 3.0, 3.0)));
}

#[test]
fn test_is_valid() {
    assert!(Rectangle::new(0.0, 0.0, 0.0, 0.0).is_valid());
    assert!(!Rectangle::new(0.0, 0.0, -1.0, 5.0).is_valid());
    assert!(!Rectangle::new(f32::NAN, 0.0, 1.0, 1.0).is_valid());
    assert!(!Rectangle::new(0.0, 0.0, f32::INFINITY, 1.0).is_valid());
}

#[test]
fn test_expand_to_include() {
    let mut rect = Rectangle::new(0.0, 0.0, 4.0, 6.0);
    let other_rect = Rectangle::new(4.0, 4.0, 4.0, 2.0);
    rect.expand_to_include(&other_rect);
    assert_eq!(rect, Rectangle::new(0.0, 0.0, 8.0, 6.0));
}

#[test]
fn test_circle_bounding_box() {
    let mut circle = Circle::new(10.0, 20.0, 5.0);
    assert_eq!(circle.bounding_box(), Rectangle::new(5.0, 15.0, 10.0, 10.0));

    circle.update(0.0, 0.0);
    assert_eq!(circle.bounding_box(), Rectangle::new(-5.0, -5.0, 10.0, 10.0));

    circle.update_with_radius(1.0, 1.0, 1.0);
    assert_eq!(circle.bounding_box(), Rectangle::new(0.0, 0.0, 2.0, 2.0));
}

#[test]
fn test_item_uses_bounds_as_shape() {
    let item = Item::new(Rectangle::new(1.0, 2.0, 3.0, 4.0), "payload");
    assert_eq!(item.bounding_box(), Rectangle::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(item.payload, "payload");
}

#[test]
fn test_random_inside() {
    let rect = Rectangle::new(2.0, 3.0, 60.0, 80.0);

    // Use a fixed seed for reproducibility.
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    for _ in 0..100 {
        let inner = rect.random_inside(5.0, 5.0, &mut rng);
        assert!(rect.contains(&inner));
    }
}

#[test]
fn test_random_inside_too_large() {
    let rect = Rectangle::new(2.0, 3.0, 2.0, 2.0);

    // Use a fixed seed for reproducibility.
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    let inner = rect.random_inside(4.0, 4.0, &mut rng);
    // The generated rectangle should be pinned to the left/top of the rectangle.
    assert_eq!(inner, Rectangle::new(2.0, 3.0, 4.0, 4.0));
}
