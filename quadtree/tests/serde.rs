#![cfg(feature = "serde")]

use quadtree::shapes::{Circle, Rectangle};
use quadtree::{Classification, Config, QuadNode};

#[test]
fn test_rectangle_round_trip() {
    let rect = Rectangle::new(1.5, -2.0, 30.0, 40.25);
    let json = serde_json::to_string(&rect).unwrap();
    assert_eq!(serde_json::from_str::<Rectangle>(&json).unwrap(), rect);
}

#[test]
fn test_circle_round_trip() {
    let circle = Circle::new(10.0, 20.0, 5.0);
    let json = serde_json::to_string(&circle).unwrap();
    let parsed: Circle = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, circle);
    assert_eq!(parsed.bounding_box, Rectangle::new(5.0, 15.0, 10.0, 10.0));
}

#[test]
fn test_config_round_trip() {
    let config = Config {
        max_objects: 4,
        max_levels: 3,
        classification: Classification::Strict,
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(serde_json::from_str::<Config>(&json).unwrap(), config);
}

#[test]
fn test_partial_config_uses_defaults() {
    let config: Config = serde_json::from_str(r#"{ "max_objects": 4 }"#).unwrap();
    assert_eq!(
        config,
        Config {
            max_objects: 4,
            ..Config::default()
        }
    );

    let config: Config = serde_json::from_str(r#"{ "classification": "Strict" }"#).unwrap();
    assert_eq!(config.max_objects, 10);
    assert_eq!(config.max_levels, 8);
    assert_eq!(config.classification, Classification::Strict);

    let qt: QuadNode<Rectangle> =
        QuadNode::with_config(Rectangle::new(0.0, 0.0, 100.0, 100.0), config).unwrap();
    assert_eq!(qt.config(), &config);
}
