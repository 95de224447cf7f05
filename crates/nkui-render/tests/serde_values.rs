#![cfg(feature = "serde")]

use nkui_render::{Align, Point, Rgba, SymbolType};

#[test]
fn rgba_serializes_packed() {
    let c = Rgba::rgba(0x11, 0x22, 0x33, 0x44);
    assert_eq!(serde_json::to_string(&c).unwrap(), 0x1122_3344u32.to_string());
    let back: Rgba = serde_json::from_str("287454020").unwrap();
    assert_eq!(back, c);
}

#[test]
fn point_and_symbol_round_trip() {
    let p = Point::new(-3, 7);
    let json = serde_json::to_value(p).unwrap();
    assert_eq!(json["x"], -3);
    assert_eq!(serde_json::from_value::<Point>(json).unwrap(), p);

    let sym: SymbolType = serde_json::from_str("\"TriangleDown\"").unwrap();
    assert_eq!(sym, SymbolType::TriangleDown);
}

#[test]
fn align_flags_round_trip() {
    let align = Align::LEFT_MIDDLE;
    let json = serde_json::to_string(&align).unwrap();
    assert_eq!(serde_json::from_str::<Align>(&json).unwrap(), align);
}
