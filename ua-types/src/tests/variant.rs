use crate::{DataValue, LocalizedText, NodeId, QualifiedName, StatusCode, Variant};

#[test]
fn scalar_conversions() {
    assert_eq!(Variant::from(true), Variant::Boolean(true));
    assert_eq!(Variant::from(5u8), Variant::Byte(5));
    assert_eq!(Variant::from(-5i32), Variant::Int32(-5));
    assert_eq!(Variant::from(5u32), Variant::UInt32(5));
    assert_eq!(Variant::from(1.25f64), Variant::Double(1.25));
    assert_eq!(Variant::from("hello"), Variant::String("hello".to_string()));
}

#[test]
fn boxed_conversions() {
    let node_id = NodeId::new(1, "x");
    assert_eq!(
        Variant::from(node_id.clone()),
        Variant::NodeId(Box::new(node_id))
    );
    let name = QualifiedName::new(1, "Name");
    assert_eq!(
        Variant::from(name.clone()),
        Variant::QualifiedName(Box::new(name))
    );
    let text = LocalizedText::from("text");
    assert_eq!(
        Variant::from(text.clone()),
        Variant::LocalizedText(Box::new(text))
    );
}

#[test]
fn array_dimensions_conversion() {
    assert_eq!(
        Variant::from(vec![10u32, 20u32]),
        Variant::Array(vec![Variant::UInt32(10), Variant::UInt32(20)])
    );
}

#[test]
fn data_value_from_scalar() {
    let value = DataValue::from(42i32);
    assert_eq!(value.value, Some(Variant::Int32(42)));
    assert_eq!(value.status(), StatusCode::Good);
    assert!(value.source_timestamp.is_some());
    assert!(value.server_timestamp.is_some());
    assert!(value.is_valid());
}

#[test]
fn data_value_status_defaults_to_good() {
    let value = DataValue::null();
    assert_eq!(value.status(), StatusCode::Good);
    assert!(value.value.is_none());

    let value = DataValue {
        status: Some(StatusCode::BadAttributeIdInvalid),
        ..Default::default()
    };
    assert!(!value.is_valid());
}
