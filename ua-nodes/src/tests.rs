use ua_types::{
    AttributeId, DataValue, LocalizedText, NodeClass, NodeId, QualifiedName, StatusCode, Variant,
};

use crate::{
    EventNotifier, Node, NodeBase, Object, ObjectBuilder, Reference, ReferenceType, Variable,
    VariableBuilder, View,
};

#[test]
fn object_attributes() {
    let on = NodeId::new(1, "o1");
    let o = Object::new(&on, "Browse01", "Display01", EventNotifier::empty());
    assert_eq!(o.node_class(), NodeClass::Object);
    assert_eq!(o.node_id(), &on);
    assert_eq!(o.browse_name(), &QualifiedName::new(0, "Browse01"));
    assert_eq!(o.display_name(), &"Display01".into());

    let value = o.read_attribute(AttributeId::BrowseName);
    assert_eq!(
        value.value,
        Some(Variant::QualifiedName(Box::new(QualifiedName::new(
            0, "Browse01"
        ))))
    );
    assert_eq!(value.status(), StatusCode::Good);
}

#[test]
fn unsupported_attribute_is_invalid() {
    let o = Object::new(&NodeId::new(1, "o1"), "o1", "o1", EventNotifier::empty());
    let value = o.read_attribute(AttributeId::Historizing);
    assert_eq!(value.status(), StatusCode::BadAttributeIdInvalid);
    assert!(value.value.is_none());
}

#[test]
fn view_attributes() {
    let v = View::new(
        &NodeId::new(1, "v"),
        "View01",
        "View01",
        EventNotifier::SUBSCRIBE_TO_EVENTS,
        true,
    );

    let value = v.read_attribute(AttributeId::EventNotifier);
    assert_eq!(value.value, Some(Variant::UInt32(1)));
    assert_eq!(value.status(), StatusCode::Good);

    let value = v.read_attribute(AttributeId::ContainsNoLoops);
    assert_eq!(value.value, Some(Variant::Boolean(true)));
    assert_eq!(value.status(), StatusCode::Good);

    // Anything else falls back to the base handler
    let value = v.read_attribute(AttributeId::DisplayName);
    assert_eq!(
        value.value,
        Some(Variant::LocalizedText(Box::new("View01".into())))
    );
}

#[test]
fn variable_attributes() {
    let v = Variable::new(
        &NodeId::new(1, "v1"),
        "v1",
        "v1",
        NodeId::new(0, 6u32),
        30i32,
    );
    assert_eq!(v.node_class(), NodeClass::Variable);

    let value = v.read_attribute(AttributeId::Value);
    assert_eq!(value.value, Some(Variant::Int32(30)));

    let value = v.read_attribute(AttributeId::DataType);
    assert_eq!(
        value.value,
        Some(Variant::NodeId(Box::new(NodeId::new(0, 6u32))))
    );

    let value = v.read_attribute(AttributeId::ValueRank);
    assert_eq!(value.value, Some(Variant::Int32(-1)));

    let value = v.read_attribute(AttributeId::Historizing);
    assert_eq!(value.value, Some(Variant::Boolean(false)));
}

#[test]
fn set_attribute_type_mismatch() {
    let mut v = Variable::new(
        &NodeId::new(1, "v1"),
        "v1",
        "v1",
        NodeId::new(0, 6u32),
        30i32,
    );
    let result = v.set_attribute(AttributeId::Historizing, Variant::Int32(1));
    assert_eq!(result, Err(StatusCode::BadTypeMismatch));
    let result = v.set_attribute(AttributeId::Historizing, Variant::Boolean(true));
    assert_eq!(result, Ok(()));
    assert!(v.historizing());
}

#[test]
fn set_base_attribute() {
    let mut o = Object::new(&NodeId::new(1, "o1"), "o1", "o1", EventNotifier::empty());
    o.set_attribute(
        AttributeId::DisplayName,
        Variant::LocalizedText(Box::new(LocalizedText::from("New name"))),
    )
    .unwrap();
    assert_eq!(o.display_name(), &LocalizedText::from("New name"));
}

#[test]
fn reference_type_inverse_name() {
    let r = ReferenceType::new(
        &NodeId::new(0, 35u32),
        "Organizes",
        "Organizes",
        Some("OrganizedBy".into()),
        false,
        false,
    );
    let value = r.read_attribute(AttributeId::InverseName);
    assert_eq!(
        value.value,
        Some(Variant::LocalizedText(Box::new("OrganizedBy".into())))
    );
    assert_eq!(
        r.read_attribute(AttributeId::Symmetric).value,
        Some(Variant::Boolean(false))
    );
}

#[test]
fn reference_validation() {
    // A browse name is fine
    let r = Reference::new("Organizes", NodeId::new(0, 85u32), true);
    assert_eq!(r.reference_type, "Organizes");
    assert!(r.is_forward);

    // A node id string in place of a browse name is a construction bug
    let result = std::panic::catch_unwind(|| {
        let _ = Reference::new("i=35", NodeId::new(0, 85u32), true);
    });
    assert!(result.is_err());

    let result = std::panic::catch_unwind(|| {
        let _ = Reference::new("ns=0;i=35", NodeId::new(0, 85u32), true);
    });
    assert!(result.is_err());

    let result = std::panic::catch_unwind(|| {
        let _ = Reference::new("", NodeId::new(0, 85u32), true);
    });
    assert!(result.is_err());
}

#[test]
fn reference_reciprocal() {
    let source = NodeId::new(0, 84u32);
    let r = Reference::new("Organizes", NodeId::new(0, 85u32), true);
    let back = r.reciprocal(&source);
    assert_eq!(back.reference_type, "Organizes");
    assert_eq!(back.target_node, source);
    assert!(!back.is_forward);
}

#[test]
fn builder_panics_on_invalid_node() {
    let result = std::panic::catch_unwind(|| {
        // This should panic, the node id and browse name are null
        let _v = VariableBuilder::new(&NodeId::null(), "", "").build();
    });
    assert!(result.is_err());
}

#[test]
fn builder_builds_node() {
    let o = ObjectBuilder::new(&NodeId::new(1, "Hello"), "Foo", "Foo")
        .event_notifier(EventNotifier::SUBSCRIBE_TO_EVENTS)
        .description("Desc")
        .build();
    assert_eq!(o.node_id(), &NodeId::new(1, "Hello"));
    assert_eq!(o.browse_name(), &QualifiedName::new(0, "Foo"));
    assert_eq!(o.description().unwrap(), &LocalizedText::from("Desc"));
    assert_eq!(o.event_notifier(), EventNotifier::SUBSCRIBE_TO_EVENTS);
}

#[test]
fn variable_value_update() {
    let mut v = Variable::new(
        &NodeId::new(1, "v1"),
        "v1",
        "v1",
        NodeId::new(0, 12u32),
        "Hello world",
    );
    assert_eq!(
        v.value().value,
        Some(Variant::String("Hello world".to_string()))
    );
    v.set_value(99i32);
    let value: &DataValue = v.value();
    assert_eq!(value.value, Some(Variant::Int32(99)));
    assert_eq!(value.status(), StatusCode::Good);
}
