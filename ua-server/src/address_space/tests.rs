use ua_types::{
    service_types::{BrowsePath, RelativePath, RelativePathElement, MATCHED_ENTIRE_PATH},
    NodeId, QualifiedName, StatusCode,
};

use super::*;

fn make_sample_address_space() -> AddressSpace {
    let mut address_space = AddressSpace::new();
    address_space.alias("HasTypeDefinition", NodeId::new(0, 40u32));

    // Reference types go in first, the edges inserted later are normalized
    // against them.
    ReferenceTypeBuilder::new(&NodeId::references_type_id(), "References", "References")
        .symmetric(true)
        .is_abstract(true)
        .inverse_name("References")
        .insert(&mut address_space);
    ReferenceTypeBuilder::new(&NodeId::new(0, 45u32), "HasSubtype", "HasSubtype")
        .inverse_name("SubtypeOf")
        .insert(&mut address_space);
    ReferenceTypeBuilder::new(
        &NodeId::new(0, 33u32),
        "HierarchicalReferences",
        "HierarchicalReferences",
    )
    .is_abstract(true)
    .inverse_name("InverseHierarchicalReferences")
    .subtype_of(NodeId::references_type_id())
    .insert(&mut address_space);
    ReferenceTypeBuilder::new(&NodeId::new(0, 35u32), "Organizes", "Organizes")
        .inverse_name("OrganizedBy")
        .subtype_of(NodeId::new(0, 33u32))
        .insert(&mut address_space);
    ReferenceTypeBuilder::new(&NodeId::new(0, 47u32), "HasComponent", "HasComponent")
        .inverse_name("ComponentOf")
        .subtype_of(NodeId::new(0, 33u32))
        .insert(&mut address_space);
    ReferenceTypeBuilder::new(
        &NodeId::new(0, 40u32),
        "HasTypeDefinition",
        "HasTypeDefinition",
    )
    .inverse_name("TypeDefinitionOf")
    .insert(&mut address_space);

    // The root and objects folders with a forward Organizes edge between them
    address_space.insert(
        Object::new(
            &NodeId::root_folder_id(),
            "Root",
            "Root",
            EventNotifier::empty(),
        ),
        None,
    );
    ObjectBuilder::new(&NodeId::objects_folder_id(), "Objects", "Objects")
        .organized_by(NodeId::root_folder_id())
        .insert(&mut address_space);

    address_space
}

fn add_sample_vars_to_address_space(address_space: &mut AddressSpace) {
    let sample_folder_id = NodeId::new(1, "Sample");
    address_space.add_folder(
        &sample_folder_id,
        "Sample",
        "Sample",
        &NodeId::objects_folder_id(),
    );
    VariableBuilder::new(&NodeId::new(1, "v1"), "v1", "v1")
        .data_type(NodeId::new(0, 6u32))
        .value(30i32)
        .component_of(sample_folder_id)
        .insert(address_space);
}

#[test]
fn find_root_folder() {
    let address_space = make_sample_address_space();
    let node_type = address_space.find_node(&NodeId::new(0, 84u32));
    assert!(node_type.is_some());

    let node = node_type.unwrap().as_node();
    assert_eq!(node.node_id(), &NodeId::new(0, 84u32));
    assert_eq!(node.node_id(), &NodeId::root_folder_id());
}

#[test]
fn find_node_by_id() {
    let mut address_space = make_sample_address_space();
    add_sample_vars_to_address_space(&mut address_space);

    assert!(!address_space.node_exists(&NodeId::null()));
    assert!(!address_space.node_exists(&NodeId::new(11, "v3")));

    assert!(address_space.node_exists(&NodeId::objects_folder_id()));
    assert!(address_space.node_exists(&NodeId::new(1, "Sample")));
    assert!(address_space.node_exists(&NodeId::new(1, "v1")));
}

#[test]
fn browse_name_indices() {
    let mut address_space = make_sample_address_space();
    add_sample_vars_to_address_space(&mut address_space);

    // Objects and variables land in the same browsable-by-name index
    assert!(address_space.find_object_by_browse_name("Objects").is_some());
    assert!(address_space.find_object_by_browse_name("Sample").is_some());
    assert!(address_space.find_object_by_browse_name("v1").is_some());
    assert!(address_space.find_object_by_browse_name("Missing").is_none());

    // Views are browsable by name alongside objects
    address_space.insert(
        View::new(
            &NodeId::new(1, "View01"),
            "View01",
            "View01",
            EventNotifier::empty(),
            true,
        ),
        None,
    );
    assert!(address_space.find_object_by_browse_name("View01").is_some());

    // Type nodes each get their own index
    ObjectTypeBuilder::new(&NodeId::new(0, 61u32), "FolderType", "FolderType")
        .insert(&mut address_space);
    assert!(address_space
        .find_object_type_by_browse_name("FolderType")
        .is_some());
    assert!(address_space
        .find_object_by_browse_name("FolderType")
        .is_none());

    VariableTypeBuilder::new(
        &NodeId::new(0, 63u32),
        "BaseDataVariableType",
        "BaseDataVariableType",
    )
    .insert(&mut address_space);
    assert!(address_space
        .find_variable_type_by_browse_name("BaseDataVariableType")
        .is_some());

    DataTypeBuilder::new(&NodeId::new(0, 1u32), "Boolean", "Boolean")
        .insert(&mut address_space);
    assert!(address_space
        .find_data_type_by_browse_name("Boolean")
        .is_some());
}

#[test]
fn reference_type_lookup() {
    let address_space = make_sample_address_space();

    let by_name = address_space.find_reference_type("Organizes").unwrap();
    assert_eq!(by_name.node_id(), &NodeId::new(0, 35u32));

    // A node id string resolves through the primary map
    let by_id = address_space.find_reference_type("i=35").unwrap();
    assert_eq!(by_id.node_id(), &NodeId::new(0, 35u32));
    let by_id = address_space.find_reference_type("ns=0;i=35").unwrap();
    assert_eq!(by_id.node_id(), &NodeId::new(0, 35u32));

    // The inverse name table maps back to the same node
    let by_inverse = address_space
        .find_reference_type_from_inverse_name("OrganizedBy")
        .unwrap();
    assert_eq!(by_inverse.node_id(), &NodeId::new(0, 35u32));

    assert!(address_space.find_reference_type("Frobnicates").is_none());
    assert!(address_space
        .find_reference_type_from_inverse_name("FrobnicatedBy")
        .is_none());
}

#[test]
#[should_panic]
fn reference_type_lookup_wrong_class() {
    let address_space = make_sample_address_space();
    // i=84 exists but is an object, which signals a construction bug
    let _ = address_space.find_reference_type("i=84");
}

#[test]
fn normalize_reference_type() {
    let address_space = make_sample_address_space();

    // An inverse name flips the direction and takes the forward name
    assert_eq!(
        address_space.normalize_reference_type("OrganizedBy", Some(true)),
        ("Organizes".to_string(), false)
    );
    assert_eq!(
        address_space.normalize_reference_type("OrganizedBy", Some(false)),
        ("Organizes".to_string(), true)
    );

    // A forward name passes through
    assert_eq!(
        address_space.normalize_reference_type("Organizes", Some(false)),
        ("Organizes".to_string(), false)
    );

    // An absent direction counts as forward
    assert_eq!(
        address_space.normalize_reference_type("Organizes", None),
        ("Organizes".to_string(), true)
    );

    // Unknown reference types are tolerated
    assert_eq!(
        address_space.normalize_reference_type("Frobnicates", Some(false)),
        ("Frobnicates".to_string(), false)
    );

    // Normalization is idempotent
    for (name, is_forward) in [
        ("Organizes", true),
        ("OrganizedBy", false),
        ("References", true),
        ("Frobnicates", true),
    ] {
        let once = address_space.normalize_reference_type(name, Some(is_forward));
        let twice = address_space.normalize_reference_type(&once.0, Some(once.1));
        assert_eq!(once, twice);
    }
}

#[test]
fn inverse_reference_type() {
    let address_space = make_sample_address_space();

    assert_eq!(
        address_space.inverse_reference_type("Organizes"),
        Some("OrganizedBy".to_string())
    );
    assert_eq!(
        address_space.inverse_reference_type("OrganizedBy"),
        Some("Organizes".to_string())
    );
    assert_eq!(address_space.inverse_reference_type("Frobnicates"), None);

    // The swap is an involution for every known name
    for name in ["Organizes", "OrganizedBy", "HasSubtype", "SubtypeOf"] {
        let partner = address_space.inverse_reference_type(name).unwrap();
        assert_eq!(
            address_space.inverse_reference_type(&partner).as_deref(),
            Some(name)
        );
    }
}

#[test]
fn alias_resolution() {
    let address_space = make_sample_address_space();

    // The alias table wins over the generic parser
    assert_eq!(
        address_space.resolve_node_id("HasTypeDefinition").unwrap(),
        NodeId::new(0, 40u32)
    );
    // Everything else goes through the node id syntax
    assert_eq!(
        address_space.resolve_node_id("i=84").unwrap(),
        NodeId::root_folder_id()
    );
    assert!(address_space.resolve_node_id("NoSuchAlias").is_err());
}

#[test]
fn duplicate_registration_panics() {
    let result = std::panic::catch_unwind(|| {
        let mut address_space = make_sample_address_space();
        address_space.insert(
            Object::new(
                &NodeId::root_folder_id(),
                "Root2",
                "Root2",
                EventNotifier::empty(),
            ),
            None,
        );
    });
    assert!(result.is_err());
}

#[test]
fn reference_type_without_inverse_name_panics() {
    let result = std::panic::catch_unwind(|| {
        let mut address_space = make_sample_address_space();
        ReferenceTypeBuilder::new(&NodeId::new(1, "NoInverse"), "NoInverse", "NoInverse")
            .insert(&mut address_space);
    });
    assert!(result.is_err());
}

#[test]
fn empty_browse_name_panics() {
    let result = std::panic::catch_unwind(|| {
        let mut address_space = make_sample_address_space();
        address_space.insert(
            Object::new(&NodeId::new(1, "x"), QualifiedName::null(), "x", EventNotifier::empty()),
            None,
        );
    });
    assert!(result.is_err());
}

#[test]
fn reciprocal_references() {
    let address_space = make_sample_address_space();
    let root = NodeId::root_folder_id();
    let objects = NodeId::objects_folder_id();

    assert!(address_space.has_reference(&root, &objects, "Organizes"));
    // The mirrored half is queryable through the inverse name
    assert!(address_space.has_reference(&objects, &root, "OrganizedBy"));
    assert!(!address_space.has_reference(&objects, &root, "Organizes"));
}

#[test]
fn insert_reference_normalizes_inverse_names() {
    let mut address_space = make_sample_address_space();
    let a = NodeId::new(1, "a");
    let b = NodeId::new(1, "b");
    address_space.insert(
        Object::new(&a, "a", "a", EventNotifier::empty()),
        None,
    );
    address_space.insert(
        Object::new(&b, "b", "b", EventNotifier::empty()),
        None,
    );

    // a is OrganizedBy b, i.e. b Organizes a
    address_space.insert_reference(&a, &b, "OrganizedBy");
    assert!(address_space.has_reference(&b, &a, "Organizes"));
}

#[test]
fn dangling_reference_is_tolerated() {
    let mut address_space = make_sample_address_space();
    let missing = NodeId::new(1, "Missing");
    address_space.insert_reference(&NodeId::objects_folder_id(), &missing, "Organizes");

    // The forward half exists, the mirror does not, and browsing skips the
    // dead branch
    assert!(address_space.has_reference(&NodeId::objects_folder_id(), &missing, "Organizes"));
    assert_eq!(
        address_space.simple_browse_path("i=85", "Missing"),
        None
    );
}

#[test]
fn simple_browse_path_finds_objects() {
    let address_space = make_sample_address_space();
    assert_eq!(
        address_space.simple_browse_path("/", "Objects"),
        Some(NodeId::objects_folder_id())
    );
}

#[test]
fn simple_browse_path_multi_hop() {
    let mut address_space = make_sample_address_space();
    add_sample_vars_to_address_space(&mut address_space);
    assert_eq!(
        address_space.simple_browse_path("/", "Objects.Sample.v1"),
        Some(NodeId::new(1, "v1"))
    );
    // Namespace prefixes select the namespace of each segment
    assert_eq!(
        address_space.simple_browse_path("/", "Objects.1:Sample"),
        None
    );
}

#[test]
fn simple_browse_path_no_match() {
    let address_space = make_sample_address_space();
    assert_eq!(address_space.simple_browse_path("/", "Missing"), None);

    let browse_path = construct_browse_path("/", "Missing").unwrap();
    let result = address_space.browse_path(&browse_path);
    assert_eq!(result.status_code, StatusCode::BadNoMatch);
    assert!(result.targets.is_none());
}

#[test]
fn browse_path_empty_elements() {
    let address_space = make_sample_address_space();
    let browse_path = BrowsePath {
        starting_node: NodeId::root_folder_id(),
        relative_path: RelativePath { elements: None },
    };
    assert_eq!(
        address_space.browse_path(&browse_path).status_code,
        StatusCode::BadNothingToDo
    );

    let browse_path = BrowsePath {
        starting_node: NodeId::root_folder_id(),
        relative_path: RelativePath {
            elements: Some(Vec::new()),
        },
    };
    assert_eq!(
        address_space.browse_path(&browse_path).status_code,
        StatusCode::BadNothingToDo
    );
}

#[test]
fn browse_path_empty_target_name() {
    let address_space = make_sample_address_space();
    let browse_path = construct_browse_path("/", "").unwrap();
    assert_eq!(
        address_space.browse_path(&browse_path).status_code,
        StatusCode::BadBrowseNameInvalid
    );
}

#[test]
fn browse_path_unknown_starting_node() {
    let address_space = make_sample_address_space();
    let browse_path = construct_browse_path("ns=9;i=999", "Objects").unwrap();
    assert_eq!(
        address_space.browse_path(&browse_path).status_code,
        StatusCode::BadNodeIdUnknown
    );
}

#[test]
fn browse_path_depth_guard() {
    let address_space = make_sample_address_space();
    let path = vec!["Objects"; MAX_BROWSE_PATH_DEPTH + 1].join(".");
    let browse_path = construct_browse_path("/", &path).unwrap();
    assert_eq!(
        address_space.browse_path(&browse_path).status_code,
        StatusCode::BadQueryTooComplex
    );
}

#[test]
fn browse_path_targets_carry_sentinel() {
    let address_space = make_sample_address_space();
    let browse_path = construct_browse_path("/", "Objects").unwrap();
    let result = address_space.browse_path(&browse_path);
    assert_eq!(result.status_code, StatusCode::Good);
    let targets = result.targets.unwrap();
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].target_id, NodeId::objects_folder_id());
    assert_eq!(targets[0].remaining_path_index, MATCHED_ENTIRE_PATH);
}

#[test]
fn browse_with_reference_type_filter() {
    let address_space = make_sample_address_space();

    // Direct match on the concrete type
    let element = RelativePathElement {
        reference_type_id: NodeId::new(0, 35u32),
        is_inverse: false,
        include_subtypes: false,
        target_name: "Objects".into(),
    };
    assert_eq!(
        address_space.browse_node_by_target_name(&NodeId::root_folder_id(), &element),
        vec![NodeId::objects_folder_id()]
    );

    // The abstract super type only matches when subtypes are included
    let element = RelativePathElement {
        reference_type_id: NodeId::new(0, 33u32),
        is_inverse: false,
        include_subtypes: false,
        target_name: "Objects".into(),
    };
    assert!(address_space
        .browse_node_by_target_name(&NodeId::root_folder_id(), &element)
        .is_empty());

    let element = RelativePathElement {
        reference_type_id: NodeId::new(0, 33u32),
        is_inverse: false,
        include_subtypes: true,
        target_name: "Objects".into(),
    };
    assert_eq!(
        address_space.browse_node_by_target_name(&NodeId::root_folder_id(), &element),
        vec![NodeId::objects_folder_id()]
    );
}

#[test]
fn browse_inverse_direction() {
    let address_space = make_sample_address_space();
    let element = RelativePathElement {
        reference_type_id: NodeId::new(0, 35u32),
        is_inverse: true,
        include_subtypes: false,
        target_name: "Root".into(),
    };
    assert_eq!(
        address_space.browse_node_by_target_name(&NodeId::objects_folder_id(), &element),
        vec![NodeId::root_folder_id()]
    );
}

#[test]
fn translate_browse_paths_batch() {
    let address_space = make_sample_address_space();
    let browse_paths = vec![
        construct_browse_path("/", "Objects").unwrap(),
        construct_browse_path("/", "Missing").unwrap(),
    ];
    let results = address_space.translate_browse_paths_to_node_ids(&browse_paths);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].status_code, StatusCode::Good);
    assert_eq!(results[1].status_code, StatusCode::BadNoMatch);
}

#[test]
fn subtype_walk() {
    let address_space = make_sample_address_space();
    let references = NodeId::references_type_id();
    let hierarchical = NodeId::new(0, 33u32);
    let organizes = NodeId::new(0, 35u32);

    assert!(address_space.reference_type_is_subtype_of(&organizes, &hierarchical));
    assert!(address_space.reference_type_is_subtype_of(&organizes, &references));
    assert!(address_space.reference_type_is_subtype_of(&organizes, &organizes));
    assert!(!address_space.reference_type_is_subtype_of(&hierarchical, &organizes));
    assert!(!address_space.reference_type_is_subtype_of(&references, &organizes));
}

#[test]
fn construct_browse_path_errors() {
    assert!(construct_browse_path("/", "Objects.1:Sample").is_ok());
    assert_eq!(
        construct_browse_path("borked", "Objects"),
        Err(BrowsePathError::InvalidStartingNode("borked".to_string()))
    );
    assert_eq!(
        construct_browse_path("/", "Objects.x:Sample"),
        Err(BrowsePathError::InvalidNamespacePrefix(
            "x:Sample".to_string()
        ))
    );
}
