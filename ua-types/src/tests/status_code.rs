use crate::StatusCode;

#[test]
fn severity() {
    assert!(StatusCode::Good.is_good());
    assert!(!StatusCode::Good.is_bad());
    assert!(!StatusCode::Good.is_uncertain());

    assert!(StatusCode::BadNodeIdUnknown.is_bad());
    assert!(!StatusCode::BadNodeIdUnknown.is_good());

    assert!(StatusCode::UncertainReferenceOutOfServer.is_uncertain());
    assert!(!StatusCode::UncertainReferenceOutOfServer.is_bad());
    assert!(!StatusCode::UncertainReferenceOutOfServer.is_good());
}

#[test]
fn names() {
    assert_eq!(StatusCode::Good.name(), "Good");
    assert_eq!(StatusCode::BadNoMatch.name(), "BadNoMatch");
    assert_eq!(StatusCode::BadNothingToDo.to_string(), "BadNothingToDo");
}

#[test]
fn default_is_good() {
    assert_eq!(StatusCode::default(), StatusCode::Good);
}
