use crate::errors::StoreError;

#[test]
fn test_constructor_wraps_variant() {
    let err = StoreError::duplicate_type_name("foo");
    assert!(matches!(err.downcast_ref::<StoreError>(), Some(StoreError::DuplicateTypeName(name)) if name == "foo"));
    assert_eq!(err.to_string(), "a type named foo already exists in this family");
}

#[test]
fn test_constructor_non_string_field() {
    let err = StoreError::unknown_type_id(42);
    assert!(matches!(err.downcast_ref::<StoreError>(), Some(StoreError::UnknownTypeId(42))));
}
