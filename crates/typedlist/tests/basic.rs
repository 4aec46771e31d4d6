use typedlist::{
    AcceptedType, Error, ListOptions, RangeViolation, Result, TypedList, Value, typed_list,
};

fn strings(values: &[&str]) -> Vec<Value> {
    values.iter().map(|&v| Value::from(v)).collect()
}

// ============================================================================
// Construction & type gate
// ============================================================================

#[test]
fn test_accepted_type_is_canonical() -> Result<()> {
    let cases = [
        ("string", "string"),
        ("integer", "integer"),
        ("float", "double"),
        ("double", "double"),
        ("boolean", "boolean"),
        ("array", "array"),
        ("TypedList", "TypedList"),
    ];

    for (tag, expected) in cases {
        let list = TypedList::parse(tag)?;
        assert_eq!(list.accepted_type().as_str(), expected);
        assert!(list.is_empty());
    }

    Ok(())
}

#[test]
fn test_invalid_descriptor() {
    assert_eq!(
        TypedList::parse("not a type"),
        Err(Error::InvalidTypeDescriptor("not a type".to_string()))
    );
}

#[test]
fn test_insert_each_kind() -> Result<()> {
    let mut string = TypedList::parse("string")?;
    let mut integer = TypedList::parse("integer")?;
    let mut float = TypedList::parse("float")?;
    let mut double = TypedList::parse("double")?;
    let mut boolean = TypedList::parse("boolean")?;
    let mut array = TypedList::parse("array")?;
    let mut nested = TypedList::parse("TypedList")?;

    string.insert("hello")?;
    integer.insert(1)?;
    float.insert(1.5)?;
    double.insert(4.5)?;
    boolean.insert(true)?;
    array.insert(vec![Value::from("hello"), Value::from(1), Value::from(1.5)])?;
    nested.insert(Value::object(TypedList::parse("string")?))?;

    for len in [
        string.len(),
        integer.len(),
        float.len(),
        double.len(),
        boolean.len(),
        array.len(),
        nested.len(),
    ] {
        assert_eq!(len, 1);
    }

    Ok(())
}

#[test]
fn test_insert_wrong_type() -> Result<()> {
    let mut list = TypedList::new(AcceptedType::String);
    list.insert("hello")?;

    let err = list.insert(1).unwrap_err();
    assert_eq!(
        err,
        Error::TypeMismatch {
            expected: AcceptedType::String,
            found: "integer".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "The element should be of type string but integer found"
    );
    assert_eq!(list.to_vec(), strings(&["hello"]));

    Ok(())
}

#[test]
fn test_no_numeric_widening() -> Result<()> {
    let mut floats = TypedList::parse("float")?;
    let mut ints = TypedList::parse("integer")?;

    assert!(floats.insert(1).is_err());
    assert!(ints.insert(1.0).is_err());
    assert!(floats.is_empty() && ints.is_empty());

    floats.insert(7.56)?;
    ints.insert(7)?;
    assert_eq!(floats.get(0)?, &Value::Double(7.56));
    assert_eq!(ints.get(0)?, &Value::Integer(7));

    Ok(())
}

#[test]
fn test_float_and_double_lists_interchangeable() -> Result<()> {
    let mut float = TypedList::parse("float")?;
    let mut double = TypedList::new(AcceptedType::Double);

    float.insert(7.56)?;
    double.insert(7.56_f32)?;

    assert_eq!(float.accepted_type(), double.accepted_type());
    assert!(matches!(float.get(0)?, Value::Double(_)));
    assert!(matches!(double.get(0)?, Value::Double(_)));

    Ok(())
}

#[test]
fn test_with_options() {
    let list: TypedList = TypedList::with_options(ListOptions::new(AcceptedType::Boolean).with_capacity(16));
    assert_eq!(list.accepted_type(), &AcceptedType::Boolean);
    assert!(list.is_empty());

    let list: TypedList = TypedList::with_options((AcceptedType::Array, 4));
    assert_eq!(list.accepted_type(), &AcceptedType::Array);

    assert_eq!(
        ListOptions::parse("float").map(|o| o.accepted),
        Ok(AcceptedType::Double)
    );
}

// ============================================================================
// Bulk insertion
// ============================================================================

#[test]
fn test_insert_multiple_and_many() -> Result<()> {
    let mut list = TypedList::new(AcceptedType::String);
    list.insert_multiple(["hello", "world", "!"])?;
    assert_eq!(list.count(), 3);

    let mut list = TypedList::new(AcceptedType::String);
    list.insert_many(vec!["hello", "world", "!"])?;
    assert_eq!(list.count(), 3);
    assert_eq!(list.get(0)?, &Value::from("hello"));
    assert_eq!(list.get(1)?, &Value::from("world"));
    assert_eq!(list.get(2)?, &Value::from("!"));

    Ok(())
}

#[test]
fn test_insert_many_partial_commit() {
    let mut list = TypedList::new(AcceptedType::String);

    let res = list.insert_many([Value::from("a"), Value::from("b"), Value::from(3), Value::from("d")]);

    assert!(matches!(res, Err(Error::TypeMismatch { .. })));
    assert_eq!(list.to_vec(), strings(&["a", "b"]));
}

#[test]
fn test_insert_many_atomic_commits_nothing() -> Result<()> {
    let mut list = TypedList::new(AcceptedType::String);
    list.insert("x")?;

    let res = list.insert_many_atomic([Value::from("a"), Value::from(2), Value::from("c")]);
    assert!(matches!(res, Err(Error::TypeMismatch { .. })));
    assert_eq!(list.to_vec(), strings(&["x"]));

    list.insert_many_atomic(["a", "b"])?;
    assert_eq!(list.to_vec(), strings(&["x", "a", "b"]));

    Ok(())
}

#[test]
fn test_typed_list_macro() -> Result<()> {
    let list = typed_list!("string"; "hello", "world")?;
    assert_eq!(list.to_vec(), strings(&["hello", "world"]));

    let empty = typed_list!("float")?;
    assert_eq!(empty.accepted_type(), &AcceptedType::Double);

    assert!(matches!(
        typed_list!("integer"; 1, "two", 3),
        Err(Error::TypeMismatch { .. })
    ));

    Ok(())
}

#[test]
fn test_from_values() -> Result<()> {
    let list = TypedList::from_values(AcceptedType::Integer, [Value::from(1), Value::from(2)])?;
    assert_eq!(list.len(), 2);

    assert!(TypedList::from_values(AcceptedType::Integer, [Value::from(true)]).is_err());

    Ok(())
}

// ============================================================================
// Positional access & mutation
// ============================================================================

#[test]
fn test_get() -> Result<()> {
    let list = typed_list!("string"; "hello", "world")?;

    assert_eq!(list.get(1)?, &Value::from("world"));
    assert_eq!(list.get(2), Err(Error::IndexOutOfBounds { index: 2, len: 2 }));

    Ok(())
}

#[test]
fn test_set() -> Result<()> {
    let mut list = typed_list!("string"; "hello", "world", "!")?;

    assert_eq!(list.set(1, "people")?, Value::from("world"));
    assert_eq!(list.to_vec(), strings(&["hello", "people", "!"]));

    assert!(matches!(list.set(1, 2), Err(Error::TypeMismatch { .. })));
    assert_eq!(list.set(5, "people"), Err(Error::IndexOutOfBounds { index: 5, len: 3 }));
    assert_eq!(list.to_vec(), strings(&["hello", "people", "!"]));

    Ok(())
}

#[test]
fn test_set_checks_bounds_before_type() -> Result<()> {
    let mut list = typed_list!("string"; "hello")?;

    assert_eq!(list.set(3, 42), Err(Error::IndexOutOfBounds { index: 3, len: 1 }));

    Ok(())
}

#[test]
fn test_remove_at_compacts() -> Result<()> {
    let mut list = typed_list!("string"; "hello", "world")?;

    assert_eq!(list.remove_at(0)?, Value::from("hello"));
    assert_eq!(list.count(), 1);
    assert_eq!(list.get(0)?, &Value::from("world"));
    assert!(list.get(1).is_err());

    assert_eq!(list.remove_at(3), Err(Error::IndexOutOfBounds { index: 3, len: 1 }));

    Ok(())
}

#[test]
fn test_remove_by_value() -> Result<()> {
    let mut list = typed_list!("string"; "hello", "world", "hello")?;

    assert!(list.remove(&"hello".into()));
    assert!(!list.remove(&"foo".into()));
    assert_eq!(list.to_vec(), strings(&["world", "hello"]));

    Ok(())
}

#[test]
fn test_remove_all() -> Result<()> {
    let mut list = typed_list!("string"; "hello", "world", "!", "This is", "a", "test")?;

    assert!(list.remove_all(["world", "!", "This is"]));
    assert!(!list.remove_all(["foo", "bar"]));
    assert!(list.remove_all(["test", "bar"]));

    assert_eq!(list.count(), 2);
    assert_eq!(list.get(0)?, &Value::from("hello"));
    assert_eq!(list.get(1)?, &Value::from("a"));

    Ok(())
}

#[test]
fn test_remove_all_duplicates_remove_one_each() -> Result<()> {
    let mut list = typed_list!("integer"; 1, 1, 1, 2)?;

    assert!(list.remove_all([1, 1]));
    assert_eq!(list.to_vec(), vec![Value::from(1), Value::from(2)]);

    Ok(())
}

#[test]
fn test_clear() -> Result<()> {
    let mut list = typed_list!("string"; "hello", "world", "!", "This is", "a", "test")?;

    assert!(!list.is_empty());
    assert!(list.clear());
    assert_eq!(list.count(), 0);
    assert!(list.is_empty());
    assert!(list.clear());

    // Still usable afterwards.
    list.insert("again")?;
    assert_eq!(list.count(), 1);

    Ok(())
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_contains() -> Result<()> {
    let list = typed_list!("string"; "hello", "world")?;

    assert!(list.contains(&"hello".into()));
    assert!(list.contains(&"world".into()));
    assert!(!list.contains(&"!".into()));

    assert!(!list.contains(&2.into()));
    assert!(!list.contains(&2.56.into()));
    assert!(!list.contains(&Value::object(TypedList::parse("string")?)));

    Ok(())
}

#[test]
fn test_index_of() -> Result<()> {
    let list = typed_list!("string"; "hello", "world", "!")?;

    assert_eq!(list.index_of(&"world".into()), 1);
    assert_eq!(list.index_of(&"!".into()), 2);
    assert_eq!(list.index_of(&"foo".into()), -1);
    assert_eq!(list.position(&"foo".into()), None);
    assert_eq!(list.position(&"hello".into()), Some(0));

    Ok(())
}

#[test]
fn test_last_index() -> Result<()> {
    let mut list = typed_list!("string"; "hello", "world", "!")?;
    assert_eq!(list.last_index(), 2);

    list.clear();
    assert_eq!(list.last_index(), 0);
    assert!(list.is_empty());

    list.insert("one")?;
    assert_eq!(list.last_index(), 0);
    assert!(!list.is_empty());

    Ok(())
}

#[test]
fn test_snapshot_is_independent() -> Result<()> {
    let mut list = typed_list!("string"; "hello", "world", "!")?;

    let mut snapshot = list.to_vec();
    assert_eq!(snapshot, strings(&["hello", "world", "!"]));

    snapshot.push(Value::from(1));
    list.remove_at(0)?;
    assert_eq!(snapshot.len(), 4);
    assert_eq!(list.to_vec(), strings(&["world", "!"]));

    list.clear();
    assert!(list.to_vec().is_empty());

    Ok(())
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn test_export() -> Result<()> {
    let list = typed_list!("string"; "hello", "world", "!")?;

    let exported = list.export(1, 2)?;
    assert_eq!(exported.accepted_type(), &AcceptedType::String);
    assert_eq!(exported.to_vec(), strings(&["world", "!"]));
    assert_eq!(list.len(), 3);

    let whole = typed_list!("integer"; 1, 2, 3, 4)?.export(0, 3)?;
    assert_eq!(whole.len(), 4);

    Ok(())
}

#[test]
fn test_export_range_violations() -> Result<()> {
    let list = typed_list!("string"; "hello", "world", "!")?;

    let err = list.export(2, 1).unwrap_err();
    assert_eq!(err, Error::InvalidRange(RangeViolation::FromNotBeforeTo { from: 2, to: 1 }));
    assert_eq!(err.to_string(), "The fromIndex should be less than toIndex");

    let err = list.export(3, 5).unwrap_err();
    assert_eq!(err, Error::InvalidRange(RangeViolation::FromNotBeforeLast { from: 3, last: 2 }));
    assert_eq!(
        err.to_string(),
        "The fromIndex should be less than the last index which is 2"
    );

    let err = list.export(1, 5).unwrap_err();
    assert_eq!(err, Error::InvalidRange(RangeViolation::ToPastLast { to: 5, last: 2 }));
    assert_eq!(
        err.to_string(),
        "The toIndex should be less than the last index which is 2"
    );

    Ok(())
}

#[test]
fn test_export_short_lists() -> Result<()> {
    let empty = TypedList::new(AcceptedType::String);
    assert!(matches!(empty.export(0, 1), Err(Error::InvalidRange(_))));

    let single = typed_list!("string"; "only")?;
    assert!(matches!(single.export(0, 0), Err(Error::InvalidRange(_))));
    assert!(matches!(single.export(0, 1), Err(Error::InvalidRange(_))));

    Ok(())
}

#[test]
fn test_export_is_independent() -> Result<()> {
    let mut list = typed_list!("integer"; 1, 2, 3)?;
    let mut exported = list.export(0, 2)?;

    exported.set(0, 10)?;
    list.remove_at(2)?;

    assert_eq!(list.to_vec(), vec![Value::from(1), Value::from(2)]);
    assert_eq!(
        exported.to_vec(),
        vec![Value::from(10), Value::from(2), Value::from(3)]
    );

    Ok(())
}
