use crate::{SimpleVector, simple_vector};

#[test]
fn test_serialize_live_elements_only() {
    let mut v = simple_vector![1, 2, 3];
    v.pop_back();
    v.reserve(10);
    assert_eq!(serde_json::to_string(&v).unwrap(), "[1,2]");
}

#[test]
fn test_deserialize_sizes_capacity_to_len() {
    let v: SimpleVector<String> = serde_json::from_str(r#"["a","b","c"]"#).unwrap();
    assert_eq!(v, ["a", "b", "c"]);
    assert_eq!(v.capacity(), 3);

    let e: SimpleVector<u8> = serde_json::from_str("[]").unwrap();
    assert!(e.is_empty());
    assert_eq!(e.capacity(), 0);
}
