use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use serde_tristate::{BindOptions, Error, JsonAdapter, NullTokens, TriState};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct UpdateUser {
    #[serde(default)]
    nickname: TriState<String>,
    #[serde(default)]
    age: TriState<u32>,
    #[serde(default)]
    tags: TriState<Vec<String>>,
    #[serde(default)]
    address: TriState<Address>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
struct Address {
    city: String,
    #[serde(default)]
    zip: TriState<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct SparsePatch {
    #[serde(default, skip_serializing_if = "TriState::is_absent")]
    email: TriState<String>,
    #[serde(default, skip_serializing_if = "TriState::is_absent")]
    phone: TriState<String>,
    #[serde(default, skip_serializing_if = "TriState::is_absent")]
    score: TriState<i64>,
}

#[test]
fn test_read_three_states() {
    let update: UpdateUser =
        serde_tristate::from_str(r#"{"nickname": null, "age": 42}"#).unwrap();

    assert_eq!(update.nickname, TriState::Null);
    assert_eq!(update.age, TriState::of(42));
    assert_eq!(update.tags, TriState::Absent);
    assert_eq!(update.address, TriState::Absent);
}

#[test]
fn test_string_null_tokens() {
    let update: UpdateUser =
        serde_tristate::from_str(r#"{"nickname": "NULL", "age": "nil", "tags": "Nil"}"#).unwrap();

    assert_eq!(update.nickname, TriState::Null);
    assert_eq!(update.age, TriState::Null);
    assert_eq!(update.tags, TriState::Null);
}

#[test]
fn test_structured_values() {
    let update: UpdateUser = serde_tristate::from_str(
        r#"{"tags": ["a", "b"], "address": {"city": "Oslo", "zip": null}}"#,
    )
    .unwrap();

    assert_eq!(
        update.tags,
        TriState::of(vec!["a".to_string(), "b".to_string()])
    );
    assert_eq!(
        update.address,
        TriState::of(Address {
            city: "Oslo".to_string(),
            zip: TriState::Null,
        })
    );
}

#[test]
fn test_empty_array_is_a_value() {
    let update: UpdateUser = serde_tristate::from_str(r#"{"tags": []}"#).unwrap();
    assert_eq!(update.tags, TriState::of(vec![]));
}

#[test]
fn test_type_mismatch_fails() {
    let result: serde_tristate::Result<UpdateUser> =
        serde_tristate::from_str(r#"{"age": "forty"}"#);
    match result {
        Err(Error::Json(msg)) => assert!(msg.contains("forty") || msg.contains("u32")),
        other => panic!("expected a JSON error, got {other:?}"),
    }
}

#[test]
fn test_write_is_lossy() {
    let update = UpdateUser {
        nickname: TriState::Absent,
        age: TriState::Null,
        tags: TriState::of(vec!["x".to_string()]),
        address: TriState::Absent,
    };

    assert_eq!(
        serde_tristate::to_value(&update).unwrap(),
        json!({"nickname": null, "age": null, "tags": ["x"], "address": null})
    );
}

#[test]
fn test_skip_absent_round_trip() {
    let patch = SparsePatch {
        email: TriState::Null,
        phone: TriState::Absent,
        score: TriState::of(-3),
    };

    let text = serde_tristate::to_string(&patch).unwrap();
    assert_eq!(text, r#"{"email":null,"score":-3}"#);

    let back: SparsePatch = serde_tristate::from_str(&text).unwrap();
    assert_eq!(back, patch);
}

#[test]
fn test_custom_tokens_replace_defaults() {
    let adapter = JsonAdapter::with_null_tokens(NullTokens::new(["undefined", "none"]));

    let update: UpdateUser = adapter
        .from_str(r#"{"nickname": "null", "tags": "UNDEFINED", "age": null}"#)
        .unwrap();

    assert_eq!(update.nickname, TriState::of("null".to_string()));
    assert_eq!(update.tags, TriState::Null);
    assert_eq!(update.age, TriState::Null);
}

#[test]
fn test_scope_ends_with_call() {
    let adapter = JsonAdapter::new(BindOptions::new().with_null_tokens(NullTokens::none()));

    let scoped: UpdateUser = adapter.from_str(r#"{"nickname": "nil"}"#).unwrap();
    assert_eq!(scoped.nickname, TriState::of("nil".to_string()));

    let plain: UpdateUser = serde_tristate::from_str(r#"{"nickname": "nil"}"#).unwrap();
    assert_eq!(plain.nickname, TriState::Null);
}

#[test]
fn test_nested_fields_use_adapter_tokens() {
    let adapter = JsonAdapter::with_null_tokens(NullTokens::new(["-"]));
    let update: UpdateUser = adapter
        .from_slice(br#"{"address": {"city": "Bergen", "zip": "-"}}"#)
        .unwrap();

    let address = update.address.into_value().unwrap();
    assert_eq!(address.zip, TriState::Null);
}

#[test]
fn test_read_single_tokens() {
    let adapter = JsonAdapter::default();

    assert_eq!(adapter.read::<u32>(Value::Null).unwrap(), TriState::Null);
    assert_eq!(adapter.read::<u32>(json!("null")).unwrap(), TriState::Null);
    assert_eq!(adapter.read::<u32>(json!(5)).unwrap(), TriState::of(5));
    assert_eq!(
        adapter.read::<String>(json!("nullable")).unwrap(),
        TriState::of("nullable".to_string())
    );
    assert!(adapter.read::<u32>(json!("five")).is_err());
}

#[test]
fn test_from_value() {
    let adapter = JsonAdapter::default();
    let update: UpdateUser = adapter
        .from_value(json!({"age": 30, "nickname": "nil"}))
        .unwrap();

    assert_eq!(update.age, TriState::of(30));
    assert_eq!(update.nickname, TriState::Null);
}

#[test]
fn test_write_single_field() {
    let adapter = JsonAdapter::default();

    assert_eq!(adapter.write(&TriState::<u8>::Absent).unwrap(), Value::Null);
    assert_eq!(adapter.write(&TriState::<u8>::Null).unwrap(), Value::Null);
    assert_eq!(adapter.write(&TriState::of(8u8)).unwrap(), json!(8));
}

#[test]
fn test_adapters_on_separate_threads() {
    let handles: Vec<_> = [("a", "a"), ("b", "nil")]
        .into_iter()
        .map(|(token, input)| {
            std::thread::spawn(move || {
                let adapter = JsonAdapter::with_null_tokens(NullTokens::new([token]));
                let text = format!(r#"{{"nickname": "{input}"}}"#);
                adapter.from_str::<UpdateUser>(&text).unwrap().nickname
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0], TriState::Null);
    assert_eq!(results[1], TriState::of("nil".to_string()));
}

#[test]
fn test_absent_collapses_to_null() {
    let text = serde_tristate::to_string(&TriState::<u32>::Absent).unwrap();
    assert_eq!(text, "null");

    let back: TriState<u32> = serde_tristate::from_str(&text).unwrap();
    assert_eq!(back, TriState::Null);
}

#[test]
fn test_wide_integers_round_trip() {
    let text = serde_tristate::to_string(&TriState::of(u128::MAX)).unwrap();
    let back: TriState<u128> = serde_tristate::from_str(&text).unwrap();
    assert_eq!(back, TriState::of(u128::MAX));

    let text = serde_tristate::to_string(&TriState::of(i128::MIN)).unwrap();
    let back: TriState<i128> = serde_tristate::from_str(&text).unwrap();
    assert_eq!(back, TriState::of(i128::MIN));
}

/// Records object keys in the order the deserializer hands them over.
#[derive(Debug, PartialEq)]
struct KeyOrder(Vec<String>);

impl<'de> Deserialize<'de> for KeyOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct KeyOrderVisitor;

        impl<'de> serde::de::Visitor<'de> for KeyOrderVisitor {
            type Value = KeyOrder;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("an object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<KeyOrder, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut keys = Vec::new();
                while let Some(key) = map.next_key::<String>()? {
                    map.next_value::<serde::de::IgnoredAny>()?;
                    keys.push(key);
                }
                Ok(KeyOrder(keys))
            }
        }

        deserializer.deserialize_map(KeyOrderVisitor)
    }
}

#[test]
fn test_member_order_reaches_inner_type() {
    let text = r#"{"b": 1, "a": 2}"#;

    let direct: KeyOrder = serde_json::from_str(text).unwrap();
    let wrapped: TriState<KeyOrder> = serde_tristate::from_str(text).unwrap();

    assert_eq!(direct, KeyOrder(vec!["b".to_string(), "a".to_string()]));
    assert_eq!(wrapped, TriState::of(direct));
}

#[derive(Deserialize, Debug, PartialEq)]
struct Lookup<'a> {
    #[serde(borrow, default)]
    name: TriState<&'a str>,
    #[serde(borrow, default)]
    alias: TriState<&'a str>,
}

#[test]
fn test_borrowed_str_field() {
    let text = String::from(r#"{"name": "ada", "alias": "nil"}"#);
    let lookup: Lookup = serde_tristate::from_str(&text).unwrap();

    assert_eq!(lookup.name, TriState::of("ada"));
    assert_eq!(lookup.alias, TriState::Null);
}

#[test]
fn test_from_value_keeps_tokens() {
    let adapter = JsonAdapter::with_null_tokens(NullTokens::new(["-"]));
    let update: UpdateUser = adapter
        .from_value(json!({"nickname": "-", "age": 7, "tags": null}))
        .unwrap();

    assert_eq!(update.nickname, TriState::Null);
    assert_eq!(update.age, TriState::of(7));
    assert_eq!(update.tags, TriState::Null);
}
