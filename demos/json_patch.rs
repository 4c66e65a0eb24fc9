//! Applying a JSON partial update with tri-state fields.
//!
//! Run with: cargo run --example json_patch

use serde::{Deserialize, Serialize};
use serde_tristate::TriState;
use std::error::Error;

#[derive(Debug, Clone, Serialize)]
struct User {
    name: String,
    nickname: Option<String>,
    age: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct UserPatch {
    #[serde(default, skip_serializing_if = "TriState::is_absent")]
    name: TriState<String>,
    #[serde(default, skip_serializing_if = "TriState::is_absent")]
    nickname: TriState<String>,
    #[serde(default, skip_serializing_if = "TriState::is_absent")]
    age: TriState<u32>,
}

fn apply<T>(slot: &mut Option<T>, field: TriState<T>) {
    match field {
        TriState::Absent => {}
        TriState::Null => *slot = None,
        TriState::Value(v) => *slot = Some(v),
    }
}

impl User {
    fn patch(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name.into_value() {
            self.name = name;
        }
        apply(&mut self.nickname, patch.nickname);
        apply(&mut self.age, patch.age);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut user = User {
        name: "Ada".to_string(),
        nickname: Some("countess".to_string()),
        age: Some(36),
    };
    println!("Before: {}", serde_tristate::to_string(&user)?);

    // Clear the nickname, bump the age, leave the name alone
    let body = r#"{"nickname": null, "age": 37}"#;
    let patch: UserPatch = serde_tristate::from_str(body)?;
    println!("Patch:  {:?}", patch);

    user.patch(patch);
    println!("After:  {}", serde_tristate::to_string(&user)?);

    // String null tokens clear fields too
    let patch: UserPatch = serde_tristate::from_str(r#"{"age": "nil"}"#)?;
    user.patch(patch);
    println!("After:  {}", serde_tristate::to_string(&user)?);

    // Skipping absent fields keeps the patch shape on the way out
    let outgoing = UserPatch {
        name: TriState::Absent,
        nickname: TriState::Null,
        age: TriState::of(40),
    };
    println!("Outgoing patch: {}", serde_tristate::to_string(&outgoing)?);

    Ok(())
}
