//! Replacing the default null tokens and delimiter.
//!
//! Run with: cargo run --example custom_tokens

use serde::Deserialize;
use serde_tristate::{BindOptions, Delimiter, JsonAdapter, NullTokens, QueryAdapter, QueryParams, TriState};
use std::error::Error;

#[derive(Debug, Deserialize)]
struct Settings {
    #[serde(default)]
    theme: TriState<String>,
    #[serde(default)]
    timeout: TriState<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let options = BindOptions::new()
        .with_null_tokens(NullTokens::new(["undefined", "none"]))
        .with_delimiter(Delimiter::Pipe);
    println!("Null tokens: {}", options.null_tokens);

    // Query strings
    let query = QueryAdapter::new(options.clone());
    let params = QueryParams::parse("theme=null&timeout=NONE&tags=a|b|c");

    let theme = query.scalar::<String>(&params, "theme")?;
    let timeout = query.scalar::<u64>(&params, "timeout")?;
    let tags = query.list::<String>(&params, "tags")?;
    println!("theme:   {:?}", theme);
    println!("timeout: {:?}", timeout);
    println!("tags:    {:?}\n", tags);

    // JSON bodies
    let json = JsonAdapter::new(options);
    let settings: Settings = json.from_str(r#"{"theme": "undefined", "timeout": 30}"#)?;
    println!("{:?}", settings);

    let settings: Settings = json.from_str(r#"{"theme": "nil"}"#)?;
    println!("{:?}", settings);

    Ok(())
}
