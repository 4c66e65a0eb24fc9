//! Binding query-string parameters into tri-state fields.
//!
//! Run with: cargo run --example query_binding

use serde_tristate::{token_enum, QueryAdapter, QueryParams, TriState};
use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
enum SortOrder {
    Asc,
    Desc,
}

token_enum!(SortOrder { Asc, Desc });

#[derive(Debug)]
struct ListUsers {
    limit: TriState<u32>,
    order: TriState<SortOrder>,
    ids: TriState<Vec<u64>>,
    manager: TriState<String>,
}

fn bind(adapter: &QueryAdapter, query: &str) -> Result<ListUsers, Box<dyn Error>> {
    let params = QueryParams::parse(query);
    let mut binder = adapter.binder(&params);

    let request = ListUsers {
        limit: binder.scalar("limit"),
        order: binder.scalar("order"),
        ids: binder.list("ids"),
        manager: binder.scalar("manager"),
    };

    binder.finish()?;
    Ok(request)
}

fn main() -> Result<(), Box<dyn Error>> {
    let adapter = QueryAdapter::default();

    for query in [
        "limit=20&order=DESC",
        "ids=1,2,3&manager=null",
        "ids=1&ids=2&ids=3",
        "ids=&manager=",
    ] {
        println!("{}", query);
        println!("  {:?}\n", bind(&adapter, query)?);
    }

    // A request with bad input reports every failing field
    println!("limit=lots&order=sideways&ids=1,x");
    match bind(&adapter, "limit=lots&order=sideways&ids=1,x") {
        Ok(request) => println!("  unexpected success: {:?}", request),
        Err(e) => println!("  {}", e),
    }

    Ok(())
}
