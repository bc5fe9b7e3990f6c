//! One-shot parser and persistence operations.

use icl_client::{CheckIntent, IntentStore, ParserClient, StoreError};

/// Grade a single string and print the normalized verdict as JSON.
pub fn run_check(base_url: &str, token: Option<String>, text: &str, json: bool) {
    let client = ParserClient::new(base_url, token);
    let result = client.check(text);
    if json {
        println!("{}", serde_json::to_string_pretty(&result).expect("verdict serializes"));
        return;
    }
    println!("message:  {:?}", result.message);
    if !result.reason.is_empty() {
        println!("reason:   {}", result.reason);
    }
    println!("complete: {}", result.is_complete);
    if !result.expected_tokens.is_empty() {
        println!("expected: {}", result.expected_tokens.join(" "));
    }
}

pub fn run_list(base_url: &str, token: Option<String>) -> Result<(), StoreError> {
    let store = IntentStore::new(base_url, token);
    let records = store.list()?;
    if records.is_empty() {
        println!("no Intents stored");
    }
    for record in records {
        println!("#{}  {}", record.id, record.intent_string);
    }
    Ok(())
}

pub fn run_show(base_url: &str, token: Option<String>, id: u64) -> Result<(), StoreError> {
    let store = IntentStore::new(base_url, token);
    let record = store.retrieve(id)?;
    println!("#{}  {}", record.id, record.intent_string);
    println!("created: {}", record.created_at);
    println!("updated: {}", record.updated_at);
    Ok(())
}

pub fn run_create(base_url: &str, token: Option<String>, text: &str) -> Result<(), StoreError> {
    let store = IntentStore::new(base_url, token);
    let record = store.create(text)?;
    println!("created Intent #{}", record.id);
    Ok(())
}

pub fn run_update(
    base_url: &str,
    token: Option<String>,
    id: u64,
    text: &str,
) -> Result<(), StoreError> {
    let store = IntentStore::new(base_url, token);
    let record = store.update(id, text)?;
    println!("updated Intent #{}", record.id);
    Ok(())
}

pub fn run_delete(base_url: &str, token: Option<String>, id: u64) -> Result<(), StoreError> {
    let store = IntentStore::new(base_url, token);
    store.delete(id)?;
    println!("deleted Intent #{id}");
    Ok(())
}
