//! In-memory store module.

use crate::codegen::paths::{import_path, STORE, TYPES};
use crate::model::RecordType;
use crate::naming::RecordNames;

/// Generates services/Store.ts: the raw store object plus a manager with one
/// list setter per record type and subscribe/notify.
pub fn generate_store_ts(records: &[RecordType], domain: &str) -> String {
    let names: Vec<RecordNames> = records
        .iter()
        .map(|r| RecordNames::new(&r.name, domain))
        .collect();

    let mut output = String::new();

    output.push_str("/**\n * Global store for app state\n */\n\n");
    output.push_str("import {\n  StoreType,\n");
    for n in &names {
        output.push_str(&format!("  {},\n", n.data_type()));
    }
    output.push_str(&format!("}} from '{}';\n\n", import_path(STORE, TYPES)));

    output.push_str(
        r#"type StoreListener = (store: StoreType) => void;

class StoreManager {
  private store: StoreType;
  private listeners: Set<StoreListener> = new Set();

  constructor(store: StoreType) {
    this.store = store;
  }

"#,
    );

    for n in &names {
        output.push_str(&format!("  {}(items: {}[]): void {{\n", n.setter_fn(), n.data_type()));
        output.push_str(&format!("    this.store.{} = items;\n", n.collection_key()));
        output.push_str("    this.notify();\n");
        output.push_str("  }\n\n");
    }

    output.push_str(
        r#"  subscribe(listener: StoreListener): () => void {
    this.listeners.add(listener);
    return () => {
      this.listeners.delete(listener);
    };
  }

  private notify(): void {
    this.listeners.forEach((listener) => listener(this.store));
  }
}

// The raw store object
const Store: StoreType = {
"#,
    );

    for n in &names {
        output.push_str(&format!("  {}: [],\n", n.collection_key()));
    }

    output.push_str("};\n\nexport const storeManager = new StoreManager(Store);\nexport default Store;\n");

    output
}
