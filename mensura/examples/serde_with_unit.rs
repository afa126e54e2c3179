//! Serializing quantities with their unit symbols.
//!
//! Run with: `cargo run --example serde_with_unit --features serde`

use mensura::{Milliseconds, Millimeters};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
struct PageSetup {
    /// Tagged form, self-documenting: {"value": 12.7, "unit": "mm"}
    #[serde(with = "mensura::serde_with_unit")]
    margin: Millimeters,

    /// Compact form, just the number.
    gutter: Millimeters,

    #[serde(with = "mensura::serde_with_unit")]
    tooltip_delay: Milliseconds,
}

fn main() {
    let setup = PageSetup {
        margin: Millimeters::new(12.7),
        gutter: Millimeters::new(4.2),
        tooltip_delay: Milliseconds::new(400.0),
    };

    let json = serde_json::to_string_pretty(&setup).expect("serialization cannot fail");
    println!("{json}");

    let restored: PageSetup = serde_json::from_str(&json).expect("round-trip");
    assert_eq!(restored.margin, setup.margin);
    assert_eq!(restored.tooltip_delay, setup.tooltip_delay);
}
