//! Serde roundtrip tests for the entity types.

use chrono::Utc;
use lists_core::entities::{Item, List};
use pretty_assertions::assert_eq;

macro_rules! roundtrip {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(recovered, val, "serde roundtrip failed for {}", stringify!($ty));
        }
    };
}

roundtrip!(
    list_roundtrip,
    List,
    List {
        id: "lst-a3f8b2c1".into(),
        created_at: Utc::now(),
    }
);

roundtrip!(
    item_roundtrip,
    Item,
    Item {
        id: "itm-0badc0de".into(),
        list_id: "lst-a3f8b2c1".into(),
        text: "Buy peacock feathers".into(),
        created_at: Utc::now(),
    }
);

#[test]
fn item_serializes_list_reference_as_list_id() {
    let item = Item {
        id: "itm-0badc0de".into(),
        list_id: "lst-a3f8b2c1".into(),
        text: "Buy milk".into(),
        created_at: Utc::now(),
    };
    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["list_id"], "lst-a3f8b2c1");
    assert_eq!(value["text"], "Buy milk");
}
