// crates/shared-kernel/tests/entry_type_serde.rs
use ngstore_shared_kernel::EntryType;

#[test]
fn serializes_as_raw_bits() {
    let json = serde_json::to_string(&(EntryType::FILE | EntryType::DIRECTORY)).expect("serializes");
    assert_eq!(json, "3");

    let decoded: EntryType = serde_json::from_str("2").expect("deserializes");
    assert_eq!(decoded, EntryType::DIRECTORY);
}
