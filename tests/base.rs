//! Integration tests for cstruct
//!
//! These tests walk through the main ways a record layout is declared, bound
//! and mutated.

use cstruct::schema::{
    array, array_of, float32, float64, int8, int16, int32, padding, record, uint8, uint16, uint32,
};
use cstruct::{Endianness, Field, LayoutError, PrimitiveKind, RecordType, Scalar};
use proptest::prelude::*;

fn simple() -> RecordType {
    RecordType::define(vec![uint8("first"), int8("second")]).unwrap()
}

fn first_blood() -> RecordType {
    let simple = simple();
    RecordType::define(vec![
        uint8("first"),
        int8("second"),
        record("simple", &simple),
        array("numbers", Field::INT32, 8),
        array("simples", &simple, 4),
        array("array2d", array_of(Field::INT8, 8), 4),
        array("simples2d", array_of(&simple, 2), 4),
    ])
    .unwrap()
}

fn counting_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

// =============================================================================
// Layout
// =============================================================================

#[test]
fn offsets_follow_declaration_order() {
    let ty = first_blood();
    let offsets: Vec<(&str, usize, usize)> = ty
        .fields()
        .map(|f| (f.name, f.offset, f.field.size()))
        .collect();

    assert_eq!(
        offsets,
        vec![
            ("first", 0, 1),
            ("second", 1, 1),
            ("simple", 2, 2),
            ("numbers", 4, 32),
            ("simples", 36, 8),
            ("array2d", 44, 32),
            ("simples2d", 76, 16),
        ]
    );
    assert_eq!(ty.size(), 92);
}

#[test]
fn padding_is_counted_but_hidden() {
    let ty = RecordType::define(vec![uint8("a"), padding(), padding(), padding(), uint32("b")])
        .unwrap();
    assert_eq!(ty.size(), 8);
    assert_eq!(ty.offset_of("b"), Some(4));

    let view = ty.allocate(None);
    assert_eq!(view.field_names().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(
        view.get("_").unwrap_err(),
        LayoutError::UnknownField("_".into())
    );
}

#[test]
fn invalid_schemas_fail_fast() {
    let empty = RecordType::define(vec![]).unwrap();
    assert_eq!(empty.size(), 0);

    assert!(matches!(
        RecordType::define(vec![record("nothing", &empty)]),
        Err(LayoutError::InvalidSchema { .. })
    ));
    assert!(matches!(
        RecordType::define(vec![array("none", Field::UINT8, 0)]),
        Err(LayoutError::InvalidSchema { .. })
    ));
    assert!(matches!(
        RecordType::define(vec![uint8("x"), padding(), uint16("x")]),
        Err(LayoutError::InvalidSchema { .. })
    ));
}

// =============================================================================
// Binding
// =============================================================================

#[test]
fn counting_buffer_scenario() {
    let ty = RecordType::define(vec![
        uint8("first"),
        int8("second"),
        record("simple", &simple()),
        array("numbers", Field::INT32, 8),
    ])
    .unwrap();

    let view = ty
        .bind(counting_bytes(ty.size()), Some(Endianness::Little))
        .unwrap();

    assert_eq!(view.value::<u8>("first").unwrap(), 0);
    assert_eq!(view.value::<i8>("second").unwrap(), 1);

    let simple = view.record("simple").unwrap();
    assert_eq!(simple.value::<u8>("first").unwrap(), 2);
    assert_eq!(simple.value::<i8>("second").unwrap(), 3);

    let numbers = view.array("numbers").unwrap().as_primitive().unwrap();
    assert_eq!(numbers.len(), 8);
    let expected: Vec<i32> = (0..8)
        .map(|i| {
            let b = 4 + 4 * i as u8;
            i32::from_le_bytes([b, b + 1, b + 2, b + 3])
        })
        .collect();
    assert_eq!(numbers.to_vec::<i32>(), expected);
}

#[test]
fn multi_dimensional_array() {
    let ty = RecordType::define(vec![array("grid", array_of(Field::INT8, 2), 3)]).unwrap();
    let view = ty.bind(vec![10, 20, 30, 40, 50, 60], None).unwrap();

    let rows: Vec<Vec<i8>> = view
        .array("grid")
        .unwrap()
        .as_nested()
        .unwrap()
        .iter()
        .map(|row| row.as_primitive().unwrap().to_vec())
        .collect();
    assert_eq!(rows, vec![vec![10, 20], vec![30, 40], vec![50, 60]]);
}

#[test]
fn arrays_of_records_in_two_dimensions() {
    let ty = first_blood();
    let view = ty
        .bind(counting_bytes(ty.size()), Some(Endianness::Little))
        .unwrap();

    let simples = view.array("simples").unwrap().as_records().unwrap();
    let firsts: Vec<u8> = simples.iter().map(|s| s.value("first").unwrap()).collect();
    assert_eq!(firsts, vec![36, 38, 40, 42]);

    let grid = view.array("simples2d").unwrap();
    assert_eq!(grid.shape(), vec![4, 2]);
    let last = &grid.as_nested().unwrap()[3].as_records().unwrap()[1];
    assert_eq!(last.value::<u8>("first").unwrap(), 90);
    assert_eq!(last.value::<i8>("second").unwrap(), 91);

    let array2d = view.array("array2d").unwrap();
    assert_eq!(array2d.flatten::<i8>().unwrap()[..3], [44, 45, 46]);
}

#[test]
fn record_elements_keep_parent_byte_order() {
    let word = RecordType::define(vec![uint16("value")]).unwrap();
    let ty = RecordType::define(vec![
        array("words", &word, 2),
        array("grid", array_of(&word, 1), 1),
    ])
    .unwrap();
    let view = ty
        .bind(vec![1, 2, 3, 4, 5, 6], Some(Endianness::Big))
        .unwrap();

    let words = view.array("words").unwrap().as_records().unwrap();
    assert_eq!(words[0].endianness(), Endianness::Big);
    assert_eq!(words[0].value::<u16>("value").unwrap(), 0x0102);
    assert_eq!(words[1].value::<u16>("value").unwrap(), 0x0304);

    let grid = view.array("grid").unwrap();
    let inner = &grid.as_nested().unwrap()[0].as_records().unwrap()[0];
    assert_eq!(inner.endianness(), Endianness::Big);
    assert_eq!(inner.value::<u16>("value").unwrap(), 0x0506);

    words[1].set("value", 0x0A0Bu16).unwrap();
    assert_eq!(words[1].to_bytes(), vec![0x0A, 0x0B]);
}

#[test]
fn bind_rejects_short_buffer() {
    let ty = first_blood();
    let err = ty.bind(vec![0u8; ty.size() - 1], None).unwrap_err();
    assert_eq!(
        err,
        LayoutError::BufferTooSmall {
            required: 92,
            actual: 91
        }
    );
}

#[test]
fn allocate_is_zeroed() {
    let ty = first_blood();
    let view = ty.allocate(Some(Endianness::Big));
    assert_eq!(view.to_bytes(), vec![0u8; 92]);
    assert_eq!(view.endianness(), Endianness::Big);
}

// =============================================================================
// Aliasing and copies
// =============================================================================

#[test]
fn nested_record_writes_reach_parent() {
    let ty = first_blood();
    let view = ty.allocate(None);

    view.record("simple").unwrap().set("second", -3i8).unwrap();
    assert_eq!(view.to_bytes()[3], 0xFD);

    view.with_bytes_mut(|bytes| bytes[2] = 17);
    assert_eq!(view.record("simple").unwrap().value::<u8>("first").unwrap(), 17);
}

#[test]
fn record_array_elements_are_detached() {
    let ty = first_blood();
    let view = ty.allocate(None);

    let simples = view.array("simples").unwrap().as_records().unwrap();
    simples[2].set("first", 200u8).unwrap();

    assert_eq!(simples[2].value::<u8>("first").unwrap(), 200);
    assert_eq!(view.to_bytes()[36 + 4], 0);
    // Cached: the same detached element comes back
    let again = view.array("simples").unwrap().as_records().unwrap();
    assert_eq!(again[2].value::<u8>("first").unwrap(), 200);
}

#[test]
fn primitive_array_writes_reach_parent() {
    let ty = first_blood();
    let view = ty.allocate(Some(Endianness::Big));

    let numbers = view.array("numbers").unwrap().as_primitive().unwrap();
    numbers.set(0, 0x01020304).unwrap();
    assert_eq!(view.to_bytes()[4..8], [1, 2, 3, 4]);

    let rows = view.array("array2d").unwrap().as_nested().unwrap();
    rows[1].as_primitive().unwrap().set(0, -1i8).unwrap();
    assert_eq!(view.to_bytes()[44 + 8], 0xFF);
}

#[test]
fn copies_are_independent() {
    let ty = first_blood();
    let original = ty.bind(counting_bytes(ty.size()), Some(Endianness::Big)).unwrap();
    let copy = original.copy();

    assert_eq!(copy.to_bytes(), original.to_bytes());
    assert_eq!(copy.endianness(), Endianness::Big);

    original.set("first", 99u8).unwrap();
    copy.record("simple").unwrap().set("first", 77u8).unwrap();

    assert_eq!(copy.value::<u8>("first").unwrap(), 0);
    assert_eq!(original.record("simple").unwrap().value::<u8>("first").unwrap(), 2);
    assert!(!copy.shares_storage(&original));
}

// =============================================================================
// Primitive round-trips
// =============================================================================

fn all_kinds() -> RecordType {
    RecordType::define(vec![
        uint8("u8"),
        int8("i8"),
        uint16("u16"),
        int16("i16"),
        uint32("u32"),
        int32("i32"),
        float32("f32"),
        float64("f64"),
    ])
    .unwrap()
}

#[test]
fn boundary_values_roundtrip() {
    for endianness in [Endianness::Little, Endianness::Big] {
        let view = all_kinds().allocate(Some(endianness));
        let cases: [(&str, Scalar); 16] = [
            ("u8", Scalar::U8(u8::MIN)),
            ("u8", Scalar::U8(u8::MAX)),
            ("i8", Scalar::I8(i8::MIN)),
            ("i8", Scalar::I8(i8::MAX)),
            ("u16", Scalar::U16(u16::MIN)),
            ("u16", Scalar::U16(u16::MAX)),
            ("i16", Scalar::I16(i16::MIN)),
            ("i16", Scalar::I16(i16::MAX)),
            ("u32", Scalar::U32(u32::MIN)),
            ("u32", Scalar::U32(u32::MAX)),
            ("i32", Scalar::I32(i32::MIN)),
            ("i32", Scalar::I32(i32::MAX)),
            ("f32", Scalar::F32(f32::MIN)),
            ("f32", Scalar::F32(f32::MAX)),
            ("f64", Scalar::F64(f64::MIN_POSITIVE)),
            ("f64", Scalar::F64(f64::MAX)),
        ];
        for (name, value) in cases {
            view.set(name, value).unwrap();
            assert_eq!(view.get(name).unwrap(), value, "{name} {endianness:?}");
        }
    }
}

#[test]
fn out_of_range_writes_truncate() {
    let view = all_kinds().allocate(None);

    view.set("u8", 255).unwrap();
    assert_eq!(view.value::<u8>("u8").unwrap(), 255);
    view.set("u8", 300).unwrap();
    assert_eq!(view.value::<u8>("u8").unwrap(), 44);
    view.set("u8", -1).unwrap();
    assert_eq!(view.value::<u8>("u8").unwrap(), 255);

    view.set("i8", 200).unwrap();
    assert_eq!(view.value::<i8>("i8").unwrap(), -56);

    view.set("i16", 2.9f64).unwrap();
    assert_eq!(view.value::<i16>("i16").unwrap(), 2);

    view.set("u32", -1.0f32).unwrap();
    assert_eq!(view.value::<u32>("u32").unwrap(), 0);
}

#[test]
fn endianness_changes_bytes_not_values() {
    let ty = RecordType::define(vec![uint32("value")]).unwrap();
    let little = ty.allocate(Some(Endianness::Little));
    let big = ty.allocate(Some(Endianness::Big));
    little.set("value", 0xDEADBEEFu32).unwrap();
    big.set("value", 0xDEADBEEFu32).unwrap();

    assert_eq!(little.to_bytes(), vec![0xEF, 0xBE, 0xAD, 0xDE]);
    assert_eq!(big.to_bytes(), vec![0xDE, 0xAD, 0xBE, 0xEF]);

    let reread = ty.bind(big.to_bytes(), Some(Endianness::Little)).unwrap();
    assert_eq!(reread.value::<u32>("value").unwrap(), 0xEFBEADDE);
}

// =============================================================================
// Properties
// =============================================================================

fn kind_strategy() -> impl Strategy<Value = PrimitiveKind> {
    prop::sample::select(PrimitiveKind::ALL.to_vec())
}

fn endianness_strategy() -> impl Strategy<Value = Endianness> {
    prop_oneof![Just(Endianness::Little), Just(Endianness::Big)]
}

proptest! {
    #[test]
    fn prop_offsets_are_prefix_sums(
        kinds in prop::collection::vec((kind_strategy(), any::<bool>()), 0..24)
    ) {
        let definitions: Vec<_> = kinds
            .iter()
            .enumerate()
            .map(|(i, (kind, pad))| {
                if *pad {
                    padding()
                } else {
                    cstruct::schema::field(format!("f{i}"), *kind)
                }
            })
            .collect();
        let ty = RecordType::define(definitions.clone()).unwrap();

        let mut offset = 0;
        for definition in &definitions {
            if !definition.is_padding() {
                prop_assert_eq!(ty.offset_of(&definition.name), Some(offset));
            }
            offset += definition.field.size();
        }
        prop_assert_eq!(ty.size(), offset);
        prop_assert_eq!(
            ty.fields().count(),
            definitions.iter().filter(|d| !d.is_padding()).count()
        );
    }

    #[test]
    fn prop_integers_roundtrip(value in any::<i32>(), endianness in endianness_strategy()) {
        let view = all_kinds().allocate(Some(endianness));
        view.set("i32", value).unwrap();
        prop_assert_eq!(view.value::<i32>("i32").unwrap(), value);

        view.set("u16", value).unwrap();
        prop_assert_eq!(view.value::<u16>("u16").unwrap(), value as u16);
    }

    #[test]
    fn prop_floats_roundtrip(value in any::<f64>(), endianness in endianness_strategy()) {
        let view = all_kinds().allocate(Some(endianness));
        view.set("f64", value).unwrap();
        let back = view.value::<f64>("f64").unwrap();
        prop_assert!(back == value || (back.is_nan() && value.is_nan()));
    }
}
