#![allow(clippy::pedantic)]
use frenum::{Error, IdVector, Values, VectorKind, frenum_miss};
use insta::assert_json_snapshot;

#[test]
fn integer_ids_lose_zero_and_minus_99() {
    let ids = IdVector::integer([Some(100), Some(0), Some(97), Some(-99), Some(5)]);
    let out = frenum_miss(&ids).expect("integer ids are supported");
    assert_json_snapshot!(out, @r#"
    {
      "values": {
        "kind": "integer",
        "values": [
          100,
          null,
          97,
          null,
          5
        ]
      }
    }
    "#);
}

#[test]
fn real_ids_lose_zero_and_minus_99() {
    let ids = IdVector::real([Some(1.5), Some(0.0), Some(-99.0), Some(3.2)]);
    let out = frenum_miss(&ids).expect("real ids are supported");
    assert_json_snapshot!(out, @r#"
    {
      "values": {
        "kind": "real",
        "values": [
          1.5,
          null,
          null,
          3.2
        ]
      }
    }
    "#);
}

#[test]
fn text_ids_keep_double_space() {
    let ids = IdVector::text(
        ["A", "B", ".", "D", "*", "NA", " ", "  ", "K"]
            .into_iter()
            .map(Some),
    );
    let out = frenum_miss(&ids).expect("text ids are supported");
    assert_json_snapshot!(out, @r#"
    {
      "values": {
        "kind": "text",
        "values": [
          "A",
          "B",
          null,
          "D",
          null,
          null,
          null,
          "  ",
          "K"
        ]
      }
    }
    "#);
}

#[test]
fn text_codes_include_numeric_strings() {
    let ids = IdVector::text([Some("0"), Some("-99"), Some("00"), Some("99"), None]);
    let out = frenum_miss(&ids).unwrap();
    assert_eq!(
        out,
        IdVector::text([None, None, Some("00"), Some("99"), None])
    );
}

#[test]
fn empty_vectors_pass_through() {
    let empty = [
        IdVector::integer([]),
        IdVector::real([]),
        IdVector::text(Vec::<Option<String>>::new()),
    ];
    for ids in &empty {
        let out = frenum_miss(ids).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.kind(), ids.kind());
    }
    assert_json_snapshot!(frenum_miss(&empty[0]).unwrap(), @r#"
    {
      "values": {
        "kind": "integer",
        "values": []
      }
    }
    "#);
}

#[test]
fn factor_is_rejected_despite_integer_storage() {
    let ids = IdVector::factor([Some(1), Some(2), Some(2)], ["low", "high"]);
    assert_eq!(ids.kind(), VectorKind::Integer);
    let err = frenum_miss(&ids).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Only numeric, integer and character vectors are supported"
    );
    assert_eq!(err, Error::factor());
}

#[test]
fn logical_is_rejected() {
    let ids = IdVector::logical([Some(false), Some(true)]);
    let err = frenum_miss(&ids).unwrap_err();
    assert_eq!(err, Error::unsupported_kind(VectorKind::Logical));
}

#[test]
fn classed_vector_keeps_attributes() {
    let ids = IdVector::real([Some(0.0), Some(12.5)])
        .with_names(["first", "second"])
        .with_class(["Date"]);
    let out = frenum_miss(&ids).unwrap();
    assert_eq!(out.values, Values::Real(vec![None, Some(12.5)]));
    assert_eq!(out.attributes, ids.attributes);
}

#[test]
fn classed_vector_result_is_the_only_product() {
    let ids = IdVector::real([Some(0.0), Some(1.5), Some(-99.0)])
        .with_names(["a", "b", "c"])
        .with_class(["Date"]);
    let before = ids.clone();
    let out = frenum_miss(&ids).unwrap();
    assert_eq!(ids, before);
    assert_json_snapshot!(out, @r#"
    {
      "values": {
        "kind": "real",
        "values": [
          null,
          1.5,
          null
        ]
      },
      "attributes": {
        "names": [
          "a",
          "b",
          "c"
        ],
        "class": [
          "Date"
        ]
      }
    }
    "#);
}
