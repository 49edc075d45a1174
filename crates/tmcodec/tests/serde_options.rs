#![cfg(feature = "serde")]
#![expect(missing_docs)]

use tmcodec::{CdataPiece, Segment, ShellFlavor, TmCodecOptions, WildcardOptions};

#[test]
fn options_round_trip_through_json() {
    let options = TmCodecOptions {
        shell: ShellFlavor::Windows,
        tab_width: 4,
        wildcard: WildcardOptions {
            step_budget: Some(500),
        },
    };
    let json = serde_json::to_string(&options).unwrap();
    insta::assert_snapshot!(json, @r#"{"shell":"Windows","tab_width":4,"wildcard":{"step_budget":500}}"#);
    let back: TmCodecOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, options);
}

#[test]
fn text_values_serialize_as_byte_strings() {
    let seg = Segment::from(vec![Segment::from("a"), Segment::from(" ")]);
    let json = serde_json::to_string(&seg).unwrap();
    let back: Segment = serde_json::from_str(&json).unwrap();
    assert_eq!(back, seg);

    let piece = CdataPiece::Symbol("alpha".into());
    let back: CdataPiece = serde_json::from_str(&serde_json::to_string(&piece).unwrap()).unwrap();
    assert_eq!(back, piece);
}
