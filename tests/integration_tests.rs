use chrono::{TimeZone, Utc};
use num_bigint::BigInt;
use var_dumper::{
    dump, dump_with_options, value, DumpOptions, Dumper, Function, Map, Mapping, Pattern, Plain,
    Role, Style, Value,
};

#[test]
fn test_sequence_of_integers() {
    let dumped = dump(&value!([1, 2, 3]));
    assert_eq!(
        dumped,
        "sequence (size=3) [\n    [0] => int 1,\n    [1] => int 2,\n    [2] => int 3,\n]"
    );
}

#[test]
fn test_mapping_of_scalars() {
    let dumped = dump(&value!({ "id": 1, "name": "a" }));
    assert_eq!(
        dumped,
        "mapping (size=2) {\n    'id' => int 1,\n    'name' => string \"a\" (length=1),\n}"
    );
}

#[test]
fn test_empty_composites() {
    assert_eq!(dump(&value!([])), "sequence (size=0) [\n]");
    assert_eq!(dump(&value!({})), "mapping (size=0) {\n}");
}

#[test]
fn test_every_leaf_kind_in_one_mapping() {
    let map = Mapping::new();
    map.insert("bool", true);
    map.insert("str", "héllo");
    map.insert("null", Value::Null);
    map.insert("int", 7);
    map.insert("whole", 2.0);
    map.insert("float", 0.25);
    map.insert("fn", Function::new("handler", 2));
    map.insert("re", Pattern::new("ab+c", "gi"));
    map.insert("undef", Value::Undefined);
    map.insert("sym", Value::Symbol(Some("tag".to_string())));
    map.insert("when", Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap());
    map.insert("big", BigInt::from(10).pow(20));

    let expected = "\
mapping (size=12) {
    'bool' => boolean true,
    'str' => string \"héllo\" (length=5),
    'null' =>  null,
    'int' => int 7,
    'whole' => int 2,
    'float' => float 0.25,
    'fn' =>  function () {},
    're' =>  /ab+c/gi,
    'undef' =>  undefined,
    'sym' =>  Symbol(tag),
    'when' =>  Tue Jun 01 2021 00:00:00 GMT+0000,
    'big' =>  100000000000000000000,
}";
    assert_eq!(dump(&Value::from(map)), expected);
}

#[test]
fn test_nested_indentation_and_footers() {
    let value = value!({
        "outer": {
            "inner": [[true]]
        },
        "after": null
    });

    let expected = "\
mapping (size=2) {
    'outer' => mapping (size=1) {
        'inner' => sequence (size=1) [
            [0] => sequence (size=1) [
                [0] => boolean true,
            ],
        ],
    },
    'after' =>  null,
}";
    assert_eq!(dump(&value), expected);
}

#[test]
fn test_numeric_mapping_keys_render_as_indices() {
    let value = value!({ "2": "two", "x": "ex", "-1": 0, "1e3": 0 });
    let dumped = dump(&value);

    assert!(dumped.contains("    [2] => string \"two\" (length=3),\n"));
    assert!(dumped.contains("    'x' => string \"ex\" (length=2),\n"));
    assert!(dumped.contains("    [-1] => int 0,\n"));
    assert!(dumped.contains("    '1e3' => int 0,\n"));
}

#[test]
fn test_mapping_keeps_insertion_order() {
    let mut map = Map::new();
    for key in ["zeta", "alpha", "mu"] {
        map.insert(key.to_string(), Value::from(key.len()));
    }

    let dumped = dump(&Value::from(map));
    let zeta = dumped.find("'zeta'").unwrap();
    let alpha = dumped.find("'alpha'").unwrap();
    let mu = dumped.find("'mu'").unwrap();
    assert!(zeta < alpha && alpha < mu);
}

#[test]
fn test_custom_indent_width() {
    let dumped = dump_with_options(&value!({ "a": [1] }), DumpOptions::new().with_indent(2));
    assert_eq!(
        dumped,
        "mapping (size=1) {\n  'a' => sequence (size=1) [\n    [0] => int 1,\n  ],\n}"
    );
}

#[test]
fn test_dump_does_not_mutate_input() {
    let map = Mapping::new();
    map.insert("b", 1);
    map.insert("a", value!([1, 2]));
    let value = Value::from(map.clone());

    let first = dump(&value);
    let second = dump(&value);
    assert_eq!(first, second);
    assert_eq!(map.keys(), vec!["b", "a"]);
    assert_eq!(map.get("a").unwrap().as_sequence().unwrap().len(), 2);
}

struct Tagged;

impl Style for Tagged {
    fn paint(&self, role: Role, fragment: &str) -> String {
        if fragment.is_empty() {
            return String::new();
        }
        let tag = match role {
            Role::Header => "h",
            Role::TypeLabel => "t",
            Role::Boolean => "b",
            Role::String => "s",
            Role::NullOrPattern => "n",
            Role::Number => "d",
        };
        format!("<{tag}>{fragment}</{tag}>")
    }
}

#[test]
fn test_style_roles() {
    let value = value!({ "a": [true, "x", null, 1.5] });
    let dumped = Dumper::with_style(DumpOptions::default(), Tagged).dump(&value);

    let expected = "\
<h>mapping</h> (size=1) {
    'a' => <h>sequence</h> (size=4) [
        [0] => <t>boolean</t> <b>true</b>,
        [1] => <t>string</t> <s>\"x\"</s> (length=1),
        [2] =>  <n>null</n>,
        [3] => <t>float</t> <d>1.5</d>,
    ],
}";
    assert_eq!(dumped, expected);
}

#[test]
fn test_plain_style_matches_default() {
    let value = value!({ "a": [true, "x", null, 1.5] });
    let styled = Dumper::with_style(DumpOptions::default(), Plain).dump(&value);
    assert_eq!(styled, dump(&value));
}

#[test]
fn test_deserialized_json_dump() {
    let value: Value =
        serde_json::from_str(r#"{"users": [{"id": 1, "email": null}], "total": 1.5}"#).unwrap();

    let expected = "\
mapping (size=2) {
    'users' => sequence (size=1) [
        [0] => mapping (size=2) {
            'id' => int 1,
            'email' =>  null,
        },
    ],
    'total' => float 1.5,
}";
    assert_eq!(dump(&value), expected);
}

#[test]
fn test_extreme_floats_stay_short() {
    assert_eq!(dump(&Value::from(1e21)), "int 1e+21");
    assert_eq!(dump(&Value::from(1e-7)), "float 1e-7");
    assert_eq!(dump(&Value::from(5e-324)), "float 5e-324");
    assert_eq!(dump(&Value::from(123456.789)), "float 123456.789");
}
