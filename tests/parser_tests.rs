use plist_xml::{from_str, Document, Error, Value};

fn parse(markup: &str) -> Document {
    from_str(markup).unwrap().expect("document present")
}

fn parse_root(markup: &str) -> Value {
    parse(markup).into_root().expect("root present")
}

#[test]
fn parses_scalars() {
    assert_eq!(
        parse_root("<?xml version='1.0' ?><plist version=\"1.0\"><string>abc</string></plist>"),
        Value::String("abc".to_string())
    );
    assert_eq!(
        parse_root("<?xml version='1.0' ?><plist version=\"1.0\"><integer>123</integer></plist>"),
        Value::Integer(123)
    );
    assert_eq!(
        parse_root("<?xml version='1.0' ?><plist version=\"1.0\"><real>123.456</real></plist>"),
        Value::Real(123.456)
    );
    assert_eq!(
        parse_root("<?xml version='1.0' ?><plist version=\"1.0\"><true /></plist>"),
        Value::Boolean(true)
    );
    assert_eq!(
        parse_root("<?xml version='1.0' ?><plist version=\"1.0\"><false /></plist>"),
        Value::Boolean(false)
    );
}

#[test]
fn parses_homogeneous_array() {
    let root = parse_root(
        "<?xml version='1.0' ?><plist version=\"1.0\"><array>\
         <string>a</string><string>b</string><string>c</string></array></plist>",
    );
    assert_eq!(
        root,
        Value::Array(vec![
            Value::from("a"),
            Value::from("b"),
            Value::from("c"),
        ])
    );
}

#[test]
fn parses_heterogeneous_array_in_order() {
    let root = parse_root(
        "<?xml version='1.0' ?><plist version=\"1.0\"><array>\
         <string>a</string><string>b</string><string>c</string>\
         <integer>1</integer><real>1.1</real><true /></array></plist>",
    );
    assert_eq!(
        root,
        Value::Array(vec![
            Value::from("a"),
            Value::from("b"),
            Value::from("c"),
            Value::Integer(1),
            Value::Real(1.1),
            Value::Boolean(true),
        ])
    );
}

#[test]
fn parses_dict_pairs() {
    let root = parse_root(
        "<?xml version='1.0' ?><plist version=\"1.0\"><dict>\
         <key>key1</key><string>abc</string>\
         <key>key2</key><integer>123</integer>\
         <key>key3</key><real>123.456</real>\
         <key>key4</key><false /></dict></plist>",
    );
    let dict = root.as_dict().unwrap();
    assert_eq!(dict.len(), 4);
    assert_eq!(dict.get("key1"), Some(&Value::from("abc")));
    assert_eq!(dict.get("key2"), Some(&Value::Integer(123)));
    assert_eq!(dict.get("key3"), Some(&Value::Real(123.456)));
    assert_eq!(dict.get("key4"), Some(&Value::Boolean(false)));
}

#[test]
fn dict_preserves_key_order() {
    let root = parse_root(
        "<plist version=\"1.0\"><dict>\
         <key>zebra</key><integer>1</integer>\
         <key>apple</key><integer>2</integer>\
         <key>mango</key><integer>3</integer></dict></plist>",
    );
    let keys: Vec<_> = root.as_dict().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["zebra", "apple", "mango"]);
}

#[test]
fn dict_value_without_key_is_structural_error() {
    let err = from_str(
        "<plist version=\"1.0\"><dict><string>orphan</string></dict></plist>",
    )
    .unwrap_err();
    assert_eq!(err, Error::ValueWithoutKey("string".to_string()));
}

#[test]
fn dict_value_after_consumed_key_is_structural_error() {
    let err = from_str(
        "<plist version=\"1.0\"><dict>\
         <key>k</key><integer>1</integer><integer>2</integer></dict></plist>",
    )
    .unwrap_err();
    assert_eq!(err, Error::ValueWithoutKey("integer".to_string()));
}

#[test]
fn duplicate_dict_keys_last_value_wins() {
    let root = parse_root(
        "<plist version=\"1.0\"><dict>\
         <key>k</key><integer>1</integer>\
         <key>k</key><integer>2</integer></dict></plist>",
    );
    let dict = root.as_dict().unwrap();
    assert_eq!(dict.len(), 1);
    assert_eq!(dict.get("k"), Some(&Value::Integer(2)));
}

#[test]
fn consecutive_keys_overwrite_pending_key() {
    // "lost" never receives a value; "kept" pairs with the integer.
    let root = parse_root(
        "<plist version=\"1.0\"><dict>\
         <key>lost</key><key>kept</key><integer>1</integer></dict></plist>",
    );
    let dict = root.as_dict().unwrap();
    assert_eq!(dict.len(), 1);
    assert_eq!(dict.get("kept"), Some(&Value::Integer(1)));
    assert_eq!(dict.get("lost"), None);
}

#[test]
fn trailing_key_produces_no_entry() {
    let root = parse_root(
        "<plist version=\"1.0\"><dict>\
         <key>k</key><integer>1</integer><key>dangling</key></dict></plist>",
    );
    let dict = root.as_dict().unwrap();
    assert_eq!(dict.len(), 1);
    assert_eq!(dict.get("dangling"), None);
}

#[test]
fn strict_integer_parsing() {
    let err =
        from_str("<plist version=\"1.0\"><integer>12.3</integer></plist>").unwrap_err();
    assert_eq!(err, Error::InvalidInteger("12.3".to_string()));

    let err =
        from_str("<plist version=\"1.0\"><integer>abc</integer></plist>").unwrap_err();
    assert_eq!(err, Error::InvalidInteger("abc".to_string()));

    let err = from_str("<plist version=\"1.0\"><integer/></plist>").unwrap_err();
    assert_eq!(err, Error::InvalidInteger(String::new()));
}

#[test]
fn strict_real_parsing() {
    let err = from_str("<plist version=\"1.0\"><real>12,3</real></plist>").unwrap_err();
    assert_eq!(err, Error::InvalidReal("12,3".to_string()));
}

#[test]
fn data_and_date_are_opaque_text() {
    let root = parse_root("<plist version=\"1.0\"><data>aGVsbG8=</data></plist>");
    assert_eq!(root, Value::Data("aGVsbG8=".to_string()));

    let root = parse_root("<plist version=\"1.0\"><date>2014-06-02T12:00:00Z</date></plist>");
    assert_eq!(root, Value::Date("2014-06-02T12:00:00Z".to_string()));
}

#[test]
fn absent_root_element_is_not_an_error() {
    assert_eq!(from_str("").unwrap(), None);
    assert_eq!(from_str("<?xml version='1.0' ?>").unwrap(), None);
    assert_eq!(
        from_str("<other><string>abc</string></other>").unwrap(),
        None
    );
}

#[test]
fn empty_plist_body_has_absent_root() {
    let doc = parse("<plist version=\"1.0\"></plist>");
    assert_eq!(doc.version(), Some("1.0"));
    assert_eq!(doc.root(), None);
}

#[test]
fn unrecognized_attributes_are_ignored() {
    let doc = parse("<plist version=\"1.0\" author=\"nobody\"><true /></plist>");
    assert_eq!(doc.version(), Some("1.0"));
    assert_eq!(doc.root(), Some(&Value::Boolean(true)));
}

#[test]
fn missing_version_attribute_is_absent() {
    let doc = parse("<plist><integer>1</integer></plist>");
    assert_eq!(doc.version(), None);
    assert_eq!(doc.root(), Some(&Value::Integer(1)));
}

#[test]
fn multiple_root_children_last_wins() {
    let doc = parse("<plist version=\"1.0\"><integer>1</integer><integer>2</integer></plist>");
    assert_eq!(doc.root(), Some(&Value::Integer(2)));
}

#[test]
fn entity_references_resolve_in_text() {
    let root =
        parse_root("<plist version=\"1.0\"><string>a &amp; b &lt;c&gt; &#65;</string></plist>");
    assert_eq!(root, Value::String("a & b <c> A".to_string()));
}

#[test]
fn interelement_whitespace_is_ignored() {
    let root = parse_root(
        "<plist version=\"1.0\">\n  <dict>\n    <key>k</key>\n    <array>\n      \
         <integer>1</integer>\n    </array>\n  </dict>\n</plist>",
    );
    let dict = root.as_dict().unwrap();
    assert_eq!(
        dict.get("k"),
        Some(&Value::Array(vec![Value::Integer(1)]))
    );
}

#[test]
fn string_content_keeps_interior_whitespace() {
    let root = parse_root("<plist version=\"1.0\"><string> a b </string></plist>");
    assert_eq!(root, Value::String(" a b ".to_string()));
}

#[test]
fn numeric_content_tolerates_surrounding_whitespace() {
    let root = parse_root("<plist version=\"1.0\"><integer> 42 </integer></plist>");
    assert_eq!(root, Value::Integer(42));
}

#[test]
fn nested_containers() {
    let root = parse_root(
        "<plist version=\"1.0\"><dict>\
         <key>outer</key><dict>\
           <key>items</key><array>\
             <integer>1</integer>\
             <array><true /></array>\
             <dict><key>deep</key><string>yes</string></dict>\
           </array>\
         </dict></dict></plist>",
    );
    let outer = root.as_dict().unwrap().get("outer").unwrap();
    let items = outer.as_dict().unwrap().get("items").unwrap();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0], Value::Integer(1));
    assert_eq!(items[1], Value::Array(vec![Value::Boolean(true)]));
    assert_eq!(
        items[2].as_dict().unwrap().get("deep"),
        Some(&Value::from("yes"))
    );
}

#[test]
fn empty_containers() {
    assert_eq!(
        parse_root("<plist version=\"1.0\"><array/></plist>"),
        Value::Array(vec![])
    );
    assert_eq!(
        parse_root("<plist version=\"1.0\"><array></array></plist>"),
        Value::Array(vec![])
    );
    assert_eq!(
        parse_root("<plist version=\"1.0\"><dict/></plist>"),
        Value::Dict(plist_xml::Dict::new())
    );
    assert_eq!(
        parse_root("<plist version=\"1.0\"><string></string></plist>"),
        Value::String(String::new())
    );
    assert_eq!(
        parse_root("<plist version=\"1.0\"><string/></plist>"),
        Value::String(String::new())
    );
}

#[test]
fn key_outside_dict_is_unexpected() {
    let err =
        from_str("<plist version=\"1.0\"><array><key>k</key></array></plist>").unwrap_err();
    assert_eq!(err, Error::UnexpectedElement("key".to_string()));
}

#[test]
fn doctype_prolog_is_skipped() {
    let markup = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
                  <!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \
                  \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\
                  <plist version=\"1.0\"><string>abc</string></plist>";
    assert_eq!(parse_root(markup), Value::from("abc"));
}
