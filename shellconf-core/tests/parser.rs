use shellconf_core::{parse, ParseError, Quote, Record, Value};

fn assignment(name: &str, value: Value) -> Record {
    Record::Assignment {
        name: name.to_string(),
        value,
    }
}

fn scalar(value: &str, quote: Quote) -> Value {
    Value::Scalar {
        value: value.to_string(),
        quote,
    }
}

#[test]
fn classifies_comments_blanks_and_assignments() {
    let doc = parse(concat!(
        "# generated by hand\n",
        "\n",
        "HOSTNAME=myhost\n",
        "eth0=\"eth0 192.0.2.250 netmask 255.255.255.0\"\n",
        "INTERFACES=(eth0 lo)\n",
    ))
    .expect("parse");

    let records = doc.records();
    assert_eq!(records.len(), 5);
    assert_eq!(
        records[0],
        Record::Opaque {
            raw: "# generated by hand".to_string()
        }
    );
    assert_eq!(
        records[1],
        Record::Opaque {
            raw: String::new()
        }
    );
    assert_eq!(
        records[2],
        assignment("HOSTNAME", scalar("myhost", Quote::None))
    );
    assert_eq!(
        records[3],
        assignment(
            "eth0",
            scalar("eth0 192.0.2.250 netmask 255.255.255.0", Quote::Double)
        )
    );
    assert_eq!(
        records[4],
        assignment(
            "INTERFACES",
            Value::Array {
                inner: "eth0 lo".to_string()
            }
        )
    );
}

#[test]
fn single_quoted_and_empty_values_parse_as_scalars() {
    let doc = parse("MODE='static'\nEMPTY=\n").expect("parse");

    assert_eq!(doc.find("MODE"), Some(&scalar("static", Quote::Single)));
    assert_eq!(doc.find("EMPTY"), Some(&scalar("", Quote::None)));
}

#[test]
fn indented_and_suffixed_lines_stay_opaque() {
    let doc = parse(concat!(
        "  INDENTED=value\n",
        "TRAILING=\"x\" # comment\n",
        "AFTER_ARRAY=(a b) extra\n",
        "2BADNAME=x\n",
    ))
    .expect("parse");

    for record in doc.records() {
        assert!(
            matches!(record, Record::Opaque { .. }),
            "expected opaque: {record:?}"
        );
    }
}

#[test]
fn unterminated_quote_is_an_error() {
    let err = parse("GOOD=1\nBAD=\"no closing\n").expect_err("should fail");
    assert_eq!(err, ParseError::UnterminatedQuote { line: 2 });
}

#[test]
fn unterminated_array_is_an_error() {
    let err = parse("DAEMONS=(syslog network\n").expect_err("should fail");
    assert_eq!(err, ParseError::UnterminatedArray { line: 1 });
}

#[test]
fn empty_array_has_no_elements() {
    let doc = parse("NETWORKS=()\n").expect("parse");
    let value = doc.find("NETWORKS").expect("NETWORKS");
    assert!(value.elements().is_empty());
}
