use pretty_assertions::assert_eq;
use shellconf_core::{parse, write, EditError};

const RC_CONF: &str = concat!(
    "# /etc/rc.conf - hand maintained\n",
    "eth0=\"eth0 192.0.2.250 netmask 255.255.255.0\"\n",
    "INTERFACES=(eth0)\n",
    "gateway=\"default gw 192.0.2.254\"\n",
    "ROUTES=(gateway)\n",
    "DAEMONS=(syslog-ng network crond)\n",
);

#[test]
fn set_scalar_rewrites_only_the_value() {
    let mut doc = parse(RC_CONF).expect("parse");
    doc.set_scalar("gateway", "default gw 192.0.2.1")
        .expect("set gateway");

    let expected = RC_CONF.replace("192.0.2.254", "192.0.2.1");
    assert_eq!(write(&doc), expected);
}

#[test]
fn set_scalar_requires_an_existing_anchor() {
    let mut doc = parse(RC_CONF).expect("parse");
    let err = doc
        .set_scalar("eth1", "eth1 192.0.2.43 netmask 255.255.255.0")
        .expect_err("eth1 has no anchor");
    assert_eq!(err, EditError::MissingAnchor("eth1".to_string()));
}

#[test]
fn set_scalar_rejects_array_targets() {
    let mut doc = parse(RC_CONF).expect("parse");
    let err = doc
        .set_scalar("INTERFACES", "eth0")
        .expect_err("INTERFACES is an array");
    assert_eq!(err, EditError::NotScalar("INTERFACES".to_string()));
}

#[test]
fn array_append_is_idempotent() {
    let mut doc = parse(RC_CONF).expect("parse");
    doc.array_append_if_absent("INTERFACES", "eth1")
        .expect("first append");
    let once = write(&doc);

    doc.array_append_if_absent("INTERFACES", "eth1")
        .expect("second append");
    assert_eq!(write(&doc), once);
    assert!(once.contains("INTERFACES=(eth0 eth1)"));
}

#[test]
fn array_append_fills_an_empty_array() {
    let mut doc = parse("NETWORKS=()\n").expect("parse");
    doc.array_append_if_absent("NETWORKS", "eth0").expect("append");
    assert_eq!(write(&doc), "NETWORKS=(eth0)\n");
}

#[test]
fn array_append_requires_an_array_anchor() {
    let mut doc = parse(RC_CONF).expect("parse");
    assert_eq!(
        doc.array_append_if_absent("NETWORKS", "eth0"),
        Err(EditError::MissingAnchor("NETWORKS".to_string()))
    );
    assert_eq!(
        doc.array_append_if_absent("gateway", "eth0"),
        Err(EditError::NotArray("gateway".to_string()))
    );
}

#[test]
fn array_replace_swaps_one_element_in_place() {
    let mut doc = parse(RC_CONF).expect("parse");
    doc.array_replace_element("DAEMONS", "network", "!network @net-profiles")
        .expect("replace");

    let expected = RC_CONF.replace(
        "DAEMONS=(syslog-ng network crond)",
        "DAEMONS=(syslog-ng !network @net-profiles crond)",
    );
    assert_eq!(write(&doc), expected);
}

#[test]
fn array_replace_matches_whole_tokens_only() {
    let mut doc = parse("DAEMONS=(!network crond)\n").expect("parse");
    doc.array_replace_element("DAEMONS", "network", "!network @net-profiles")
        .expect("replace is a no-op");
    assert_eq!(write(&doc), "DAEMONS=(!network crond)\n");
}

#[test]
fn membership_check_sees_exact_elements() {
    let doc = parse(RC_CONF).expect("parse");
    assert!(doc.array_contains("DAEMONS", "network"));
    assert!(!doc.array_contains("DAEMONS", "net"));
    assert!(!doc.array_contains("gateway", "default"));
    assert!(!doc.array_contains("MISSING", "x"));
}
