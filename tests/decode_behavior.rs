//! Behavior-driven tests for decoding trading session list lines.
//!
//! These tests feed whole lines through the decoder and check what a caller
//! observes: the decoded record, or the reason the line was rejected.

use sessiondiff_core::{
    decode_line, encode_security, CalendarDate, DecodeError, Security, Session, SessionKind, SOH,
};

fn line(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| format!("{field}{SOH}"))
        .collect()
}

fn memorial_day_es() -> String {
    line(&[
        "35=BJ",
        "1300=64",
        "1227=Equity Futures",
        "1151=ES",
        "580=2",
        "75=20180528",
        "386=3",
        "336=21",
        "341=2018052522000000",
        "625=0",
        "336=17",
        "341=2018052722300000",
        "336=4",
        "341=2018052817000000",
        "75=20180529",
        "386=2",
        "336=21",
        "341=2018052822000000",
        "625=4",
        "336=17",
        "341=2018052822300000",
    ])
}

// =============================================================================
// Decoding: well-formed lines
// =============================================================================

#[test]
fn when_line_is_well_formed_every_group_is_decoded_in_order() {
    // Given: a line with two dates of three and two sessions
    let raw = memorial_day_es();

    // When: it is decoded
    let security = decode_line(&raw).expect("must decode");

    // Then: counts match the declared repeat counts and order is preserved
    assert_eq!(security.market_segment_id, 64);
    assert_eq!(security.product_complex, "Equity Futures");
    assert_eq!(security.security_group, "ES");
    assert_eq!(security.declared_date_count, security.dates.len());
    for date in &security.dates {
        assert_eq!(date.declared_session_count, date.sessions.len());
    }

    let kinds = security.dates[0]
        .sessions
        .iter()
        .map(Session::kind)
        .collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![SessionKind::PreOpen, SessionKind::ReadyToTrade, SessionKind::Close]
    );
}

#[test]
fn when_interrupt_tag_is_absent_the_session_carries_no_interrupt() {
    let security = decode_line(&memorial_day_es()).expect("must decode");

    let first_day = &security.dates[0].sessions;
    assert_eq!(first_day[0].interrupt_code, Some(0));
    assert_eq!(first_day[1].interrupt_code, None);
    assert_eq!(first_day[2].interrupt_code, None);
    assert_eq!(security.dates[1].sessions[0].interrupt_code, Some(4));
}

#[test]
fn decoded_record_reserializes_to_the_consumed_fields() {
    // Given: a decoded line
    let raw = memorial_day_es();
    let security = decode_line(&raw).expect("must decode");

    // When: it is encoded again
    let encoded = encode_security(&security);

    // Then: the exact same fields come back out
    assert_eq!(encoded, raw);
    assert_eq!(decode_line(&encoded).expect("decode again"), security);
}

#[test]
fn built_records_round_trip_through_the_wire_format() {
    let security = Security::new(
        99,
        "Interest Rate",
        "ZN",
        2,
        vec![
            CalendarDate::from_sessions("20180528", Vec::new()),
            CalendarDate::from_sessions(
                "20180529",
                vec![
                    Session::new(21, "2018052822000000").with_interrupt(1),
                    Session::new(18, "2018052912000000"),
                ],
            ),
        ],
    )
    .expect("valid");

    let decoded = decode_line(&encode_security(&security)).expect("must decode");
    assert_eq!(decoded, security);
}

#[test]
fn zero_dates_decodes_to_an_empty_schedule() {
    let raw = line(&["35=BJ", "1300=64", "1227=Equity", "1151=ES", "580=0"]);
    let security = decode_line(&raw).expect("must decode");
    assert!(security.dates.is_empty());
}

// =============================================================================
// Decoding: malformed lines
// =============================================================================

#[test]
fn when_final_field_lacks_terminator_decode_reports_terminator_missing() {
    // Given: a line whose last field was cut before its SOH
    let mut raw = memorial_day_es();
    raw.pop();

    // When: it is decoded
    let err = decode_line(&raw).expect_err("must fail");

    // Then: the reason names the missing terminator
    assert!(matches!(err, DecodeError::TerminatorMissing { .. }));
    assert_eq!(err.code(), "terminator_missing");
}

#[test]
fn when_field_has_no_separator_decode_reports_malformed_field() {
    let raw = line(&["35=BJ", "1300=64", "Equity", "1151=ES", "580=0"]);
    let err = decode_line(&raw).expect_err("must fail");
    assert!(matches!(
        err,
        DecodeError::MalformedField { ref field, .. } if field == "Equity"
    ));
}

#[test]
fn when_count_is_not_numeric_decode_reports_numeric_field_invalid() {
    let raw = line(&["35=BJ", "1300=64", "1227=Equity", "1151=ES", "580=two"]);
    let err = decode_line(&raw).expect_err("must fail");
    assert_eq!(
        err,
        DecodeError::NumericFieldInvalid {
            field: "no_dates",
            value: String::from("two")
        }
    );
}

#[test]
fn when_line_holds_fewer_sessions_than_declared_decode_reports_group_count_mismatch() {
    let raw = line(&[
        "35=BJ",
        "1300=64",
        "1227=Equity",
        "1151=ES",
        "580=1",
        "75=20180528",
        "386=2",
        "336=21",
        "341=2018052522000000",
    ]);
    let err = decode_line(&raw).expect_err("must fail");
    assert!(matches!(
        err,
        DecodeError::GroupCountMismatch { group: "sessions", declared: 2, found: 1 }
    ));
}

#[test]
fn when_line_ends_inside_a_session_decode_reports_the_short_session_group() {
    // Given: the only date declares two sessions and the line stops after an id
    let raw = line(&[
        "35=BJ",
        "1300=64",
        "1227=Equity",
        "1151=ES",
        "580=1",
        "75=20180528",
        "386=2",
        "336=21",
    ]);

    // When / Then
    let err = decode_line(&raw).expect_err("must fail");
    assert_eq!(
        err,
        DecodeError::GroupCountMismatch {
            group: "sessions",
            declared: 2,
            found: 0
        }
    );
    assert_eq!(err.code(), "group_count_mismatch");
}

#[test]
fn when_line_ends_inside_a_date_decode_reports_the_short_date_group() {
    let raw = line(&[
        "35=BJ",
        "1300=64",
        "1227=Equity",
        "1151=ES",
        "580=2",
        "75=20180528",
        "386=0",
        "75=20180529",
    ]);

    let err = decode_line(&raw).expect_err("must fail");
    assert_eq!(
        err,
        DecodeError::GroupCountMismatch {
            group: "dates",
            declared: 2,
            found: 1
        }
    );
}

// =============================================================================
// Decoding: optional interrupt at date boundaries
// =============================================================================

fn interrupted_at_date_boundaries() -> String {
    line(&[
        "35=BJ",
        "1300=64",
        "1227=Equity Futures",
        "1151=NQ",
        "580=3",
        "75=20180528",
        "386=2",
        "336=21",
        "341=2018052522000000",
        "336=2",
        "341=2018052812000000",
        "625=1",
        "75=20180529",
        "386=1",
        "336=17",
        "341=2018052822300000",
        "75=20180530",
        "386=1",
        "336=4",
        "341=2018053021000000",
        "625=0",
    ])
}

#[test]
fn interrupt_before_a_date_tag_stays_with_the_last_session() {
    // Given: date one ends on an interrupted halt, date two ends without one
    let raw = interrupted_at_date_boundaries();

    // When
    let security = decode_line(&raw).expect("must decode");

    // Then: each interrupt lands on its own session and the next date starts clean
    assert_eq!(security.dates.len(), 3);
    assert_eq!(security.dates[0].sessions[0].interrupt_code, None);
    assert_eq!(security.dates[0].sessions[1].interrupt_code, Some(1));
    assert_eq!(security.dates[1].date_string, "20180529");
    assert_eq!(security.dates[1].sessions[0].interrupt_code, None);
    assert_eq!(security.dates[2].date_string, "20180530");
    assert_eq!(security.dates[2].sessions[0].interrupt_code, Some(0));
}

#[test]
fn interrupts_at_date_boundaries_survive_reserialization() {
    let raw = interrupted_at_date_boundaries();
    let security = decode_line(&raw).expect("must decode");

    let encoded = encode_security(&security);

    assert_eq!(encoded, raw);
    assert_eq!(decode_line(&encoded).expect("decode again"), security);
}
