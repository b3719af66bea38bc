#![cfg(unstable)]
#![feature(test)]
extern crate test;

use acorn_json::{record, Value};

use std::str;

#[derive(Debug, Default)]
struct Request<'a> {
    t: &'a str,
    mt: &'a str,
    l: &'a str,
    i: u64,
    method: &'a str,
    path: &'a str,
    status: u16,
    elapsed: f64,
    tags: Vec<&'a str>,
}

record!(Request<'a> {
    t,
    mt,
    l,
    i,
    method = "RequestMethod",
    path = "RequestPath",
    status = "StatusCode",
    elapsed = "Elapsed",
    tags = "Tags",
});

#[derive(Debug, Default)]
struct Failure {
    t: String,
    mt: String,
    l: String,
    x: String,
    count: u32,
    source: String,
    retry: Retry,
}

record!(Failure {
    t,
    mt,
    l,
    x,
    count = "Count",
    source = "Source",
    retry = "Retry",
});

#[derive(Debug, Default)]
struct Retry {
    attempt: u8,
    delays: Vec<f64>,
    give_up: bool,
    reason: Option<String>,
}

record!(Retry {
    attempt = "Attempt",
    delays = "Delays",
    give_up = "GiveUp",
    reason = "Reason",
});

#[bench]
fn read_600b_event_record(b: &mut test::Bencher) {
    let input = include_str!("../cases/600b_event.json");

    b.bytes = input.len() as u64;
    b.iter(|| acorn_json::from_str::<Request>(input).unwrap().status)
}

#[bench]
fn read_600b_event_record_reuse(b: &mut test::Bencher) {
    let input = include_str!("../cases/600b_event.json");
    let mut request = Request::default();

    b.bytes = input.len() as u64;
    b.iter(|| {
        acorn_json::decode_str(&mut request, input).unwrap();
        test::black_box(&request);
    })
}

#[bench]
fn read_600b_event_value(b: &mut test::Bencher) {
    let input = include_str!("../cases/600b_event.json");

    b.bytes = input.len() as u64;
    b.iter(|| Value::parse_str(input).unwrap())
}

#[bench]
fn read_600b_event_value_owned(b: &mut test::Bencher) {
    let input = include_str!("../cases/600b_event.json");

    b.bytes = input.len() as u64;
    b.iter(|| Value::parse_owned(input).unwrap())
}

#[bench]
fn read_600b_event_value_serde_json(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/600b_event.json");

    b.bytes = input.len() as u64;
    b.iter(|| {
        let v: serde_json::Value = serde_json::from_slice(input).unwrap();
        v
    })
}

#[bench]
fn read_600b_event_value_json(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/600b_event.json");

    b.bytes = input.len() as u64;
    b.iter(|| {
        let v: json::JsonValue = json::parse(str::from_utf8(input).unwrap()).unwrap();
        v
    })
}

#[bench]
fn read_600b_event_value_simd_json(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/600b_event.json");

    b.bytes = input.len() as u64;
    b.iter(|| {
        let mut input = input.to_vec();
        let v = simd_json::to_borrowed_value(&mut input).unwrap();
        test::black_box(v);
    })
}

#[bench]
fn read_600b_event_validate_utf8(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/600b_event.json");

    b.bytes = input.len() as u64;
    b.iter(|| str::from_utf8(input).unwrap())
}

#[bench]
fn read_2kb_event_escaped_record(b: &mut test::Bencher) {
    let input = include_str!("../cases/2kb_event_escaped.json");

    b.bytes = input.len() as u64;
    b.iter(|| acorn_json::from_str::<Failure>(input).unwrap())
}

#[bench]
fn read_2kb_event_escaped_value(b: &mut test::Bencher) {
    let input = include_str!("../cases/2kb_event_escaped.json");

    b.bytes = input.len() as u64;
    b.iter(|| Value::parse_str(input).unwrap())
}

#[bench]
fn read_2kb_event_escaped_value_serde_json(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/2kb_event_escaped.json");

    b.bytes = input.len() as u64;
    b.iter(|| {
        let v: serde_json::Value = serde_json::from_slice(input).unwrap();
        v
    })
}

#[bench]
fn write_600b_event_record(b: &mut test::Bencher) {
    let input = include_str!("../cases/600b_event.json");
    let request: Request = acorn_json::from_str(input).unwrap();

    b.iter(|| acorn_json::to_string(&request))
}

#[bench]
fn write_2kb_event_escaped_value(b: &mut test::Bencher) {
    let input = include_str!("../cases/2kb_event_escaped.json");
    let value = Value::parse_str(input).unwrap();

    b.bytes = input.len() as u64;
    b.iter(|| value.to_string())
}

#[bench]
fn write_2kb_event_escaped_value_serde_json(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/2kb_event_escaped.json");
    let value: serde_json::Value = serde_json::from_slice(input).unwrap();

    b.bytes = input.len() as u64;
    b.iter(|| serde_json::to_string(&value).unwrap())
}
