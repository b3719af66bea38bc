use std::collections::HashMap;

use acorn_json::Value;

pub fn de(input: &[u8]) {
    // Make sure we don't panic when reading documents
    let value = Value::parse_slice(input);
    let expected = serde_json::from_slice::<serde_json::Value>(input);

    if let (Ok(value), Ok(expected)) = (&value, &expected) {
        // The encoded form must always be readable again
        assert!(Value::parse_owned(&value.to_string()).is_ok());

        // If both parsers manage to read the document then make sure they agree
        // Numbers are skipped, since the two disagree on when a number is an integer
        if !has_numbers(expected) {
            assert_eq!(expected, &value.to_serde_json());
        }
    }

    // Typed decoding must never panic either, whatever the input
    let _ = acorn_json::from_slice::<HashMap<String, Value>>(input);
    let _ = acorn_json::from_slice::<Vec<Option<(i32, String)>>>(input);
}

fn has_numbers(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Number(_) => true,
        serde_json::Value::Array(values) => values.iter().any(has_numbers),
        serde_json::Value::Object(values) => values.values().any(has_numbers),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{fs, io::Read};

    #[test]
    fn inputs() {
        if let Ok(inputs) = fs::read_dir("../in") {
            for input in inputs {
                let input = input.expect("invalid file").path();

                println!("input: {:?}", input);

                let mut f = fs::File::open(input).expect("failed to open");
                let mut input = Vec::new();
                f.read_to_end(&mut input).expect("failed to read file");

                // Just make sure we never panic
                de(&input);
            }
        }
    }

    #[test]
    fn crashes() {
        if let Ok(crashes) = fs::read_dir("../../target/fuzz_parse/crashes") {
            for crash in crashes {
                let crash = crash.expect("invalid file").path();

                println!("repro: {:?}", crash);

                let mut f = fs::File::open(crash).expect("failed to open");
                let mut crash = Vec::new();
                f.read_to_end(&mut crash).expect("failed to read file");

                // Just make sure we never panic
                de(&crash);
            }
        }
    }

    #[test]
    fn cases() {
        for case in fs::read_dir("../../cases").expect("missing cases") {
            let case = case.expect("invalid file").path();

            let input = fs::read(&case).expect("failed to read file");

            assert!(Value::parse_slice(&input).is_ok(), "{:?}", case);
            de(&input);
        }
    }

    #[test]
    fn agrees_with_serde_json() {
        de(br#"{"a":[1,-2.5,"xé",true,null],"b":{}}"#);
        de(b"[1e400]");
        de(b"{\"a\":1,\"a\":2}");
    }
}
