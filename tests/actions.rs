use serde_json::json;
use socketio_harness::message::client_message::{self, SampleRecord};
use socketio_harness::message::server_message;
use socketio_harness::prompt::Command;

#[test]
fn text_command_carries_the_typed_message() {
    let Command::SendText(text) = Command::parse("text hello") else {
        panic!("expected a send-text action");
    };
    assert_eq!(client_message::string_payload(&text), json!("hello"));
}

#[test]
fn empty_input_still_emits() {
    let Command::SendText(text) = Command::parse("text") else {
        panic!("expected a send-text action");
    };
    assert_eq!(client_message::string_payload(&text), json!(""));
}

#[test]
fn record_payload_is_fixed_regardless_of_input() {
    assert_eq!(Command::parse("record"), Command::SendRecord);
    assert_eq!(
        serde_json::to_value(SampleRecord::sample()).unwrap(),
        json!({"field1": "value1", "field2": 123})
    );
}

#[test]
fn only_the_two_send_commands_cause_emissions() {
    for line in ["", "help", "quit", "exit", "struct", "send hello"] {
        assert!(
            !matches!(
                Command::parse(line),
                Command::SendText(_) | Command::SendRecord
            ),
            "line {line:?} must not emit"
        );
    }
}

#[test]
fn channel_names_match_the_server_contract() {
    assert_eq!(client_message::STRING_TO_SERVER, "string to server");
    assert_eq!(client_message::STRUCT_TO_SERVER, "struct to server");
    assert_eq!(server_message::STRING_TO_CLIENT, "string to client");
    assert_eq!(server_message::STRUCT_TO_CLIENT, "struct to client");
}
