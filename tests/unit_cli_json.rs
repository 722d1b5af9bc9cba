#![allow(missing_docs)]

use std::fs;
use std::process::{Command, Output};

use jsonbin::codec::{Compression, LoadOptions, SaveOptions, load_json_file, save_json_file};
use jsonbin_testkit::{fixture_path, sample_json, scratch_path};
use serde_json::Value;

#[test]
fn encode_then_decode_round_trips_through_cli() {
	let input = scratch_path("cli-in.json");
	fs::write(&input, serde_json::to_vec(&sample_json()).expect("sample serializes")).expect("input written");
	let packed = scratch_path("cli-out.jb");

	let output = run(&["encode", path_str(&input), path_str(&packed), "--zstd", "--atomic"]);
	assert!(output.status.success(), "encode failed: {}", String::from_utf8_lossy(&output.stderr));
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("compression: zstd"), "unexpected encode output: {stdout}");
	assert!(stdout.contains("root: object"), "unexpected encode output: {stdout}");

	let on_disk = fs::read(&packed).expect("output readable");
	assert_eq!(Compression::detect(&on_disk).expect("detect succeeds"), Compression::Zstd);
	assert_eq!(load_json_file(&packed, &LoadOptions::default()).expect("library load"), sample_json());

	let json = run_json(&["decode", path_str(&packed)]);
	assert_eq!(json, sample_json());
}

#[test]
fn decode_writes_pretty_json_to_file() {
	let target = scratch_path("cli-decoded.json");
	let output = run(&["decode", path_str(&fixture_path("sample.jb")), "--pretty", "--strict", "--output", path_str(&target)]);
	assert!(output.status.success(), "decode failed: {}", String::from_utf8_lossy(&output.stderr));

	let text = fs::read_to_string(&target).expect("decoded file readable");
	assert!(text.contains("\n  \"name\": \"fixture\""), "expected pretty output: {text}");
	let expected: Value = serde_json::from_str(&fs::read_to_string(fixture_path("sample.json")).expect("fixture readable")).expect("fixture parses");
	assert_eq!(serde_json::from_str::<Value>(&text).expect("decoded json parses"), expected);
}

#[test]
fn info_json_output_is_valid_and_structured() {
	let json = run_json(&["info", path_str(&fixture_path("sample.jb")), "--json"]);

	assert_eq!(json["compression"], "none");
	assert_eq!(json["root"], "object");
	assert_eq!(json["fields"], 11);
	assert_eq!(json["tags"]["string"], 4);
	assert_eq!(json["encoded_bytes"], json["file_bytes"]);
}

#[test]
fn info_json_reports_compressed_structure() {
	let path = scratch_path("cli-info.jb");
	save_json_file(&path, &sample_json(), &SaveOptions::compressed()).expect("save succeeds");

	let json = run_json(&["info", path_str(&path), "--json"]);
	assert_eq!(json["compression"], "zstd");
	assert_eq!(json["root"], "object");
	assert_eq!(json["tags"]["object"], 3);
	assert_eq!(json["tags"]["array"], 2);
	assert_eq!(json["tags"]["bool"], 1);
	assert_eq!(json["max_depth"], 3);
}

#[test]
fn null_input_fails_with_location() {
	let input = scratch_path("cli-null.json");
	fs::write(&input, br#"{"a": [1, null]}"#).expect("input written");
	let packed = scratch_path("cli-null.jb");

	let output = run(&["encode", path_str(&input), path_str(&packed)]);
	assert!(!output.status.success(), "null input must fail");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("error: null value at /a/1"), "unexpected stderr: {stderr}");
	assert!(!packed.exists(), "nothing is written for rejected input");
}

#[test]
fn unknown_tag_is_reported() {
	let input = scratch_path("cli-bad.jb");
	fs::write(&input, [0x02_u8, 0x01, 0x00, 0x00, 0x00, 0x01, b'k', 0x09]).expect("input written");

	let output = run(&["decode", path_str(&input), "--compression", "none"]);
	assert!(!output.status.success(), "unknown tag must fail");
	assert!(String::from_utf8_lossy(&output.stderr).contains("unknown tag 9 at offset 7"));
}

#[test]
fn help_describes_every_option() {
	let cases: [(&str, &[&str]); 3] = [
		("encode", &["Wrap the output in a zstd frame", "zstd compression level", "Write a temporary file", "Deepest container nesting"]),
		("decode", &["Indent the JSON output", "Compression layer of the input", "Deepest container nesting"]),
		("info", &["Binary file to inspect", "Compression layer of the input", "Print the summary as JSON"]),
	];

	for (command, expected) in cases {
		let output = run(&[command, "--help"]);
		assert!(output.status.success(), "{command} --help failed");
		let help = String::from_utf8_lossy(&output.stdout);
		for text in expected {
			assert!(help.contains(text), "{command} --help lacks {text:?}:\n{help}");
		}
	}
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_jsonbin")).args(args).output().expect("command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(output.status.success(), "command should succeed: {}", String::from_utf8_lossy(&output.stderr));
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn path_str(path: &std::path::Path) -> &str {
	path.to_str().expect("test paths are utf-8")
}
