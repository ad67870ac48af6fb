//! Ingest a newline-delimited log stream and project each record onto a
//! typed struct.
//!
//! Run with: `cargo run --example log_stream`

use jsonshade::{Load, Node, Parser};

jsonshade::load_struct! {
    #[derive(Debug)]
    struct LogRecord {
        ts: u64,
        level: Level,
        msg: String,
        status: Option<u16>,
    }
}

jsonshade::load_enum! {
    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Level {
        Debug = "debug",
        Info = "info",
        Warn = "warn",
        Error = "error",
    }
}

const STREAM: &str = r#"
{"ts":1700000001,"level":"info","msg":"listening on :8080"}
{"ts":1700000002,"level":"info","msg":"GET /health","status":200}
{"ts":1700000007,"level":"warn","msg":"slow request","status":200}
{"ts":1700000009,"level":"error","msg":"upstream timed out","status":504}
"#;

fn main() {
    let mut parser = Parser::new();
    let doc = parser.parse_multi(STREAM).expect("stream parses");

    let Node::Multi(span) = doc.root() else {
        unreachable!("parse_multi always yields a multi root");
    };

    let mut errors = 0usize;
    for node in doc.nodes(*span) {
        let record = LogRecord::load(&doc, node).expect("record loads");
        if record.level == Level::Error {
            errors += 1;
        }
        println!("{record:?}");
    }

    // Every record shares one interned key sequence (modulo the optional
    // "status" key), so the trie stays tiny no matter how long the stream.
    println!(
        "{} records, {} errors, {} trie nodes",
        doc.nodes(*span).len(),
        errors,
        parser.shadow().node_count()
    );
}
