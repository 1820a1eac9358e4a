#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

pub const HIERARCHY: &str = r#"{"arts & entertainment": ["television", "movies", "music"], "sports": ["football", "tennis"]}"#;

pub const DOMAIN_RULES: &str = r#"{
    "domain_rules": {"espn.com": "sports", "imdb.com": "movies", "example.com": "not in use"},
    "host_rules": {"au.movies.yahoo.com": "television", "sport.bbc.co.uk": "football"},
    "path_rules": {"bbc.co.uk/sport": "sports", "bbc.co.uk/sport/tennis": "tennis", "yahoo.com": "music"}
}"#;

pub const KEYWORDS: &str = r#"{
    "positive_words": {"sports": {"football": ["goal", "striker"], "tennis": ["racket"]}},
    "ignore_domains": {"google": {"com": true}},
    "bad_domain_specific": ["facebook.com"]
}"#;

pub const STOPWORDS: &str = r#"["the", "and", "of"]"#;

/// Serve the fixture documents on an ephemeral port, returning the base URL
///
/// `/missing.json` answers 404 and `/broken.json` answers with invalid JSON.
pub fn start_source_server() -> String {
    // reqwest would otherwise route loopback requests through any configured proxy
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let _ = handle(stream);
        }
    });

    format!("http://{}", addr)
}

fn handle(mut stream: TcpStream) -> std::io::Result<()> {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf)?;
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buf[..n]);
    }

    let request = String::from_utf8_lossy(&request);
    let path = request.split_whitespace().nth(1).unwrap_or("/");

    let (status, body) = match path {
        "/hierarchy.json" => ("200 OK", HIERARCHY),
        "/rules.json" => ("200 OK", DOMAIN_RULES),
        "/keywords.json" => ("200 OK", KEYWORDS),
        "/stopwords.json" => ("200 OK", STOPWORDS),
        "/broken.json" => ("200 OK", "{not json"),
        _ => ("404 Not Found", "not found"),
    };

    write!(
        stream,
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    )?;
    stream.flush()
}
