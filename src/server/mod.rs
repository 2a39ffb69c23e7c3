//! Persistent request loop
//!
//! Reads one JSON request per line from an input stream, answers each with
//! one JSON line on the output stream, and keeps serving until the input is
//! exhausted. Malformed lines get an error response and a diagnostic note on
//! stderr; they never terminate the loop.
//!
//! The loop is generic over `BufRead`/`Write` so the binary can wire it to
//! stdin/stdout while tests drive it with in-memory buffers.

pub mod protocol;

pub use protocol::{parse_request, Request, Response};

use crate::index::SuffixTrie;
use crate::query::QueryEngine;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Answer a single parsed request
pub fn handle_request(engine: &QueryEngine, request: &Request) -> Response {
    match request.command.as_str() {
        "search" => Response::Indices(engine.search(&request.suffix).to_vec()),
        "count" => Response::Count {
            count: engine.count_words_with_suffix(&request.suffix),
        },
        _ => Response::invalid_command(),
    }
}

/// Serve requests from `input` until EOF, writing responses to `output`.
///
/// Blank input lines are skipped. The only error this returns is an I/O
/// failure on the streams themselves; request-level failures are answered
/// in-band and the loop continues.
pub fn run_loop(trie: &SuffixTrie, input: impl BufRead, mut output: impl Write) -> Result<()> {
    let engine = QueryEngine::new(trie);

    for line in input.lines() {
        let line = line.context("Failed to read request line")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match parse_request(&line) {
            Ok(request) => handle_request(&engine, &request),
            Err(e) => {
                eprintln!("sxi: invalid request line: {}", e);
                Response::invalid_input()
            }
        };

        serde_json::to_writer(&mut output, &response).context("Failed to write response")?;
        writeln!(output).context("Failed to write response")?;
        output.flush().context("Failed to flush response")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::WordStore;
    use std::io::Cursor;

    fn trie(words: &[&str]) -> SuffixTrie {
        SuffixTrie::from_store(WordStore::from_words(
            words.iter().map(|w| w.to_string()).collect(),
        ))
    }

    fn serve(trie: &SuffixTrie, input: &str) -> Vec<String> {
        let mut output = Vec::new();
        run_loop(trie, Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_search_and_count_requests() {
        let trie = trie(&["cat", "hat", "rat"]);
        let responses = serve(
            &trie,
            concat!(
                r#"{"command": "search", "suffix": "at"}"#,
                "\n",
                r#"{"command": "count", "suffix": "at"}"#,
                "\n",
            ),
        );
        assert_eq!(responses, vec!["[0,1,2]", r#"{"count":3}"#]);
    }

    #[test]
    fn test_absent_suffix_responses() {
        let trie = trie(&["cat"]);
        let responses = serve(
            &trie,
            concat!(
                r#"{"command": "search", "suffix": "z"}"#,
                "\n",
                r#"{"command": "count", "suffix": "xyz"}"#,
                "\n",
            ),
        );
        assert_eq!(responses, vec!["[]", r#"{"count":0}"#]);
    }

    #[test]
    fn test_malformed_line_keeps_loop_alive() {
        let trie = trie(&["cat"]);
        let responses = serve(
            &trie,
            concat!(
                "not-json\n",
                r#"{"command": "search", "suffix": "cat"}"#,
                "\n",
            ),
        );
        assert_eq!(responses, vec![r#"{"error":"Invalid input"}"#, "[0]"]);
    }

    #[test]
    fn test_missing_field_is_invalid_input() {
        let trie = trie(&["cat"]);
        let responses = serve(&trie, "{\"command\": \"search\"}\n");
        assert_eq!(responses, vec![r#"{"error":"Invalid input"}"#]);
    }

    #[test]
    fn test_unknown_command() {
        let trie = trie(&["cat"]);
        let responses = serve(&trie, "{\"command\": \"delete\", \"suffix\": \"at\"}\n");
        assert_eq!(responses, vec![r#"{"error":"Invalid command"}"#]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let trie = trie(&["cat"]);
        let responses = serve(
            &trie,
            concat!("\n", "   \n", r#"{"command": "count", "suffix": "t"}"#, "\n"),
        );
        assert_eq!(responses, vec![r#"{"count":1}"#]);
    }

    #[test]
    fn test_loop_ends_cleanly_at_eof() {
        let trie = trie(&["cat"]);
        let responses = serve(&trie, "");
        assert!(responses.is_empty());
    }
}
