// src/node/parser.rs

//! Parser for the host's text serialisation of config nodes:
//!
//! ```text
//! BUILDINGBLOCKERCONFIG
//! {
//!     GAMEMODE
//!     {
//!         name = Career   // comment
//!         HIDEFACILITY { name = Observatory }
//!     }
//! }
//! ```
//!
//! Values run from the first `=` to the end of the line (or the next brace).
//! A bare word names the node opened by the next `{`, which may sit on the
//! same line or a later one.

use thiserror::Error;
use tracing::debug;

use super::RawNode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: unmatched '}}'")]
    UnmatchedClose { line: usize },

    #[error("line {line}: node '{name}' is never closed")]
    Unclosed { name: String, line: usize },

    #[error("line {line}: unexpected text '{text}'")]
    UnexpectedText { text: String, line: usize },

    #[error("line {line}: value has an empty key")]
    EmptyKey { line: usize },
}

impl ParseError {
    /// 1-based line the error was detected on.
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnmatchedClose { line }
            | ParseError::Unclosed { line, .. }
            | ParseError::UnexpectedText { line, .. }
            | ParseError::EmptyKey { line } => *line,
        }
    }
}

/// Parse a whole document into its top-level nodes, in file order.
///
/// Values outside of any node are dropped.
pub fn parse_nodes(text: &str) -> Result<Vec<RawNode>, ParseError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut parser = Parser::new();

    for (idx, raw_line) in text.lines().enumerate() {
        let line = idx + 1;
        let content = match raw_line.find("//") {
            Some(pos) => &raw_line[..pos],
            None => raw_line,
        };

        let mut segment = String::new();
        for ch in content.chars() {
            match ch {
                '{' => {
                    parser.open(&segment, line)?;
                    segment.clear();
                }
                '}' => {
                    parser.close(&segment, line)?;
                    segment.clear();
                }
                _ => segment.push(ch),
            }
        }
        parser.end_of_segment(&segment, line)?;
    }

    parser.finish()
}

struct Parser {
    /// Open nodes with the line they were opened on; index 0 is the document root.
    stack: Vec<(RawNode, usize)>,
    /// Bare word waiting for its `{`, with the line it appeared on.
    pending_name: Option<(String, usize)>,
}

impl Parser {
    fn new() -> Self {
        Self {
            stack: vec![(RawNode::default(), 0)],
            pending_name: None,
        }
    }

    fn open(&mut self, segment: &str, line: usize) -> Result<(), ParseError> {
        let text = segment.trim();
        if text.contains('=') {
            return Err(ParseError::UnexpectedText {
                text: text.to_string(),
                line,
            });
        }

        let pending = self.pending_name.take().map(|(name, _)| name);
        let name = if text.is_empty() {
            pending.unwrap_or_default()
        } else {
            text.to_string()
        };

        self.stack.push((RawNode::new(name), line));
        Ok(())
    }

    fn close(&mut self, segment: &str, line: usize) -> Result<(), ParseError> {
        self.end_of_segment(segment, line)?;
        if let Some((text, line)) = self.pending_name.take() {
            return Err(ParseError::UnexpectedText { text, line });
        }

        if self.stack.len() == 1 {
            return Err(ParseError::UnmatchedClose { line });
        }
        if let Some((node, _)) = self.stack.pop() {
            self.current().nodes.push(node);
        }
        Ok(())
    }

    /// Handle the text between braces or up to end of line.
    fn end_of_segment(&mut self, segment: &str, line: usize) -> Result<(), ParseError> {
        let text = segment.trim();
        if text.is_empty() {
            return Ok(());
        }

        match text.split_once('=') {
            Some((key, value)) => {
                let key = key.trim();
                if key.is_empty() {
                    return Err(ParseError::EmptyKey { line });
                }
                if let Some((text, line)) = self.pending_name.take() {
                    return Err(ParseError::UnexpectedText { text, line });
                }
                if self.stack.len() == 1 {
                    debug!(line, key, "ignoring value outside of any node");
                    return Ok(());
                }
                self.current()
                    .values
                    .push((key.to_string(), value.trim().to_string()));
            }
            None => {
                if let Some((previous, _)) = self.pending_name.replace((text.to_string(), line)) {
                    debug!(line, previous = %previous, "node name replaced before '{{'");
                }
            }
        }
        Ok(())
    }

    fn current(&mut self) -> &mut RawNode {
        let last = self.stack.len() - 1;
        &mut self.stack[last].0
    }

    fn finish(mut self) -> Result<Vec<RawNode>, ParseError> {
        if let Some((text, line)) = self.pending_name.take() {
            return Err(ParseError::UnexpectedText { text, line });
        }
        if self.stack.len() > 1 {
            if let Some((node, line)) = self.stack.pop() {
                return Err(ParseError::Unclosed {
                    name: node.name,
                    line,
                });
            }
        }
        let root = self.stack.swap_remove(0).0;
        Ok(root.nodes)
    }
}
