//! Debug dump of a syntax tree
//!
//! One line per element: depth marker, kind, then the trimmed text in brackets.
//! Nodes without child nodes print their content, tokens print their raw text.

mod options;


use crate::parser::{SyntaxNode, SyntaxToken};
pub use options::DumpOptions;
use rowan::NodeOrToken;
use std::fmt;

/// Render `node` and its descendants down to `options.max_depth`
pub fn dump_tree(node: &SyntaxNode, options: &DumpOptions) -> String {
    TreeDump { node, options }.to_string()
}

struct TreeDump<'a> {
    node: &'a SyntaxNode,
    options: &'a DumpOptions,
}

impl fmt::Display for TreeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.node, 0)
    }
}

impl TreeDump<'_> {
    fn write_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        node: &SyntaxNode,
        depth: usize,
    ) -> fmt::Result {
        write!(f, "{} {:?}", self.options.indent(depth), node.kind())?;
        if node.first_child().is_none() {
            write!(f, " [{}]", node.text().to_string().trim())?;
        }
        writeln!(f)?;

        if depth >= self.options.max_depth {
            return Ok(());
        }
        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.write_node(f, &n, depth + 1)?,
                NodeOrToken::Token(t) => self.write_token(f, &t, depth + 1)?,
            }
        }
        Ok(())
    }

    fn write_token(
        &self,
        f: &mut fmt::Formatter<'_>,
        token: &SyntaxToken,
        depth: usize,
    ) -> fmt::Result {
        if token.kind().is_trivia() && !self.options.show_trivia {
            return Ok(());
        }
        writeln!(
            f,
            "{} {:?} [{}]",
            self.options.indent(depth),
            token.kind(),
            token.text().escape_debug()
        )
    }
}
