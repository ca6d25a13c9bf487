//! Shared fixture support: lowers Rust-syntax chain expressions into the
//! core tree model, playing the external-parser role the analysis
//! assumes.
//!
//! Fixtures are written as Rust expressions, with SwiftUI trailing
//! closures spelled as ordinary closure arguments, so every identifier
//! carries a real span to derive byte offsets from. Expected violation
//! positions are marked inline with `↓` and stripped before parsing.

use fluent_lint_core::{NodeId, Offset, RequireCompanion, SyntaxTree, TreeBuilder};
use proc_macro2::LineColumn;
use syn::spanned::Spanned;
use syn::{Expr, Member, Stmt};

/// Splits a marked fixture into clean source plus the byte offsets of
/// its `↓` markers.
pub fn markers(marked: &str) -> (String, Vec<Offset>) {
    let mut source = String::with_capacity(marked.len());
    let mut expected = Vec::new();
    for ch in marked.chars() {
        if ch == '↓' {
            expected.push(Offset::new(source.len()));
        } else {
            source.push(ch);
        }
    }
    (source, expected)
}

/// Parses a fixture expression into a syntax tree.
///
/// # Panics
///
/// Panics when the fixture is not a well-formed ASCII expression;
/// fixtures are test inputs, so that is a bug in the test.
pub fn parse_chain(source: &str) -> SyntaxTree {
    assert!(
        source.is_ascii(),
        "fixture must be ASCII so span columns equal byte offsets: {source}"
    );
    let expr: Expr = syn::parse_str(source).expect("fixture should parse as an expression");
    let lines = LineStarts::new(source);
    let mut builder = TreeBuilder::new();
    let root = lower(&mut builder, &lines, &expr);
    builder.build(root).expect("fixture should form a tree")
}

/// Runs `rule` over a marked fixture and asserts its violations land
/// exactly on the markers, in traversal order. A fixture without markers
/// asserts the rule stays silent.
pub fn assert_lints(rule: &RequireCompanion, marked: &str) {
    let (source, expected) = markers(marked);
    let tree = parse_chain(&source);
    let positions: Vec<Offset> = rule.check(&tree).iter().map(|v| v.position).collect();
    assert_eq!(positions, expected, "fixture: {source}");
}

/// Byte offset of the start of each line, for span conversion.
struct LineStarts(Vec<usize>);

impl LineStarts {
    fn new(source: &str) -> Self {
        let mut starts = vec![0];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                starts.push(i + 1);
            }
        }
        Self(starts)
    }

    /// Converts a 1-based line / 0-based column pair into a byte offset.
    fn offset(&self, at: LineColumn) -> Offset {
        Offset::new(self.0[at.line - 1] + at.column)
    }
}

fn lower(builder: &mut TreeBuilder, lines: &LineStarts, expr: &Expr) -> NodeId {
    match expr {
        Expr::MethodCall(call) => {
            let receiver = lower(builder, lines, &call.receiver);
            let member = builder
                .member_access(
                    receiver,
                    call.method.to_string(),
                    lines.offset(call.method.span().start()),
                )
                .expect("receiver is fresh");
            let args = call
                .args
                .iter()
                .map(|arg| lower(builder, lines, arg))
                .collect();
            builder.call(member, args).expect("children are fresh")
        }
        Expr::Call(call) => {
            let callee = lower(builder, lines, &call.func);
            let args = call
                .args
                .iter()
                .map(|arg| lower(builder, lines, arg))
                .collect();
            builder.call(callee, args).expect("children are fresh")
        }
        Expr::Path(path) => match path.path.get_ident() {
            Some(ident) => {
                builder.identifier(ident.to_string(), lines.offset(ident.span().start()))
            }
            None => opaque(builder, lines, expr, vec![]),
        },
        Expr::Field(field) => {
            let base = lower(builder, lines, &field.base);
            match &field.member {
                Member::Named(ident) => builder
                    .member_access(base, ident.to_string(), lines.offset(ident.span().start()))
                    .expect("base is fresh"),
                Member::Unnamed(_) => opaque(builder, lines, expr, vec![base]),
            }
        }
        Expr::Closure(closure) => {
            let body = lower(builder, lines, &closure.body);
            opaque(builder, lines, expr, vec![body])
        }
        Expr::Block(block) => {
            let children = block
                .block
                .stmts
                .iter()
                .filter_map(|stmt| match stmt {
                    Stmt::Expr(inner, _) => Some(lower(builder, lines, inner)),
                    _ => None,
                })
                .collect();
            opaque(builder, lines, expr, children)
        }
        Expr::Paren(paren) => lower(builder, lines, &paren.expr),
        _ => opaque(builder, lines, expr, vec![]),
    }
}

fn opaque(
    builder: &mut TreeBuilder,
    lines: &LineStarts,
    expr: &Expr,
    children: Vec<NodeId>,
) -> NodeId {
    builder
        .other(children, lines.offset(expr.span().start()))
        .expect("children are fresh")
}
