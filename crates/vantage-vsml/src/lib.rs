//! Lexer, parser, and AST for the **Vantage Scene Markup Language** (`.vsml`).
//!
//! This crate is intentionally dependency-free so scene files can be checked
//! by editors and linters without pulling in the engine or the rasterizer.
//! It knows nothing about what a `Camera` or an `Orbital` means; that mapping
//! lives in `vantage-scene`.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `VsmlDocument`, `Node`, `Prop`, `Value` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_str` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use vantage_vsml::parse_str;
//!
//! let src = r#"
//!     Scene {
//!         background: #ffffff
//!         Camera { depth: -8  fov_deg: 105  near: 0.01  far: 100 }
//!         Point { x: 0  y: 0  z: 0  size: 1  color: #000000 }
//!     }
//! "#;
//!
//! let doc = parse_str(src).unwrap();
//! assert_eq!(doc.root.kind, "Scene");
//! assert_eq!(doc.root.children.len(), 2);
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{Node, Prop, Value, VsmlDocument};
pub use error::ParseError;
pub use parser::parse_str;

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) -> VsmlDocument { parse_str(src).unwrap() }
    fn err(src: &str) -> ParseError { parse_str(src).unwrap_err() }

    #[test] fn empty_node() { ok("Scene { }"); }
    #[test] fn bare_node() { ok("Scene"); }
    #[test] fn block_comment() { ok("/* header */ Scene { /* body */ shape: square /* tail */ }"); }
    #[test] fn line_comment() { ok("// top\nScene {\n    // inside\n    shape: circle\n}"); }
    #[test] fn negative_and_fractional() { ok("Camera { depth: -8  near: 0.01  far: 1e2 }"); }

    #[test]
    fn props_and_children_mix_freely() {
        let doc = ok(r#"Scene {
            background: #fff
            Camera { depth: -8 }
            shape: square
            Orbital "outer" { radius: 11  color: #2e7d32 }
        }"#);
        let root = &doc.root;
        assert_eq!(root.props.len(), 2);
        assert_eq!(root.prop_str("shape"), Some("square"));
        assert_eq!(root.prop_color("background"), Some([255, 255, 255, 255]));

        let orbital = &root.children[1];
        assert_eq!(orbital.kind, "Orbital");
        assert_eq!(orbital.label.as_deref(), Some("outer"));
        assert_eq!(orbital.prop_f64("radius"), Some(11.0));
        assert_eq!(orbital.line, 5);
    }

    #[test]
    fn last_duplicate_prop_wins() {
        let doc = ok("Camera { near: 1  near: 2 }");
        assert_eq!(doc.root.prop_f64("near"), Some(2.0));
    }

    #[test]
    fn typed_getters_reject_other_kinds() {
        let doc = ok(r#"Point { size: "big" }"#);
        assert_eq!(doc.root.prop_f64("size"), None);
        assert_eq!(doc.root.prop_str("size"), Some("big"));
    }

    #[test]
    fn err_unclosed_block() {
        let e = err("Scene {\n  Camera { depth: -8 }\n");
        assert!(e.message.contains("unclosed"), "{}", e);
    }

    #[test]
    fn err_double_colon() {
        let e = err("Camera { depth: : 8 }");
        assert_eq!((e.line, e.col), (1, 17));
    }

    #[test] fn err_trailing_node() { err("Scene { } Scene { }"); }
    #[test] fn err_bad_color() { err("Scene { background: #xyz }"); }
    #[test] fn err_unclosed_string() { err(r#"Orbital "oops { }"#); }
    #[test] fn err_stray_number_in_block() { err("Scene { 42 }"); }

    #[test]
    fn display_includes_position() {
        let e = err("Scene {\n  near 1\n}");
        assert!(e.to_string().starts_with("vsml parse error at 2:"), "{}", e);
    }
}
