// ── Value ─────────────────────────────────────────────────────────────────

/// A literal value on the right-hand side of a property.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Quoted string: `"rings"`
    Str(String),
    /// Numeric literal: `-8`, `0.01`, `1e-3`
    Number(f64),
    /// Color literal as straight-alpha sRGB bytes: `#rgb`, `#rrggbb`, `#rrggbbaa`
    Color([u8; 4]),
    /// Unquoted identifier: enum-like settings such as `circle` or `descending`
    Ident(String),
}

impl Value {
    /// Short name of the value kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_)    => "string",
            Value::Number(_) => "number",
            Value::Color(_)  => "color",
            Value::Ident(_)  => "identifier",
        }
    }
}

// ── Prop ──────────────────────────────────────────────────────────────────

/// A single `key: value` property inside a node block.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub key: String,
    pub value: Value,
    /// 1-based line of the key.
    pub line: usize,
}

// ── Node ──────────────────────────────────────────────────────────────────

/// A scene element.
///
/// ```vsml
/// Orbital "outer" {
///     radius: 11
///     color: #2e7d32
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Element kind: `"Scene"`, `"Camera"`, `"Orbital"`, ...
    pub kind: String,
    /// Optional inline label (`Orbital "outer"`), used in diagnostics.
    pub label: Option<String>,
    pub props: Vec<Prop>,
    pub children: Vec<Node>,
    /// 1-based line of the kind identifier.
    pub line: usize,
}

impl Node {
    /// Look up a property value by key. The last occurrence wins.
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.iter().rev().find(|p| p.key == key).map(|p| &p.value)
    }

    /// Get a property as `f64` if it is a `Number`.
    pub fn prop_f64(&self, key: &str) -> Option<f64> {
        match self.prop(key)? {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Get a property as `&str` if it is a `Str` or `Ident`.
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        match self.prop(key)? {
            Value::Str(s) | Value::Ident(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get a property as RGBA bytes if it is a `Color`.
    pub fn prop_color(&self, key: &str) -> Option<[u8; 4]> {
        match self.prop(key)? {
            Value::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// Display name: `Kind "label"` or just `Kind`.
    pub fn display_name(&self) -> String {
        match &self.label {
            Some(label) => format!("{} {:?}", self.kind, label),
            None => self.kind.clone(),
        }
    }
}

// ── VsmlDocument ──────────────────────────────────────────────────────────

/// The top-level parse result for a `.vsml` source file.
#[derive(Debug, Clone, PartialEq)]
pub struct VsmlDocument {
    pub root: Node,
}
