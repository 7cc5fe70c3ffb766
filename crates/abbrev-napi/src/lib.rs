#![deny(clippy::all)]

use napi_derive::napi;

use abbrev::{ExpandOptions, Expander as RustExpander};

#[napi(object)]
pub struct Options {
    pub default_tag: Option<String>,
    pub indent: Option<String>,
    pub max_repeat: Option<u32>,
    pub max_nodes: Option<u32>,
    pub max_depth: Option<u32>,
}

impl From<Options> for ExpandOptions {
    fn from(opts: Options) -> Self {
        let mut result = ExpandOptions::default();

        if let Some(tag) = opts.default_tag.filter(|t| !t.is_empty()) {
            result.default_tag = tag;
        }

        if let Some(indent) = opts.indent {
            result.indent = indent;
        }

        if let Some(limit) = opts.max_repeat {
            result.max_repeat = limit as usize;
        }

        if let Some(limit) = opts.max_nodes {
            result.max_nodes = limit as usize;
        }

        if let Some(limit) = opts.max_depth {
            result.max_depth = limit as usize;
        }

        result
    }
}

#[napi(object)]
pub struct Expansion {
    pub html: String,
    pub node_count: u32,
}

fn to_napi_error(err: abbrev::ExpandError) -> napi::Error {
    napi::Error::from_reason(err.to_string())
}

/// Expand an abbreviation to markup
#[napi]
pub fn expand(abbreviation: String, options: Option<Options>) -> napi::Result<Expansion> {
    let expander = match options {
        Some(opts) => RustExpander::with_options(opts.into()),
        None => RustExpander::new(),
    };

    let expansion = expander.expand(&abbreviation).map_err(to_napi_error)?;
    let node_count = expansion.nodes.iter().map(|n| n.count()).sum::<usize>();

    Ok(Expansion {
        html: expansion.html,
        node_count: u32::try_from(node_count).unwrap_or(u32::MAX),
    })
}

/// Wrap rendered markup in a minimal document for a sandboxed preview
#[napi]
pub fn preview_document(html: String) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n</head>\n<body>\n{html}\n</body>\n</html>"
    )
}

#[napi]
pub struct Expander {
    inner: RustExpander,
}

#[napi]
impl Expander {
    #[napi(constructor)]
    pub fn new(options: Option<Options>) -> Self {
        let inner = match options {
            Some(opts) => RustExpander::with_options(opts.into()),
            None => RustExpander::new(),
        };
        Self { inner }
    }

    /// Expand an abbreviation to markup
    #[napi]
    pub fn expand(&self, abbreviation: String) -> napi::Result<String> {
        self.inner
            .expand(&abbreviation)
            .map(|expansion| expansion.html)
            .map_err(to_napi_error)
    }
}
