//! Rewrites the version macros of `postgis_config.h` into `festival_config.h`.

use crate::domain::model::{GenerationResult, HeaderLayout, MacroEntry};
use regex::Regex;
use std::io::{self, BufRead, Write};
use std::sync::LazyLock;

/// Matches `#define NAME VALUE`, keyword case-insensitive, leading whitespace allowed.
const REGEX_DEFINE: &str = r"(?i)^\s*#define\s+(\w+)\s+(\S+)";

static DEFINE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(REGEX_DEFINE).expect("valid #define regex"));

pub type MacroTransform = fn(&str) -> String;

/// Source macro name to output block. Lookup is by exact name.
pub const TRANSFORM_TABLE: &[(&str, MacroTransform)] = &[
    ("POSTGIS_GDAL_VERSION", gdal_version),
    ("POSTGIS_GEOS_VERSION", geos_version),
    ("POSTGIS_PGSQL_VERSION", pgsql_version),
    ("POSTGIS_LIB_VERSION", postgis_version),
];

fn gdal_version(value: &str) -> String {
    format!("/* GDAL library version */\n#define FESTIVAL_GDAL_VERSION {}\n", value)
}

fn geos_version(value: &str) -> String {
    format!("/* GEOS library version */\n#define FESTIVAL_GEOS_VERSION {}\n", value)
}

fn pgsql_version(value: &str) -> String {
    format!(
        "/* PostgreSQL server version */\n#define FESTIVAL_PGSQL_VERSION {}\n",
        value
    )
}

fn postgis_version(value: &str) -> String {
    format!(
        "/* PostGIS version */\n#define FESTIVAL_POSTGIS_VERSION {}\n",
        remove_quote_dot(value)
    )
}

/// Drops every `"` and `.`, so `"3.1.0"` becomes `310`.
pub fn remove_quote_dot(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, '"' | '.')).collect()
}

pub fn lookup(name: &str) -> Option<MacroTransform> {
    TRANSFORM_TABLE
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, transform)| *transform)
}

/// Returns `(name, value)` when the line is a `#define` with a value.
pub fn parse_define(line: &str) -> Option<(&str, &str)> {
    let caps = DEFINE_PATTERN.captures(line)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

#[derive(Debug, Clone, Default)]
pub struct HeaderTransformer {
    layout: HeaderLayout,
}

impl HeaderTransformer {
    pub fn new(layout: HeaderLayout) -> Self {
        Self { layout }
    }

    /// Streams `input` into `output` and returns the recognized entries in input order.
    ///
    /// Lines that are not a `#define`, or that define a name outside
    /// [`TRANSFORM_TABLE`], produce nothing. Only I/O failures are errors.
    pub fn transform<R: BufRead, W: Write>(
        &self,
        input: R,
        output: &mut W,
    ) -> io::Result<Vec<MacroEntry>> {
        self.write_preamble(output)?;

        let mut entries = Vec::new();
        for line in input.lines() {
            let line = line?;
            let Some((name, value)) = parse_define(&line) else {
                continue;
            };
            let Some(transform) = lookup(name) else {
                continue;
            };

            output.write_all(transform(value).as_bytes())?;
            output.write_all(b"\n")?;
            entries.push(MacroEntry {
                name: name.to_string(),
                value: value.to_string(),
            });
        }

        self.write_footer(output)?;
        Ok(entries)
    }

    /// Renders `source` fully in memory.
    pub fn render(&self, source: &str) -> io::Result<GenerationResult> {
        let mut buffer = Vec::with_capacity(source.len() / 4 + 256);
        let entries = self.transform(source.as_bytes(), &mut buffer)?;
        let header = String::from_utf8(buffer)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(GenerationResult { entries, header })
    }

    fn write_preamble<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let guard = &self.layout.guard;
        write!(
            output,
            "/* postgis_config.h.  Generated from postgis_config.h.in by python.  */\n\
             #ifndef {guard}\n\
             #define {guard} 1\n\
             \n\
             #define HAVE_FLASHDBSIM 1\n\
             \n"
        )
    }

    fn write_footer<W: Write>(&self, output: &mut W) -> io::Result<()> {
        write!(output, "#endif /* {} */", self.layout.guard)
    }
}
