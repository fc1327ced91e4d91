//! Command-line field descriptions.

use std::str::FromStr;

use oxide_validate::{DateOptions, Field, FieldKind, FormError};

/// A field given on the command line as `name:kind[:flag,...]`.
///
/// Kinds: `text`, `decimal`, `bool`, `date`. Flags: `optional`, `nostrip`,
/// `common`, `format=<fmt>` (date only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldArg {
    pub name: String,
    pub kind: KindArg,
    pub optional: bool,
    pub no_strip: bool,
    pub common: bool,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    Text,
    Decimal,
    Bool,
    Date,
}

impl FromStr for KindArg {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "decimal" => Ok(Self::Decimal),
            "bool" | "boolean" => Ok(Self::Bool),
            "date" => Ok(Self::Date),
            other => Err(FormError::InvalidFieldSpec(format!(
                "unknown kind '{other}'"
            ))),
        }
    }
}

impl FromStr for FieldArg {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let name = parts.next().unwrap_or_default();
        let kind = parts
            .next()
            .map_or(Ok(KindArg::Text), KindArg::from_str)?;

        let mut arg = Self {
            name: name.to_string(),
            kind,
            optional: false,
            no_strip: false,
            common: false,
            format: None,
        };

        for flag in parts.next().into_iter().flat_map(|f| f.split(',')) {
            match flag {
                "optional" => arg.optional = true,
                "nostrip" => arg.no_strip = true,
                "common" => arg.common = true,
                "" => {}
                other => match other.strip_prefix("format=") {
                    Some(format) if kind == KindArg::Date => arg.format = Some(format.to_string()),
                    Some(_) => {
                        return Err(FormError::InvalidFieldSpec(format!(
                            "format is only valid for date fields: {s}"
                        )))
                    }
                    None => {
                        return Err(FormError::InvalidFieldSpec(format!(
                            "unknown flag '{other}' in {s}"
                        )))
                    }
                },
            }
        }

        Ok(arg)
    }
}

impl FieldArg {
    /// Builds the field, using `default_format` for dates without their own.
    pub fn to_field(&self, default_format: &str) -> oxide_validate::Result<Field> {
        let kind = match self.kind {
            KindArg::Text => FieldKind::Text,
            KindArg::Decimal => FieldKind::Decimal,
            KindArg::Bool => FieldKind::Boolean,
            KindArg::Date => FieldKind::Date(
                DateOptions::new().format(self.format.as_deref().unwrap_or(default_format)),
            ),
        };

        let mut field = Field::new(&self.name, kind)?.required(!self.optional);
        if self.no_strip {
            field = field.no_strip();
        }
        if self.common {
            field = field.common_error();
        }
        Ok(field)
    }
}

/// Parses a `name=value` pair.
pub fn parse_pair(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{s}'"))
}
