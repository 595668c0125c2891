//! Parsing of `#[model(...)]` attributes.
//!
//! This module contains the data structures and parsing logic for
//! extracting record and union configuration from derive input.

use proc_macro2::Span;
use syn::{Attribute, Error, LitStr, Result, spanned::Spanned};

/// Container-level configuration for `#[derive(ModelRecord)]`.
#[derive(Debug, Default)]
pub struct RecordConfig {
    /// Schema name used in errors (defaults to the struct name)
    pub name: Option<String>,
}

impl RecordConfig {
    /// Parse record configuration from the struct's attributes.
    pub fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut config = RecordConfig::default();

        for attr in model_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let value: LitStr = meta.value()?.parse()?;
                    config.name = Some(value.value());
                } else {
                    return Err(meta.error(format!(
                        "unknown model attribute on record: `{}`. Expected `name`",
                        path_name(&meta.path)
                    )));
                }
                Ok(())
            })?;
        }

        Ok(config)
    }
}

/// Explicit required/optional override on a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

/// Field-level configuration for `#[derive(ModelRecord)]`.
#[derive(Debug)]
pub struct FieldConfig {
    /// Document key, when it differs from the field name
    pub rename: Option<String>,
    /// Marks the extra-fields map
    pub extra: bool,
    /// Overrides `Field<_>` detection
    pub presence: Option<Presence>,
    /// Span for error reporting
    pub span: Span,
}

impl FieldConfig {
    /// Parse field configuration from a field's attributes.
    pub fn from_attrs(attrs: &[Attribute], span: Span) -> Result<Self> {
        let mut config = FieldConfig {
            rename: None,
            extra: false,
            presence: None,
            span,
        };

        for attr in model_attrs(attrs) {
            config.span = attr.span();
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let value: LitStr = meta.value()?.parse()?;
                    config.rename = Some(value.value());
                } else if meta.path.is_ident("extra") {
                    config.extra = true;
                } else if meta.path.is_ident("optional") {
                    config.set_presence(Presence::Optional, &meta)?;
                } else if meta.path.is_ident("required") {
                    config.set_presence(Presence::Required, &meta)?;
                } else {
                    return Err(meta.error(format!(
                        "unknown model attribute on field: `{}`. Expected one of: rename, extra, optional, required",
                        path_name(&meta.path)
                    )));
                }
                Ok(())
            })?;
        }

        if config.extra && (config.rename.is_some() || config.presence.is_some()) {
            return Err(Error::new(
                config.span,
                "`extra` cannot be combined with `rename`, `optional` or `required`",
            ));
        }

        Ok(config)
    }

    fn set_presence(
        &mut self,
        presence: Presence,
        meta: &syn::meta::ParseNestedMeta<'_>,
    ) -> Result<()> {
        if self.presence.is_some_and(|current| current != presence) {
            return Err(meta.error("a field cannot be both `optional` and `required`"));
        }
        self.presence = Some(presence);
        Ok(())
    }
}

/// Container-level configuration for `#[derive(ModelUnion)]`.
#[derive(Debug, Default)]
pub struct UnionConfig {
    /// Schema name used in errors (defaults to the enum name)
    pub name: Option<String>,
    /// Tag key for discriminator dispatch; ordered trial when absent
    pub discriminator: Option<String>,
}

impl UnionConfig {
    /// Parse union configuration from the enum's attributes.
    pub fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut config = UnionConfig::default();

        for attr in model_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let value: LitStr = meta.value()?.parse()?;
                    config.name = Some(value.value());
                } else if meta.path.is_ident("discriminator") {
                    let value: LitStr = meta.value()?.parse()?;
                    if value.value().is_empty() {
                        return Err(Error::new(value.span(), "discriminator key cannot be empty"));
                    }
                    config.discriminator = Some(value.value());
                } else {
                    return Err(meta.error(format!(
                        "unknown model attribute on union: `{}`. Expected one of: name, discriminator",
                        path_name(&meta.path)
                    )));
                }
                Ok(())
            })?;
        }

        Ok(config)
    }
}

/// Variant-level configuration for `#[derive(ModelUnion)]`.
#[derive(Debug, Default)]
pub struct VariantConfig {
    /// Discriminator value selecting this variant
    pub tag: Option<String>,
    /// Span for error reporting
    pub span: Option<Span>,
}

impl VariantConfig {
    /// Parse variant configuration from a variant's attributes.
    pub fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut config = VariantConfig::default();

        for attr in model_attrs(attrs) {
            config.span = Some(attr.span());
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("tag") {
                    let value: LitStr = meta.value()?.parse()?;
                    config.tag = Some(value.value());
                } else {
                    return Err(meta.error(format!(
                        "unknown model attribute on variant: `{}`. Expected `tag`",
                        path_name(&meta.path)
                    )));
                }
                Ok(())
            })?;
        }

        Ok(config)
    }
}

fn model_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("model"))
}

fn path_name(path: &syn::Path) -> String {
    path.get_ident().map(|i| i.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_field_rename_and_optional() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[model(rename = "type", optional)])];
        let config = FieldConfig::from_attrs(&attrs, Span::call_site()).unwrap();
        assert_eq!(config.rename.as_deref(), Some("type"));
        assert_eq!(config.presence, Some(Presence::Optional));
        assert!(!config.extra);
    }

    #[test]
    fn test_field_ignores_foreign_attributes() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[serde(rename = "x")])];
        let config = FieldConfig::from_attrs(&attrs, Span::call_site()).unwrap();
        assert!(config.rename.is_none());
    }

    #[test]
    fn test_field_rejects_conflicting_presence() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[model(optional, required)])];
        assert!(FieldConfig::from_attrs(&attrs, Span::call_site()).is_err());
    }

    #[test]
    fn test_extra_cannot_be_renamed() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[model(extra, rename = "x")])];
        assert!(FieldConfig::from_attrs(&attrs, Span::call_site()).is_err());
    }

    #[test]
    fn test_union_discriminator() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[model(discriminator = "type")])];
        let config = UnionConfig::from_attrs(&attrs).unwrap();
        assert_eq!(config.discriminator.as_deref(), Some("type"));
    }

    #[test]
    fn test_union_rejects_empty_discriminator() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[model(discriminator = "")])];
        assert!(UnionConfig::from_attrs(&attrs).is_err());
    }

    #[test]
    fn test_unknown_record_attribute() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[model(strict)])];
        let err = RecordConfig::from_attrs(&attrs).unwrap_err();
        assert!(err.to_string().contains("unknown model attribute on record"));
    }
}
