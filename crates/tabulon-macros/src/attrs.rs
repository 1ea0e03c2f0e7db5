//! Attribute parsing for the `Record` derive macro.
//!
//! This module provides the parser for the `#[record(...)]` field attribute.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Expr, Lit, Meta, Result, Token, UnOp,
};

/// Field-level attributes from `#[record(...)]`.
#[derive(Debug, Default, Clone)]
pub struct RecordAttr {
    /// Display name override: `rename = "Date of birth"`
    pub rename: Option<String>,
    /// Format template: `format = "yyyy-MM-dd"` or `format = "N0"`
    pub format: Option<String>,
    /// Alignment: `align = "right"`
    pub align: Option<String>,
    /// Explicit ordering: `order = 2`
    pub order: Option<i32>,
    /// Exclude this field from every output: `ignore`
    pub ignore: bool,
    /// Quote this field's value in CSV output: `encapsulate`
    pub encapsulate: bool,
}

impl Parse for RecordAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = RecordAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                // rename = "Custom name"
                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    attr.rename = Some(parse_string_expr(&nv.value)?);
                }

                // format = "yyyy-MM-dd"
                Meta::NameValue(nv) if nv.path.is_ident("format") => {
                    attr.format = Some(parse_string_expr(&nv.value)?);
                }

                // align = "right"
                Meta::NameValue(nv) if nv.path.is_ident("align") => {
                    attr.align = Some(parse_string_expr(&nv.value)?);
                }

                // order = 2 (negative values allowed)
                Meta::NameValue(nv) if nv.path.is_ident("order") => {
                    attr.order = Some(parse_i32_expr(&nv.value)?);
                }

                // ignore (flag)
                Meta::Path(p) if p.is_ident("ignore") => {
                    attr.ignore = true;
                }

                // encapsulate (flag)
                Meta::Path(p) if p.is_ident("encapsulate") => {
                    attr.encapsulate = true;
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown record attribute: expected one of: rename, format, align, \
                         order, ignore, encapsulate",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Parse a string from an expression.
fn parse_string_expr(expr: &Expr) -> Result<String> {
    if let Expr::Lit(expr_lit) = expr {
        if let Lit::Str(lit_str) = &expr_lit.lit {
            return Ok(lit_str.value());
        }
    }
    Err(Error::new(expr.span(), "expected string literal"))
}

/// Parse an i32 from an expression, accepting a leading minus.
fn parse_i32_expr(expr: &Expr) -> Result<i32> {
    match expr {
        Expr::Lit(expr_lit) => {
            if let Lit::Int(lit_int) = &expr_lit.lit {
                return lit_int.base10_parse();
            }
            Err(Error::new(expr.span(), "expected integer literal"))
        }
        Expr::Unary(unary) => {
            if let UnOp::Neg(_) = unary.op {
                Ok(-parse_i32_expr(&unary.expr)?)
            } else {
                Err(Error::new(expr.span(), "expected integer literal"))
            }
        }
        _ => Err(Error::new(expr.span(), "expected integer literal")),
    }
}

/// Extract `#[record(...)]` attributes from a field's attributes.
pub fn parse_record_attrs(attrs: &[Attribute]) -> Result<RecordAttr> {
    for attr in attrs {
        if attr.path().is_ident("record") {
            return attr.parse_args::<RecordAttr>();
        }
    }
    Ok(RecordAttr::default())
}

/// Generate the token stream for a `TextAlign` variant.
pub fn generate_align_tokens(align: &str, span: proc_macro2::Span) -> Result<TokenStream> {
    match align {
        "left" => Ok(quote! { ::tabulon::TextAlign::Left }),
        "right" => Ok(quote! { ::tabulon::TextAlign::Right }),
        "center" => Ok(quote! { ::tabulon::TextAlign::Center }),
        other => Err(Error::new(
            span,
            format!(
                "invalid align value: '{}'. Expected 'left', 'right', or 'center'",
                other
            ),
        )),
    }
}
