//! Go declaration syntax: tokens, lexer, parser and the conversion from the
//! syntax tree to the signature model.

use log::debug;
use thiserror::Error;

use crate::models::{Arg, ArgName, Interface, Method};
use crate::syntax::ast::{Field, InterfaceElem, Type};
use crate::syntax::parser::Parser;
use crate::syntax::token::Position;

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("{pos}: unexpected character {ch:?}")]
    UnexpectedChar { ch: char, pos: Position },

    #[error("{pos}: expected {expected}, found {found}")]
    UnexpectedToken {
        expected: String,
        found: String,
        pos: Position,
    },

    #[error("{pos}: comment not terminated")]
    UnterminatedComment { pos: Position },

    #[error("{pos}: mixed named and unnamed parameters")]
    MixedNames { pos: Position },

    #[error("no interface type declared")]
    NoInterface,
}

pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Parse declaration text into the signature model of its first interface.
///
/// Later declarations are parsed (so they must be well formed) but ignored.
///
/// # Panics
///
/// Panics when the interface embeds another interface or a constraint term,
/// since only method signatures can be delegated.
pub fn parse_interface(source: &str) -> SyntaxResult<Interface> {
    let file = Parser::new(source)?.parse_file()?;
    debug!("Parsed {} type declaration(s)", file.decls.len());

    let (spec, elems) = file
        .decls
        .iter()
        .find_map(|d| match &d.ty {
            Type::Interface(elems) => Some((d, elems)),
            _ => None,
        })
        .ok_or(SyntaxError::NoInterface)?;

    let methods = elems
        .iter()
        .map(|elem| match elem {
            InterfaceElem::Method(m) => Method {
                name: m.name.clone(),
                type_params: args(&m.type_params),
                params: args(&m.sig.params),
                results: args(&m.sig.results),
            },
            InterfaceElem::Embedded(ty) => panic!(
                "interface {} member `{}` is not a method signature",
                spec.name, ty
            ),
        })
        .collect();

    Ok(Interface {
        name: spec.name.clone(),
        type_params: args(&spec.type_params),
        methods,
    })
}

/// One `Arg` per declared name; a shared type is repeated for each name.
fn args(fields: &[Field]) -> Vec<Arg> {
    let mut out = Vec::new();
    for field in fields {
        let ty = field.ty.to_string();
        if field.names.is_empty() {
            out.push(Arg::new(ArgName::Unnamed, ty));
            continue;
        }
        for name in &field.names {
            out.push(Arg::new(ArgName::from_ident(name), ty.clone()));
        }
    }
    out
}
