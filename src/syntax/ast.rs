//! Syntax tree for Go type declarations.
//!
//! Only the declaration forms needed to describe an interface are modeled.
//! `Display` prints each node in the canonical form `gofmt` would produce,
//! which is the text stored in the signature model.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct File {
    pub decls: Vec<TypeSpec>,
}

/// `type Name[P C] T` or `type Name = T`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    pub name: String,
    pub type_params: Vec<Field>,
    pub alias: bool,
    pub ty: Type,
}

/// A parameter, result, type parameter or struct field.
///
/// `names` is empty for anonymous entries; several names share one type in
/// declarations such as `a, b int`.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub names: Vec<String>,
    pub ty: Type,
    /// Struct tags only
    pub tag: Option<String>,
}

impl Field {
    pub fn unnamed(ty: Type) -> Self {
        Self {
            names: Vec::new(),
            ty,
            tag: None,
        }
    }

    pub fn named(names: Vec<String>, ty: Type) -> Self {
        Self {
            names,
            ty,
            tag: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    pub params: Vec<Field>,
    pub results: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodSpec {
    pub name: String,
    pub type_params: Vec<Field>,
    pub sig: Signature,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InterfaceElem {
    Method(MethodSpec),
    /// Embedded interface or constraint term
    Embedded(Type),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Name {
        package: Option<String>,
        name: String,
        args: Vec<Type>,
    },
    Pointer(Box<Type>),
    Slice(Box<Type>),
    Array {
        len: Expr,
        elem: Box<Type>,
    },
    Map {
        key: Box<Type>,
        value: Box<Type>,
    },
    Chan {
        dir: ChanDir,
        elem: Box<Type>,
    },
    Func(Signature),
    Struct(Vec<Field>),
    Interface(Vec<InterfaceElem>),
    /// `...T`, last parameter only
    Variadic(Box<Type>),
    Paren(Box<Type>),
    /// `~T`
    Tilde(Box<Type>),
    /// `A | B`
    Union(Vec<Type>),
}

impl Type {
    pub fn named<S: Into<String>>(name: S) -> Self {
        Type::Name {
            package: None,
            name: name.into(),
            args: Vec::new(),
        }
    }
}

/// Constant expression, as written for an array length.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Identifier or literal
    Operand(String),
    Selector(Box<Expr>, String),
    Call(Box<Expr>, Vec<Expr>),
    Paren(Box<Expr>),
    Unary(UnaryOp, Box<Expr>),
    Binary(Box<Expr>, BinOp, Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Neg,
    Xor,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Neg => "-",
            UnaryOp::Xor => "^",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Or,
    Xor,
    Mul,
    Div,
    Rem,
    Shl,
    Shr,
    And,
    AndNot,
}

impl BinOp {
    /// Go operator precedence; only the additive (4) and multiplicative (5)
    /// levels occur in constant integer expressions.
    pub fn prec(self) -> u8 {
        match self {
            BinOp::Add | BinOp::Sub | BinOp::Or | BinOp::Xor => 4,
            _ => 5,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Or => "|",
            BinOp::Xor => "^",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Rem => "%",
            BinOp::Shl => "<<",
            BinOp::Shr => ">>",
            BinOp::And => "&",
            BinOp::AndNot => "&^",
        }
    }
}

/// Operator levels found in a binary expression, and the highest level at
/// which leaving out blanks would glue two operators into another token
/// (`a - -b`, `a & ^b`).
#[derive(Default)]
struct Levels {
    has4: bool,
    has5: bool,
    problem: u8,
}

impl Levels {
    fn merge(&mut self, other: Levels) {
        self.has4 |= other.has4;
        self.has5 |= other.has5;
        self.problem = self.problem.max(other.problem);
    }
}

fn walk_binary(x: &Expr, op: BinOp, y: &Expr) -> Levels {
    let mut levels = Levels::default();
    match op.prec() {
        4 => levels.has4 = true,
        _ => levels.has5 = true,
    }

    if let Expr::Binary(lx, lop, ly) = x {
        if lop.prec() >= op.prec() {
            levels.merge(walk_binary(lx, *lop, ly));
        }
    }
    match y {
        Expr::Binary(rx, rop, ry) if rop.prec() > op.prec() => {
            levels.merge(walk_binary(rx, *rop, ry))
        }
        Expr::Unary(uop, _) => match (op.symbol(), uop.symbol()) {
            ("-", "-") | ("+", "+") => levels.problem = levels.problem.max(4),
            ("&", "^") => levels.problem = 5,
            _ => {}
        },
        _ => {}
    }
    levels
}

/// Operators below the cutoff precedence are surrounded by blanks.
fn cutoff(x: &Expr, op: BinOp, y: &Expr, depth: usize) -> u8 {
    let levels = walk_binary(x, op, y);
    if levels.problem > 0 {
        return levels.problem + 1;
    }
    match (levels.has4 && levels.has5, depth == 1) {
        (true, true) => 5,
        (false, true) => 6,
        _ => 4,
    }
}

impl Expr {
    /// Prints the expression with gofmt's operator spacing: blanks around
    /// the loosest binding operators only, `N*2 + 1`.
    fn print(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        match self {
            Expr::Operand(text) => write!(f, "{}", text),
            Expr::Selector(x, sel) => {
                x.print(f, depth)?;
                write!(f, ".{}", sel)
            }
            Expr::Call(fun, args) => {
                let depth = if args.len() > 1 { depth + 1 } else { depth };
                fun.print(f, depth)?;
                write!(f, "(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    arg.print(f, depth)?;
                }
                write!(f, ")")
            }
            // `((x))` prints as `(x)`
            Expr::Paren(x) if matches!(**x, Expr::Paren(_)) => x.print(f, depth),
            Expr::Paren(x) => {
                write!(f, "(")?;
                x.print(f, depth.saturating_sub(1).max(1))?;
                write!(f, ")")
            }
            Expr::Unary(op, x) => {
                write!(f, "{}", op.symbol())?;
                x.print(f, depth)
            }
            Expr::Binary(x, op, y) => {
                let blank = if op.prec() < cutoff(x, *op, y, depth) { " " } else { "" };
                let same_level = matches!(**x, Expr::Binary(_, lop, _) if lop.prec() == op.prec());
                x.print(f, if same_level { depth } else { depth + 1 })?;
                write!(f, "{}{}{}", blank, op.symbol(), blank)?;
                y.print(f, depth + 1)
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f, 1)
    }
}

fn join<T: fmt::Display>(items: &[T], sep: &str) -> String {
    items.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(sep)
}

/// `(a int, b string)` style list contents, without the parentheses
pub fn field_list(fields: &[Field]) -> String {
    join(fields, ", ")
}

/// Result list as printed after a signature, including the leading space.
/// A single anonymous result stays unparenthesized.
pub fn result_list(results: &[Field]) -> String {
    match results {
        [] => String::new(),
        [single] if single.names.is_empty() => format!(" {}", single.ty),
        _ => format!(" ({})", field_list(results)),
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.names.is_empty() {
            write!(f, "{} ", self.names.join(", "))?;
        }
        write!(f, "{}", self.ty)?;
        if let Some(tag) = &self.tag {
            write!(f, " {}", tag)?;
        }
        Ok(())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}){}", field_list(&self.params), result_list(&self.results))
    }
}

impl fmt::Display for MethodSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.type_params.is_empty() {
            write!(f, "[{}]", field_list(&self.type_params))?;
        }
        write!(f, "{}", self.sig)
    }
}

impl fmt::Display for InterfaceElem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterfaceElem::Method(m) => write!(f, "{}", m),
            InterfaceElem::Embedded(t) => write!(f, "{}", t),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Name {
                package,
                name,
                args,
            } => {
                if let Some(package) = package {
                    write!(f, "{}.", package)?;
                }
                write!(f, "{}", name)?;
                if !args.is_empty() {
                    write!(f, "[{}]", join(args, ", "))?;
                }
                Ok(())
            }
            Type::Pointer(t) => write!(f, "*{}", t),
            Type::Slice(t) => write!(f, "[]{}", t),
            Type::Array { len, elem } => write!(f, "[{}]{}", len, elem),
            Type::Map { key, value } => write!(f, "map[{}]{}", key, value),
            Type::Chan { dir, elem } => match dir {
                ChanDir::Both => write!(f, "chan {}", elem),
                ChanDir::Send => write!(f, "chan<- {}", elem),
                ChanDir::Recv => write!(f, "<-chan {}", elem),
            },
            Type::Func(sig) => write!(f, "func{}", sig),
            Type::Struct(fields) if fields.is_empty() => write!(f, "struct{{}}"),
            Type::Struct(fields) => write!(f, "struct{{ {} }}", join(fields, "; ")),
            Type::Interface(elems) if elems.is_empty() => write!(f, "interface{{}}"),
            Type::Interface(elems) => write!(f, "interface{{ {} }}", join(elems, "; ")),
            Type::Variadic(t) => write!(f, "...{}", t),
            Type::Paren(t) => write!(f, "({})", t),
            Type::Tilde(t) => write!(f, "~{}", t),
            Type::Union(terms) => write!(f, "{}", join(terms, " | ")),
        }
    }
}
