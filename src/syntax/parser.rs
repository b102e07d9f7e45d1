//! Recursive descent parser for Go type declarations.
//!
//! Follows Go's grammar for the subset that can appear in an interface
//! declaration: type specs (plain, generic, alias and grouped), every type
//! literal form, parameter lists with grouped names, and constraint unions.

use crate::syntax::ast::*;
use crate::syntax::lexer::lex;
use crate::syntax::token::{Position, Token, TokenKind};
use crate::syntax::{SyntaxError, SyntaxResult};

/// One comma separated entry of a parameter list, before names and types
/// are told apart.
enum Entry {
    /// A lone identifier: a parameter name or a type name, depending on the
    /// rest of the list
    Bare(String),
    Named(String, Type),
    /// A type without a name, with the index of its first token
    Anon(Type, usize),
}

pub struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> SyntaxResult<Self> {
        Ok(Self {
            source,
            tokens: lex(source)?,
            pos: 0,
        })
    }

    fn current(&self) -> &Token {
        // The lexer always terminates the stream with Eof
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn peek_kind(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn position(&self) -> Position {
        self.position_of(self.pos)
    }

    /// Line and column of the token at `index`, computed only for errors.
    fn position_of(&self, index: usize) -> Position {
        let token = &self.tokens[index.min(self.tokens.len() - 1)];
        Position::at(self.source, token.span.start)
    }

    fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn unexpected(&self, expected: &str) -> SyntaxError {
        let token = self.current();
        let found = match token.kind {
            TokenKind::Ident | TokenKind::IntLiteral | TokenKind::StringLiteral => {
                format!("{} {}", token.kind, token.text(self.source))
            }
            kind => kind.to_string(),
        };
        SyntaxError::UnexpectedToken {
            expected: expected.to_string(),
            found,
            pos: self.position(),
        }
    }

    fn expect(&mut self, kind: TokenKind) -> SyntaxResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(&kind.to_string()))
        }
    }

    fn expect_ident(&mut self) -> SyntaxResult<String> {
        let token = self.expect(TokenKind::Ident)?;
        Ok(token.text(self.source).to_string())
    }

    fn skip_semicolons(&mut self) {
        while self.eat(TokenKind::Semicolon) {}
    }

    /// Offset (relative to the current token) of the `]` matching the `[`
    /// at `open`.
    fn matching_bracket(&self, open: usize) -> Option<usize> {
        let mut depth = 0usize;
        let mut n = open;
        loop {
            match self.peek_kind(n) {
                TokenKind::LBracket => depth += 1,
                TokenKind::RBracket => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(n);
                    }
                }
                TokenKind::Eof => return None,
                _ => {}
            }
            n += 1;
        }
    }

    /// file = { "type" ( spec | "(" { spec ";" } ")" ) ";" }
    pub fn parse_file(&mut self) -> SyntaxResult<File> {
        let mut decls = Vec::new();
        self.skip_semicolons();

        while !self.check(TokenKind::Eof) {
            self.expect(TokenKind::Type)?;
            if self.eat(TokenKind::LParen) {
                loop {
                    self.skip_semicolons();
                    if self.eat(TokenKind::RParen) {
                        break;
                    }
                    decls.push(self.parse_type_spec()?);
                    if !self.check(TokenKind::RParen) {
                        self.expect(TokenKind::Semicolon)?;
                    }
                }
            } else {
                decls.push(self.parse_type_spec()?);
            }

            if !self.check(TokenKind::Eof) {
                self.expect(TokenKind::Semicolon)?;
            }
            self.skip_semicolons();
        }

        Ok(File { decls })
    }

    fn parse_type_spec(&mut self) -> SyntaxResult<TypeSpec> {
        let name = self.expect_ident()?;

        let type_params = if self.check(TokenKind::LBracket) && self.at_type_params() {
            self.parse_type_params()?
        } else {
            Vec::new()
        };

        let alias = self.eat(TokenKind::Assign);
        let ty = self.parse_type()?;

        Ok(TypeSpec {
            name,
            type_params,
            alias,
            ty,
        })
    }

    /// Tells `type A[T any] ...` apart from `type A [N]T`.
    fn at_type_params(&self) -> bool {
        if self.peek_kind(1) != TokenKind::Ident {
            return false;
        }
        match self.peek_kind(2) {
            // `[P *C]` reads as the array length `P * C` unless the
            // constraint is a type literal or more parameters follow
            TokenKind::Star => {
                !matches!(
                    self.peek_kind(3),
                    TokenKind::Ident | TokenKind::IntLiteral | TokenKind::LParen
                ) || self.bracket_has_comma()
            }
            TokenKind::Ident
            | TokenKind::Comma
            | TokenKind::Interface
            | TokenKind::Tilde
            | TokenKind::LBracket
            | TokenKind::Func
            | TokenKind::Map
            | TokenKind::Chan
            | TokenKind::Struct
            | TokenKind::LParen
            | TokenKind::Arrow => true,
            _ => false,
        }
    }

    /// Whether the brackets opened by the current token hold a top level
    /// comma.
    fn bracket_has_comma(&self) -> bool {
        let end = match self.matching_bracket(0) {
            Some(end) => end,
            None => return false,
        };
        let mut depth = 0usize;
        for n in 1..end {
            match self.peek_kind(n) {
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => depth += 1,
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                    depth = depth.saturating_sub(1)
                }
                TokenKind::Comma if depth == 0 => return true,
                _ => {}
            }
        }
        false
    }

    fn parse_type_params(&mut self) -> SyntaxResult<Vec<Field>> {
        self.expect(TokenKind::LBracket)?;
        let fields = self.parse_field_list(TokenKind::RBracket, true)?;
        self.expect(TokenKind::RBracket)?;

        if fields.iter().any(|f| f.names.is_empty()) {
            return Err(SyntaxError::UnexpectedToken {
                expected: "type parameter name".to_string(),
                found: "type".to_string(),
                pos: self.position(),
            });
        }
        Ok(fields)
    }

    pub fn parse_type(&mut self) -> SyntaxResult<Type> {
        match self.current().kind {
            TokenKind::Ident => self.parse_type_name(),
            TokenKind::Star => {
                self.advance();
                Ok(Type::Pointer(Box::new(self.parse_type()?)))
            }
            TokenKind::LBracket => {
                self.advance();
                if self.eat(TokenKind::RBracket) {
                    return Ok(Type::Slice(Box::new(self.parse_type()?)));
                }
                let len = self.parse_expr()?;
                self.expect(TokenKind::RBracket)?;
                Ok(Type::Array {
                    len,
                    elem: Box::new(self.parse_type()?),
                })
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_type()?;
                self.expect(TokenKind::RParen)?;
                Ok(Type::Paren(Box::new(inner)))
            }
            TokenKind::Func => {
                self.advance();
                Ok(Type::Func(self.parse_signature()?))
            }
            TokenKind::Map => {
                self.advance();
                self.expect(TokenKind::LBracket)?;
                let key = self.parse_type()?;
                self.expect(TokenKind::RBracket)?;
                Ok(Type::Map {
                    key: Box::new(key),
                    value: Box::new(self.parse_type()?),
                })
            }
            TokenKind::Chan => {
                self.advance();
                let dir = if self.eat(TokenKind::Arrow) {
                    ChanDir::Send
                } else {
                    ChanDir::Both
                };
                Ok(Type::Chan {
                    dir,
                    elem: Box::new(self.parse_type()?),
                })
            }
            TokenKind::Arrow => {
                self.advance();
                self.expect(TokenKind::Chan)?;
                Ok(Type::Chan {
                    dir: ChanDir::Recv,
                    elem: Box::new(self.parse_type()?),
                })
            }
            TokenKind::Struct => self.parse_struct(),
            TokenKind::Interface => Ok(Type::Interface(self.parse_interface_body()?)),
            _ => Err(self.unexpected("type")),
        }
    }

    /// Name, qualified name or generic instantiation
    fn parse_type_name(&mut self) -> SyntaxResult<Type> {
        let mut package = None;
        let mut name = self.expect_ident()?;
        if self.eat(TokenKind::Dot) {
            package = Some(name);
            name = self.expect_ident()?;
        }

        let mut args = Vec::new();
        if self.check(TokenKind::LBracket) && self.peek_kind(1) != TokenKind::RBracket {
            self.advance();
            loop {
                if self.check(TokenKind::RBracket) {
                    break;
                }
                args.push(self.parse_type()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
            self.expect(TokenKind::RBracket)?;
        }

        Ok(Type::Name {
            package,
            name,
            args,
        })
    }

    /// Array lengths are constant expressions: `[N * 2]T`,
    /// `[unsafe.Sizeof(x)]T`.
    fn parse_expr(&mut self) -> SyntaxResult<Expr> {
        self.parse_binary_expr(1)
    }

    fn parse_binary_expr(&mut self, min_prec: u8) -> SyntaxResult<Expr> {
        let mut x = self.parse_unary_expr()?;
        while let Some(op) = binary_op(self.current().kind) {
            if op.prec() < min_prec {
                break;
            }
            self.advance();
            let y = self.parse_binary_expr(op.prec() + 1)?;
            x = Expr::Binary(Box::new(x), op, Box::new(y));
        }
        Ok(x)
    }

    fn parse_unary_expr(&mut self) -> SyntaxResult<Expr> {
        let op = match self.current().kind {
            TokenKind::Plus => UnaryOp::Plus,
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Caret => UnaryOp::Xor,
            _ => return self.parse_primary_expr(),
        };
        self.advance();
        Ok(Expr::Unary(op, Box::new(self.parse_unary_expr()?)))
    }

    fn parse_primary_expr(&mut self) -> SyntaxResult<Expr> {
        let mut x = match self.current().kind {
            TokenKind::Ident | TokenKind::IntLiteral | TokenKind::StringLiteral => {
                Expr::Operand(self.advance().text(self.source).to_string())
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                Expr::Paren(Box::new(inner))
            }
            _ => return Err(self.unexpected("array length")),
        };

        loop {
            if self.eat(TokenKind::Dot) {
                x = Expr::Selector(Box::new(x), self.expect_ident()?);
            } else if self.eat(TokenKind::LParen) {
                let mut args = Vec::new();
                while !self.check(TokenKind::RParen) {
                    args.push(self.parse_expr()?);
                    if !self.eat(TokenKind::Comma) {
                        break;
                    }
                }
                self.expect(TokenKind::RParen)?;
                x = Expr::Call(Box::new(x), args);
            } else {
                return Ok(x);
            }
        }
    }

    fn parse_signature(&mut self) -> SyntaxResult<Signature> {
        self.expect(TokenKind::LParen)?;
        let params = self.parse_field_list(TokenKind::RParen, false)?;
        self.expect(TokenKind::RParen)?;
        let results = self.parse_results()?;
        Ok(Signature { params, results })
    }

    fn parse_results(&mut self) -> SyntaxResult<Vec<Field>> {
        if self.eat(TokenKind::LParen) {
            let results = self.parse_field_list(TokenKind::RParen, false)?;
            self.expect(TokenKind::RParen)?;
            return Ok(results);
        }
        if self.current().kind.starts_type() {
            return Ok(vec![Field::unnamed(self.parse_type()?)]);
        }
        Ok(Vec::new())
    }

    /// Parses a comma separated parameter or type parameter list up to (but
    /// not including) `close`, resolving which identifiers are names.
    fn parse_field_list(&mut self, close: TokenKind, constraints: bool) -> SyntaxResult<Vec<Field>> {
        let start = self.pos;
        let mut entries = Vec::new();
        while !self.check(close) {
            entries.push(self.parse_entry(close, constraints)?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        let named = entries.iter().any(|e| matches!(e, Entry::Named(..)));
        if !named {
            return Ok(entries
                .into_iter()
                .map(|e| match e {
                    Entry::Bare(name) => Field::unnamed(Type::named(name)),
                    Entry::Anon(ty, _) => Field::unnamed(ty),
                    Entry::Named(..) => unreachable!(),
                })
                .collect());
        }

        // `a, b int, c string`: bare identifiers take the next declared type
        let mut fields = Vec::new();
        let mut pending = Vec::new();
        for entry in entries {
            match entry {
                Entry::Bare(name) => pending.push(name),
                Entry::Named(name, ty) => {
                    pending.push(name);
                    fields.push(Field::named(std::mem::take(&mut pending), ty));
                }
                Entry::Anon(_, index) => {
                    return Err(SyntaxError::MixedNames {
                        pos: self.position_of(index),
                    })
                }
            }
        }
        if !pending.is_empty() {
            return Err(SyntaxError::MixedNames {
                pos: self.position_of(start),
            });
        }
        Ok(fields)
    }

    fn parse_entry(&mut self, close: TokenKind, constraints: bool) -> SyntaxResult<Entry> {
        let start = self.pos;
        if !self.check(TokenKind::Ident) {
            return Ok(Entry::Anon(self.parse_entry_type(constraints)?, start));
        }

        let named = match self.peek_kind(1) {
            TokenKind::Dot => false,
            k if k == close || k == TokenKind::Comma => {
                let name = self.expect_ident()?;
                return Ok(Entry::Bare(name));
            }
            // `s []T` and `a [4]T` declare names, `List[T]` is a type
            TokenKind::LBracket => match self.matching_bracket(1) {
                Some(2) => true,
                Some(end) => {
                    let after = self.peek_kind(end + 1);
                    !(after == close || after == TokenKind::Comma || after == TokenKind::Pipe)
                }
                None => false,
            },
            TokenKind::Ellipsis | TokenKind::Tilde => true,
            k => k.starts_type(),
        };

        if named {
            let name = self.expect_ident()?;
            let ty = self.parse_entry_type(constraints)?;
            Ok(Entry::Named(name, ty))
        } else {
            Ok(Entry::Anon(self.parse_entry_type(constraints)?, start))
        }
    }

    fn parse_entry_type(&mut self, constraints: bool) -> SyntaxResult<Type> {
        if self.eat(TokenKind::Ellipsis) {
            return Ok(Type::Variadic(Box::new(self.parse_type()?)));
        }
        if constraints {
            self.parse_constraint()
        } else {
            self.parse_type()
        }
    }

    /// constraint = [ "~" ] type { "|" [ "~" ] type }
    fn parse_constraint(&mut self) -> SyntaxResult<Type> {
        let mut terms = vec![self.parse_term()?];
        while self.eat(TokenKind::Pipe) {
            terms.push(self.parse_term()?);
        }
        if terms.len() == 1 {
            Ok(terms.remove(0))
        } else {
            Ok(Type::Union(terms))
        }
    }

    fn parse_term(&mut self) -> SyntaxResult<Type> {
        if self.eat(TokenKind::Tilde) {
            Ok(Type::Tilde(Box::new(self.parse_type()?)))
        } else {
            self.parse_type()
        }
    }

    fn parse_struct(&mut self) -> SyntaxResult<Type> {
        self.expect(TokenKind::Struct)?;
        self.expect(TokenKind::LBrace)?;

        let mut fields = Vec::new();
        loop {
            self.skip_semicolons();
            if self.eat(TokenKind::RBrace) {
                break;
            }
            let mut field = self.parse_struct_field()?;
            if self.check(TokenKind::StringLiteral) {
                field.tag = Some(self.advance().text(self.source).to_string());
            }
            fields.push(field);
            if !self.check(TokenKind::RBrace) {
                self.expect(TokenKind::Semicolon)?;
            }
        }
        Ok(Type::Struct(fields))
    }

    fn parse_struct_field(&mut self) -> SyntaxResult<Field> {
        if !self.check(TokenKind::Ident) {
            return Ok(Field::unnamed(self.parse_type()?));
        }

        let embedded = match self.peek_kind(1) {
            TokenKind::Dot | TokenKind::Semicolon | TokenKind::RBrace | TokenKind::StringLiteral => {
                true
            }
            TokenKind::LBracket => match self.matching_bracket(1) {
                Some(2) => false,
                Some(end) => matches!(
                    self.peek_kind(end + 1),
                    TokenKind::Semicolon | TokenKind::RBrace | TokenKind::StringLiteral
                ),
                None => false,
            },
            _ => false,
        };
        if embedded {
            return Ok(Field::unnamed(self.parse_type()?));
        }

        let mut names = vec![self.expect_ident()?];
        while self.eat(TokenKind::Comma) {
            names.push(self.expect_ident()?);
        }
        Ok(Field::named(names, self.parse_type()?))
    }

    pub fn parse_interface_body(&mut self) -> SyntaxResult<Vec<InterfaceElem>> {
        self.expect(TokenKind::Interface)?;
        self.expect(TokenKind::LBrace)?;

        let mut elems = Vec::new();
        loop {
            self.skip_semicolons();
            if self.eat(TokenKind::RBrace) {
                break;
            }
            elems.push(self.parse_interface_elem()?);
            if !self.check(TokenKind::RBrace) {
                self.expect(TokenKind::Semicolon)?;
            }
        }
        Ok(elems)
    }

    fn parse_interface_elem(&mut self) -> SyntaxResult<InterfaceElem> {
        let is_method = self.check(TokenKind::Ident)
            && match self.peek_kind(1) {
                TokenKind::LParen => true,
                TokenKind::LBracket => self
                    .matching_bracket(1)
                    .map_or(false, |end| self.peek_kind(end + 1) == TokenKind::LParen),
                _ => false,
            };

        if !is_method {
            return Ok(InterfaceElem::Embedded(self.parse_constraint()?));
        }

        let name = self.expect_ident()?;
        let type_params = if self.check(TokenKind::LBracket) {
            self.parse_type_params()?
        } else {
            Vec::new()
        };
        let sig = self.parse_signature()?;

        Ok(InterfaceElem::Method(MethodSpec {
            name,
            type_params,
            sig,
        }))
    }
}

fn binary_op(kind: TokenKind) -> Option<BinOp> {
    let op = match kind {
        TokenKind::Plus => BinOp::Add,
        TokenKind::Minus => BinOp::Sub,
        TokenKind::Pipe => BinOp::Or,
        TokenKind::Caret => BinOp::Xor,
        TokenKind::Star => BinOp::Mul,
        TokenKind::Slash => BinOp::Div,
        TokenKind::Percent => BinOp::Rem,
        TokenKind::Shl => BinOp::Shl,
        TokenKind::Shr => BinOp::Shr,
        TokenKind::Amp => BinOp::And,
        TokenKind::AndNot => BinOp::AndNot,
        _ => return None,
    };
    Some(op)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> File {
        Parser::new(src).unwrap().parse_file().unwrap()
    }

    fn parse_err(src: &str) -> SyntaxError {
        match Parser::new(src).and_then(|mut p| p.parse_file()) {
            Ok(file) => panic!("expected an error, parsed {:?}", file),
            Err(e) => e,
        }
    }

    fn methods(src: &str) -> Vec<String> {
        let file = parse(src);
        match &file.decls[0].ty {
            Type::Interface(elems) => elems.iter().map(|e| e.to_string()).collect(),
            other => panic!("not an interface: {}", other),
        }
    }

    #[test]
    fn test_simple_interface() {
        let file = parse("type Foo interface {\n\tBar(int, string) error\n}\n");
        assert_eq!(file.decls.len(), 1);
        assert_eq!(file.decls[0].name, "Foo");
        assert!(!file.decls[0].alias);
        assert_eq!(
            methods("type Foo interface {\n\tBar(int, string) error\n}\n"),
            vec!["Bar(int, string) error"]
        );
    }

    #[test]
    fn test_single_line_interface() {
        assert_eq!(
            methods("type Foo interface { Bar(int, string) error; Baz() }"),
            vec!["Bar(int, string) error", "Baz()"]
        );
    }

    #[test]
    fn test_grouped_names() {
        let file = parse("type Foo interface { Add(a, b int, c string) (sum int, err error) }");
        let Type::Interface(elems) = &file.decls[0].ty else {
            panic!("not an interface");
        };
        let InterfaceElem::Method(method) = &elems[0] else {
            panic!("not a method");
        };
        assert_eq!(method.sig.params.len(), 2);
        assert_eq!(method.sig.params[0].names, vec!["a", "b"]);
        assert_eq!(method.sig.params[0].ty.to_string(), "int");
        assert_eq!(method.sig.params[1].names, vec!["c"]);
        assert_eq!(method.sig.results[1].names, vec!["err"]);
    }

    #[test]
    fn test_composite_types() {
        let src = "type Store interface {
	Get(ctx context.Context, keys []string) (map[string]*Item, error)
	Watch(done <-chan struct{}) chan<- Event
	Each(fn func(k string, v []byte) bool)
	Log(format string, args ...interface{})
	Digest(data [32]byte, n [pkg.Size]int)
	Page(p Page[Item, int]) List[*Item]
}";
        assert_eq!(
            methods(src),
            vec![
                "Get(ctx context.Context, keys []string) (map[string]*Item, error)",
                "Watch(done <-chan struct{}) chan<- Event",
                "Each(fn func(k string, v []byte) bool)",
                "Log(format string, args ...interface{})",
                "Digest(data [32]byte, n [pkg.Size]int)",
                "Page(p Page[Item, int]) List[*Item]",
            ]
        );
    }

    #[test]
    fn test_unnamed_generic_and_slices() {
        assert_eq!(
            methods("type Foo interface { Put(List[int], []string, ...error) }"),
            vec!["Put(List[int], []string, ...error)"]
        );
    }

    #[test]
    fn test_parenthesized_single_result() {
        assert_eq!(methods("type Foo interface { Len() (int) }"), vec!["Len() int"]);
    }

    #[test]
    fn test_method_type_params() {
        assert_eq!(
            methods("type Foo interface { Map[K comparable, V any](m map[K]V) []K }"),
            vec!["Map[K comparable, V any](m map[K]V) []K"]
        );
    }

    #[test]
    fn test_generic_interface_decl() {
        let file = parse("type Cache[K comparable, V ~int | ~string] interface { Get(K) V }");
        let spec = &file.decls[0];
        assert_eq!(spec.name, "Cache");
        assert_eq!(field_list(&spec.type_params), "K comparable, V ~int | ~string");
    }

    #[test]
    fn test_array_type_decl_is_not_generic() {
        let file = parse("type Buf [N]byte");
        assert!(file.decls[0].type_params.is_empty());
        assert_eq!(file.decls[0].ty.to_string(), "[N]byte");
    }

    #[test]
    fn test_array_length_expressions() {
        let src = "type Codec interface {
	Encode(buf [N * 2]byte, mask [1<<4]uint8) [unsafe.Sizeof(x)]T
	Pack([N*2+1]byte, [(N + 1) * 2]int, [a+b*c]bool, [-1 + N]rune)
}";
        assert_eq!(
            methods(src),
            vec![
                "Encode(buf [N * 2]byte, mask [1 << 4]uint8) [unsafe.Sizeof(x)]T",
                "Pack([N*2 + 1]byte, [(N + 1) * 2]int, [a + b*c]bool, [-1 + N]rune)",
            ]
        );
    }

    #[test]
    fn test_array_length_type_decl() {
        let file = parse("type Buf [N * 2]byte\ntype Set[P *Node, Q any] interface{}");
        assert!(file.decls[0].type_params.is_empty());
        assert_eq!(file.decls[0].ty.to_string(), "[N * 2]byte");
        assert_eq!(field_list(&file.decls[1].type_params), "P *Node, Q any");
    }

    #[test]
    fn test_bad_array_length() {
        let err = parse_err("type Foo interface { Bar([]]int) }");
        assert_eq!(err.to_string(), "1:28: expected type, found ']'");

        let err = parse_err("type Foo interface { Bar([N *]int) }");
        assert_eq!(err.to_string(), "1:30: expected array length, found ']'");
    }

    #[test]
    fn test_embedded_elements() {
        let file = parse("type RW interface {\n\tio.Reader\n\tWriter\n\t~int | string\n}");
        let Type::Interface(elems) = &file.decls[0].ty else {
            panic!("not an interface");
        };
        assert!(elems.iter().all(|e| matches!(e, InterfaceElem::Embedded(_))));
        assert_eq!(elems[2].to_string(), "~int | string");
    }

    #[test]
    fn test_grouped_and_alias_decls() {
        let file = parse("type (\n\tID int\n\tFoo = interface{ Bar() }\n)\ntype Baz struct{ A, B int `tag` }\n");
        let names: Vec<_> = file.decls.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["ID", "Foo", "Baz"]);
        assert!(file.decls[1].alias);
        assert_eq!(file.decls[2].ty.to_string(), "struct{ A, B int `tag` }");
    }

    #[test]
    fn test_comments_are_ignored() {
        let src = "// Foo does things.\ntype Foo interface {\n\t// Bar bars.\n\tBar() /* none */ error // trailing\n}\n";
        assert_eq!(methods(src), vec!["Bar() error"]);
    }

    #[test]
    fn test_mixed_named_and_unnamed() {
        let err = parse_err("type Foo interface { Bar(a int, string) }");
        assert!(matches!(err, SyntaxError::MixedNames { .. }), "{:?}", err);
    }

    #[test]
    fn test_mixed_names_position() {
        let err = parse_err("type Foo interface {\n\tBar(a int,\n\t\t[]string)\n}");
        assert_eq!(err, SyntaxError::MixedNames { pos: Position::new(3, 3) });

        // A trailing bare name is reported at the start of the list
        let err = parse_err("type Foo interface {\n\tBaz(x,\n\t\ty int, z)\n}");
        assert_eq!(err, SyntaxError::MixedNames { pos: Position::new(2, 6) });
    }

    #[test]
    fn test_unterminated_interface() {
        let err = parse_err("type Foo interface {\n\tBar(\n");
        assert!(matches!(err, SyntaxError::UnexpectedToken { .. }), "{:?}", err);
    }

    #[test]
    fn test_non_type_declaration() {
        let err = parse_err("func Foo() {}");
        assert_eq!(err.to_string(), "1:1: expected 'type', found 'func'");
    }
}
