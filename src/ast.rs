use std::{fmt, rc::Rc};

/// A parsed program: the ordered sequence of top-level statements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// A brace-delimited sequence of statements, used as the body of `if`
/// branches and function literals.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        /// The bound identifier.
        name:  String,
        /// The initializer.
        value: Expr,
    },
    /// `return <value>;`
    Return {
        /// The returned expression.
        value: Expr,
    },
    /// An expression evaluated for its result.
    Expression {
        /// The expression.
        value: Expr,
    },
    /// A nested block of statements sharing the enclosing scope.
    Block(Block),
}

/// An abstract syntax tree node representing an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier(String),
    /// A 64-bit signed integer literal.
    IntegerLiteral(i64),
    /// `true` or `false`.
    BooleanLiteral(bool),
    /// A string literal with escapes already resolved.
    StringLiteral(String),
    /// `[a, b, c]`
    ArrayLiteral(Vec<Self>),
    /// `{k: v, ...}` with pairs in source order.
    HashLiteral(Vec<(Self, Self)>),
    /// A prefix operation such as `-x` or `!ok`.
    Prefix {
        /// The operator.
        operator: PrefixOperator,
        /// The operand.
        operand:  Box<Self>,
    },
    /// A binary operation such as `a + b`.
    Infix {
        /// The operator.
        operator: InfixOperator,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
    },
    /// `if (<condition>) { ... } else { ... }`
    If {
        /// The condition.
        condition:   Box<Self>,
        /// Evaluated when the condition is truthy.
        consequence: Block,
        /// Evaluated otherwise, if present.
        alternative: Option<Block>,
    },
    /// `fn(<parameters>) { <body> }`
    ///
    /// The body is shared with every function value created from this
    /// literal.
    FunctionLiteral {
        /// Parameter names in declaration order.
        parameters: Rc<[String]>,
        /// The function body.
        body:       Rc<Block>,
    },
    /// `<callee>(<arguments>)`
    Call {
        /// The expression producing the function.
        callee:    Box<Self>,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Self>,
    },
    /// `<collection>[<index>]`
    Index {
        /// The array or hash being indexed.
        collection: Box<Self>,
        /// The index or key.
        index:      Box<Self>,
    },
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT (`!x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Not => f.write_str("!"),
            Self::Negate => f.write_str("-"),
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InfixOperator::{Add, Div, Equal, Greater, Less, Mod, Mul, NotEqual, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            Greater => ">",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

/// Writes statements in their canonical form, separated by a space.
///
/// `let` and `return` already end in `;`. An expression statement followed
/// by another statement gets a `;` as well, otherwise the next statement
/// could be folded into it (`a (b)` would re-parse as a call).
fn write_statements(f: &mut fmt::Formatter<'_>, statements: &[Statement]) -> fmt::Result {
    for (i, statement) in statements.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{statement}")?;
        if matches!(statement, Statement::Expression { .. } | Statement::Block(_))
           && i + 1 < statements.len()
        {
            f.write_str(";")?;
        }
    }
    Ok(())
}

/// Writes `{ <block> }`, or `{}` for an empty block.
fn write_braced(f: &mut fmt::Formatter<'_>, block: &Block) -> fmt::Result {
    if block.statements.is_empty() {
        f.write_str("{}")
    } else {
        write!(f, "{{ {block} }}")
    }
}

fn write_comma_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Writes a string literal back in source form, re-escaping what the lexer
/// resolved.
fn write_string_literal(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("\"")?;
    for ch in value.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            other => write!(f, "{other}")?,
        }
    }
    f.write_str("\"")
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { value } => write!(f, "{value}"),
            Self::Block(block) => write_braced(f, block),
        }
    }
}

/// Canonical, fully parenthesized rendering.
///
/// Re-parsing the rendered text yields a structurally equal tree.
///
/// # Example
/// ```
/// let (program, errors) = yoru::parse("-a * b + c[1]");
///
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "(((-a) * b) + (c[1]))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => f.write_str(name),
            Self::IntegerLiteral(value) => write!(f, "{value}"),
            Self::BooleanLiteral(value) => write!(f, "{value}"),
            Self::StringLiteral(value) => write_string_literal(f, value),
            Self::ArrayLiteral(elements) => {
                f.write_str("[")?;
                write_comma_separated(f, elements)?;
                f.write_str("]")
            },
            Self::HashLiteral(pairs) => {
                f.write_str("{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            },
            Self::Prefix { operator, operand } => write!(f, "({operator}{operand})"),
            Self::Infix { operator,
                          left,
                          right, } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if ({condition}) ")?;
                write_braced(f, consequence)?;
                if let Some(alternative) = alternative {
                    f.write_str(" else ")?;
                    write_braced(f, alternative)?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                f.write_str("fn(")?;
                write_comma_separated(f, parameters)?;
                f.write_str(") ")?;
                write_braced(f, body)
            },
            Self::Call { callee, arguments } => {
                write!(f, "{callee}(")?;
                write_comma_separated(f, arguments)?;
                f.write_str(")")
            },
            Self::Index { collection, index } => write!(f, "({collection}[{index}])"),
        }
    }
}
