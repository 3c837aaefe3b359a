//! SQL keywords, punctuation and operators.

macro_rules! tokens {
    ($($(#[$meta:meta])* $name:ident => $text:literal),+ $(,)?) => {
        /// A fixed piece of SQL syntax.
        ///
        /// Tokens render verbatim; spacing between them is decided by
        /// [`SQL::write_to`](super::SQL::write_to).
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Token {
            $($(#[$meta])* $name,)+
        }

        impl Token {
            /// Returns the SQL text of the token.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Token::$name => $text,)+
                }
            }
        }
    };
}

tokens! {
    // Statements and clauses
    SELECT => "SELECT",
    DISTINCT => "DISTINCT",
    FROM => "FROM",
    WHERE => "WHERE",
    ORDER => "ORDER",
    BY => "BY",
    ASC => "ASC",
    DESC => "DESC",
    LIMIT => "LIMIT",
    OFFSET => "OFFSET",
    DELETE => "DELETE",
    INSERT => "INSERT",
    INTO => "INTO",
    VALUES => "VALUES",
    UPDATE => "UPDATE",
    SET => "SET",
    GROUP => "GROUP",
    HAVING => "HAVING",
    CREATE => "CREATE",
    TABLE => "TABLE",
    VIRTUAL => "VIRTUAL",
    USING => "USING",
    WITHOUT => "WITHOUT",
    ROWID => "ROWID",

    // Column constraints
    PRIMARY => "PRIMARY",
    KEY => "KEY",
    AUTOINCREMENT => "AUTOINCREMENT",
    UNIQUE => "UNIQUE",
    DEFAULT => "DEFAULT",
    CHECK => "CHECK",
    COLLATE => "COLLATE",

    // Predicates
    AND => "AND",
    OR => "OR",
    NOT => "NOT",
    IS => "IS",
    NULL => "NULL",
    IN => "IN",
    LIKE => "LIKE",
    ESCAPE => "ESCAPE",
    BETWEEN => "BETWEEN",
    EXISTS => "EXISTS",

    // Punctuation
    LPAREN => "(",
    RPAREN => ")",
    COMMA => ",",
    SEMI => ";",
    DOT => ".",
    STAR => "*",

    // Operators
    EQ => "=",
    NE => "<>",
    LT => "<",
    GT => ">",
    LE => "<=",
    GE => ">=",
    PLUS => "+",
    MINUS => "-",
    SLASH => "/",
    CONCAT => "||",
}

impl Token {
    /// Comparison, arithmetic and concatenation operators.
    ///
    /// `STAR` is not listed: it doubles as the `*` projection and renders like
    /// a word.
    pub const fn is_operator(&self) -> bool {
        matches!(
            self,
            Token::EQ
                | Token::NE
                | Token::LT
                | Token::GT
                | Token::LE
                | Token::GE
                | Token::PLUS
                | Token::MINUS
                | Token::SLASH
                | Token::CONCAT
        )
    }

    /// Punctuation that never takes a surrounding space on its own.
    pub const fn is_punctuation(&self) -> bool {
        matches!(
            self,
            Token::LPAREN | Token::RPAREN | Token::COMMA | Token::SEMI | Token::DOT
        )
    }
}

impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
