#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    NumberLiteral(String),
    StringLiteral(String),
    Identifier(String),

    // 1 + 2 or a == 1; the right side may itself be a chain
    BinaryOp {
        left: Box<AstNode>,
        op: String,
        right: Box<AstNode>,
    },

    If {
        condition: Box<AstNode>,
        then_body: Vec<AstNode>,
        else_body: Option<Vec<AstNode>>,
    },

    While {
        condition: Box<AstNode>,
        body: Vec<AstNode>,
    },

    // `var x = 5;` -- becomes a DIM with an inferred type
    VarDecl {
        name: Box<AstNode>,
        value: Box<AstNode>,
    },

    // `x = 5;` -- plain re-assignment, no DIM
    Assignment {
        target: Box<AstNode>,
        value: Box<AstNode>,
    },

    Input {
        prompt: Box<AstNode>,
        target: Box<AstNode>,
    },

    Print {
        value: Box<AstNode>,
    },

    Comment(String),
    Exit,
}
