use crate::parser::AstNode;


/// Renders one statement's AST as GW-BASIC source text.
///
/// `depth` is the nesting level of the line the statement starts on. The
/// returned text never indents its own first line (the enclosing block,
/// or the driver at depth 0, owns that prefix) and never ends with a
/// newline; block bodies are indented one tab per level below `depth`.
pub fn generate(node: &AstNode, depth: usize) -> String {
    let mut out = String::new();
    emit(node, depth, &mut out);
    out
}

fn emit(node: &AstNode, depth: usize, out: &mut String) {
    match node {
        AstNode::NumberLiteral(text) | AstNode::Identifier(text) => out.push_str(text),

        AstNode::StringLiteral(text) => {
            out.push('"');
            out.push_str(text);
            out.push('"');
        }

        AstNode::BinaryOp { left, op, right } => {
            emit(left, depth, out);
            out.push(' ');
            // GW-BASIC compares with a single `=`
            out.push_str(if op == "==" { "=" } else { op });
            out.push(' ');
            emit(right, depth, out);
        }

        AstNode::If {
            condition,
            then_body,
            else_body,
        } => {
            out.push_str("IF ");
            emit(condition, depth, out);
            out.push_str(" THEN");
            emit_body(then_body, depth + 1, out);
            if let Some(else_stmts) = else_body {
                // `else {}` collapses to nothing, matching the then/END IF pair
                if !else_stmts.is_empty() {
                    push_line(out, depth);
                    out.push_str("ELSE");
                    emit_body(else_stmts, depth + 1, out);
                }
            }
            push_line(out, depth);
            out.push_str("END IF");
        }

        AstNode::While { condition, body } => {
            out.push_str("WHILE ");
            emit(condition, depth, out);
            emit_body(body, depth + 1, out);
            push_line(out, depth);
            out.push_str("WEND");
        }

        AstNode::VarDecl { name, value } => {
            out.push_str("DIM ");
            emit(name, depth, out);
            out.push_str(" AS ");
            out.push_str(inferred_type(value));
        }

        AstNode::Assignment { target, value } => {
            emit(target, depth, out);
            out.push_str(" = ");
            emit(value, depth, out);
        }

        AstNode::Print { value } => {
            out.push_str("PRINT ");
            emit(value, depth, out);
        }

        AstNode::Input { prompt, target } => {
            out.push_str("INPUT ");
            emit(prompt, depth, out);
            out.push_str(" ; ");
            emit(target, depth, out);
        }

        AstNode::Comment(text) => {
            out.push_str("REM ");
            out.push_str(text);
        }

        AstNode::Exit => out.push_str("END"),
    }
}

/// Emits each statement of a block body on its own line at `depth`.
fn emit_body(statements: &[AstNode], depth: usize, out: &mut String) {
    for stmt in statements {
        push_line(out, depth);
        emit(stmt, depth, out);
    }
}

/// Starts a fresh line indented with `depth` tabs.
fn push_line(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push('\t');
    }
}

/// The DIM type keyword for a declaration, inferred from the literal kind
/// of the declared value. The only type inference in the whole pipeline.
fn inferred_type(value: &AstNode) -> &'static str {
    match value {
        AstNode::NumberLiteral(_) => "INTEGER",
        _ => "STRING",
    }
}
