//! Module → Statement lowering and rendering
//!
//! Only the top level of the module is lowered; bodies of definitions and
//! control blocks stay opaque source text.

use tree_sitter::Node;

use crate::features::pruning::domain::{Assignment, Definition, Statement, Target, TargetKind};
use crate::features::pruning::infrastructure::writes::bound_names;
use crate::shared::utils::tree_sitter::{extract_node_text_owned, named_children};

/// Lower the top-level statements of a parsed module
///
/// A comment starting on the row where the previous statement ends belongs
/// to that statement.
pub fn lower_module(root: &Node, source: &str) -> Vec<Statement> {
    let mut statements: Vec<Statement> = Vec::new();
    let mut last_row = None;

    for node in named_children(root) {
        if node.kind() == "comment" && last_row == Some(node.start_position().row) {
            if let Some(prev) = statements.last_mut() {
                prev.attach_comment(extract_node_text_owned(&node, source));
                continue;
            }
        }
        last_row = Some(node.end_position().row);
        statements.push(lower_statement(&node, source));
    }

    statements
}

/// Render statements back to source, one per line
pub fn render_module(statements: &[Statement]) -> String {
    let mut out = String::new();
    for stmt in statements {
        out.push_str(&stmt.render());
        out.push('\n');
    }
    out
}

fn lower_statement(node: &Node, source: &str) -> Statement {
    match node.kind() {
        "expression_statement" => simple_assignment(node)
            .and_then(|assign| lower_assignment(&assign, source))
            .map(Statement::Assignment)
            .unwrap_or_else(|| Statement::Other(extract_node_text_owned(node, source))),
        "function_definition" => Statement::FunctionDef(lower_definition(node, node, source)),
        "class_definition" => Statement::ClassDef(lower_definition(node, node, source)),
        "decorated_definition" => match node.child_by_field_name("definition") {
            Some(def) if def.kind() == "function_definition" => {
                Statement::FunctionDef(lower_definition(node, &def, source))
            }
            Some(def) if def.kind() == "class_definition" => {
                Statement::ClassDef(lower_definition(node, &def, source))
            }
            _ => Statement::Other(extract_node_text_owned(node, source)),
        },
        _ => Statement::Other(extract_node_text_owned(node, source)),
    }
}

/// `x = ...` alone on its expression statement, without annotation
fn simple_assignment<'tree>(stmt: &Node<'tree>) -> Option<Node<'tree>> {
    if stmt.named_child_count() != 1 {
        return None;
    }
    let child = stmt.named_child(0)?;
    let is_simple = child.kind() == "assignment"
        && child.child_by_field_name("type").is_none()
        && child.child_by_field_name("right").is_some();
    is_simple.then_some(child)
}

/// Flatten `a = b = value` into targets `[a, b]` and `value`
fn lower_assignment(node: &Node, source: &str) -> Option<Assignment> {
    let mut targets = Vec::new();
    let mut current = *node;

    loop {
        let left = current.child_by_field_name("left")?;
        let right = current.child_by_field_name("right")?;
        targets.push(lower_target(&left, source));

        if right.kind() == "assignment" && right.child_by_field_name("type").is_none() {
            current = right;
            continue;
        }

        return Some(Assignment {
            targets,
            value: extract_node_text_owned(&right, source),
            comment: None,
        });
    }
}

fn lower_target(left: &Node, source: &str) -> Target {
    let text = extract_node_text_owned(left, source);
    let kind = match left.kind() {
        "identifier" | "keyword_identifier" => TargetKind::Name(text.clone()),
        _ => {
            let mut names = Vec::new();
            if bound_names(left, source, &mut names) {
                TargetKind::Pattern(names)
            } else {
                TargetKind::Opaque
            }
        }
    };
    Target { text, kind }
}

/// `outer` carries decorators, `def` the name
fn lower_definition(outer: &Node, def: &Node, source: &str) -> Definition {
    let name = def
        .child_by_field_name("name")
        .map(|n| extract_node_text_owned(&n, source))
        .unwrap_or_default();
    Definition {
        name,
        text: extract_node_text_owned(outer, source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tree_sitter::Parser;

    fn lower(code: &str) -> Vec<Statement> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::language())
            .unwrap();
        let tree = parser.parse(code, None).unwrap();
        lower_module(&tree.root_node(), code)
    }

    #[test]
    fn test_lower_simple_assignment() {
        let stmts = lower("x = 5\n");
        assert_eq!(
            stmts,
            vec![Statement::Assignment(Assignment {
                targets: vec![Target {
                    text: "x".into(),
                    kind: TargetKind::Name("x".into()),
                }],
                value: "5".into(),
                comment: None,
            })]
        );
    }

    #[test]
    fn test_lower_chained_assignment() {
        let stmts = lower("a = b = f(1)\n");
        match &stmts[0] {
            Statement::Assignment(assign) => {
                assert_eq!(assign.targets.len(), 2);
                assert_eq!(assign.value, "f(1)");
                assert_eq!(assign.render(), "a = b = f(1)");
            }
            other => panic!("expected assignment, got {:?}", other),
        }
    }

    #[test]
    fn test_lower_pattern_and_opaque_targets() {
        let stmts = lower("a, b = 1, 2\nobj.x = 3\n");
        let kinds: Vec<TargetKind> = stmts
            .iter()
            .filter_map(|s| match s {
                Statement::Assignment(a) => Some(a.targets[0].kind.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                TargetKind::Pattern(vec!["a".into(), "b".into()]),
                TargetKind::Opaque
            ]
        );
    }

    #[test]
    fn test_annotated_and_augmented_are_other() {
        let stmts = lower("x: int = 1\ny += 2\n");
        assert!(stmts.iter().all(|s| matches!(s, Statement::Other(_))));
    }

    #[test]
    fn test_lower_definitions() {
        let code = "@cache\ndef f(x):\n    y = 1\n    return x\n\nclass C:\n    pass\n";
        let stmts = lower(code);
        assert_eq!(stmts.len(), 2);
        match &stmts[0] {
            Statement::FunctionDef(def) => {
                assert_eq!(def.name, "f");
                assert!(def.text.starts_with("@cache\ndef f(x):"));
            }
            other => panic!("expected function, got {:?}", other),
        }
        assert!(matches!(&stmts[1], Statement::ClassDef(def) if def.name == "C"));
    }

    #[test]
    fn test_same_line_comment_attached() {
        let stmts = lower("x = 1  # note\nprint(2)  # shown\n# own line\n");
        assert_eq!(stmts.len(), 3);
        match &stmts[0] {
            Statement::Assignment(assign) => {
                assert_eq!(assign.comment.as_deref(), Some("# note"));
            }
            other => panic!("expected assignment, got {:?}", other),
        }
        assert_eq!(stmts[1], Statement::Other("print(2)  # shown".into()));
        assert_eq!(stmts[2], Statement::Other("# own line".into()));
    }

    #[test]
    fn test_render_one_statement_per_line() {
        let stmts = lower("x = 1; print(x)\n# note\n");
        assert_eq!(render_module(&stmts), "x = 1\nprint(x)\n# note\n");
    }
}
