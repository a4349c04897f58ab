/*
 * WRITES Analysis - names bound in a cell
 *
 * Collects:
 * - simple assignment targets: x = 10, a = b = 1, x, y = 1, 2
 * - for-loop targets: for i in ...
 * - function and class names
 * - function parameter names (all kinds: plain, default, typed, *args, **kw)
 *
 * Annotated (x: int = 1) and augmented (x += 1) assignments are not simple
 * assignments and bind nothing here.
 */

use std::collections::BTreeSet;

use tree_sitter::Node;

use crate::shared::utils::tree_sitter::{children, extract_node_text_owned, named_children};

/// Collect every name bound anywhere in the tree
pub fn collect_defined_names(root: &Node, source: &str) -> BTreeSet<String> {
    let mut defined = BTreeSet::new();
    traverse_for_writes(root, source, &mut defined);
    defined
}

fn traverse_for_writes(node: &Node, source: &str, defined: &mut BTreeSet<String>) {
    match node.kind() {
        "assignment" if node.child_by_field_name("type").is_none() => {
            if let Some(left) = node.child_by_field_name("left") {
                let mut names = Vec::new();
                bound_names(&left, source, &mut names);
                defined.extend(names);
            }
        }

        "for_statement" => {
            if let Some(left) = node.child_by_field_name("left") {
                let mut names = Vec::new();
                bound_names(&left, source, &mut names);
                defined.extend(names);
            }
        }

        "function_definition" => {
            if let Some(name) = node.child_by_field_name("name") {
                defined.insert(extract_node_text_owned(&name, source));
            }
            if let Some(params) = node.child_by_field_name("parameters") {
                extract_parameter_names(&params, source, defined);
            }
        }

        "class_definition" => {
            if let Some(name) = node.child_by_field_name("name") {
                defined.insert(extract_node_text_owned(&name, source));
            }
        }

        _ => {}
    }

    // Nested scopes count too
    for child in children(node) {
        traverse_for_writes(&child, source, defined);
    }
}

/// Names bound by an assignment/loop target
///
/// Returns `false` when the target also contains something other than plain
/// names (attributes, subscripts), i.e. assigning to it has effects beyond
/// binding the returned names.
pub fn bound_names(target: &Node, source: &str, names: &mut Vec<String>) -> bool {
    match target.kind() {
        "identifier" | "keyword_identifier" => {
            names.push(extract_node_text_owned(target, source));
            true
        }
        "pattern_list" | "tuple_pattern" | "list_pattern" | "list_splat_pattern"
        | "parenthesized_expression" => {
            let mut only_names = true;
            for child in named_children(target) {
                if child.kind() == "comment" {
                    continue;
                }
                only_names &= bound_names(&child, source, names);
            }
            only_names
        }
        _ => false,
    }
}

fn extract_parameter_names(params: &Node, source: &str, defined: &mut BTreeSet<String>) {
    for param in named_children(params) {
        match param.kind() {
            "identifier" => {
                defined.insert(extract_node_text_owned(&param, source));
            }
            "default_parameter" | "typed_default_parameter" => {
                if let Some(name) = param.child_by_field_name("name") {
                    let mut names = Vec::new();
                    bound_names(&name, source, &mut names);
                    defined.extend(names);
                }
            }
            // typed_parameter has no name field: `x: int`, `*args: int`
            "typed_parameter" | "list_splat_pattern" | "dictionary_splat_pattern" => {
                for child in named_children(&param) {
                    match child.kind() {
                        "identifier" => {
                            defined.insert(extract_node_text_owned(&child, source));
                        }
                        "list_splat_pattern" | "dictionary_splat_pattern" => {
                            for inner in named_children(&child) {
                                if inner.kind() == "identifier" {
                                    defined.insert(extract_node_text_owned(&inner, source));
                                }
                            }
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn parse_python(code: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::language())
            .unwrap();
        parser.parse(code, None).unwrap()
    }

    fn defined_names(code: &str) -> Vec<String> {
        let tree = parse_python(code);
        collect_defined_names(&tree.root_node(), code)
            .into_iter()
            .collect()
    }

    #[test]
    fn test_simple_and_chained_assignment() {
        assert_eq!(defined_names("x = 1\na = b = 2\n"), vec!["a", "b", "x"]);
    }

    #[test]
    fn test_tuple_assignment_binds_all_names() {
        assert_eq!(defined_names("a, (b, *rest) = data\n"), vec!["a", "b", "rest"]);
    }

    #[test]
    fn test_attribute_target_binds_nothing() {
        assert!(defined_names("obj.x = 1\nd['k'] = 2\n").is_empty());
    }

    #[test]
    fn test_annotated_and_augmented_bind_nothing() {
        assert!(defined_names("x: int = 1\ny += 1\n").is_empty());
    }

    #[test]
    fn test_for_target() {
        assert_eq!(defined_names("for i in range(3):\n    pass\n"), vec!["i"]);
    }

    #[test]
    fn test_function_name_and_parameters() {
        let names = defined_names("def f(a, b=1, *args, c: int = 2, d: str, **kw):\n    pass\n");
        assert_eq!(names, vec!["a", "args", "b", "c", "d", "f", "kw"]);
    }

    #[test]
    fn test_class_name_and_nested_method() {
        let names = defined_names("class Model:\n    def fit(self):\n        self.w = 0\n");
        assert_eq!(names, vec!["Model", "fit", "self"]);
    }

    #[test]
    fn test_bound_names_flags_opaque_elements() {
        let code = "a, obj.x = 1, 2\n";
        let tree = parse_python(code);
        let stmt = tree.root_node().named_child(0).unwrap();
        let assignment = stmt.named_child(0).unwrap();
        let left = assignment.child_by_field_name("left").unwrap();

        let mut names = Vec::new();
        assert!(!bound_names(&left, code, &mut names));
        assert_eq!(names, vec!["a"]);
    }
}
