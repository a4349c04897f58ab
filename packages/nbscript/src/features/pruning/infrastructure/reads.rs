/*
 * READS Analysis - names used in a read context
 *
 * Walks the whole cell (nested scopes included) and collects every identifier
 * that is loaded. Targets of assignments, loops, comprehensions, walrus and
 * `as` clauses are stores; attribute members, keyword-argument names,
 * definition and parameter names, imports and global/nonlocal declarations
 * are not name references at all.
 *
 * The object of an attribute or subscript target is still a read:
 * `x.a = 1` and `x[0] = 1` both read `x`.
 */

use std::collections::BTreeSet;

use tree_sitter::Node;

use crate::shared::utils::tree_sitter::{children, extract_node_text_owned, is_field_child};

/// Collect every name read anywhere in the tree
pub fn collect_used_names(root: &Node, source: &str) -> BTreeSet<String> {
    let mut used = BTreeSet::new();
    visit_load(root, source, &mut used);
    used
}

fn visit_load(node: &Node, source: &str, used: &mut BTreeSet<String>) {
    match node.kind() {
        "identifier" | "keyword_identifier" if node.named_child_count() == 0 => {
            used.insert(extract_node_text_owned(node, source));
        }

        // Name-free statements
        "import_statement"
        | "import_from_statement"
        | "future_import_statement"
        | "global_statement"
        | "nonlocal_statement"
        | "comment" => {}

        "assignment" | "augmented_assignment" | "for_statement" | "for_in_clause" => {
            for child in children(node) {
                if is_field_child(node, "left", &child) {
                    visit_store(&child, source, used);
                } else {
                    visit_load(&child, source, used);
                }
            }
        }

        "named_expression" => {
            for child in children(node) {
                if is_field_child(node, "name", &child) {
                    visit_store(&child, source, used);
                } else {
                    visit_load(&child, source, used);
                }
            }
        }

        "as_pattern" => {
            for child in children(node) {
                if is_field_child(node, "alias", &child) {
                    visit_store(&child, source, used);
                } else {
                    visit_load(&child, source, used);
                }
            }
        }

        "delete_statement" => {
            for child in children(node) {
                visit_store(&child, source, used);
            }
        }

        // obj.member: only the object is a name reference
        "attribute" => {
            if let Some(object) = node.child_by_field_name("object") {
                visit_load(&object, source, used);
            }
        }

        "keyword_argument" => {
            if let Some(value) = node.child_by_field_name("value") {
                visit_load(&value, source, used);
            }
        }

        "function_definition" | "class_definition" => {
            for child in children(node) {
                if !is_field_child(node, "name", &child) {
                    visit_load(&child, source, used);
                }
            }
        }

        "parameters" | "lambda_parameters" => visit_parameters(node, source, used),

        _ => {
            for child in children(node) {
                visit_load(&child, source, used);
            }
        }
    }
}

/// Store context: bare names are bound, not read
fn visit_store(node: &Node, source: &str, used: &mut BTreeSet<String>) {
    match node.kind() {
        "identifier" | "keyword_identifier" => {}

        "pattern_list"
        | "tuple_pattern"
        | "list_pattern"
        | "list_splat_pattern"
        | "as_pattern_target"
        | "parenthesized_expression"
        | "expression_list"
        | "tuple"
        | "list"
        | "list_splat" => {
            for child in children(node) {
                visit_store(&child, source, used);
            }
        }

        // attribute / subscript targets and anything unusual load their parts
        _ => visit_load(node, source, used),
    }
}

/// Parameter names are bindings; defaults and annotations are reads
fn visit_parameters(node: &Node, source: &str, used: &mut BTreeSet<String>) {
    for param in children(node) {
        match param.kind() {
            "default_parameter" | "typed_parameter" | "typed_default_parameter" => {
                for field in ["type", "value"] {
                    if let Some(expr) = param.child_by_field_name(field) {
                        visit_load(&expr, source, used);
                    }
                }
            }
            "identifier"
            | "list_splat_pattern"
            | "dictionary_splat_pattern"
            | "tuple_pattern"
            | "keyword_separator"
            | "positional_separator" => {}
            _ => visit_load(&param, source, used),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn used_names(code: &str) -> Vec<String> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::language())
            .unwrap();
        let tree = parser.parse(code, None).unwrap();
        collect_used_names(&tree.root_node(), code)
            .into_iter()
            .collect()
    }

    #[test]
    fn test_simple_read() {
        assert_eq!(used_names("x = 5\nprint(x)\n"), vec!["print", "x"]);
    }

    #[test]
    fn test_assignment_target_is_not_read() {
        assert_eq!(used_names("x = 5\nprint(1)\n"), vec!["print"]);
    }

    #[test]
    fn test_augmented_target_is_not_read() {
        assert_eq!(used_names("x += y\n"), vec!["y"]);
    }

    #[test]
    fn test_attribute_and_subscript_targets_read_object() {
        assert_eq!(used_names("obj.field = 1\n"), vec!["obj"]);
        assert_eq!(used_names("table[key] = 1\n"), vec!["key", "table"]);
    }

    #[test]
    fn test_attribute_member_is_not_a_name() {
        assert_eq!(used_names("np.array(values)\n"), vec!["np", "values"]);
    }

    #[test]
    fn test_keyword_argument_name_is_not_read() {
        assert_eq!(used_names("plot(data, color=red)\n"), vec!["data", "plot", "red"]);
    }

    #[test]
    fn test_function_names_and_params_are_not_reads() {
        let names = used_names("def f(a, b=default, *args, c: int = 2, **kw):\n    return a\n");
        assert_eq!(names, vec!["a", "default", "int"]);
    }

    #[test]
    fn test_lambda_parameters() {
        assert_eq!(used_names("key = lambda item: item[0]\n"), vec!["item"]);
        assert_eq!(used_names("key = lambda item: other\n"), vec!["other"]);
    }

    #[test]
    fn test_for_and_comprehension_targets() {
        assert_eq!(used_names("for i in items:\n    pass\n"), vec!["items"]);
        assert_eq!(used_names("[v for k, v in pairs]\n"), vec!["pairs", "v"]);
    }

    #[test]
    fn test_imports_are_not_reads() {
        assert!(used_names("import numpy as np\nfrom os import path\n").is_empty());
    }

    #[test]
    fn test_with_alias_is_store() {
        assert_eq!(used_names("with open(p) as fh:\n    pass\n"), vec!["open", "p"]);
    }

    #[test]
    fn test_walrus_name_is_store() {
        assert_eq!(used_names("if (n := len(a)) > 10:\n    pass\n"), vec!["a", "len"]);
    }

    #[test]
    fn test_nested_scope_reads_count() {
        assert_eq!(used_names("def g():\n    return total\n"), vec!["total"]);
    }

    #[test]
    fn test_fstring_interpolation_reads() {
        assert_eq!(used_names("print(f\"{score}\")\n"), vec!["print", "score"]);
    }
}
