//! Pruning domain model
//!
//! A code cell is lowered into a flat list of top-level [`Statement`]s. Only the
//! [`Statement::Assignment`] variant is ever rewritten; everything else is
//! carried through as source text.

use std::collections::BTreeSet;

/// Top-level statement of one code cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `target = target = value`, no annotation
    Assignment(Assignment),
    /// `def` (possibly async and/or decorated)
    FunctionDef(Definition),
    /// `class` (possibly decorated)
    ClassDef(Definition),
    /// Any other statement, including comments
    Other(String),
}

impl Statement {
    /// Source text for this statement
    pub fn render(&self) -> String {
        match self {
            Statement::Assignment(assign) => assign.render(),
            Statement::FunctionDef(def) | Statement::ClassDef(def) => def.text.clone(),
            Statement::Other(text) => text.clone(),
        }
    }

    /// Attach a comment that shared the statement's last line
    ///
    /// An assignment keeps it separately so it goes away with the assignment.
    pub fn attach_comment(&mut self, comment: String) {
        match self {
            Statement::Assignment(assign) => assign.comment = Some(comment),
            Statement::FunctionDef(def) | Statement::ClassDef(def) => {
                def.text.push_str("  ");
                def.text.push_str(&comment);
            }
            Statement::Other(text) => {
                text.push_str("  ");
                text.push_str(&comment);
            }
        }
    }
}

/// Named definition, kept verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub name: String,
    pub text: String,
}

/// Simple (possibly chained) assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Targets in source order (`a = b = 1` has two)
    pub targets: Vec<Target>,
    /// Source text of the assigned value
    pub value: String,
    /// Comment on the same line (`x = 1  # note`)
    pub comment: Option<String>,
}

impl Assignment {
    pub fn render(&self) -> String {
        let mut out = String::new();
        for target in &self.targets {
            out.push_str(&target.text);
            out.push_str(" = ");
        }
        out.push_str(&self.value);
        if let Some(comment) = &self.comment {
            out.push_str("  ");
            out.push_str(comment);
        }
        out
    }

    /// Targets that would be removed for the given unused set
    pub fn dead_targets<'a>(
        &'a self,
        unused: &'a BTreeSet<String>,
    ) -> impl Iterator<Item = &'a Target> + 'a {
        self.targets.iter().filter(move |t| !t.is_live(unused))
    }
}

/// One assignment target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub text: String,
    pub kind: TargetKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetKind {
    /// Bare identifier
    Name(String),
    /// Tuple/list pattern made only of identifiers (possibly starred)
    Pattern(Vec<String>),
    /// Attribute, subscript, or a pattern containing one; binds no plain name
    Opaque,
}

impl Target {
    /// Whether the target survives pruning
    ///
    /// Patterns live as a whole when any of their names is still in use.
    pub fn is_live(&self, unused: &BTreeSet<String>) -> bool {
        match &self.kind {
            TargetKind::Name(name) => !unused.contains(name),
            TargetKind::Pattern(names) => {
                names.is_empty() || names.iter().any(|name| !unused.contains(name))
            }
            TargetKind::Opaque => true,
        }
    }
}

/// Names read and names bound in one cell (scope-unaware)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameUsage {
    pub used: BTreeSet<String>,
    pub defined: BTreeSet<String>,
}

impl NameUsage {
    /// `defined - used`
    pub fn unused(&self) -> BTreeSet<String> {
        self.defined.difference(&self.used).cloned().collect()
    }
}

/// Drop the dead targets of an assignment, or the whole assignment when none
/// survive. Every other statement passes through untouched.
pub fn retain_used(statement: Statement, unused: &BTreeSet<String>) -> Option<Statement> {
    match statement {
        Statement::Assignment(Assignment {
            targets,
            value,
            comment,
        }) => {
            let targets: Vec<Target> = targets.into_iter().filter(|t| t.is_live(unused)).collect();
            if targets.is_empty() {
                None
            } else {
                Some(Statement::Assignment(Assignment {
                    targets,
                    value,
                    comment,
                }))
            }
        }
        other => Some(other),
    }
}
