use serde::Serialize;

/// Result of comparing two named fragments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub left: String,
    pub right: String,
    pub equivalent: bool,
    /// The single differing pair, when the fragments differ in exactly one place.
    pub difference: Option<Difference>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Difference {
    pub left: String,
    pub right: String,
}

/// Fragments that are all mutually equivalent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateGroup {
    /// Fragment names, in input order. Every pair of members is equivalent.
    pub members: Vec<String>,
    /// Source text of the first member.
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// `if` whose then and else branches are equivalent.
    IdenticalIfBranches,
    /// `c ? a : b` with equivalent `a` and `b`.
    IdenticalConditionalBranches,
    /// `if (a) A else if (b) A else B`, or `if (a) A else if (b) B else A`.
    IdenticalElseIfBranches,
    /// Both branches of an `if` begin with equivalent statements.
    CommonHeadStatements,
    /// Both branches of an `if` end with equivalent statements.
    CommonTailStatements,
    /// The code after an exiting `if` without `else` repeats its branch.
    ImplicitElseDuplicate,
}

impl FindingKind {
    pub fn description(&self) -> &'static str {
        match self {
            FindingKind::IdenticalIfBranches => "'if' statement with identical branches",
            FindingKind::IdenticalConditionalBranches => "conditional expression with identical branches",
            FindingKind::IdenticalElseIfBranches => "'else if' branch repeats an earlier branch",
            FindingKind::CommonHeadStatements => "'if' branches start with the same statements",
            FindingKind::CommonTailStatements => "'if' branches end with the same statements",
            FindingKind::ImplicitElseDuplicate => "code after 'if' repeats its branch",
        }
    }
}

/// One inspection hit inside a fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub fragment: String,
    pub kind: FindingKind,
    /// Source text of the offending node.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum Report {
    Comparison(Comparison),
    Duplicates { groups: Vec<DuplicateGroup> },
    Findings { findings: Vec<Finding> },
}
