use indexmap::IndexMap;
use treematch_core::{Element, PredicateTable};

use crate::instruction::{GroupId, Instruction, Slot};
use crate::program::Program;

fn sample_program() -> Program {
    let mut names = IndexMap::new();
    names.insert("a".to_string(), GroupId(0));
    Program::new(
        vec![
            Instruction::Save(GroupId(0), Slot::Start),
            Instruction::Match(Element::from(1i64)),
            Instruction::Save(GroupId(0), Slot::End),
            Instruction::Halt,
        ],
        names,
        PredicateTable::new(),
    )
}

#[test]
fn group_lookup_roundtrips() {
    let program = sample_program();
    assert_eq!(program.group_id("a"), Some(GroupId(0)));
    assert_eq!(program.group_id("missing"), None);
    assert_eq!(program.group_count(), 1);
}

#[test]
fn group_names_preserve_declaration_order() {
    let program = sample_program();
    let names: Vec<_> = program.group_names().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["a"]);
}
