use indexmap::IndexMap;
use treematch_core::{Element, PredicateTable};

use crate::dump::dump;
use crate::instruction::{GroupId, Instruction, Slot};
use crate::program::Program;

#[test]
fn dump_lists_instructions_and_groups() {
    let mut names = IndexMap::new();
    names.insert("a".to_string(), GroupId(0));
    let program = Program::new(
        vec![
            Instruction::Save(GroupId(0), Slot::Start),
            Instruction::Match(Element::from(1i64)),
            Instruction::Save(GroupId(0), Slot::End),
            Instruction::Halt,
        ],
        names,
        PredicateTable::new(),
    );
    let text = dump(&program);
    assert!(text.contains("0: save g0,0"));
    assert!(text.contains("1: match 1"));
    assert!(text.contains("2: save g0,1"));
    assert!(text.contains("3: halt"));
    assert!(text.contains("a -> g0"));
}

#[test]
fn dump_omits_group_table_when_empty() {
    let program = Program::new(vec![Instruction::Halt], IndexMap::new(), PredicateTable::new());
    let text = dump(&program);
    assert!(!text.contains("groups:"));
}
