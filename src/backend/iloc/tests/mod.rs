//! Tests for the ILOC instruction set and its text form

use crate::backend::iloc::{
    BinOp, ImmOp, Insn, InsnList, Label, LabelAllocator, Reg, UnaryOp, VirtualReg,
    VirtualRegAllocator,
};

fn r(n: u32) -> Reg {
    Reg::Virtual(VirtualReg(n))
}

#[test]
fn test_register_allocator_never_reuses() {
    let mut alloc = VirtualRegAllocator::new();

    let a = alloc.fresh();
    let b = alloc.fresh();
    let c = alloc.fresh();

    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);
    assert_eq!(alloc.count(), 3);
}

#[test]
fn test_function_labels_are_deterministic() {
    assert_eq!(Label::func("f"), Label::func("f"));
    assert_ne!(Label::func("f"), Label::func("g"));
}

#[test]
fn test_anonymous_labels_are_unique() {
    let mut alloc = LabelAllocator::new();
    assert_ne!(alloc.fresh(), alloc.fresh());
}

#[test]
fn test_insn_destinations() {
    assert_eq!(Insn::LoadI { value: 1, dst: r(0) }.dst(), Some(r(0)));
    assert_eq!(
        Insn::Store {
            src: r(0),
            addr: r(1),
        }
        .dst(),
        None
    );
    assert_eq!(Insn::Return.dst(), None);
    assert_eq!(Insn::Jump(Label::func("f")).dst(), None);
}

#[test]
fn test_insn_text_form() {
    assert_eq!(
        Insn::LoadI { value: 2, dst: r(1) }.to_string(),
        "loadI 2 => r1"
    );
    assert_eq!(
        Insn::I2i {
            src: r(2),
            dst: Reg::Ret,
        }
        .to_string(),
        "i2i r2 => ret"
    );
    assert_eq!(
        Insn::BinOp {
            op: BinOp::Add,
            lhs: r(1),
            rhs: r(2),
            dst: r(3),
        }
        .to_string(),
        "add r1, r2 => r3"
    );
    assert_eq!(
        Insn::BinOpI {
            op: ImmOp::AddI,
            lhs: r(1),
            imm: 3,
            dst: r(2),
        }
        .to_string(),
        "addI r1, 3 => r2"
    );
    assert_eq!(
        Insn::BinOpI {
            op: ImmOp::MultI,
            lhs: Reg::Base,
            imm: 8,
            dst: r(4),
        }
        .to_string(),
        "multI bp, 8 => r4"
    );
    assert_eq!(
        Insn::BinOp {
            op: BinOp::CmpLt,
            lhs: r(1),
            rhs: r(2),
            dst: r(3),
        }
        .to_string(),
        "cmp_lt r1, r2 => r3"
    );
    assert_eq!(
        Insn::UnaryOp {
            op: UnaryOp::Neg,
            src: r(1),
            dst: r(2),
        }
        .to_string(),
        "neg r1 => r2"
    );
    assert_eq!(
        Insn::Load {
            addr: r(1),
            dst: r(2),
        }
        .to_string(),
        "load r1 => r2"
    );
    assert_eq!(
        Insn::Store {
            src: r(1),
            addr: r(2),
        }
        .to_string(),
        "store r1 => r2"
    );
    assert_eq!(Insn::Label(Label::func("main")).to_string(), "main:");
    assert_eq!(Insn::Label(Label::Anon(0)).to_string(), "l0:");
    assert_eq!(Insn::Jump(Label::Anon(1)).to_string(), "jumpI -> l1");
    assert_eq!(
        Insn::Cbr {
            cond: r(1),
            taken: Label::Anon(0),
            not_taken: Label::Anon(1),
        }
        .to_string(),
        "cbr r1 -> l0, l1"
    );
    assert_eq!(Insn::Call(Label::func("f")).to_string(), "call f");
    assert_eq!(Insn::Return.to_string(), "return");
}

#[test]
fn test_list_text_form_indents_instructions() {
    let mut list = InsnList::new();
    list.push(Insn::Label(Label::func("f")));
    list.push(Insn::LoadI { value: 2, dst: r(1) });
    list.push(Insn::Return);

    assert_eq!(list.to_string(), "f:\n    loadI 2 => r1\n    return\n");
}

#[test]
fn test_list_append_preserves_order() {
    let mut head = InsnList::new();
    head.push(Insn::LoadI { value: 1, dst: r(0) });

    let mut tail = InsnList::new();
    tail.push(Insn::LoadI { value: 2, dst: r(1) });
    tail.push(Insn::Return);

    head.append(tail);

    let values: Vec<String> = head.iter().map(|i| i.to_string()).collect();
    assert_eq!(values, vec!["loadI 1 => r0", "loadI 2 => r1", "return"]);
}

#[test]
fn test_list_clone_is_a_deep_copy() {
    let mut original = InsnList::new();
    original.push(Insn::LoadI { value: 1, dst: r(0) });

    let copy = original.clone();
    original.push(Insn::Return);

    assert_eq!(copy.len(), 1);
    assert_eq!(original.len(), 2);
}
