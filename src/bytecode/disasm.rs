use crate::bytecode::stack_check::{check_ops, max_depth};
use crate::bytecode::{Op, ProgramBc};

/// Print disassembly of a bytecode program
pub fn print_bc(bc: &ProgramBc) {
    print!("{}", disassemble(bc));
}

/// Render a program as a header followed by one numbered line per op.
pub fn disassemble(bc: &ProgramBc) -> String {
    let rule = "═".repeat(40);
    let depth = match check_ops(&bc.ops) {
        Ok(_) => format!(" max stack depth {}", max_depth(&bc.ops)),
        Err(e) => format!(" {}", e),
    };

    let mut lines = vec![
        rule.clone(),
        " main".to_string(),
        format!(" {} instructions", bc.len()),
        depth,
        rule,
    ];
    lines.extend(disassemble_ops(&bc.ops));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn disassemble_ops(ops: &[Op]) -> Vec<String> {
    ops.iter()
        .enumerate()
        .map(|(ip, op)| {
            let text = op.to_string();
            match op {
                Op::Store => format!("{:04}   {:<14}; ( slot value -- )", ip, text),
                Op::Load => format!("{:04}   {:<14}; ( slot -- value )", ip, text),
                _ => format!("{:04}   {}", ip, text),
            }
        })
        .collect()
}
