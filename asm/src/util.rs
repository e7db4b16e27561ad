use crate::symbols::Ident;
use crate::Assembly;
use color_print::cformat;

pub fn print_dump(asm: &Assembly, path: &str) {
    println!(
        "{}+------[{}]{}",
        "-".repeat(25),
        path,
        "-".repeat(45usize.saturating_sub(path.len()))
    );
    for (pc, (line, stmt, inst)) in asm.code.iter().enumerate() {
        println!(
            "[{:04X}] {} | {:>4}:   {}",
            pc,
            inst.to_word(),
            line.no(),
            stmt.cformat()
        );
    }
    println!("{}+{}", "-".repeat(25), "-".repeat(55));
}

pub fn print_symbols(asm: &Assembly) {
    for (name, (kind, val)) in asm.symbols.iter() {
        let kind = match kind {
            Ident::Register | Ident::Predefined => continue,
            Ident::Label => cformat!("<green>label</>"),
            Ident::Variable => cformat!("<cyan>var  </>"),
        };
        println!("  {} {:>5} (0x{:04X}) {}", kind, val, val, name);
    }
}
