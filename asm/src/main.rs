use color_print::cprintln;
use hackasm::{util, Assembly, Error};
use std::path::{Path, PathBuf};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file (.asm)
    input: String,

    /// Output file [default: <input>.hack]
    #[clap(short, long)]
    output: Option<String>,

    /// Dump assembly listing and symbols
    #[clap(short, long)]
    dump: bool,

    /// Print every translated instruction
    #[clap(short, long)]
    verbose: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("Hack Assembler");

    if let Err(err) = run(&args) {
        err.print_diag(&args.input);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    use std::io::Write;

    let input = Path::new(&args.input);
    if input.extension().and_then(|ext| ext.to_str()) != Some("asm") {
        return Err(Error::FileExt(args.input.clone()));
    }
    let output = match &args.output {
        Some(path) => PathBuf::from(path),
        None => input.with_extension("hack"),
    };

    println!("1. Read File");
    println!("  < {}", args.input);
    let source = std::fs::read_to_string(input)
        .map_err(|err| Error::FileOpen(args.input.clone(), err))?;

    println!("2. Resolve Symbols");
    let asm = Assembly::build(&source)?;
    if args.dump {
        util::print_symbols(&asm);
    }

    println!("3. Generate Binary");
    let out = output.display().to_string();
    println!("  > {}", out);
    let file = std::fs::File::create(&output).map_err(|err| Error::FileCreate(out.clone(), err))?;
    let mut writer = std::io::BufWriter::new(file);
    for (pc, (line, _, inst)) in asm.code.iter().enumerate() {
        writeln!(writer, "{}", inst.to_word()).map_err(|err| Error::FileWrite(out.clone(), err))?;
        if args.verbose {
            cprintln!("  <green>{:>5}</> {} {}", pc, inst.to_word(), line.code());
        }
    }
    writer
        .flush()
        .map_err(|err| Error::FileWrite(out.clone(), err))?;
    cprintln!("  <green>{}</> instructions", asm.code.len());

    if args.dump {
        util::print_dump(&asm, &args.input);
    }
    Ok(())
}
