use std::path::PathBuf;

use clap::Parser as ClapParser;
use muinstr::modules::{
    BasicBlock, Function, Module,
    control_flow::Ret,
    instructions::MuInstr,
    int::IAdd,
    misc::{Call, IntrinsicKind},
    operand::{Label, Operand},
    symbol::FuncId,
};
use mucore::{
    config::ScanConfig,
    oracle::{OracleError, PatternOracle},
    scan::run_scan,
    utils::error::MuError,
};

#[derive(ClapParser)]
pub struct Arguments {
    /// Path of the result file to write
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML manifest describing the scan (instead of --output)
    #[arg(long, conflicts_with = "output")]
    config: Option<PathBuf>,

    /// Override the parallelism base
    #[arg(short = 'j', long)]
    workers: Option<usize>,

    /// Override the oversubscription multiplier
    #[arg(long)]
    oversubscription: Option<usize>,

    /// Flush the result file after every record batch
    #[arg(long)]
    eager_flush: bool,
}

/// Reports every forwarded call site as one match record.
struct CallSiteReporter;

impl PatternOracle for CallSiteReporter {
    fn look_for_pattern(&self, instr: &MuInstr) -> Result<Vec<String>, OracleError> {
        let Some(call) = instr.try_as_call_ref() else {
            return Ok(Vec::new());
        };

        let target = match call.callee {
            Some(callee) => callee.to_string(),
            None => "<indirect>".to_string(),
        };
        let args = call
            .args
            .iter()
            .map(|arg| arg.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Ok(vec![format!("callsite {}({})", target, args)])
    }
}

/// A small hand-built module exercising every filter outcome: a plain
/// call, an exempt memcpy builtin, a dropped builtin and an indirect
/// call.
fn demo_module() -> Module {
    let entry = |instructions| BasicBlock {
        label: Label::NIL,
        instructions,
        terminator: Ret { value: None }.into(),
    };

    Module {
        functions: vec![
            Function {
                name: "main".to_string(),
                defined: true,
                blocks: vec![entry(vec![
                    Call {
                        callee: Some(FuncId(1)),
                        intrinsic: IntrinsicKind::NonIntrinsic,
                        args: vec![Operand::Imm(1), Operand::Imm(2)],
                        dest: Some(1),
                    }
                    .into(),
                    Call {
                        callee: Some(FuncId(2)),
                        intrinsic: IntrinsicKind::MemCpy,
                        args: vec![Operand::Reg(1), Operand::Imm(16)],
                        dest: None,
                    }
                    .into(),
                    Call {
                        callee: Some(FuncId(3)),
                        intrinsic: IntrinsicKind::OtherIntrinsic,
                        args: vec![Operand::Reg(1)],
                        dest: None,
                    }
                    .into(),
                ])],
            },
            Function {
                name: "helper".to_string(),
                defined: true,
                blocks: vec![entry(vec![
                    IAdd {
                        dest: 2,
                        lhs: Operand::Imm(40),
                        rhs: Operand::Imm(2),
                    }
                    .into(),
                    Call {
                        callee: None,
                        intrinsic: IntrinsicKind::NonIntrinsic,
                        args: vec![Operand::Reg(2)],
                        dest: None,
                    }
                    .into(),
                ])],
            },
            Function {
                name: "memcpy".to_string(),
                defined: false,
                blocks: Vec::new(),
            },
            Function {
                name: "llvm.dbg.value".to_string(),
                defined: false,
                blocks: Vec::new(),
            },
        ],
    }
}

fn exit_code(error: &MuError) -> i32 {
    match error {
        MuError::SinkOpen { .. }
        | MuError::ManifestParse { .. }
        | MuError::InvalidWorkerCount { .. } => 2,
        MuError::Io(_) => 1,
    }
}

fn main() {
    env_logger::init();
    let args = Arguments::parse();

    let mut config = match (&args.config, &args.output) {
        (Some(manifest), _) => match ScanConfig::from_manifest(manifest) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Error: {}", error);
                std::process::exit(exit_code(&error));
            }
        },
        (None, Some(output)) => ScanConfig::new(output),
        (None, None) => {
            eprintln!("Error: either --output or --config is required");
            std::process::exit(2);
        }
    };

    if let Some(workers) = args.workers {
        config.parallelism_hint = Some(workers);
    }
    if let Some(oversubscription) = args.oversubscription {
        config.oversubscription = oversubscription;
    }
    if args.eager_flush {
        config.eager_flush = true;
    }

    let module = demo_module();
    let oracle = CallSiteReporter;

    match run_scan(&module, &oracle, &config) {
        Ok(report) => {
            println!(
                "Scanned {} functions with {} workers; wrote {} match records to {} ({} oracle failures)",
                report.eligible_functions,
                report.workers_spawned,
                report.records_emitted,
                config.output.display(),
                report.oracle_failures,
            );
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(exit_code(&error));
        }
    }
}
