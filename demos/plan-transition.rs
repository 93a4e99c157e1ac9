use std::{env, process};

use text_transition::{
    IdGenerator, MonospaceMeasurer, RenderNode, TransitionConfig, plan_transition,
};

/// Prints the edit script and the choreography of morphing one text into
/// another, measuring with a fixed-width font.
///
/// Run it with:
/// `cargo run --example plan-transition "the quick fox" "the quick brown fox" [duration_ms]`
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: plan-transition <from> <to> [duration_ms]");
        process::exit(1);
    }

    let duration_ms = args.get(3).map_or(Ok(1000.0), |arg| arg.parse::<f64>()).unwrap_or_else(|e| {
        eprintln!("Invalid duration: {}", e);
        process::exit(1);
    });

    let config = TransitionConfig::default().with_duration_ms(duration_ms);
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        process::exit(1);
    }

    let mut ids = IdGenerator::new();
    let from = (*config.tokenizer)(&args[1], &mut ids);
    let to = (*config.tokenizer)(&args[2], &mut ids);

    let plan = plan_transition(&from, &to, &MonospaceMeasurer::new(10.0), &config, &mut ids);

    println!("Operations:");
    for operation in &plan.operations {
        println!("  {:?} {:?}", operation.kind(), operation.text());
    }

    println!(
        "Timeline (stagger scale {:.3}, settles at {}ms):",
        plan.timeline.stagger_scale(),
        plan.timeline.settle_at_ms()
    );
    for node in plan.timeline.nodes() {
        match node {
            RenderNode::Static { token, state } => {
                println!("  static   {:?} ({:?})", token.original(), state);
            }
            RenderNode::Collapse { tokens, width, .. } => {
                let text: String = tokens.iter().map(|token| token.original()).collect();
                println!(
                    "  collapse {:?} from {}ms to {}ms",
                    text,
                    width.delay_ms,
                    width.end_ms()
                );
            }
            RenderNode::Grow { text, width, .. } => {
                println!(
                    "  grow     {:?} from {}ms to {}ms",
                    text,
                    width.delay_ms,
                    width.end_ms()
                );
            }
        }
    }
}
