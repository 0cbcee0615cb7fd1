//! Drive a run step by step, the way an interactive view refreshes after
//! every emitted triangle.
//!
//! Usage:
//!   cargo run -p frontmesh --example step_through -- 12 7

use frontmesh::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let count: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(12);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(7);

    let pts = uniform_in_box(count, Bounds2::default(), ReplayToken::new(seed, 0));
    let mut run = match FrontRun::new(&pts, TriCfg::default()) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("cannot start: {e}");
            return;
        }
    };
    println!("hull has {} vertices", run.hull().len());
    loop {
        match run.step() {
            Ok(Step::Emitted(t)) => println!(
                "emit  ({:.1},{:.1}) ({:.1},{:.1}) ({:.1},{:.1})  front={}",
                t.a.x,
                t.a.y,
                t.b.x,
                t.b.y,
                t.c.x,
                t.c.y,
                run.front().len()
            ),
            Ok(Step::Discarded(e)) => println!(
                "drop  ({:.1},{:.1})-({:.1},{:.1})  front={}",
                e.start.x,
                e.start.y,
                e.end.x,
                e.end.y,
                run.front().len()
            ),
            Ok(Step::Done) => break,
            Err(e) => {
                eprintln!("run aborted: {e}");
                return;
            }
        }
    }
    let s = run.stats();
    println!(
        "done: {} steps, {} triangles, {} boundary edges",
        s.steps, s.emitted, s.discarded
    );
}
