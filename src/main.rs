use anyhow::{bail, Context, Result};
use average::Estimate;
use schedsim::{Discipline, Fcfs, Job, Sim, Sjf};
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    let trace = std::env::args().any(|arg| arg == "--trace");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let n: usize = prompt(&mut lines, "Number of jobs: ")?;
    let mut jobs = Vec::with_capacity(n);
    for i in 0..n {
        let (arrival, burst) =
            prompt_pair(&mut lines, &format!("Job {} arrival and burst: ", i + 1))?;
        jobs.push(Job {
            id: (i + 1) as u32,
            arrival,
            burst,
        });
    }

    report::<Fcfs>("First come first served", &jobs, trace);
    report::<Sjf>("Shortest job first", &jobs, trace);

    Ok(())
}

fn report<D: Discipline>(title: &str, jobs: &[Job], trace: bool) {
    let mut sim = Sim::<D>::new(jobs);
    while !sim.done() {
        let now = sim.now();
        for event in sim.step() {
            if trace {
                println!("[{}] t={} {:?}", D::NAME, now, event);
            }
        }
    }
    let result = sim.result();

    println!("{title}");
    print!("Order of scheduling:");
    for id in &result.order {
        print!(" {id}");
    }
    println!();
    println!("Average wait: {:.6}", result.wait_average);

    if !jobs.is_empty() {
        // Turnaround counts from arrival to the end of the final cycle
        let turnaround =
            sim.jobs_map(|slot| (slot.completion_time.unwrap() + 1 - slot.arrival) as f64);
        println!("Average turnaround: {:.2} cycles", avg(turnaround));
    }
    println!();
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<average::Mean>().estimate()
}

fn prompt<T>(lines: &mut impl Iterator<Item = io::Result<String>>, msg: &str) -> Result<T>
where
    T: std::str::FromStr,
{
    loop {
        print!("{msg}");
        io::stdout().flush().context("failed to flush prompt")?;
        let line = next_line(lines)?;
        match line.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Expected a non-negative integer, got {:?}", line.trim()),
        }
    }
}

fn prompt_pair(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    msg: &str,
) -> Result<(u64, u64)> {
    loop {
        print!("{msg}");
        io::stdout().flush().context("failed to flush prompt")?;
        let line = next_line(lines)?;
        let mut parts = line.split_whitespace();
        match (
            parts.next().map(str::parse::<u64>),
            parts.next().map(str::parse::<u64>),
            parts.next(),
        ) {
            (Some(Ok(arrival)), Some(Ok(burst)), None) => return Ok((arrival, burst)),
            _ => println!("Expected two non-negative integers, e.g. `2 5`"),
        }
    }
}

fn next_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<String> {
    match lines.next() {
        Some(line) => line.context("failed to read stdin"),
        None => bail!("input ended before a value was supplied"),
    }
}
