//! Demonstration program for the `delegates` crate.
//!
//! Binds a delegate to a function printing the sum of its arguments, invokes it, then keeps
//! reading integers from standard input until the sentinel value is entered.

use delegates::Delegate2;

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// First argument passed to the bound function.
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    lhs: i32,
    /// Second argument passed to the bound function.
    #[arg(long, default_value_t = 70, allow_negative_numbers = true)]
    rhs: i32,
    /// Reading standard input stops once this value is entered.
    #[arg(long, default_value_t = 1)]
    sentinel: u64,
    /// If set, exits immediately after invoking the delegate.
    #[arg(long)]
    no_wait: bool,
}

fn print_sum(lhs: i32, rhs: i32) {
    println!("{}", i64::from(lhs) + i64::from(rhs));
}

/// Reads one integer per line until `sentinel` is read or the input ends.
fn wait_for_sentinel<I: std::io::BufRead>(mut input: I, sentinel: u64) -> std::io::Result<()> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            tracing::info!("end of input reached before sentinel {sentinel}");
            return Ok(());
        }

        match line.trim().parse::<u64>() {
            Ok(value) if value == sentinel => {
                tracing::info!("sentinel {sentinel} entered, exiting");
                return Ok(());
            }
            Ok(value) => tracing::debug!(value, "ignoring value"),
            Err(error) => tracing::warn!(input = line.trim(), %error, "expected an integer"),
        }
    }
}

pub fn main() -> anyhow::Result<()> {
    use anyhow::Context;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let arguments = <Arguments as clap::Parser>::parse();

    let mut delegate: Delegate2<i32, i32> = Delegate2::new();
    delegate.bind_function(print_sum);
    tracing::debug!(?delegate, "bound delegate");

    delegate
        .invoke(arguments.lhs, arguments.rhs)
        .context("could not invoke delegate")?;

    if arguments.no_wait {
        return Ok(());
    }

    wait_for_sentinel(std::io::stdin().lock(), arguments.sentinel)
        .context("could not read from standard input")
}
