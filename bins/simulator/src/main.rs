use clap::{Parser, ValueEnum};

use algorithms::{
    bernstein_vazirani, deutsch, deutsch_jozsa, outcome_counts, simon_period, FunctionClass,
};
use quantum::measurement::measure;
use quantum::{Gate, Qubit};
use rng::ShakeRng;

/// State-vector quantum circuit simulator demos
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Demo to run: deutsch | deutsch-jozsa | bernstein-vazirani | simon | fourier | coin
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// RNG seed (full reproducibility)
    #[arg(long, default_value = "default-seed")]
    seed: String,

    /// Number of shots for the coin demo
    #[arg(long, default_value_t = 10000)]
    shots: usize,

    /// Hidden string for Bernstein–Vazirani
    #[arg(long, default_value_t = 25)]
    hidden: usize,

    /// Input register width for the oracle demos
    #[arg(long, default_value_t = 5)]
    wires: usize,
}

#[derive(ValueEnum, Clone, Debug)]
enum Mode {
    Deutsch,
    DeutschJozsa,
    BernsteinVazirani,
    Simon,
    Fourier,
    Coin,
}

fn class_name(class: FunctionClass) -> &'static str {
    match class {
        FunctionClass::Constant => "constant",
        FunctionClass::Balanced => "balanced",
    }
}

fn run_deutsch(rng: &mut ShakeRng) {
    for f in [[0, 0], [1, 1], [0, 1], [1, 0]] {
        let class = deutsch(&f, rng).expect("Deutsch circuit failed");
        println!("Deutsch f = {:?}: {}", f, class_name(class));
    }
}

fn run_deutsch_jozsa(rng: &mut ShakeRng) {
    let tables: [&[usize]; 4] = [
        &[0, 0, 0, 0],
        &[1, 1, 1, 1],
        &[0, 0, 1, 1],
        &[1, 0, 1, 0],
    ];
    for f in tables {
        let class = deutsch_jozsa(f, rng).expect("Deutsch-Jozsa circuit failed");
        println!("Deutsch-Jozsa f = {:?}: {}", f, class_name(class));
    }
}

fn run_bernstein_vazirani(hidden: usize, wires: usize, rng: &mut ShakeRng) {
    let recovered =
        bernstein_vazirani(hidden, wires, rng).expect("Bernstein-Vazirani circuit failed");
    println!(
        "Bernstein-Vazirani: hidden = {:0width$b}, recovered = {:0width$b}",
        hidden,
        recovered,
        width = wires
    );
}

fn run_simon(rng: &mut ShakeRng) {
    // Period 0b101 on 3 input wires; each pair {x, x ^ s} shares a value.
    let s = 0b101usize;
    let f: Vec<usize> = (0..8).map(|x: usize| x.min(x ^ s)).collect();
    match simon_period(&f, 3, rng, 24).expect("Simon circuit failed") {
        Some(period) => println!("Simon: recovered period {:03b} (actual {:03b})", period, s),
        None => println!("Simon: samples not yet independent, no unique period"),
    }
}

fn run_fourier() {
    let f = Gate::fourier(2);
    f.check_unitary("F(2)");
    println!("F(2) =\n{}", f);
    let uniform = f.apply(&Qubit::zero(2)).expect("QFT application failed");
    println!("F(2)|00⟩ =\n{}", uniform);
}

fn run_coin(shots: usize, seed: &str) {
    let coin = Gate::hadamard()
        .apply(&Qubit::zero(1))
        .expect("coin circuit failed");
    let counts = outcome_counts(&coin, shots, seed);
    println!(
        "Coin: {} shots, heads = {}, tails = {} (p_heads = {:.4})",
        shots,
        counts[1],
        counts[0],
        counts[1] as f64 / shots as f64
    );
}

fn main() {
    let args = Args::parse();
    let mut rng = ShakeRng::new(args.seed.as_bytes());

    match args.mode {
        None => {
            // Bell pair warm-up, then the whole tour.
            let h0 = Gate::hadamard().apply_to(0, 2).expect("H embedding failed");
            let plus = h0.apply(&Qubit::zero(2)).expect("H application failed");
            let bell = Gate::cnot().apply(&plus).expect("CNOT application failed");
            println!("Bell state:\n{}", bell);
            let mut collapsed = bell;
            let outcome = measure(&mut collapsed, &mut rng);
            println!("Bell measurement: {:02b}\n", outcome);

            run_deutsch(&mut rng);
            run_deutsch_jozsa(&mut rng);
            run_bernstein_vazirani(args.hidden, args.wires, &mut rng);
            run_simon(&mut rng);
            run_fourier();
            run_coin(args.shots, &args.seed);
        }
        Some(Mode::Deutsch) => run_deutsch(&mut rng),
        Some(Mode::DeutschJozsa) => run_deutsch_jozsa(&mut rng),
        Some(Mode::BernsteinVazirani) => {
            run_bernstein_vazirani(args.hidden, args.wires, &mut rng)
        }
        Some(Mode::Simon) => run_simon(&mut rng),
        Some(Mode::Fourier) => run_fourier(),
        Some(Mode::Coin) => run_coin(args.shots, &args.seed),
    }
}
