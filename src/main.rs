use clap::Parser;
use poisson::cli::Args;
use poisson::solver::*;
use poisson::{build_info, init, output};

fn run(args: &Args) -> poisson::Result<()> {
    let config = args.config();
    config.validate()?;
    if config.debug {
        build_info::print_report("poisson", &config);
    }

    #[cfg(feature = "profile-with-puffin")]
    let _puffin_server = {
        let server_addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
        eprintln!("Run this to view profiling data:  puffin_viewer {server_addr}");
        profiling::puffin::set_scopes_on(true);
        puffin_http::Server::new(&server_addr).ok()
    };

    let source = init::point_source(config.size)?;
    let solver = JacobiSolver::new(config, &source)?;
    let result = solver.solve();

    #[cfg(feature = "profile-with-puffin")]
    profiling::finish_frame!();

    print!("{}", output::format_mid_slice(&result));
    Ok(())
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // Help and version go to stdout and are not failures.
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
